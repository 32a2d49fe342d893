// ==========================================
// 采购风险监测 - 配置层
// ==========================================
// 职责: 服务配置（批次大小 / 种子 / 模拟延迟 / 超时）
// 存储: JSON 文件 + 环境变量覆写
// ==========================================

pub mod config_manager;
pub mod service_config;

pub use config_manager::{env_keys, get_default_config_path, ConfigError, ConfigManager};
pub use service_config::{LatencyConfig, ServiceConfig};
