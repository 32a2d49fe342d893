// ==========================================
// 政府采购风险监测 - 核心库
// ==========================================
// 模拟采购合同数据生成 + 风险评分 + 看板数据访问
// 系统定位: 看板演示数据源（非真实欺诈检测）
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 随机源 / 风险规则 / 批次生成
pub mod engine;

// 数据仓储层 - 算法元数据存储
pub mod repository;

// 配置层 - 服务配置
pub mod config;

// API 层 - 看板数据访问
pub mod api;

// 应用层 - 状态组装
pub mod app;

// 批次输出 (JSON / CSV / 摘要)
pub mod output;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// 性能统计
pub mod perf;

// ==========================================
// 重导出核心类型
// ==========================================

pub use domain::{
    AlgorithmMetric, BatchStatistics, ContractRecord, ContractStatus, ExportFormat,
    RiskIndicator, RiskLevel, RiskThresholds,
};

pub use engine::{
    GeneratedBatch, GeneratorError, RiskDataGenerator, RiskEngine, RngSource, SequenceSource,
    UniformSource,
};

pub use api::{ApiError, ApiResult, ContractFilter, DashboardApi, DashboardDataSource};

pub use app::AppState;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "政府采购风险监测";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
