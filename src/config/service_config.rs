use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 默认批次大小
pub const DEFAULT_BATCH_SIZE: i64 = 1000;

/// 默认请求超时（毫秒）
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 5_000;

/// 服务配置
///
/// 存储位置：JSON 文件（字段缺省时取默认值）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// 启动时生成的合同数量
    pub batch_size: i64,

    /// 随机种子（None 时使用系统熵）
    pub seed: Option<u64>,

    /// 模拟延迟
    pub latency: LatencyConfig,

    /// 单次请求超时（毫秒），超时返回 ServiceUnavailable
    pub request_timeout_ms: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            seed: None,
            latency: LatencyConfig::default(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

impl ServiceConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

/// 各接口的模拟网络延迟（毫秒）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatencyConfig {
    pub statistics_ms: u64,
    pub contracts_ms: u64,
    pub algorithms_ms: u64,
    pub updated_algorithms_ms: u64,
    pub toggle_ms: u64,
    pub export_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            statistics_ms: 500,
            contracts_ms: 300,
            algorithms_ms: 400,
            updated_algorithms_ms: 100,
            toggle_ms: 200,
            export_ms: 1000,
        }
    }
}

impl LatencyConfig {
    /// 全部为 0（测试 / 命令行使用）
    pub fn none() -> Self {
        Self {
            statistics_ms: 0,
            contracts_ms: 0,
            algorithms_ms: 0,
            updated_algorithms_ms: 0,
            toggle_ms: 0,
            export_ms: 0,
        }
    }
}
