// ==========================================
// 采购风险监测 - 领域层
// ==========================================
// 职责: 实体与值类型，无 I/O
// ==========================================

pub mod algorithm;
pub mod contract;
pub mod statistics;
pub mod types;

pub use algorithm::{default_algorithms, AlgorithmMetric};
pub use contract::{ContractRecord, RiskIndicator};
pub use statistics::{BatchStatistics, DETECTION_ACCURACY};
pub use types::{ContractStatus, ExportFormat, RiskLevel, RiskThresholds};
