// ==========================================
// 采购风险监测 - 引擎层
// ==========================================
// 职责: 随机源抽象 / 风险评分规则 / 批次生成
// 红线: 引擎不读写算法元数据存储
// ==========================================

pub mod error;
pub mod generator;
pub mod random;
pub mod risk;

pub use error::{parse_count, GeneratorError, GeneratorResult};
pub use generator::{GeneratedBatch, RiskDataGenerator};
pub use random::{RngSource, SequenceSource, UniformSource};
pub use risk::{RiskAssessment, RiskEngine, RiskRule, RuleTrigger, RISK_RULES};
