// ==========================================
// 采购风险监测 - 仓储层
// ==========================================
// 职责: 内存数据访问，不含业务逻辑
// ==========================================

pub mod algorithm_store;
pub mod error;

pub use algorithm_store::AlgorithmStore;
pub use error::{RepositoryError, RepositoryResult};
