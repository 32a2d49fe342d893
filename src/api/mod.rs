// ==========================================
// 采购风险监测 - API 层
// ==========================================
// 职责: 提供看板数据访问接口
// ==========================================

pub mod dashboard_api;
pub mod error;
pub mod filters;

// 重导出核心类型
pub use dashboard_api::{DashboardApi, DashboardDataSource, DashboardOverview, EXPORT_DIR};
pub use error::{ApiError, ApiResult};
pub use filters::{parse_date, ContractFilter};
