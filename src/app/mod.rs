// ==========================================
// 采购风险监测 - 应用层
// ==========================================
// 职责: 组装配置、存储与 API
// ==========================================

pub mod state;

// 重导出
pub use state::AppState;
