// ==========================================
// 采购风险监测 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和API实例
// ==========================================

use std::sync::Arc;

use crate::api::{ApiResult, DashboardApi};
use crate::config::{ConfigManager, ServiceConfig};
use crate::repository::AlgorithmStore;

/// 应用状态
///
/// 包含 API 实例和共享资源
pub struct AppState {
    /// 生效配置
    pub config: ServiceConfig,

    /// 算法元数据存储（仅 API 层持有）
    pub algorithm_store: Arc<AlgorithmStore>,

    /// 看板 API
    pub dashboard_api: Arc<DashboardApi>,
}

impl AppState {
    /// 创建新的AppState实例
    ///
    /// # 说明
    /// 该方法会：
    /// 1. 初始化算法元数据存储
    /// 2. 按配置生成合同批次
    /// 3. 创建看板 API
    pub async fn new(config: ServiceConfig) -> ApiResult<Self> {
        tracing::info!(
            batch_size = config.batch_size,
            seed = ?config.seed,
            "初始化AppState"
        );

        let algorithm_store = Arc::new(AlgorithmStore::default());
        let dashboard_api =
            Arc::new(DashboardApi::from_config(config.clone(), algorithm_store.clone()).await?);

        tracing::info!(
            total = dashboard_api.batch().statistics.total,
            "AppState初始化成功"
        );

        Ok(Self {
            config,
            algorithm_store,
            dashboard_api,
        })
    }

    /// 从配置管理器创建（环境变量 + 配置文件）
    pub async fn from_environment() -> anyhow::Result<Self> {
        let config = ConfigManager::load(None)?.into_config();
        Ok(Self::new(config).await?)
    }
}
