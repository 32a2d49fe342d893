// ==========================================
// 采购风险监测 - 看板数据访问 API
// ==========================================
// 职责: 向看板提供统计 / 合同列表 / 算法元数据 / 导出
// 架构: API 层 → 生成批次（只读） + AlgorithmStore（可变）
// 模拟: 每个接口按配置延迟返回，超时返回 ServiceUnavailable
// ==========================================

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::api::error::{ApiError, ApiResult};
use crate::api::filters::ContractFilter;
use crate::config::ServiceConfig;
use crate::domain::algorithm::AlgorithmMetric;
use crate::domain::contract::ContractRecord;
use crate::domain::statistics::BatchStatistics;
use crate::domain::types::ExportFormat;
use crate::engine::generator::{GeneratedBatch, RiskDataGenerator};
use crate::perf::PerfGuard;
use crate::repository::algorithm_store::AlgorithmStore;
use crate::repository::error::RepositoryError;

/// 导出文件目录
pub const EXPORT_DIR: &str = "/downloads";

// ==========================================
// DashboardDataSource Trait
// ==========================================
// 用途: 看板层使用的数据访问接口
// 实现者: DashboardApi（内存模拟数据）
#[async_trait]
pub trait DashboardDataSource: Send + Sync {
    /// 批次统计
    async fn fetch_statistics(&self) -> ApiResult<BatchStatistics>;

    /// 合同列表（可选过滤）
    async fn fetch_contracts(&self, filter: Option<ContractFilter>)
        -> ApiResult<Vec<ContractRecord>>;

    /// 算法元数据
    async fn fetch_algorithm_metrics(&self) -> ApiResult<Vec<AlgorithmMetric>>;

    /// 切换算法后的快速重读
    async fn fetch_updated_algorithm_metrics(&self) -> ApiResult<Vec<AlgorithmMetric>>;

    /// 切换算法启用状态
    ///
    /// # 返回
    /// - Ok(true): 已更新
    /// - Ok(false): 算法不存在或名称为空
    async fn update_algorithm_toggle(&self, name: &str, enabled: bool) -> ApiResult<bool>;

    /// 导出（仅返回位置引用，不生成文件）
    async fn export_batch(&self, format: ExportFormat) -> ApiResult<String>;
}

/// 看板首屏数据
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub statistics: BatchStatistics,
    pub algorithms: Vec<AlgorithmMetric>,
}

// ==========================================
// DashboardApi - 看板 API
// ==========================================
pub struct DashboardApi {
    /// 启动时生成的批次（只读）
    batch: Arc<GeneratedBatch>,
    /// 算法元数据存储（生成器不访问）
    algorithm_store: Arc<AlgorithmStore>,
    config: ServiceConfig,
}

impl DashboardApi {
    pub fn new(
        batch: Arc<GeneratedBatch>,
        algorithm_store: Arc<AlgorithmStore>,
        config: ServiceConfig,
    ) -> Self {
        Self {
            batch,
            algorithm_store,
            config,
        }
    }

    /// 按配置生成批次并创建 API
    pub async fn from_config(
        config: ServiceConfig,
        algorithm_store: Arc<AlgorithmStore>,
    ) -> ApiResult<Self> {
        let generator = match config.seed {
            Some(seed) => RiskDataGenerator::seeded(seed),
            None => RiskDataGenerator::from_entropy(),
        };
        let (_, batch) = generator.generate_async(config.batch_size).await?;
        Ok(Self::new(Arc::new(batch), algorithm_store, config))
    }

    pub fn batch(&self) -> &GeneratedBatch {
        &self.batch
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// 首屏数据（统计与算法元数据并发获取）
    pub async fn fetch_overview(&self) -> ApiResult<DashboardOverview> {
        let (statistics, algorithms) =
            futures::join!(self.fetch_statistics(), self.fetch_algorithm_metrics());
        Ok(DashboardOverview {
            statistics: statistics?,
            algorithms: algorithms?,
        })
    }

    /// 模拟网络延迟 + 超时
    async fn simulate<T, F>(&self, op: &'static str, delay_ms: u64, work: F) -> ApiResult<T>
    where
        F: FnOnce() -> ApiResult<T> + Send,
        T: Send,
    {
        let _perf = PerfGuard::new(op);
        let delayed = async move {
            if delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            }
            work()
        };

        let timeout = self.config.request_timeout();
        match tokio::time::timeout(timeout, delayed).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(
                    op,
                    timeout_ms = timeout.as_millis() as u64,
                    "请求超时"
                );
                Err(ApiError::ServiceUnavailable(format!(
                    "{} 超时（{}ms）",
                    op,
                    timeout.as_millis()
                )))
            }
        }
    }
}

#[async_trait]
impl DashboardDataSource for DashboardApi {
    async fn fetch_statistics(&self) -> ApiResult<BatchStatistics> {
        let batch = self.batch.clone();
        self.simulate("fetch_statistics", self.config.latency.statistics_ms, move || {
            Ok(batch.statistics.clone())
        })
        .await
    }

    async fn fetch_contracts(
        &self,
        filter: Option<ContractFilter>,
    ) -> ApiResult<Vec<ContractRecord>> {
        let batch = self.batch.clone();
        self.simulate("fetch_contracts", self.config.latency.contracts_ms, move || {
            let contracts = match filter {
                Some(filter) => filter.apply(&batch.contracts)?,
                None => batch.contracts.clone(),
            };
            tracing::debug!(count = contracts.len(), "合同列表查询完成");
            Ok(contracts)
        })
        .await
    }

    async fn fetch_algorithm_metrics(&self) -> ApiResult<Vec<AlgorithmMetric>> {
        let store = self.algorithm_store.clone();
        self.simulate("fetch_algorithm_metrics", self.config.latency.algorithms_ms, move || {
            Ok(store.list()?)
        })
        .await
    }

    async fn fetch_updated_algorithm_metrics(&self) -> ApiResult<Vec<AlgorithmMetric>> {
        let store = self.algorithm_store.clone();
        self.simulate(
            "fetch_updated_algorithm_metrics",
            self.config.latency.updated_algorithms_ms,
            move || Ok(store.list()?),
        )
        .await
    }

    async fn update_algorithm_toggle(&self, name: &str, enabled: bool) -> ApiResult<bool> {
        let store = self.algorithm_store.clone();
        let name = name.to_string();
        self.simulate("update_algorithm_toggle", self.config.latency.toggle_ms, move || {
            match store.set_enabled(&name, enabled) {
                Ok(_) => {
                    tracing::info!(algorithm = %name, enabled, "算法启用状态已更新");
                    Ok(true)
                }
                Err(RepositoryError::NotFound { .. } | RepositoryError::ValidationError(_)) => {
                    tracing::debug!(algorithm = %name, "算法不存在或名称为空，忽略切换");
                    Ok(false)
                }
                Err(e) => Err(e.into()),
            }
        })
        .await
    }

    async fn export_batch(&self, format: ExportFormat) -> ApiResult<String> {
        self.simulate("export_batch", self.config.latency.export_ms, move || {
            Ok(format!("{}/report.{}", EXPORT_DIR, format.extension()))
        })
        .await
    }
}
