// ==========================================
// API集成测试辅助工具
// ==========================================
// 职责: 提供API层集成测试的通用环境
// ==========================================

use std::sync::Arc;

use procurement_risk_mock::config::{LatencyConfig, ServiceConfig};
use procurement_risk_mock::domain::{ContractRecord, ContractStatus};
use procurement_risk_mock::engine::GeneratedBatch;
use procurement_risk_mock::repository::AlgorithmStore;
use procurement_risk_mock::{DashboardApi, RiskDataGenerator};

/// API测试环境
pub struct ApiTestEnv {
    pub algorithm_store: Arc<AlgorithmStore>,
    pub dashboard_api: DashboardApi,
}

impl ApiTestEnv {
    /// 固定种子生成的批次，无模拟延迟
    pub fn seeded(seed: u64, count: i64) -> Self {
        let batch = RiskDataGenerator::seeded(seed)
            .generate(count)
            .expect("批次生成失败");
        Self::with_batch(batch, no_latency_config())
    }

    /// 使用给定批次与配置
    pub fn with_batch(batch: GeneratedBatch, config: ServiceConfig) -> Self {
        let algorithm_store = Arc::new(AlgorithmStore::default());
        let dashboard_api =
            DashboardApi::new(Arc::new(batch), algorithm_store.clone(), config);
        Self {
            algorithm_store,
            dashboard_api,
        }
    }
}

pub fn no_latency_config() -> ServiceConfig {
    ServiceConfig {
        latency: LatencyConfig::none(),
        ..ServiceConfig::default()
    }
}

/// 构造单条合同（用于精确控制过滤场景）
pub fn contract(seq: usize, category: &str, date: &str, risk_score: f64) -> ContractRecord {
    ContractRecord {
        id: ContractRecord::format_id(seq),
        customer: "МИН ТРАНСПОРТА".to_string(),
        supplier: "ТОО ГАММА ПЛЮС".to_string(),
        amount: 100_000 * seq as u64,
        category: category.to_string(),
        date: date.parse().expect("日期格式错误"),
        participants_count: 3,
        risk_score,
        risk_indicators: vec![],
        status: ContractStatus::Completed,
    }
}
