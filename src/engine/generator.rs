// ==========================================
// 采购风险监测 - 模拟合同数据生成器
// ==========================================
// 职责: 生成一批合成采购合同 + 批次统计
// 输入: 生成数量 (正整数) + 随机源
// 输出: GeneratedBatch { contracts, statistics }
// ==========================================
// 每条合同的抽样顺序固定:
// 金额 -> 参与者数 -> 基线分 -> 风险规则 -> 采购方 -> 供应商
// -> 类别 -> 月 -> 日 -> 状态
// ==========================================

use crate::domain::contract::ContractRecord;
use crate::domain::statistics::BatchStatistics;
use crate::domain::types::ContractStatus;
use crate::engine::error::{GeneratorError, GeneratorResult};
use crate::engine::random::{RngSource, UniformSource};
use crate::engine::risk::RiskEngine;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// 固定枚举
// ==========================================

pub const CUSTOMERS: [&str; 8] = [
    "АКИМАТ АЛМАТЫ",
    "МИН ОБОРОНЫ",
    "МИН ЗДРАВООХРАНЕНИЯ",
    "МИН ОБРАЗОВАНИЯ",
    "АКИМАТ АСТАНЫ",
    "МИН ТРАНСПОРТА",
    "МИН ЭНЕРГЕТИКИ",
    "АКИМАТ ШЫМКЕНТА",
];

pub const SUPPLIERS: [&str; 8] = [
    "ТОО СТРОЙ ПЛЮС",
    "ИП СМИРНОВ",
    "ТОО ТЕХНИК СЕРВИС",
    "ТОО МЕДТЕХ",
    "ТОО АЛЬФА СТРОЙ",
    "ИП ИВАНОВ",
    "ТОО БЕТА СЕРВИС",
    "ТОО ГАММА ПЛЮС",
];

pub const CATEGORIES: [&str; 8] = [
    "СТРОИТЕЛЬСТВО",
    "МЕДОБОРУДОВАНИЕ",
    "IT УСЛУГИ",
    "ТРАНСПОРТ",
    "ОБРАЗОВАНИЕ",
    "ЭНЕРГЕТИКА",
    "БЕЗОПАСНОСТЬ",
    "КОНСАЛТИНГ",
];

// ===== 分布参数 =====
pub const AMOUNT_MIN: f64 = 50_000.0;
pub const AMOUNT_SPAN: f64 = 2_000_000.0;
pub const MAX_PARTICIPANTS: u32 = 8;
pub const CONTRACT_YEAR: i32 = 2024;
pub const MAX_DAY_OF_MONTH: u32 = 28;
pub const COMPLETED_PROBABILITY: f64 = 0.9;

// ==========================================
// GeneratedBatch - 生成结果
// ==========================================
/// 持久化产物结构: { "contracts": [...], "statistics": {...} }
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedBatch {
    pub contracts: Vec<ContractRecord>,
    pub statistics: BatchStatistics,
}

impl GeneratedBatch {
    /// 由合同序列构造，统计即时计算
    pub fn from_contracts(contracts: Vec<ContractRecord>) -> Self {
        let statistics = BatchStatistics::from_contracts(&contracts);
        Self {
            contracts,
            statistics,
        }
    }
}

/// floor(u * len)，夹紧到 [0, len-1]
fn pick_index(u: f64, len: usize) -> usize {
    ((u * len as f64).floor().max(0.0) as usize).min(len.saturating_sub(1))
}

fn pick<'a>(source: &mut dyn UniformSource, items: &[&'a str]) -> &'a str {
    items[pick_index(source.next_uniform(), items.len())]
}

// ==========================================
// RiskDataGenerator - 生成器
// ==========================================
pub struct RiskDataGenerator {
    source: Box<dyn UniformSource>,
    risk_engine: RiskEngine,
}

impl RiskDataGenerator {
    /// 使用给定随机源创建生成器
    pub fn new(source: Box<dyn UniformSource>) -> Self {
        Self {
            source,
            risk_engine: RiskEngine::new(),
        }
    }

    /// 固定种子（可复现）
    pub fn seeded(seed: u64) -> Self {
        Self::new(Box::new(RngSource::seeded(seed)))
    }

    /// 系统熵
    pub fn from_entropy() -> Self {
        Self::new(Box::new(RngSource::from_entropy()))
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 生成一批合同
    ///
    /// # 参数
    /// - `count`: 生成数量，必须 > 0
    ///
    /// # 返回
    /// - Ok(GeneratedBatch): count 条合同（编号 1..=count 递增）+ 统计
    /// - Err(GeneratorError::InvalidArgument): count <= 0 或过大无法分配
    pub fn generate(&mut self, count: i64) -> GeneratorResult<GeneratedBatch> {
        if count <= 0 {
            return Err(GeneratorError::InvalidArgument(format!(
                "count 必须为正整数: {}",
                count
            )));
        }

        let count = usize::try_from(count)
            .map_err(|_| GeneratorError::InvalidArgument(format!("count 超出范围: {}", count)))?;

        // 不可信数量: 预分配失败时返回错误而不是 panic
        let mut contracts: Vec<ContractRecord> = Vec::new();
        contracts.try_reserve(count).map_err(|e| {
            GeneratorError::InvalidArgument(format!("count 过大，无法分配: {} ({})", count, e))
        })?;
        for seq in 1..=count {
            contracts.push(self.generate_record(seq)?);
        }

        let batch = GeneratedBatch::from_contracts(contracts);
        tracing::info!(
            total = batch.statistics.total,
            high_risk = batch.statistics.high_risk,
            medium_risk = batch.statistics.medium_risk,
            low_risk = batch.statistics.low_risk,
            "模拟合同批次生成完成"
        );
        Ok(batch)
    }

    /// 在阻塞线程池中生成（结果与同步生成完全一致）
    ///
    /// 返回生成器本身，便于继续使用同一随机源
    pub async fn generate_async(
        mut self,
        count: i64,
    ) -> GeneratorResult<(Self, GeneratedBatch)> {
        tokio::task::spawn_blocking(move || {
            let batch = self.generate(count)?;
            Ok((self, batch))
        })
        .await
        .map_err(|e| GeneratorError::TaskFailed(e.to_string()))?
    }

    /// 生成单条合同
    fn generate_record(&mut self, seq: usize) -> GeneratorResult<ContractRecord> {
        let source: &mut dyn UniformSource = self.source.as_mut();

        // 1. 金额 [50_000, 2_050_000)
        let amount = (source.next_uniform() * AMOUNT_SPAN + AMOUNT_MIN).round() as u64;

        // 2. 参与者数 [1, 8]
        let participants_count =
            pick_index(source.next_uniform(), MAX_PARTICIPANTS as usize) as u32 + 1;

        // 3. 基线分 [0, 100)
        let baseline_score = source.next_uniform() * 100.0;

        // 4-5. 风险规则 + 一位小数
        let assessment = self
            .risk_engine
            .assess(baseline_score, participants_count, source);

        // 6. 采购方 / 供应商 / 类别 / 日期
        let customer = pick(source, &CUSTOMERS);
        let supplier = pick(source, &SUPPLIERS);
        let category = pick(source, &CATEGORIES);
        let month = pick_index(source.next_uniform(), 12) as u32 + 1;
        let day = pick_index(source.next_uniform(), MAX_DAY_OF_MONTH as usize) as u32 + 1;
        let date = NaiveDate::from_ymd_opt(CONTRACT_YEAR, month, day)
            .ok_or(GeneratorError::DateOutOfRange { month, day })?;

        // 7. 状态
        let status = if source.next_uniform() < COMPLETED_PROBABILITY {
            ContractStatus::Completed
        } else {
            ContractStatus::InProgress
        };

        Ok(ContractRecord {
            id: ContractRecord::format_id(seq),
            customer: customer.to_string(),
            supplier: supplier.to_string(),
            amount,
            category: category.to_string(),
            date,
            participants_count,
            risk_score: assessment.risk_score,
            risk_indicators: assessment.risk_indicators,
            status,
        })
    }
}
