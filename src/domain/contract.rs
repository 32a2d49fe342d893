// ==========================================
// 采购风险监测 - 合同记录领域模型
// ==========================================
// 用途: 生成器输出的单条合同，生成后不可变
// 序列化: camelCase (与看板前端字段一致)
// ==========================================

use crate::domain::types::{ContractStatus, RiskLevel, RiskThresholds};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 合同编号前缀
pub const CONTRACT_ID_PREFIX: &str = "TNR_";

// ==========================================
// RiskIndicator - 风险指标标签
// ==========================================
// 顺序即规则评估顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskIndicator {
    #[serde(rename = "price anomaly")]
    PriceAnomaly,
    #[serde(rename = "single participant")]
    SingleParticipant,
    #[serde(rename = "monopolization")]
    Monopolization,
    #[serde(rename = "fragmentation")]
    Fragmentation,
}

impl RiskIndicator {
    /// 标签原文（写入记录的值）
    pub fn tag(&self) -> &'static str {
        match self {
            RiskIndicator::PriceAnomaly => "price anomaly",
            RiskIndicator::SingleParticipant => "single participant",
            RiskIndicator::Monopolization => "monopolization",
            RiskIndicator::Fragmentation => "fragmentation",
        }
    }

    /// i18n 键（展示用）
    pub fn label_key(&self) -> &'static str {
        match self {
            RiskIndicator::PriceAnomaly => "indicator.price_anomaly",
            RiskIndicator::SingleParticipant => "indicator.single_participant",
            RiskIndicator::Monopolization => "indicator.monopolization",
            RiskIndicator::Fragmentation => "indicator.fragmentation",
        }
    }
}

impl fmt::Display for RiskIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

// ==========================================
// ContractRecord - 合同记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractRecord {
    pub id: String,                          // TNR_000001
    pub customer: String,                    // 采购方（政府机构）
    pub supplier: String,                    // 供应商
    pub amount: u64,                         // 金额（最小展示货币单位）
    pub category: String,                    // 采购类别
    pub date: NaiveDate,                     // 2024 年内，日 1..=28
    pub participants_count: u32,             // 参与者数 1..=8
    pub risk_score: f64,                     // 0..=100，一位小数
    pub risk_indicators: Vec<RiskIndicator>, // 触发的风险指标
    pub status: ContractStatus,
}

impl ContractRecord {
    /// 按序号生成合同编号（1 起，6 位补零）
    pub fn format_id(seq: usize) -> String {
        format!("{}{:06}", CONTRACT_ID_PREFIX, seq)
    }

    /// 解析合同编号中的序号
    pub fn sequence_number(&self) -> Option<usize> {
        self.id
            .strip_prefix(CONTRACT_ID_PREFIX)
            .and_then(|s| s.parse::<usize>().ok())
    }

    /// 按给定阈值划分风险等级
    pub fn risk_level(&self, thresholds: &RiskThresholds) -> RiskLevel {
        thresholds.classify(self.risk_score)
    }

    pub fn has_indicator(&self, indicator: RiskIndicator) -> bool {
        self.risk_indicators.contains(&indicator)
    }
}
