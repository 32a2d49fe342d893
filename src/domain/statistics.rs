// ==========================================
// 采购风险监测 - 批次统计
// ==========================================
// 派生数据: 始终由合同序列重新计算，不单独存储
// 分档阈值: RiskThresholds::GENERATOR (90 / 70)
// ==========================================

use crate::domain::contract::ContractRecord;
use crate::domain::types::{RiskLevel, RiskThresholds};
use serde::{Deserialize, Serialize};

/// 检出准确率（占位常量，不由批次计算）
pub const DETECTION_ACCURACY: f64 = 99.1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchStatistics {
    pub total: usize,
    pub high_risk: usize,
    pub medium_risk: usize,
    pub low_risk: usize,
    pub average_amount: u64,
    pub detection_accuracy: f64,
}

impl BatchStatistics {
    /// 从合同序列计算统计（纯函数）
    ///
    /// # 规则
    /// - 高/中/低分档使用生成器阈值，三档之和等于 total
    /// - average_amount 为金额算术平均，四舍五入取整；空序列为 0
    pub fn from_contracts(contracts: &[ContractRecord]) -> Self {
        let thresholds = RiskThresholds::GENERATOR;
        let mut high_risk = 0;
        let mut medium_risk = 0;
        let mut low_risk = 0;
        let mut amount_sum: u128 = 0;

        for contract in contracts {
            match contract.risk_level(&thresholds) {
                RiskLevel::High => high_risk += 1,
                RiskLevel::Medium => medium_risk += 1,
                RiskLevel::Low => low_risk += 1,
            }
            amount_sum += contract.amount as u128;
        }

        let average_amount = if contracts.is_empty() {
            0
        } else {
            (amount_sum as f64 / contracts.len() as f64).round() as u64
        };

        Self {
            total: contracts.len(),
            high_risk,
            medium_risk,
            low_risk,
            average_amount,
            detection_accuracy: DETECTION_ACCURACY,
        }
    }

    /// 某一档占比（百分比）
    pub fn share_pct(&self, level: RiskLevel) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let count = match level {
            RiskLevel::High => self.high_risk,
            RiskLevel::Medium => self.medium_risk,
            RiskLevel::Low => self.low_risk,
        };
        count as f64 / self.total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::ContractStatus;
    use chrono::NaiveDate;

    fn contract(seq: usize, amount: u64, risk_score: f64) -> ContractRecord {
        ContractRecord {
            id: ContractRecord::format_id(seq),
            customer: "C".to_string(),
            supplier: "S".to_string(),
            amount,
            category: "K".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            participants_count: 3,
            risk_score,
            risk_indicators: vec![],
            status: ContractStatus::Completed,
        }
    }

    #[test]
    fn test_partition_and_average() {
        let contracts = vec![
            contract(1, 100_000, 95.0),
            contract(2, 200_000, 90.0),
            contract(3, 300_000, 89.9),
            contract(4, 400_001, 70.0),
            contract(5, 500_000, 12.5),
        ];
        let stats = BatchStatistics::from_contracts(&contracts);
        assert_eq!(stats.total, 5);
        assert_eq!(stats.high_risk, 2);
        assert_eq!(stats.medium_risk, 2);
        assert_eq!(stats.low_risk, 1);
        // 1_500_001 / 5 = 300_000.2
        assert_eq!(stats.average_amount, 300_000);
        assert_eq!(stats.detection_accuracy, DETECTION_ACCURACY);
    }

    #[test]
    fn test_average_rounds_half_up() {
        let contracts = vec![contract(1, 1, 0.0), contract(2, 2, 0.0)];
        assert_eq!(BatchStatistics::from_contracts(&contracts).average_amount, 2);
    }

    #[test]
    fn test_empty() {
        let stats = BatchStatistics::from_contracts(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.average_amount, 0);
        assert_eq!(stats.share_pct(RiskLevel::High), 0.0);
    }

    #[test]
    fn test_serialize_field_names() {
        let stats = BatchStatistics::from_contracts(&[contract(1, 10, 99.0)]);
        let value = serde_json::to_value(&stats).unwrap();
        assert_eq!(value["highRisk"], 1);
        assert_eq!(value["averageAmount"], 10);
        assert_eq!(value["detectionAccuracy"], 99.1);
    }
}
