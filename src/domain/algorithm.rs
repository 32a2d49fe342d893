// ==========================================
// 采购风险监测 - 检测算法元数据
// ==========================================
// 静态描述数据，与合同生成无关
// ==========================================

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmMetric {
    pub name: String,
    pub detected: u32,
    pub accuracy: f64, // 百分比
    pub description: String,
    pub enabled: bool,
}

impl AlgorithmMetric {
    pub fn new(name: &str, detected: u32, accuracy: f64, description: &str) -> Self {
        Self {
            name: name.to_string(),
            detected,
            accuracy,
            description: description.to_string(),
            enabled: true,
        }
    }
}

/// 默认算法列表
pub fn default_algorithms() -> Vec<AlgorithmMetric> {
    vec![
        AlgorithmMetric::new(
            "Price anomaly analysis",
            89,
            94.2,
            "Finds contracts with suspiciously inflated or understated prices",
        ),
        AlgorithmMetric::new(
            "Monopolization detection",
            34,
            91.7,
            "Detects a single supplier dominating a customer's purchases",
        ),
        AlgorithmMetric::new(
            "Procurement fragmentation analysis",
            67,
            88.9,
            "Finds large contracts artificially split into smaller ones",
        ),
        AlgorithmMetric::new(
            "Competitiveness check",
            156,
            85.4,
            "Analyses the level of competition in tenders",
        ),
    ]
}
