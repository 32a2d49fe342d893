// ==========================================
// 采购风险监测 - 领域类型定义
// ==========================================
// 合同状态 / 风险等级 / 导出格式 / 风险阈值
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 合同状态 (Contract Status)
// ==========================================
// 生成器只产出 Completed / InProgress
// Cancelled 为保留状态，消费方可能按其过滤
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractStatus {
    Completed,  // 已完成
    InProgress, // 执行中
    Cancelled,  // 已取消
}

impl fmt::Display for ContractStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractStatus::Completed => write!(f, "completed"),
            ContractStatus::InProgress => write!(f, "in_progress"),
            ContractStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

// ==========================================
// 风险等级 (Risk Level)
// ==========================================
// 顺序: Low < Medium < High
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,    // 低
    Medium, // 中
    High,   // 高
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "low"),
            RiskLevel::Medium => write!(f, "medium"),
            RiskLevel::High => write!(f, "high"),
        }
    }
}

impl FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(RiskLevel::Low),
            "medium" => Ok(RiskLevel::Medium),
            "high" => Ok(RiskLevel::High),
            other => Err(format!("未知风险等级: {}", other)),
        }
    }
}

// ==========================================
// 风险阈值 (Risk Thresholds)
// ==========================================
// 两套阈值并存，互不替代:
// - GENERATOR: 批次统计使用 (>=90 高, >=70 中)
// - DISPLAY:   看板徽标与合同列表过滤使用 (>=80 高, >=40 中)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskThresholds {
    pub high: f64,
    pub medium: f64,
}

impl RiskThresholds {
    pub const GENERATOR: RiskThresholds = RiskThresholds {
        high: 90.0,
        medium: 70.0,
    };

    pub const DISPLAY: RiskThresholds = RiskThresholds {
        high: 80.0,
        medium: 40.0,
    };

    /// 按阈值划分风险等级（穷尽且互斥）
    pub fn classify(&self, risk_score: f64) -> RiskLevel {
        if risk_score >= self.high {
            RiskLevel::High
        } else if risk_score >= self.medium {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

// ==========================================
// 导出格式 (Export Format)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Pdf,
    Excel,
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Excel => "excel",
            ExportFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pdf" => Ok(ExportFormat::Pdf),
            "excel" => Ok(ExportFormat::Excel),
            "csv" => Ok(ExportFormat::Csv),
            other => Err(format!("不支持的导出格式: {}", other)),
        }
    }
}
