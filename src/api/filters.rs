// ==========================================
// 采购风险监测 - 合同列表过滤条件
// ==========================================
// 风险等级过滤使用看板展示阈值 (>=80 高, >=40 中)
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::contract::ContractRecord;
use crate::domain::types::{RiskLevel, RiskThresholds};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractFilter {
    #[serde(default)]
    pub risk_level: Option<RiskLevel>,
    #[serde(default)]
    pub category: Option<String>,
    /// YYYY-MM-DD，含边界
    #[serde(default)]
    pub date_from: Option<String>,
    /// YYYY-MM-DD，含边界
    #[serde(default)]
    pub date_to: Option<String>,
}

/// 解析日期字符串
pub fn parse_date(date_str: &str) -> ApiResult<NaiveDate> {
    NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d")
        .map_err(|e| ApiError::InvalidInput(format!("日期格式错误（应为YYYY-MM-DD）: {}", e)))
}

/// 解析后的过滤条件
struct CompiledFilter<'a> {
    risk_level: Option<RiskLevel>,
    category: Option<&'a str>,
    date_from: Option<NaiveDate>,
    date_to: Option<NaiveDate>,
}

impl<'a> CompiledFilter<'a> {
    fn matches(&self, contract: &ContractRecord) -> bool {
        if let Some(level) = self.risk_level {
            if contract.risk_level(&RiskThresholds::DISPLAY) != level {
                return false;
            }
        }
        if let Some(category) = self.category {
            if contract.category != category {
                return false;
            }
        }
        if let Some(from) = self.date_from {
            if contract.date < from {
                return false;
            }
        }
        if let Some(to) = self.date_to {
            if contract.date > to {
                return false;
            }
        }
        true
    }
}

impl ContractFilter {
    pub fn by_risk_level(level: RiskLevel) -> Self {
        Self {
            risk_level: Some(level),
            ..Self::default()
        }
    }

    fn compile(&self) -> ApiResult<CompiledFilter<'_>> {
        let date_from = self.date_from.as_deref().map(parse_date).transpose()?;
        let date_to = self.date_to.as_deref().map(parse_date).transpose()?;

        if let (Some(from), Some(to)) = (date_from, date_to) {
            if from > to {
                return Err(ApiError::InvalidInput(format!(
                    "日期范围非法: dateFrom={} > dateTo={}",
                    from, to
                )));
            }
        }

        Ok(CompiledFilter {
            risk_level: self.risk_level,
            category: self
                .category
                .as_deref()
                .map(str::trim)
                .filter(|c| !c.is_empty()),
            date_from,
            date_to,
        })
    }

    /// 过滤合同（保持原顺序）
    pub fn apply(&self, contracts: &[ContractRecord]) -> ApiResult<Vec<ContractRecord>> {
        let compiled = self.compile()?;
        Ok(contracts
            .iter()
            .filter(|c| compiled.matches(c))
            .cloned()
            .collect())
    }
}
