// ==========================================
// 采购风险监测 - 风险评分引擎
// ==========================================
// 职责: 按固定顺序评估风险抬升规则
// 输入: 基线分 + 参与者数 + 随机源
// 输出: 最终风险分（一位小数）+ 触发的指标列表
// ==========================================
// 规则只抬高分数下限，不会降低分数
// ==========================================

use crate::domain::contract::RiskIndicator;
use crate::engine::random::UniformSource;

// ==========================================
// RuleTrigger - 规则触发方式
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RuleTrigger {
    /// 以给定概率触发（抽样 u < p）
    Probability(f64),
    /// 参与者数等于给定值时必然触发，不消耗抽样
    ParticipantsEquals(u32),
}

// ==========================================
// RiskRule - 风险抬升规则
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskRule {
    pub indicator: RiskIndicator,
    pub trigger: RuleTrigger,
    pub floor: f64,
    pub span: f64,
}

/// 规则表（顺序即评估顺序）
pub const RISK_RULES: [RiskRule; 4] = [
    RiskRule {
        indicator: RiskIndicator::PriceAnomaly,
        trigger: RuleTrigger::Probability(0.10),
        floor: 85.0,
        span: 15.0,
    },
    RiskRule {
        indicator: RiskIndicator::SingleParticipant,
        trigger: RuleTrigger::ParticipantsEquals(1),
        floor: 70.0,
        span: 20.0,
    },
    RiskRule {
        indicator: RiskIndicator::Monopolization,
        trigger: RuleTrigger::Probability(0.05),
        floor: 80.0,
        span: 15.0,
    },
    RiskRule {
        indicator: RiskIndicator::Fragmentation,
        trigger: RuleTrigger::Probability(0.03),
        floor: 75.0,
        span: 20.0,
    },
];

impl RiskRule {
    /// 判断规则是否触发
    fn fires(&self, participants_count: u32, source: &mut dyn UniformSource) -> bool {
        match self.trigger {
            RuleTrigger::Probability(p) => source.next_uniform() < p,
            RuleTrigger::ParticipantsEquals(n) => participants_count == n,
        }
    }

    /// 规则抬升后的分数下限: floor + U * span
    fn escalated_floor(&self, source: &mut dyn UniformSource) -> f64 {
        self.floor + source.next_uniform() * self.span
    }
}

// ==========================================
// RiskAssessment - 评估结果
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct RiskAssessment {
    pub risk_score: f64,
    pub risk_indicators: Vec<RiskIndicator>,
}

/// 四舍五入到一位小数
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// ==========================================
// RiskEngine - 风险评分引擎
// ==========================================
pub struct RiskEngine {
    rules: &'static [RiskRule],
}

impl Default for RiskEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RiskEngine {
    pub fn new() -> Self {
        Self { rules: &RISK_RULES }
    }

    pub fn rules(&self) -> &[RiskRule] {
        self.rules
    }

    /// 评估单条合同的风险
    ///
    /// # 参数
    /// - `baseline_score`: 基线分 [0, 100)
    /// - `participants_count`: 参与者数
    /// - `source`: 随机源（仅概率门与触发后的抬升值消耗抽样）
    ///
    /// # 返回
    /// RiskAssessment，分数已四舍五入到一位小数
    pub fn assess(
        &self,
        baseline_score: f64,
        participants_count: u32,
        source: &mut dyn UniformSource,
    ) -> RiskAssessment {
        let mut risk_score = baseline_score;
        let mut risk_indicators = Vec::new();

        for rule in self.rules {
            if !rule.fires(participants_count, source) {
                continue;
            }
            risk_score = risk_score.max(rule.escalated_floor(source));
            risk_indicators.push(rule.indicator);
        }

        RiskAssessment {
            risk_score: round_to_tenth(risk_score).clamp(0.0, 100.0),
            risk_indicators,
        }
    }
}
