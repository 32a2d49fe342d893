// ==========================================
// RiskDataGenerator 集成测试
// ==========================================
// 测试目标: 批次生成的结构与统计性质
// 覆盖范围: 编号 / 分数范围 / 单一参与者规则 / 分档统计 / 确定性
// ==========================================

use chrono::Datelike;
use procurement_risk_mock::domain::{BatchStatistics, ContractStatus, RiskIndicator};
use procurement_risk_mock::engine::generator::{CATEGORIES, CUSTOMERS, SUPPLIERS};
use procurement_risk_mock::engine::{GeneratorError, RiskDataGenerator, SequenceSource};

const SEEDS: [u64; 4] = [1, 42, 2024, 987_654_321];

// ==========================================
// 测试用例 1: 数量与编号
// ==========================================

#[test]
fn test_generate_returns_exact_count_with_increasing_ids() {
    for seed in SEEDS {
        let batch = RiskDataGenerator::seeded(seed).generate(250).unwrap();
        assert_eq!(batch.contracts.len(), 250);

        for (i, contract) in batch.contracts.iter().enumerate() {
            assert_eq!(contract.sequence_number(), Some(i + 1));
            assert_eq!(contract.id.len(), "TNR_000001".len());
        }
    }
}

#[test]
fn test_generate_one() {
    let batch = RiskDataGenerator::seeded(5).generate(1).unwrap();
    assert_eq!(batch.contracts.len(), 1);
    assert_eq!(batch.contracts[0].id, "TNR_000001");
    assert_eq!(batch.statistics.total, 1);
}

#[test]
fn test_generate_rejects_zero_and_negative() {
    let mut generator = RiskDataGenerator::seeded(5);
    assert!(matches!(generator.generate(0), Err(GeneratorError::InvalidArgument(_))));
    assert!(matches!(generator.generate(-1), Err(GeneratorError::InvalidArgument(_))));
}

#[test]
fn test_generate_huge_count_returns_error() {
    let mut generator = RiskDataGenerator::seeded(1);
    assert!(matches!(
        generator.generate(i64::MAX),
        Err(GeneratorError::InvalidArgument(_))
    ));

    // 失败后生成器仍可用
    assert_eq!(generator.generate(3).unwrap().contracts.len(), 3);
}

// ==========================================
// 测试用例 2: 字段取值范围
// ==========================================

#[test]
fn test_field_ranges() {
    let batch = RiskDataGenerator::seeded(77).generate(2000).unwrap();

    for c in &batch.contracts {
        assert!((50_000..=2_050_000).contains(&c.amount), "amount={}", c.amount);
        assert!((1..=8).contains(&c.participants_count));
        assert!((0.0..=100.0).contains(&c.risk_score), "risk_score={}", c.risk_score);
        assert_eq!(c.date.year(), 2024);
        assert!((1..=28).contains(&c.date.day()));
        assert!(CUSTOMERS.contains(&c.customer.as_str()));
        assert!(SUPPLIERS.contains(&c.supplier.as_str()));
        assert!(CATEGORIES.contains(&c.category.as_str()));
        assert_ne!(c.status, ContractStatus::Cancelled);
    }
}

#[test]
fn test_risk_score_has_at_most_one_decimal() {
    let batch = RiskDataGenerator::seeded(13).generate(1000).unwrap();
    for c in &batch.contracts {
        let scaled = c.risk_score * 10.0;
        assert!(
            (scaled - scaled.round()).abs() < 1e-6,
            "{} 超过一位小数",
            c.risk_score
        );
    }
}

// ==========================================
// 测试用例 3: 风险规则
// ==========================================

#[test]
fn test_single_participant_always_flagged() {
    for seed in SEEDS {
        let batch = RiskDataGenerator::seeded(seed).generate(1000).unwrap();
        let singles: Vec<_> = batch
            .contracts
            .iter()
            .filter(|c| c.participants_count == 1)
            .collect();
        assert!(!singles.is_empty());

        for c in singles {
            assert!(c.risk_score >= 70.0, "{}: {}", c.id, c.risk_score);
            assert!(c.has_indicator(RiskIndicator::SingleParticipant));
        }
    }
}

#[test]
fn test_indicators_unique_and_ordered() {
    let order = [
        RiskIndicator::PriceAnomaly,
        RiskIndicator::SingleParticipant,
        RiskIndicator::Monopolization,
        RiskIndicator::Fragmentation,
    ];
    let batch = RiskDataGenerator::seeded(8).generate(3000).unwrap();

    for c in &batch.contracts {
        let positions: Vec<usize> = c
            .risk_indicators
            .iter()
            .map(|i| order.iter().position(|o| o == i).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{}: {:?}", c.id, c.risk_indicators);

        if c.participants_count != 1 {
            assert!(!c.has_indicator(RiskIndicator::SingleParticipant));
        }
        if c.has_indicator(RiskIndicator::PriceAnomaly) {
            assert!(c.risk_score >= 85.0);
        }
    }
}

// ==========================================
// 测试用例 4: 统计
// ==========================================

#[test]
fn test_partition_sums_to_total() {
    for seed in SEEDS {
        let batch = RiskDataGenerator::seeded(seed).generate(777).unwrap();
        let s = &batch.statistics;
        assert_eq!(s.high_risk + s.medium_risk + s.low_risk, 777);
        assert_eq!(s.total, 777);
    }
}

#[test]
fn test_average_amount_matches_mean() {
    let batch = RiskDataGenerator::seeded(31).generate(500).unwrap();
    let sum: u64 = batch.contracts.iter().map(|c| c.amount).sum();
    let expected = (sum as f64 / 500.0).round() as u64;
    assert_eq!(batch.statistics.average_amount, expected);
}

#[test]
fn test_statistics_recompute_is_idempotent() {
    let batch = RiskDataGenerator::seeded(64).generate(400).unwrap();
    let first = BatchStatistics::from_contracts(&batch.contracts);
    let second = BatchStatistics::from_contracts(&batch.contracts);
    assert_eq!(first, second);
    assert_eq!(first, batch.statistics);
    assert_eq!(first.detection_accuracy, 99.1);
}

// ==========================================
// 测试用例 5: 确定性
// ==========================================

#[test]
fn test_same_draw_sequence_same_output() {
    let script = vec![0.31, 0.07, 0.64, 0.92, 0.18, 0.55, 0.02, 0.73, 0.41, 0.88];
    let a = RiskDataGenerator::new(Box::new(SequenceSource::new(script.clone())))
        .generate(40)
        .unwrap();
    let b = RiskDataGenerator::new(Box::new(SequenceSource::new(script)))
        .generate(40)
        .unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_midpoint_draws_fire_no_probabilistic_rule() {
    let batch = RiskDataGenerator::new(Box::new(SequenceSource::constant(0.5)))
        .generate(10)
        .unwrap();
    for c in &batch.contracts {
        assert_eq!(c.participants_count, 5);
        assert!(c.risk_indicators.is_empty());
        assert_eq!(c.risk_score, 50.0);
    }
    assert_eq!(batch.statistics.low_risk, 10);
}

#[test]
fn test_different_seeds_differ() {
    let a = RiskDataGenerator::seeded(1).generate(20).unwrap();
    let b = RiskDataGenerator::seeded(2).generate(20).unwrap();
    assert_ne!(a.contracts, b.contracts);
}
