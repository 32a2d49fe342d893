// ==========================================
// 采购风险监测 - 批次输出
// ==========================================
// 用途: JSON 产物 / CSV 合同导出 / 可读摘要
// JSON 结构: { "contracts": [...], "statistics": {...} }
// ==========================================

use crate::domain::contract::ContractRecord;
use crate::domain::statistics::BatchStatistics;
use crate::domain::types::RiskLevel;
use crate::engine::generator::GeneratedBatch;
use crate::i18n::{indicator_label, t, t_with_args};
use csv::Writer;
use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

// CSV 表头
const CSV_HEADER: &[&str] = &[
    "id",
    "customer",
    "supplier",
    "amount",
    "category",
    "date",
    "participantsCount",
    "riskScore",
    "riskIndicators",
    "status",
];

fn to_row(contract: &ContractRecord) -> Vec<String> {
    vec![
        contract.id.clone(),
        contract.customer.clone(),
        contract.supplier.clone(),
        contract.amount.to_string(),
        contract.category.clone(),
        contract.date.to_string(),
        contract.participants_count.to_string(),
        format!("{:.1}", contract.risk_score),
        contract
            .risk_indicators
            .iter()
            .map(|i| i.tag())
            .collect::<Vec<_>>()
            .join("; "),
        contract.status.to_string(),
    ]
}

/// 写出 JSON 产物（带缩进，便于阅读）
pub fn write_json(batch: &GeneratedBatch, path: &Path) -> Result<(), Box<dyn Error>> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, batch)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    tracing::info!(path = %path.display(), contracts = batch.contracts.len(), "JSON 产物已写出");
    Ok(())
}

/// 读取 JSON 产物
pub fn read_json(path: &Path) -> Result<GeneratedBatch, Box<dyn Error>> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// 写出合同 CSV
pub fn write_csv(contracts: &[ContractRecord], path: &Path) -> Result<(), Box<dyn Error>> {
    let file = File::create(path)?;
    let mut wtr = Writer::from_writer(file);

    wtr.write_record(CSV_HEADER)?;
    for contract in contracts {
        wtr.write_record(&to_row(contract))?;
    }

    wtr.flush()?;
    tracing::info!(path = %path.display(), rows = contracts.len(), "CSV 已写出");
    Ok(())
}

/// 千分位分隔（空格）
pub fn format_amount(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

/// 可读摘要（按当前语言）
pub fn summary_lines(stats: &BatchStatistics) -> Vec<String> {
    let band = |key: &str, count: usize, level: RiskLevel| {
        t_with_args(
            key,
            &[
                ("count", count.to_string().as_str()),
                ("pct", format!("{:.1}", stats.share_pct(level)).as_str()),
            ],
        )
    };

    vec![
        t("summary.title"),
        t_with_args("summary.total", &[("count", stats.total.to_string().as_str())]),
        band("summary.high", stats.high_risk, RiskLevel::High),
        band("summary.medium", stats.medium_risk, RiskLevel::Medium),
        band("summary.low", stats.low_risk, RiskLevel::Low),
        t_with_args(
            "summary.average_amount",
            &[("amount", format_amount(stats.average_amount).as_str())],
        ),
    ]
}

/// 单条合同的指标展示文本
pub fn indicator_labels(contract: &ContractRecord) -> Vec<String> {
    contract
        .risk_indicators
        .iter()
        .map(|i| indicator_label(*i))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::generator::RiskDataGenerator;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0), "0");
        assert_eq!(format_amount(999), "999");
        assert_eq!(format_amount(1_050_000), "1 050 000");
        assert_eq!(format_amount(50_000), "50 000");
    }

    #[test]
    fn test_json_round_trip_preserves_statistics() {
        let batch = RiskDataGenerator::seeded(11).generate(15).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mock.json");

        write_json(&batch, &path).unwrap();
        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["contracts"].as_array().unwrap().len(), 15);
        assert_eq!(raw["statistics"]["total"], 15);

        let loaded = read_json(&path).unwrap();
        assert_eq!(
            BatchStatistics::from_contracts(&loaded.contracts),
            batch.statistics
        );
    }

    #[test]
    fn test_csv_has_header_and_rows() {
        let batch = RiskDataGenerator::seeded(3).generate(5).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contracts.csv");

        write_csv(&batch.contracts, &path).unwrap();
        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.get(0), Some("id"));
        let rows: Vec<_> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].get(0), Some("TNR_000001"));
    }
}
