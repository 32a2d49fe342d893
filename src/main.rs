// ==========================================
// 政府采购风险监测 - 模拟数据生成命令行
// ==========================================
// 生成一批模拟合同，打印摘要，可选写出 JSON / CSV
// ==========================================

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use procurement_risk_mock::config::ConfigManager;
use procurement_risk_mock::engine::parse_count;
use procurement_risk_mock::{i18n, logging, output, RiskDataGenerator, RiskThresholds};

#[derive(Parser, Debug)]
#[command(name = "procurement-risk-mock", version, about = "生成模拟采购合同及风险评分")]
struct Args {
    /// 生成数量（默认取配置 batch_size）
    #[arg(short, long, allow_hyphen_values = true)]
    count: Option<String>,

    /// 随机种子（固定种子可复现）
    #[arg(short, long)]
    seed: Option<u64>,

    /// 配置文件路径
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON 产物输出路径
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// 合同 CSV 输出路径
    #[arg(long)]
    csv: Option<PathBuf>,

    /// 摘要语言 (en / ru)
    #[arg(long, default_value = "en")]
    locale: String,

    /// 额外列出风险最高的 N 条合同
    #[arg(long, default_value_t = 0)]
    top: usize,

    /// 不打印摘要
    #[arg(short, long)]
    quiet: bool,

    /// JSON 格式日志
    #[arg(long)]
    json_log: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(args.json_log);
    i18n::set_locale(&args.locale);

    let config = ConfigManager::load(args.config.as_deref())
        .context("配置加载失败")?
        .into_config();

    let count = match args.count.as_deref() {
        Some(raw) => parse_count(raw)?,
        None => config.batch_size,
    };
    let seed = args.seed.or(config.seed);

    tracing::info!(count, seed = ?seed, "开始生成模拟合同");
    let generator = match seed {
        Some(seed) => RiskDataGenerator::seeded(seed),
        None => RiskDataGenerator::from_entropy(),
    };
    let (_, batch) = generator.generate_async(count).await?;

    if !args.quiet {
        for line in output::summary_lines(&batch.statistics) {
            println!("{}", line);
        }
    }

    if args.top > 0 {
        let mut ranked: Vec<_> = batch.contracts.iter().collect();
        ranked.sort_by(|a, b| b.risk_score.total_cmp(&a.risk_score));
        println!();
        for contract in ranked.into_iter().take(args.top) {
            println!(
                "{}  {:>5.1}  {:<6}  {}  [{}]",
                contract.id,
                contract.risk_score,
                i18n::risk_level_label(contract.risk_level(&RiskThresholds::GENERATOR)),
                contract.customer,
                output::indicator_labels(contract).join(", ")
            );
        }
    }

    if let Some(path) = &args.output {
        output::write_json(&batch, path)
            .map_err(|e| anyhow::anyhow!("JSON 写出失败: {}", e))?;
        if !args.quiet {
            println!(
                "{}",
                i18n::t_with_args("summary.saved", &[("path", path.display().to_string().as_str())])
            );
        }
    }

    if let Some(path) = &args.csv {
        output::write_csv(&batch.contracts, path)
            .map_err(|e| anyhow::anyhow!("CSV 写出失败: {}", e))?;
        if !args.quiet {
            println!(
                "{}",
                i18n::t_with_args("summary.saved", &[("path", path.display().to_string().as_str())])
            );
        }
    }

    if !args.quiet {
        println!();
        println!("{}", i18n::t("summary.done"));
    }

    Ok(())
}
