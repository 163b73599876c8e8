// ==========================================
// 产品碳足迹计算系统 - 命令行入口
// ==========================================
// 流程: 加载配置 -> 导入次级/主数据 -> 建模 -> 计算 -> 导出
// ==========================================

use anyhow::{bail, Context, Result};
use clap::Parser;
use pcf_engine::config::ConfigManager;
use pcf_engine::engine::{ModelingReport, ModelingSession, PcfCalculator, PcfResult, ProcessManager};
use pcf_engine::export::{FilterOptions, ResultExporter};
use pcf_engine::importer::{CsvParser, DataKind, ImportedData};
use pcf_engine::{logging, APP_NAME, VERSION};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// 产品碳足迹计算
///
/// 先读入次级 (参考) 数据, 再读入主数据, 计算主数据工序链的碳足迹并追加导出
#[derive(Parser, Debug)]
#[command(name = "pcf-engine", version)]
#[command(after_help = "\
Examples:
  pcf-engine --secondary data/secondary.csv --primary data/primary.csv
  pcf-engine --secondary s_secondary.csv --primary p_primary.csv --min 1 --max 10 --json
  pcf-engine --secondary s_secondary.csv --primary p_primary.csv --process cutting")]
struct Cli {
    /// 次级数据 CSV (文件名须含 "secondary")
    #[arg(long)]
    secondary: PathBuf,

    /// 主数据 CSV (文件名须含 "primary")
    #[arg(long)]
    primary: PathBuf,

    /// JSON 配置文件 (缺省使用内置默认值)
    #[arg(long, env = "PCF_CONFIG")]
    config: Option<PathBuf>,

    /// 结果 CSV (覆盖配置中的 export.output_path)
    #[arg(long)]
    output: Option<PathBuf>,

    /// 只导出该工序 (区分大小写, 与结果中的小写键比较)
    #[arg(long)]
    process: Option<String>,

    /// 分工序值下限 (含)
    #[arg(long, default_value_t = 0.0)]
    min: f64,

    /// 分工序值上限 (含)
    #[arg(long, default_value_t = f64::MAX)]
    max: f64,

    /// 以 JSON 输出结果
    #[arg(long)]
    json: bool,
}

/// 一次运行的汇总
#[derive(Debug, Serialize)]
struct RunSummary {
    session_id: String,
    secondary: ModelingReport,
    primary: ModelingReport,
    result: PcfResult,
    exported_processes: usize,
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    info!("{} v{}", APP_NAME, VERSION);

    let config = match &cli.config {
        Some(path) => ConfigManager::from_file(path)
            .with_context(|| format!("加载配置失败: {}", path.display()))?,
        None => ConfigManager::new(),
    };
    info!(snapshot = %config.get_config_snapshot()?, "配置已加载");
    let settings = config.settings();

    // 1. 导入
    let parser = CsvParser::new(settings.import.clone());
    let secondary = import_as(&parser, &cli.secondary, DataKind::Secondary)?;
    let primary = import_as(&parser, &cli.primary, DataKind::Primary)?;

    // 2. 建模 (同一会话: 次级 -> 主数据)
    let manager = ProcessManager::from_settings(settings);
    let mut session = ModelingSession::new();
    let secondary_report = manager
        .model(&mut session, &secondary.records)
        .context("次级数据建模失败")?;
    let primary_report = manager
        .model(&mut session, &primary.records)
        .context("主数据建模失败")?;

    // 3. 计算
    let mut calculator = PcfCalculator::from_settings(&settings.calculation);
    calculator
        .accumulate(session.primary_processes())
        .context("PCF 计算失败")?;
    let result = calculator.result();

    // 4. 导出
    let exporter = match &cli.output {
        Some(path) => ResultExporter::new(path),
        None => ResultExporter::from_settings(&settings.export),
    };
    let filter = FilterOptions::new(cli.min, cli.max, cli.process.clone());
    let exported_processes = exporter
        .export(&result, Some(&filter))
        .with_context(|| format!("导出失败: {}", exporter.output_path().display()))?;

    let summary = RunSummary {
        session_id: session.session_id().to_string(),
        secondary: secondary_report,
        primary: primary_report,
        result,
        exported_processes,
    };
    print_summary(&summary, cli.json)?;
    Ok(())
}

/// 导入并核对数据类别
fn import_as(parser: &CsvParser, path: &Path, expected: DataKind) -> Result<ImportedData> {
    let data = parser
        .import(path)
        .with_context(|| format!("导入失败: {}", path.display()))?;
    if data.kind != expected {
        bail!(
            "文件 {} 被识别为 {} 数据, 期望 {}",
            path.display(),
            data.kind,
            expected
        );
    }
    info!(kind = %data.kind, records = data.records.len(), source = %data.source, "数据已导入");
    Ok(data)
}

fn print_summary(summary: &RunSummary, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
        return Ok(());
    }

    println!("PCF total: {}", summary.result.total);
    if let Some(per_process) = &summary.result.per_process {
        for (name, value) in per_process {
            println!("  {}: {}", name, value);
        }
    }
    println!("exported processes: {}", summary.exported_processes);
    Ok(())
}
