// ==========================================
// 端到端流程测试
// ==========================================
// 场景: CSV 导入 -> 次级建模 -> 主数据建模 (回填/补全) -> PCF 计算 -> 导出
// ==========================================

mod helpers;

use helpers::record_builder::{
    approx_eq, primary_records, secondary_records, write_csv, EXPECTED_TOTAL,
};
use pcf_engine::config::ConfigManager;
use pcf_engine::domain::types::{FlowCategory, UnitType};
use pcf_engine::engine::{EngineError, IntakeMode, ModelingSession, PcfCalculator, ProcessManager};
use pcf_engine::export::{FilterOptions, ResultExporter};
use pcf_engine::importer::{CsvParser, DataKind, ImportError};
use pcf_engine::logging;
use std::fs;
use tempfile::TempDir;

/// 导入两份文件并在同一会话中建模
fn model_files(secondary: &[String], primary: &[String]) -> ModelingSession {
    logging::init_test();
    let secondary_file = write_csv("secondaryData", secondary);
    let primary_file = write_csv("primaryData", primary);

    let parser = CsvParser::default();
    let secondary_data = parser.import(secondary_file.path()).unwrap();
    let primary_data = parser.import(primary_file.path()).unwrap();
    assert_eq!(secondary_data.kind, DataKind::Secondary);
    assert_eq!(primary_data.kind, DataKind::Primary);

    let manager = ProcessManager::new();
    let mut session = ModelingSession::new();
    manager.model(&mut session, &secondary_data.records).unwrap();
    manager.model(&mut session, &primary_data.records).unwrap();
    session
}

/// 参考数据: 五个工序, 非能源工序的输入均无同名输出
fn reference_records() -> Vec<String> {
    [
        "energy,INPUT,Energy;energia,14,KWH,0.1",
        "energy,OUTPUT,Emission,0.6,KGCO2EQ,0",
        "cutting,INPUT,Material;leather,0.8,KG,0.2",
        "cutting,OUTPUT,Emission,0.4,KGCO2EQ,0",
        "stitching,INPUT,Material;string,0.8,KG,0.2",
        "stitching,OUTPUT,Emission,0.2,KGCO2EQ,0",
        "assembling,OUTPUT,Waste;glue,0.1,KG,0",
        "assembling,OUTPUT,Emission,0.2,KGCO2EQ,0",
        "package,OUTPUT,Waste;tape,0.1,KG,0",
        "package,OUTPUT,Emission,0.2,KGCO2EQ,0",
    ]
    .iter()
    .map(|r| r.to_string())
    .collect()
}

#[test]
fn test_reference_scenario_total() {
    let session = model_files(&reference_records(), &reference_records());
    assert_eq!(session.primary_processes().len(), 5);

    let mut calculator = PcfCalculator::new();
    let delta = calculator.accumulate(session.primary_processes()).unwrap();

    assert!((delta - 9.24).abs() < 0.01, "delta = {}", delta);
    assert!(approx_eq(calculator.total(), delta));
}

#[test]
fn test_energy_only_chain_from_files() {
    // 主数据只含四个非能源工序, 能源工序从次级数据采用
    let secondary = secondary_records()[..2].to_vec();
    let primary = vec![
        "cutting,INPUT,Material;leather,0.8,KG,0.2".to_string(),
        "stitching,INPUT,Material;thread,0.1,KG,0".to_string(),
        "assembling,INPUT,Material;sole,0.3,KG,0".to_string(),
        "package,INPUT,Material;box,0.2,KG,0".to_string(),
    ];
    let session = model_files(&secondary, &primary);

    let mut calculator = PcfCalculator::new();
    let delta = calculator.accumulate(session.primary_processes()).unwrap();

    assert!(approx_eq(delta, 9.24), "delta = {}", delta);
    assert!(approx_eq(calculator.per_process()["energy"], 9.24));
    for name in ["cutting", "stitching", "assembling", "package"] {
        assert_eq!(calculator.per_process()[name], 0.0, "process {}", name);
    }
}

#[test]
fn test_backfill_and_completion_feed_calculation() {
    logging::init_test();
    let secondary_file = write_csv("secondaryData", &secondary_records());
    let primary_file = write_csv("primaryData", &primary_records());
    let parser = CsvParser::default();
    let manager = ProcessManager::new();
    let mut session = ModelingSession::new();

    let secondary_report = manager
        .model(&mut session, &parser.import(secondary_file.path()).unwrap().records)
        .unwrap();
    assert_eq!(secondary_report.mode, Some(IntakeMode::Secondary));
    assert_eq!(secondary_report.processes_created, 2);

    let primary_report = manager
        .model(&mut session, &parser.import(primary_file.path()).unwrap().records)
        .unwrap();
    assert_eq!(primary_report.mode, Some(IntakeMode::Primary));
    assert_eq!(primary_report.processes_created, 4);
    assert_eq!(primary_report.backfilled, 1);
    assert_eq!(primary_report.emissions_adopted, 1);
    assert!(primary_report.energy_adopted);

    // 回填后的皮革流
    let cutting = session
        .primary_processes()
        .iter()
        .find(|p| p.name == "cutting")
        .unwrap();
    let leather = &cutting.inputs[0];
    assert_eq!(leather.value(), 0.8);
    assert_eq!(leather.loss_rate(), 0.2);
    assert_eq!(leather.unit(), UnitType::Kg);
    assert_eq!(
        cutting.emission_named("LEATHER").map(|f| f.category()),
        Some(FlowCategory::Emission)
    );

    let mut calculator = PcfCalculator::new();
    calculator.accumulate(session.primary_processes()).unwrap();

    assert!(approx_eq(calculator.total(), EXPECTED_TOTAL), "total = {}", calculator.total());
    assert!(approx_eq(calculator.per_process()["cutting"], 0.48));
    assert_eq!(calculator.per_process().len(), 5);
}

#[test]
fn test_calculation_fails_without_required_process() {
    let mut primary = primary_records();
    primary.retain(|r| !r.starts_with("package"));
    let session = model_files(&secondary_records(), &primary);

    let mut calculator = PcfCalculator::new();
    assert_eq!(
        calculator.accumulate(session.primary_processes()),
        Err(EngineError::MissingProcess("package".to_string()))
    );
}

#[test]
fn test_export_after_calculation() {
    let session = model_files(&secondary_records(), &primary_records());
    let mut calculator = PcfCalculator::new();
    calculator.accumulate(session.primary_processes()).unwrap();

    let dir = TempDir::new().unwrap();
    let exporter = ResultExporter::new(dir.path().join("pcf.csv"));

    let all = exporter
        .export(&calculator.result(), Some(&FilterOptions::default()))
        .unwrap();
    assert_eq!(all, 5);

    let only_energy = exporter
        .export(
            &calculator.result(),
            Some(&FilterOptions::new(1.0, 10.0, Some("energy".to_string()))),
        )
        .unwrap();
    assert_eq!(only_energy, 1);

    let content = fs::read_to_string(exporter.output_path()).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "result,result_per_process");

    let (total, per_process) = lines[2].split_once(',').unwrap();
    assert!(approx_eq(total.parse::<f64>().unwrap(), EXPECTED_TOTAL));
    assert!(per_process.starts_with("energy: 9.24"));
    assert!(!per_process.contains(';'));
}

#[test]
fn test_configured_required_processes() {
    let config = ConfigManager::from_json_str(
        r#"{ "calculation": { "energy_process": "energy", "required_processes": ["energy", "cutting"] } }"#,
    )
    .unwrap();

    let primary = vec![primary_records()[0].clone()];
    let session = model_files(&secondary_records(), &primary);

    let mut calculator = PcfCalculator::from_settings(&config.settings().calculation);
    calculator.accumulate(session.primary_processes()).unwrap();
    assert!(approx_eq(calculator.total(), EXPECTED_TOTAL));

    // 默认必需工序下同一列表不完整
    assert!(matches!(
        PcfCalculator::new().accumulate(session.primary_processes()),
        Err(EngineError::MissingProcess(_))
    ));
}

#[test]
fn test_import_rejects_role_mismatch_and_bad_rows() {
    logging::init_test();
    let parser = CsvParser::default();

    let unknown = write_csv("measurements", &secondary_records());
    assert!(matches!(
        parser.import(unknown.path()),
        Err(ImportError::UnknownDataKind(_))
    ));

    let short_row = write_csv("primaryData", &["cutting,INPUT,Material".to_string()]);
    assert!(matches!(
        parser.import(short_row.path()),
        Err(ImportError::FieldCountMismatch { row: 2, expected: 6, actual: 3 })
    ));
}
