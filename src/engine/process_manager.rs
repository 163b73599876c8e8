// ==========================================
// 产品碳足迹计算系统 - 工序建模引擎
// ==========================================
// 职责: 记录分类 -> 归入工序 -> 主数据补全
// 输入: 原始记录行 (工序名,方向,类别[;名称],数值,单位,损耗率)
// 输出: 更新 ModelingSession 中的工序列表
// ==========================================
// 补全规则 (仅 Primary 模式):
// 1) 数值为 0 的占位流: 从同名次级工序的同名同方向流回填 value/unit/loss_rate
// 2) 缺失排放: 输入流在本工序无同名 EMISSION 输出时,采用次级工序的同名 EMISSION 输出
// 3) 缺失能源: 主数据无能源工序时,采用次级能源工序
// 采用 = 复制 (copy-on-adopt), 之后对主数据的修改不会影响次级数据
// ==========================================

use crate::config::PcfSettings;
use crate::domain::flow::Flow;
use crate::domain::process::Process;
use crate::engine::error::{EngineError, EngineResult};
use crate::engine::session::{IntakeMode, ModelingSession};
use crate::importer::error::ClassifyError;
use crate::importer::file_parser::RECORD_DELIMITER;
use crate::importer::flow_classifier::FlowClassifier;
use crate::importer::importer_trait::FlowClassification;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// 单次建模调用的统计
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ModelingReport {
    pub mode: Option<IntakeMode>,
    pub records: usize,
    pub processes_created: usize,
    pub backfilled: usize,
    pub emissions_adopted: usize,
    pub energy_adopted: bool,
}

/// 主数据补全 (规则 2、3) 的统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CompletionStats {
    pub emissions_adopted: usize,
    pub energy_adopted: bool,
}

// ==========================================
// ProcessManager - 工序建模引擎
// ==========================================
pub struct ProcessManager<C: FlowClassification = FlowClassifier> {
    classifier: C,
    max_batch_size: usize,
    energy_process: String,
}

impl ProcessManager<FlowClassifier> {
    /// 使用默认配置创建
    pub fn new() -> Self {
        Self::from_settings(&PcfSettings::default())
    }

    pub fn from_settings(settings: &PcfSettings) -> Self {
        Self::with_classifier(FlowClassifier::new(), settings)
    }
}

impl Default for ProcessManager<FlowClassifier> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: FlowClassification> ProcessManager<C> {
    /// 注入自定义分类器
    pub fn with_classifier(classifier: C, settings: &PcfSettings) -> Self {
        Self {
            classifier,
            max_batch_size: settings.modeling.max_batch_size,
            energy_process: settings.calculation.energy_process.clone(),
        }
    }

    pub fn max_batch_size(&self) -> usize {
        self.max_batch_size
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 建模一批记录
    ///
    /// # 前置条件
    /// - records 非空且不超过 max_batch_size; 否则直接返回错误, 会话不变
    ///
    /// # 行为
    /// - Secondary 模式: 记录写入次级列表; 成功后切换到 Primary 模式
    /// - Primary 模式: 记录写入主数据列表, 并执行补全规则 1~3
    ///
    /// # 注意
    /// - 某条记录分类失败时整批返回错误, 但同批中此前的记录已写入, 不回滚;
    ///   模式不切换, 规则 2、3 不执行
    #[instrument(
        skip(self, session, records),
        fields(session_id = %session.session_id(), mode = %session.mode(), records = records.len())
    )]
    pub fn model<S: AsRef<str>>(
        &self,
        session: &mut ModelingSession,
        records: &[S],
    ) -> EngineResult<ModelingReport> {
        if records.is_empty() {
            return Err(EngineError::EmptyBatch);
        }
        if records.len() > self.max_batch_size {
            return Err(EngineError::BatchTooLarge {
                size: records.len(),
                max: self.max_batch_size,
            });
        }

        let mode = session.mode();
        let mut report = ModelingReport {
            mode: Some(mode),
            ..ModelingReport::default()
        };

        for (idx, record) in records.iter().enumerate() {
            let record = record.as_ref();
            let (process_name, mut flow) =
                self.classify_record(record)
                    .map_err(|source| EngineError::Classification {
                        row: idx + 1,
                        record: record.to_string(),
                        source,
                    })?;

            if mode == IntakeMode::Primary && flow.is_placeholder() {
                if backfill_placeholder(session, &process_name, &mut flow) {
                    report.backfilled += 1;
                }
            }

            if attach_flow(session.target_mut(), &process_name, flow) {
                report.processes_created += 1;
            }
            report.records += 1;
        }

        if mode == IntakeMode::Primary {
            let stats = self.complete_primary(session);
            report.emissions_adopted = stats.emissions_adopted;
            report.energy_adopted = stats.energy_adopted;
        }

        if session.advance() {
            info!(
                processes = session.secondary_processes().len(),
                "次级数据建模完成, 切换到主数据模式"
            );
        }

        debug!(?report, "建模批次完成");
        Ok(report)
    }

    /// 主数据补全: 缺失排放 (规则 2) + 缺失能源 (规则 3)
    ///
    /// 幂等: 重复执行不会产生重复条目
    pub fn complete_primary(&self, session: &mut ModelingSession) -> CompletionStats {
        let (secondary, primary) = session.split_mut();
        let mut stats = CompletionStats::default();

        for process in primary.iter_mut() {
            stats.emissions_adopted += adopt_missing_emissions(secondary, process);
        }

        if !primary.iter().any(|p| p.is_named(&self.energy_process)) {
            if let Some(energy) = secondary.iter().find(|p| p.is_named(&self.energy_process)) {
                primary.push(energy.clone());
                stats.energy_adopted = true;
                info!(process = %energy.name, "主数据缺少能源工序, 已采用次级能源工序");
            } else {
                warn!(energy = %self.energy_process, "主数据与次级数据均无能源工序");
            }
        }

        stats
    }

    /// 拆分记录: 字段 0 为工序名, 其余交给分类器
    fn classify_record(&self, record: &str) -> Result<(String, Flow), ClassifyError> {
        let fields: Vec<&str> = record.split(RECORD_DELIMITER).collect();
        let (process_name, flow_fields) = match fields.split_first() {
            Some((name, rest)) if !name.trim().is_empty() => (name.trim(), rest),
            _ => return Err(ClassifyError::MissingField("process")),
        };

        let flow = self.classifier.classify(flow_fields)?;
        Ok((process_name.to_string(), flow))
    }
}

/// 归入工序 (不存在则创建), 返回是否新建了工序
fn attach_flow(processes: &mut Vec<Process>, process_name: &str, flow: Flow) -> bool {
    match processes.iter_mut().find(|p| p.name == process_name) {
        Some(process) => {
            process.attach(flow);
            false
        }
        None => {
            let mut process = Process::new(process_name);
            process.attach(flow);
            processes.push(process);
            true
        }
    }
}

/// 规则 1: 占位流回填, 返回是否回填成功
fn backfill_placeholder(session: &ModelingSession, process_name: &str, flow: &mut Flow) -> bool {
    let source = session.secondary_named(process_name).and_then(|secondary| {
        secondary
            .flows(flow.direction())
            .iter()
            .find(|f| f.name() == flow.name())
    });

    let Some(source) = source else {
        return false;
    };

    match flow.backfill_from(source) {
        Ok(()) => {
            debug!(process = process_name, flow = flow.name(), "占位流已回填");
            true
        }
        Err(e) => {
            warn!(process = process_name, flow = flow.name(), error = %e, "占位流回填被拒绝");
            false
        }
    }
}

/// 规则 2: 为缺少同名排放的输入流采用次级排放, 返回采用数量
fn adopt_missing_emissions(secondary: &[Process], process: &mut Process) -> usize {
    let Some(source) = secondary.iter().find(|p| p.name == process.name) else {
        return 0;
    };

    let mut adopted: Vec<Flow> = Vec::new();
    for input in &process.inputs {
        let already_present = process.emission_named(input.name()).is_some()
            || adopted.iter().any(|f| f.name() == input.name());
        if already_present {
            continue;
        }
        if let Some(emission) = source.emission_named(input.name()) {
            adopted.push(emission.clone());
        }
    }

    let count = adopted.len();
    if count > 0 {
        debug!(process = %process.name, count, "已采用次级排放流");
    }
    process.outputs.extend(adopted);
    count
}
