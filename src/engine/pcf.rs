// ==========================================
// 产品碳足迹计算系统 - PCF 计算引擎
// ==========================================
// 职责: 基于主数据工序列表计算总碳足迹与分工序碳足迹
// 输入: 完整的工序列表 (须含能源工序及全部必需工序)
// 输出: 总值 + 工序名(小写) -> 分项值
// ==========================================
// 计算规则 (逐工序、逐输入流):
// 1) 输入为 ENERGY 类: 累加 impact(输入, 能源汇总流)
// 2) 无论类别: 再累加 impact(输入, 本工序第一条同名输出流)
// 能源类输入因此可能计入两次, 这是有意的累计口径
// ==========================================
// 累加器语义: 同一实例多次调用 accumulate 会在已有总值上继续累加,
// 分工序值同样累加; 需要独立结果时请新建实例或调用 reset
// ==========================================

use crate::config::CalculationSettings;
use crate::domain::flow::Flow;
use crate::domain::process::Process;
use crate::domain::types::FlowCategory;
use crate::engine::energy::EnergyAggregator;
use crate::engine::error::{EngineError, EngineResult};
use crate::engine::impact::impact;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info, instrument};

/// PCF 结果 (供导出使用)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PcfResult {
    pub total: f64,
    /// None 表示只导出总值
    pub per_process: Option<BTreeMap<String, f64>>,
}

impl PcfResult {
    pub fn total_only(total: f64) -> Self {
        Self {
            total,
            per_process: None,
        }
    }
}

// ==========================================
// PcfCalculator - PCF 计算引擎
// ==========================================
#[derive(Debug, Clone)]
pub struct PcfCalculator {
    energy_process: String,
    required_processes: Vec<String>,
    total: f64,
    per_process: BTreeMap<String, f64>,
}

impl Default for PcfCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl PcfCalculator {
    /// 使用默认必需工序 (energy, cutting, stitching, assembling, package)
    pub fn new() -> Self {
        Self::from_settings(&CalculationSettings::default())
    }

    pub fn from_settings(settings: &CalculationSettings) -> Self {
        Self {
            energy_process: settings.energy_process.clone(),
            required_processes: settings.required_processes.clone(),
            total: 0.0,
            per_process: BTreeMap::new(),
        }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 计算一组工序并累加到已有结果
    ///
    /// # 前置条件 (按顺序检查, 任何累加发生之前)
    /// 1. processes 非空
    /// 2. 存在能源工序 (大小写不敏感)
    /// 3. 必需工序全部存在 (大小写不敏感), 否则报告第一个缺失者
    ///
    /// 任一工序的碳足迹溢出 (inf/NaN) 时返回 NonFiniteImpact, 累计值不变
    ///
    /// # 返回
    /// - Ok(f64): 本次调用新增的碳足迹
    #[instrument(skip_all, fields(processes = processes.len()))]
    pub fn accumulate(&mut self, processes: &[Process]) -> EngineResult<f64> {
        if processes.is_empty() {
            return Err(EngineError::EmptyProcessList);
        }

        let energy_process = processes
            .iter()
            .find(|p| p.is_named(&self.energy_process))
            .ok_or_else(|| EngineError::MissingEnergyProcess(self.energy_process.clone()))?;

        self.check_required(processes)?;

        let energy_aggregate = EnergyAggregator::aggregate(&energy_process.outputs)?;

        // 先算完全部工序, 校验通过后再写入累计值
        let mut subtotals = Vec::with_capacity(processes.len());
        let mut delta = 0.0;
        for process in processes {
            let subtotal = process_impact(process, &energy_aggregate);
            delta += subtotal;
            if !subtotal.is_finite() || !(self.total + delta).is_finite() {
                return Err(EngineError::NonFiniteImpact {
                    process: process.name.clone(),
                });
            }
            debug!(process = %process.name, subtotal, "工序碳足迹");
            subtotals.push((process.name.to_lowercase(), subtotal));
        }

        // 小写后同名的工序合并累加, 分项之和始终等于总值
        for (key, subtotal) in subtotals {
            *self.per_process.entry(key).or_insert(0.0) += subtotal;
        }
        self.total += delta;

        info!(delta, total = self.total, "PCF 计算完成");
        Ok(delta)
    }

    /// 累计总值
    pub fn total(&self) -> f64 {
        self.total
    }

    /// 累计分工序值 (键为小写工序名)
    pub fn per_process(&self) -> &BTreeMap<String, f64> {
        &self.per_process
    }

    /// 当前累计结果快照
    pub fn result(&self) -> PcfResult {
        PcfResult {
            total: self.total,
            per_process: Some(self.per_process.clone()),
        }
    }

    /// 清零累计结果
    pub fn reset(&mut self) {
        self.total = 0.0;
        self.per_process.clear();
    }

    fn check_required(&self, processes: &[Process]) -> EngineResult<()> {
        for required in &self.required_processes {
            if !processes.iter().any(|p| p.is_named(required)) {
                return Err(EngineError::MissingProcess(required.clone()));
            }
        }
        Ok(())
    }
}

/// 单个工序的碳足迹
fn process_impact(process: &Process, energy_aggregate: &Flow) -> f64 {
    process.inputs.iter().fold(0.0, |subtotal, input| {
        let energy_part = if input.category() == FlowCategory::Energy {
            impact(Some(input), Some(energy_aggregate))
        } else {
            0.0
        };
        let emission_part = impact(Some(input), process.output_named(input.name()));
        subtotal + energy_part + emission_part
    })
}
