// ==========================================
// 产品碳足迹计算系统 - 能源汇总
// ==========================================
// 职责: 将能源工序的全部输出流汇总为一条合成流
// 输出: ENERGY / TOTALENERGY / OUTPUT / GCO2EQKWH / 损耗率 0
// ==========================================

use crate::domain::flow::Flow;
use crate::domain::types::{Direction, FlowCategory, UnitType};
use crate::engine::error::EngineResult;
use tracing::debug;

/// 能源汇总流名称
pub const TOTAL_ENERGY_FLOW: &str = "TOTALENERGY";

pub struct EnergyAggregator;

impl EnergyAggregator {
    /// 汇总输出流
    ///
    /// 不按类别过滤: 能源工序的输出默认已是与能源相关的排放强度。
    /// 求和溢出为无穷大时返回 InvalidFlow 错误。
    pub fn aggregate(energy_outputs: &[Flow]) -> EngineResult<Flow> {
        let total: f64 = energy_outputs.iter().map(Flow::value).sum();
        debug!(flows = energy_outputs.len(), total, "能源输出汇总完成");

        Ok(Flow::new(
            FlowCategory::Energy,
            TOTAL_ENERGY_FLOW,
            Direction::Output,
            total,
            UnitType::GCo2EqKwh,
            0.0,
        )?)
    }
}
