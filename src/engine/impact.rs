// ==========================================
// 产品碳足迹计算系统 - 影响计算公式
// ==========================================
// 职责: 流的损耗放大值 (inefficiency) 与影响值
// 红线: 纯函数; 缺少操作数时贡献为 0,不报错
// ==========================================

use crate::domain::flow::Flow;

/// 损耗放大值: value * (1 + loss_rate)
///
/// 缺少流时返回 0
pub fn flow_inefficiency(flow: Option<&Flow>) -> f64 {
    match flow {
        Some(flow) => flow.value() * (1.0 + flow.loss_rate()),
        None => 0.0,
    }
}

/// 影响值: inefficiency(flow) * inefficiency(emission_flow)
///
/// 任一操作数缺失时返回 0。能源类输入以能源汇总流作为 emission_flow。
pub fn impact(flow: Option<&Flow>, emission_flow: Option<&Flow>) -> f64 {
    match (flow, emission_flow) {
        (Some(_), Some(_)) => flow_inefficiency(flow) * flow_inefficiency(emission_flow),
        _ => 0.0,
    }
}
