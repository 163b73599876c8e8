// ==========================================
// 产品碳足迹计算系统 - 领域层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use crate::domain::types::{FlowCategory, UnitType};
use thiserror::Error;

/// 流构造校验错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlowError {
    #[error("流名称不能为空")]
    EmptyName,

    #[error("{field} 不能为负数: {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} 必须是有限数值: {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("{category} 的单位必须属于 {allowed:?}，实际 {unit}")]
    UnitNotAllowed {
        category: FlowCategory,
        unit: UnitType,
        allowed: &'static [UnitType],
    },
}

/// Result 类型别名
pub type FlowResult<T> = Result<T, FlowError>;
