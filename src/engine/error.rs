// ==========================================
// 产品碳足迹计算系统 - 引擎层错误类型
// ==========================================
// 职责: 建模与计算的前置条件错误
// 红线: 每个错误只对应一个前置条件,不重试
// ==========================================

use crate::domain::error::FlowError;
use crate::importer::error::ClassifyError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    // ===== 建模批次错误 =====
    #[error("建模批次不能为空")]
    EmptyBatch,

    #[error("建模批次过大: {size} 条记录（上限 {max}）")]
    BatchTooLarge { size: usize, max: usize },

    #[error("记录分类失败 (第 {row} 条: {record}): {source}")]
    Classification {
        row: usize,
        record: String,
        source: ClassifyError,
    },

    // ===== PCF 计算前置条件 =====
    #[error("工序列表不能为空")]
    EmptyProcessList,

    #[error("缺少能源工序: {0}")]
    MissingEnergyProcess(String),

    #[error("缺少必需工序: {0}")]
    MissingProcess(String),

    #[error("工序 {process} 的碳足迹溢出为非有限数值")]
    NonFiniteImpact { process: String },

    // ===== 领域校验 =====
    #[error(transparent)]
    InvalidFlow(#[from] FlowError),
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, EngineError>;
