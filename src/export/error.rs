// ==========================================
// 产品碳足迹计算系统 - 导出模块错误类型
// ==========================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("总碳足迹必须为非负有限数值: {0}")]
    InvalidResult(f64),

    #[error("导出分工序结果时必须提供过滤条件")]
    MissingFilter,

    #[error("过滤条件的上下限必须非负: min={min}, max={max}")]
    NegativeFilterBound { min: f64, max: f64 },

    #[error("文件写入失败: {0}")]
    FileWriteError(String),

    #[error("CSV 写入失败: {0}")]
    CsvWriteError(String),
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::FileWriteError(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        ExportError::CsvWriteError(err.to_string())
    }
}

/// Result 类型别名
pub type ExportResult<T> = Result<T, ExportError>;
