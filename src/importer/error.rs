// ==========================================
// 产品碳足迹计算系统 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use crate::domain::error::FlowError;
use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 路径相关错误 =====
    #[error("文件路径不能为空")]
    EmptyPath,

    #[error("文件路径过长: {length} 个字符（上限 {max}）")]
    PathTooLong { length: usize, max: usize },

    #[error("文件格式不支持: {0}（仅支持 .csv）")]
    UnsupportedFormat(String),

    #[error("文件名必须标明 primary 或 secondary: {0}")]
    UnknownDataKind(String),

    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("CSV 解析失败: {0}")]
    CsvParseError(String),

    // ===== 数据格式错误 =====
    #[error("字段数量错误 (行 {row}): 期望 {expected}，实际 {actual}")]
    FieldCountMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("字段包含分隔符 (行 {row}, 字段 {field})")]
    EmbeddedDelimiter { row: usize, field: usize },
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;

/// 流分类错误类型
///
/// 分类失败一律以值返回,不会得到半成品 Flow
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassifyError {
    #[error("缺少字段: {0}")]
    MissingField(&'static str),

    #[error("流方向非法: {0}")]
    InvalidDirection(String),

    #[error("流类别非法: {0}")]
    InvalidCategory(String),

    #[error("计量单位非法: {0}")]
    InvalidUnit(String),

    #[error("数值格式错误 (字段 {field}): {value}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("流校验失败: {0}")]
    InvalidFlow(#[from] FlowError),
}

/// Result 类型别名
pub type ClassifyResult<T> = Result<T, ClassifyError>;
