// ==========================================
// 产品碳足迹计算系统 - 导入层
// ==========================================
// 职责: 外部数据导入,生成原始记录行与 Flow
// 支持: CSV
// ==========================================

// 模块声明
pub mod error;
pub mod file_parser;
pub mod flow_classifier;
pub mod importer_trait;

// 重导出核心类型
pub use error::{ClassifyError, ClassifyResult, ImportError, ImportResult};
pub use file_parser::{CsvParser, DataKind, ImportedData, RECORD_DELIMITER};
pub use flow_classifier::FlowClassifier;

// 重导出 Trait 接口
pub use importer_trait::{FileParser, FlowClassification};
