// ==========================================
// 产品碳足迹计算系统 - 导出层
// ==========================================
// 职责: 过滤并写出 PCF 总值与分工序值
// ==========================================

pub mod error;
pub mod filter;
pub mod result_exporter;

pub use error::{ExportError, ExportResult};
pub use filter::FilterOptions;
pub use result_exporter::ResultExporter;
