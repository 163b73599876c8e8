// ==========================================
// 产品碳足迹计算系统 - 导入 Trait
// ==========================================
// 职责: 定义文件解析与流分类接口（不包含实现）
// ==========================================

use crate::domain::flow::Flow;
use crate::importer::error::{ClassifyResult, ImportResult};
use crate::importer::file_parser::ImportedData;
use std::path::Path;

// ==========================================
// FileParser Trait
// ==========================================
// 用途: 文件解析接口
// 实现者: CsvParser
pub trait FileParser: Send + Sync {
    /// 解析文件为原始记录行
    ///
    /// # 参数
    /// - file_path: 文件路径
    ///
    /// # 返回
    /// - Ok(ImportedData): 数据类别 + 去表头后的记录行
    /// - Err: 路径非法、文件读取错误、格式错误
    fn parse_records(&self, file_path: &Path) -> ImportResult<ImportedData>;
}

// ==========================================
// FlowClassification Trait
// ==========================================
// 用途: 将一条记录的字段（去掉工序名后）分类为 Flow
// 实现者: FlowClassifier
pub trait FlowClassification: Send + Sync {
    /// 分类一条记录
    ///
    /// # 参数
    /// - fields: [方向, "类别" 或 "类别;名称", 数值?, 单位?, 损耗率?]
    ///
    /// # 返回
    /// - Ok(Flow): 已通过构造校验的流
    /// - Err: 任意解析或校验失败
    fn classify(&self, fields: &[&str]) -> ClassifyResult<Flow>;
}
