// ==========================================
// 产品碳足迹计算系统 - 文件解析器实现
// ==========================================
// 阶段: 文件读取与解析
// 支持: CSV (.csv), 文件名标明 primary / secondary
// ==========================================

use crate::config::ImportSettings;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::importer_trait::FileParser;
use chrono::{DateTime, Utc};
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::path::Path;
use tracing::{debug, info};

/// 记录行的字段分隔符
pub const RECORD_DELIMITER: char = ',';

// ==========================================
// 数据类别 (Data Kind)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataKind {
    Primary,   // 现场实测数据
    Secondary, // 参考/行业平均数据
}

impl DataKind {
    /// 根据文件名判断数据类别（大小写不敏感，同时出现时 primary 优先）
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let lower = file_name.to_lowercase();
        if lower.contains("primary") {
            Some(DataKind::Primary)
        } else if lower.contains("secondary") {
            Some(DataKind::Secondary)
        } else {
            None
        }
    }
}

impl fmt::Display for DataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataKind::Primary => write!(f, "PRIMARY"),
            DataKind::Secondary => write!(f, "SECONDARY"),
        }
    }
}

/// 导入结果: 原始记录行 (已去表头)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportedData {
    pub kind: DataKind,
    pub source: String,
    pub records: Vec<String>,
    pub imported_at: DateTime<Utc>,
}

// ==========================================
// CSV Parser 实现
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct CsvParser {
    settings: ImportSettings,
}

impl CsvParser {
    pub fn new(settings: ImportSettings) -> Self {
        Self { settings }
    }

    /// 按路径导入
    pub fn import<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<ImportedData> {
        self.parse_records(file_path.as_ref())
    }

    /// 路径校验: 非空、长度、扩展名、数据类别
    fn check_path(&self, path: &Path) -> ImportResult<DataKind> {
        let display = path.to_string_lossy();
        if display.trim().is_empty() {
            return Err(ImportError::EmptyPath);
        }

        let length = display.chars().count();
        if length > self.settings.max_path_length {
            return Err(ImportError::PathTooLong {
                length,
                max: self.settings.max_path_length,
            });
        }

        match path.extension().and_then(|e| e.to_str()) {
            Some("csv") => {}
            Some(ext) => return Err(ImportError::UnsupportedFormat(ext.to_string())),
            None => return Err(ImportError::UnsupportedFormat(display.to_string())),
        }

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        DataKind::from_file_name(&file_name)
            .ok_or_else(|| ImportError::UnknownDataKind(display.to_string()))
    }
}

impl FileParser for CsvParser {
    fn parse_records(&self, file_path: &Path) -> ImportResult<ImportedData> {
        let path = file_path;
        let kind = self.check_path(path)?;

        // 检查文件存在
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        // 打开 CSV 文件（第一行为表头）
        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 字段数由下面逐行检查
            .from_reader(file);

        let expected = self.settings.expected_field_count;
        let mut records = Vec::new();
        for (row_idx, result) in reader.records().enumerate() {
            let record = result?;
            // 行号按文件行计 (表头为第 1 行)
            let row = row_idx + 2;

            // 跳过完全空白的行
            if record.iter().all(|v| v.trim().is_empty()) {
                continue;
            }

            if record.len() != expected {
                return Err(ImportError::FieldCountMismatch {
                    row,
                    expected,
                    actual: record.len(),
                });
            }

            if let Some(field) = record.iter().position(|v| v.contains(RECORD_DELIMITER)) {
                return Err(ImportError::EmbeddedDelimiter { row, field });
            }

            let fields: Vec<&str> = record.iter().map(|v| v.trim()).collect();
            records.push(fields.join(&RECORD_DELIMITER.to_string()));
        }

        debug!(rows = records.len(), "CSV 记录读取完成");
        info!(
            source = %path.display(),
            kind = %kind,
            records = records.len(),
            "数据文件导入成功"
        );

        Ok(ImportedData {
            kind,
            source: path.display().to_string(),
            records,
            imported_at: Utc::now(),
        })
    }
}
