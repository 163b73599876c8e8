// ==========================================
// 产品碳足迹计算系统 - 结果导出器
// ==========================================
// 职责: 将总值与分工序值追加写入 CSV
// 格式: result,result_per_process
//       9.24,assembling: 0; cutting: 0; energy: 9.24
// ==========================================

use crate::config::ExportSettings;
use crate::engine::pcf::PcfResult;
use crate::export::error::{ExportError, ExportResult};
use crate::export::filter::FilterOptions;
use csv::WriterBuilder;
use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::info;

const HEADER: [&str; 2] = ["result", "result_per_process"];

// ==========================================
// ResultExporter - 结果导出器
// ==========================================
#[derive(Debug, Clone)]
pub struct ResultExporter {
    output_path: PathBuf,
}

impl ResultExporter {
    pub fn new<P: Into<PathBuf>>(output_path: P) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }

    pub fn from_settings(settings: &ExportSettings) -> Self {
        Self::new(&settings.output_path)
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// 导出结果 (追加一行)
    ///
    /// # 规则
    /// - 总值必须为非负有限数值
    /// - 有分工序数据时必须提供过滤条件, 且上下限非负
    /// - 无分工序数据时只写总值
    ///
    /// # 返回
    /// - Ok(usize): 写入的分工序条目数
    pub fn export(&self, result: &PcfResult, filter: Option<&FilterOptions>) -> ExportResult<usize> {
        if !result.total.is_finite() || result.total < 0.0 {
            return Err(ExportError::InvalidResult(result.total));
        }

        let filtered = match &result.per_process {
            Some(per_process) => {
                let filter = filter.ok_or(ExportError::MissingFilter)?;
                filter.validate()?;
                Some(filter.apply(per_process))
            }
            None => None,
        };

        self.append_row(result.total, filtered.as_ref())?;

        let written = filtered.as_ref().map_or(0, BTreeMap::len);
        info!(
            path = %self.output_path.display(),
            total = result.total,
            processes = written,
            "结果导出成功"
        );
        Ok(written)
    }

    /// 清空导出文件 (文件不存在时不做任何事)
    pub fn clear(&self) -> ExportResult<()> {
        if self.output_path.exists() {
            fs::write(&self.output_path, "")?;
            info!(path = %self.output_path.display(), "导出文件已清空");
        }
        Ok(())
    }

    fn append_row(&self, total: f64, per_process: Option<&BTreeMap<String, f64>>) -> ExportResult<()> {
        if let Some(dir) = self.output_path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.output_path)?;
        let is_empty = file.metadata()?.len() == 0;

        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        if is_empty {
            writer.write_record(HEADER)?;
        }

        let per_process_column = per_process.map(format_per_process).unwrap_or_default();
        writer.write_record([total.to_string(), per_process_column])?;
        writer.flush()?;
        Ok(())
    }
}

/// "name: value; name: value"
fn format_per_process(per_process: &BTreeMap<String, f64>) -> String {
    per_process
        .iter()
        .map(|(name, value)| format!("{}: {}", name, value))
        .collect::<Vec<_>>()
        .join("; ")
}
