// ==========================================
// 产品碳足迹计算系统 - 导出过滤条件
// ==========================================

use crate::export::error::{ExportError, ExportResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 分工序结果过滤条件
///
/// 保留条件: (process_name 为空 或 等于工序名) 且 min_value <= 值 <= max_value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub min_value: f64,
    pub max_value: f64,
    #[serde(default)]
    pub process_name: Option<String>,
}

impl Default for FilterOptions {
    /// 不过滤任何工序
    fn default() -> Self {
        Self {
            min_value: 0.0,
            max_value: f64::MAX,
            process_name: None,
        }
    }
}

impl FilterOptions {
    pub fn new(min_value: f64, max_value: f64, process_name: Option<String>) -> Self {
        Self {
            min_value,
            max_value,
            process_name,
        }
    }

    /// 上下限必须非负
    pub fn validate(&self) -> ExportResult<()> {
        if self.min_value < 0.0 || self.max_value < 0.0 {
            return Err(ExportError::NegativeFilterBound {
                min: self.min_value,
                max: self.max_value,
            });
        }
        Ok(())
    }

    /// 工序名按原样比较 (区分大小写)
    pub fn matches(&self, process: &str, value: f64) -> bool {
        let name_ok = self
            .process_name
            .as_deref()
            .map_or(true, |name| name == process);
        name_ok && self.min_value <= value && value <= self.max_value
    }

    pub fn apply(&self, per_process: &BTreeMap<String, f64>) -> BTreeMap<String, f64> {
        per_process
            .iter()
            .filter(|(name, value)| self.matches(name, **value))
            .map(|(name, value)| (name.clone(), *value))
            .collect()
    }
}
