use serde::{Deserialize, Serialize};

/// 系统配置（持久化对象）
///
/// 存储位置：JSON 配置文件；缺省字段一律取默认值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PcfSettings {
    #[serde(default)]
    pub modeling: ModelingSettings,

    #[serde(default)]
    pub calculation: CalculationSettings,

    #[serde(default)]
    pub import: ImportSettings,

    #[serde(default)]
    pub export: ExportSettings,
}

/// 建模参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelingSettings {
    /// 单次建模调用允许的最大记录数
    #[serde(default = "default_max_batch_size")]
    pub max_batch_size: usize,
}

/// PCF 计算参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationSettings {
    /// 能源工序名称（大小写不敏感）
    #[serde(default = "default_energy_process")]
    pub energy_process: String,

    /// 计算前必须存在的工序（大小写不敏感，按顺序检查）
    #[serde(default = "default_required_processes")]
    pub required_processes: Vec<String>,
}

/// 导入参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportSettings {
    /// 文件路径最大长度
    #[serde(default = "default_max_path_length")]
    pub max_path_length: usize,

    /// 每行字段数
    #[serde(default = "default_expected_field_count")]
    pub expected_field_count: usize,
}

/// 导出参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSettings {
    /// 结果文件路径
    #[serde(default = "default_output_path")]
    pub output_path: String,
}

impl Default for ModelingSettings {
    fn default() -> Self {
        Self {
            max_batch_size: default_max_batch_size(),
        }
    }
}

impl Default for CalculationSettings {
    fn default() -> Self {
        Self {
            energy_process: default_energy_process(),
            required_processes: default_required_processes(),
        }
    }
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            max_path_length: default_max_path_length(),
            expected_field_count: default_expected_field_count(),
        }
    }
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
        }
    }
}

fn default_max_batch_size() -> usize {
    50
}

fn default_energy_process() -> String {
    "energy".to_string()
}

fn default_required_processes() -> Vec<String> {
    ["energy", "cutting", "stitching", "assembling", "package"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_max_path_length() -> usize {
    255
}

fn default_expected_field_count() -> usize {
    6
}

fn default_output_path() -> String {
    "export/pcf.csv".to_string()
}
