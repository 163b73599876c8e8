// ==========================================
// 产品碳足迹计算系统 - 配置管理器
// ==========================================
// 职责: 配置加载、校验、快照
// 存储: JSON 文件 (可选), 缺省值兜底
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::pcf_settings::PcfSettings;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// 配置键 (用于错误信息定位)
pub mod config_keys {
    pub const MAX_BATCH_SIZE: &str = "modeling.max_batch_size";
    pub const ENERGY_PROCESS: &str = "calculation.energy_process";
    pub const REQUIRED_PROCESSES: &str = "calculation.required_processes";
    pub const MAX_PATH_LENGTH: &str = "import.max_path_length";
    pub const EXPECTED_FIELD_COUNT: &str = "import.expected_field_count";
    pub const OUTPUT_PATH: &str = "export.output_path";
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    settings: PcfSettings,
}

impl ConfigManager {
    /// 使用默认配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 从 JSON 文件加载配置
    ///
    /// # 参数
    /// - path: 配置文件路径
    ///
    /// # 返回
    /// - Ok(ConfigManager): 已校验的配置
    /// - Err: 文件读取失败、格式错误、取值非法
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let manager = Self::from_json_str(&raw)?;
        info!(path = %path.display(), "配置文件加载完成");
        Ok(manager)
    }

    /// 从 JSON 字符串加载配置
    pub fn from_json_str(raw: &str) -> ConfigResult<Self> {
        let settings: PcfSettings = serde_json::from_str(raw)?;
        Self::from_settings(settings)
    }

    /// 从已有配置对象创建 (会执行校验)
    pub fn from_settings(settings: PcfSettings) -> ConfigResult<Self> {
        let manager = Self { settings };
        manager.validate()?;
        Ok(manager)
    }

    pub fn settings(&self) -> &PcfSettings {
        &self.settings
    }

    /// 校验配置取值
    pub fn validate(&self) -> ConfigResult<()> {
        let s = &self.settings;

        if s.modeling.max_batch_size == 0 {
            return Err(invalid(config_keys::MAX_BATCH_SIZE, "必须大于 0"));
        }

        let energy = s.calculation.energy_process.trim();
        if energy.is_empty() {
            return Err(invalid(config_keys::ENERGY_PROCESS, "不能为空"));
        }
        if !s
            .calculation
            .required_processes
            .iter()
            .any(|p| p.eq_ignore_ascii_case(energy))
        {
            return Err(invalid(
                config_keys::REQUIRED_PROCESSES,
                &format!("必须包含能源工序 {}", energy),
            ));
        }

        if s.import.max_path_length == 0 {
            return Err(invalid(config_keys::MAX_PATH_LENGTH, "必须大于 0"));
        }
        if s.import.expected_field_count < 2 {
            return Err(invalid(config_keys::EXPECTED_FIELD_COUNT, "至少需要 2 个字段"));
        }
        if s.export.output_path.trim().is_empty() {
            return Err(invalid(config_keys::OUTPUT_PATH, "不能为空"));
        }

        debug!("配置校验通过");
        Ok(())
    }

    /// 获取生效配置的快照（JSON格式）
    ///
    /// # 用途
    /// - 在计算开始时写入日志,便于复现结果
    pub fn get_config_snapshot(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string(&self.settings)?)
    }
}

fn invalid(key: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        message: message.to_string(),
    }
}
