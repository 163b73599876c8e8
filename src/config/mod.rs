// ==========================================
// 产品碳足迹计算系统 - 配置层
// ==========================================
// 职责: 系统配置管理,文件覆写 + 默认值
// ==========================================

pub mod config_manager;
pub mod error;
pub mod pcf_settings;

// 重导出核心配置管理器
pub use config_manager::{config_keys, ConfigManager};
pub use error::{ConfigError, ConfigResult};
pub use pcf_settings::{
    CalculationSettings, ExportSettings, ImportSettings, ModelingSettings, PcfSettings,
};
