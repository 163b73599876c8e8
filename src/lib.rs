// ==========================================
// 产品碳足迹计算系统 - 核心库
// ==========================================
// 流程: CSV 导入 -> 流分类 -> 工序建模 (辅数据 -> 主数据)
//       -> PCF 计算 -> 结果导出
// 运行方式: 单线程、同步、纯内存
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 流与工序
pub mod domain;

// 导入层 - CSV 读取与流分类
pub mod importer;

// 引擎层 - 工序建模与碳足迹计算
pub mod engine;

// 导出层 - 结果过滤与写出
pub mod export;

// 配置层 - 系统配置
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{Direction, FlowCategory, UnitType};

// 领域实体
pub use domain::{Flow, Process};

// 导入
pub use importer::{CsvParser, DataKind, FlowClassifier, ImportedData};

// 引擎
pub use engine::{
    EnergyAggregator, IntakeMode, ModelingReport, ModelingSession, PcfCalculator, PcfResult,
    ProcessManager,
};

// 导出
pub use export::{FilterOptions, ResultExporter};

// 配置
pub use config::{ConfigManager, PcfSettings};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "产品碳足迹计算系统";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
