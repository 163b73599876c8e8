// ==========================================
// 产品碳足迹计算系统 - 领域模型层
// ==========================================
// 职责: 定义流、工序及其枚举类型
// 红线: 不含文件读写逻辑,不含引擎逻辑
// ==========================================

pub mod error;
pub mod flow;
pub mod process;
pub mod types;

// 重导出核心类型
pub use error::{FlowError, FlowResult};
pub use flow::Flow;
pub use process::Process;
pub use types::{Direction, FlowCategory, UnitType};
