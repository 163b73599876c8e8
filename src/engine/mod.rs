// ==========================================
// 产品碳足迹计算系统 - 引擎层
// ==========================================
// 职责: 工序建模 (合并与补全) + 碳足迹计算
// 红线: 单线程、同步、纯内存计算
// ==========================================

pub mod energy;
pub mod error;
pub mod impact;
pub mod pcf;
pub mod process_manager;
pub mod session;

// 重导出核心引擎
pub use energy::{EnergyAggregator, TOTAL_ENERGY_FLOW};
pub use error::{EngineError, EngineResult};
pub use impact::{flow_inefficiency, impact};
pub use pcf::{PcfCalculator, PcfResult};
pub use process_manager::{CompletionStats, ModelingReport, ProcessManager};
pub use session::{IntakeMode, ModelingSession};
