// ==========================================
// 产品碳足迹计算系统 - 日志初始化
// ==========================================
// 输出: tracing-subscriber fmt 层
// 级别: RUST_LOG 优先, 否则使用各入口的缺省级别
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 命令行缺省级别
const CLI_LEVEL: &str = "info";

/// 测试缺省级别: 能看到建模批次、回填与分工序计算明细
const TEST_LEVEL: &str = "pcf_engine=debug";

fn filter_or(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// 命令行入口调用
///
/// # 示例
/// ```no_run
/// pcf_engine::logging::init();
/// ```
pub fn init() {
    let _ = fmt()
        .with_env_filter(filter_or(CLI_LEVEL))
        .with_target(true)
        .with_line_number(true)
        .try_init();
}

/// 测试调用; 输出交给测试框架捕获, 多个测试重复调用只生效一次
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(filter_or(TEST_LEVEL))
        .with_test_writer()
        .try_init();
}
