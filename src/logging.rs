// ==========================================
// 集装箱货运看板 - 日志系统
// ==========================================
// 使用 tracing + tracing-subscriber
// 输出: 人类可读文本 (init) / JSON 行 (init_json)
// 级别: RUST_LOG 优先,否则使用默认过滤
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 默认过滤: 本库 info,其余 warn
const DEFAULT_FILTER: &str = "warn,shipment_board=info";

fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// 初始化日志系统（文本格式）
///
/// # 环境变量
/// - RUST_LOG: 日志级别过滤器
///   例如: RUST_LOG=debug 或 RUST_LOG=shipment_board::engine=trace
///
/// # 示例
/// ```no_run
/// use shipment_board::logging;
/// logging::init();
/// ```
pub fn init() {
    let _ = fmt()
        .with_env_filter(env_filter(DEFAULT_FILTER))
        .with_target(true)
        .with_line_number(true)
        .try_init();
}

/// 初始化日志系统（JSON 行格式,供日志采集使用）
pub fn init_json() {
    let _ = fmt()
        .json()
        .with_env_filter(env_filter(DEFAULT_FILTER))
        .with_current_span(true)
        .try_init();
}

/// 初始化测试环境的日志系统
///
/// debug 级别,输出走测试捕获; 重复调用无副作用
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
