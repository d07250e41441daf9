use tracing_subscriber::{fmt, EnvFilter};

/// 初始化日志
///
/// 优先使用 `RUST_LOG`，否则使用传入的级别
pub fn init(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // 重复初始化（例如多个测试）时忽略错误
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}
