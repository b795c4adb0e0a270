use tracing_subscriber::{fmt, EnvFilter};

/// RUST_LOGが無ければ info（--verbose なら debug）
pub fn init(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("appstore_preview={level},tower_http={level}"))
    });

    // テストなどで二重初期化されても無視
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}
