//! 日誌初始化

use tracing_subscriber::EnvFilter;

/// 初始化 tracing；輸出到 stderr，stdout 保留給命令協定
///
/// `RUST_LOG` 優先，否則預設 `warn`，`verbose` 時為 `debug`。
/// 重複呼叫無副作用。
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}
