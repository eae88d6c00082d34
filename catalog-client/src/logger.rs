//! Logging Infrastructure
//!
//! `RUST_LOG` wins over the level passed in when it is set.

use tracing_subscriber::EnvFilter;

/// Initialize the logger
pub fn init_logger() {
    init_logger_with_level(None);
}

/// Initialize the logger with an explicit default level
pub fn init_logger_with_level(log_level: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("catalog_client={level},catalog={level}")));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false)
        .try_init();
}
