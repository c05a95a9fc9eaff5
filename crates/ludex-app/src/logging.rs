//! Logging infrastructure
//!
//! Console output for development plus a daily-rotated file under the data
//! directory. `RUST_LOG` overrides the default filter.

use std::path::PathBuf;

use tracing_subscriber::{
    EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt,
};

const DEFAULT_FILTER: &str =
    "info,ludex_app=debug,ludex_api=debug,ludex_table=debug,ludex_filters=debug,ludex_forms=debug";

/// Directory the rotated log files are written to.
pub fn log_directory() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ludex")
        .join("logs")
}

/// Initialize the logging system. Returns the file-appender guard, which
/// must stay alive for the lifetime of the process.
pub fn init() -> anyhow::Result<tracing_appender::non_blocking::WorkerGuard> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let file_appender = tracing_appender::rolling::daily(&log_dir, "ludex.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .boxed();
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .boxed();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}
