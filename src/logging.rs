use anyhow::{Context, Result};
use camino::Utf8Path;
use std::fs;
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Log file prefix used by the rotating file appender
pub const LOG_PREFIX: &str = "apidoc";

fn env_filter(debug_mode: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if debug_mode {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    })
}

/// Setup console logging, plus a daily rotating log file when `log_dir` is set.
///
/// The console layer is the colored path every warning and diagnostic line
/// ends up on. `RUST_LOG` overrides the level picked by `debug_mode`.
///
/// # Returns
/// The file appender's guard, which must be held for the duration of the
/// program to keep file logging active
pub fn setup_logging(debug_mode: bool, log_dir: Option<&Utf8Path>) -> Result<Option<WorkerGuard>> {
    let console_layer = tracing_subscriber::fmt::layer()
        .with_ansi(true)
        .with_target(false)
        .without_time();

    let Some(log_dir) = log_dir else {
        tracing_subscriber::registry()
            .with(env_filter(debug_mode))
            .with(console_layer)
            .try_init()
            .context("Failed to install logging subscriber")?;
        return Ok(None);
    };

    create_log_dir(log_dir)?;

    let file_appender = rolling::daily(log_dir, LOG_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false) // No ANSI codes in log files
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter(debug_mode))
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install logging subscriber")?;

    tracing::debug!("Logging initialized: dir={}, debug={}", log_dir, debug_mode);

    Ok(Some(guard))
}

fn create_log_dir(log_dir: &Utf8Path) -> Result<()> {
    if !log_dir.exists() {
        fs::create_dir_all(log_dir)
            .with_context(|| format!("Failed to create log directory: {}", log_dir))?;
    }
    Ok(())
}
