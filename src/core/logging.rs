//! Logging Setup
//!
//! Installs the global `tracing` subscriber for the CLI:
//! - human-readable output on stderr (stdout carries command output)
//! - optional JSON file output, rolled daily
//! - `log` crate records bridged into `tracing`
//!
//! `RUST_LOG` takes precedence over the configured level.

use std::fs;
use std::io;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Layer};

use crate::config::{AppConfig, LoggingConfig};

const LOG_FILE_PREFIX: &str = "ttrpg-statblock.log";

fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Initialize logging.
///
/// When file logging is enabled, returns a `WorkerGuard` which must be kept
/// alive for the duration of the application so buffered logs are flushed on
/// shutdown.
pub fn init(config: &AppConfig) -> Option<WorkerGuard> {
    let (file_layer, guard) = if config.logging.file_enabled {
        let log_dir = config.log_dir();
        match file_writer(&log_dir) {
            Ok((writer, guard)) => {
                let layer = tracing_subscriber::fmt::layer()
                    .with_writer(writer)
                    .json()
                    .with_file(true)
                    .with_line_number(true)
                    .with_target(true)
                    .with_filter(env_filter(&config.logging));
                (Some(layer), Some(guard))
            }
            Err(e) => {
                eprintln!("Failed to create log directory {}: {}", log_dir.display(), e);
                (None, None)
            }
        }
    } else {
        (None, None)
    };

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_filter(env_filter(&config.logging));

    let subscriber = tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer);

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to install tracing subscriber: {}", e);
        return guard;
    }

    // Redirect standard `log` macros to `tracing`
    if let Err(e) = tracing_log::LogTracer::init() {
        eprintln!("Failed to initialize LogTracer: {}", e);
    }

    if guard.is_some() {
        log::debug!(
            "File logging enabled: {} (daily rolling)",
            config.log_dir().join(LOG_FILE_PREFIX).display()
        );
    }

    guard
}

fn file_writer(
    log_dir: &Path,
) -> io::Result<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    fs::create_dir_all(log_dir)?;
    let appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
    Ok(tracing_appender::non_blocking(appender))
}
