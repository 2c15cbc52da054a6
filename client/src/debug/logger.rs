//! File-based logging initialization

use super::config::{LogConfig, DEFAULT_LOG_LEVEL, LOG_FILE_NAME};
use std::fs;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system
///
/// Sets up file-based logging with:
/// - Daily log rotation
/// - Non-blocking writes so requests never wait on disk
/// - Optional stderr mirror (`CUPCAKE_LOG_STDERR=1`)
/// - Panic hook integration for crash logging
///
/// Logs are written to `logs/cupcake.log` by default. Calling this twice is
/// harmless; the second call leaves the first subscriber in place.
pub fn init(config: &LogConfig) {
    if let Err(e) = fs::create_dir_all(&config.log_dir) {
        eprintln!("Warning: Failed to create log directory: {}", e);
        return;
    }

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false); // No ANSI codes in log files

    let stderr_layer = config
        .log_to_stderr
        .then(|| fmt::layer().with_writer(std::io::stderr).with_target(false).compact());

    let initialized = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init();

    if initialized.is_err() {
        // A subscriber already exists; the new writer is dropped with its guard.
        return;
    }

    tracing::info!(
        log_file = %config.log_file().display(),
        log_level = %config.log_level,
        stderr = config.log_to_stderr,
        "Logging initialized"
    );

    setup_panic_hook();

    // Keep the guard alive for the lifetime of the program
    std::mem::forget(guard);
}

/// Set up panic hook to log panics with their location
fn setup_panic_hook() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic message".to_string()
        };

        tracing::error!(location = %location, message = %message, "Application panic");

        default_panic(panic_info);
    }));
}
