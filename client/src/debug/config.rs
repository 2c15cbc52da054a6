//! Logging configuration from environment variables

use std::path::PathBuf;

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_LEVEL: &str = "cupcake_client=info,warn";

/// Log file name inside the log directory (rotated daily).
pub const LOG_FILE_NAME: &str = "cupcake.log";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Log directory (for rotation)
    pub log_dir: PathBuf,
    /// Log level filter (e.g., "cupcake_client=debug,info")
    pub log_level: String,
    /// Mirror log output to stderr; stdout stays reserved for rendered screens
    pub log_to_stderr: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_to_stderr: false,
        }
    }
}

impl LogConfig {
    /// Load configuration from environment variables
    ///
    /// - `CUPCAKE_LOG_DIR`: log directory (default `logs`)
    /// - `RUST_LOG`: filter (default `cupcake_client=info,warn`)
    /// - `CUPCAKE_LOG_STDERR`: `1` mirrors logs to stderr
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            log_dir: std::env::var("CUPCAKE_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            log_level: std::env::var("RUST_LOG").unwrap_or(defaults.log_level),
            log_to_stderr: std::env::var("CUPCAKE_LOG_STDERR")
                .map(|v| v == "1")
                .unwrap_or(defaults.log_to_stderr),
        }
    }

    /// Full path of the current log file (without the rotation date suffix).
    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_NAME)
    }

    /// Check if debug logging is enabled
    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}
