//! # Client Configuration
//!
//! Configuration loaded from environment variables (a `.env` file is read by the
//! binary before this runs). Validated once on startup so a bad value fails fast.
//!
//! | Variable                    | Default                                                |
//! |-----------------------------|--------------------------------------------------------|
//! | `CUPCAKE_API_URL`           | `https://cupcakeleaderapp-production.up.railway.app`   |
//! | `CUPCAKE_SESSION_FILE`      | `./.cupcake/session.json`                              |
//! | `CUPCAKE_HTTP_TIMEOUT_SECS` | unset: the transport's own default                     |

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::core::error::{AppError, Result};

/// Backend the app ships against.
pub const DEFAULT_API_URL: &str = "https://cupcakeleaderapp-production.up.railway.app";

/// Default location of the persisted session token.
pub const DEFAULT_SESSION_FILE: &str = "./.cupcake/session.json";

/// Client configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend base URL, without a trailing slash
    pub api_base_url: String,

    /// File holding the persisted session token
    pub session_file: PathBuf,

    /// Per-request timeout. `None` leaves it to reqwest's defaults.
    pub request_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            session_file: PathBuf::from(DEFAULT_SESSION_FILE),
            request_timeout: None,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let api_base_url = env::var("CUPCAKE_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let session_file = env::var("CUPCAKE_SESSION_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_SESSION_FILE));

        let request_timeout = match env::var("CUPCAKE_HTTP_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|e| {
                    AppError::Validation(format!("CUPCAKE_HTTP_TIMEOUT_SECS must be a whole number: {e}"))
                })?;
                Some(Duration::from_secs(secs))
            }
            Err(_) => None,
        };

        Ok(Self::default()
            .with_api_base_url(api_base_url)
            .with_session_file(session_file)
            .with_request_timeout(request_timeout))
    }

    /// Override the base URL (trailing slashes are dropped).
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_session_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.session_file = path.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://")) {
            return Err(AppError::Validation(format!(
                "API URL must start with http:// or https:// (got {:?})",
                self.api_base_url
            )));
        }

        if self.request_timeout == Some(Duration::ZERO) {
            return Err(AppError::Validation("HTTP timeout must be greater than zero".to_string()));
        }

        if self.session_file.as_os_str().is_empty() {
            return Err(AppError::Validation("Session file path cannot be empty".to_string()));
        }

        Ok(())
    }
}
