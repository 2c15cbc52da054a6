//! # Common Error Types
//!
//! Consolidated error handling for the CupCakeLeader client.
//!
//! This module provides a centralized error type [`AppError`] that covers every
//! failure a screen action can run into.
//!
//! ## Error Categories
//!
//! Errors are categorized by their source:
//!
//! - **Network**: the request never produced an HTTP response
//! - **Api**: the backend answered with a non-success status
//! - **Unauthenticated**: the action needs a session token and there is none
//! - **Validation**: a form failed local checks before any request was made
//! - **Decode**: a success response did not match the expected body
//! - **Session**: the local token store could not be read or written
//!
//! None of these are retried automatically. Every one ends the triggering action
//! and is surfaced to the user as a notice.
//!
//! ## Usage Pattern
//!
//! ```rust,no_run
//! use cupcake_client::core::error::AppError;
//!
//! fn require_fields(email: &str, password: &str) -> Result<(), AppError> {
//!     if email.is_empty() || password.is_empty() {
//!         return Err(AppError::Validation("All fields must be filled in.".to_string()));
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Server Messages
//!
//! When the backend explains a failure (`{"error": "estoque insuficiente"}`) the
//! text is kept in [`AppError::Api`] and shown verbatim; otherwise screens fall
//! back to their own wording via [`AppError::message_or`].

use thiserror::Error;

/// Application-wide error type covering all error scenarios in the client.
///
/// # Example
///
/// ```rust
/// use cupcake_client::core::error::AppError;
///
/// let err = AppError::Api { status: 409, message: Some("estoque insuficiente".to_string()) };
/// assert_eq!(err.message_or("Could not record the order."), "estoque insuficiente");
///
/// let err = AppError::Api { status: 500, message: None };
/// assert_eq!(err.message_or("Could not record the order."), "Could not record the order.");
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    /// Transport failure: connection refused, DNS, TLS, timeout, body read.
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success HTTP status.
    ///
    /// `message` holds the `error`/`message` field of the response body when the
    /// backend provided one.
    #[error("API error ({status}): {}", message.as_deref().unwrap_or("no details"))]
    Api { status: u16, message: Option<String> },

    /// No session token. The user has to log in before retrying.
    #[error("Not authenticated")]
    Unauthenticated,

    /// Local form validation failure; no request was sent.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A success response whose body could not be decoded.
    #[error("Unexpected response: {0}")]
    Decode(String),

    /// Token storage failure (file I/O, corrupt session file).
    #[error("Session storage error: {0}")]
    Session(String),
}

impl AppError {
    /// Text to show the user: the server's own message for [`AppError::Api`]
    /// errors that carry one, the validation text for [`AppError::Validation`],
    /// and `default` for everything else.
    pub fn message_or(&self, default: &str) -> String {
        match self {
            AppError::Api { message: Some(message), .. } => message.clone(),
            AppError::Validation(message) => message.clone(),
            _ => default.to_string(),
        }
    }

    /// HTTP status for [`AppError::Api`], if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, AppError::Network(_))
    }
}

/// Convenience type alias for `Result<T, AppError>`.
///
/// ```rust
/// use cupcake_client::core::error::Result;
///
/// fn operation() -> Result<String> {
///     Ok("success".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, AppError>;

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Decode(err.to_string())
        } else {
            AppError::Network(err.to_string())
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Session(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_or_prefers_server_text() {
        let err = AppError::Api { status: 400, message: Some("estoque insuficiente".into()) };
        assert_eq!(err.message_or("generic"), "estoque insuficiente");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_message_or_falls_back() {
        assert_eq!(AppError::Network("refused".into()).message_or("generic"), "generic");
        assert_eq!(AppError::Unauthenticated.message_or("generic"), "generic");
        assert_eq!(AppError::Api { status: 500, message: None }.message_or("generic"), "generic");
    }

    #[test]
    fn test_validation_message_is_shown() {
        let err = AppError::Validation("All fields must be filled in.".into());
        assert_eq!(err.message_or("generic"), "All fields must be filled in.");
    }

    #[test]
    fn test_display() {
        assert_eq!(AppError::Unauthenticated.to_string(), "Not authenticated");
        assert_eq!(
            AppError::Api { status: 401, message: None }.to_string(),
            "API error (401): no details"
        );
    }
}
