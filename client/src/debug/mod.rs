//! # Logging Infrastructure
//!
//! File-based structured logging for the CupCakeLeader client.
//!
//! ## Features
//!
//! - **File-based logging**: Structured logs to `logs/cupcake.log` (daily rotation)
//! - **Request spans**: every API call runs in a `tracing::instrument` span;
//!   rejections log their HTTP status, and login, catalog and order submission
//!   also record `duration_ms`
//! - **Checkout tracing**: each checkout run carries a `checkout_id` span field
//!
//! ## Usage
//!
//! ```rust,ignore
//! // Initialize at startup, before any request is made
//! debug::init(&LogConfig::from_env());
//!
//! // Log with structured fields
//! tracing::info!(endpoint = "/cupcakes", duration_ms = 234, "API call completed");
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (e.g., `cupcake_client=debug,info`)
//! - `CUPCAKE_LOG_DIR`: Log directory (default: `logs`)
//! - `CUPCAKE_LOG_STDERR`: Mirror logs to stderr (1=on, 0=off)

pub mod config;
pub mod logger;

pub use config::LogConfig;
pub use logger::init;
