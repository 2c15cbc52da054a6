//! # Core Abstractions
//!
//! Core traits and error types for dependency injection and testability.
//!
//! ## Modules
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`service`]**: Service traits for dependency injection (`ApiService`)
//!
//! ## Dependency Injection
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use cupcake_client::core::service::ApiService;
//!
//! // In production: the reqwest-backed client
//! let api: Arc<dyn ApiService> = Arc::new(cupcake_client::services::api::ApiClient::new(&config)?);
//!
//! // In tests: a recording mock
//! let api: Arc<dyn ApiService> = Arc::new(MockApiService::new());
//! ```

pub mod error;
pub mod service;

#[cfg(test)]
pub(crate) mod mock;

pub use error::{AppError, Result};
pub use service::{ApiService, ProfileImageUpload};
