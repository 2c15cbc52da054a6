//! # Utility Functions
//!
//! Shared utility functions used across the client.
//!
//! ## Modules
//!
//! - **[`validation`]**: Required-field checks for the login, signup and profile forms
//! - **[`format`]**: Order date display
//!
//! ## Related Modules
//!
//! - [`shared::utils`]: Cross-crate utilities (price formatting)
//! - [`crate::core`]: Core abstractions and error types

pub mod format;
pub mod validation;
