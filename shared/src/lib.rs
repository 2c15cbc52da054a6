//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the CupCakeLeader client and the
//! REST backend. The backend is not part of this workspace; these types mirror
//! what it accepts and returns.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Login and signup
//!   - **[`dto::catalog`]**: Cupcake catalog
//!   - **[`dto::cart`]**: Server-held cart
//!   - **[`dto::orders`]**: Order submission and purchase history
//!   - **[`dto::profile`]**: User profile and profile image
//! - **[`utils`]**: Display helpers (prices)
//!
//! ## Wire Format
//!
//! The backend mixes naming styles, so field names are pinned per type:
//! - Request bodies use the backend's camelCase keys (`emailUser`, `cupcakeId`)
//! - Order history keeps snake_case keys (`purchase_id`, `total_price`)
//! - Error bodies are `{"error": "..."}` and occasionally `{"message": "..."}`
//!
//! ## Usage in the Client
//!
//! ```rust,ignore
//! use shared::dto::auth::{LoginRequest, LoginResponse};
//!
//! let request = LoginRequest::new("ana@example.com", "Senha123");
//!
//! let response: LoginResponse = reqwest::Client::new()
//!     .post("https://cupcakeleaderapp-production.up.railway.app/login")
//!     .json(&request)
//!     .send()
//!     .await?
//!     .json()
//!     .await?;
//! ```

pub mod dto;
pub mod utils;

// Wildcard re-exports: every DTO is public API
pub use dto::*;
pub use utils::*;
