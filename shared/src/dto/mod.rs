//! # Data Transfer Objects (DTOs)
//!
//! All data structures exchanged with the backend over its REST API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Login and signup
//! - [`catalog`] - Cupcake catalog listing
//! - [`cart`] - Cart items and cart mutations
//! - [`orders`] - Order submission and grouped purchase history
//! - [`profile`] - User profile, partial updates and profile image
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /cart
//! Content-Type: application/json
//!
//! { "cupcakeId": 3, "quantity": 2 }
//! ```
//!
//! ```text
//! HTTP/1.1 201 Created
//! Content-Type: application/json
//!
//! { "message": "Item adicionado ao carrinho com sucesso!" }
//! ```

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod orders;
pub mod profile;

pub use auth::*;
pub use cart::*;
pub use catalog::*;
pub use orders::*;
pub use profile::*;

use serde::{Deserialize, Deserializer, Serialize};

/// Generic acknowledgement body (`{"message": "..."}`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Error body returned with non-success statuses.
///
/// The backend uses `error`; a few paths answer with `message` instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    /// Best human-readable message in the body, ignoring blank strings.
    pub fn into_message(self) -> Option<String> {
        self.error
            .filter(|e| !e.trim().is_empty())
            .or_else(|| self.message.filter(|m| !m.trim().is_empty()))
    }
}

/// `null` or a missing key deserializes to an empty string.
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// `null`, a missing key or a blank string deserializes to `None`.
pub(crate) fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|s| !s.trim().is_empty()))
}
