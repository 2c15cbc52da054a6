//! # Backend API Client Module
//!
//! HTTP client for the CupCakeLeader REST backend.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs      - Module exports and documentation
//! ├── client.rs   - ApiClient struct, shared request/response handling
//! ├── auth.rs     - POST /login, POST /cadastro
//! ├── catalog.rs  - GET /cupcakes
//! ├── cart.rs     - GET/POST/DELETE /cart, DELETE /cart/clear
//! ├── orders.rs   - POST /orders, GET /orders/history
//! └── profile.rs  - /user-info, /update-user, profile image
//! ```

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod client;
pub mod orders;
pub mod profile;

pub use client::ApiClient;
