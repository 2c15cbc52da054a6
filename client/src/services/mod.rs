//! # Services Module
//!
//! External service integrations for the CupCakeLeader client.
//!
//! ## Module Overview
//!
//! ```text
//! services/
//! ├── api/        - Backend HTTP API client
//! │                 (auth, catalog, cart, orders, profile)
//! └── session.rs  - Persisted session token
//!                   (file-backed or in-memory store)
//! ```
//!
//! ## Service Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                     cupcake client                      │
//! │                                                         │
//! │  ┌──────────────────┐       ┌──────────────────┐        │
//! │  │  ApiClient       │       │  Session         │        │
//! │  │  (api/)          │◀──────│  (session.rs)    │        │
//! │  └────────┬─────────┘ token └────────┬─────────┘        │
//! │           │                          │                  │
//! └───────────┼──────────────────────────┼──────────────────┘
//!             │ HTTP/JSON                │ JSON file
//!             ▼                          ▼
//! ┌─────────────────────┐    ┌─────────────────────────────┐
//! │  CupCakeLeader API  │    │  ./.cupcake/session.json    │
//! │  /login /cadastro   │    │  { "userToken": "..." }     │
//! │  /cupcakes /cart    │    │                             │
//! │  /orders /user-info │    │                             │
//! └─────────────────────┘    └─────────────────────────────┘
//! ```

pub mod api;
pub mod session;

pub use api::ApiClient;
pub use session::{FileTokenStore, MemoryTokenStore, Session, TokenStore};
