//! # CupCakeLeader Client - Library Root
//!
//! Ordering client for the CupCakeLeader bakery: browse the cupcake catalog,
//! keep a server-side cart, finish purchases and manage the user profile.
//! This library crate contains all modules used by the binary crate (`main.rs`).
//!
//! ## Features
//!
//! - **Catalog**: cupcake list with per-item quantity selection and search
//! - **Cart**: server-side cart, line removal and confirmed clearing
//! - **Checkout**: session-gated order submission followed by a cart clear
//! - **Profile**: user data, partial updates and profile picture
//! - **Order history**: purchases grouped per checkout
//!
//! ## Architecture
//!
//! ### Technology Stack
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              cupcake-client (this crate)               │
//! ├────────────────────────────────────────────────────────┤
//! │  Tokio          - Async runtime                        │
//! │  Reqwest        - HTTP client (JSON + multipart)       │
//! │  async-channel  - Task → app event channel             │
//! │  parking_lot    - State lock                           │
//! │  tracing        - Structured, file-based logging       │
//! │  clap           - Command line front end               │
//! └────────────────────────────────────────────────────────┘
//!          │                              │
//!          │ HTTP                         │ JSON file
//!          ▼                              ▼
//! ┌─────────────────┐          ┌─────────────────────────┐
//! │  Backend API    │          │   Session token store   │
//! │  (CupCakeLeader)│          │   (userToken)           │
//! └─────────────────┘          └─────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: Application state and screen management
//!   - Event-driven orchestrator with async tasks
//!   - Navigation stack, per-screen load state, checkout workflow
//!
//! - **services**: External integrations
//!   - `api`: Backend HTTP client
//!   - `session`: Persisted session token
//!
//! - **ui**: Plain-text rendering of screens, notices and prompts
//!
//! - **core**: `AppError` and the `ApiService` trait
//!
//! - **config** / **debug**: Environment configuration and logging
//!
//! - **utils**: Form validation and date formatting
//!
//! ## Core Concepts
//!
//! ### Event-Driven Architecture
//!
//! User actions run on the owning thread; network requests run in Tokio
//! tasks and report back through an `AppEvent` channel. Application state is
//! wrapped in `Arc<RwLock<AppState>>` and locked briefly, never across an await.
//!
//! ## Usage
//!
//! ### As a Binary
//!
//! ```bash
//! cargo run --bin cupcake -- catalog
//! cargo run --bin cupcake -- login ana@example.com --password segredo
//! cargo run --bin cupcake -- cart checkout
//! ```
//!
//! ### As a Library
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use cupcake_client::{App, ApiClient, ClientConfig, Route, RouteParams, Session};
//!
//! let config = ClientConfig::from_env()?;
//! let session = Arc::new(Session::with_file(&config.session_file));
//! session.init()?;
//!
//! let mut app = App::new(Arc::new(ApiClient::new(&config)?), session);
//! app.navigate(Route::Cart, RouteParams::default());
//! app.settle().await;
//! println!("{}", cupcake_client::ui::render(&app.state.read()));
//! ```
//!
//! ## Testing
//!
//! ```bash
//! cargo test --lib
//! cargo test --lib app::tests
//! ```

// All modules are public to enable library usage and testing
pub mod app;
pub mod config;
pub mod core;
pub mod debug;
pub mod services;
pub mod ui;
pub mod utils;

// Re-export commonly used types for convenience
pub use app::{App, AppEvent, AppState, Route, RouteParams};
pub use config::ClientConfig;
pub use core::{AppError, Result};
pub use services::{ApiClient, Session};
