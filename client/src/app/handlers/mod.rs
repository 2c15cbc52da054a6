//! # Event Handlers
//!
//! User action handlers organized by domain. Each one validates against the
//! current state, takes what it needs under a short lock, and spawns the
//! network call. Results come back as [`AppEvent`](crate::app::AppEvent)s.

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod history;
pub mod navigation;
pub mod profile;

use tokio::task::JoinHandle;

/// Handle of the task a handler spawned, if it spawned one.
pub(crate) type Spawned = Option<JoinHandle<()>>;
