//! # Screen Modules
//!
//! One module per screen. Every renderer takes a read-only [`AppState`](crate::app::AppState)
//! and returns the screen body as text:
//!
//! - **[`home`]**: catalog with quantity selectors and focus marker
//! - **[`search`]**: filtered catalog for the current query
//! - **[`cart`]**: cart lines, newest first, with the total
//! - **[`auth`]**: login and signup forms
//! - **[`profile`]**: profile card and the editable settings form
//! - **[`history`]**: grouped purchase history
//! - **[`placeholders`]**: coupons and payment methods

pub mod auth;
pub mod cart;
pub mod history;
pub mod home;
pub mod placeholders;
pub mod profile;
pub mod search;
