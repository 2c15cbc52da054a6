//! # Authentication Handlers
//!
//! Handlers for login, signup, and logout.

use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

use super::Spawned;
use crate::app::events::AppEvent;
use crate::app::state::{AppState, Notice};
use crate::core::error::Result;
use crate::utils::validation::{validate_login, validate_signup};

/// Submit the login form.
///
/// Internal handler function - use [`crate::app::App::login`] instead.
pub(crate) fn handle_login_click(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) -> Spawned {
    let (api_client, email, password) = {
        let mut state = state.write();
        if state.login.submitting {
            return None;
        }
        if let Some(message) = validate_login(&state.login.email, &state.login.password).error {
            state.notify(Notice::error("Error", message));
            return None;
        }
        state.login.submitting = true;
        (state.api_client.clone(), state.login.email.clone(), state.login.password.clone())
    };

    Some(tokio::spawn(async move {
        let result = api_client.login(email, password).await;
        let _ = event_tx.send(AppEvent::LoginResult(result)).await;
    }))
}

/// Submit the signup form.
///
/// Internal handler function - use [`crate::app::App::signup`] instead.
pub(crate) fn handle_signup_click(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) -> Spawned {
    let (api_client, request) = {
        let mut state = state.write();
        if state.signup.submitting {
            return None;
        }
        if let Some(message) = validate_signup(&state.signup).error {
            state.notify(Notice::error("Error", message));
            return None;
        }
        state.signup.submitting = true;
        let form = &state.signup;
        let request = shared::SignupRequest {
            name: form.name.clone(),
            email: form.email.clone(),
            password: form.password.clone(),
            cep: form.cep.clone(),
            rua: form.rua.clone(),
            estado: form.estado.clone(),
        };
        (state.api_client.clone(), request)
    };

    Some(tokio::spawn(async move {
        let result = api_client.signup(request).await;
        let _ = event_tx.send(AppEvent::SignupResult(result)).await;
    }))
}

/// Forget the session and everything loaded with it.
///
/// Internal handler function - use [`crate::app::App::logout`] instead.
pub(crate) fn handle_logout(state: Arc<RwLock<AppState>>) -> Result<()> {
    let mut state = state.write();
    state.session.clear()?;
    state.profile = Default::default();
    state.config = Default::default();
    state.history = Default::default();
    tracing::info!("Logged out");
    Ok(())
}
