//! # Profile Handlers
//!
//! Profile and settings screens. Every call here needs a session token; without
//! one the handler returns [`AppError::Unauthenticated`] and sends nothing.

use async_channel::Sender;
use parking_lot::RwLock;
use std::path::PathBuf;
use std::sync::Arc;

use super::Spawned;
use crate::app::events::{AppEvent, ProfileScreen};
use crate::app::state::{AppState, Notice};
use crate::core::error::{AppError, Result};
use crate::core::service::ProfileImageUpload;
use crate::utils::validation::{validate_required, ALL_FIELDS_REQUIRED};

/// Shown when saving settings whose profile data never arrived.
pub const PROFILE_NOT_LOADED: &str = "Profile data is not loaded yet. Open the settings again and retry.";

pub(crate) fn load_profile(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    screen: ProfileScreen,
) -> Result<Spawned> {
    let (api_client, token, ticket) = {
        let mut state = state.write();
        let token = state.session.token().ok_or(AppError::Unauthenticated)?;
        let ticket = match screen {
            ProfileScreen::Profile => state.profile.user.begin(),
            ProfileScreen::Config => state.config.user.begin(),
        };
        (state.api_client.clone(), token, ticket)
    };

    Ok(Some(tokio::spawn(async move {
        let result = api_client.get_user_info(&token).await;
        let _ = event_tx.send(AppEvent::ProfileLoaded { screen, ticket, result }).await;
    })))
}

/// Send the settings form. A blank password is left out of the request.
///
/// Nothing is sent until the profile has loaded and every field except the
/// password is filled in.
///
/// Internal handler function - use [`crate::app::App::save_profile`] instead.
pub(crate) fn handle_save_profile(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) -> Result<Spawned> {
    let (api_client, token, update) = {
        let mut state = state.write();
        let token = state.session.token().ok_or(AppError::Unauthenticated)?;
        if state.config.saving {
            return Ok(None);
        }
        // The update overwrites every field, so it needs the loaded profile underneath.
        if state.config.user.data().is_none() {
            tracing::warn!("Profile save requested before the profile was loaded");
            state.notify(Notice::error("Error", PROFILE_NOT_LOADED));
            return Ok(None);
        }
        let form = &state.config.form;
        let checked = validate_required(&[&form.name, &form.email, &form.cep, &form.rua, &form.estado]).into_result();
        if let Err(e) = checked {
            state.notify(Notice::error("Error", e.message_or(ALL_FIELDS_REQUIRED)));
            return Ok(None);
        }
        state.config.saving = true;
        (state.api_client.clone(), token, state.config.form.to_update())
    };

    Ok(Some(tokio::spawn(async move {
        let result = api_client.update_user(&token, &update).await;
        let _ = event_tx.send(AppEvent::ProfileSaved(result)).await;
    })))
}

/// Internal handler function - use [`crate::app::App::change_profile_image`] instead.
pub(crate) fn handle_change_image(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    path: PathBuf,
) -> Result<Spawned> {
    let (api_client, token) = {
        let state = state.read();
        let token = state.session.token().ok_or(AppError::Unauthenticated)?;
        (state.api_client.clone(), token)
    };
    let upload = ProfileImageUpload::new(path);

    Ok(Some(tokio::spawn(async move {
        let result = api_client.update_profile_image(&token, &upload).await;
        let _ = event_tx.send(AppEvent::ProfileImageUpdated(result)).await;
    })))
}

/// Internal handler function - use [`crate::app::App::remove_profile_image`] instead.
pub(crate) fn handle_remove_image(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) -> Result<Spawned> {
    let (api_client, token) = {
        let state = state.read();
        let token = state.session.token().ok_or(AppError::Unauthenticated)?;
        (state.api_client.clone(), token)
    };

    Ok(Some(tokio::spawn(async move {
        let result = api_client.remove_profile_image(&token).await;
        let _ = event_tx.send(AppEvent::ProfileImageRemoved(result)).await;
    })))
}
