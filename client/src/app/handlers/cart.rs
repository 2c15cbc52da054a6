//! # Cart Handlers
//!
//! Loading the server-side cart, clearing it after confirmation and removing
//! single lines. Checkout lives in [`super::checkout`].

use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

use super::Spawned;
use crate::app::events::AppEvent;
use crate::app::state::{AppState, Prompt};

pub(crate) fn load_cart(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) -> Spawned {
    let (api_client, ticket) = {
        let mut state = state.write();
        let ticket = state.cart.items.begin();
        (state.api_client.clone(), ticket)
    };

    Some(tokio::spawn(async move {
        let result = api_client.get_cart().await;
        let _ = event_tx.send(AppEvent::CartLoaded { ticket, result }).await;
    }))
}

/// Ask for confirmation before clearing.
///
/// Internal handler function - use [`crate::app::App::clear_cart`] instead.
pub(crate) fn handle_clear_click(state: Arc<RwLock<AppState>>) {
    state.write().prompt = Some(Prompt::ConfirmClearCart);
}

/// Clear the cart once the user confirmed.
pub(crate) fn handle_clear_confirmed(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) -> Spawned {
    let api_client = state.read().api_client.clone();

    Some(tokio::spawn(async move {
        let result = api_client.clear_cart(None).await;
        let _ = event_tx.send(AppEvent::CartCleared(result)).await;
    }))
}

/// Internal handler function - use [`crate::app::App::remove_cart_item`] instead.
pub(crate) fn handle_remove_item(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    cupcake_id: i64,
) -> Spawned {
    let api_client = state.read().api_client.clone();

    Some(tokio::spawn(async move {
        let result = api_client.remove_from_cart(cupcake_id).await;
        let _ = event_tx.send(AppEvent::CartItemRemoved { cupcake_id, result }).await;
    }))
}
