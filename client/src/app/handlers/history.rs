//! # Order History Handlers

use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

use super::Spawned;
use crate::app::events::AppEvent;
use crate::app::state::AppState;

/// Shown instead of the history when there is no session.
pub const NOT_AUTHENTICATED: &str = "User not authenticated";

/// Fetch the purchase history. Without a token the screen fails locally.
pub(crate) fn load_history(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) -> Spawned {
    let (api_client, token, ticket) = {
        let mut state = state.write();
        let Some(token) = state.session.token() else {
            tracing::info!("History requested without a session");
            state.history.orders.fail(NOT_AUTHENTICATED);
            return None;
        };
        let ticket = state.history.orders.begin();
        (state.api_client.clone(), token, ticket)
    };

    Some(tokio::spawn(async move {
        let result = api_client.get_order_history(&token).await;
        let _ = event_tx.send(AppEvent::HistoryLoaded { ticket, result }).await;
    }))
}
