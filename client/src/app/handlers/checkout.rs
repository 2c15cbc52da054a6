//! # Checkout Handler
//!
//! Turns the cart into a recorded order.
//!
//! ```text
//! finalize ─▶ in flight? ──yes──▶ ignored
//!                │no
//!                ▼
//!          cart empty? ──yes──▶ notice, no request
//!                │no
//!                ▼
//!          token? ──no──▶ LoginRequired prompt, no request
//!                │yes
//!                ▼
//!          POST /orders ──fail──▶ OrderFailed (cart untouched, no clear)
//!                │ok
//!                ▼
//!          DELETE /cart/clear ──fail──▶ ClearFailed (order stays recorded)
//!                │ok
//!                ▼
//!            Completed
//! ```
//!
//! The clear request is only ever sent after a successful submission, and the
//! order is never resubmitted.

use async_channel::Sender;
use parking_lot::RwLock;
use shared::CartItem;
use std::sync::Arc;
use tracing::Instrument;
use uuid::Uuid;

use super::Spawned;
use crate::app::events::{AppEvent, CheckoutOutcome};
use crate::app::state::{AppState, Notice, Prompt};
use crate::core::service::ApiService;

/// Start a checkout for the loaded cart.
///
/// Internal handler function - use [`crate::app::App::finalize_purchase`] instead.
pub(crate) fn handle_finalize_purchase(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) -> Spawned {
    let (api_client, token, items) = {
        let mut state = state.write();

        if state.cart.checkout_in_flight {
            tracing::info!("Checkout already in flight - ignoring repeated request");
            return None;
        }

        let items = match state.cart.items.data() {
            Some(items) if !items.is_empty() => items.clone(),
            _ => {
                state.notify(Notice::error("Empty cart", "Add items to the cart before finishing the purchase."));
                return None;
            }
        };

        let Some(token) = state.session.token() else {
            tracing::info!("Checkout without a session - asking the user to log in");
            state.prompt = Some(Prompt::LoginRequired);
            return None;
        };

        state.cart.checkout_in_flight = true;
        (state.api_client.clone(), token, items)
    };

    let span = tracing::info_span!("checkout", checkout_id = %Uuid::new_v4(), item_count = items.len());
    Some(tokio::spawn(
        async move {
            let outcome = run_checkout(api_client.as_ref(), &token, &items).await;
            let _ = event_tx.send(AppEvent::CheckoutFinished(outcome)).await;
        }
        .instrument(span),
    ))
}

/// Submit the order, then clear the cart.
pub(crate) async fn run_checkout(api_client: &dyn ApiService, token: &str, items: &[CartItem]) -> CheckoutOutcome {
    let start = std::time::Instant::now();

    if let Err(e) = api_client.submit_order(token, items).await {
        tracing::warn!(error = %e, "Order submission failed");
        return CheckoutOutcome::OrderFailed(e);
    }

    match api_client.clear_cart(Some(token)).await {
        Ok(_) => {
            tracing::info!(duration_ms = start.elapsed().as_millis(), "Checkout completed");
            CheckoutOutcome::Completed
        }
        Err(e) => {
            tracing::error!(error = %e, "Order recorded but the cart could not be cleared");
            CheckoutOutcome::ClearFailed(e)
        }
    }
}
