//! # Catalog Handlers
//!
//! Home (catalog with quantity selectors) and Search (filter over the catalog).

use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

use super::Spawned;
use crate::app::events::{AppEvent, CatalogScreen};
use crate::app::state::{AppState, HomeState, Notice};

/// Fetch the catalog for one screen.
///
/// Internal handler function - screens load on mount via [`crate::app::App::navigate`].
pub(crate) fn load_catalog(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    screen: CatalogScreen,
) -> Spawned {
    let (api_client, ticket) = {
        let mut state = state.write();
        let ticket = match screen {
            CatalogScreen::Home => state.home.catalog.begin(),
            CatalogScreen::Search => state.search.catalog.begin(),
        };
        (state.api_client.clone(), ticket)
    };

    Some(tokio::spawn(async move {
        let result = api_client.get_cupcakes().await;
        let _ = event_tx.send(AppEvent::CatalogLoaded { screen, ticket, result }).await;
    }))
}

/// Recompute Home's focused index from the focus param and the loaded catalog.
pub(crate) fn apply_focus(home: &mut HomeState, focus_cupcake_id: Option<i64>) {
    home.focused_index = match (focus_cupcake_id, home.catalog.data()) {
        (Some(id), Some(items)) => items.iter().position(|cupcake| cupcake.id == id),
        _ => None,
    };
}

/// Internal handler function - use [`crate::app::App::increment`] instead.
pub(crate) fn handle_increment(state: Arc<RwLock<AppState>>, cupcake_id: i64) {
    let mut state = state.write();
    let quantity = state.home.quantity(cupcake_id).saturating_add(1);
    state.home.quantities.insert(cupcake_id, quantity);
}

/// Never goes below 1.
///
/// Internal handler function - use [`crate::app::App::decrement`] instead.
pub(crate) fn handle_decrement(state: Arc<RwLock<AppState>>, cupcake_id: i64) {
    let mut state = state.write();
    let quantity = state.home.quantity(cupcake_id).saturating_sub(1).max(1);
    state.home.quantities.insert(cupcake_id, quantity);
}

/// Add the selected quantity of a catalog item to the cart.
///
/// Internal handler function - use [`crate::app::App::add_to_cart`] instead.
pub(crate) fn handle_add_to_cart(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    cupcake_id: i64,
) -> Spawned {
    let request = {
        let mut state = state.write();
        match state.home.cupcake(cupcake_id).map(|cupcake| cupcake.name.clone()) {
            Some(name) => Some((state.api_client.clone(), name, state.home.quantity(cupcake_id))),
            None => {
                state.notify(Notice::error("Error", format!("Cupcake {cupcake_id} is not in the catalog.")));
                None
            }
        }
    };
    let (api_client, name, quantity) = request?;

    Some(tokio::spawn(async move {
        let result = api_client.add_to_cart(cupcake_id, quantity).await;
        let _ = event_tx.send(AppEvent::AddedToCart { name, quantity, result }).await;
    }))
}

/// Internal handler function - use [`crate::app::App::set_search_query`] instead.
pub(crate) fn handle_search_query(state: Arc<RwLock<AppState>>, query: String) {
    let mut state = state.write();
    state.search.query = query;
    state.search.refresh_view();
}
