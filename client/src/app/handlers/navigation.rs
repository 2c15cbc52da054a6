//! # Navigation Handlers
//!
//! Stack changes and the per-screen state reset that goes with unmounting.
//! Loading on mount is driven by [`crate::app::App`].

use parking_lot::RwLock;
use std::sync::Arc;

use crate::app::navigation::{Route, RouteParams, Transition};
use crate::app::state::AppState;

/// Internal handler function - use [`crate::app::App::navigate`] instead.
pub(crate) fn handle_navigate(state: Arc<RwLock<AppState>>, route: Route, params: RouteParams) -> Transition {
    let mut state = state.write();
    let transition = state.navigator.navigate(route, params);
    tracing::debug!(?route, ?transition, depth = state.navigator.depth(), "Navigate");
    transition
}

/// Internal handler function - use [`crate::app::App::replace`] instead.
pub(crate) fn handle_replace(state: Arc<RwLock<AppState>>, route: Route, params: RouteParams) -> Transition {
    let transition = state.write().navigator.replace(route, params);
    tracing::debug!(?route, ?transition, "Replace");
    transition
}

/// Internal handler function - use [`crate::app::App::back`] instead.
pub(crate) fn handle_back(state: Arc<RwLock<AppState>>) -> Transition {
    state.write().navigator.back()
}

/// Reset a screen's local state and drop its in-flight loads.
pub(crate) fn reset_screen(state: Arc<RwLock<AppState>>, route: Route) {
    let mut state = state.write();
    match route {
        Route::Home => state.home = Default::default(),
        Route::Search => state.search = Default::default(),
        Route::Cart => {
            // A running checkout still reports back; keep its guard.
            let in_flight = state.cart.checkout_in_flight;
            state.cart = Default::default();
            state.cart.checkout_in_flight = in_flight;
        }
        Route::Login => state.login = Default::default(),
        Route::Signup => state.signup = Default::default(),
        Route::Profile => state.profile = Default::default(),
        Route::Config => state.config = Default::default(),
        Route::History => state.history = Default::default(),
        Route::Cupon | Route::Payment => {}
    }
}
