//! # Event Handler
//!
//! Handles async event results from background tasks, updating application
//! state accordingly.
//!
//! Loads carry a [`Ticket`](crate::app::Ticket); results for screens that were
//! unmounted or reloaded in the meantime are dropped here.

use shared::{
    CartItem, Cupcake, LoginResponse, MessageResponse, ProfileImageResponse, PurchaseGroup,
    UserProfile,
};

use crate::app::events::{CatalogScreen, CheckoutOutcome, ProfileScreen};
use crate::app::handlers;
use crate::app::navigation::{Route, RouteParams};
use crate::app::resource::Ticket;
use crate::app::state::{Notice, ProfileForm};
use crate::app::{App, AppEvent};
use crate::core::error::AppError;

const SERVER_UNREACHABLE: &str = "Could not reach the server.";

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    /// Acquires the write lock per event, for the shortest possible time.
    fn handle_event_impl(&mut self, event: AppEvent) {
        match event {
            AppEvent::CatalogLoaded { screen, ticket, result } => {
                self.handle_catalog_loaded(screen, ticket, result);
            }
            AppEvent::AddedToCart { name, quantity, result } => {
                self.handle_added_to_cart(name, quantity, result);
            }
            AppEvent::CartLoaded { ticket, result } => {
                self.handle_cart_loaded(ticket, result);
            }
            AppEvent::CartCleared(result) => {
                self.handle_cart_cleared(result);
            }
            AppEvent::CartItemRemoved { cupcake_id, result } => {
                self.handle_cart_item_removed(cupcake_id, result);
            }
            AppEvent::CheckoutFinished(outcome) => {
                self.handle_checkout_finished(outcome);
            }
            AppEvent::LoginResult(result) => {
                self.handle_login_result(result);
            }
            AppEvent::SignupResult(result) => {
                self.handle_signup_result(result);
            }
            AppEvent::ProfileLoaded { screen, ticket, result } => {
                self.handle_profile_loaded(screen, ticket, result);
            }
            AppEvent::ProfileSaved(result) => {
                self.handle_profile_saved(result);
            }
            AppEvent::ProfileImageUpdated(result) => {
                self.handle_profile_image_updated(result);
            }
            AppEvent::ProfileImageRemoved(result) => {
                self.handle_profile_image_removed(result);
            }
            AppEvent::HistoryLoaded { ticket, result } => {
                self.handle_history_loaded(ticket, result);
            }
        }
    }
}

fn stale(what: &str) {
    tracing::debug!(what, "Discarded response for a screen that moved on");
}

impl App {
    fn handle_catalog_loaded(&mut self, screen: CatalogScreen, ticket: Ticket, result: Result<Vec<Cupcake>, AppError>) {
        let mut state = self.state.write();
        let result = result.map_err(|e| {
            tracing::error!(error = %e, "Failed to load catalog");
            e.message_or("Could not load the cupcakes.")
        });

        match screen {
            CatalogScreen::Home => {
                if !state.home.catalog.complete(ticket, result) {
                    return stale("home catalog");
                }
                let focus = state.navigator.params(Route::Home).and_then(|params| params.focus_cupcake_id);
                handlers::catalog::apply_focus(&mut state.home, focus);
            }
            CatalogScreen::Search => {
                if !state.search.catalog.complete(ticket, result) {
                    return stale("search catalog");
                }
                state.search.refresh_view();
            }
        }
    }

    fn handle_added_to_cart(&mut self, name: String, quantity: u32, result: Result<MessageResponse, AppError>) {
        let notice = match result {
            Ok(_) => Notice::success("Success", format!("Added to cart: {quantity}x {name}")),
            Err(e) => Notice::error("Error", e.message_or("Could not add the item to the cart.")),
        };
        self.state.write().notify(notice);
    }

    fn handle_cart_loaded(&mut self, ticket: Ticket, result: Result<Vec<CartItem>, AppError>) {
        let result = result.map_err(|e| e.message_or("Could not load the cart items."));
        if !self.state.write().cart.items.complete(ticket, result) {
            stale("cart");
        }
    }

    fn handle_cart_cleared(&mut self, result: Result<MessageResponse, AppError>) {
        let mut state = self.state.write();
        match result {
            Ok(_) => {
                if let Some(items) = state.cart.items.data_mut() {
                    items.clear();
                }
                state.notify(Notice::success("Success", "Cart cleared successfully."));
            }
            Err(e) => state.notify(Notice::error("Error", e.message_or("Could not clear the cart."))),
        }
    }

    fn handle_cart_item_removed(&mut self, cupcake_id: i64, result: Result<MessageResponse, AppError>) {
        let mut state = self.state.write();
        match result {
            Ok(_) => {
                if let Some(items) = state.cart.items.data_mut() {
                    items.retain(|item| item.id != cupcake_id);
                }
                state.notify(Notice::info("Cart", "Item removed from the cart."));
            }
            Err(e) => state.notify(Notice::error("Error", e.message_or("Could not remove the item."))),
        }
    }

    fn handle_checkout_finished(&mut self, outcome: CheckoutOutcome) {
        let mut state = self.state.write();
        state.cart.checkout_in_flight = false;

        let notice = match outcome {
            CheckoutOutcome::Completed => {
                if let Some(items) = state.cart.items.data_mut() {
                    items.clear();
                }
                Notice::success("Purchase completed!", "Your items were sent to the order history.")
            }
            CheckoutOutcome::OrderFailed(e) => Notice::error("Error", e.message_or("Could not record the order.")),
            CheckoutOutcome::ClearFailed(_) => Notice::error(
                "Cart not cleared",
                "Your order was recorded, but the cart could not be cleared.",
            ),
        };
        state.notify(notice);
    }

    fn handle_login_result(&mut self, result: Result<LoginResponse, AppError>) {
        let response = {
            let mut state = self.state.write();
            state.login.submitting = false;
            match result {
                Ok(response) => response,
                Err(e) => {
                    tracing::warn!(status = ?e.status(), error = %e, "Login rejected");
                    let message = if e.is_network() {
                        SERVER_UNREACHABLE.to_string()
                    } else {
                        e.message_or("Invalid email or password.")
                    };
                    state.notify(Notice::error("Error", message));
                    return;
                }
            }
        };

        {
            let mut state = self.state.write();
            if let Err(e) = state.session.set(&response.token) {
                tracing::error!(error = %e, "Failed to persist session token");
                state.notify(Notice::error("Error", "Could not save the session."));
                return;
            }
            state.login = Default::default();
            state.notify(Notice::success("Success", "Logged in successfully!"));
        }
        tracing::info!("Login successful - returning to home");
        self.navigate(Route::Home, RouteParams::default());
    }

    fn handle_signup_result(&mut self, result: Result<MessageResponse, AppError>) {
        {
            let mut state = self.state.write();
            state.signup.submitting = false;
            match result {
                Ok(_) => {
                    state.signup = Default::default();
                    state.notify(Notice::success("Success", "Account created successfully!"));
                }
                Err(e) => {
                    let message = if e.is_network() {
                        SERVER_UNREACHABLE.to_string()
                    } else {
                        e.message_or("Could not create the account.")
                    };
                    state.notify(Notice::error("Error", message));
                    return;
                }
            }
        }
        self.navigate(Route::Login, RouteParams::default());
    }

    fn handle_profile_loaded(&mut self, screen: ProfileScreen, ticket: Ticket, result: Result<UserProfile, AppError>) {
        let mut state = self.state.write();
        let failed = result.as_ref().err().map(|e| e.message_or("Could not load the user data."));
        let result = result.map_err(|e| e.message_or("Could not load the user data."));

        let applied = match screen {
            ProfileScreen::Profile => state.profile.user.complete(ticket, result),
            ProfileScreen::Config => {
                let applied = state.config.user.complete(ticket, result);
                let form = state.config.user.data().map(ProfileForm::from_profile);
                if let (true, Some(form)) = (applied, form) {
                    state.config.form = form;
                }
                applied
            }
        };

        match (applied, failed) {
            (false, _) => stale("profile"),
            (true, Some(message)) => state.notify(Notice::error("Error", message)),
            (true, None) => {}
        }
    }

    fn handle_profile_saved(&mut self, result: Result<MessageResponse, AppError>) {
        let mut state = self.state.write();
        state.config.saving = false;
        match result {
            Ok(_) => {
                state.config.form.password.clear();
                let state = &mut *state;
                let form = &state.config.form;
                for user in [state.config.user.data_mut(), state.profile.user.data_mut()].into_iter().flatten() {
                    user.name = form.name.clone();
                    user.email = form.email.clone();
                    user.cep = form.cep.clone();
                    user.rua = form.rua.clone();
                    user.estado = form.estado.clone();
                }
                state.notify(Notice::success("Success", "Profile updated successfully."));
            }
            Err(e) => state.notify(Notice::error("Error", e.message_or("Could not update the profile."))),
        }
    }

    fn handle_profile_image_updated(&mut self, result: Result<ProfileImageResponse, AppError>) {
        let mut state = self.state.write();
        match result {
            Ok(response) => {
                set_profile_image(&mut state, response.profile_image);
                state.notify(Notice::success("Success", "Profile picture changed successfully."));
            }
            Err(e) => state.notify(Notice::error("Error", e.message_or("Could not change the profile picture."))),
        }
    }

    fn handle_profile_image_removed(&mut self, result: Result<MessageResponse, AppError>) {
        let mut state = self.state.write();
        match result {
            Ok(_) => {
                set_profile_image(&mut state, None);
                state.notify(Notice::success("Success", "Profile picture removed successfully."));
            }
            Err(e) => state.notify(Notice::error("Error", e.message_or("Could not remove the profile picture."))),
        }
    }

    fn handle_history_loaded(&mut self, ticket: Ticket, result: Result<Vec<PurchaseGroup>, AppError>) {
        let result = result.map_err(|e| {
            tracing::error!(error = %e, "Failed to load order history");
            e.message_or("Could not load the order history.")
        });
        if !self.state.write().history.orders.complete(ticket, result) {
            stale("history");
        }
    }
}

fn set_profile_image(state: &mut crate::app::AppState, image: Option<String>) {
    if let Some(user) = state.profile.user.data_mut() {
        user.profile_image = image.clone();
    }
    if let Some(user) = state.config.user.data_mut() {
        user.profile_image = image;
    }
}
