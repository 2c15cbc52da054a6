//! # Application Orchestrator
//!
//! The main [`App`] struct orchestrates the client, coordinating between user
//! actions, async network tasks, and application state.
//!
//! ## Architecture
//!
//! The application follows an event-driven architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Owning thread (CLI / UI)                 │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │  App (orchestrator)                                  │   │
//! │  │  - on_tick() - non-blocking event drain              │   │
//! │  │  - settle() - await tasks, apply results             │   │
//! │  │  - navigate(), add_to_cart(), login() ... actions    │   │
//! │  └────────────┬─────────────────────────────────────────┘   │
//! │               │                                             │
//! │  ┌────────────▼─────────────────────────────────────────┐   │
//! │  │  State: Arc<RwLock<AppState>>                        │   │
//! │  │  - Navigator, per-screen state, notices, prompt      │   │
//! │  │  - Lock held briefly, never across .await            │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! └───────────────────────┬─────────────────────────────────────┘
//!                         │ async_channel
//!                         │ (unbounded)
//! ┌───────────────────────▼─────────────────────────────────────┐
//! │              Async Tasks (Tokio)                            │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │  Handlers Module                                     │   │
//! │  │  - catalog, cart, checkout, auth, profile, history   │   │
//! │  │  - each call goes through Arc<dyn ApiService>        │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Screen Lifecycle
//!
//! Navigating reports which screens were mounted and unmounted (see
//! [`navigation`]). Mounting starts the screen's load, unmounting resets the
//! screen's state and detaches its [`Resource`]s so late responses are dropped.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! let mut app = App::new(api_client, session);
//! app.start();
//! app.navigate(Route::Cart, RouteParams::default());
//! app.settle().await;
//!
//! let state = app.state.read();
//! println!("{}", crate::ui::render(&state));
//! ```

mod event_handler;
mod events;
mod handlers;
pub mod navigation;
pub mod resource;
mod state;

pub use events::{AppEvent, CatalogScreen, CheckoutOutcome, ProfileScreen};
pub use handlers::history::NOT_AUTHENTICATED;
pub use navigation::{Route, RouteParams, Transition};
pub use resource::{LoadState, Resource, Ticket};
pub use state::*;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::core::error::AppError;
use crate::core::service::ApiService;
use crate::services::session::Session;
use event_handler::AppEventHandler;
use handlers::Spawned;

/// Shown when a screen that needs a session is opened without one.
pub const SESSION_NOT_FOUND: &str = "Session not found. Please log in again.";

/// Main application orchestrator.
///
/// Owns the shared state, the event channel and the handles of tasks that have
/// not reported back yet. Must be used from within a Tokio runtime.
pub struct App {
    /// Thread-safe shared application state.
    ///
    /// - Use `read()` for reading (shared lock, multiple readers)
    /// - Use `write()` for writing (exclusive lock, single writer)
    pub state: Arc<RwLock<AppState>>,

    /// Channel receiver for async task results.
    pub event_rx: Receiver<AppEvent>,

    /// Cloned into every spawned task.
    event_tx: Sender<AppEvent>,

    /// Outstanding tasks, awaited by [`App::settle`].
    tasks: Vec<JoinHandle<()>>,
}

impl App {
    /// Create a new application on the Home screen. Nothing is loaded until
    /// [`App::start`] or a navigation.
    pub fn new(api_client: Arc<dyn ApiService>, session: Arc<Session>) -> Self {
        let (event_tx, event_rx) = unbounded();
        tracing::info!(authenticated = session.is_authenticated(), "App state initialized");

        Self {
            state: Arc::new(RwLock::new(AppState::new(api_client, session))),
            event_rx,
            event_tx,
            tasks: Vec::new(),
        }
    }

    /// Load the root screen.
    pub fn start(&mut self) {
        let root = self.state.read().navigator.current().route;
        self.mount(root);
    }

    pub fn current_route(&self) -> Route {
        self.state.read().navigator.current().route
    }

    fn track(&mut self, spawned: Spawned) {
        if let Some(handle) = spawned {
            self.tasks.push(handle);
        }
    }

    fn notify(&self, notice: Notice) {
        self.state.write().notify(notice);
    }

    // ----- navigation -----

    /// Go to `route`, popping back to it if it is already on the stack.
    pub fn navigate(&mut self, route: Route, params: RouteParams) {
        let transition = handlers::navigation::handle_navigate(self.state.clone(), route, params);
        self.apply_transition(route, transition);
    }

    /// Replace the top screen with `route`.
    pub fn replace(&mut self, route: Route, params: RouteParams) {
        let transition = handlers::navigation::handle_replace(self.state.clone(), route, params);
        self.apply_transition(route, transition);
    }

    pub fn back(&mut self) {
        let transition = handlers::navigation::handle_back(self.state.clone());
        let current = self.current_route();
        self.apply_transition(current, transition);
    }

    fn apply_transition(&mut self, target: Route, transition: Transition) {
        if transition.is_noop() {
            return;
        }
        for route in &transition.unmounted {
            handlers::navigation::reset_screen(self.state.clone(), *route);
        }
        for route in &transition.mounted {
            self.mount(*route);
        }
        // Home reloads when it receives a new focus.
        if transition.params_changed && target == Route::Home && !transition.mounted.contains(&target) {
            self.load(Route::Home);
        }
    }

    fn mount(&mut self, route: Route) {
        if route == Route::Login && self.state.read().is_authenticated() {
            tracing::debug!("Already logged in - redirecting to profile");
            self.navigate(Route::Profile, RouteParams::default());
            return;
        }
        if route == Route::Search {
            self.state.write().search.refresh_view();
        }
        self.load(route);
    }

    /// Start the load a screen performs on mount.
    fn load(&mut self, route: Route) {
        let state = self.state.clone();
        let tx = self.event_tx.clone();
        match route {
            Route::Home => self.track(handlers::catalog::load_catalog(state, tx, CatalogScreen::Home)),
            Route::Search => self.track(handlers::catalog::load_catalog(state, tx, CatalogScreen::Search)),
            Route::Cart => self.track(handlers::cart::load_cart(state, tx)),
            Route::History => self.track(handlers::history::load_history(state, tx)),
            Route::Profile => {
                let spawned = handlers::profile::load_profile(state, tx, ProfileScreen::Profile);
                self.track_authenticated(spawned);
            }
            Route::Config => {
                let spawned = handlers::profile::load_profile(state, tx, ProfileScreen::Config);
                self.track_authenticated(spawned);
            }
            Route::Login | Route::Signup | Route::Cupon | Route::Payment => {}
        }
    }

    /// Track a session-gated task, or send the user to the login screen.
    fn track_authenticated(&mut self, spawned: crate::core::error::Result<Spawned>) {
        match spawned {
            Ok(spawned) => self.track(spawned),
            Err(AppError::Unauthenticated) => {
                self.notify(Notice::error("Error", SESSION_NOT_FOUND));
                self.navigate(Route::Login, RouteParams::default());
            }
            Err(e) => self.notify(Notice::error("Error", e.to_string())),
        }
    }

    /// Reload the current screen, e.g. after a failed load.
    pub fn retry(&mut self) {
        let route = self.current_route();
        tracing::info!(?route, "Retrying load");
        self.load(route);
    }

    // ----- home and search -----

    pub fn increment(&mut self, cupcake_id: i64) {
        handlers::catalog::handle_increment(self.state.clone(), cupcake_id);
    }

    pub fn decrement(&mut self, cupcake_id: i64) {
        handlers::catalog::handle_decrement(self.state.clone(), cupcake_id);
    }

    /// Add the currently selected quantity of a Home item to the cart.
    pub fn add_to_cart(&mut self, cupcake_id: i64) {
        let spawned = handlers::catalog::handle_add_to_cart(self.state.clone(), self.event_tx.clone(), cupcake_id);
        self.track(spawned);
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        handlers::catalog::handle_search_query(self.state.clone(), query.into());
    }

    /// Open Home focused on the chosen cupcake.
    pub fn select_search_result(&mut self, cupcake_id: i64) {
        self.navigate(Route::Home, RouteParams::focus(cupcake_id));
    }

    // ----- cart -----

    /// Ask for confirmation; the clear itself happens in [`App::resolve_prompt`].
    pub fn clear_cart(&mut self) {
        handlers::cart::handle_clear_click(self.state.clone());
    }

    pub fn remove_cart_item(&mut self, cupcake_id: i64) {
        let spawned = handlers::cart::handle_remove_item(self.state.clone(), self.event_tx.clone(), cupcake_id);
        self.track(spawned);
    }

    pub fn finalize_purchase(&mut self) {
        let spawned = handlers::checkout::handle_finalize_purchase(self.state.clone(), self.event_tx.clone());
        self.track(spawned);
    }

    /// Answer the pending prompt. A choice the prompt does not offer is ignored.
    pub fn resolve_prompt(&mut self, choice: PromptChoice) {
        let prompt = {
            let mut state = self.state.write();
            let pending = state.prompt;
            match pending {
                Some(prompt) if prompt.choices().contains(&choice) => state.prompt.take(),
                Some(prompt) => {
                    tracing::warn!(?prompt, ?choice, "Choice not offered by the pending prompt");
                    return;
                }
                None => return,
            }
        };

        match (prompt, choice) {
            (Some(Prompt::LoginRequired), PromptChoice::GoToLogin) => {
                self.navigate(Route::Login, RouteParams::default());
            }
            (Some(Prompt::ConfirmClearCart), PromptChoice::Confirm) => {
                let spawned = handlers::cart::handle_clear_confirmed(self.state.clone(), self.event_tx.clone());
                self.track(spawned);
            }
            _ => {}
        }
    }

    // ----- auth -----

    pub fn login(&mut self, email: impl Into<String>, password: impl Into<String>) {
        {
            let mut state = self.state.write();
            state.login.email = email.into();
            state.login.password = password.into();
        }
        let spawned = handlers::auth::handle_login_click(self.state.clone(), self.event_tx.clone());
        self.track(spawned);
    }

    pub fn signup(&mut self, form: SignupForm) {
        self.state.write().signup = SignupForm { submitting: false, ..form };
        let spawned = handlers::auth::handle_signup_click(self.state.clone(), self.event_tx.clone());
        self.track(spawned);
    }

    /// Clear the session and replace the current screen with Login.
    pub fn logout(&mut self) {
        if let Err(e) = handlers::auth::handle_logout(self.state.clone()) {
            tracing::error!(error = %e, "Failed to clear session");
            self.notify(Notice::error("Error", "Could not end the session."));
            return;
        }
        self.replace(Route::Login, RouteParams::default());
    }

    // ----- profile -----

    /// Edit the settings form in place.
    pub fn edit_profile_form(&mut self, edit: impl FnOnce(&mut ProfileForm)) {
        edit(&mut self.state.write().config.form);
    }

    pub fn save_profile(&mut self) {
        let spawned = handlers::profile::handle_save_profile(self.state.clone(), self.event_tx.clone());
        self.track_authenticated(spawned);
    }

    pub fn change_profile_image(&mut self, path: impl Into<PathBuf>) {
        let spawned = handlers::profile::handle_change_image(self.state.clone(), self.event_tx.clone(), path.into());
        self.track_authenticated(spawned);
    }

    pub fn remove_profile_image(&mut self) {
        let spawned = handlers::profile::handle_remove_image(self.state.clone(), self.event_tx.clone());
        self.track_authenticated(spawned);
    }

    // ----- event loop -----

    /// Apply one async task result.
    pub fn handle_event(&mut self, event: AppEvent) {
        self.handle_event_impl(event);
    }

    /// Apply every result that has already arrived. Never blocks.
    pub fn on_tick(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }
        self.tasks.retain(|handle| !handle.is_finished());
    }

    /// Wait for every outstanding task, including ones started while applying
    /// results, and apply what they report.
    pub async fn settle(&mut self) {
        loop {
            self.on_tick();
            if self.tasks.is_empty() && self.event_rx.is_empty() {
                break;
            }
            for handle in std::mem::take(&mut self.tasks) {
                if let Err(e) = handle.await {
                    tracing::error!(error = %e, "Background task failed");
                }
            }
        }
    }

    /// Drain pending notices for display.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        self.state.write().take_notices()
    }
}

#[cfg(test)]
mod tests;
