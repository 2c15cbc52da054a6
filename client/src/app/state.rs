//! # Application State Types
//!
//! All state-related types for the application: the navigation stack, the
//! per-screen state, and the notices and prompt waiting for the user.

use std::collections::HashMap;
use std::sync::Arc;

use shared::{CartItem, Cupcake, PurchaseGroup, UserProfile, UserUpdate};

use crate::app::navigation::Navigator;
use crate::app::resource::Resource;
use crate::core::service::ApiService;
use crate::services::session::Session;

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// Message shown to the user until the front end drains it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Info, title: title.into(), message: message.into() }
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Success, title: title.into(), message: message.into() }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, title: title.into(), message: message.into() }
    }
}

/// Question awaiting an answer. At most one is pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    /// Checkout without a session: Cancel / Go to login
    LoginRequired,
    /// Clear the whole cart: Cancel / Yes
    ConfirmClearCart,
}

impl Prompt {
    pub fn title(&self) -> &'static str {
        match self {
            Prompt::LoginRequired => "Not logged in",
            Prompt::ConfirmClearCart => "Clear cart",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Prompt::LoginRequired => "You need to be logged in to finish the purchase.",
            Prompt::ConfirmClearCart => "Are you sure you want to remove every item from the cart?",
        }
    }

    /// Answers in display order.
    pub fn choices(&self) -> &'static [PromptChoice] {
        match self {
            Prompt::LoginRequired => &[PromptChoice::Cancel, PromptChoice::GoToLogin],
            Prompt::ConfirmClearCart => &[PromptChoice::Cancel, PromptChoice::Confirm],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptChoice {
    Cancel,
    Confirm,
    GoToLogin,
}

impl PromptChoice {
    pub fn label(&self) -> &'static str {
        match self {
            PromptChoice::Cancel => "Cancel",
            PromptChoice::Confirm => "Yes",
            PromptChoice::GoToLogin => "Go to login",
        }
    }
}

/// Home: the catalog with a quantity selector per item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeState {
    pub catalog: Resource<Vec<Cupcake>>,
    /// Selected quantities; absent means the default of 1
    pub quantities: HashMap<i64, u32>,
    /// Position of the focused cupcake in the loaded catalog
    pub focused_index: Option<usize>,
}

impl HomeState {
    pub fn quantity(&self, cupcake_id: i64) -> u32 {
        self.quantities.get(&cupcake_id).copied().unwrap_or(1)
    }

    pub fn cupcake(&self, cupcake_id: i64) -> Option<&Cupcake> {
        self.catalog.data()?.iter().find(|cupcake| cupcake.id == cupcake_id)
    }
}

/// What the search screen shows for the current query.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchView {
    /// Empty query: ask the user to type
    Prompt,
    NoResults,
    Results(Vec<Cupcake>),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    pub catalog: Resource<Vec<Cupcake>>,
    pub query: String,
    pub view: Option<SearchView>,
}

impl SearchState {
    /// Recompute the view from the query and the loaded catalog.
    ///
    /// Surrounding whitespace only decides whether the query is empty; it is
    /// kept for matching.
    pub fn refresh_view(&mut self) {
        let needle = self.query.to_lowercase();
        self.view = Some(if needle.trim().is_empty() {
            SearchView::Prompt
        } else {
            let matches: Vec<Cupcake> = self
                .catalog
                .data()
                .map(|items| {
                    items
                        .iter()
                        .filter(|cupcake| cupcake.name.to_lowercase().contains(&needle))
                        .cloned()
                        .collect()
                })
                .unwrap_or_default();
            if matches.is_empty() {
                SearchView::NoResults
            } else {
                SearchView::Results(matches)
            }
        });
    }

    pub fn view(&self) -> SearchView {
        self.view.clone().unwrap_or(SearchView::Prompt)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartState {
    pub items: Resource<Vec<CartItem>>,
    /// Set while the order submission and cart clear are running
    pub checkout_in_flight: bool,
}

impl CartState {
    pub fn total(&self) -> f64 {
        self.items.data().map(|items| shared::cart_total(items)).unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub submitting: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub cep: String,
    pub rua: String,
    pub estado: String,
    pub submitting: bool,
}

/// Editable copy of the profile on the settings screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    /// Blank keeps the current password
    pub password: String,
    pub cep: String,
    pub rua: String,
    pub estado: String,
}

impl ProfileForm {
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            name: profile.name.clone(),
            email: profile.email.clone(),
            password: String::new(),
            cep: profile.cep.clone(),
            rua: profile.rua.clone(),
            estado: profile.estado.clone(),
        }
    }

    pub fn to_update(&self) -> UserUpdate {
        let password = self.password.trim();
        UserUpdate {
            name: self.name.clone(),
            email: self.email.clone(),
            password: (!password.is_empty()).then(|| password.to_string()),
            cep: self.cep.clone(),
            rua: self.rua.clone(),
            estado: self.estado.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileState {
    pub user: Resource<UserProfile>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigState {
    pub user: Resource<UserProfile>,
    pub form: ProfileForm,
    pub saving: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryState {
    pub orders: Resource<Vec<PurchaseGroup>>,
}

/// Complete application state.
pub struct AppState {
    pub session: Arc<Session>,
    pub api_client: Arc<dyn ApiService>,
    pub navigator: Navigator,
    pub home: HomeState,
    pub search: SearchState,
    pub cart: CartState,
    pub login: LoginForm,
    pub signup: SignupForm,
    pub profile: ProfileState,
    pub config: ConfigState,
    pub history: HistoryState,
    /// Pending notices, oldest first
    pub notices: Vec<Notice>,
    pub prompt: Option<Prompt>,
}

impl AppState {
    pub fn new(api_client: Arc<dyn ApiService>, session: Arc<Session>) -> Self {
        Self {
            session,
            api_client,
            navigator: Navigator::new(),
            home: HomeState::default(),
            search: SearchState::default(),
            cart: CartState::default(),
            login: LoginForm::default(),
            signup: SignupForm::default(),
            profile: ProfileState::default(),
            config: ConfigState::default(),
            history: HistoryState::default(),
            notices: Vec::new(),
            prompt: None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn notify(&mut self, notice: Notice) {
        match notice.level {
            NoticeLevel::Error => tracing::warn!(title = %notice.title, message = %notice.message, "Error notice"),
            _ => tracing::debug!(title = %notice.title, message = %notice.message, "Notice"),
        }
        self.notices.push(notice);
    }

    /// Drain pending notices for display.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}
