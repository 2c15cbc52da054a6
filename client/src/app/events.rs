//! # Application Events
//!
//! Event types for async task communication between background tasks and the
//! thread that owns the [`App`](crate::app::App).

use shared::{
    CartItem, Cupcake, LoginResponse, MessageResponse, ProfileImageResponse, PurchaseGroup,
    UserProfile,
};

use crate::app::resource::Ticket;
use crate::core::error::AppError;

/// Screens that keep their own copy of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogScreen {
    Home,
    Search,
}

/// Screens that load the user's profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileScreen {
    Profile,
    Config,
}

/// How a checkout run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// Order recorded and cart cleared
    Completed,
    /// `POST /orders` failed; nothing else was sent
    OrderFailed(AppError),
    /// Order recorded but `DELETE /cart/clear` failed
    ClearFailed(AppError),
}

/// Async task results sent to the owning thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Catalog fetched for Home or Search
    CatalogLoaded {
        screen: CatalogScreen,
        ticket: Ticket,
        result: Result<Vec<Cupcake>, AppError>,
    },
    /// Add-to-cart completed
    AddedToCart {
        name: String,
        quantity: u32,
        result: Result<MessageResponse, AppError>,
    },
    /// Cart fetched
    CartLoaded {
        ticket: Ticket,
        result: Result<Vec<CartItem>, AppError>,
    },
    /// Cart cleared from the cart screen
    CartCleared(Result<MessageResponse, AppError>),
    /// Single cart line removed
    CartItemRemoved {
        cupcake_id: i64,
        result: Result<MessageResponse, AppError>,
    },
    /// Checkout workflow finished
    CheckoutFinished(CheckoutOutcome),
    /// Login completed
    LoginResult(Result<LoginResponse, AppError>),
    /// Signup completed
    SignupResult(Result<MessageResponse, AppError>),
    /// Profile fetched for Profile or Config
    ProfileLoaded {
        screen: ProfileScreen,
        ticket: Ticket,
        result: Result<UserProfile, AppError>,
    },
    /// Profile fields saved
    ProfileSaved(Result<MessageResponse, AppError>),
    /// New profile picture uploaded
    ProfileImageUpdated(Result<ProfileImageResponse, AppError>),
    /// Profile picture removed
    ProfileImageRemoved(Result<MessageResponse, AppError>),
    /// Order history fetched
    HistoryLoaded {
        ticket: Ticket,
        result: Result<Vec<PurchaseGroup>, AppError>,
    },
}
