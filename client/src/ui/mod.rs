//! # Text Rendering
//!
//! Renders the current screen, pending notices and the open prompt as plain
//! text. Rendering only reads [`AppState`]; actions go through [`App`](crate::app::App).

pub mod screens;
pub mod widgets;

use crate::app::{AppState, Notice, NoticeLevel, Prompt, Route};

/// Render the screen on top of the navigation stack.
pub fn render(state: &AppState) -> String {
    let route = state.navigator.current().route;
    let body = match route {
        Route::Home => screens::home::render(state),
        Route::Search => screens::search::render(state),
        Route::Cart => screens::cart::render(state),
        Route::Login => screens::auth::render_login(state),
        Route::Signup => screens::auth::render_signup(state),
        Route::Profile => screens::profile::render_profile(state),
        Route::Config => screens::profile::render_config(state),
        Route::History => screens::history::render(state),
        Route::Cupon => screens::placeholders::render_coupons(),
        Route::Payment => screens::placeholders::render_payment(),
    };
    format!("{}\n{}", widgets::heading(route.title()), body)
}

pub fn render_notice(notice: &Notice) -> String {
    let tag = match notice.level {
        NoticeLevel::Info => "info",
        NoticeLevel::Success => "ok",
        NoticeLevel::Error => "error",
    };
    format!("[{tag}] {}: {}", notice.title, notice.message)
}

pub fn render_prompt(prompt: Prompt) -> String {
    let choices: Vec<&str> = prompt.choices().iter().map(|choice| choice.label()).collect();
    format!("{}\n{}\n[{}]", prompt.title(), prompt.message(), choices.join(" / "))
}
