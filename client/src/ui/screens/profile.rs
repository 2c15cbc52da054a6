//! # Profile Screens
//!
//! The profile card with its menu, and the settings form.

use std::fmt::Write;

use shared::UserProfile;

use crate::app::{AppState, Route};
use crate::ui::widgets;

const MENU: [Route; 4] = [Route::History, Route::Cupon, Route::Payment, Route::Config];

fn picture(profile: &UserProfile) -> &str {
    profile.profile_image.as_deref().unwrap_or("(default avatar)")
}

pub fn render_profile(state: &AppState) -> String {
    if let Some(placeholder) = widgets::load_placeholder(state.profile.user.state(), "Loading profile...") {
        return placeholder;
    }
    let Some(profile) = state.profile.user.data() else {
        return String::new();
    };

    let mut out = format!("{}\nPicture: {}\n\n", profile.name, picture(profile));
    for route in MENU {
        let _ = writeln!(out, "  - {}", route.title());
    }
    out.push_str("  - Log out\n");
    out
}

pub fn render_config(state: &AppState) -> String {
    let config = &state.config;
    if let Some(placeholder) = widgets::load_placeholder(config.user.state(), "Loading profile...") {
        return placeholder;
    }
    let picture = config.user.data().map(picture).unwrap_or_default();
    let form = &config.form;
    let password = if form.password.is_empty() { "(unchanged)" } else { "********" };

    let mut out = format!(
        "Picture:  {picture}\nName:     {}\nEmail:    {}\nPassword: {password}\nCEP:      {}\nStreet:   {}\nState:    {}\n",
        form.name, form.email, form.cep, form.rua, form.estado
    );
    if config.saving {
        out.push_str("Saving...\n");
    }
    out
}
