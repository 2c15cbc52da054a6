//! # Authentication Screens
//!
//! Login and signup forms. Passwords are never echoed.

use crate::app::AppState;

fn mask(secret: &str) -> String {
    "*".repeat(secret.chars().count())
}

pub fn render_login(state: &AppState) -> String {
    let form = &state.login;
    let mut out = format!("Email:    {}\nPassword: {}\n", form.email, mask(&form.password));
    if form.submitting {
        out.push_str("Logging in...\n");
    }
    out.push_str("\nDon't have an account? Sign up.\n");
    out
}

pub fn render_signup(state: &AppState) -> String {
    let form = &state.signup;
    let mut out = format!(
        "Name:     {}\nEmail:    {}\nPassword: {}\nCEP:      {}\nStreet:   {}\nState:    {}\n",
        form.name,
        form.email,
        mask(&form.password),
        form.cep,
        form.rua,
        form.estado
    );
    if form.submitting {
        out.push_str("Creating account...\n");
    }
    out
}
