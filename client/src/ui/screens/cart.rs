//! # Cart Screen

use std::fmt::Write;

use shared::format_price;

use crate::app::AppState;
use crate::ui::widgets;

/// Lines are listed most recent first.
pub fn render(state: &AppState) -> String {
    let cart = &state.cart;
    if let Some(placeholder) = widgets::load_placeholder(cart.items.state(), "Loading cart...") {
        return placeholder;
    }
    let items = cart.items.data().map(Vec::as_slice).unwrap_or_default();
    if items.is_empty() {
        return widgets::empty_state("Your cart is empty.", Some("Add cupcakes from the home screen."));
    }

    let mut out = String::new();
    for item in items.iter().rev() {
        let _ = writeln!(
            out,
            "  #{} {}  {} x {} = {}",
            item.id,
            item.name,
            item.quantity,
            format_price(item.price),
            format_price(item.subtotal())
        );
    }
    let _ = writeln!(out, "\nTotal: {}", format_price(cart.total()));
    if cart.checkout_in_flight {
        out.push_str("Finishing purchase...\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mock::{cart_item, MockApiService};
    use crate::services::session::Session;
    use std::sync::Arc;

    #[test]
    fn test_newest_first_with_total() {
        let mut state = AppState::new(Arc::new(MockApiService::new()), Arc::new(Session::in_memory(None)));
        let ticket = state.cart.items.begin();
        state.cart.items.complete(
            ticket,
            Ok(vec![cart_item(1, "Red Velvet", 9.9, 2), cart_item(2, "Morango", 7.0, 1)]),
        );

        let text = render(&state);
        let morango = text.find("Morango").unwrap();
        let red_velvet = text.find("Red Velvet").unwrap();
        assert!(morango < red_velvet);
        assert!(text.contains("Total: R$ 26.80"));
    }

    #[test]
    fn test_empty_cart() {
        let mut state = AppState::new(Arc::new(MockApiService::new()), Arc::new(Session::in_memory(None)));
        let ticket = state.cart.items.begin();
        state.cart.items.complete(ticket, Ok(Vec::new()));
        assert!(render(&state).starts_with("Your cart is empty."));
    }
}
