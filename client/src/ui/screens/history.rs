//! # Order History Screen

use std::fmt::Write;

use shared::format_price;

use crate::app::AppState;
use crate::ui::widgets;
use crate::utils::format::purchase_date;

/// Purchases in server order (newest first).
pub fn render(state: &AppState) -> String {
    let orders = &state.history.orders;
    if let Some(placeholder) = widgets::load_placeholder(orders.state(), "Loading order history...") {
        return placeholder;
    }
    let groups = orders.data().map(Vec::as_slice).unwrap_or_default();
    if groups.is_empty() {
        return widgets::empty_state("No orders yet.", Some("Finished purchases show up here."));
    }

    let mut out = String::new();
    for group in groups {
        let _ = writeln!(out, "Order {} - {}", group.purchase_id, purchase_date(group));
        for line in &group.items {
            let _ = writeln!(
                out,
                "  {} — Quantity: {} | Total: {}",
                line.cupcake_name,
                line.quantity,
                format_price(line.total_price)
            );
        }
        let _ = writeln!(out, "  Order total: {}\n", format_price(group.total()));
    }
    out
}
