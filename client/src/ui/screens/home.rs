//! # Home Screen

use std::fmt::Write;

use shared::format_price;

use crate::app::AppState;
use crate::ui::widgets;

pub fn render(state: &AppState) -> String {
    let home = &state.home;
    if let Some(placeholder) = widgets::load_placeholder(home.catalog.state(), "Loading cupcakes...") {
        return placeholder;
    }
    let items = home.catalog.data().map(Vec::as_slice).unwrap_or_default();
    if items.is_empty() {
        return widgets::empty_state("No cupcakes available.", None);
    }

    let mut out = String::new();
    for (index, cupcake) in items.iter().enumerate() {
        let marker = if home.focused_index == Some(index) { ">" } else { " " };
        let _ = writeln!(out, "{marker} #{} {}  {}", cupcake.id, cupcake.name, format_price(cupcake.price));
        if !cupcake.description.is_empty() {
            let _ = writeln!(out, "    {}", cupcake.description);
        }
        if !cupcake.image.is_empty() {
            let _ = writeln!(out, "    image: {}", state.api_client.image_url(&cupcake.image));
        }
        let _ = writeln!(out, "    quantity: [-] {} [+]", home.quantity(cupcake.id));
    }
    out
}
