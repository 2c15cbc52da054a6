//! # Search Screen

use std::fmt::Write;

use shared::format_price;

use crate::app::{AppState, SearchView};
use crate::ui::widgets;

pub fn render(state: &AppState) -> String {
    let search = &state.search;
    let mut out = format!("Search: {}\n\n", search.query);

    match search.view() {
        SearchView::Prompt => out.push_str("Type a name to search for cupcakes.\n"),
        _ if search.catalog.data().is_none() => {
            if let Some(placeholder) = widgets::load_placeholder(search.catalog.state(), "Loading cupcakes...") {
                out.push_str(&placeholder);
            }
        }
        SearchView::NoResults => out.push_str(&widgets::empty_state("No cupcakes found.", None)),
        SearchView::Results(items) => {
            for cupcake in items {
                let _ = writeln!(out, "  #{} {}  {}", cupcake.id, cupcake.name, format_price(cupcake.price));
            }
        }
    }
    out
}
