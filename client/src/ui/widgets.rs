//! Small text building blocks shared by the screens.

use crate::app::LoadState;

/// Underlined screen title
pub fn heading(title: &str) -> String {
    format!("{title}\n{}", "=".repeat(title.chars().count()))
}

/// Message for a list with nothing in it, with an optional hint.
pub fn empty_state(title: &str, hint: Option<&str>) -> String {
    match hint {
        Some(hint) => format!("{title}\n  {hint}\n"),
        None => format!("{title}\n"),
    }
}

/// Text for a resource that has no data to show yet, `None` when it is ready.
pub fn load_placeholder<T>(state: &LoadState<T>, loading: &str) -> Option<String> {
    match state {
        LoadState::Idle | LoadState::Loading => Some(format!("{loading}\n")),
        LoadState::Failed(message) => Some(format!("{message}\n  (retry to load again)\n")),
        LoadState::Ready(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_underline_matches_title() {
        assert_eq!(heading("Cart"), "Cart\n====");
    }

    #[test]
    fn test_load_placeholder() {
        assert_eq!(load_placeholder::<u8>(&LoadState::Loading, "Loading...").as_deref(), Some("Loading...\n"));
        assert!(load_placeholder(&LoadState::Ready(1), "Loading...").is_none());
    }
}
