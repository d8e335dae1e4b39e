//! # Application State
//!
//! Core business state for Atlas. This module contains domain state only -
//! no TUI-specific types. Presentation state (list highlight, input focus)
//! lives in the `tui` module.
//!
//! ```text
//! App
//! ├── countries: Vec<Country>   // source collection, replaced wholesale
//! ├── view: ViewState           // sort, search, page size, page, selection
//! ├── source_name: String       // data source label for the title bar
//! ├── status_message: String    // title bar text
//! └── is_loading: bool          // startup fetch still in flight
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::core::config::ResolvedConfig;
use crate::core::view::{DisplayView, ViewState, project};
use crate::source::Country;

pub struct App {
    /// The full set of records retrieved from the endpoint. Empty until
    /// the startup fetch resolves, and kept as-is when it fails.
    pub countries: Vec<Country>,
    pub view: ViewState,
    pub source_name: String,
    pub status_message: String,
    pub is_loading: bool,
}

impl App {
    pub fn new(source_name: &str) -> Self {
        Self {
            countries: Vec::new(),
            view: ViewState::default(),
            source_name: source_name.to_string(),
            status_message: String::from("Loading countries..."),
            is_loading: true,
        }
    }

    /// Initial state with the configured sort mode and page size applied.
    pub fn from_config(config: &ResolvedConfig, source_name: &str) -> Self {
        let mut app = Self::new(source_name);
        app.view.sort = config.sort;
        app.view.page_size = config.page_size;
        app
    }

    /// Recomputes the derived view for the current snapshot. Runs the full
    /// pipeline every time; nothing is cached between calls.
    pub fn display(&self) -> DisplayView {
        project(&self.countries, &self.view)
    }

    /// The currently selected country, when the selection is set.
    pub fn selected_country(&self) -> Option<&Country> {
        self.view.selected.and_then(|i| self.countries.get(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::view::SortMode;
    use crate::test_support::sample_trio;

    #[test]
    fn test_app_new_defaults() {
        let app = App::new("restcountries");
        assert!(app.countries.is_empty());
        assert!(app.is_loading);
        assert_eq!(app.status_message, "Loading countries...");
        assert_eq!(app.view.current_page, 1);
        assert_eq!(app.view.sort, SortMode::Name);
        assert!(app.view.selected.is_none());
    }

    #[test]
    fn test_selected_country_resolves_index() {
        let mut app = App::new("restcountries");
        app.countries = sample_trio();
        app.view.selected = Some(1);
        assert_eq!(app.selected_country().map(|c| c.name.as_str()), Some("Canada"));

        app.view.selected = Some(99);
        assert!(app.selected_country().is_none());
    }
}
