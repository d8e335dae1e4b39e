//! # Actions
//!
//! Everything that can happen in Atlas becomes an `Action`.
//! User types in the search box? That's `Action::SearchChanged(term)`.
//! The startup fetch resolves? That's `Action::CountriesLoaded(countries)`.
//!
//! The `update()` function takes the current state and an action, then
//! mutates the state accordingly. No side effects here. I/O happens
//! elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State
//! ```
//!
//! This makes everything testable: apply an action, assert on the state.

use log::{debug, info};

use crate::core::state::App;
use crate::core::view::{PAGE_SIZES, SortMode, project};
use crate::source::Country;

/// Everything that can happen in the app.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The startup fetch resolved; replaces the source collection wholesale.
    CountriesLoaded(Vec<Country>),
    /// The startup fetch failed. Already logged at the adapter boundary;
    /// the message is carried for tests, not shown to the user.
    FetchFailed(String),
    SearchChanged(String),
    SortChanged(SortMode),
    PageSizeChanged(usize),
    /// Jump straight to a page (page button, digit key).
    GoToPage(usize),
    NextPage,
    PrevPage,
    /// Select the country at this source-collection index.
    Select(usize),
    ClearSelection,
    Quit,
}

/// What the caller must do after a state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

/// The reducer: applies one action to the state.
///
/// The only mutation path in the system. After every action the current
/// page is clamped to the page count of the new filtered view; a clamp
/// that moves the page counts as a page change and clears the selection,
/// so a shrinking filter can never leave the user stranded on an empty
/// page with a dangling detail panel.
pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::CountriesLoaded(countries) => {
            info!("Loaded {} countries", countries.len());
            app.status_message = format!("{} countries", countries.len());
            app.countries = countries;
            app.is_loading = false;
        }
        Action::FetchFailed(_) => {
            // Swallowed: the UI keeps its prior collection (empty before
            // the first successful load) and stays interactive.
            app.is_loading = false;
            app.status_message.clear();
        }
        Action::SearchChanged(term) => {
            app.view.search = term;
        }
        Action::SortChanged(sort) => {
            app.view.sort = sort;
        }
        Action::PageSizeChanged(size) => {
            if PAGE_SIZES.contains(&size) {
                app.view.page_size = size;
            } else {
                debug!("Ignoring page size {} outside the fixed set", size);
            }
        }
        Action::GoToPage(page) => {
            let total = project(&app.countries, &app.view).total_pages;
            if (1..=total).contains(&page) {
                set_page(app, page);
            }
        }
        Action::NextPage => {
            let total = project(&app.countries, &app.view).total_pages;
            if app.view.current_page < total {
                set_page(app, app.view.current_page + 1);
            }
        }
        Action::PrevPage => {
            if app.view.current_page > 1 {
                set_page(app, app.view.current_page - 1);
            }
        }
        Action::Select(index) => {
            if index < app.countries.len() {
                app.view.selected = Some(index);
            }
        }
        Action::ClearSelection => {
            app.view.selected = None;
        }
        Action::Quit => return Effect::Quit,
    }

    clamp_page(app);
    Effect::None
}

/// Page changes always drop the selection, matching the page-button
/// behavior: activating a page clears the detail panel even when it is
/// already the current page.
fn set_page(app: &mut App, page: usize) {
    app.view.current_page = page.max(1);
    app.view.selected = None;
}

/// Clamps `current_page` to the page count of the current filtered view.
fn clamp_page(app: &mut App) {
    let total = project(&app.countries, &app.view).total_pages;
    let clamped = app.view.current_page.min(total.max(1));
    if clamped != app.view.current_page {
        debug!("Clamping page {} -> {}", app.view.current_page, clamped);
        app.view.current_page = clamped;
        app.view.selected = None;
    }
}
