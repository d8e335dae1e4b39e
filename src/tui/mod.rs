//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//! Everything it does to the state goes through `core::action::update`; the
//! only thing it owns is presentation state (search focus, list highlight).
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//! while the startup fetch is in flight it polls on a short timeout so the
//! loading placeholder stays fresh; once idle it sleeps up to 400ms and
//! only redraws on events or background actions.
//!
//! ## Input Modes
//!
//! Two modes, switched with `/` and `Esc`/`Enter`:
//! - **Browse**: arrows move the highlight and flip pages, `s` cycles the
//!   sort, `+`/`-` step the page size, digits jump to a page, `Enter`
//!   opens the detail panel.
//! - **Search**: keystrokes edit the filter term live.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, error, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::core::view::step_page_size;
use crate::source::{CountrySource, RestCountriesSource};
use crate::tui::component::EventHandler;
use crate::tui::components::{CountryListState, SearchBox, SearchEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Modal input mode: determines how keyboard events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Navigate the list and pages. `/` switches to Search.
    Browse,
    /// Text editing in the search box. Enter/Esc switches back to Browse.
    Search,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub search_box: SearchBox,
    pub list: CountryListState,
    pub input_mode: InputMode,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            search_box: SearchBox::new(),
            list: CountryListState::new(),
            input_mode: InputMode::Browse,
        }
    }

    pub fn searching(&self) -> bool {
        matches!(self.input_mode, InputMode::Search)
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse capture)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source: Arc<dyn CountrySource> =
        Arc::new(RestCountriesSource::new(Some(config.endpoint.clone())));
    let mut app = App::from_config(&config, source.name());
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from the background fetch
    let (tx, rx) = mpsc::channel();

    // The one and only retrieval: fired at startup, never re-triggered by
    // view-state changes, never retried.
    spawn_fetch(source, tx);

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw || app.is_loading {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        // Short poll while the loading placeholder is up, long when idle
        let timeout = if app.is_loading {
            std::time::Duration::from_millis(120)
        } else {
            std::time::Duration::from_millis(400)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain all pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            needs_redraw = true;

            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // ForceQuit (Ctrl+C) always quits regardless of mode
            if matches!(event, TuiEvent::ForceQuit) {
                if update(&mut app, Action::Quit) == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            // Mouse click — select the row under the pointer, any mode
            if let TuiEvent::MouseClick(column, row) = event {
                let view = app.display();
                let frame_area = terminal.get_frame().area();
                let hit = ui::hit_test_row(
                    column,
                    row,
                    frame_area,
                    app.selected_country().is_some(),
                    view.rows.len(),
                );
                if let Some(index) = hit {
                    tui.list.cursor = index;
                    if let Some(&source_index) = view.rows.get(index) {
                        update(&mut app, Action::Select(source_index));
                    }
                }
                continue;
            }

            // Modal event dispatch
            match tui.input_mode {
                InputMode::Search => {
                    if let Some(search_event) = tui.search_box.handle_event(&event) {
                        match search_event {
                            SearchEvent::Changed(term) => {
                                update(&mut app, Action::SearchChanged(term));
                            }
                            SearchEvent::Dismiss => {
                                tui.input_mode = InputMode::Browse;
                            }
                        }
                    }
                }
                InputMode::Browse => {
                    handle_browse_event(&mut app, &mut tui, &event, &mut should_quit);
                }
            }
        }

        if should_quit {
            break;
        }

        // Handle background fetch results
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            update(&mut app, action);
        }
    }

    ratatui::restore();
    Ok(())
}

fn handle_browse_event(app: &mut App, tui: &mut TuiState, event: &TuiEvent, should_quit: &mut bool) {
    match event {
        TuiEvent::InputChar('q') => {
            if update(app, Action::Quit) == Effect::Quit {
                *should_quit = true;
            }
        }
        TuiEvent::InputChar('/') => {
            tui.input_mode = InputMode::Search;
        }
        TuiEvent::InputChar('s') => {
            let next = app.view.sort.next();
            update(app, Action::SortChanged(next));
        }
        TuiEvent::InputChar('+') | TuiEvent::InputChar('=') => {
            let size = step_page_size(app.view.page_size, true);
            update(app, Action::PageSizeChanged(size));
        }
        TuiEvent::InputChar('-') => {
            let size = step_page_size(app.view.page_size, false);
            update(app, Action::PageSizeChanged(size));
        }
        TuiEvent::InputChar('c') => {
            update(app, Action::ClearSelection);
        }
        TuiEvent::InputChar(c) if c.is_ascii_digit() && *c != '0' => {
            let page = (*c as u8 - b'0') as usize;
            update(app, Action::GoToPage(page));
            tui.list.reset();
        }
        TuiEvent::Escape => {
            update(app, Action::ClearSelection);
        }
        TuiEvent::CursorUp => {
            tui.list.move_up();
        }
        TuiEvent::CursorDown => {
            let row_count = app.display().rows.len();
            tui.list.move_down(row_count);
        }
        TuiEvent::CursorLeft | TuiEvent::PrevPage => {
            update(app, Action::PrevPage);
            tui.list.reset();
        }
        TuiEvent::CursorRight | TuiEvent::NextPage => {
            update(app, Action::NextPage);
            tui.list.reset();
        }
        TuiEvent::Submit => {
            let view = app.display();
            if let Some(&source_index) = view.rows.get(tui.list.cursor) {
                update(app, Action::Select(source_index));
            }
        }
        _ => {}
    }
}

fn spawn_fetch(source: Arc<dyn CountrySource>, tx: mpsc::Sender<Action>) {
    info!("Spawning startup fetch from source '{}'", source.name());
    tokio::spawn(async move {
        match source.fetch_all().await {
            Ok(countries) => {
                debug!("Fetch task delivering {} countries", countries.len());
                if tx.send(Action::CountriesLoaded(countries)).is_err() {
                    warn!("Failed to deliver fetched countries: receiver dropped");
                }
            }
            Err(e) => {
                // The adapter boundary: log and swallow. The UI keeps its
                // prior (empty) collection and stays interactive.
                error!("Country fetch failed: {}", e);
                if tx.send(Action::FetchFailed(e.to_string())).is_err() {
                    warn!("Failed to deliver fetch failure: receiver dropped");
                }
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::Action;
    use crate::test_support::{collection, test_app};

    #[test]
    fn test_browse_keys_drive_the_reducer() {
        let mut app = test_app();
        update(&mut app, Action::CountriesLoaded(collection(30)));
        let mut tui = TuiState::new();
        let mut quit = false;

        handle_browse_event(&mut app, &mut tui, &TuiEvent::InputChar('s'), &mut quit);
        assert_eq!(app.view.sort, crate::core::view::SortMode::PopulationAsc);

        handle_browse_event(&mut app, &mut tui, &TuiEvent::InputChar('-'), &mut quit);
        assert_eq!(app.view.page_size, 9);

        handle_browse_event(&mut app, &mut tui, &TuiEvent::CursorRight, &mut quit);
        assert_eq!(app.view.current_page, 2);

        handle_browse_event(&mut app, &mut tui, &TuiEvent::InputChar('3'), &mut quit);
        assert_eq!(app.view.current_page, 3);

        handle_browse_event(&mut app, &mut tui, &TuiEvent::InputChar('q'), &mut quit);
        assert!(quit);
    }

    #[test]
    fn test_enter_selects_the_highlighted_row() {
        let mut app = test_app();
        update(&mut app, Action::CountriesLoaded(collection(12)));
        let mut tui = TuiState::new();
        let mut quit = false;

        handle_browse_event(&mut app, &mut tui, &TuiEvent::CursorDown, &mut quit);
        handle_browse_event(&mut app, &mut tui, &TuiEvent::Submit, &mut quit);

        let selected = app.selected_country().map(|c| c.name.clone());
        assert_eq!(selected.as_deref(), Some("Country 02"));

        handle_browse_event(&mut app, &mut tui, &TuiEvent::Escape, &mut quit);
        assert!(app.selected_country().is_none());
    }

    #[test]
    fn test_slash_switches_to_search_mode() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        let mut quit = false;

        handle_browse_event(&mut app, &mut tui, &TuiEvent::InputChar('/'), &mut quit);
        assert!(tui.searching());
        assert!(!quit);
    }
}
