//! # TitleBar Component
//!
//! Top status bar showing the data source and the current status message.
//!
//! Purely presentational — it receives all data as props and has no
//! internal state, so it renders the same line for the same inputs:
//!
//! 1. **With status**: `"Atlas (source: restcountries) | 250 countries"`
//! 2. **Without**: `"Atlas (source: restcountries)"`

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

use crate::tui::component::Component;

/// Top status bar component.
///
/// # Props
///
/// - `source_name`: The data source label (e.g. "restcountries")
/// - `status_message`: Transient status (e.g. "Loading countries...")
pub struct TitleBar {
    pub source_name: String,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(source_name: String, status_message: String) -> Self {
        Self {
            source_name,
            status_message,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title_text = if self.status_message.is_empty() {
            format!("Atlas (source: {})", self.source_name)
        } else {
            format!("Atlas (source: {}) | {}", self.source_name, self.status_message)
        };

        frame.render_widget(Span::raw(title_text), area);
    }
}
