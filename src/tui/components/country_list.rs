//! # CountryList Component
//!
//! The visible page of the directory. Follows the persistent state +
//! transient wrapper pattern:
//! - `CountryListState` lives in `TuiState` and carries the highlight
//!   across frames
//! - `CountryList` is created each frame with the rows the projection
//!   produced for the current page
//!
//! The highlight (which row ↑/↓ sit on) is presentation state only; the
//! selected country — the one the detail panel shows — lives in core
//! `ViewState` and changes only through the reducer.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::source::Country;

/// Persistent presentation state for the list.
pub struct CountryListState {
    /// Highlighted row within the visible page, 0-based.
    pub cursor: usize,
    pub list_state: ListState,
}

impl CountryListState {
    pub fn new() -> Self {
        Self {
            cursor: 0,
            list_state: ListState::default(),
        }
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self, row_count: usize) {
        if row_count > 0 {
            self.cursor = (self.cursor + 1).min(row_count - 1);
        }
    }

    /// Puts the highlight back on the first row (page changes).
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    fn clamp(&mut self, row_count: usize) {
        if row_count == 0 {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.min(row_count - 1);
        }
    }
}

impl Default for CountryListState {
    fn default() -> Self {
        Self::new()
    }
}

/// Transient render wrapper for the visible page.
pub struct CountryList<'a> {
    state: &'a mut CountryListState,
    rows: &'a [&'a Country],
    match_count: usize,
    /// Shown instead of rows when the page is empty ("Loading..." during
    /// the startup fetch, "No countries match" afterwards).
    empty_text: &'a str,
}

impl<'a> CountryList<'a> {
    pub fn new(
        state: &'a mut CountryListState,
        rows: &'a [&'a Country],
        match_count: usize,
        empty_text: &'a str,
    ) -> Self {
        Self {
            state,
            rows,
            match_count,
            empty_text,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.clamp(self.rows.len());

        let block = Block::bordered()
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Countries ")
            .title_bottom(Line::from(format!(" {} matches ", self.match_count)).right_aligned());

        if self.rows.is_empty() {
            let empty = Paragraph::new(self.empty_text)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            self.state.list_state.select(None);
            return;
        }

        let inner_width = area.width.saturating_sub(2) as usize;
        let pop_width = 12usize.min(inner_width.saturating_sub(4));
        let name_width = inner_width.saturating_sub(pop_width + 1);

        let items: Vec<ListItem> = self
            .rows
            .iter()
            .enumerate()
            .map(|(i, country)| {
                let name = truncate_to_width(&country.name, name_width);
                let pad = name_width.saturating_sub(name.width());
                let line = format!(
                    "{}{} {:>pop_width$}",
                    name,
                    " ".repeat(pad),
                    format_population(country.population),
                );

                let style = if i == self.state.cursor {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::Gray)
                };

                ListItem::new(line).style(style)
            })
            .collect();

        self.state.list_state.select(Some(self.state.cursor));
        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

/// Truncate a string to fit within `max_width` columns, adding "…" when
/// something was cut. Width-aware, so wide characters never overflow the
/// column.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let limit = max_width.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > limit {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Thousands-separated population, e.g. 5530719 -> "5,530,719".
pub(crate) fn format_population(population: u64) -> String {
    let digits = population.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_trio;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered_text(list: &mut CountryList<'_>) -> String {
        let backend = TestBackend::new(40, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                list.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_cursor_movement_clamps_to_page() {
        let mut state = CountryListState::new();
        state.move_up();
        assert_eq!(state.cursor, 0);

        state.move_down(3);
        state.move_down(3);
        state.move_down(3);
        assert_eq!(state.cursor, 2);

        state.move_down(0);
        assert_eq!(state.cursor, 2);

        state.reset();
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_render_shows_names_and_populations() {
        let countries = sample_trio();
        let rows: Vec<&_> = countries.iter().collect();
        let mut state = CountryListState::new();
        let mut list = CountryList::new(&mut state, &rows, 3, "No countries match");

        let text = rendered_text(&mut list);
        assert!(text.contains("Chad"));
        assert!(text.contains("Canada"));
        assert!(text.contains("Cuba"));
        assert!(text.contains("3 matches"));
    }

    #[test]
    fn test_render_empty_page_shows_placeholder() {
        let rows: Vec<&Country> = Vec::new();
        let mut state = CountryListState::new();
        state.cursor = 4;
        let mut list = CountryList::new(&mut state, &rows, 0, "No countries match");

        let text = rendered_text(&mut list);
        assert!(text.contains("No countries match"));
        assert!(text.contains("0 matches"));
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Chad", 10), "Chad");
        assert_eq!(truncate_to_width("Liechtenstein", 6), "Liech…");
        assert_eq!(truncate_to_width("Chad", 4), "Chad");
    }

    #[test]
    fn test_format_population() {
        assert_eq!(format_population(0), "0");
        assert_eq!(format_population(100), "100");
        assert_eq!(format_population(5_530_719), "5,530,719");
        assert_eq!(format_population(1_402_112_000), "1,402,112,000");
    }
}
