//! # SearchBox Component
//!
//! Single-line text input that drives the name filter. Every edit emits
//! `SearchEvent::Changed` with the full term, so the list re-filters on
//! each keystroke rather than on submit.
//!
//! The buffer and cursor are internal state; `focused` is a prop set by
//! the event loop from the current input mode.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the SearchBox.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// The term changed; carries the full buffer.
    Changed(String),
    /// The user left the search box (Enter or Esc).
    Dismiss,
}

pub struct SearchBox {
    /// Text buffer (internal state).
    pub buffer: String,
    /// Whether keystrokes currently land here (prop).
    pub focused: bool,
    /// Cursor position as a byte offset into `buffer`.
    cursor: usize,
}

impl SearchBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            focused: false,
            cursor: 0,
        }
    }

    fn changed(&self) -> Option<SearchEvent> {
        Some(SearchEvent::Changed(self.buffer.clone()))
    }
}

impl Default for SearchBox {
    fn default() -> Self {
        Self::new()
    }
}

/// Byte offset of the char boundary before `pos`.
fn prev_char_boundary(s: &str, pos: usize) -> usize {
    s[..pos].char_indices().next_back().map(|(i, _)| i).unwrap_or(0)
}

/// Byte offset of the char boundary after `pos`.
fn next_char_boundary(s: &str, pos: usize) -> usize {
    s[pos..]
        .chars()
        .next()
        .map(|c| pos + c.len_utf8())
        .unwrap_or(s.len())
}

impl Component for SearchBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray).add_modifier(Modifier::DIM)
        };

        let block = Block::bordered().title(" Search (/) ").border_style(style);
        let input = Paragraph::new(self.buffer.as_str()).block(block);
        frame.render_widget(input, area);

        if self.focused {
            let cursor_col = self.buffer[..self.cursor].chars().count() as u16;
            frame.set_cursor_position((area.x + 1 + cursor_col, area.y + 1));
        }
    }
}

impl EventHandler for SearchBox {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                self.changed()
            }
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                    self.changed()
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(self.cursor..next);
                    self.changed()
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => {
                if self.cursor > 0 {
                    self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                }
                None
            }
            TuiEvent::CursorRight => {
                if self.cursor < self.buffer.len() {
                    self.cursor = next_char_boundary(&self.buffer, self.cursor);
                }
                None
            }
            TuiEvent::Home => {
                self.cursor = 0;
                None
            }
            TuiEvent::End => {
                self.cursor = self.buffer.len();
                None
            }
            TuiEvent::Submit | TuiEvent::Escape => Some(SearchEvent::Dismiss),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_typing_emits_full_term() {
        let mut search = SearchBox::new();

        let res = search.handle_event(&TuiEvent::InputChar('c'));
        assert_eq!(res, Some(SearchEvent::Changed("c".to_string())));

        let res = search.handle_event(&TuiEvent::InputChar('u'));
        assert_eq!(res, Some(SearchEvent::Changed("cu".to_string())));

        let res = search.handle_event(&TuiEvent::Backspace);
        assert_eq!(res, Some(SearchEvent::Changed("c".to_string())));
    }

    #[test]
    fn test_backspace_on_empty_buffer_is_silent() {
        let mut search = SearchBox::new();
        assert_eq!(search.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn test_edit_at_cursor_position() {
        let mut search = SearchBox::new();
        for c in "cba".chars() {
            search.handle_event(&TuiEvent::InputChar(c));
        }
        search.handle_event(&TuiEvent::Home);
        search.handle_event(&TuiEvent::CursorRight);
        search.handle_event(&TuiEvent::Delete);
        assert_eq!(search.buffer, "ca");

        search.handle_event(&TuiEvent::End);
        search.handle_event(&TuiEvent::Backspace);
        assert_eq!(search.buffer, "c");
    }

    #[test]
    fn test_multibyte_input_keeps_char_boundaries() {
        let mut search = SearchBox::new();
        search.handle_event(&TuiEvent::InputChar('å'));
        search.handle_event(&TuiEvent::InputChar('l'));
        search.handle_event(&TuiEvent::CursorLeft);
        search.handle_event(&TuiEvent::CursorLeft);
        search.handle_event(&TuiEvent::Delete);
        assert_eq!(search.buffer, "l");
    }

    #[test]
    fn test_enter_and_escape_dismiss() {
        let mut search = SearchBox::new();
        assert_eq!(search.handle_event(&TuiEvent::Submit), Some(SearchEvent::Dismiss));
        assert_eq!(search.handle_event(&TuiEvent::Escape), Some(SearchEvent::Dismiss));
        // Dismissing never clears the term; the filter stays applied.
        search.handle_event(&TuiEvent::InputChar('x'));
        search.handle_event(&TuiEvent::Escape);
        assert_eq!(search.buffer, "x");
    }

    #[test]
    fn test_render_shows_buffer() {
        let backend = TestBackend::new(40, 3);
        let mut terminal = Terminal::new(backend).unwrap();

        let mut search = SearchBox::new();
        search.focused = true;
        search.handle_event(&TuiEvent::InputChar('c'));
        search.handle_event(&TuiEvent::InputChar('u'));

        terminal
            .draw(|f| {
                search.render(f, f.area());
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Search (/)"));
        assert!(text.contains("cu"));
    }
}
