//! # PaginationBar Component
//!
//! One line of page controls derived from the projection's page window:
//! a Prev arrow (only when a previous page exists), the visible page
//! numbers with the current one highlighted, ellipses where the window
//! policy puts them, and a Next arrow (only when a further page exists).
//!
//! Stateless — the window itself is computed in `core::view`; this
//! component just draws it.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::view::PageControl;

pub struct PaginationBar<'a> {
    window: &'a [PageControl],
    current_page: usize,
    show_prev: bool,
    show_next: bool,
}

impl<'a> PaginationBar<'a> {
    pub fn new(
        window: &'a [PageControl],
        current_page: usize,
        show_prev: bool,
        show_next: bool,
    ) -> Self {
        Self {
            window,
            current_page,
            show_prev,
            show_next,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        // No pages at all: nothing to draw, both arrows hidden.
        if self.window.is_empty() {
            return;
        }

        let dim = Style::default().fg(Color::DarkGray);
        let page_style = Style::default().fg(Color::Gray);
        let current_style = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED);

        let mut spans = Vec::new();
        if self.show_prev {
            spans.push(Span::styled("← Prev ", page_style));
        }
        for control in self.window {
            match control {
                PageControl::Page(page) => {
                    let style = if *page == self.current_page {
                        current_style
                    } else {
                        page_style
                    };
                    spans.push(Span::styled(format!(" {} ", page), style));
                }
                PageControl::Ellipsis => {
                    spans.push(Span::styled(" … ", dim));
                }
            }
        }
        if self.show_next {
            spans.push(Span::styled(" Next →", page_style));
        }

        let bar = Paragraph::new(Line::from(spans).centered());
        frame.render_widget(bar, area);
    }
}
