//! Full-frame composition: title bar, controls row, country list with the
//! optional detail panel beside it, pagination line and key help.
//!
//! The frame layout is also the source of truth for mouse hit testing —
//! `hit_test_row` recomputes the same `Layout` so a click can be mapped
//! back to a visible list row without caching rectangles between frames.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Paragraph};

use crate::core::state::App;
use crate::source::Country;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{CountryList, DetailPanel, PaginationBar, TitleBar};

const KEY_HELP: &str =
    " / search  s sort  +/- page size  ←/→ page  1-9 jump  ↑/↓ move  Enter details  q quit";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(3), Min(0), Length(1), Length(1)]);
    let [title_area, controls_area, main_area, pagination_area, help_area] =
        layout.areas(frame.area());

    let view = app.display();

    // Title bar
    TitleBar::new(app.source_name.clone(), app.status_message.clone())
        .render(frame, title_area);

    // Controls row: search box plus the two "selects"
    let controls = Layout::horizontal([Min(0), Length(18), Length(18)]);
    let [search_area, sort_area, size_area] = controls.areas(controls_area);

    tui.search_box.focused = tui.searching();
    tui.search_box.render(frame, search_area);
    draw_control(frame, sort_area, " Sort (s) ", app.view.sort.label());
    draw_control(
        frame,
        size_area,
        " Per page (+/-) ",
        &app.view.page_size.to_string(),
    );

    // Main area: list, with the detail panel beside it while a country is
    // selected
    let rows: Vec<&Country> = view
        .rows
        .iter()
        .filter_map(|&i| app.countries.get(i))
        .collect();
    let empty_text = if app.is_loading {
        "Loading countries..."
    } else {
        "No countries match"
    };

    if let Some(country) = app.selected_country() {
        let [list_area, detail_area] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(main_area);
        CountryList::new(&mut tui.list, &rows, view.match_count, empty_text)
            .render(frame, list_area);
        DetailPanel::new(country).render(frame, detail_area);
    } else {
        CountryList::new(&mut tui.list, &rows, view.match_count, empty_text)
            .render(frame, main_area);
    }

    // Pagination line
    PaginationBar::new(&view.window, app.view.current_page, view.show_prev, view.show_next)
        .render(frame, pagination_area);

    // Key help
    frame.render_widget(
        Span::styled(
            KEY_HELP,
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
        ),
        help_area,
    );
}

fn draw_control(frame: &mut Frame, area: Rect, title: &str, value: &str) {
    let control = Paragraph::new(value).block(
        Block::bordered()
            .border_style(Style::default().fg(Color::DarkGray))
            .title(title),
    );
    frame.render_widget(control, area);
}

/// Hit test: which visible list row (if any) sits at this screen position.
///
/// Recomputes the frame layout rather than caching it; the list renders
/// one row per line starting just below its border.
pub fn hit_test_row(
    column: u16,
    row: u16,
    frame_area: Rect,
    detail_open: bool,
    row_count: usize,
) -> Option<usize> {
    use Constraint::{Length, Min, Percentage};
    let layout = Layout::vertical([Length(1), Length(3), Min(0), Length(1), Length(1)]);
    let [_, _, main_area, _, _] = layout.areas(frame_area);

    let list_area = if detail_open {
        let [list_area, _] =
            Layout::horizontal([Percentage(50), Percentage(50)]).areas(main_area);
        list_area
    } else {
        main_area
    };

    if column < list_area.x || column >= list_area.x + list_area.width {
        return None;
    }

    // First row of content sits below the top border; the bottom border
    // is not clickable either.
    let top = list_area.y + 1;
    let content_height = list_area.height.saturating_sub(2);
    if row < top || row >= top + content_height {
        return None;
    }

    let index = (row - top) as usize;
    (index < row_count).then_some(index)
}
