//! # Projection Pipeline
//!
//! Pure derivation of the visible page from a snapshot of source data and
//! view state:
//!
//! ```text
//! (source collection, ViewState)  →  project()  →  DisplayView
//!                                      sort → filter → paginate
//! ```
//!
//! Nothing in here does I/O or mutates the source collection — sorting
//! happens on a scratch vector of indices, so the fetched data stays a
//! stable reference for every re-projection. The whole pipeline runs fresh
//! on each pass; with a few hundred records there is nothing worth
//! computing incrementally.

use serde::{Deserialize, Serialize};

use crate::source::Country;

/// The fixed set of selectable page sizes.
pub const PAGE_SIZES: [usize; 6] = [5, 6, 7, 8, 9, 10];

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Ordering applied before the name filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    #[default]
    Name,
    PopulationAsc,
    PopulationDesc,
}

impl SortMode {
    pub fn label(&self) -> &'static str {
        match self {
            SortMode::Name => "Name",
            SortMode::PopulationAsc => "Population ↑",
            SortMode::PopulationDesc => "Population ↓",
        }
    }

    /// Cycles name → population ascending → population descending.
    pub fn next(&self) -> Self {
        match self {
            SortMode::Name => SortMode::PopulationAsc,
            SortMode::PopulationAsc => SortMode::PopulationDesc,
            SortMode::PopulationDesc => SortMode::Name,
        }
    }
}

/// All user-controlled presentation state, serializable and independent of
/// any rendering layer. Mutated only through `core::action::update`.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    pub sort: SortMode,
    /// Case-insensitive substring match against the country name.
    pub search: String,
    /// Always one of [`PAGE_SIZES`].
    pub page_size: usize,
    /// 1-based. The reducer clamps this to the page count after every
    /// action; `project` itself accepts any value.
    pub current_page: usize,
    /// Index into the source collection, or none.
    pub selected: Option<usize>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            sort: SortMode::default(),
            search: String::new(),
            page_size: DEFAULT_PAGE_SIZE,
            current_page: 1,
            selected: None,
        }
    }
}

/// One control in the page window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageControl {
    Page(usize),
    Ellipsis,
}

/// The sorted, filtered, paginated slice actually rendered, plus the
/// pagination chrome derived in the same pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DisplayView {
    /// Source-collection indices of the visible page, in display order.
    pub rows: Vec<usize>,
    /// Entries surviving the filter, across all pages.
    pub match_count: usize,
    pub total_pages: usize,
    pub window: Vec<PageControl>,
    pub show_prev: bool,
    pub show_next: bool,
}

/// Runs the full pipeline for one snapshot.
///
/// Total over any input: a page beyond the available range yields empty
/// `rows`, never an error.
pub fn project(countries: &[Country], view: &ViewState) -> DisplayView {
    let needle = view.search.to_lowercase();
    let matches: Vec<usize> = sorted_indices(countries, view.sort)
        .into_iter()
        .filter(|&i| needle.is_empty() || countries[i].name.to_lowercase().contains(&needle))
        .collect();

    let match_count = matches.len();
    let total_pages = match_count.div_ceil(view.page_size);

    let start = view
        .current_page
        .saturating_sub(1)
        .saturating_mul(view.page_size);
    let end = (start + view.page_size).min(match_count);
    let rows = if start < match_count {
        matches[start..end].to_vec()
    } else {
        Vec::new()
    };

    DisplayView {
        rows,
        match_count,
        total_pages,
        window: page_window(total_pages, view.current_page),
        show_prev: view.current_page > 1,
        show_next: view.current_page < total_pages,
    }
}

/// Stable ordering of source indices under the given sort mode.
///
/// Name ordering lowercases both sides and compares bytewise; population
/// ordering is numeric. Equal keys keep their source order.
fn sorted_indices(countries: &[Country], sort: SortMode) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..countries.len()).collect();
    match sort {
        SortMode::Name => indices.sort_by(|&a, &b| {
            countries[a]
                .name
                .to_lowercase()
                .cmp(&countries[b].name.to_lowercase())
        }),
        SortMode::PopulationAsc => indices.sort_by_key(|&i| countries[i].population),
        SortMode::PopulationDesc => {
            indices.sort_by_key(|&i| std::cmp::Reverse(countries[i].population))
        }
    }
    indices
}

/// Computes the set of page buttons and ellipses to show.
///
/// Policy:
/// - on the first three pages, pages 1..=5 are visible, with an ellipsis at
///   position 6 when a sixth page exists;
/// - in the middle, the window is the current page ±2 with an ellipsis on
///   each side;
/// - within the last three pages, the final five pages are visible.
pub fn page_window(total_pages: usize, current_page: usize) -> Vec<PageControl> {
    let middle_band = current_page > 3 && current_page + 3 <= total_pages;
    let mut window = Vec::new();
    for page in 1..=total_pages {
        let visible = (current_page <= 3 && page <= 5)
            || (middle_band && current_page.abs_diff(page) <= 2)
            || (current_page + 3 > total_pages && page + 4 >= total_pages);

        if visible {
            window.push(PageControl::Page(page));
        } else if (current_page <= 3 && page == 6)
            || (middle_band && current_page.abs_diff(page) == 3)
        {
            window.push(PageControl::Ellipsis);
        }
    }
    window
}

/// The next selectable page size in the given direction, saturating at the
/// ends of [`PAGE_SIZES`].
pub fn step_page_size(size: usize, up: bool) -> usize {
    let idx = PAGE_SIZES
        .iter()
        .position(|&s| s == size)
        .unwrap_or(PAGE_SIZES.len() - 1);
    let idx = if up {
        (idx + 1).min(PAGE_SIZES.len() - 1)
    } else {
        idx.saturating_sub(1)
    };
    PAGE_SIZES[idx]
}
