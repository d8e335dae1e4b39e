//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! Two patterns, following the architecture in `component.rs`:
//!
//! - **Stateless (props-based)**: receive all data as struct fields and
//!   just render it — `TitleBar`, `DetailPanel`, `PaginationBar`.
//! - **Stateful (event-driven)**: keep local presentation state and emit
//!   high-level events — `SearchBox` (text buffer + cursor), and
//!   `CountryList` (persistent `CountryListState` + transient render
//!   wrapper, so the highlight survives across frames while the rendered
//!   rows are re-derived each frame from the projection).
//!
//! Each component file contains everything related to that component:
//! state types, event types, rendering logic, and tests.

mod title_bar;
pub use title_bar::TitleBar;

pub mod search_box;
pub use search_box::{SearchBox, SearchEvent};

pub mod country_list;
pub use country_list::{CountryList, CountryListState};

pub mod detail_panel;
pub use detail_panel::DetailPanel;

pub mod pagination_bar;
pub use pagination_bar::PaginationBar;
