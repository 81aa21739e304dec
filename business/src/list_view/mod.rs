//! Employee list view domain module.
//!
//! This module is the single home for:
//! - `ViewState`: search text, sort column/direction and current page
//! - `ListViewEngine`: the held record set plus the filter -> sort -> paginate
//!   derivation producing a `VisiblePage`
//!
//! Presentation code reads `VisiblePage` and calls the engine mutators; it
//! should not touch `ViewState` fields directly.

pub mod engine;
pub mod state;

pub use engine::{ListViewEngine, VisiblePage};
pub use state::{PAGE_SIZE, PageStep, SortKey, SortOrder, ViewState};
