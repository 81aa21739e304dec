//! The list view engine: held records plus the filter -> sort -> paginate
//! derivation.

use serde::Serialize;

use super::state::{PAGE_SIZE, PageStep, SortKey, SortOrder, ViewState};
use crate::collate::locale_compare;
use crate::employee::Employee;

/// The records shown on the current page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisiblePage<'a> {
    /// Page rows, in display order.
    pub records: Vec<&'a Employee>,
    /// `ceil(filtered / PAGE_SIZE)`; zero when nothing matches.
    pub total_pages: usize,
    /// Number of records that passed the search filter.
    pub filtered_count: usize,
}

impl VisiblePage<'_> {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Page count shown to the user, never below one.
    pub fn displayed_total_pages(&self) -> usize {
        self.total_pages.max(1)
    }
}

/// Owns the record set and the [`ViewState`] and derives the visible page.
///
/// Nothing is cached: [`ListViewEngine::compute_visible_page`] runs the whole
/// pipeline on each call.
#[derive(Debug, Default, Clone)]
pub struct ListViewEngine {
    records: Vec<Employee>,
    state: ViewState,
}

impl ListViewEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<Employee>) -> Self {
        let mut engine = Self::new();
        engine.set_records(records);
        engine
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn records(&self) -> &[Employee] {
        &self.records
    }

    /// Replaces the held records. The view state is left untouched.
    pub fn set_records(&mut self, records: Vec<Employee>) {
        log::debug!("list view: holding {} records", records.len());
        self.records = records;
    }

    /// Sets the search text and returns to the first page.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.state.search_text = text.into();
        self.state.current_page = 1;
    }

    /// Sorts by `key`; selecting the active column flips the direction.
    ///
    /// The current page is kept.
    pub fn set_sort(&mut self, key: SortKey) {
        if self.state.sort_key == key {
            self.state.sort_order = self.state.sort_order.toggled();
        } else {
            self.state.sort_key = key;
            self.state.sort_order = SortOrder::Ascending;
        }
    }

    /// Moves one page back or forward.
    ///
    /// Callers gate the step with [`ListViewEngine::can_go_next`] and
    /// [`ListViewEngine::can_go_prev`]; the engine does not check the upper
    /// bound, so stepping past the last page shows an empty page.
    ///
    /// The one exception is the lower bound: pages are 1-based and stored
    /// unsigned, so `Prev` on page 1 is clamped and stays on page 1 instead of
    /// producing page 0.
    pub fn set_page(&mut self, step: PageStep) {
        let page = self.state.current_page;
        self.state.current_page = match step {
            PageStep::Prev => page.saturating_sub(1).max(1),
            PageStep::Next => page.saturating_add(1),
        };
    }

    pub fn can_go_prev(&self) -> bool {
        self.state.current_page != 1
    }

    pub fn can_go_next(&self) -> bool {
        let total_pages = self.total_pages();
        total_pages != 0 && self.state.current_page != total_pages
    }

    /// `ceil(filtered / PAGE_SIZE)` for the current search text.
    pub fn total_pages(&self) -> usize {
        self.filtered().count().div_ceil(PAGE_SIZE)
    }

    /// Runs filter, sort and paginate over the held records.
    pub fn compute_visible_page(&self) -> VisiblePage<'_> {
        let mut sorted: Vec<&Employee> = self.filtered().collect();

        let key = self.state.sort_key;
        // `sort_by` is stable, so equal keys keep their fetch order.
        match self.state.sort_order {
            SortOrder::Ascending => {
                sorted.sort_by(|a, b| locale_compare(a.field(key), b.field(key)));
            }
            SortOrder::Descending => {
                sorted.sort_by(|a, b| locale_compare(b.field(key), a.field(key)));
            }
        }

        let filtered_count = sorted.len();
        let total_pages = filtered_count.div_ceil(PAGE_SIZE);

        let start = self
            .state
            .current_page
            .saturating_sub(1)
            .saturating_mul(PAGE_SIZE);
        let records = sorted.into_iter().skip(start).take(PAGE_SIZE).collect();

        VisiblePage {
            records,
            total_pages,
            filtered_count,
        }
    }

    fn filtered(&self) -> impl Iterator<Item = &Employee> + '_ {
        let needle = self.state.search_text.to_lowercase();
        self.records.iter().filter(move |employee| {
            needle.is_empty()
                || employee
                    .field(SortKey::FirstName)
                    .to_lowercase()
                    .contains(&needle)
        })
    }
}
