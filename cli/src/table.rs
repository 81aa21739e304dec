//! Employee table rendering.

use tabled::builder::Builder;
use tabled::settings::Style;
use workers_business::{Employee, SortKey, ViewState, VisiblePage};

use crate::utils::truncate_str;

/// Shown in place of rows when the page is empty.
pub const EMPTY_MESSAGE: &str = "No employees found.";

const MAX_CELL_WIDTH: usize = 32;

/// Column headers, the active sort column carrying its direction arrow.
pub fn header_cells(state: &ViewState) -> Vec<String> {
    SortKey::ALL
        .iter()
        .map(|key| match state.sort_indicator(*key) {
            Some(arrow) => format!("{} {arrow}", key.label()),
            None => key.label().to_owned(),
        })
        .collect()
}

pub fn row_cells(employee: &Employee) -> Vec<String> {
    SortKey::ALL
        .iter()
        .map(|key| truncate_str(employee.field(*key), MAX_CELL_WIDTH))
        .collect()
}

/// Renders the header and the page rows as a rounded table.
pub fn render_table(state: &ViewState, page: &VisiblePage<'_>) -> String {
    let mut builder = Builder::default();
    builder.push_record(header_cells(state));
    for employee in &page.records {
        builder.push_record(row_cells(employee));
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

/// `Page {current} of {total}`, where an empty result still reads "of 1".
pub fn page_label(state: &ViewState, page: &VisiblePage<'_>) -> String {
    format!(
        "Page {} of {}",
        state.current_page,
        page.displayed_total_pages()
    )
}

/// One-line summary used when picking a record.
pub fn record_summary(employee: &Employee) -> String {
    let name = format!(
        "{} {}",
        employee.field(SortKey::FirstName),
        employee.field(SortKey::LastName)
    );
    let name = name.trim();
    let name = if name.is_empty() { "(no name)" } else { name };

    match employee.email.as_deref() {
        Some(email) if !email.is_empty() => format!("{name} <{email}>"),
        _ => name.to_owned(),
    }
}
