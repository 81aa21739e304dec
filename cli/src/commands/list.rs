//! One-shot employee table.

use anyhow::{Context as _, Result};
use serde::Serialize;
use tracing::{instrument, warn};
use workers_business::{ListViewEngine, PageStep, SortKey, ViewState, VisiblePage};

use crate::cli::SourceArgs;
use crate::context::load_engine;
use crate::output::Output;
use crate::table::{EMPTY_MESSAGE, page_label, render_table};

/// What `workers list` was asked to show.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub search: String,
    pub sort: Vec<SortKey>,
    pub page: u64,
    pub json: bool,
}

/// Applies the options the way a user would click through the table: type the
/// search, click the sort headers in order, then press "next" until the page
/// is reached or the button would be disabled.
///
/// Returns `false` when the requested page could not be reached.
pub fn apply_options(engine: &mut ListViewEngine, options: &ListOptions) -> bool {
    engine.set_search_text(options.search.as_str());
    for key in &options.sort {
        engine.set_sort(*key);
    }

    let mut page = 1;
    while page < options.page {
        if !engine.can_go_next() {
            return false;
        }
        engine.set_page(PageStep::Next);
        page += 1;
    }
    true
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PageJson<'a> {
    view: &'a ViewState,
    page_label: String,
    displayed_total_pages: usize,
    can_go_prev: bool,
    can_go_next: bool,
    #[serde(flatten)]
    page: &'a VisiblePage<'a>,
}

pub fn page_json(engine: &ListViewEngine) -> Result<String> {
    let page = engine.compute_visible_page();
    let json = PageJson {
        view: engine.state(),
        page_label: page_label(engine.state(), &page),
        displayed_total_pages: page.displayed_total_pages(),
        can_go_prev: engine.can_go_prev(),
        can_go_next: engine.can_go_next(),
        page: &page,
    };
    serde_json::to_string_pretty(&json).context("Failed to serialize page")
}

/// Table, empty-state message and pager line for the current page.
pub fn print_page(out: &Output, engine: &ListViewEngine) {
    let page = engine.compute_visible_page();
    out.print(render_table(engine.state(), &page));
    if page.is_empty() {
        out.dim(EMPTY_MESSAGE);
    }
    out.pager(page_label(engine.state(), &page), page.filtered_count);
}

#[instrument(skip_all, name = "list", fields(search = %options.search, page = options.page))]
pub async fn run_list(source: &SourceArgs, options: ListOptions) -> Result<()> {
    let out = Output::new();
    let mut engine = load_engine(source).await?;

    if !apply_options(&mut engine, &options) {
        warn!(
            "Page {} is past the last page; showing page {}",
            options.page,
            engine.state().current_page
        );
    }

    if options.json {
        out.print(page_json(&engine)?);
    } else {
        print_page(&out, &engine);
    }

    Ok(())
}
