//! Interactive table browser.

use std::fmt;
use std::io::IsTerminal as _;

use anyhow::{Context as _, Result, bail};
use inquire::{InquireError, Select, Text};
use tracing::{debug, instrument};
use workers_business::{Employee, ListViewEngine, PageStep, SortKey};

use crate::cli::SourceArgs;
use crate::commands::list::print_page;
use crate::context::load_engine;
use crate::output::Output;
use crate::table::record_summary;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseAction {
    Next,
    Prev,
    Search,
    Sort,
    View,
    Quit,
}

impl fmt::Display for BrowseAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Next => "Next page",
            Self::Prev => "Previous page",
            Self::Search => "Search by first name",
            Self::Sort => "Sort by column",
            Self::View => "View employee",
            Self::Quit => "Quit",
        })
    }
}

/// Actions offered for the current view; disabled ones are left out.
pub fn available_actions(engine: &ListViewEngine) -> Vec<BrowseAction> {
    let mut actions = Vec::with_capacity(6);
    if engine.can_go_next() {
        actions.push(BrowseAction::Next);
    }
    if engine.can_go_prev() {
        actions.push(BrowseAction::Prev);
    }
    actions.push(BrowseAction::Search);
    actions.push(BrowseAction::Sort);
    if !engine.compute_visible_page().is_empty() {
        actions.push(BrowseAction::View);
    }
    actions.push(BrowseAction::Quit);
    actions
}

/// A sort column as offered in the picker, e.g. `City ▼` for the active one.
struct SortChoice {
    key: SortKey,
    label: String,
}

impl fmt::Display for SortChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

fn sort_choices(engine: &ListViewEngine) -> Vec<SortChoice> {
    SortKey::ALL
        .iter()
        .map(|key| SortChoice {
            key: *key,
            label: match engine.state().sort_indicator(*key) {
                Some(arrow) => format!("{} {arrow}", key.label()),
                None => key.label().to_owned(),
            },
        })
        .collect()
}

struct RecordChoice<'a> {
    employee: &'a Employee,
}

impl fmt::Display for RecordChoice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&record_summary(self.employee))
    }
}

#[instrument(skip_all, name = "browse")]
pub async fn run_browse(source: &SourceArgs) -> Result<()> {
    if !std::io::stdin().is_terminal() {
        bail!("`workers browse` needs an interactive terminal; use `workers list` instead");
    }

    let out = Output::new();
    let mut engine = load_engine(source).await?;

    loop {
        out.clear();
        if !engine.state().search_text.is_empty() {
            out.labeled_indent("Search", &engine.state().search_text, 0);
        }
        print_page(&out, &engine);
        out.newline();

        let action = match Select::new("Action:", available_actions(&engine)).prompt() {
            Ok(action) => action,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e).context("Failed to read action"),
        };
        debug!(%action, "Browse action");

        match action {
            BrowseAction::Next => engine.set_page(PageStep::Next),
            BrowseAction::Prev => engine.set_page(PageStep::Prev),
            BrowseAction::Search => {
                let text = Text::new("First name contains:")
                    .with_initial_value(&engine.state().search_text)
                    .with_help_message("Leave empty to show everyone")
                    .prompt_skippable()
                    .context("Failed to read search text")?;
                if let Some(text) = text {
                    engine.set_search_text(text);
                }
            }
            BrowseAction::Sort => {
                let choice = Select::new("Sort by:", sort_choices(&engine))
                    .with_help_message("Picking the active column flips its direction")
                    .prompt_skippable()
                    .context("Failed to read sort column")?;
                if let Some(choice) = choice {
                    engine.set_sort(choice.key);
                }
            }
            BrowseAction::View => view_record(&out, &engine)?,
            BrowseAction::Quit => break,
        }
    }

    Ok(())
}

fn view_record(out: &Output, engine: &ListViewEngine) -> Result<()> {
    let page = engine.compute_visible_page();
    let choices: Vec<RecordChoice<'_>> = page
        .records
        .iter()
        .map(|employee| RecordChoice { employee })
        .collect();

    let Some(choice) = Select::new("Employee:", choices)
        .prompt_skippable()
        .context("Failed to read employee")?
    else {
        return Ok(());
    };

    out.newline();
    out.header(record_summary(choice.employee));
    out.divider(40);
    for key in SortKey::ALL {
        out.labeled_indent(key.label(), choice.employee.field(key), 2);
    }
    out.newline();

    Text::new("Press enter to go back")
        .prompt_skippable()
        .context("Failed to read input")?;
    Ok(())
}
