//! Styled stdout lines for the `workers` commands.
//!
//! Colors are dropped automatically by `console` when stdout is not a terminal,
//! so the same calls produce plain text in pipes and tests.

use std::fmt::Display;

use console::{Term, style};

pub struct Output {
    term: Term,
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Output {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }

    // Write errors, e.g. a closed pipe, are ignored.
    fn line(&self, text: impl AsRef<str>) {
        drop(self.term.write_line(text.as_ref()));
    }

    /// `✓ message` in green.
    pub fn success(&self, message: impl Display) {
        self.line(format!("{} {message}", style("✓").green().bold()));
    }

    /// `⚠ message` in yellow.
    pub fn warning(&self, message: impl Display) {
        self.line(format!("{} {message}", style("⚠").yellow().bold()));
    }

    pub fn print(&self, message: impl Display) {
        self.line(message.to_string());
    }

    pub fn newline(&self) {
        self.line("");
    }

    pub fn header(&self, message: impl Display) {
        self.line(style(message).bold().cyan().to_string());
    }

    pub fn divider(&self, width: usize) {
        self.line(style("─".repeat(width)).dim().to_string());
    }

    /// `label: value`, indented by `indent` spaces with a dimmed label.
    pub fn labeled_indent(&self, label: impl Display, value: impl Display, indent: usize) {
        self.line(format!(
            "{:indent$}{}: {value}",
            "",
            style(label).dim(),
        ));
    }

    pub fn dim(&self, message: impl Display) {
        self.line(style(message).dim().to_string());
    }

    /// Footer under the table, e.g. `Page 2 of 3  (23 employees)`.
    pub fn pager(&self, label: impl Display, filtered_count: usize) {
        let noun = if filtered_count == 1 {
            "employee"
        } else {
            "employees"
        };
        self.line(format!(
            "{}  {}",
            style(label).bold(),
            style(format!("({filtered_count} {noun})")).cyan()
        ));
    }

    /// Clears the screen; a no-op when stdout is redirected.
    pub fn clear(&self) {
        if self.term.is_term() {
            drop(self.term.clear_screen());
        }
    }
}
