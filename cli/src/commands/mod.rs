//! Command implementations for the `workers` CLI.

pub mod browse;
pub mod completions;
pub mod config;
pub mod list;

pub use browse::run_browse;
pub use completions::generate_completions;
pub use config::run_config;
pub use list::{ListOptions, run_list};
