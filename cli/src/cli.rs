use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use workers_business::SortKey;

#[derive(Parser)]
#[command(name = "workers")]
#[command(about = "Browse the employee directory", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub source: SourceArgs,

    /// Show timing/latency information
    #[arg(long, global = true)]
    pub timing: bool,

    /// Enable verbose debug output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Where the employee list is loaded from.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// API base URL (the list is read from `<URL>/employees`)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Read employees from a local JSON file instead of the API
    #[arg(long, short = 'f', global = true, value_name = "PATH", conflicts_with = "api_url")]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print one page of the employee table
    List {
        /// Keep employees whose first name contains this text (case-insensitive)
        #[arg(long, short = 's', default_value = "")]
        search: String,

        /// Sort column: firstName, lastName, email, city, country.
        /// Repeat a column to flip it to descending.
        #[arg(long = "sort", short = 'o', value_name = "KEY")]
        sort: Vec<SortKey>,

        /// Page to show (1-based)
        #[arg(long, short = 'p', default_value = "1", value_parser = clap::value_parser!(u64).range(1..))]
        page: u64,

        /// Print the page as JSON
        #[arg(long)]
        json: bool,
    },
    /// Browse the employee table interactively
    Browse,
    /// Show or change saved settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective settings
    Show,
    /// Save the API base URL
    SetUrl {
        /// Base URL, e.g. https://hr.example.com/api
        url: String,
    },
    /// Remove saved settings
    Clear,
}
