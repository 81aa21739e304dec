//! `workers`: a terminal viewer for the employee directory.

mod cli;
mod commands;
mod config;
mod context;
mod output;
mod table;
mod timing;
mod utils;

use anyhow::Result;
use clap::Parser as _;

use crate::cli::{Cli, Commands};
use crate::commands::{ListOptions, generate_completions, run_browse, run_config, run_list};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    timing::init_tracing(cli.verbose, cli.timing);

    match cli.command {
        Some(Commands::List {
            search,
            sort,
            page,
            json,
        }) => {
            run_list(
                &cli.source,
                ListOptions {
                    search,
                    sort,
                    page,
                    json,
                },
            )
            .await
        }
        Some(Commands::Browse) => run_browse(&cli.source).await,
        Some(Commands::Config { action }) => run_config(&cli.source, action),
        Some(Commands::Completions { shell }) => generate_completions(shell),
        None => {
            run_list(
                &cli.source,
                ListOptions {
                    page: 1,
                    ..ListOptions::default()
                },
            )
            .await
        }
    }
}
