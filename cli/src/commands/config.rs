//! `workers config` subcommands.

use anyhow::{Result, bail};
use tracing::{info, instrument};
use workers_business::BusinessConfig;

use crate::cli::{ConfigAction, SourceArgs};
use crate::config::Config;
use crate::context::resolve_business_config;
use crate::output::Output;

#[instrument(skip_all, name = "config")]
pub fn run_config(source: &SourceArgs, action: ConfigAction) -> Result<()> {
    let out = Output::new();

    match action {
        ConfigAction::Show => show(&out, source),
        ConfigAction::SetUrl { url } => set_url(&out, &url),
        ConfigAction::Clear => clear(&out),
    }
}

fn show(out: &Output, source: &SourceArgs) -> Result<()> {
    let path = Config::config_path()?;
    let config = Config::load_from(&path)?;

    out.header("Settings");
    out.divider(40);
    out.labeled_indent("Config file", path.display(), 0);
    out.labeled_indent(
        "Saved API URL",
        config.api_base_url().unwrap_or("(not set)"),
        0,
    );

    if let Some(file) = &source.file {
        out.labeled_indent("Source", format!("file {}", file.display()), 0);
        return Ok(());
    }

    let env = BusinessConfig::env_override(std::env::vars());
    let (effective, origin) = resolve_business_config(source.api_url.as_deref(), env, &config);
    out.labeled_indent(
        "Effective API URL",
        format!("{} ({origin})", effective.api_base_url),
        0,
    );
    out.labeled_indent("Employees endpoint", effective.employees_url(), 0);
    Ok(())
}

fn set_url(out: &Output, url: &str) -> Result<()> {
    if url.trim().is_empty() {
        bail!("API URL must not be empty");
    }

    let mut config = Config::load()?;
    config.set_api_base_url(url);
    let path = config.save()?;

    info!(path = %path.display(), "Saved API base URL");
    out.success(format!("Saved API URL to {}", path.display()));
    Ok(())
}

fn clear(out: &Output) -> Result<()> {
    let path = Config::config_path()?;
    if !path.exists() {
        out.warning("No saved settings");
        return Ok(());
    }

    let mut config = Config::load_from(&path)?;
    config.clear();
    config.save_to(&path)?;
    out.success("Cleared saved settings");
    Ok(())
}
