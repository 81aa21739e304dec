//! Record source selection and the one-time load into the list view engine.

use std::fmt;

use anyhow::Result;
use tracing::{debug, instrument};
use workers_business::{
    BusinessConfig, FileRecordSource, HttpRecordSource, ListViewEngine, RecordSource,
    load_records,
};

use crate::cli::SourceArgs;
use crate::config::Config;

/// Where the effective API base URL came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlOrigin {
    Flag,
    Environment,
    ConfigFile,
    Default,
}

impl fmt::Display for UrlOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Flag => "--api-url",
            Self::Environment => "WORKERS_API_BASE_URL",
            Self::ConfigFile => "config file",
            Self::Default => "default",
        })
    }
}

/// Picks the API base URL: flag, then environment, then config file, then default.
pub fn resolve_business_config(
    flag: Option<&str>,
    env: Option<String>,
    config: &Config,
) -> (BusinessConfig, UrlOrigin) {
    if let Some(url) = flag {
        return (BusinessConfig::new(url), UrlOrigin::Flag);
    }
    if let Some(url) = env {
        return (BusinessConfig::new(url), UrlOrigin::Environment);
    }
    if let Some(url) = config.api_base_url() {
        return (BusinessConfig::new(url), UrlOrigin::ConfigFile);
    }
    (BusinessConfig::default(), UrlOrigin::Default)
}

/// Builds the record source for the given arguments.
pub fn build_record_source(
    args: &SourceArgs,
    env: Option<String>,
    config: &Config,
) -> Box<dyn RecordSource> {
    if let Some(path) = &args.file {
        return Box::new(FileRecordSource::new(path.clone()));
    }

    let (business_config, origin) =
        resolve_business_config(args.api_url.as_deref(), env, config);
    debug!(base_url = %business_config.api_base_url, %origin, "Resolved API base URL");
    Box::new(HttpRecordSource::new(&business_config))
}

/// Loads the employee list once and hands it to a fresh engine.
///
/// A failed load is not an error here; the engine simply starts empty.
#[instrument(skip_all, name = "load_engine")]
pub async fn load_engine(args: &SourceArgs) -> Result<ListViewEngine> {
    let config = Config::load()?;
    let env = BusinessConfig::env_override(std::env::vars());
    let source = build_record_source(args, env, &config);

    let records = load_records(source.as_ref()).await;
    Ok(ListViewEngine::with_records(records))
}
