//! Runtime configuration for the business layer.
//!
//! Only the API base URL is configurable. `WORKERS_API_BASE_URL` overrides the
//! built-in default; the CLI layers its own flag and config file on top.

use serde::Deserialize;

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

/// Prefix of the environment variables read by [`BusinessConfig::from_env`].
const ENV_PREFIX: &str = "WORKERS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    pub api_base_url: String,
}

/// Raw environment overrides, `WORKERS_` prefix stripped.
#[derive(Debug, Default, Deserialize)]
struct RawEnv {
    api_base_url: Option<String>,
}

impl BusinessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
        }
    }

    /// Default config with `WORKERS_API_BASE_URL` applied when it is set.
    pub fn from_env() -> Self {
        Self::from_vars(std::env::vars())
    }

    /// Same as [`BusinessConfig::from_env`] over an explicit variable list.
    pub fn from_vars<I, S>(vars: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        Self::env_override(vars).map(Self::new).unwrap_or_default()
    }

    /// The `WORKERS_API_BASE_URL` value, when set and not blank.
    pub fn env_override<I, S>(vars: I) -> Option<String>
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let raw: RawEnv = match serde_env::from_iter_with_prefix(vars, ENV_PREFIX) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("Ignoring malformed {ENV_PREFIX}_* environment: {e}");
                RawEnv::default()
            }
        };

        let url = raw.api_base_url.filter(|url| !url.trim().is_empty())?;
        log::debug!("Using {ENV_PREFIX}_API_BASE_URL: {url}");
        Some(url)
    }

    /// Endpoint returning the employee list.
    pub fn employees_url(&self) -> String {
        format!("{}/employees", self.api_base_url.trim_end_matches('/'))
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}
