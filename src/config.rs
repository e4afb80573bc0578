//! NeoWs client configuration, read from the environment.
//!
//! Every variable is optional; unset ones fall back to the public NASA
//! endpoint and the shared `DEMO_KEY`, which is heavily rate limited.

use std::time::Duration;
use thiserror::Error;
use url::Url;

use crate::fetch::auth::InvalidApiKeyHeader;

pub const DEFAULT_BASE_URL: &str = "https://api.nasa.gov/neo/rest/v1/feed";
pub const DEFAULT_API_KEY: &str = "DEMO_KEY";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid NASA_API_URL '{value}': {source}")]
    InvalidUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid {var} '{value}': expected a positive whole number of seconds")]
    InvalidTimeout { var: &'static str, value: String },

    #[error("invalid API key header: {0}")]
    InvalidHeader(#[from] InvalidApiKeyHeader),

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Where the API key travels on each request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedAuth {
    /// Appended as a URL query parameter with the given name.
    UrlParam { param_name: String },
    /// Sent as an HTTP header with the given name.
    Header { header_name: String },
}

/// Connection settings for the NeoWs feed endpoint.
///
/// The `Debug` impl masks `api_key` so the config can be logged.
#[derive(Clone)]
pub struct NeoWsConfig {
    pub base_url: Url,
    pub api_key: String,
    pub auth: FeedAuth,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl std::fmt::Debug for NeoWsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NeoWsConfig")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"[REDACTED]")
            .field("auth", &self.auth)
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

impl NeoWsConfig {
    /// Reads `NASA_API_URL`, `NASA_API_KEY`, `NASA_API_KEY_HEADER`,
    /// `NASA_API_TIMEOUT_SECS` and `NASA_API_CONNECT_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`from_env`](Self::from_env) with variables resolved by `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let raw_url = get("NASA_API_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = Url::parse(&raw_url).map_err(|source| ConfigError::InvalidUrl {
            value: raw_url.clone(),
            source,
        })?;

        let api_key = get("NASA_API_KEY").unwrap_or_else(|| DEFAULT_API_KEY.to_string());

        let auth = match get("NASA_API_KEY_HEADER") {
            Some(header_name) => FeedAuth::Header { header_name },
            None => FeedAuth::UrlParam {
                param_name: "api_key".to_string(),
            },
        };

        let timeout = seconds(
            "NASA_API_TIMEOUT_SECS",
            get("NASA_API_TIMEOUT_SECS"),
            DEFAULT_TIMEOUT_SECS,
        )?;
        let connect_timeout = seconds(
            "NASA_API_CONNECT_TIMEOUT_SECS",
            get("NASA_API_CONNECT_TIMEOUT_SECS"),
            DEFAULT_CONNECT_TIMEOUT_SECS,
        )?;

        Ok(Self {
            base_url,
            api_key,
            auth,
            timeout,
            connect_timeout,
        })
    }
}

fn seconds(var: &'static str, value: Option<String>, default: u64) -> Result<Duration, ConfigError> {
    let Some(value) = value else {
        return Ok(Duration::from_secs(default));
    };
    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout { var, value }),
    }
}
