//! Connection settings for the stargate API.

use std::env;
use std::time::Duration;

use crate::error::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://hstc-api.testing.keyholding.com/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const BASE_URL_ENV: &str = "STARGATE_API_BASE_URL";
pub const API_KEY_ENV: &str = "STARGATE_API_KEY";
pub const TIMEOUT_ENV: &str = "STARGATE_API_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ApiConfig {
    /// Read settings from the environment, falling back to defaults.
    ///
    /// An unparsable timeout is ignored rather than treated as fatal.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ApiConfig::from_env`] with a caller-supplied lookup, so tests
    /// do not need to touch process-wide environment variables.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        Self {
            base_url: non_empty(BASE_URL_ENV).unwrap_or(defaults.base_url),
            api_key: non_empty(API_KEY_ENV),
            timeout: non_empty(TIMEOUT_ENV)
                .and_then(|raw| raw.trim().parse::<u64>().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// The configured API key, or [`Error::MissingApiKey`].
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or(Error::MissingApiKey)
    }

    /// Join `path` onto the base URL with exactly one separating slash.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
