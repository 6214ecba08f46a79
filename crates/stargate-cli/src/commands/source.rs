//! Selection of the data source backing a command.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use tracing::debug;

use stargate_lib::{ApiClient, ApiConfig, FixtureSource, GateSource};

/// Environment variable naming a fixture directory.
pub const FIXTURES_ENV: &str = "STARGATE_FIXTURES";

/// Where gate, transport and route data comes from.
#[derive(Debug, Clone, Default)]
pub struct SourceOptions {
    pub fixtures: Option<PathBuf>,
    pub api_url: Option<String>,
    pub api_key: Option<String>,
}

impl SourceOptions {
    /// Open the configured source.
    ///
    /// A fixture directory (flag first, then `STARGATE_FIXTURES`) wins over the
    /// remote API. Otherwise the API client is configured from the environment
    /// with any flag overrides applied.
    pub fn open(&self) -> Result<Box<dyn GateSource>> {
        if let Some(dir) = self.fixture_dir() {
            if !dir.is_dir() {
                bail!("fixture directory {} does not exist", dir.display());
            }
            debug!(path = %dir.display(), "using fixture source");
            return Ok(Box::new(FixtureSource::new(dir)));
        }

        let mut config = ApiConfig::from_env();
        if let Some(url) = &self.api_url {
            config = config.with_base_url(url.clone());
        }
        if let Some(key) = &self.api_key {
            config = config.with_api_key(key.clone());
        }
        debug!(base_url = %config.base_url, "using remote API");
        let client = ApiClient::new(config).context("failed to configure the stargate API client")?;
        Ok(Box::new(client))
    }

    fn fixture_dir(&self) -> Option<PathBuf> {
        self.fixtures.clone().or_else(|| {
            std::env::var_os(FIXTURES_ENV)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from)
        })
    }
}
