//! Sources of gate, transport and route data.
//!
//! [`ApiClient`] talks to the remote REST API. [`FixtureSource`] answers the
//! same questions from JSON files on disk, which keeps the CLI usable offline
//! and lets tests run without a network.

use std::fs;
use std::path::{Path, PathBuf};

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::gate::{Gate, GateDetails};
use crate::quote::QuoteRequest;
use crate::transport::{Journey, TransportCost};

const API_KEY_HEADER: &str = "x-api-key";

pub const FIXTURE_GATES: &str = "gates.json";
pub const FIXTURE_TRANSPORT: &str = "transport.json";
pub const FIXTURE_ROUTE: &str = "route.json";

/// Anything that can answer gate, transport and route queries.
pub trait GateSource {
    /// Every gate with its links.
    fn gates(&self) -> Result<Vec<Gate>>;

    /// A single gate by code.
    fn gate(&self, code: &str) -> Result<GateDetails>;

    /// Single-vehicle price of a journey.
    fn transport_cost(&self, request: &QuoteRequest) -> Result<TransportCost>;

    /// Cheapest route between two gates, computed by the source.
    fn cheapest_route(&self, from: &str, to: &str) -> Result<Journey>;
}

/// Reject route lookups the API would not be asked for.
pub fn validate_route_request(from: &str, to: &str) -> Result<()> {
    if from.trim().is_empty() || to.trim().is_empty() {
        return Err(Error::InvalidRouteRequest {
            message: "both origin and destination gate codes are required".to_string(),
        });
    }
    if from == to {
        return Err(Error::InvalidRouteRequest {
            message: format!("origin and destination are both {from}"),
        });
    }
    Ok(())
}

/// Blocking client for the stargate REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    config: ApiConfig,
    api_key: String,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let api_key = config.require_api_key()?.to_string();
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(user_agent())
            .build()
            .map_err(Error::Http)?;

        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.config.endpoint(path);
        debug!(%url, "requesting");

        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::ApiStatus {
                url,
                status: status.as_u16(),
            });
        }

        Ok(response.json::<T>()?)
    }
}

impl GateSource for ApiClient {
    fn gates(&self) -> Result<Vec<Gate>> {
        let gates: Vec<Gate> = self.get_json("/gates")?;
        info!(count = gates.len(), "fetched gates");
        Ok(gates)
    }

    fn gate(&self, code: &str) -> Result<GateDetails> {
        match self.get_json(&format!("/gates/{code}")) {
            Err(Error::ApiStatus { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => {
                Err(Error::UnknownGate {
                    code: code.to_string(),
                    suggestions: Vec::new(),
                })
            }
            other => other,
        }
    }

    fn transport_cost(&self, request: &QuoteRequest) -> Result<TransportCost> {
        request.validate()?;
        self.get_json(&format!(
            "/transport/{}?passengers={}&parking={}",
            request.distance, request.passengers, request.parking_days
        ))
    }

    fn cheapest_route(&self, from: &str, to: &str) -> Result<Journey> {
        validate_route_request(from, to)?;
        let journey: Journey = self.get_json(&format!("/gates/{from}/to/{to}"))?;
        info!(%from, %to, hops = journey.hop_count(), "fetched cheapest route");
        Ok(journey)
    }
}

/// Directory of canned API responses.
///
/// Expects `gates.json`, `transport.json` and `route.json`; each file holds
/// the body the matching endpoint would return. Only the files a command
/// actually needs have to exist.
#[derive(Debug, Clone)]
pub struct FixtureSource {
    root: PathBuf,
}

impl FixtureSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn load<T: DeserializeOwned>(&self, file: &str) -> Result<T> {
        let path = self.root.join(file);
        if !path.exists() {
            return Err(Error::FixtureMissing { path });
        }
        debug!(path = %path.display(), "loading fixture");
        let raw = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

impl GateSource for FixtureSource {
    fn gates(&self) -> Result<Vec<Gate>> {
        self.load(FIXTURE_GATES)
    }

    fn gate(&self, code: &str) -> Result<GateDetails> {
        let directory = crate::gate::GateDirectory::new(self.gates()?);
        directory.require(code).cloned()
    }

    fn transport_cost(&self, request: &QuoteRequest) -> Result<TransportCost> {
        request.validate()?;
        self.load(FIXTURE_TRANSPORT)
    }

    /// The canned route only answers the pair it was recorded for.
    fn cheapest_route(&self, from: &str, to: &str) -> Result<Journey> {
        validate_route_request(from, to)?;
        let journey: Journey = self.load(FIXTURE_ROUTE)?;
        let first = journey.route.first().map(String::as_str);
        let last = journey.route.last().map(String::as_str);
        if first != Some(from) || last != Some(to) {
            return Err(Error::InvalidRouteRequest {
                message: format!("no fixture route from {from} to {to}"),
            });
        }
        Ok(journey)
    }
}

fn user_agent() -> String {
    format!("stargate-lib/{version}", version = env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_requests_need_distinct_codes() {
        assert!(validate_route_request("SOL", "PRX").is_ok());
        assert!(matches!(
            validate_route_request("SOL", "SOL"),
            Err(Error::InvalidRouteRequest { .. })
        ));
        assert!(matches!(
            validate_route_request("", "SOL"),
            Err(Error::InvalidRouteRequest { .. })
        ));
    }

    #[test]
    fn client_requires_api_key() {
        let err = ApiClient::new(ApiConfig::default()).unwrap_err();
        assert!(matches!(err, Error::MissingApiKey));
    }

    #[test]
    fn fixture_route_must_match_requested_endpoints() {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::write(
            dir.path().join(FIXTURE_ROUTE),
            r#"{"route": ["SOL", "PRX"], "totalCost": 90}"#,
        )
        .expect("write route fixture");
        let source = FixtureSource::new(dir.path());

        assert_eq!(source.cheapest_route("SOL", "PRX").expect("route").hop_count(), 1);
        assert!(matches!(
            source.cheapest_route("PRX", "SOL"),
            Err(Error::InvalidRouteRequest { .. })
        ));
    }

    #[test]
    fn missing_fixture_is_reported() {
        let dir = tempfile::tempdir().expect("temp dir");
        let source = FixtureSource::new(dir.path());
        match source.gates() {
            Err(Error::FixtureMissing { path }) => assert!(path.ends_with(FIXTURE_GATES)),
            other => panic!("expected missing fixture, got {other:?}"),
        }
    }
}
