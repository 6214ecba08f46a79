//! Stargate journey cost library entry points.
//!
//! This crate holds the pure cost logic behind the stargate journey planner:
//! fleet sizing, currency display, per-leg route cost reconstruction and
//! transport quotes, together with the API records they consume and the
//! sources that supply those records. Higher-level consumers (the CLI)
//! should only depend on the functions exported here instead of
//! reimplementing behavior.
//!

#![deny(warnings)]

pub mod api;
pub mod config;
pub mod currency;
pub mod error;
pub mod fleet;
pub mod gate;
pub mod preferences;
pub mod quote;
pub mod route_cost;
pub mod transport;

pub use api::{validate_route_request, ApiClient, FixtureSource, GateSource};
pub use config::ApiConfig;
pub use currency::{
    format_currency, format_currency_with_symbol, parse_currency, round_currency, CURRENCY_SYMBOL,
};
pub use error::{Error, Result};
pub use fleet::{calculate_fleet_size, FleetComposition};
pub use gate::{Gate, GateConnection, GateDetails, GateDirectory, GateLink};
pub use preferences::{reduce, ColorMode, PreferenceAction, UserPreferences};
pub use quote::{FleetAmount, QuoteRequest, TransportQuote};
pub use route_cost::{
    reconstruct_route_costs, CostRow, RouteCostBreakdown, RouteCostRequest, RouteLeg, RouteTotals,
};
pub use transport::{Journey, TransportCost, TransportOption};
