//! Transport pricing and journey records returned by the stargate API.
//!
//! Amounts are in the base currency unit and, for [`TransportCost`], already
//! priced server-side for a single vehicle.

use serde::{Deserialize, Serialize};

use crate::gate::Gate;

/// A class of vehicle the API can recommend.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportOption {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_per_au: Option<f64>,
    /// Legacy name for `rate_per_au` still emitted by older deployments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_per_au: Option<f64>,
    /// Passenger seats per vehicle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_distance: Option<f64>,
}

impl TransportOption {
    /// Seats per vehicle, treating a missing or zero capacity as one seat.
    pub fn effective_capacity(&self) -> i64 {
        match self.capacity {
            Some(capacity) if capacity != 0 => capacity,
            _ => 1,
        }
    }

    /// Price per AU, preferring `ratePerAu` over the legacy `costPerAu`.
    pub fn effective_rate(&self) -> Option<f64> {
        self.rate_per_au.or(self.cost_per_au)
    }

    pub fn description_or_default(&self) -> &str {
        self.description
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or("Standard travel option.")
    }
}

/// Price of a journey for one vehicle of the recommended transport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportCost {
    pub currency: String,
    pub journey_cost: f64,
    pub parking_fee: f64,
    /// Optional server total; ignored in favour of [`TransportCost::total`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,
    pub recommended_transport: TransportOption,
}

impl TransportCost {
    /// Journey cost plus parking.
    pub fn total(&self) -> f64 {
        self.journey_cost + self.parking_fee
    }
}

/// Cheapest route between two gates as computed by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Journey {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<Gate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<Gate>,
    /// Ordered gate codes from origin to destination.
    pub route: Vec<String>,
    pub total_cost: f64,
}

impl Journey {
    /// Number of legs flown; zero for a single-stop route.
    pub fn hop_count(&self) -> usize {
        self.route.len().saturating_sub(1)
    }
}
