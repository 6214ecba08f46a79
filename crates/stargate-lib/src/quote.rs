//! Transport quotes for a party of passengers.
//!
//! The API prices a journey for a single vehicle of the recommended
//! transport. A quote combines that price with the party size to show the
//! fleet needed and what the trip costs per vehicle and in total.

use serde::Serialize;

use crate::currency::format_currency;
use crate::error::{Error, Result};
use crate::fleet::FleetComposition;
use crate::route_cost::CostRow;
use crate::transport::TransportCost;

/// Parameters of a transport cost lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuoteRequest {
    /// Trip distance in AU.
    pub distance: f64,
    pub passengers: i64,
    pub parking_days: i64,
}

impl QuoteRequest {
    /// Validate the request before it is sent anywhere.
    pub fn validate(&self) -> Result<()> {
        if !self.distance.is_finite() || self.distance <= 0.0 {
            return Err(Error::InvalidQuoteRequest {
                message: format!("distance must be a positive number, got {}", self.distance),
            });
        }
        if self.passengers <= 0 {
            return Err(Error::InvalidQuoteRequest {
                message: format!("passengers must be at least 1, got {}", self.passengers),
            });
        }
        if self.parking_days < 0 {
            return Err(Error::InvalidQuoteRequest {
                message: format!(
                    "parking days must not be negative, got {}",
                    self.parking_days
                ),
            });
        }
        Ok(())
    }
}

/// Priced amount split across a fleet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FleetAmount {
    pub each: f64,
    pub total: f64,
}

impl FleetAmount {
    fn split(total: f64, fleet: &FleetComposition) -> Self {
        Self {
            each: fleet.per_vehicle(total),
            total,
        }
    }
}

/// Fleet-adjusted view of a [`TransportCost`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransportQuote {
    pub transport: String,
    pub description: String,
    pub fleet: FleetComposition,
    /// Rate per AU for one vehicle and for the whole fleet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<FleetAmount>,
    pub journey: FleetAmount,
    pub parking: FleetAmount,
    pub total: FleetAmount,
}

impl TransportQuote {
    /// Combine a single-vehicle price with the party size.
    ///
    /// Journey and parking amounts from the API are treated as fleet totals
    /// and divided down to per-vehicle figures; the per-AU rate is a
    /// per-vehicle figure and is multiplied up.
    pub fn build(cost: &TransportCost, passengers: i64) -> Result<Self> {
        let option = &cost.recommended_transport;
        let fleet = FleetComposition::for_passengers(passengers, option.effective_capacity())?;

        for value in [cost.journey_cost, cost.parking_fee] {
            if !value.is_finite() {
                return Err(Error::NonFiniteAmount { value });
            }
        }

        let rate = option.effective_rate().map(|each| FleetAmount {
            each,
            total: each * f64::from(fleet.vehicle_count),
        });

        Ok(Self {
            transport: option.name.clone(),
            description: option.description_or_default().to_string(),
            fleet,
            rate,
            journey: FleetAmount::split(cost.journey_cost, &fleet),
            parking: FleetAmount::split(cost.parking_fee, &fleet),
            total: FleetAmount::split(cost.total(), &fleet),
        })
    }

    /// Render the quote lines. The `each` column is only filled for fleets.
    pub fn display_rows(&self, distance: f64) -> Result<Vec<CostRow>> {
        let is_fleet = self.fleet.is_fleet;
        let row = |label: String, amount: &FleetAmount, suffix: &str| -> Result<CostRow> {
            Ok(CostRow {
                label,
                each: is_fleet
                    .then(|| format_currency(amount.each).map(|s| format!("{s}{suffix}")))
                    .transpose()?,
                total: format!("{}{suffix}", format_currency(amount.total)?),
                note: None,
            })
        };

        let mut rows = Vec::with_capacity(4);
        if let Some(rate) = &self.rate {
            rows.push(row("Rate".to_string(), rate, " / AU")?);
        }
        rows.push(row(
            format!("Journey Cost ({distance} AU)"),
            &self.journey,
            "",
        )?);
        rows.push(row("Parking Cost".to_string(), &self.parking, "")?);
        rows.push(row("Total".to_string(), &self.total, "")?);
        Ok(rows)
    }
}
