//! Per-leg cost breakdown for a precomputed route.
//!
//! The API returns the cheapest route as an ordered list of gate codes and a
//! single total. This module walks consecutive pairs of that route through
//! the locally known gate graph to show what each leg contributed, and
//! splits totals across a fleet when more than one vehicle flies.

use serde::Serialize;
use tracing::debug;

use crate::currency::format_currency;
use crate::error::{Error, Result};
use crate::gate::GateDirectory;

/// Nominal price of one hyperspace unit when no rate is supplied.
pub const DEFAULT_RATE_PER_HU: f64 = 1.0;

/// Inputs for [`reconstruct_route_costs`].
#[derive(Debug, Clone, Copy)]
pub struct RouteCostRequest<'a> {
    /// Ordered gate codes from origin to destination.
    pub route: &'a [String],
    /// Vehicles flying the route; must be at least 1.
    pub fleet_count: u32,
    /// Journey total as reported by the API.
    pub total_journey_cost: f64,
    /// Parking total as reported by the API.
    pub total_parking_fee: f64,
    /// Price per hyperspace unit; [`DEFAULT_RATE_PER_HU`] when `None`.
    pub rate_per_hu: Option<f64>,
}

impl<'a> RouteCostRequest<'a> {
    /// Single-vehicle request with no parking and the nominal rate.
    pub fn new(route: &'a [String], total_journey_cost: f64) -> Self {
        Self {
            route,
            fleet_count: 1,
            total_journey_cost,
            total_parking_fee: 0.0,
            rate_per_hu: None,
        }
    }

    pub fn with_fleet(mut self, fleet_count: u32) -> Self {
        self.fleet_count = fleet_count;
        self
    }

    pub fn with_parking(mut self, total_parking_fee: f64) -> Self {
        self.total_parking_fee = total_parking_fee;
        self
    }

    pub fn with_rate(mut self, rate_per_hu: f64) -> Self {
        self.rate_per_hu = Some(rate_per_hu);
        self
    }
}

/// One hop between consecutive gates of a route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteLeg {
    pub index: usize,
    pub from: String,
    pub to: String,
    /// Link distance in hyperspace units; `None` when the link was not found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    /// Cost of the leg for the whole fleet.
    pub cost: f64,
    /// Cost borne by each vehicle; only present for fleets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_vehicle: Option<f64>,
    /// `false` when the link data was missing and the cost fell back to zero.
    pub resolved: bool,
}

/// Fleet-adjusted totals for a route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RouteTotals {
    /// Sum of the reconstructed leg costs.
    pub legs: f64,
    pub journey: f64,
    pub parking: f64,
    /// Journey plus parking.
    pub grand: f64,
    /// Per-vehicle grand total; only present for fleets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_vehicle: Option<f64>,
}

/// Full breakdown of a route ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteCostBreakdown {
    pub route: Vec<String>,
    pub fleet_count: u32,
    pub rate_per_hu: f64,
    pub legs: Vec<RouteLeg>,
    pub totals: RouteTotals,
}

/// A rendered row of the breakdown. Amount cells are already formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CostRow {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub each: Option<String>,
    pub total: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Rebuild the per-leg costs of `request.route` from the gate graph.
///
/// Each leg costs `hu × rate`. A leg whose gate or link is missing, or
/// whose `hu` does not parse, costs `0` and is marked unresolved rather than
/// failing the whole breakdown. Amounts are kept unrounded.
///
/// # Errors
/// - [`Error::EmptyRoute`] when the route has no gates.
/// - [`Error::InvalidFleetSize`] when `fleet_count` is zero.
/// - [`Error::NonFiniteAmount`] when a supplied total or rate is not finite.
pub fn reconstruct_route_costs(
    request: &RouteCostRequest<'_>,
    directory: &GateDirectory,
) -> Result<RouteCostBreakdown> {
    if request.route.is_empty() {
        return Err(Error::EmptyRoute);
    }
    if request.fleet_count == 0 {
        return Err(Error::InvalidFleetSize { count: 0 });
    }

    let rate = request.rate_per_hu.unwrap_or(DEFAULT_RATE_PER_HU);
    for value in [rate, request.total_journey_cost, request.total_parking_fee] {
        if !value.is_finite() {
            return Err(Error::NonFiniteAmount { value });
        }
    }

    let is_fleet = request.fleet_count > 1;
    let divisor = f64::from(request.fleet_count);
    let split = |amount: f64| is_fleet.then(|| amount / divisor);

    let legs: Vec<RouteLeg> = request
        .route
        .windows(2)
        .enumerate()
        .map(|(index, pair)| {
            let (from, to) = (&pair[0], &pair[1]);
            let distance = directory.link_distance(from, to);
            if distance.is_none() {
                debug!(%from, %to, "no usable link for route leg; costing it at zero");
            }
            let cost = distance.map(|hu| hu * rate).unwrap_or(0.0);
            RouteLeg {
                index,
                from: from.clone(),
                to: to.clone(),
                distance,
                cost,
                per_vehicle: split(cost),
                resolved: distance.is_some(),
            }
        })
        .collect();

    let legs_total = legs.iter().map(|leg| leg.cost).sum();
    let grand = request.total_journey_cost + request.total_parking_fee;

    Ok(RouteCostBreakdown {
        route: request.route.to_vec(),
        fleet_count: request.fleet_count,
        rate_per_hu: rate,
        legs,
        totals: RouteTotals {
            legs: legs_total,
            journey: request.total_journey_cost,
            parking: request.total_parking_fee,
            grand,
            per_vehicle: split(grand),
        },
    })
}

impl RouteCostBreakdown {
    pub fn is_fleet(&self) -> bool {
        self.fleet_count > 1
    }

    /// Number of legs that fell back to a zero cost.
    pub fn unresolved_legs(&self) -> usize {
        self.legs.iter().filter(|leg| !leg.resolved).count()
    }

    /// `true` when the summed legs match the API journey total within `tolerance`.
    pub fn is_consistent(&self, tolerance: f64) -> bool {
        (self.totals.legs - self.totals.journey).abs() <= tolerance
    }

    /// Render every leg and the totals through the currency formatter.
    ///
    /// A per-vehicle column is only filled in for fleets.
    pub fn display_rows(&self) -> Result<Vec<CostRow>> {
        let mut rows = Vec::with_capacity(self.legs.len() + 2);

        for leg in &self.legs {
            rows.push(CostRow {
                label: format!("{} → {}", leg.from, leg.to),
                each: leg.per_vehicle.map(format_currency).transpose()?,
                total: format_currency(leg.cost)?,
                note: leg.distance.map(|hu| format!("{hu} AU")),
            });
        }

        if self.totals.parking != 0.0 {
            rows.push(CostRow {
                label: "Parking".to_string(),
                each: self
                    .is_fleet()
                    .then(|| format_currency(self.totals.parking / f64::from(self.fleet_count)))
                    .transpose()?,
                total: format_currency(self.totals.parking)?,
                note: None,
            });
        }

        rows.push(CostRow {
            label: "Total".to_string(),
            each: self.totals.per_vehicle.map(format_currency).transpose()?,
            total: format_currency(self.totals.grand)?,
            note: None,
        });

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::{Gate, GateLink};

    fn gate(code: &str, links: &[(&str, &str)]) -> Gate {
        Gate {
            uuid: String::new(),
            code: code.to_string(),
            name: code.to_string(),
            created_at: String::new(),
            updated_at: None,
            links: links
                .iter()
                .map(|(code, hu)| GateLink {
                    code: code.to_string(),
                    hu: hu.to_string(),
                })
                .collect(),
        }
    }

    fn abc() -> GateDirectory {
        GateDirectory::new(vec![
            gate("A", &[("B", "10")]),
            gate("B", &[("A", "10"), ("C", "5")]),
            gate("C", &[("B", "5")]),
        ])
    }

    fn route(codes: &[&str]) -> Vec<String> {
        codes.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn single_vehicle_legs_sum_to_total() {
        let route = route(&["A", "B", "C"]);
        let breakdown = reconstruct_route_costs(&RouteCostRequest::new(&route, 15.0), &abc())
            .expect("breakdown");

        assert_eq!(breakdown.legs.len(), 2);
        assert_eq!(breakdown.legs[0].cost, 10.0);
        assert_eq!(breakdown.legs[1].cost, 5.0);
        assert_eq!(breakdown.totals.legs, 15.0);
        assert!(breakdown.is_consistent(1e-9));
        assert!(breakdown.legs.iter().all(|leg| leg.per_vehicle.is_none()));
        assert_eq!(breakdown.totals.per_vehicle, None);
    }

    #[test]
    fn fleet_splits_each_leg() {
        let route = route(&["A", "B", "C"]);
        let request = RouteCostRequest::new(&route, 15.0).with_fleet(2);
        let breakdown = reconstruct_route_costs(&request, &abc()).expect("breakdown");

        assert_eq!(breakdown.legs[0].per_vehicle, Some(5.0));
        assert_eq!(breakdown.legs[1].per_vehicle, Some(2.5));
        assert_eq!(breakdown.totals.per_vehicle, Some(7.5));
    }

    #[test]
    fn missing_link_costs_zero() {
        let route = route(&["A", "C"]);
        let breakdown = reconstruct_route_costs(&RouteCostRequest::new(&route, 15.0), &abc())
            .expect("breakdown");

        assert_eq!(breakdown.legs[0].cost, 0.0);
        assert_eq!(breakdown.legs[0].distance, None);
        assert!(!breakdown.legs[0].resolved);
        assert_eq!(breakdown.unresolved_legs(), 1);
        assert!(!breakdown.is_consistent(1e-9));
    }

    #[test]
    fn unknown_gate_costs_zero() {
        let route = route(&["Z", "A"]);
        let breakdown = reconstruct_route_costs(&RouteCostRequest::new(&route, 0.0), &abc())
            .expect("breakdown");
        assert_eq!(breakdown.legs[0].cost, 0.0);
    }

    #[test]
    fn single_stop_has_no_legs() {
        let route = route(&["A"]);
        let breakdown = reconstruct_route_costs(&RouteCostRequest::new(&route, 0.0), &abc())
            .expect("breakdown");
        assert!(breakdown.legs.is_empty());
        assert_eq!(breakdown.totals.legs, 0.0);
    }

    #[test]
    fn rejects_empty_route_and_zero_fleet() {
        let empty: Vec<String> = Vec::new();
        assert!(matches!(
            reconstruct_route_costs(&RouteCostRequest::new(&empty, 0.0), &abc()),
            Err(Error::EmptyRoute)
        ));

        let route = route(&["A", "B"]);
        assert!(matches!(
            reconstruct_route_costs(&RouteCostRequest::new(&route, 10.0).with_fleet(0), &abc()),
            Err(Error::InvalidFleetSize { count: 0 })
        ));
    }

    #[test]
    fn rate_scales_leg_costs() {
        let route = route(&["A", "B", "C"]);
        let request = RouteCostRequest::new(&route, 30.0).with_rate(2.0);
        let breakdown = reconstruct_route_costs(&request, &abc()).expect("breakdown");
        assert_eq!(breakdown.totals.legs, 30.0);
        assert_eq!(breakdown.rate_per_hu, 2.0);
    }

    #[test]
    fn rows_only_show_each_column_for_fleets() {
        let route = route(&["A", "B", "C"]);
        let single = reconstruct_route_costs(&RouteCostRequest::new(&route, 15.0), &abc())
            .expect("breakdown")
            .display_rows()
            .expect("rows");
        assert_eq!(single.len(), 3);
        assert!(single.iter().all(|row| row.each.is_none()));
        assert_eq!(single[2].label, "Total");
        assert_eq!(single[2].total, "£15.00");

        let fleet = reconstruct_route_costs(
            &RouteCostRequest::new(&route, 15.0)
                .with_fleet(2)
                .with_parking(3.0),
            &abc(),
        )
        .expect("breakdown")
        .display_rows()
        .expect("rows");
        assert_eq!(fleet.len(), 4);
        assert_eq!(fleet[0].each.as_deref(), Some("£5.00"));
        assert_eq!(fleet[0].note.as_deref(), Some("10 AU"));
        assert_eq!(fleet[2].label, "Parking");
        assert_eq!(fleet[2].each.as_deref(), Some("£1.50"));
        assert_eq!(fleet[3].total, "£18.00");
        assert_eq!(fleet[3].each.as_deref(), Some("£9.00"));
    }
}
