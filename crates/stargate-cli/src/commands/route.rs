//! Route command handler: cheapest route plus per-leg cost breakdown.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::warn;

use stargate_lib::{
    reconstruct_route_costs, validate_route_request, CostRow, GateDirectory, RouteCostBreakdown,
    RouteCostRequest,
};

use crate::commands::CommandContext;
use stargate_cli::output::{render_json, render_route, OutputFormat};

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Origin gate code.
    pub from: String,
    /// Destination gate code.
    pub to: String,
    /// Vehicles sharing the journey.
    pub fleet: u32,
    /// Parking fee added to the total.
    pub parking_fee: f64,
    /// Cost per AU for each leg; `None` keeps the 1:1 default.
    pub rate: Option<f64>,
}

#[derive(Debug, Serialize)]
struct RouteReport<'a> {
    #[serde(flatten)]
    breakdown: &'a RouteCostBreakdown,
    rows: Vec<CostRow>,
}

/// Handle `route --from A --to B`.
pub fn handle_route(context: &CommandContext, args: &RouteCommandArgs) -> Result<()> {
    validate_route_request(&args.from, &args.to)?;
    let source = context.source.open()?;
    let journey = source
        .cheapest_route(&args.from, &args.to)
        .with_context(|| format!("failed to fetch route from {} to {}", args.from, args.to))?;
    let directory = GateDirectory::new(source.gates().context("failed to load gates")?);

    let mut request = RouteCostRequest::new(&journey.route, journey.total_cost)
        .with_fleet(args.fleet)
        .with_parking(args.parking_fee);
    if let Some(rate) = args.rate {
        request = request.with_rate(rate);
    }
    let breakdown =
        reconstruct_route_costs(&request, &directory).context("failed to cost route legs")?;
    if !breakdown.is_consistent(0.01) {
        warn!(
            legs = breakdown.totals.legs,
            journey = breakdown.totals.journey,
            "summed leg costs differ from the journey total"
        );
    }

    match context.format {
        OutputFormat::Json => render_json(&RouteReport {
            rows: breakdown.display_rows()?,
            breakdown: &breakdown,
        })?,
        OutputFormat::Text => print!("{}", render_route(&breakdown, &context.palette)?),
    }
    Ok(())
}
