//! Handlers for the pure calculators: fleet sizing and currency display.

use anyhow::{Context, Result};
use serde::Serialize;

use stargate_lib::{calculate_fleet_size, format_currency};

use crate::commands::CommandContext;
use stargate_cli::output::{render_json, OutputFormat};

#[derive(Debug, Serialize)]
struct FleetReport {
    passengers: i64,
    capacity: i64,
    vehicles: u32,
}

#[derive(Debug, Serialize)]
struct FormatReport {
    value: f64,
    formatted: String,
}

/// Handle `fleet --passengers N --capacity C`.
pub fn handle_fleet(context: &CommandContext, passengers: i64, capacity: i64) -> Result<()> {
    let vehicles = calculate_fleet_size(passengers, capacity);
    match context.format {
        OutputFormat::Json => render_json(&FleetReport {
            passengers,
            capacity,
            vehicles,
        })?,
        OutputFormat::Text => {
            let palette = &context.palette;
            println!(
                "{}{}{} vehicle(s) for {} passenger(s) at capacity {}",
                palette.orange, vehicles, palette.reset, passengers, capacity
            );
        }
    }
    Ok(())
}

/// Handle `format <VALUE>`.
pub fn handle_format(context: &CommandContext, value: f64) -> Result<()> {
    let formatted =
        format_currency(value).with_context(|| format!("cannot format amount {value}"))?;
    match context.format {
        OutputFormat::Json => render_json(&FormatReport { value, formatted })?,
        OutputFormat::Text => println!("{formatted}"),
    }
    Ok(())
}
