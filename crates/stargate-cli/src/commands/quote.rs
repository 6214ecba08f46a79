//! Transport quote handler.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use stargate_lib::{CostRow, QuoteRequest, TransportQuote};

use crate::commands::CommandContext;
use stargate_cli::output::{render_json, render_quote, OutputFormat};

#[derive(Debug, Serialize)]
struct QuoteReport<'a> {
    request: &'a QuoteRequest,
    currency: &'a str,
    quote: &'a TransportQuote,
    rows: Vec<CostRow>,
}

/// Handle `quote --distance D --passengers N --parking P`.
pub fn handle_quote(context: &CommandContext, request: &QuoteRequest) -> Result<()> {
    request.validate()?;
    let source = context.source.open()?;
    let cost = source
        .transport_cost(request)
        .context("failed to fetch transport cost")?;
    let quote = TransportQuote::build(&cost, request.passengers)
        .context("failed to size the fleet for this quote")?;
    info!(
        transport = %quote.transport,
        vehicles = quote.fleet.vehicle_count,
        "built transport quote"
    );

    match context.format {
        OutputFormat::Json => render_json(&QuoteReport {
            request,
            currency: &cost.currency,
            rows: quote.display_rows(request.distance)?,
            quote: &quote,
        })?,
        OutputFormat::Text => print!(
            "{}",
            render_quote(&quote, request.distance, &context.palette)?
        ),
    }
    Ok(())
}
