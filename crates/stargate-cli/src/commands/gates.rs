//! Gate listing and gate detail handlers.

use anyhow::{Context, Result};
use serde::Serialize;

use stargate_lib::{reduce, Gate, GateConnection, GateDirectory, PreferenceAction, UserPreferences};

use crate::commands::CommandContext;
use stargate_cli::output::{render_gate_details, render_gate_list, render_json, OutputFormat};

#[derive(Debug, Serialize)]
struct GateReport<'a> {
    gate: &'a Gate,
    connections: &'a [GateConnection],
}

/// Handle `gates`, optionally restricted to the given favourite codes.
pub fn handle_list_gates(context: &CommandContext, favorites: &[String]) -> Result<()> {
    let source = context.source.open()?;
    let gates = source.gates().context("failed to load gates")?;

    let listed: Vec<&Gate> = if favorites.is_empty() {
        gates.iter().collect()
    } else {
        let preferences = favorites
            .iter()
            .fold(UserPreferences::default(), |state, code| {
                reduce(state, PreferenceAction::AddFavorite(code.clone()))
            });
        preferences.favorite_gates(&gates)
    };

    match context.format {
        OutputFormat::Json => render_json(&listed)?,
        OutputFormat::Text => print!("{}", render_gate_list(&listed, &context.palette)),
    }
    Ok(())
}

/// Handle `gate <CODE>`.
pub fn handle_gate_details(context: &CommandContext, code: &str) -> Result<()> {
    let source = context.source.open()?;
    let directory = GateDirectory::new(source.gates().context("failed to load gates")?);
    directory.require(code)?;

    let gate = source
        .gate(code)
        .with_context(|| format!("failed to load gate {code}"))?;
    let connections = directory.connections(&gate.code).unwrap_or_default();

    match context.format {
        OutputFormat::Json => render_json(&GateReport {
            gate: &gate,
            connections: &connections,
        })?,
        OutputFormat::Text => print!(
            "{}",
            render_gate_details(&gate, &connections, &context.palette)
        ),
    }
    Ok(())
}
