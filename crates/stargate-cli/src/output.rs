//! Output formatting for quotes, route breakdowns and gate listings.
//!
//! Renderers build a `String` so they can be unit tested; command handlers
//! print the result.

use std::fmt::Write as _;
use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use stargate_lib::{
    CostRow, FleetComposition, Gate, GateConnection, RouteCostBreakdown, TransportQuote,
};

use crate::terminal::{visible_width, ColorPalette};

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Write `value` to stdout as pretty JSON followed by a newline.
pub fn render_json<T: Serialize>(value: &T) -> io::Result<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, value).map_err(io::Error::other)?;
    stdout.write_all(b"\n")
}

fn pad_left(text: &str, width: usize) -> String {
    let visible = visible_width(text);
    format!("{}{}", " ".repeat(width.saturating_sub(visible)), text)
}

/// Render cost rows as an aligned table.
///
/// An `EACH` column (and a header naming both columns) only appears when at
/// least one row carries a per-vehicle figure.
pub fn render_rows(rows: &[CostRow], palette: &ColorPalette) -> String {
    let show_each = rows.iter().any(|row| row.each.is_some());
    let label_width = rows
        .iter()
        .map(|row| row.label.chars().count())
        .max()
        .unwrap_or(0);
    let each_width = rows
        .iter()
        .filter_map(|row| row.each.as_deref())
        .map(visible_width)
        .chain(std::iter::once("EACH".len()))
        .max()
        .unwrap_or(0);
    let total_width = rows
        .iter()
        .map(|row| visible_width(&row.total))
        .chain(std::iter::once("TOTAL".len()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    if show_each {
        let _ = writeln!(
            out,
            "{gray}{:label_width$}  {}  {}{reset}",
            "",
            pad_left("EACH", each_width),
            pad_left("TOTAL", total_width),
            gray = palette.gray,
            reset = palette.reset,
        );
    }

    for (idx, row) in rows.iter().enumerate() {
        let is_total = idx + 1 == rows.len() && row.label == "Total";
        let (open, close) = if is_total {
            (palette.green, palette.reset)
        } else {
            ("", "")
        };
        let mut line = format!("{:label_width$}", row.label);
        if show_each {
            line.push_str("  ");
            line.push_str(&pad_left(row.each.as_deref().unwrap_or(""), each_width));
        }
        line.push_str("  ");
        line.push_str(open);
        line.push_str(&pad_left(&row.total, total_width));
        line.push_str(close);
        if let Some(note) = &row.note {
            let _ = write!(line, "  {}({}){}", palette.gray, note, palette.reset);
        }
        let _ = writeln!(out, "{}", line.trim_end());
    }

    out
}

/// Header plus table for a transport quote.
pub fn render_quote(
    quote: &TransportQuote,
    distance: f64,
    palette: &ColorPalette,
) -> stargate_lib::Result<String> {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Recommended transport: {}{}{}",
        palette.white_bold, quote.transport, palette.reset
    );
    let _ = writeln!(out, "{}{}{}", palette.gray, quote.description, palette.reset);
    out.push('\n');

    if quote.fleet.is_fleet {
        let _ = writeln!(out, "{}\n", fleet_line(&quote.fleet, &quote.transport, palette));
    }

    out.push_str(&render_rows(&quote.display_rows(distance)?, palette));
    Ok(out)
}

fn fleet_line(fleet: &FleetComposition, transport: &str, palette: &ColorPalette) -> String {
    format!(
        "Fleet composition: {}{}x{} {}s (passenger capacity each: {})",
        palette.orange, fleet.vehicle_count, palette.reset, transport, fleet.capacity
    )
}

/// Header plus per-leg table for a route breakdown.
pub fn render_route(
    breakdown: &RouteCostBreakdown,
    palette: &ColorPalette,
) -> stargate_lib::Result<String> {
    let mut out = String::new();
    let start = breakdown
        .route
        .first()
        .map(String::as_str)
        .unwrap_or("<unknown>");
    let goal = breakdown
        .route
        .last()
        .map(String::as_str)
        .unwrap_or("<unknown>");
    let _ = writeln!(
        out,
        "Cheapest route from {c}{start}{r} to {c}{goal}{r} ({} jumps):",
        breakdown.legs.len(),
        c = palette.cyan,
        r = palette.reset,
    );
    let _ = writeln!(
        out,
        "Total journey cost: {}{}{}",
        palette.green,
        stargate_lib::format_currency(breakdown.totals.journey)?,
        palette.reset
    );
    if breakdown.is_fleet() {
        let _ = writeln!(
            out,
            "Fleet: {}{}x{} vehicles",
            palette.orange, breakdown.fleet_count, palette.reset
        );
    }
    out.push('\n');
    out.push_str(&render_rows(&breakdown.display_rows()?, palette));

    let unresolved = breakdown.unresolved_legs();
    if unresolved > 0 {
        let _ = writeln!(
            out,
            "\n{}Warning: {} leg(s) had no link data and are shown at £0.00{}",
            palette.red, unresolved, palette.reset
        );
    }
    Ok(out)
}

/// One line per gate: code, name and connection count.
pub fn render_gate_list(gates: &[&Gate], palette: &ColorPalette) -> String {
    if gates.is_empty() {
        return "No gates found.\n".to_string();
    }

    let name_width = gates
        .iter()
        .map(|g| g.name.chars().count())
        .max()
        .unwrap_or(0);
    let mut out = String::new();
    let _ = writeln!(out, "Gates ({}):", gates.len());
    for gate in gates {
        let _ = writeln!(
            out,
            "{}{:<5}{} {:<name_width$}  {}{} connections{}",
            palette.cyan,
            gate.code,
            palette.reset,
            gate.name,
            palette.gray,
            gate.links.len(),
            palette.reset,
        );
    }
    out
}

/// Gate heading followed by its resolved connections.
pub fn render_gate_details(
    gate: &Gate,
    connections: &[GateConnection],
    palette: &ColorPalette,
) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}{}{} ({}{}{})",
        palette.white_bold, gate.name, palette.reset, palette.cyan, gate.code, palette.reset
    );
    if connections.is_empty() {
        let _ = writeln!(out, "No connections.");
        return out;
    }

    let _ = writeln!(out, "Connections:");
    for connection in connections {
        let _ = writeln!(
            out,
            " - {}{:<5}{} {} {}({} AU){}",
            palette.cyan,
            connection.code,
            palette.reset,
            connection.name,
            palette.gray,
            connection.distance,
            palette.reset,
        );
    }
    out
}
