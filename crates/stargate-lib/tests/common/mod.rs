//! Common test utilities and fixture helpers.
//!
//! Fixtures under `docs/fixtures` hold canned API responses: a five-gate
//! graph, a transport price and a cheapest route across it.

use std::path::PathBuf;

use stargate_lib::{FixtureSource, Gate, GateDirectory, GateLink, GateSource};

/// Path to fixtures directory used by tests.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Fixture-backed data source.
#[allow(dead_code)]
pub fn fixture_source() -> FixtureSource {
    FixtureSource::new(fixtures_dir())
}

/// Gate directory built from `gates.json`.
#[allow(dead_code)]
pub fn fixture_directory() -> GateDirectory {
    let gates = fixture_source().gates().expect("load fixture gates.json");
    GateDirectory::new(gates)
}

/// Build a gate with the given `(code, hu)` links.
#[allow(dead_code)]
pub fn gate(code: &str, links: &[(&str, &str)]) -> Gate {
    Gate {
        uuid: format!("uuid-{code}"),
        code: code.to_string(),
        name: format!("Gate {code}"),
        created_at: "2024-01-01T00:00:00.000Z".to_string(),
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

/// Synthetic three-gate line `A -(10)- B -(5)- C`.
#[allow(dead_code)]
pub fn three_gate_directory() -> GateDirectory {
    GateDirectory::new(vec![
        gate("A", &[("B", "10")]),
        gate("B", &[("A", "10"), ("C", "5")]),
        gate("C", &[("B", "5")]),
    ])
}

/// Owned route from a list of codes.
#[allow(dead_code)]
pub fn route(codes: &[&str]) -> Vec<String> {
    codes.iter().map(|code| code.to_string()).collect()
}
