//! Gate records as served by the stargate API and an in-memory lookup over them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Maximum number of suggestions attached to an unknown gate error.
const MAX_SUGGESTIONS: usize = 3;

/// Direct connection from one gate to another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateLink {
    /// Code of the gate at the far end of the link.
    pub code: String,
    /// Distance in hyperspace units, transmitted as a numeric string.
    pub hu: String,
}

impl GateLink {
    /// Parsed link distance, or `None` when `hu` is not a finite number.
    pub fn distance(&self) -> Option<f64> {
        self.hu
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
    }
}

/// Node in the transit network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gate {
    #[serde(default)]
    pub uuid: String,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub links: Vec<GateLink>,
}

/// The details endpoint returns the same shape as the listing.
pub type GateDetails = Gate;

impl Gate {
    /// Link from this gate to `code`, if one exists.
    pub fn link_to(&self, code: &str) -> Option<&GateLink> {
        self.links.iter().find(|link| link.code == code)
    }
}

/// Neighbour of a gate with its resolved name and distance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GateConnection {
    pub code: String,
    pub name: String,
    pub distance: f64,
}

/// Read-only index of gates keyed by code.
///
/// Gates keep the order the API listed them in.
#[derive(Debug, Clone, Default)]
pub struct GateDirectory {
    gates: Vec<Gate>,
    by_code: HashMap<String, usize>,
}

impl GateDirectory {
    /// Build a directory from the gate listing. Later duplicates of a code
    /// are ignored so lookups always resolve to the first occurrence.
    pub fn new(gates: Vec<Gate>) -> Self {
        let mut by_code = HashMap::with_capacity(gates.len());
        for (idx, gate) in gates.iter().enumerate() {
            by_code.entry(gate.code.clone()).or_insert(idx);
        }
        Self { gates, by_code }
    }

    /// Gates in API order.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    pub fn len(&self) -> usize {
        self.gates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Lookup a gate by code.
    pub fn get(&self, code: &str) -> Option<&Gate> {
        self.by_code.get(code).map(|&idx| &self.gates[idx])
    }

    /// Lookup a gate by code, failing with close matches when absent.
    pub fn require(&self, code: &str) -> Result<&Gate> {
        self.get(code).ok_or_else(|| Error::UnknownGate {
            code: code.to_string(),
            suggestions: self.suggest(code),
        })
    }

    /// Distance of the direct link `from -> to`, if both the gate and link
    /// exist and the distance parses.
    pub fn link_distance(&self, from: &str, to: &str) -> Option<f64> {
        self.get(from)
            .and_then(|gate| gate.link_to(to))
            .and_then(GateLink::distance)
    }

    /// Resolve every link of `code` to a named connection.
    ///
    /// Links whose distance cannot be parsed are skipped; links to gates
    /// missing from the directory fall back to the raw code as their name.
    pub fn connections(&self, code: &str) -> Result<Vec<GateConnection>> {
        let gate = self.require(code)?;
        Ok(gate
            .links
            .iter()
            .filter_map(|link| {
                let distance = link.distance()?;
                let name = self
                    .get(&link.code)
                    .map(|target| target.name.clone())
                    .unwrap_or_else(|| link.code.clone());
                Some(GateConnection {
                    code: link.code.clone(),
                    name,
                    distance,
                })
            })
            .collect())
    }

    fn suggest(&self, code: &str) -> Vec<String> {
        let needle = code.to_ascii_uppercase();
        let mut scored: Vec<(f64, &str)> = self
            .gates
            .iter()
            .map(|gate| {
                let score = strsim::jaro_winkler(&needle, &gate.code.to_ascii_uppercase())
                    .max(strsim::jaro_winkler(
                        &code.to_lowercase(),
                        &gate.name.to_lowercase(),
                    ));
                (score, gate.code.as_str())
            })
            .filter(|(score, _)| *score >= 0.7)
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(|(_, code)| code.to_string())
            .collect()
    }
}

impl From<Vec<Gate>> for GateDirectory {
    fn from(gates: Vec<Gate>) -> Self {
        Self::new(gates)
    }
}
