// Test utilities used across `stargate-cli` unit tests.
// Kept under `#[cfg(test)]` so it is not part of the public crate API.
use stargate_lib::{
    reconstruct_route_costs, Gate, GateDirectory, GateLink, RouteCostBreakdown, RouteCostRequest,
    TransportCost, TransportOption, TransportQuote,
};

fn transport_cost() -> TransportCost {
    TransportCost {
        currency: "GBP".to_string(),
        journey_cost: 300.0,
        parking_fee: 30.0,
        total_cost: None,
        recommended_transport: TransportOption {
            name: "HSTC Transport".to_string(),
            description: Some("Large shuttle for groups.".to_string()),
            rate_per_au: Some(2.0),
            capacity: Some(4),
            ..TransportOption::default()
        },
    }
}

/// Quote for five passengers on four-seat vehicles (two vehicles).
pub fn fleet_quote() -> TransportQuote {
    TransportQuote::build(&transport_cost(), 5).expect("fleet quote")
}

/// Quote for two passengers (one vehicle).
pub fn single_quote() -> TransportQuote {
    TransportQuote::build(&transport_cost(), 2).expect("single quote")
}

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

/// Single-vehicle breakdown of `A -(10)- B -(5)- C`.
pub fn route_breakdown() -> RouteCostBreakdown {
    let directory = GateDirectory::new(vec![
        gate("A", &[("B", "10")]),
        gate("B", &[("A", "10"), ("C", "5")]),
        gate("C", &[("B", "5")]),
    ]);
    let route: Vec<String> = ["A", "B", "C"].iter().map(|c| c.to_string()).collect();
    reconstruct_route_costs(&RouteCostRequest::new(&route, 15.0), &directory).expect("breakdown")
}
