mod common;

use stargate_lib::{
    calculate_fleet_size, format_currency, Error, GateSource, QuoteRequest, TransportQuote,
};

use common::fixture_source;

fn request() -> QuoteRequest {
    QuoteRequest {
        distance: 150.0,
        passengers: 5,
        parking_days: 3,
    }
}

#[test]
fn end_to_end_fleet_quote() {
    let cost = fixture_source()
        .transport_cost(&request())
        .expect("fixture transport cost");
    assert_eq!(cost.recommended_transport.rate_per_au, Some(2.0));

    let capacity = cost.recommended_transport.effective_capacity();
    assert_eq!(calculate_fleet_size(request().passengers, capacity), 2);

    let quote = TransportQuote::build(&cost, request().passengers).expect("quote");
    assert_eq!(quote.fleet.vehicle_count, 2);
    assert_eq!(format_currency(quote.total.total).unwrap(), "£330.00");
    assert_eq!(format_currency(quote.total.each).unwrap(), "£165.00");

    let rows = quote.display_rows(request().distance).expect("rows");
    let labels: Vec<&str> = rows.iter().map(|row| row.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["Rate", "Journey Cost (150 AU)", "Parking Cost", "Total"]
    );
    assert_eq!(rows[0].each.as_deref(), Some("£2.00 / AU"));
    assert_eq!(rows[0].total, "£4.00 / AU");
    assert_eq!(rows[1].each.as_deref(), Some("£150.00"));
    assert_eq!(rows[2].each.as_deref(), Some("£15.00"));
    assert_eq!(rows[3].total, "£330.00");
    assert_eq!(rows[3].each.as_deref(), Some("£165.00"));
}

#[test]
fn invalid_requests_never_reach_the_source() {
    let source = fixture_source();
    let bad = QuoteRequest {
        passengers: 0,
        ..request()
    };
    assert!(matches!(
        source.transport_cost(&bad),
        Err(Error::InvalidQuoteRequest { .. })
    ));
}
