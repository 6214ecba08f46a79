use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use stargate_lib::{
    format_currency, reconstruct_route_costs, Gate, GateDirectory, GateLink, RouteCostRequest,
};
use std::hint::black_box;

const CHAIN_LENGTH: usize = 500;

fn code(idx: usize) -> String {
    format!("G{idx:04}")
}

/// A line of gates where each links to its neighbours, plus a route along it.
static CHAIN: Lazy<(GateDirectory, Vec<String>)> = Lazy::new(|| {
    let gates = (0..CHAIN_LENGTH)
        .map(|idx| {
            let mut links = Vec::new();
            if idx > 0 {
                links.push(GateLink {
                    code: code(idx - 1),
                    hu: format!("{}", 10 + idx % 7),
                });
            }
            if idx + 1 < CHAIN_LENGTH {
                links.push(GateLink {
                    code: code(idx + 1),
                    hu: format!("{}", 10 + (idx + 1) % 7),
                });
            }
            Gate {
                uuid: String::new(),
                code: code(idx),
                name: format!("Gate {idx}"),
                created_at: String::new(),
                updated_at: None,
                links,
            }
        })
        .collect();
    let route = (0..CHAIN_LENGTH).map(code).collect();
    (GateDirectory::new(gates), route)
});

fn bench_reconstruct_single(c: &mut Criterion) {
    let (directory, route) = &*CHAIN;
    c.bench_function("route_cost_single_vehicle", |b| {
        b.iter(|| {
            let request = RouteCostRequest::new(route, 6_500.0);
            let breakdown = reconstruct_route_costs(black_box(&request), directory)
                .expect("breakdown");
            black_box(breakdown);
        });
    });
}

fn bench_reconstruct_fleet_rows(c: &mut Criterion) {
    let (directory, route) = &*CHAIN;
    c.bench_function("route_cost_fleet_rows", |b| {
        b.iter(|| {
            let request = RouteCostRequest::new(route, 6_500.0)
                .with_fleet(3)
                .with_parking(45.0);
            let rows = reconstruct_route_costs(black_box(&request), directory)
                .and_then(|breakdown| breakdown.display_rows())
                .expect("rows");
            black_box(rows);
        });
    });
}

fn bench_format_currency(c: &mut Criterion) {
    c.bench_function("format_currency", |b| {
        b.iter(|| format_currency(black_box(10.555)).expect("finite"));
    });
}

criterion_group!(
    benches,
    bench_reconstruct_single,
    bench_reconstruct_fleet_rows,
    bench_format_currency
);
criterion_main!(benches);
