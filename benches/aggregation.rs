//! Benchmarks for order book aggregation and record parsing.
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Run specific benchmark
//! cargo bench -- aggregate
//! ```
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rust_decimal::Decimal;

use obscura_core::book::aggregate;
use obscura_core::fixtures::mock_orders;
use obscura_core::types::OrderRecord;

// ============================================================================
// HELPER FUNCTIONS - Deterministic input generation
// ============================================================================

/// Seeded order set around a 2000 mid price.
fn make_orders(count: usize) -> Vec<obscura_core::types::Order> {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    mock_orders(&mut rng, count, "aleo1bench", Decimal::new(2000, 0))
}

/// Representative order record wire string.
fn make_wire() -> String {
    OrderRecord {
        owner: "aleo1bench".into(),
        order_id: "7field".into(),
        side: 0,
        base_asset: "3field".into(),
        quote_asset: "1field".into(),
        amount: 150_000_000,
        price: 200_000_000_000,
        salt: "42scalar".into(),
        filled: 50_000_000,
        created_at: 1_700_000_000,
        nonce: None,
    }
    .to_wire()
}

// ============================================================================
// BENCHMARKS
// ============================================================================

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");

    for count in [100, 1_000, 10_000] {
        let orders = make_orders(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &orders, |b, orders| {
            b.iter(|| aggregate(black_box(orders)));
        });
    }

    group.finish();
}

fn bench_record_roundtrip(c: &mut Criterion) {
    let wire = make_wire();

    c.bench_function("order_record_parse", |b| {
        b.iter(|| OrderRecord::from_wire(black_box(&wire)).unwrap());
    });

    let record = OrderRecord::from_wire(&wire).unwrap();
    c.bench_function("order_record_serialize", |b| {
        b.iter(|| black_box(&record).to_wire());
    });
}

criterion_group!(benches, bench_aggregate, bench_record_roundtrip);
criterion_main!(benches);
