//! Benchmarks for the limit book.
//!
//! ## Running Benchmarks
//!
//! ```bash
//! cargo bench
//! cargo bench -- single_match
//! ```
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};
use std::time::Duration;

use limit_book::{Order, OrderBook, OrderId, Side};

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Rest `count` offers at increasing prices starting from `base_price`.
fn populate_offers(
    book: &mut OrderBook,
    first_id: OrderId,
    count: usize,
    base_price: u64,
    quantity: u64,
) {
    for i in 0..count as u64 {
        let order = Order::limit(first_id + i, Side::Offer, base_price + i, quantity);
        book.add_order(&order).expect("unique id");
    }
}

/// Rest `count` bids at decreasing prices starting from `base_price`.
fn populate_bids(
    book: &mut OrderBook,
    first_id: OrderId,
    count: usize,
    base_price: u64,
    quantity: u64,
) {
    for i in 0..count as u64 {
        let order = Order::limit(first_id + i, Side::Bid, base_price - i, quantity);
        book.add_order(&order).expect("unique id");
    }
}

fn seeded_book(size: usize) -> OrderBook {
    let mut book = OrderBook::with_capacity(size * 2);
    populate_offers(&mut book, 1, size / 2, 10_001, 10);
    populate_bids(&mut book, 1 + size as OrderId, size / 2, 10_000, 10);
    book
}

// ============================================================================
// BENCHMARK: Single Match
// ============================================================================

fn bench_single_match(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_match");
    group.measurement_time(Duration::from_secs(5));

    group.bench_function("partial_fill_best_offer", |b| {
        b.iter_batched(
            || seeded_book(1_000),
            |mut book| black_box(book.process_order(&Order::market(0, Side::Bid, 5))),
            BatchSize::SmallInput,
        );
    });

    group.bench_function("sweep_ten_offers", |b| {
        b.iter_batched(
            || seeded_book(1_000),
            |mut book| black_box(book.process_order(&Order::market(0, Side::Bid, 100))),
            BatchSize::SmallInput,
        );
    });

    group.bench_function("limit_not_crossing", |b| {
        b.iter_batched(
            || seeded_book(1_000),
            |mut book| black_box(book.process_order(&Order::limit(0, Side::Bid, 20_000, 10))),
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

// ============================================================================
// BENCHMARK: Lifecycle Operations
// ============================================================================

fn bench_order_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("order_operations");
    group.measurement_time(Duration::from_secs(5));

    group.bench_function("add_to_empty", |b| {
        b.iter_batched(
            OrderBook::new,
            |mut book| black_box(book.add_order(&Order::limit(1, Side::Bid, 10_000, 10))),
            BatchSize::SmallInput,
        );
    });

    group.bench_function("add_to_1k_book", |b| {
        b.iter_batched(
            || seeded_book(1_000),
            |mut book| black_box(book.add_order(&Order::limit(999_999, Side::Bid, 9_500, 10))),
            BatchSize::SmallInput,
        );
    });

    group.bench_function("amend_order", |b| {
        b.iter_batched(
            || seeded_book(1_000),
            |mut book| {
                book.update_order(250, 42);
                black_box(book.best_offer())
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("cancel_order", |b| {
        b.iter_batched(
            || seeded_book(1_000),
            |mut book| black_box(book.delete_order(250)),
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

// ============================================================================
// BENCHMARK: Throughput
// ============================================================================

fn bench_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("throughput");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(50);

    for size in [1_000usize, 10_000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("rest_then_sweep", size), &size, |b, &size| {
            b.iter_batched(
                || OrderBook::with_capacity(size),
                |mut book| {
                    populate_offers(&mut book, 1, size, 10_001, 10);
                    black_box(book.process_order(&Order::market(0, Side::Bid, size as u64 * 10)))
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

// ============================================================================
// BENCHMARK: State Root
// ============================================================================

fn bench_state_root(c: &mut Criterion) {
    let book = seeded_book(10_000);
    c.bench_function("state_root_10k", |b| b.iter(|| black_box(book.state_root())));
}

criterion_group!(
    benches,
    bench_single_match,
    bench_order_operations,
    bench_throughput,
    bench_state_root
);

criterion_main!(benches);
