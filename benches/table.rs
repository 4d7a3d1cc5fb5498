//! Benchmarks for the sorted hash table.
//!
//! ## Covered Operations
//!
//! | Benchmark   | Measures                                  |
//! |-------------|-------------------------------------------|
//! | set         | Insert into empty and pre-filled tables   |
//! | get         | Hit and miss lookups at varying occupancy |
//! | serialize   | Full ascending write throughput           |
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Run specific benchmark
//! cargo bench -- get
//! ```
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};

use lexmap::SortedTable;

// ============================================================================
// HELPER FUNCTIONS - Deterministic key generation
// ============================================================================

/// Generate `count` deterministic keys, pre-scrambled so sorted insertion
/// position varies (zero-padded so byte order equals numeric order).
fn generate_keys(count: usize, seed: u64) -> Vec<String> {
    use rand::seq::SliceRandom;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut keys: Vec<String> = (0..count).map(|i| format!("key{:06}", i)).collect();
    keys.shuffle(&mut rng);
    keys
}

/// Build a table pre-filled with `count` keys.
fn populate_table(count: usize, capacity: usize) -> SortedTable {
    let mut table = SortedTable::new(capacity).expect("non-zero capacity");
    for key in generate_keys(count, 42) {
        table.set(&key, "value").expect("non-empty key");
    }
    table
}

// ============================================================================
// BENCHMARK: Set
// ============================================================================

fn bench_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("set");

    // Insert the first entry into an empty table
    group.bench_function("into_empty", |b| {
        b.iter_batched(
            || SortedTable::new(1024).unwrap(),
            |mut table| {
                table.set("apple", "a").unwrap();
                black_box(table)
            },
            BatchSize::SmallInput,
        );
    });

    // Insert a fresh key into a pre-filled table (bucket push + splice scan)
    for size in [100usize, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("into_filled", size), &size, |b, &size| {
            let base = populate_table(size, 1024);
            b.iter_batched(
                || base.clone(),
                |mut table| {
                    // Key sorts immediately after "key000050", mid-chain
                    table.set("key000050x", "fresh").unwrap();
                    black_box(table)
                },
                BatchSize::SmallInput,
            );
        });
    }

    // Overwrite an existing key (no splice, value replacement only)
    group.bench_function("overwrite", |b| {
        let base = populate_table(1_000, 1024);
        b.iter_batched(
            || base.clone(),
            |mut table| {
                table.set("key000500", "updated").unwrap();
                black_box(table)
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

// ============================================================================
// BENCHMARK: Get
// ============================================================================

fn bench_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("get");

    for size in [1_000usize, 10_000] {
        let table = populate_table(size, 1024);

        group.bench_with_input(BenchmarkId::new("hit", size), &size, |b, _| {
            b.iter(|| black_box(table.get("key000500")));
        });

        group.bench_with_input(BenchmarkId::new("miss", size), &size, |b, _| {
            b.iter(|| black_box(table.get("missing")));
        });
    }

    // Degenerate placement: every key in one bucket chain
    let collided = populate_table(1_000, 1);
    group.bench_function("hit_capacity_one", |b| {
        b.iter(|| black_box(collided.get("key000500")));
    });

    group.finish();
}

// ============================================================================
// BENCHMARK: Serialization
// ============================================================================

fn bench_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize");

    for size in [1_000usize, 10_000] {
        let table = populate_table(size, 1024);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("ascending", size), &size, |b, _| {
            b.iter(|| {
                let mut out = Vec::with_capacity(size * 16);
                table.write_ascending(&mut out).unwrap();
                black_box(out)
            });
        });

        group.bench_with_input(BenchmarkId::new("descending", size), &size, |b, _| {
            b.iter(|| {
                let mut out = Vec::with_capacity(size * 16);
                table.write_descending(&mut out).unwrap();
                black_box(out)
            });
        });
    }

    group.finish();
}

// ============================================================================
// CRITERION ENTRY POINT
// ============================================================================

criterion_group!(benches, bench_set, bench_get, bench_serialize);

criterion_main!(benches);
