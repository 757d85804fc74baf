//! # EE-01 Sorting Brutal Benchmarks
//!
//! Claims to validate:
//! - Insertion sort: O(n) on sorted input, O(n²) on reversed input
//! - Selection sort: O(n²) comparisons regardless of input order
//! - Both are dwarfed by the std sorts beyond a few dozen elements
//!
//! Every iteration sorts a fresh copy, mirroring the CLI's sort command.

use criterion::{black_box, BatchSize, BenchmarkId, Criterion, Throughput};
use ee_01_sorting::SortStrategy;
use ee_benchmarks::utils::{generate_input, InputShape};

const SIZES: [usize; 3] = [64, 512, 2048];

pub fn brutal_strategy_by_shape(c: &mut Criterion) {
    for shape in InputShape::ALL {
        let mut group = c.benchmark_group(format!("ee-01/brutal/{}", shape.name()));

        for n in SIZES {
            let input = generate_input(shape, n, 5);
            group.throughput(Throughput::Elements(n as u64));

            for strategy in SortStrategy::ALL {
                group.bench_with_input(BenchmarkId::new(strategy.name(), n), &input, |b, input| {
                    b.iter_batched_ref(
                        || input.clone(),
                        |copy| strategy.apply(black_box(copy.as_mut_slice())),
                        BatchSize::SmallInput,
                    );
                });
            }
        }

        group.finish();
    }
}

/// Tiny slices, where insertion sort is competitive
pub fn brutal_small_slices(c: &mut Criterion) {
    let mut group = c.benchmark_group("ee-01/brutal/small");

    for n in [4, 8, 16, 32] {
        let input = generate_input(InputShape::Random, n, 11);
        for strategy in SortStrategy::ALL {
            group.bench_with_input(BenchmarkId::new(strategy.name(), n), &input, |b, input| {
                b.iter_batched_ref(
                    || input.clone(),
                    |copy| strategy.apply(black_box(copy.as_mut_slice())),
                    BatchSize::SmallInput,
                );
            });
        }
    }

    group.finish();
}

pub fn register_benchmarks(c: &mut Criterion) {
    brutal_strategy_by_shape(c);
    brutal_small_slices(c);
}
