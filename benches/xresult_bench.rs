//! Benchmark for the result container and its comprehension macro.
//!
//! Measures the cost of combinator chains against hand-written match
//! expressions over the same data.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use xfp::fors;
use xfp::xresult::Xresult;

// =============================================================================
// Combinator Chain Benchmarks
// =============================================================================

fn benchmark_map_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map_chain");

    for length in [1, 4, 16] {
        group.bench_with_input(
            BenchmarkId::new("chain_length", length),
            &length,
            |bencher, &length| {
                bencher.iter(|| {
                    let mut result: Xresult<String, i64> = Xresult::Right(black_box(1));
                    for _ in 0..length {
                        result = result.map(|value| value.wrapping_mul(3));
                    }
                    black_box(result)
                });
            },
        );
    }

    group.finish();
}

fn benchmark_flat_map_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("flat_map_chain");

    fn step(value: i64) -> Xresult<String, i64> {
        if value % 1_000_003 == 0 {
            Xresult::Left("divisible".to_string())
        } else {
            Xresult::Right(value.wrapping_add(1))
        }
    }

    group.bench_function("all_rights", |bencher| {
        bencher.iter(|| {
            let chained = Xresult::<String, i64>::Right(black_box(1))
                .flat_map(step)
                .flat_map(step)
                .flat_map(step)
                .flat_map(step);
            black_box(chained)
        });
    });

    group.bench_function("stops_at_first_left", |bencher| {
        bencher.iter(|| {
            let chained = Xresult::<String, i64>::Left("early".to_string())
                .flat_map(step)
                .flat_map(step)
                .flat_map(step)
                .flat_map(step);
            black_box(chained)
        });
    });

    group.finish();
}

// =============================================================================
// Comprehension Benchmarks
// =============================================================================

fn benchmark_fors_macro(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("fors_macro");

    group.bench_function("three_way_composition", |bencher| {
        bencher.iter(|| {
            let composed = fors! {
                x <= Xresult::<String, i64>::Right(black_box(1));
                y <= Xresult::<String, i64>::Right(black_box(2));
                z <= Xresult::<String, i64>::Right(black_box(3));
                yield x + y + z
            };
            black_box(composed)
        });
    });

    group.bench_function("hand_written_match", |bencher| {
        bencher.iter(|| {
            let first: Xresult<String, i64> = Xresult::Right(black_box(1));
            let second: Xresult<String, i64> = Xresult::Right(black_box(2));
            let third: Xresult<String, i64> = Xresult::Right(black_box(3));
            let composed = match (first, second, third) {
                (Xresult::Right(x), Xresult::Right(y), Xresult::Right(z)) => {
                    Xresult::Right(x + y + z)
                }
                (Xresult::Left(error), _, _)
                | (_, Xresult::Left(error), _)
                | (_, _, Xresult::Left(error)) => Xresult::Left(error),
            };
            black_box(composed)
        });
    });

    group.finish();
}

#[cfg(feature = "collection")]
fn benchmark_fors_function(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("fors_function");

    for size in [4, 16, 64] {
        group.bench_with_input(BenchmarkId::new("operands", size), &size, |bencher, &size| {
            let operands: Vec<Xresult<String, i64>> =
                (0..size).map(|value| Xresult::Right(i64::from(value))).collect();
            bencher.iter(|| {
                let combined = Xresult::fors(black_box(operands.clone()), |values| {
                    values.fold(0_i64, |total, value| total + value)
                });
                black_box(combined)
            });
        });
    }

    group.finish();
}

#[cfg(feature = "collection")]
criterion_group!(
    benches,
    benchmark_map_chain,
    benchmark_flat_map_chain,
    benchmark_fors_macro,
    benchmark_fors_function
);

#[cfg(not(feature = "collection"))]
criterion_group!(
    benches,
    benchmark_map_chain,
    benchmark_flat_map_chain,
    benchmark_fors_macro
);

criterion_main!(benches);
