//! Criterion benchmarks for the permutation GA.
//!
//! Uses random Euclidean TSP instances so the measured cost is dominated
//! by the operators and the loop, not by an expensive objective.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use permga::ga::operators::order_crossover;
use permga::ga::{GaConfig, GaRunner};
use permga::random::{create_rng, random_permutation};
use permga::tsp::DistanceTable;
use rand::Rng;

// ===========================================================================
// Random Euclidean instance
// ===========================================================================

fn random_instance(n: usize, seed: u64) -> DistanceTable {
    let mut rng = create_rng(seed);
    let points: Vec<(f64, f64)> = (0..n)
        .map(|_| (rng.random_range(0.0..100.0), rng.random_range(0.0..100.0)))
        .collect();
    let labels: Vec<String> = (0..n).map(|i| format!("C{i}")).collect();

    let mut table = DistanceTable::new(labels.clone());
    for i in 0..n {
        for j in (i + 1)..n {
            let (dx, dy) = (points[i].0 - points[j].0, points[i].1 - points[j].1);
            table.set_distance(&labels[i], &labels[j], (dx * dx + dy * dy).sqrt());
        }
    }
    table
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_order_crossover(c: &mut Criterion) {
    let mut group = c.benchmark_group("order_crossover");

    for &n in &[10usize, 100, 1000] {
        let mut rng = create_rng(42);
        let p1 = random_permutation(n, &mut rng);
        let p2 = random_permutation(n, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(p1, p2), |b, (p1, p2)| {
            b.iter(|| black_box(order_crossover(black_box(p1), black_box(p2), &mut rng)))
        });
    }
    group.finish();
}

fn bench_ga_tsp(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_tsp");
    group.sample_size(10);

    for (cities, pop, gen) in [(10usize, 50usize, 50usize), (30, 100, 30), (60, 100, 20)] {
        let table = random_instance(cities, 7);
        let config = GaConfig::new(pop, cities).with_mutation_rate(0.1).with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("c{}_p{}_g{}", cities, pop, gen), cities),
            &(table, config),
            |b, (t, c)| {
                b.iter(|| {
                    let mut ga = GaRunner::new(c.clone(), t.clone()).unwrap();
                    black_box(ga.evolve(gen).unwrap())
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_order_crossover, bench_ga_tsp);
criterion_main!(benches);
