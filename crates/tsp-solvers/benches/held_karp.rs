use criterion::{criterion_group, criterion_main, Criterion};
use tsp_instances::random_euclidean_instance;
use tsp_solvers::held_karp_exact;

fn held_karp_12(c: &mut Criterion) {
    let instance = random_euclidean_instance(12, 1000.0, 12);
    let graph = instance.to_graph();

    c.bench_function("Held-Karp exact DP: 12 random Euclidean points", |b| {
        b.iter(|| held_karp_exact(&graph).unwrap())
    });
}

fn held_karp_18(c: &mut Criterion) {
    let instance = random_euclidean_instance(18, 1000.0, 18);
    let graph = instance.to_graph();

    c.bench_function("Held-Karp exact DP: 18 random Euclidean points", |b| {
        b.iter(|| held_karp_exact(&graph).unwrap())
    });
}

criterion_group!(held_karp_bench_12, held_karp_12);
criterion_group!(
    name = held_karp_bench_18;
    config = Criterion::default().sample_size(10);
    targets = held_karp_18
);

criterion_main!(held_karp_bench_12, held_karp_bench_18);
