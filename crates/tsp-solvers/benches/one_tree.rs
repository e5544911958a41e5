use criterion::{BatchSize::SmallInput, criterion_group, criterion_main, Criterion};
use tsp_core::{Graph, Node};
use tsp_instances::random_euclidean_instance;
use tsp_solvers::one_tree::min_one_tree;

fn min_one_tree_benchmark(c: &mut Criterion) {
    let instance = random_euclidean_instance(280, 10_000.0, 280);
    let graph = instance.to_graph();
    let pi = vec![0.0; graph.num_vertices()];

    c.bench_function("Compute min one tree", |b| {
        b.iter_batched_ref(|| pi.clone(), |pi| min_one_tree(&graph, Node(0), pi), SmallInput)
    });
}

criterion_group!(min_one_tree, min_one_tree_benchmark);
criterion_main!(min_one_tree);
