use criterion::{black_box, criterion_group, criterion_main, Criterion};
use netrobust::graph::{BaseGraph, Edge, HashMapGraph, MutableGraph};
use netrobust::{ComponentStrategy, ConnectivitySimulator};
use rand::prelude::{SliceRandom, StdRng};
use rand::SeedableRng;

fn grid(width: usize, height: usize) -> HashMapGraph {
    let mut graph = HashMapGraph::with_vertices(width * height);
    for y in 0..height {
        for x in 0..width {
            let u = y * width + x;
            if x + 1 < width {
                graph.add_edge(u, u + 1);
            }
            if y + 1 < height {
                graph.add_edge(u, u + width);
            }
        }
    }
    graph
}

fn shuffled_edges(graph: &HashMapGraph, seed: u64) -> Vec<Edge> {
    let mut rng: StdRng = SeedableRng::seed_from_u64(seed);
    let mut edges = graph.edges();
    edges.shuffle(&mut rng);
    edges
}

fn strategies(c: &mut Criterion) {
    let graph = grid(20, 20);
    let sequence = shuffled_edges(&graph, 1337);

    let recompute = ConnectivitySimulator::default().strategy(ComponentStrategy::Recompute);
    c.bench_function("grid_20x20_recompute", |b| {
        b.iter(|| recompute.simulate(black_box(&graph), black_box(&sequence)))
    });

    let reverse = ConnectivitySimulator::default().strategy(ComponentStrategy::ReverseUnionFind);
    c.bench_function("grid_20x20_reverse_union_find", |b| {
        b.iter(|| reverse.simulate(black_box(&graph), black_box(&sequence)))
    });

    let large = grid(100, 100);
    let large_sequence = shuffled_edges(&large, 42);
    c.bench_function("grid_100x100_reverse_union_find", |b| {
        b.iter(|| reverse.simulate(black_box(&large), black_box(&large_sequence)))
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = strategies
}
criterion_main!(benches);
