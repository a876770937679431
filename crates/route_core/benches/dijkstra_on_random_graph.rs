use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use route_core::{graph::Graph, search::dijkstra::Dijkstra, util::test_graphs::generate_complex_graph};

criterion_group!(benches, complex_graph, random_graphs);
criterion_main!(benches);

/// Connected graph with `num_nodes` stations: a random spanning tree plus
/// `extra_edges` random routes.
fn random_graph(rng: &mut StdRng, num_nodes: u32, extra_edges: usize) -> Graph<u32> {
    let mut g = Graph::with_capacity(num_nodes as usize, num_nodes as usize + extra_edges);
    g.add_node(0);
    for node in 1..num_nodes {
        let parent = rng.gen_range(0..node);
        g.add_edge(parent, node, rng.gen_range(1..100));
    }
    for _ in 0..extra_edges {
        let source = rng.gen_range(0..num_nodes);
        let target = rng.gen_range(0..num_nodes);
        g.add_edge(source, target, rng.gen_range(1..100));
    }
    g
}

pub fn complex_graph(c: &mut Criterion) {
    let g = generate_complex_graph();

    c.bench_with_input(
        BenchmarkId::new("dijkstra_on_complex_graph", "A to G"),
        &g,
        |b, g| {
            b.iter(|| {
                let mut dijkstra = Dijkstra::new(g);
                black_box(dijkstra.search("A", "G").unwrap());
            })
        },
    );
}

fn random_graphs(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);

    let mut group = c.benchmark_group("dijkstra_on_random_graph");
    for size in [100u32, 1_000, 10_000].iter() {
        let g = random_graph(&mut rng, *size, 2 * *size as usize);
        let pairs: Vec<(u32, u32)> = (0..16)
            .map(|_| (rng.gen_range(0..*size), rng.gen_range(0..*size)))
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &g, |b, g| {
            b.iter(|| {
                for (src, dst) in &pairs {
                    let mut dijkstra = Dijkstra::new(g);
                    black_box(dijkstra.search(src, dst).unwrap());
                }
            })
        });
    }
    group.finish();
}
