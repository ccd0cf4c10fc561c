use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use narwhal::dijkstra::{self, DijkstraVertex};
use narwhal::graphlib::{Graph, Orientation};
use narwhal::mst::{self, PrimVertex};
use std::hint::black_box;
use std::time::Duration;

#[derive(Debug, Clone)]
struct GraphSpec {
    vertices: usize,
    edges: Vec<(usize, usize, i64)>,
}

impl GraphSpec {
    fn build<V: Default>(&self) -> Graph<V, i64> {
        let mut g = Graph::with_capacity(
            Orientation::Undirected,
            self.vertices,
            self.edges.len() * 2,
        );
        for _ in 0..self.vertices {
            g.add_vertex(V::default());
        }
        for &(u, v, cost) in &self.edges {
            g.add_edge(u, v, cost).unwrap();
        }
        g
    }
}

/// A connected graph with deterministic pseudo-random costs.
fn build_spec(vertices: usize, fanout: usize) -> GraphSpec {
    let mut edges = Vec::new();
    let mut state: u64 = 0x9e37_79b9_7f4a_7c15;
    let mut next_cost = || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        (state % 100) as i64 + 1
    };

    // A spine to guarantee connectivity.
    for i in 0..vertices.saturating_sub(1) {
        edges.push((i, i + 1, next_cost()));
    }
    for i in 0..vertices {
        for k in 2..=(fanout + 1) {
            let to = i.saturating_mul(k) % vertices;
            if to != i {
                edges.push((i, to, next_cost()));
            }
        }
    }

    GraphSpec { vertices, edges }
}

fn bench_shortest_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_path");
    group.measurement_time(Duration::from_secs(10));

    let cases = [("v1k_f3", 1_000usize, 3usize), ("v10k_f4", 10_000usize, 4usize)];

    for (name, vertices, fanout) in cases {
        let spec = build_spec(vertices, fanout);
        group.bench_with_input(BenchmarkId::new("dijkstra", name), &spec, |b, spec| {
            b.iter_batched(
                || spec.build::<DijkstraVertex>(),
                |mut g| {
                    dijkstra::shortest_paths(black_box(&mut g), 0).unwrap();
                    black_box(g.vertex_count());
                },
                BatchSize::LargeInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("prim", name), &spec, |b, spec| {
            b.iter_batched(
                || spec.build::<PrimVertex>(),
                |mut g| black_box(mst::prim(black_box(&mut g)).unwrap().cost),
                BatchSize::LargeInput,
            )
        });
        let shared = spec.build::<()>();
        group.bench_with_input(BenchmarkId::new("kruskal", name), &shared, |b, g| {
            b.iter(|| black_box(mst::kruskal(black_box(g)).unwrap().cost))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_shortest_paths);
criterion_main!(benches);
