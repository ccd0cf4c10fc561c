use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use narwhal::graphlib::{Graph, Orientation};
use narwhal::min_cut;
use std::hint::black_box;
use std::time::Duration;

/// Two cliques of `half` vertices joined by `bridges` edges.
fn barbell(half: usize, bridges: usize) -> Graph<(), ()> {
    let mut g = Graph::new(Orientation::Undirected);
    for _ in 0..half * 2 {
        g.add_vertex(());
    }
    for offset in [0, half] {
        for u in 0..half {
            for v in u + 1..half {
                g.add_edge(offset + u, offset + v, ()).unwrap();
            }
        }
    }
    for i in 0..bridges.min(half) {
        g.add_edge(i, half + i, ()).unwrap();
    }
    g
}

fn bench_min_cut(c: &mut Criterion) {
    let mut group = c.benchmark_group("min_cut");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(10);

    for (name, half, bridges) in [("barbell_5x2", 5usize, 2usize), ("barbell_10x3", 10, 3)] {
        let g = barbell(half, bridges);
        group.bench_with_input(BenchmarkId::new("karger", name), &g, |b, g| {
            b.iter(|| black_box(min_cut::min_cut_seeded(black_box(g), 42)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_min_cut);
criterion_main!(benches);
