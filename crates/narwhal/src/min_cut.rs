//! Randomized minimum cut by repeated edge contraction (Karger).
//!
//! A trial contracts uniformly random edges until two super-vertices remain. The edges
//! left between them form a cut. The smallest cut over `n²` trials is the minimum with
//! high probability.

use crate::graphlib::{EdgeId, Graph, VertexId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Minimum cut estimate, seeded from OS entropy.
pub fn min_cut<V, E>(g: &Graph<V, E>) -> usize {
    let mut rng = StdRng::from_entropy();
    min_cut_with_rng(g, &mut rng)
}

/// Reproducible variant of [`min_cut`].
pub fn min_cut_seeded<V, E>(g: &Graph<V, E>, seed: u64) -> usize {
    let mut rng = StdRng::seed_from_u64(seed);
    min_cut_with_rng(g, &mut rng)
}

/// Number of contraction trials run on a graph with `vertices` vertices.
pub fn trials(vertices: usize) -> usize {
    if vertices < 2 {
        0
    } else {
        vertices.saturating_mul(vertices)
    }
}

/// Minimum cut estimate drawing contractions from `rng`.
///
/// Intended for undirected graphs. Graphs with fewer than two vertices have a cut of 0, as
/// do disconnected graphs. `g` itself is never modified.
pub fn min_cut_with_rng<V, E, R>(g: &Graph<V, E>, rng: &mut R) -> usize
where
    R: Rng,
{
    let n = g.vertex_count();
    if n < 2 {
        return 0;
    }

    let mut pristine: Graph<(), ()> = g.map(|_, _| (), |_, _| ());
    // Input self-loops never cross a cut.
    let loops: Vec<EdgeId> = pristine
        .edges()
        .filter(|(_, edge)| edge.is_self_loop())
        .map(|(id, _)| id)
        .collect();
    remove_edges(&mut pristine, loops);

    let trials = trials(n);
    let mut work = pristine.clone();
    let mut best = usize::MAX;
    for trial in 0..trials {
        work.clone_from(&pristine);
        let cut = contract(&mut work, n, rng);
        if cut < best {
            tracing::trace!(trial, cut, "new best cut");
            best = cut;
        }
        if best == 0 {
            break;
        }
    }

    tracing::debug!(
        vertices = n,
        edges = g.edge_count(),
        trials,
        cut = best,
        "min cut finished"
    );
    best
}

/// Runs one contraction trial on `work`, which starts with `vertices` live vertices.
fn contract<R>(work: &mut Graph<(), ()>, vertices: usize, rng: &mut R) -> usize
where
    R: Rng,
{
    let mut remaining = vertices;
    while remaining > 2 {
        let live = work.edge_count();
        if live == 0 {
            return 0;
        }
        let Some(edge) = work.edge(rng.gen_range(0..live)) else {
            return 0;
        };
        let (u, v) = (edge.source, edge.target);
        merge(work, u, v);
        remaining -= 1;
    }
    // Both super-vertices see every crossing edge; count from one side.
    work.edge(0)
        .map(|edge| work.out_degree(edge.source))
        .unwrap_or(0)
}

/// Replaces `u` and `v` with a fresh vertex that inherits their edges, dropping the edges
/// that ran between them.
fn merge(work: &mut Graph<(), ()>, u: VertexId, v: VertexId) -> VertexId {
    let merged = work.add_vertex(());
    let mut incident: Vec<EdgeId> = [u, v]
        .into_iter()
        .flat_map(|x| work.out_edges(x).iter().chain(work.in_edges(x)).copied())
        .collect();
    incident.sort_unstable();
    incident.dedup();

    let remap = |x: VertexId| if x == u || x == v { merged } else { x };
    let mut collapsed = Vec::new();
    for e in incident {
        let Some(edge) = work.edge(e) else {
            continue;
        };
        let (source, target) = (remap(edge.source), remap(edge.target));
        if source == target {
            collapsed.push(e);
        } else if work.retarget_edge(e, source, target).is_err() {
            debug_assert!(false, "edge {e} vanished during contraction");
        }
    }
    remove_edges(work, collapsed);
    merged
}

/// Removes `edges`, highest id first so pending ids stay valid across swap-removal.
fn remove_edges(g: &mut Graph<(), ()>, mut edges: Vec<EdgeId>) {
    edges.sort_unstable_by(|a, b| b.cmp(a));
    for e in edges {
        if g.swap_remove_edge(e).is_err() {
            debug_assert!(false, "edge {e} vanished during removal");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphlib::Orientation;

    #[test]
    fn merge_drops_edges_between_the_pair() {
        let mut g: Graph<(), ()> = Graph::new(Orientation::Undirected);
        for _ in 0..3 {
            g.add_vertex(());
        }
        g.add_edge(0, 1, ()).unwrap();
        g.add_edge(1, 2, ()).unwrap();

        let merged = merge(&mut g, 0, 1);
        assert_eq!(merged, 3);
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.out_degree(merged), 1);
        assert_eq!(g.out_degree(0), 0);
        assert_eq!(g.out_degree(1), 0);
        assert_eq!(g.successors(2).collect::<Vec<_>>(), vec![merged]);
    }
}
