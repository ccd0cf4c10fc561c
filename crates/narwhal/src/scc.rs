//! Strongly connected components (Kosaraju's two-pass algorithm).
//!
//! The first pass walks the *reverse* relation and stamps every vertex with a finish time.
//! The second pass walks the forward relation, starting roots in decreasing finish time;
//! every vertex reached from a root belongs to that root's component and records it as
//! its leader.

use crate::graphlib::{Graph, VertexId};
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SccVertex {
    pub explored: bool,
    pub finish_time: Option<usize>,
    pub leader: Option<VertexId>,
}

/// How depth-first search is driven. Both produce the same labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DfsStrategy {
    /// Native recursion. Deep graphs can exhaust the thread stack.
    Recursive,
    /// An explicit stack of `(vertex, next edge)` frames.
    #[default]
    Iterative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Relation {
    Forward,
    Reverse,
}

/// Component sizes keyed by leader vertex.
pub fn kosaraju<E>(g: &mut Graph<SccVertex, E>) -> FxHashMap<VertexId, usize> {
    kosaraju_with(g, DfsStrategy::default())
}

pub fn kosaraju_with<E>(
    g: &mut Graph<SccVertex, E>,
    strategy: DfsStrategy,
) -> FxHashMap<VertexId, usize> {
    debug_assert!(g.is_directed(), "kosaraju expects a directed graph");
    g.reset_vertices();

    let mut clock = FinishClock::default();
    for v in g.vertex_ids().rev() {
        if !g[v].explored {
            dfs(g, v, Relation::Reverse, None, &mut clock, strategy);
        }
    }

    g.for_each_vertex_mut(|_, label| label.explored = false);
    for v in clock.order.into_iter().rev() {
        if !g[v].explored {
            dfs(g, v, Relation::Forward, Some(v), &mut FinishClock::default(), strategy);
        }
    }

    let mut sizes = FxHashMap::default();
    for (_, label) in g.vertices() {
        if let Some(leader) = label.leader {
            *sizes.entry(leader).or_insert(0) += 1;
        }
    }
    tracing::debug!(
        vertices = g.vertex_count(),
        components = sizes.len(),
        ?strategy,
        "kosaraju finished"
    );
    sizes
}

/// Members of each component keyed by leader, in increasing id order.
pub fn components<E>(g: &mut Graph<SccVertex, E>) -> FxHashMap<VertexId, Vec<VertexId>> {
    kosaraju(g);
    let mut members: FxHashMap<VertexId, Vec<VertexId>> = FxHashMap::default();
    for (v, label) in g.vertices() {
        if let Some(leader) = label.leader {
            members.entry(leader).or_default().push(v);
        }
    }
    members
}

#[derive(Debug, Default)]
struct FinishClock {
    /// `order[t]` finished at time `t`.
    order: Vec<VertexId>,
}

impl FinishClock {
    fn finish(&mut self, label: &mut SccVertex, v: VertexId) {
        label.finish_time = Some(self.order.len());
        self.order.push(v);
    }
}

fn dfs<E>(
    g: &mut Graph<SccVertex, E>,
    start: VertexId,
    relation: Relation,
    leader: Option<VertexId>,
    clock: &mut FinishClock,
    strategy: DfsStrategy,
) {
    match strategy {
        DfsStrategy::Recursive => dfs_recursive(g, start, relation, leader, clock),
        DfsStrategy::Iterative => dfs_iterative(g, start, relation, leader, clock),
    }
}

fn visit<E>(g: &mut Graph<SccVertex, E>, v: VertexId, leader: Option<VertexId>) {
    let label = &mut g[v];
    label.explored = true;
    if leader.is_some() {
        label.leader = leader;
    }
}

/// The `i`-th neighbor of `v` under `relation`.
fn neighbor<E>(
    g: &Graph<SccVertex, E>,
    v: VertexId,
    i: usize,
    relation: Relation,
) -> Option<VertexId> {
    let edges = match relation {
        Relation::Forward => g.out_edges(v),
        Relation::Reverse => g.in_edges(v),
    };
    let edge = g.edge(*edges.get(i)?)?;
    Some(match relation {
        Relation::Forward => edge.target,
        Relation::Reverse => edge.source,
    })
}

fn dfs_recursive<E>(
    g: &mut Graph<SccVertex, E>,
    v: VertexId,
    relation: Relation,
    leader: Option<VertexId>,
    clock: &mut FinishClock,
) {
    visit(g, v, leader);
    let mut i = 0;
    while let Some(w) = neighbor(g, v, i, relation) {
        i += 1;
        if !g[w].explored {
            dfs_recursive(g, w, relation, leader, clock);
        }
    }
    if relation == Relation::Reverse {
        clock.finish(&mut g[v], v);
    }
}

fn dfs_iterative<E>(
    g: &mut Graph<SccVertex, E>,
    start: VertexId,
    relation: Relation,
    leader: Option<VertexId>,
    clock: &mut FinishClock,
) {
    visit(g, start, leader);
    let mut stack: Vec<(VertexId, usize)> = vec![(start, 0)];
    while let Some(frame) = stack.last_mut() {
        let (v, i) = *frame;
        match neighbor(g, v, i, relation) {
            Some(w) => {
                frame.1 += 1;
                if !g[w].explored {
                    visit(g, w, leader);
                    stack.push((w, 0));
                }
            }
            None => {
                stack.pop();
                if relation == Relation::Reverse {
                    clock.finish(&mut g[v], v);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphlib::Orientation;

    #[test]
    fn finish_times_cover_every_vertex_once() {
        let mut g: Graph<SccVertex, ()> = Graph::new(Orientation::Directed);
        for _ in 0..4 {
            g.add_vertex(SccVertex::default());
        }
        g.add_edge(0, 1, ()).unwrap();
        g.add_edge(1, 2, ()).unwrap();
        g.add_edge(2, 0, ()).unwrap();

        kosaraju(&mut g);
        let mut times: Vec<usize> = g.vertices().filter_map(|(_, l)| l.finish_time).collect();
        times.sort_unstable();
        assert_eq!(times, vec![0, 1, 2, 3]);
    }
}
