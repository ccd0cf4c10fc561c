//! Single-source shortest paths over non-negative integer edge lengths.

use crate::data::indexed_heap::{IndexedMinHeap, PositionMap, VertexPriority, by_priority};
use crate::graphlib::{Graph, VertexId};
use crate::{Result, prepare};

/// Distance of a vertex not (yet) reached from the source.
pub const INFINITY: i64 = i64::MAX;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DijkstraVertex {
    pub distance: i64,
    /// Predecessor on a shortest path from the source.
    pub parent: Option<VertexId>,
}

impl Default for DijkstraVertex {
    fn default() -> Self {
        Self {
            distance: INFINITY,
            parent: None,
        }
    }
}

/// Labels every vertex with its shortest distance from `source` and a parent pointer.
///
/// Unreachable vertices keep [`INFINITY`]. Negative edge lengths are not supported.
pub fn shortest_paths(g: &mut Graph<DijkstraVertex, i64>, source: VertexId) -> Result<()> {
    prepare(g, &[source])?;
    g[source].distance = 0;

    let n = g.vertex_count();
    let queued = g
        .vertices()
        .map(|(vertex, label)| VertexPriority {
            vertex,
            priority: label.distance,
        })
        .collect();
    let mut heap = IndexedMinHeap::from_vec(queued, by_priority, PositionMap::with_capacity(n));
    let mut processed = vec![false; n];
    let mut out = Vec::new();

    while !heap.is_empty() {
        let VertexPriority {
            vertex: v,
            priority: dist,
        } = heap.pop()?;
        processed[v] = true;
        if dist == INFINITY {
            // Everything still queued is unreachable.
            break;
        }

        out.clear();
        out.extend(g.outgoing(v).map(|(_, edge)| (edge.target, edge.label)));
        for &(w, length) in &out {
            if processed[w] {
                continue;
            }
            let candidate = dist.saturating_add(length);
            let label = &mut g[w];
            if candidate >= label.distance {
                continue;
            }
            label.distance = candidate;
            label.parent = Some(v);
            if let Some(position) = heap.index().position(w) {
                if let Some(entry) = heap.get_mut(position) {
                    entry.priority = candidate;
                }
                heap.sift_up(position)?;
            }
        }
    }

    tracing::debug!(
        source,
        vertices = n,
        edges = g.edge_count(),
        "shortest paths computed"
    );
    Ok(())
}

/// Per-vertex distances from the last [`shortest_paths`] run; `None` for unreachable.
pub fn distances(g: &Graph<DijkstraVertex, i64>) -> Vec<Option<i64>> {
    g.vertices()
        .map(|(_, label)| (label.distance != INFINITY).then_some(label.distance))
        .collect()
}

/// Vertices on a shortest path from the last source to `target`, both ends included.
pub fn path_to(g: &Graph<DijkstraVertex, i64>, target: VertexId) -> Option<Vec<VertexId>> {
    let label = g.vertex(target)?;
    if label.distance == INFINITY {
        return None;
    }
    let mut path = vec![target];
    let mut current = label.parent;
    while let Some(v) = current {
        if path.len() > g.vertex_count() {
            return None;
        }
        path.push(v);
        current = g.vertex(v)?.parent;
    }
    path.reverse();
    Some(path)
}
