use super::{SpanningTree, add_cost};
use crate::data::indexed_heap::{HeapKey, IndexedMinHeap, PositionMap};
use crate::graphlib::{EdgeId, Graph, VertexId};
use crate::{Error, Result, prepare};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrimVertex {
    /// Cheapest known edge cost connecting this vertex to the tree; `None` until an edge
    /// to the tree has been seen.
    pub cost: Option<i64>,
    pub via: Option<EdgeId>,
}

/// A queued vertex. Unreached vertices order after every reached one.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    vertex: VertexId,
    cost: Option<i64>,
}

impl HeapKey for Candidate {
    fn heap_key(&self) -> usize {
        self.vertex
    }
}

fn cheaper(a: &Candidate, b: &Candidate) -> bool {
    match (a.cost, b.cost) {
        (Some(x), Some(y)) => x < y,
        (Some(_), None) => true,
        (None, _) => false,
    }
}

/// Grows a minimum spanning tree from vertex 0.
///
/// Fails with [`Error::Disconnected`] when some vertex cannot be reached and with
/// [`Error::CostOverflow`] when the total does not fit in an `i64`. An empty graph has an
/// empty tree.
pub fn prim(g: &mut Graph<PrimVertex, i64>) -> Result<SpanningTree> {
    let n = g.vertex_count();
    let mut tree = SpanningTree::default();
    if n == 0 {
        return Ok(tree);
    }
    prepare(g, &[])?;
    g[0].cost = Some(0);

    let queued = g
        .vertices()
        .map(|(vertex, label)| Candidate {
            vertex,
            cost: label.cost,
        })
        .collect();
    let mut heap = IndexedMinHeap::from_vec(queued, cheaper, PositionMap::with_capacity(n));
    let mut processed = vec![false; n];
    let mut out = Vec::new();

    while !heap.is_empty() {
        let Candidate { vertex: v, cost } = heap.pop()?;
        let Some(cost) = cost else {
            return Err(Error::Disconnected { vertex: v });
        };
        processed[v] = true;
        tree.cost = add_cost(tree.cost, cost)?;
        if let Some(e) = g[v].via {
            tree.edges.push(e);
        }

        out.clear();
        out.extend(g.outgoing(v).map(|(id, edge)| (id, edge.target, edge.label)));
        for &(e, w, edge_cost) in &out {
            let label = &mut g[w];
            if processed[w] || label.cost.is_some_and(|known| edge_cost >= known) {
                continue;
            }
            label.cost = Some(edge_cost);
            label.via = Some(e);
            if let Some(position) = heap.index().position(w) {
                if let Some(entry) = heap.get_mut(position) {
                    entry.cost = Some(edge_cost);
                }
                heap.sift_up(position)?;
            }
        }
    }

    tracing::debug!(vertices = n, cost = tree.cost, "prim finished");
    Ok(tree)
}
