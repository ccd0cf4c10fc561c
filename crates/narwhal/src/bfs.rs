//! Breadth-first traversal and unweighted shortest-path distance.

use crate::graphlib::{Graph, VertexId};
use crate::{Result, prepare};
use std::collections::VecDeque;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BfsVertex {
    pub explored: bool,
    /// Hops from the start vertex, once reached.
    pub distance: Option<usize>,
}

/// Marks every vertex reachable from `start` as explored, recording hop distances.
///
/// Returns the number of vertices reached, `start` included.
pub fn traverse<E>(g: &mut Graph<BfsVertex, E>, start: VertexId) -> Result<usize> {
    prepare(g, &[start])?;
    let reached = search(g, start, None);
    tracing::debug!(start, reached, "bfs traversal finished");
    Ok(reached)
}

/// Number of edges on a shortest path from `start` to `end`, or `None` when `end` is
/// unreachable.
pub fn distance<E>(
    g: &mut Graph<BfsVertex, E>,
    start: VertexId,
    end: VertexId,
) -> Result<Option<usize>> {
    prepare(g, &[start, end])?;
    search(g, start, Some(end));
    Ok(g[end].distance)
}

fn search<E>(g: &mut Graph<BfsVertex, E>, start: VertexId, end: Option<VertexId>) -> usize {
    g[start] = BfsVertex {
        explored: true,
        distance: Some(0),
    };
    let mut reached = 1;
    let mut queue = VecDeque::from([(start, 0)]);
    let mut next = Vec::new();

    while let Some((v, dist)) = queue.pop_front() {
        if end == Some(v) {
            break;
        }
        next.clear();
        next.extend(g.successors(v));
        for &w in &next {
            let label = &mut g[w];
            if label.explored {
                continue;
            }
            label.explored = true;
            label.distance = Some(dist + 1);
            reached += 1;
            queue.push_back((w, dist + 1));
        }
    }
    reached
}
