use super::{SpanningTree, add_cost};
use crate::Result;
use crate::data::DisjointSet;
use crate::graphlib::Graph;

/// Minimum spanning forest by ascending edge cost.
///
/// Equal-cost edges are considered in id order. On a disconnected graph the result spans
/// each component separately. Fails with [`crate::Error::CostOverflow`] when the total
/// does not fit in an `i64`.
pub fn kruskal<V, E>(g: &Graph<V, E>) -> Result<SpanningTree>
where
    E: Copy + Into<i64>,
{
    let mut by_cost: Vec<_> = g.edges().collect();
    by_cost.sort_by_key(|(_, edge)| Into::<i64>::into(edge.label));

    let mut sets = DisjointSet::new(g.vertex_count());
    let mut tree = SpanningTree::default();
    for (id, edge) in by_cost {
        if sets.union(edge.source, edge.target) {
            tree.cost = add_cost(tree.cost, edge.label.into())?;
            tree.edges.push(id);
        }
        if sets.set_count() <= 1 {
            break;
        }
    }

    tracing::debug!(
        vertices = g.vertex_count(),
        components = sets.set_count(),
        cost = tree.cost,
        "kruskal finished"
    );
    Ok(tree)
}
