//! Storage entries for [`Graph`](super::Graph).

use super::{EdgeId, VertexId};

#[derive(Debug, Clone)]
pub(in crate::graph) struct VertexEntry<V> {
    pub(in crate::graph) label: V,
    pub(in crate::graph) out_edges: Vec<EdgeId>,
    pub(in crate::graph) in_edges: Vec<EdgeId>,
}

impl<V> VertexEntry<V> {
    pub(in crate::graph) fn new(label: V) -> Self {
        Self {
            label,
            out_edges: Vec::new(),
            in_edges: Vec::new(),
        }
    }
}

/// A directed edge record. Undirected graphs store one record per direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge<E> {
    pub source: VertexId,
    pub target: VertexId,
    pub label: E,
}

impl<E> Edge<E> {
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}
