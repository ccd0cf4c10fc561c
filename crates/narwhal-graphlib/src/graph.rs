//! The arena-backed `Graph` container.
//!
//! Vertices and edges are stored in two arenas addressed by dense integer ids. Edges
//! refer to their endpoints by id only, so restructuring (e.g. min-cut contraction) is
//! index reassignment. Every vertex keeps an outgoing and an incoming edge index; the
//! incoming index is what reverse-relation traversals walk.

mod entries;
mod options;

pub use entries::Edge;
pub use options::Orientation;

use crate::error::{Error, Result};
use std::collections::TryReserveError;
use entries::VertexEntry;
use std::ops::{Index, IndexMut, Range};

pub type VertexId = usize;
pub type EdgeId = usize;

pub struct Graph<V, E> {
    orientation: Orientation,
    vertices: Vec<VertexEntry<V>>,
    edges: Vec<Edge<E>>,
}

impl<V, E> Graph<V, E> {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn with_capacity(orientation: Orientation, vertices: usize, edges: usize) -> Self {
        Self {
            orientation,
            vertices: Vec::with_capacity(vertices),
            edges: Vec::with_capacity(edges),
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn is_directed(&self) -> bool {
        self.orientation == Orientation::Directed
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Reserves room for `additional` vertices, reporting allocation failure instead of
    /// aborting.
    pub fn try_reserve_vertices(
        &mut self,
        additional: usize,
    ) -> std::result::Result<(), TryReserveError> {
        self.vertices.try_reserve_exact(additional)
    }

    pub fn has_vertex(&self, id: VertexId) -> bool {
        id < self.vertices.len()
    }

    pub fn check_vertex(&self, id: VertexId) -> Result<()> {
        if self.has_vertex(id) {
            Ok(())
        } else {
            Err(Error::VertexNotFound { id })
        }
    }

    pub fn vertex(&self, id: VertexId) -> Option<&V> {
        self.vertices.get(id).map(|v| &v.label)
    }

    pub fn vertex_mut(&mut self, id: VertexId) -> Option<&mut V> {
        self.vertices.get_mut(id).map(|v| &mut v.label)
    }

    pub fn vertex_ids(&self) -> Range<VertexId> {
        0..self.vertices.len()
    }

    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &V)> {
        self.vertices.iter().enumerate().map(|(id, v)| (id, &v.label))
    }

    pub fn for_each_vertex_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(VertexId, &mut V),
    {
        for (id, v) in self.vertices.iter_mut().enumerate() {
            f(id, &mut v.label);
        }
    }

    /// Appends a vertex and returns its id, which is always the previous vertex count.
    pub fn add_vertex(&mut self, label: V) -> VertexId {
        let id = self.vertices.len();
        self.vertices.push(VertexEntry::new(label));
        id
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge<E>> {
        self.edges.get(id)
    }

    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge<E>)> {
        self.edges.iter().enumerate()
    }

    pub fn out_edges(&self, v: VertexId) -> &[EdgeId] {
        self.vertices
            .get(v)
            .map(|entry| entry.out_edges.as_slice())
            .unwrap_or_default()
    }

    pub fn in_edges(&self, v: VertexId) -> &[EdgeId] {
        self.vertices
            .get(v)
            .map(|entry| entry.in_edges.as_slice())
            .unwrap_or_default()
    }

    pub fn out_degree(&self, v: VertexId) -> usize {
        self.out_edges(v).len()
    }

    pub fn successors(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.out_edges(v).iter().map(|&e| self.edges[e].target)
    }

    pub fn predecessors(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.in_edges(v).iter().map(|&e| self.edges[e].source)
    }

    /// Outgoing edge records of `v` together with their ids.
    pub fn outgoing(&self, v: VertexId) -> impl Iterator<Item = (EdgeId, &Edge<E>)> + '_ {
        self.out_edges(v).iter().map(|&e| (e, &self.edges[e]))
    }

    fn link(&mut self, source: VertexId, target: VertexId, label: E) -> EdgeId {
        let id = self.edges.len();
        self.edges.push(Edge {
            source,
            target,
            label,
        });
        self.vertices[source].out_edges.push(id);
        self.vertices[target].in_edges.push(id);
        id
    }

    /// Moves edge `e` onto new endpoints, keeping its id and label.
    pub fn retarget_edge(&mut self, e: EdgeId, source: VertexId, target: VertexId) -> Result<()> {
        self.check_vertex(source)?;
        self.check_vertex(target)?;
        let Some(edge) = self.edges.get(e) else {
            return Err(Error::EdgeNotFound { id: e });
        };
        let (old_source, old_target) = (edge.source, edge.target);
        if old_source != source {
            unlink(&mut self.vertices[old_source].out_edges, e);
            self.vertices[source].out_edges.push(e);
        }
        if old_target != target {
            unlink(&mut self.vertices[old_target].in_edges, e);
            self.vertices[target].in_edges.push(e);
        }
        let edge = &mut self.edges[e];
        edge.source = source;
        edge.target = target;
        Ok(())
    }

    /// Removes edge `e` by swapping the last edge into its slot.
    ///
    /// The edge that previously had the highest id is renumbered to `e`, so edge ids are
    /// not stable across this call.
    pub fn swap_remove_edge(&mut self, e: EdgeId) -> Result<Edge<E>> {
        let Some(edge) = self.edges.get(e) else {
            return Err(Error::EdgeNotFound { id: e });
        };
        let (source, target) = (edge.source, edge.target);
        unlink(&mut self.vertices[source].out_edges, e);
        unlink(&mut self.vertices[target].in_edges, e);

        let last = self.edges.len() - 1;
        if e != last {
            let moved = &self.edges[last];
            let (moved_source, moved_target) = (moved.source, moved.target);
            relink(&mut self.vertices[moved_source].out_edges, last, e);
            relink(&mut self.vertices[moved_target].in_edges, last, e);
        }
        Ok(self.edges.swap_remove(e))
    }

    pub fn map<V2, E2, FV, FE>(&self, mut fv: FV, mut fe: FE) -> Graph<V2, E2>
    where
        FV: FnMut(VertexId, &V) -> V2,
        FE: FnMut(EdgeId, &E) -> E2,
    {
        Graph {
            orientation: self.orientation,
            vertices: self
                .vertices
                .iter()
                .enumerate()
                .map(|(id, v)| VertexEntry {
                    label: fv(id, &v.label),
                    out_edges: v.out_edges.clone(),
                    in_edges: v.in_edges.clone(),
                })
                .collect(),
            edges: self
                .edges
                .iter()
                .enumerate()
                .map(|(id, e)| Edge {
                    source: e.source,
                    target: e.target,
                    label: fe(id, &e.label),
                })
                .collect(),
        }
    }
}

impl<V, E> Graph<V, E>
where
    E: Clone,
{
    /// Inserts an edge between two existing vertices and returns the id of the `u -> v`
    /// record. Undirected graphs also insert the mirrored `v -> u` record with the next id.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId, label: E) -> Result<EdgeId> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        let id = match self.orientation {
            Orientation::Directed => self.link(u, v, label),
            Orientation::Undirected => {
                let id = self.link(u, v, label.clone());
                self.link(v, u, label);
                id
            }
        };
        Ok(id)
    }
}

impl<V, E> Graph<V, E>
where
    V: Default,
{
    pub fn reset_vertices(&mut self) {
        self.for_each_vertex_mut(|_, label| *label = V::default());
    }
}

/// Panics when `id` is out of range, like slice indexing.
impl<V, E> Index<VertexId> for Graph<V, E> {
    type Output = V;

    fn index(&self, id: VertexId) -> &V {
        &self.vertices[id].label
    }
}

impl<V, E> IndexMut<VertexId> for Graph<V, E> {
    fn index_mut(&mut self, id: VertexId) -> &mut V {
        &mut self.vertices[id].label
    }
}

impl<V, E> Default for Graph<V, E> {
    fn default() -> Self {
        Self::new(Orientation::default())
    }
}

impl<V, E> Clone for Graph<V, E>
where
    V: Clone,
    E: Clone,
{
    fn clone(&self) -> Self {
        Self {
            orientation: self.orientation,
            vertices: self.vertices.clone(),
            edges: self.edges.clone(),
        }
    }

    // Reuses the existing allocations.
    fn clone_from(&mut self, source: &Self) {
        self.orientation = source.orientation;
        self.vertices.clone_from(&source.vertices);
        self.edges.clone_from(&source.edges);
    }
}

impl<V, E> std::fmt::Debug for Graph<V, E>
where
    V: std::fmt::Debug,
    E: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("orientation", &self.orientation)
            .field("vertices", &self.vertices)
            .field("edges", &self.edges)
            .finish()
    }
}

fn unlink(list: &mut Vec<EdgeId>, e: EdgeId) {
    if let Some(pos) = list.iter().position(|&x| x == e) {
        list.remove(pos);
    }
}

fn relink(list: &mut [EdgeId], from: EdgeId, to: EdgeId) {
    if let Some(slot) = list.iter_mut().find(|x| **x == from) {
        *slot = to;
    }
}
