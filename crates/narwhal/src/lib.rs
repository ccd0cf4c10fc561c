//! Classic graph algorithms over [`narwhal_graphlib::Graph`].
//!
//! Algorithms that need per-vertex bookkeeping take a graph whose vertex label *is* that
//! bookkeeping (`BfsVertex`, `DijkstraVertex`, ...). Labels are reset to their defaults at
//! the start of each run, so the same graph can be queried repeatedly.

pub use narwhal_graphlib as graphlib;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod bfs;
pub mod data;
pub mod dijkstra;
mod error;
pub mod min_cut;
pub mod mst;
pub mod scc;

pub use error::{Error, Result};

use crate::graphlib::{Graph, VertexId};

/// Resets every vertex label and validates that each of `ids` names a vertex.
pub(crate) fn prepare<V: Default, E>(g: &mut Graph<V, E>, ids: &[VertexId]) -> Result<()> {
    for &id in ids {
        g.check_vertex(id)?;
    }
    g.reset_vertices();
    Ok(())
}
