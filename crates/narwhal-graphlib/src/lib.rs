//! Graph container APIs used by `narwhal`.
//!
//! [`Graph`] is generic over a vertex label `V` and an edge label `E`; each algorithm in
//! `narwhal` picks the labels that carry its per-vertex / per-edge state. The [`io`]
//! module loads and stores graphs in the plain-text adjacency-list format.

mod error;
mod graph;
pub mod io;
mod value;

pub use error::{Error, Result};
pub use graph::{Edge, EdgeId, Graph, Orientation, VertexId};
pub use value::EdgeValue;
