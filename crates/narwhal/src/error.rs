use crate::graphlib::{self, VertexId};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Graph(#[from] graphlib::Error),
    #[error("There are no more elements in the heap")]
    EmptyHeap,
    #[error("heap position {position} is out of range for a heap of {len} elements")]
    HeapPosition { position: usize, len: usize },
    #[error("graph is disconnected: vertex {vertex} is unreachable from vertex 0")]
    Disconnected { vertex: VertexId },
    #[error("spanning tree cost overflows i64")]
    CostOverflow,
}
