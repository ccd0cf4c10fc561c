use crate::graph::{EdgeId, VertexId};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Bad graph format, expected: {expected}, actual: {actual:?}")]
    Format {
        expected: &'static str,
        actual: String,
    },

    #[error("vertex {id} is not in the graph")]
    VertexNotFound { id: VertexId },

    #[error("edge {id} is not in the graph")]
    EdgeNotFound { id: EdgeId },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
