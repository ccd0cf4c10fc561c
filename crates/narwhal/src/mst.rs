//! Minimum spanning trees over integer edge costs.

mod kruskal;
mod prim;

pub use kruskal::kruskal;
pub use prim::{PrimVertex, prim};

use crate::graphlib::EdgeId;
use crate::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpanningTree {
    /// Sum of the selected edge costs.
    pub cost: i64,
    pub edges: Vec<EdgeId>,
}

fn add_cost(total: i64, cost: i64) -> Result<i64> {
    total.checked_add(cost).ok_or(Error::CostOverflow)
}
