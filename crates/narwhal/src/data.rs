//! Supporting data structures.

pub mod disjoint_set;
pub mod indexed_heap;

pub use disjoint_set::DisjointSet;
pub use indexed_heap::{HeapIndex, HeapKey, IndexedMinHeap, NullIndex, PositionMap};
