//! A binary min-heap with an injected ordering and position tracking.
//!
//! Shortest-path and spanning-tree searches need decrease-key: lower the priority of an
//! element that is already queued and restore the heap property from its position. To
//! find that position the heap reports every placement to a [`HeapIndex`], which the
//! caller reads back through [`IndexedMinHeap::index`].

use crate::graphlib::VertexId;
use crate::{Error, Result};

/// Receives the position of every element the heap places or removes.
pub trait HeapIndex<T> {
    fn moved(&mut self, element: &T, position: usize);

    fn removed(&mut self, _element: &T) {}
}

/// Tracks nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullIndex;

impl<T> HeapIndex<T> for NullIndex {
    fn moved(&mut self, _element: &T, _position: usize) {}
}

impl<T, F> HeapIndex<T> for F
where
    F: FnMut(&T, usize),
{
    fn moved(&mut self, element: &T, position: usize) {
        self(element, position)
    }
}

/// Dense integer key of a heap element, used by [`PositionMap`].
pub trait HeapKey {
    fn heap_key(&self) -> usize;
}

/// Maps element keys to their current heap position.
#[derive(Debug, Clone, Default)]
pub struct PositionMap {
    positions: Vec<Option<usize>>,
}

impl PositionMap {
    pub fn with_capacity(keys: usize) -> Self {
        Self {
            positions: vec![None; keys],
        }
    }

    /// Current position of `key`, or `None` once it has been popped (or was never pushed).
    pub fn position(&self, key: usize) -> Option<usize> {
        self.positions.get(key).copied().flatten()
    }

    fn slot(&mut self, key: usize) -> &mut Option<usize> {
        if key >= self.positions.len() {
            self.positions.resize(key + 1, None);
        }
        &mut self.positions[key]
    }
}

impl<T: HeapKey> HeapIndex<T> for PositionMap {
    fn moved(&mut self, element: &T, position: usize) {
        *self.slot(element.heap_key()) = Some(position);
    }

    fn removed(&mut self, element: &T) {
        *self.slot(element.heap_key()) = None;
    }
}

/// A vertex queued with an integer priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexPriority {
    pub vertex: VertexId,
    pub priority: i64,
}

impl HeapKey for VertexPriority {
    fn heap_key(&self) -> usize {
        self.vertex
    }
}

pub fn by_priority(a: &VertexPriority, b: &VertexPriority) -> bool {
    a.priority < b.priority
}

pub fn natural_order<T: Ord>(a: &T, b: &T) -> bool {
    a < b
}

/// Binary min-heap ordered by the strict less-than predicate `less`.
///
/// The element at position 0 is never greater than any other element. Ties are broken
/// arbitrarily.
pub struct IndexedMinHeap<T, C, I = NullIndex> {
    heap: Vec<T>,
    less: C,
    index: I,
}

impl<T, C, I> IndexedMinHeap<T, C, I>
where
    C: Fn(&T, &T) -> bool,
    I: HeapIndex<T>,
{
    pub fn new(less: C, index: I) -> Self {
        Self {
            heap: Vec::new(),
            less,
            index,
        }
    }

    /// Heapifies `elements` in linear time.
    pub fn from_vec(elements: Vec<T>, less: C, index: I) -> Self {
        let mut heap = Self {
            heap: elements,
            less,
            index,
        };
        for (position, element) in heap.heap.iter().enumerate() {
            heap.index.moved(element, position);
        }
        for position in (0..heap.heap.len() / 2).rev() {
            heap.sift_down(position);
        }
        heap
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn top(&self) -> Option<&T> {
        self.heap.first()
    }

    pub fn index(&self) -> &I {
        &self.index
    }

    pub fn push(&mut self, element: T) {
        let position = self.heap.len();
        self.index.moved(&element, position);
        self.heap.push(element);
        self.bubble_up(position);
    }

    pub fn pop(&mut self) -> Result<T> {
        let Some(last) = self.heap.len().checked_sub(1) else {
            return Err(Error::EmptyHeap);
        };
        self.heap.swap(0, last);
        let Some(element) = self.heap.pop() else {
            return Err(Error::EmptyHeap);
        };
        self.index.removed(&element);
        if !self.heap.is_empty() {
            self.index.moved(&self.heap[0], 0);
            self.sift_down(0);
        }
        Ok(element)
    }

    /// Mutable access to the element at `position`.
    ///
    /// Only *decreasing* its key is supported; follow up with [`Self::sift_up`].
    pub fn get_mut(&mut self, position: usize) -> Option<&mut T> {
        self.heap.get_mut(position)
    }

    /// Restores the heap property after the element at `position` had its key decreased.
    pub fn sift_up(&mut self, position: usize) -> Result<()> {
        if position >= self.heap.len() {
            return Err(Error::HeapPosition {
                position,
                len: self.heap.len(),
            });
        }
        self.bubble_up(position);
        Ok(())
    }

    fn bubble_up(&mut self, mut position: usize) {
        while position > 0 {
            let parent = (position - 1) / 2;
            if !(self.less)(&self.heap[position], &self.heap[parent]) {
                break;
            }
            self.swap(position, parent);
            position = parent;
        }
    }

    fn sift_down(&mut self, mut position: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * position + 1;
            let right = left + 1;
            let mut smallest = position;
            if left < len && (self.less)(&self.heap[left], &self.heap[smallest]) {
                smallest = left;
            }
            if right < len && (self.less)(&self.heap[right], &self.heap[smallest]) {
                smallest = right;
            }
            if smallest == position {
                return;
            }
            self.swap(position, smallest);
            position = smallest;
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.index.moved(&self.heap[a], a);
        self.index.moved(&self.heap[b], b);
    }
}

impl<T, C, I> std::fmt::Debug for IndexedMinHeap<T, C, I>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndexedMinHeap")
            .field("heap", &self.heap)
            .finish_non_exhaustive()
    }
}
