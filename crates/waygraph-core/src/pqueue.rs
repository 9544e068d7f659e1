//! Binary min-heap priority queue.
//!
//! Items are ordered by their [`Ord`] implementation; the smallest item is
//! removed first. Items that compare equal come out in an unspecified order,
//! so callers that need a deterministic tie-break must encode it in the item
//! (the A* frontier does this with an insertion counter).
//!
//! Besides the usual incremental [`add`](PriorityQueue::add) path, the queue
//! supports a bulk load: stage items with
//! [`add_freely`](PriorityQueue::add_freely), then restore the heap property
//! once with [`build_heap`](PriorityQueue::build_heap) in O(n).

use crate::error::QueueError;

/// A min-ordered priority queue backed by an implicit binary heap.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    heap: Vec<T>,
    /// Items were appended by `add_freely` and `build_heap` has not run since.
    staged: bool,
}

impl<T: Ord> PriorityQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            heap: Vec::new(),
            staged: false,
        }
    }

    /// Create an empty queue with room for `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            staged: false,
        }
    }

    /// Number of items in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the queue holds no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Discard every item.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.staged = false;
    }

    /// Insert `item`, restoring the heap property before returning.
    pub fn add(&mut self, item: T) {
        self.heap.push(item);
        let last = self.heap.len() - 1;
        self.sift_up(last);
    }

    /// Insert every item of `items` in iteration order, as repeated
    /// [`add`](Self::add) calls would.
    pub fn add_range<I: IntoIterator<Item = T>>(&mut self, items: I) {
        for item in items {
            self.add(item);
        }
    }

    /// Append `item` to the backing storage without restoring the heap
    /// property.
    ///
    /// The queue is unordered until [`build_heap`](Self::build_heap) runs.
    pub fn add_freely(&mut self, item: T) {
        self.heap.push(item);
        self.staged = true;
    }

    /// Restore the heap property over the whole backing storage in O(n),
    /// sifting down from the last internal node to the root.
    pub fn build_heap(&mut self) {
        for idx in (0..self.heap.len() / 2).rev() {
            self.sift_down(idx);
        }
        self.staged = false;
    }

    /// Remove and return the smallest item.
    ///
    /// Fails with [`QueueError::Empty`] when there is nothing to remove.
    /// Staged items are heapified first.
    pub fn remove(&mut self) -> Result<T, QueueError> {
        if self.heap.is_empty() {
            return Err(QueueError::Empty);
        }
        if self.staged {
            log::warn!(
                "remove() on a queue with staged items; running build_heap over {} items",
                self.heap.len()
            );
            self.build_heap();
        }

        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let min = self.heap.pop().ok_or(QueueError::Empty)?;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Ok(min)
    }

    /// The smallest item, if any, without removing it.
    ///
    /// With staged items pending this scans the storage instead of reading
    /// the root.
    pub fn peek(&self) -> Option<&T> {
        if self.staged {
            log::warn!("peek() on a queue with staged items; scanning for the minimum");
            return self.heap.iter().min();
        }
        self.heap.first()
    }

    /// Whether every non-root item compares `>=` its parent.
    pub fn is_heap(&self) -> bool {
        (1..self.heap.len()).all(|i| self.heap[(i - 1) / 2] <= self.heap[i])
    }

    /// The backing storage in heap order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.heap
    }

    /// Drain the queue into a vector, smallest first.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.heap.len());
        while let Ok(item) = self.remove() {
            out.push(item);
        }
        out
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.heap[parent] <= self.heap[idx] {
                break;
            }
            self.heap.swap(parent, idx);
            idx = parent;
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.heap.len();
        loop {
            let left = idx * 2 + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len && self.heap[right] < self.heap[left] {
                right
            } else {
                left
            };
            if self.heap[idx] <= self.heap[child] {
                break;
            }
            self.heap.swap(idx, child);
            idx = child;
        }
    }
}

impl<T: Ord> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for PriorityQueue<T> {
    /// Bulk load: stage every item, then heapify once.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        for item in iter {
            queue.add_freely(item);
        }
        queue.build_heap();
        queue
    }
}

impl<T: Ord> Extend<T> for PriorityQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_range(iter);
    }
}
