use std::cmp::Ordering;

use waygraph_core::{PriorityQueue, QueueError, VertexId};

// ---------------------------------------------------------------------------
// Per-vertex search record
// ---------------------------------------------------------------------------

/// Membership of a discovered vertex. Undiscovered vertices have no record.
/// Transitions only go `Frontier -> Settled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum State {
    Frontier,
    Settled,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Record {
    /// Best known cost from the start.
    pub(crate) g: f64,
    pub(crate) parent: Option<VertexId>,
    pub(crate) state: State,
}

impl Record {
    pub(crate) fn discovered(g: f64, parent: Option<VertexId>) -> Self {
        Self {
            g,
            parent,
            state: State::Frontier,
        }
    }
}

// ---------------------------------------------------------------------------
// Frontier entries
// ---------------------------------------------------------------------------

/// Queue entry ordered by `f`, then by push order, so equal-`f` entries
/// leave the queue first-in first-out.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Entry {
    pub(crate) id: VertexId,
    pub(crate) f: f64,
    seq: u64,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // PriorityQueue is a min-heap, so this is the natural order.
        self.f
            .total_cmp(&other.f)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Search frontier. A vertex may sit in the queue several times with
/// different costs since there is no decrease-key; searches skip the stale
/// copies when they surface.
pub(crate) struct Frontier {
    queue: PriorityQueue<Entry>,
    seq: u64,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self {
            queue: PriorityQueue::new(),
            seq: 0,
        }
    }

    pub(crate) fn push(&mut self, id: VertexId, f: f64) {
        let seq = self.seq;
        self.seq += 1;
        self.queue.add(Entry { id, f, seq });
    }

    /// Stage seed entries without heap maintenance; call `seal` afterwards.
    pub(crate) fn push_seed(&mut self, id: VertexId, f: f64) {
        let seq = self.seq;
        self.seq += 1;
        self.queue.add_freely(Entry { id, f, seq });
    }

    pub(crate) fn seal(&mut self) {
        self.queue.build_heap();
    }

    pub(crate) fn pop(&mut self) -> Result<Entry, QueueError> {
        self.queue.remove()
    }
}
