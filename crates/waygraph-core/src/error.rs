use thiserror::Error;

use crate::graph::VertexId;

/// Priority queue errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    /// `remove` was called on an empty queue.
    #[error("priority queue is empty")]
    Empty,
}

/// Graph construction and mutation errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// A vertex with this id already exists.
    #[error("vertex {0} already exists")]
    DuplicateVertex(VertexId),

    /// The id does not name a vertex in the graph.
    #[error("vertex {0} does not exist")]
    UnknownVertex(VertexId),

    /// Edge weights must be non-negative and not NaN.
    #[error("invalid weight {weight} on edge {from} -> {to}")]
    InvalidWeight {
        from: VertexId,
        to: VertexId,
        weight: f64,
    },
}
