use thiserror::Error;
use waygraph_core::VertexId;

/// Reasons a path search produces no path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The start id does not name a vertex. Reported before any search work.
    #[error("start vertex {0} does not exist")]
    UnknownStart(VertexId),

    /// The goal id does not name a vertex. Reported before any search work.
    #[error("goal vertex {0} does not exist")]
    UnknownGoal(VertexId),

    /// The goal is not reachable from the start.
    #[error("no path from {start} to {goal}")]
    NotFound { start: VertexId, goal: VertexId },

    /// The configured expansion cap was hit before the goal was reached.
    #[error("search gave up after expanding {limit} vertices")]
    ExpansionLimit { limit: usize },

    /// An edge names a vertex that is not in the graph.
    #[error("edge {from} -> {to} points at a missing vertex")]
    DanglingEdge { from: VertexId, to: VertexId },
}

impl SearchError {
    /// Whether the search ran and simply found no path, as opposed to being
    /// given bad input or a corrupt graph.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::ExpansionLimit { .. })
    }
}
