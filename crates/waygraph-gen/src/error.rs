use thiserror::Error;
use waygraph_core::GraphError;

/// Grid generation errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenError {
    /// The lattice does not fit in the vertex id space starting at `first_id`.
    #[error("a {columns}x{rows} grid starting at id {first_id} overflows the id space")]
    TooManyVertices {
        columns: usize,
        rows: usize,
        first_id: u32,
    },

    #[error(transparent)]
    Graph(#[from] GraphError),
}
