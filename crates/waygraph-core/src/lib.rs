//! **waygraph-core**: graph and frontier data structures for pathfinding.
//!
//! This crate provides the foundational types used across the *waygraph*
//! crates: a directed weighted [`Graph`] with arbitrary per-vertex payloads,
//! a binary-heap [`PriorityQueue`] with both incremental and bulk
//! construction, and the planar [`Vec2`] payload used by the built-in
//! heuristics and grid generators.
//!
//! Everything here is single-threaded and synchronous. A `Graph` has no
//! internal synchronization; callers that mutate a shared graph must
//! serialize mutation against searches running on it.

pub mod error;
pub mod geom;
pub mod graph;
pub mod pqueue;

pub use error::{GraphError, QueueError};
pub use geom::{Coords, Vec2};
pub use graph::{Edge, Graph, Vertex, VertexId};
pub use pqueue::PriorityQueue;
