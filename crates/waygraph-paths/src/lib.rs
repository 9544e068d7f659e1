//! Shortest-path search over [`waygraph_core::Graph`].
//!
//! - **A\*** point-to-point search ([`find_path`], [`PathSearch`])
//! - **Dijkstra** multi-source distance maps ([`dijkstra_map`], [`dijkstra_costs`])
//!
//! A* is parameterized by a [`Heuristic`]. The three built-ins ([`zero`],
//! [`manhattan`], [`euclidean`]) are plain functions and are also
//! selectable by name through [`Builtin`]; any `Fn(&T, &T) -> f64` works
//! too. With [`zero`] the search degrades to uniform-cost search.
//!
//! The frontier is a [`waygraph_core::PriorityQueue`] without decrease-key:
//! improving a vertex's cost pushes a fresh entry and the superseded one is
//! skipped when it surfaces. Edge weights must be non-negative.
//!
//! Searches are synchronous and run to completion in one call. Use
//! [`SearchConfig::max_expanded`] to bound the work a single search may do.

mod astar;
mod config;
mod dijkstra;
mod error;
mod frontier;
mod heuristic;
mod path;
mod traits;

pub use astar::{PathSearch, SearchStats, find_path, find_path_with};
pub use config::SearchConfig;
pub use dijkstra::{dijkstra_costs, dijkstra_map};
pub use error::SearchError;
pub use heuristic::{Builtin, UnknownHeuristic, euclidean, manhattan, zero};
pub use path::{Path, PathNode};
pub use traits::Heuristic;
