//! Graph generators for **waygraph**.
//!
//! - [`GridBuilder`] / [`grid_graph`]: rectangular lattices with [`Vec2`]
//!   positions and distance-weighted edges
//! - [`scatter_obstacles`]: random vertex removal for test maps
//!
//! [`Vec2`]: waygraph_core::Vec2

mod error;
mod grid;
mod neighbors;
mod obstacles;

pub use error::GenError;
pub use grid::{GridBuilder, grid_graph};
pub use neighbors::Neighborhood;
pub use obstacles::scatter_obstacles;
