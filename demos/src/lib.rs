//! Shared scenario for the demo binaries: a grid map with scattered
//! obstacles, rendered as ASCII.

use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;
use waygraph_core::{Graph, Vec2, VertexId};
use waygraph_gen::{GenError, Neighborhood, grid_graph, scatter_obstacles};
use waygraph_paths::{Builtin, Path};

pub const DEFAULT_WIDTH: usize = 40;
pub const DEFAULT_HEIGHT: usize = 16;
pub const DEFAULT_DENSITY: f64 = 0.3;

const WALL: char = '#';
const FLOOR: char = '.';
const ROUTE: char = '*';
const START: char = 'S';
const GOAL: char = 'G';

/// Lattice connectivity of every scenario.
pub const NEIGHBORHOOD: Neighborhood = Neighborhood::All;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("a {width}x{height} grid has no room for a start and a goal")]
    TooSmall { width: usize, height: usize },

    #[error("a {width}x{height} grid has more cells than vertex ids")]
    TooLarge { width: usize, height: usize },

    #[error(transparent)]
    Gen(#[from] GenError),
}

/// A `width x height` grid whose top-left and bottom-right cells are the
/// start and goal.
pub struct Scenario {
    pub width: usize,
    pub height: usize,
    pub graph: Graph<Vec2>,
    pub start: VertexId,
    pub goal: VertexId,
}

impl Scenario {
    /// Build the grid and knock out a `density` share of its cells,
    /// never the start or the goal.
    pub fn new(
        width: usize,
        height: usize,
        density: f64,
        seed: u64,
    ) -> Result<Self, ScenarioError> {
        let cells = width
            .checked_mul(height)
            .ok_or(ScenarioError::TooLarge { width, height })?;
        if cells < 2 {
            return Err(ScenarioError::TooSmall { width, height });
        }
        let goal = VertexId::try_from(cells)
            .map_err(|_| ScenarioError::TooLarge { width, height })?;
        let start = 1;
        let mut graph = grid_graph(width, height, NEIGHBORHOOD)?;
        let mut rng = StdRng::seed_from_u64(seed);
        let removed = scatter_obstacles(&mut graph, &mut rng, density, &[start, goal]);
        log::info!("scenario seed {seed}: {} walls", removed.len());
        Ok(Self {
            width,
            height,
            graph,
            start,
            goal,
        })
    }

    /// Id of the cell at column `x`, row `y`, if it lies on the grid.
    pub fn cell(&self, x: usize, y: usize) -> Option<VertexId> {
        if x >= self.width || y >= self.height {
            return None;
        }
        VertexId::try_from(y * self.width + x + 1).ok()
    }

    /// Whether `heuristic` can overestimate on this grid's diagonal edges,
    /// making the reported cost possibly suboptimal.
    pub fn may_overestimate(&self, heuristic: Builtin) -> bool {
        heuristic == Builtin::Manhattan && NEIGHBORHOOD != Neighborhood::Adjacent
    }

    /// Draw the map, one line per row, with `path` overlaid.
    pub fn render(&self, path: Option<&Path>) -> String {
        let on_path: Vec<VertexId> = path.map(|p| p.vertices.clone()).unwrap_or_default();
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                let Some(id) = self.cell(x, y) else {
                    continue;
                };
                let ch = if id == self.start {
                    START
                } else if id == self.goal {
                    GOAL
                } else if !self.graph.contains_vertex(id) {
                    WALL
                } else if on_path.contains(&id) {
                    ROUTE
                } else {
                    FLOOR
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }
}
