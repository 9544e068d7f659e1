use std::collections::HashMap;

use waygraph_core::{Graph, QueueError, VertexId};

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::frontier::{Frontier, Record, State};
use crate::path::Path;
use crate::traits::Heuristic;

/// Counters from the most recent search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Vertices settled and expanded.
    pub expanded: usize,
    /// Entries pushed onto the frontier, including the start.
    pub pushed: usize,
    /// Entries popped for vertices that were already settled.
    pub stale: usize,
}

/// A* search driver.
///
/// Holds the configuration for every search it runs and the counters of
/// the last one. Each search builds its own frontier, so a `PathSearch` can
/// be reused across graphs.
#[derive(Debug, Clone, Default)]
pub struct PathSearch {
    config: SearchConfig,
    stats: SearchStats,
}

impl PathSearch {
    /// Create a driver with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    /// The configuration in use.
    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Counters from the last call to [`search`](Self::search).
    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Find a minimum-cost path from `start` to `goal` using A*.
    ///
    /// The path is optimal when edge weights are non-negative and
    /// `heuristic` is consistent: `h(u) <= w(u, v) + h(v)` for every edge.
    /// Settled vertices are never reopened, so an admissible but
    /// inconsistent heuristic can settle a vertex too early and return a
    /// costlier path. Among equal-cost alternatives, the one
    /// whose frontier entries were pushed first wins, so results are
    /// reproducible.
    ///
    /// Unknown start or goal ids are reported before any search work.
    pub fn search<T, H>(
        &mut self,
        graph: &Graph<T>,
        start: VertexId,
        goal: VertexId,
        heuristic: &H,
    ) -> Result<Path, SearchError>
    where
        H: Heuristic<T> + ?Sized,
    {
        self.stats = SearchStats::default();

        let start_vertex = graph
            .vertex(start)
            .ok_or(SearchError::UnknownStart(start))?;
        let goal_value = graph
            .vertex(goal)
            .ok_or(SearchError::UnknownGoal(goal))?
            .value();

        log::debug!(
            "astar {start} -> {goal} over {} vertices",
            graph.vertex_count()
        );

        let mut records: HashMap<VertexId, Record> = HashMap::new();
        let mut open = Frontier::new();

        records.insert(start, Record::discovered(0.0, None));
        open.push(start, heuristic.estimate(start_vertex.value(), goal_value));
        self.stats.pushed += 1;

        loop {
            let entry = match open.pop() {
                Ok(entry) => entry,
                Err(QueueError::Empty) => {
                    log::debug!(
                        "astar {start} -> {goal}: frontier exhausted after {} expansions",
                        self.stats.expanded
                    );
                    return Err(SearchError::NotFound { start, goal });
                }
            };
            let current = entry.id;

            // Every pushed id has a record.
            let Some(record) = records.get_mut(&current) else {
                continue;
            };
            if record.state == State::Settled {
                log::trace!("skip stale entry for {current} (f = {})", entry.f);
                self.stats.stale += 1;
                continue;
            }

            if current == goal {
                let cost = record.g;
                let path = Path {
                    vertices: reconstruct(&records, goal),
                    cost,
                };
                log::debug!(
                    "astar {start} -> {goal}: found cost {} after {} expansions",
                    path.cost,
                    self.stats.expanded
                );
                return Ok(path);
            }

            if let Some(limit) = self.config.max_expanded {
                if self.stats.expanded >= limit {
                    log::debug!("astar {start} -> {goal}: expansion limit {limit} reached");
                    return Err(SearchError::ExpansionLimit { limit });
                }
            }

            record.state = State::Settled;
            let g = record.g;
            let parent = record.parent;
            self.stats.expanded += 1;
            log::trace!("expand {current} (g = {g}, f = {})", entry.f);

            let Some(vertex) = graph.vertex(current) else {
                let from = parent.unwrap_or(current);
                log::error!("edge {from} -> {current} points at a missing vertex");
                return Err(SearchError::DanglingEdge { from, to: current });
            };

            for edge in vertex.edges() {
                let next = edge.destination;
                let candidate = g + edge.weight;
                let improves = match records.get(&next) {
                    None => true,
                    Some(r) => r.state == State::Frontier && candidate < r.g,
                };
                if !improves {
                    continue;
                }

                let Some(next_vertex) = graph.vertex(next) else {
                    log::error!("edge {current} -> {next} points at a missing vertex");
                    return Err(SearchError::DanglingEdge {
                        from: current,
                        to: next,
                    });
                };

                records.insert(next, Record::discovered(candidate, Some(current)));
                let f = candidate + heuristic.estimate(next_vertex.value(), goal_value);
                open.push(next, f);
                self.stats.pushed += 1;
            }
        }
    }
}

/// Follow predecessor links back from `goal` and return the path in
/// start-to-goal order.
fn reconstruct(records: &HashMap<VertexId, Record>, goal: VertexId) -> Vec<VertexId> {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(parent) = records.get(&current).and_then(|r| r.parent) {
        path.push(parent);
        current = parent;
    }
    path.reverse();
    path
}

/// Find a minimum-cost path with an unbounded search.
///
/// Shorthand for `PathSearch::default().search(..)`.
pub fn find_path<T, H>(
    graph: &Graph<T>,
    start: VertexId,
    goal: VertexId,
    heuristic: &H,
) -> Result<Path, SearchError>
where
    H: Heuristic<T> + ?Sized,
{
    PathSearch::default().search(graph, start, goal, heuristic)
}

/// Find a minimum-cost path under `config`.
pub fn find_path_with<T, H>(
    graph: &Graph<T>,
    start: VertexId,
    goal: VertexId,
    heuristic: &H,
    config: &SearchConfig,
) -> Result<Path, SearchError>
where
    H: Heuristic<T> + ?Sized,
{
    PathSearch::new(*config).search(graph, start, goal, heuristic)
}
