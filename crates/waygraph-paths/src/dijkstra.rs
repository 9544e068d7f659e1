use std::collections::HashMap;

use waygraph_core::{Graph, VertexId};

use crate::frontier::{Frontier, Record, State};
use crate::path::PathNode;

/// Compute a multi-source Dijkstra distance map.
///
/// Every source starts at cost 0; ids that are not in the graph are
/// ignored. Expansion stops at vertices whose cumulative cost would exceed
/// `max_cost`; a NaN cap is treated as 0. Sources are always reported at
/// cost 0, even under a negative cap. Returns every reached vertex in the
/// order it was settled, which is non-decreasing in cost.
pub fn dijkstra_map<T>(graph: &Graph<T>, sources: &[VertexId], max_cost: f64) -> Vec<PathNode> {
    let max_cost = if max_cost.is_nan() { 0.0 } else { max_cost };
    let mut records: HashMap<VertexId, Record> = HashMap::new();
    let mut open = Frontier::new();
    let mut results = Vec::new();

    // Seed every source in one bulk load.
    for &src in sources {
        if graph.contains_vertex(src) && !records.contains_key(&src) {
            records.insert(src, Record::discovered(0.0, None));
            open.push_seed(src, 0.0);
        }
    }
    open.seal();

    while let Ok(entry) = open.pop() {
        let current = entry.id;
        // Every pushed id has a record.
        let Some(record) = records.get_mut(&current) else {
            continue;
        };
        if record.state == State::Settled {
            continue;
        }
        record.state = State::Settled;
        let g = record.g;
        results.push(PathNode {
            vertex: current,
            cost: g,
        });

        for edge in graph.neighbors(current) {
            let next = edge.destination;
            let candidate = g + edge.weight;
            if candidate > max_cost {
                continue;
            }
            if !graph.contains_vertex(next) {
                log::error!("edge {current} -> {next} points at a missing vertex");
                continue;
            }
            let improves = match records.get(&next) {
                None => true,
                Some(r) => r.state == State::Frontier && candidate < r.g,
            };
            if improves {
                records.insert(next, Record::discovered(candidate, Some(current)));
                open.push(next, candidate);
            }
        }
    }

    log::debug!(
        "dijkstra from {} sources reached {} vertices",
        sources.len(),
        results.len()
    );
    results
}

/// Cost of the cheapest path from `source` to every vertex it can reach.
pub fn dijkstra_costs<T>(graph: &Graph<T>, source: VertexId) -> HashMap<VertexId, f64> {
    dijkstra_map(graph, &[source], f64::INFINITY)
        .into_iter()
        .map(|n| (n.vertex, n.cost))
        .collect()
}
