use rand::{Rng, RngExt};
use waygraph_core::{Graph, VertexId};

/// Remove each vertex with the given `probability`, sparing `protected`.
///
/// Removal cascades to every edge touching the vertex. `probability` is
/// clamped to `[0, 1]`; NaN removes nothing. Returns the removed ids in
/// ascending order.
pub fn scatter_obstacles<T, R: Rng + ?Sized>(
    graph: &mut Graph<T>,
    rng: &mut R,
    probability: f64,
    protected: &[VertexId],
) -> Vec<VertexId> {
    let p = if probability.is_nan() {
        0.0
    } else {
        probability.clamp(0.0, 1.0)
    };
    let doomed: Vec<VertexId> = graph
        .ids()
        .filter(|id| !protected.contains(id))
        .filter(|_| rng.random_bool(p))
        .collect();
    for &id in &doomed {
        graph.remove_vertex(id);
    }
    log::debug!(
        "scattered {} obstacles (p = {p}), {} vertices left",
        doomed.len(),
        graph.vertex_count()
    );
    doomed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Neighborhood, grid_graph};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn zero_probability_keeps_everything() {
        let mut g = grid_graph(4, 4, Neighborhood::All).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(scatter_obstacles(&mut g, &mut rng, 0.0, &[]).is_empty());
        assert!(scatter_obstacles(&mut g, &mut rng, f64::NAN, &[]).is_empty());
        assert!(scatter_obstacles(&mut g, &mut rng, -3.0, &[]).is_empty());
        assert_eq!(g.vertex_count(), 16);
    }

    #[test]
    fn full_probability_spares_protected() {
        let mut g = grid_graph(4, 4, Neighborhood::All).unwrap();
        let mut rng = StdRng::seed_from_u64(2);
        let removed = scatter_obstacles(&mut g, &mut rng, 7.0, &[1, 16]);
        assert_eq!(removed.len(), 14);
        assert_eq!(g.ids().collect::<Vec<_>>(), vec![1, 16]);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn removal_leaves_no_dangling_edges() {
        let mut g = grid_graph(10, 10, Neighborhood::All).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let removed = scatter_obstacles(&mut g, &mut rng, 0.3, &[1, 100]);
        assert!(removed.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(g.vertex_count(), 100 - removed.len());
        assert!(g.contains_vertex(1) && g.contains_vertex(100));
        for v in g.vertices() {
            for e in v.edges() {
                assert!(!removed.contains(&e.destination));
            }
        }
    }

    #[test]
    fn same_seed_same_obstacles() {
        let run = |seed| {
            let mut g = grid_graph(8, 8, Neighborhood::Adjacent).unwrap();
            scatter_obstacles(&mut g, &mut StdRng::seed_from_u64(seed), 0.25, &[])
        };
        assert_eq!(run(9), run(9));
    }
}
