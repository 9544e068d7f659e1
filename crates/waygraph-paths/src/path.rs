use waygraph_core::{Graph, VertexId};

/// A path found by a search: vertex ids from start to goal, both included.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    pub vertices: Vec<VertexId>,
    /// Sum of the weights of the edges taken.
    pub cost: f64,
}

impl Path {
    /// First vertex of the path.
    pub fn start(&self) -> Option<VertexId> {
        self.vertices.first().copied()
    }

    /// Last vertex of the path.
    pub fn goal(&self) -> Option<VertexId> {
        self.vertices.last().copied()
    }

    /// Number of vertices on the path.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.iter().copied()
    }

    /// Consecutive `(from, to)` pairs along the path.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.vertices.windows(2).map(|w| (w[0], w[1]))
    }

    /// Payloads of the path's vertices, in order. Vertices removed from the
    /// graph since the search ran are skipped.
    pub fn waypoints<'a, T>(&'a self, graph: &'a Graph<T>) -> impl Iterator<Item = &'a T> + 'a {
        self.vertices
            .iter()
            .filter_map(move |&id| graph.vertex(id).map(|v| v.value()))
    }
}

/// A vertex with its cost from the nearest source, returned from Dijkstra
/// map queries.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub vertex: VertexId,
    pub cost: f64,
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn path_round_trip() {
        let p = Path {
            vertices: vec![4, 9, 2],
            cost: 12.5,
        };
        let json = serde_json::to_string(&p).unwrap();
        let back: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
