//! Directed weighted graph with per-vertex payloads.
//!
//! Vertices are keyed by [`VertexId`] and own their outgoing [`Edge`]s.
//! Edges refer to their endpoints by id only, so there is no ownership
//! cycle between neighbours. Each vertex also keeps the set of ids that
//! have edges pointing at it, which lets [`Graph::remove_vertex`] excise
//! inbound edges without scanning the whole graph.
//!
//! Undirected connections are two directed edges of equal weight; see
//! [`Graph::add_undirected_edge`].

use std::collections::{BTreeMap, BTreeSet};

use crate::error::GraphError;
use crate::geom::{Coords, Vec2};

/// Vertex identifier. Stable for the lifetime of the vertex.
pub type VertexId = u32;

/// A directed, weighted edge.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub source: VertexId,
    pub destination: VertexId,
    /// Non-negative traversal cost.
    pub weight: f64,
}

// ---------------------------------------------------------------------------
// Vertex
// ---------------------------------------------------------------------------

/// A graph vertex: an immutable id, a mutable payload, and outgoing edges.
#[derive(Debug, Clone)]
pub struct Vertex<T> {
    id: VertexId,
    value: T,
    edges: Vec<Edge>,
    // Distinct sources of edges whose destination is this vertex.
    inbound: BTreeSet<VertexId>,
}

impl<T> Vertex<T> {
    fn new(id: VertexId, value: T) -> Self {
        Self {
            id,
            value,
            edges: Vec::new(),
            inbound: BTreeSet::new(),
        }
    }

    /// The vertex id.
    #[inline]
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// The payload.
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Mutable access to the payload.
    #[inline]
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Overwrite the payload.
    #[inline]
    pub fn set_value(&mut self, value: T) {
        self.value = value;
    }

    /// Outgoing edges in insertion order.
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of outgoing edges.
    #[inline]
    pub fn out_degree(&self) -> usize {
        self.edges.len()
    }

    /// Ids of the vertices with at least one edge into this one, ascending.
    pub fn inbound_sources(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.inbound.iter().copied()
    }
}

// ---------------------------------------------------------------------------
// Graph
// ---------------------------------------------------------------------------

/// Owning container of vertices connected by directed weighted edges.
///
/// Invariant: every edge's source and destination name a vertex currently
/// in the graph.
#[derive(Debug, Clone)]
pub struct Graph<T> {
    vertices: BTreeMap<VertexId, Vertex<T>>,
    edge_count: usize,
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Graph<T> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            vertices: BTreeMap::new(),
            edge_count: 0,
        }
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of directed edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Whether `id` names a vertex in the graph.
    #[inline]
    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.vertices.contains_key(&id)
    }

    /// Look up a vertex without creating it.
    #[inline]
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<T>> {
        self.vertices.get(&id)
    }

    /// Mutable lookup without creating the vertex.
    #[inline]
    pub fn vertex_mut(&mut self, id: VertexId) -> Option<&mut Vertex<T>> {
        self.vertices.get_mut(&id)
    }

    /// All vertices in ascending id order.
    ///
    /// Each call starts a fresh pass over the graph.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<T>> + Clone + '_ {
        self.vertices.values()
    }

    /// All vertex ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = VertexId> + Clone + '_ {
        self.vertices.keys().copied()
    }

    /// Outgoing edges of `id`; empty if the vertex does not exist.
    pub fn neighbors(&self, id: VertexId) -> impl Iterator<Item = &Edge> + '_ {
        self.vertices
            .get(&id)
            .into_iter()
            .flat_map(|v| v.edges.iter())
    }

    /// The first edge from `source` to `destination`, if any.
    pub fn edge(&self, source: VertexId, destination: VertexId) -> Option<&Edge> {
        self.neighbors(source)
            .find(|e| e.destination == destination)
    }

    /// Insert a new vertex.
    ///
    /// Fails with [`GraphError::DuplicateVertex`] if `id` is taken; the
    /// existing vertex is left untouched.
    pub fn add_vertex(&mut self, id: VertexId, value: T) -> Result<&mut Vertex<T>, GraphError> {
        use std::collections::btree_map::Entry;
        match self.vertices.entry(id) {
            Entry::Occupied(_) => Err(GraphError::DuplicateVertex(id)),
            Entry::Vacant(slot) => Ok(slot.insert(Vertex::new(id, value))),
        }
    }

    /// Overwrite the payload of an existing vertex.
    pub fn set_value(&mut self, id: VertexId, value: T) -> Result<(), GraphError> {
        let vertex = self
            .vertices
            .get_mut(&id)
            .ok_or(GraphError::UnknownVertex(id))?;
        vertex.value = value;
        Ok(())
    }

    /// Add a directed edge between two existing vertices.
    ///
    /// Unlike [`add_edge`](Self::add_edge) this never creates vertices and
    /// fails with [`GraphError::UnknownVertex`] instead.
    pub fn connect(
        &mut self,
        source: VertexId,
        destination: VertexId,
        weight: f64,
    ) -> Result<(), GraphError> {
        check_weight(source, destination, weight)?;
        self.insert_edge(source, destination, weight)
    }

    /// Remove a vertex together with every edge that starts or ends at it.
    ///
    /// Returns the payload, or `None` if the vertex did not exist.
    pub fn remove_vertex(&mut self, id: VertexId) -> Option<T> {
        let removed = self.vertices.remove(&id)?;

        let mut inbound_removed = 0;
        for &src in &removed.inbound {
            if src == id {
                continue;
            }
            if let Some(v) = self.vertices.get_mut(&src) {
                let before = v.edges.len();
                v.edges.retain(|e| e.destination != id);
                inbound_removed += before - v.edges.len();
            }
        }
        for e in &removed.edges {
            if let Some(v) = self.vertices.get_mut(&e.destination) {
                v.inbound.remove(&id);
            }
        }

        self.edge_count -= removed.edges.len() + inbound_removed;
        log::debug!(
            "removed vertex {id}: {} outgoing and {inbound_removed} inbound edges",
            removed.edges.len()
        );
        Some(removed.value)
    }

    /// Remove every edge from `source` to `destination`.
    ///
    /// Returns how many parallel edges were removed.
    pub fn remove_edge(
        &mut self,
        source: VertexId,
        destination: VertexId,
    ) -> Result<usize, GraphError> {
        if !self.vertices.contains_key(&destination) {
            return Err(GraphError::UnknownVertex(destination));
        }
        let src = self
            .vertices
            .get_mut(&source)
            .ok_or(GraphError::UnknownVertex(source))?;
        let before = src.edges.len();
        src.edges.retain(|e| e.destination != destination);
        let removed = before - src.edges.len();

        if removed > 0 {
            if let Some(dst) = self.vertices.get_mut(&destination) {
                dst.inbound.remove(&source);
            }
            self.edge_count -= removed;
        }
        Ok(removed)
    }

    /// Remove every vertex and edge.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edge_count = 0;
    }

    fn insert_edge(
        &mut self,
        source: VertexId,
        destination: VertexId,
        weight: f64,
    ) -> Result<(), GraphError> {
        if !self.vertices.contains_key(&source) {
            return Err(GraphError::UnknownVertex(source));
        }
        let dst = self
            .vertices
            .get_mut(&destination)
            .ok_or(GraphError::UnknownVertex(destination))?;
        dst.inbound.insert(source);

        let src = self
            .vertices
            .get_mut(&source)
            .ok_or(GraphError::UnknownVertex(source))?;
        src.edges.push(Edge {
            source,
            destination,
            weight,
        });
        self.edge_count += 1;
        Ok(())
    }
}

impl<T: Default> Graph<T> {
    /// Get a vertex, creating it with a default payload if it is absent.
    pub fn get_vertex(&mut self, id: VertexId) -> &mut Vertex<T> {
        self.vertices
            .entry(id)
            .or_insert_with(|| Vertex::new(id, T::default()))
    }

    /// Add a directed edge, creating either endpoint with a default payload
    /// if it is missing. The reverse edge is not added.
    ///
    /// An invalid weight is rejected before any vertex is created.
    pub fn add_edge(
        &mut self,
        source: VertexId,
        destination: VertexId,
        weight: f64,
    ) -> Result<(), GraphError> {
        check_weight(source, destination, weight)?;
        self.get_vertex(source);
        self.get_vertex(destination);
        self.insert_edge(source, destination, weight)
    }

    /// Add `a -> b` and `b -> a` with the same weight.
    pub fn add_undirected_edge(
        &mut self,
        a: VertexId,
        b: VertexId,
        weight: f64,
    ) -> Result<(), GraphError> {
        self.add_edge(a, b, weight)?;
        self.add_edge(b, a, weight)
    }
}

impl<T: Coords> Graph<T> {
    /// The vertex whose payload lies closest to `pos`. Ties go to the
    /// smallest id.
    pub fn nearest_vertex(&self, pos: Vec2) -> Option<VertexId> {
        let mut best: Option<(VertexId, f64)> = None;
        for v in self.vertices.values() {
            let d = v.value.coords().distance_squared(pos);
            if best.is_none_or(|(_, bd)| d < bd) {
                best = Some((v.id, d));
            }
        }
        best.map(|(id, _)| id)
    }
}

fn check_weight(source: VertexId, destination: VertexId, weight: f64) -> Result<(), GraphError> {
    if weight.is_nan() || weight < 0.0 {
        return Err(GraphError::InvalidWeight {
            from: source,
            to: destination,
            weight,
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// serde: a graph travels as its vertex list and is rebuilt edge by edge on
// load, so a malformed document cannot produce dangling edges.
// ---------------------------------------------------------------------------

#[cfg(feature = "serde")]
#[derive(serde::Serialize)]
struct VertexRef<'a, T> {
    id: VertexId,
    value: &'a T,
    edges: Vec<(VertexId, f64)>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct VertexRecord<T> {
    id: VertexId,
    value: T,
    edges: Vec<(VertexId, f64)>,
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Graph<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.vertices.values().map(|v| VertexRef {
            id: v.id,
            value: &v.value,
            edges: v.edges.iter().map(|e| (e.destination, e.weight)).collect(),
        }))
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Graph<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;

        let records = Vec::<VertexRecord<T>>::deserialize(deserializer)?;
        let mut graph = Graph::new();
        let mut pending = Vec::new();
        for record in records {
            pending.push((record.id, record.edges));
            graph
                .add_vertex(record.id, record.value)
                .map_err(D::Error::custom)?;
        }
        for (source, edges) in pending {
            for (destination, weight) in edges {
                graph
                    .connect(source, destination, weight)
                    .map_err(D::Error::custom)?;
            }
        }
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{RngExt, SeedableRng};

    fn three_vertex() -> Graph<Vec2> {
        let mut g = Graph::new();
        g.add_vertex(1, Vec2::default()).unwrap();
        g.add_vertex(2, Vec2::default()).unwrap();
        g.add_vertex(3, Vec2::default()).unwrap();
        g.add_edge(1, 2, 20.0).unwrap();
        g.add_edge(2, 3, 10.0).unwrap();
        g.add_edge(1, 3, 40.0).unwrap();
        g
    }

    /// Every edge endpoint exists, the reverse index matches the edge lists
    /// exactly, and the cached edge count is right.
    fn assert_consistent<T>(g: &Graph<T>) {
        let mut total = 0;
        for v in g.vertices() {
            for e in v.edges() {
                assert_eq!(e.source, v.id());
                let dst = g
                    .vertex(e.destination)
                    .unwrap_or_else(|| panic!("dangling edge {} -> {}", e.source, e.destination));
                assert!(dst.inbound.contains(&v.id()));
            }
            for src in v.inbound_sources() {
                let s = g.vertex(src).expect("stale reverse index entry");
                assert!(s.edges().iter().any(|e| e.destination == v.id()));
            }
            total += v.edges().len();
        }
        assert_eq!(total, g.edge_count());
    }

    #[test]
    fn add_vertex_rejects_duplicates() {
        let mut g = Graph::new();
        g.add_vertex(1, Vec2::new(1.0, 1.0)).unwrap();
        assert_eq!(
            g.add_vertex(1, Vec2::new(9.0, 9.0)).unwrap_err(),
            GraphError::DuplicateVertex(1)
        );
        // Original payload survives.
        assert_eq!(g.vertex(1).unwrap().value(), &Vec2::new(1.0, 1.0));
        assert_eq!(g.vertex_count(), 1);
    }

    #[test]
    fn get_vertex_creates_on_miss() {
        let mut g: Graph<Vec2> = Graph::new();
        assert!(g.vertex(5).is_none());

        let v = g.get_vertex(5);
        assert_eq!(v.id(), 5);
        assert_eq!(v.value(), &Vec2::ZERO);
        v.set_value(Vec2::new(2.0, 3.0));

        assert_eq!(g.vertex_count(), 1);
        // Second call returns the same vertex, payload intact.
        assert_eq!(g.get_vertex(5).value(), &Vec2::new(2.0, 3.0));
        *g.get_vertex(5).value_mut() = Vec2::new(4.0, 4.0);
        assert_eq!(g.vertex(5).unwrap().value(), &Vec2::new(4.0, 4.0));
        assert_eq!(g.vertex_count(), 1);
    }

    #[test]
    fn add_edge_auto_creates_endpoints() {
        let mut g: Graph<Vec2> = Graph::new();
        g.add_edge(7, 8, 1.5).unwrap();
        assert!(g.contains_vertex(7));
        assert!(g.contains_vertex(8));
        assert_eq!(g.edge(7, 8).unwrap().weight, 1.5);
        // Directed: no implicit reverse edge.
        assert!(g.edge(8, 7).is_none());
        assert_eq!(g.edge_count(), 1);
        assert_consistent(&g);
    }

    #[test]
    fn connect_requires_existing_vertices() {
        let mut g: Graph<Vec2> = Graph::new();
        g.add_vertex(1, Vec2::ZERO).unwrap();
        assert_eq!(g.connect(1, 2, 1.0), Err(GraphError::UnknownVertex(2)));
        assert_eq!(g.connect(2, 1, 1.0), Err(GraphError::UnknownVertex(2)));
        assert_eq!(g.vertex_count(), 1);
        assert_eq!(g.edge_count(), 0);
        assert_consistent(&g);

        g.add_vertex(2, Vec2::ZERO).unwrap();
        g.connect(1, 2, 1.0).unwrap();
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn invalid_weights_are_rejected() {
        let mut g: Graph<Vec2> = Graph::new();
        assert!(matches!(
            g.add_edge(1, 2, -1.0),
            Err(GraphError::InvalidWeight { from: 1, to: 2, .. })
        ));
        assert!(g.add_edge(1, 2, f64::NAN).is_err());
        // Nothing was created.
        assert!(g.is_empty());

        g.add_edge(1, 2, 0.0).unwrap();
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn undirected_edge_adds_both_directions() {
        let mut g: Graph<Vec2> = Graph::new();
        g.add_undirected_edge(1, 2, 3.0).unwrap();
        assert_eq!(g.edge(1, 2).unwrap().weight, 3.0);
        assert_eq!(g.edge(2, 1).unwrap().weight, 3.0);
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn remove_vertex_cascades_inbound_edges() {
        let mut g = three_vertex();
        g.add_edge(3, 3, 1.0).unwrap(); // self loop
        g.add_edge(2, 3, 5.0).unwrap(); // parallel edge
        assert_eq!(g.edge_count(), 5);

        assert_eq!(g.remove_vertex(3), Some(Vec2::default()));
        assert!(!g.contains_vertex(3));
        for v in g.vertices() {
            assert!(v.edges().iter().all(|e| e.destination != 3 && e.source != 3));
        }
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.edge(1, 2).unwrap().weight, 20.0);
        assert_consistent(&g);
    }

    #[test]
    fn remove_vertex_cleans_reverse_index() {
        let mut g = three_vertex();
        g.remove_vertex(1);
        assert_eq!(g.vertex(2).unwrap().inbound_sources().count(), 0);
        assert_eq!(g.vertex(3).unwrap().inbound_sources().collect::<Vec<_>>(), vec![2]);
        assert_consistent(&g);

        // Re-adding the id starts clean.
        g.add_vertex(1, Vec2::ZERO).unwrap();
        assert_eq!(g.vertex(1).unwrap().out_degree(), 0);
        g.add_edge(1, 3, 2.0).unwrap();
        assert_consistent(&g);
    }

    #[test]
    fn remove_missing_vertex_is_none() {
        let mut g = three_vertex();
        assert_eq!(g.remove_vertex(42), None);
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn remove_edge_drops_parallel_edges() {
        let mut g = three_vertex();
        g.add_edge(1, 2, 7.0).unwrap();
        assert_eq!(g.remove_edge(1, 2), Ok(2));
        assert!(g.edge(1, 2).is_none());
        assert_eq!(g.remove_edge(1, 2), Ok(0));
        assert_eq!(g.remove_edge(1, 99), Err(GraphError::UnknownVertex(99)));
        assert_eq!(g.edge_count(), 2);
        assert_consistent(&g);
    }

    #[test]
    fn vertices_iterate_in_id_order_and_restart() {
        let mut g: Graph<Vec2> = Graph::new();
        for id in [5, 1, 3] {
            g.get_vertex(id);
        }
        let iter = g.vertices();
        let first: Vec<_> = iter.clone().map(|v| v.id()).collect();
        let second: Vec<_> = iter.map(|v| v.id()).collect();
        assert_eq!(first, vec![1, 3, 5]);
        assert_eq!(first, second);
        assert_eq!(g.ids().collect::<Vec<_>>(), vec![1, 3, 5]);
    }

    #[test]
    fn neighbors_of_missing_vertex_is_empty() {
        let g = three_vertex();
        assert_eq!(g.neighbors(1).count(), 2);
        assert_eq!(g.neighbors(99).count(), 0);
    }

    #[test]
    fn set_value_and_nearest_vertex() {
        let mut g = three_vertex();
        g.set_value(1, Vec2::new(0.0, 0.0)).unwrap();
        g.set_value(2, Vec2::new(10.0, 0.0)).unwrap();
        g.set_value(3, Vec2::new(10.0, 10.0)).unwrap();
        assert_eq!(g.set_value(4, Vec2::ZERO), Err(GraphError::UnknownVertex(4)));

        assert_eq!(g.nearest_vertex(Vec2::new(1.0, 1.0)), Some(1));
        assert_eq!(g.nearest_vertex(Vec2::new(9.0, 2.0)), Some(2));
        assert_eq!(g.nearest_vertex(Vec2::new(12.0, 30.0)), Some(3));
        assert_eq!(Graph::<Vec2>::new().nearest_vertex(Vec2::ZERO), None);
    }

    #[test]
    fn random_cascade_removal_leaves_no_dangling_edges() {
        let mut rng = StdRng::seed_from_u64(1234);
        for _ in 0..20 {
            let mut g: Graph<Vec2> = Graph::new();
            for _ in 0..120 {
                let a = rng.random_range(0..30u32);
                let b = rng.random_range(0..30u32);
                g.add_edge(a, b, rng.random_range(0.0..10.0)).unwrap();
            }
            assert_consistent(&g);

            for _ in 0..10 {
                let id = rng.random_range(0..30u32);
                g.remove_vertex(id);
                assert!(!g.contains_vertex(id));
                for v in g.vertices() {
                    assert!(v.edges().iter().all(|e| e.destination != id));
                }
                assert_consistent(&g);
            }
        }
    }

    #[test]
    fn clear_resets_counts() {
        let mut g = three_vertex();
        g.clear();
        assert!(g.is_empty());
        assert_eq!(g.edge_count(), 0);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn graph_round_trip() {
        let mut g: Graph<Vec2> = Graph::new();
        g.add_vertex(1, Vec2::new(0.0, 0.0)).unwrap();
        g.add_vertex(2, Vec2::new(1.0, 0.0)).unwrap();
        g.add_undirected_edge(1, 2, 1.0).unwrap();
        g.add_edge(2, 3, 2.5).unwrap();

        let json = serde_json::to_string(&g).unwrap();
        let back: Graph<Vec2> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.vertex_count(), 3);
        assert_eq!(back.edge_count(), 3);
        assert_eq!(back.vertex(2).unwrap().value(), &Vec2::new(1.0, 0.0));
        assert_eq!(back.edge(2, 3).unwrap().weight, 2.5);
        assert_eq!(
            back.vertex(3).unwrap().inbound_sources().collect::<Vec<_>>(),
            vec![2]
        );
    }

    #[test]
    fn dangling_edge_in_document_is_rejected() {
        let json = r#"[{"id":1,"value":{"x":0.0,"y":0.0},"edges":[[2,1.0]]}]"#;
        let err = serde_json::from_str::<Graph<Vec2>>(json).unwrap_err();
        assert!(err.to_string().contains("vertex 2 does not exist"));
    }
}
