//! Lattice graph generation.

use waygraph_core::{Graph, Vec2, VertexId};

use crate::error::GenError;
use crate::neighbors::Neighborhood;

/// How far apart lattice points are.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Extent {
    /// Distance between neighbouring points on each axis.
    Spacing(Vec2),
    /// Total size spanned by the lattice; spacing is derived from it.
    Dimensions(Vec2),
}

/// Builder for `columns x rows` lattice graphs with [`Vec2`] payloads.
///
/// Vertex ids are assigned row-major from `first_id`. Each vertex is
/// connected to its [`Neighborhood`] with edges costing the distance
/// between the two points, in both directions.
///
/// ```
/// use waygraph_core::Vec2;
/// use waygraph_gen::{GridBuilder, Neighborhood};
///
/// let graph = GridBuilder::new(4, 3)
///     .dimensions(Vec2::new(300.0, 200.0))
///     .padding(Vec2::new(10.0, 10.0))
///     .neighborhood(Neighborhood::All)
///     .build()
///     .unwrap();
/// assert_eq!(graph.vertex_count(), 12);
/// assert_eq!(graph.vertex(0).unwrap().value(), &Vec2::new(10.0, 10.0));
/// ```
pub struct GridBuilder<'a> {
    columns: usize,
    rows: usize,
    extent: Extent,
    offset: Vec2,
    padding: Vec2,
    neighborhood: Neighborhood,
    first_id: VertexId,
    keep: Option<Box<dyn Fn(Vec2) -> bool + 'a>>,
}

impl<'a> GridBuilder<'a> {
    /// A `columns x rows` lattice with unit spacing, ids from 0 and
    /// axis-aligned neighbours.
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            columns,
            rows,
            extent: Extent::Spacing(Vec2::new(1.0, 1.0)),
            offset: Vec2::ZERO,
            padding: Vec2::ZERO,
            neighborhood: Neighborhood::Adjacent,
            first_id: 0,
            keep: None,
        }
    }

    /// Distance between neighbouring points on each axis.
    pub fn spacing(mut self, spacing: Vec2) -> Self {
        self.extent = Extent::Spacing(spacing);
        self
    }

    /// Spread the lattice evenly over `size`, first point to last point.
    pub fn dimensions(mut self, size: Vec2) -> Self {
        self.extent = Extent::Dimensions(size);
        self
    }

    /// Position of the first lattice point.
    pub fn offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    /// Inset the lattice by `padding` on every side. With
    /// [`dimensions`](Self::dimensions) the spanned size shrinks by twice
    /// the padding.
    pub fn padding(mut self, padding: Vec2) -> Self {
        self.padding = padding;
        self
    }

    pub fn neighborhood(mut self, neighborhood: Neighborhood) -> Self {
        self.neighborhood = neighborhood;
        self
    }

    /// Id of the top-left vertex.
    pub fn first_id(mut self, first_id: VertexId) -> Self {
        self.first_id = first_id;
        self
    }

    /// Only keep lattice points for which `keep` returns `true`. Rejected
    /// points are removed after wiring, along with every edge touching them.
    pub fn keep(mut self, keep: impl Fn(Vec2) -> bool + 'a) -> Self {
        self.keep = Some(Box::new(keep));
        self
    }

    /// Distance between neighbouring lattice points.
    pub fn resolved_spacing(&self) -> Vec2 {
        match self.extent {
            Extent::Spacing(s) => s,
            Extent::Dimensions(size) => {
                let inner = size - self.padding * 2.0;
                Vec2::new(span(inner.x, self.columns), span(inner.y, self.rows))
            }
        }
    }

    /// Generate the graph.
    pub fn build(&self) -> Result<Graph<Vec2>, GenError> {
        let (columns, rows) = (self.columns, self.rows);
        let too_many = GenError::TooManyVertices {
            columns,
            rows,
            first_id: self.first_id,
        };
        let count = columns.checked_mul(rows).ok_or_else(|| too_many.clone())?;
        if count > 0 {
            let last = VertexId::try_from(count - 1).map_err(|_| too_many.clone())?;
            self.first_id.checked_add(last).ok_or(too_many)?;
        }

        let spacing = self.resolved_spacing();
        let origin = self.offset + self.padding;
        let mut graph = Graph::new();
        let mut rejected = Vec::new();
        let mut buf = Vec::with_capacity(8);

        for y in 0..rows {
            for x in 0..columns {
                let id = self.id_of(y * columns + x);
                let pos = origin + Vec2::new(spacing.x * x as f64, spacing.y * y as f64);
                graph.get_vertex(id).set_value(pos);

                buf.clear();
                self.neighborhood.neighbors(x, y, columns, rows, spacing, &mut buf);
                for &(n, cost) in &buf {
                    graph.add_edge(id, self.id_of(n), cost)?;
                }

                if self.keep.as_ref().is_some_and(|keep| !keep(pos)) {
                    rejected.push(id);
                }
            }
        }

        for &id in &rejected {
            graph.remove_vertex(id);
        }

        log::debug!(
            "generated {columns}x{rows} grid: {} vertices, {} edges, {} rejected",
            graph.vertex_count(),
            graph.edge_count(),
            rejected.len()
        );
        Ok(graph)
    }

    // Range checked in `build`.
    fn id_of(&self, index: usize) -> VertexId {
        self.first_id + index as VertexId
    }
}

fn span(length: f64, points: usize) -> f64 {
    if points > 1 {
        length / (points - 1) as f64
    } else {
        0.0
    }
}

/// A `width x height` lattice with unit spacing, ids starting at 1 and
/// payload `Vec2(x, y)` for the cell at column `x`, row `y`.
pub fn grid_graph(
    width: usize,
    height: usize,
    neighborhood: Neighborhood,
) -> Result<Graph<Vec2>, GenError> {
    GridBuilder::new(width, height)
        .neighborhood(neighborhood)
        .first_id(1)
        .build()
}
