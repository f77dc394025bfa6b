//! Surface: vertex coordinates plus graph adjacency.

use nalgebra::Point3;

use super::index::VertexId;
use super::topology::Topology;

/// A surface mesh reduced to what border processing needs: one coordinate per
/// vertex and the vertex adjacency graph derived from the triangulation.
///
/// Surfaces are immutable once built. Border algorithms only ever borrow them,
/// so a single surface can serve any number of concurrent border computations.
#[derive(Debug, Clone, Default)]
pub struct Surface {
    /// Vertex coordinates.
    pub(crate) positions: Vec<Point3<f64>>,

    /// Vertex adjacency.
    pub(crate) topology: Topology,
}

impl Surface {
    /// Create a surface from coordinates and an already-built topology.
    pub(crate) fn from_parts(positions: Vec<Point3<f64>>, topology: Topology) -> Self {
        debug_assert_eq!(positions.len(), topology.num_vertices());
        Self { positions, topology }
    }

    // ==================== Accessors ====================

    /// Get the number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.positions.len()
    }

    /// Get the number of undirected edges.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.topology.num_edges()
    }

    /// Get the position of a vertex.
    #[inline]
    pub fn position(&self, v: VertexId) -> &Point3<f64> {
        &self.positions[v.index()]
    }

    /// Get all vertex positions.
    #[inline]
    pub fn positions(&self) -> &[Point3<f64>] {
        &self.positions
    }

    /// Get the adjacency graph.
    #[inline]
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Check whether a vertex id refers to a vertex of this surface.
    #[inline]
    pub fn contains_vertex(&self, v: VertexId) -> bool {
        v.is_valid() && v.index() < self.positions.len()
    }

    // ==================== Topology Queries ====================

    /// Get the neighbors of a vertex.
    #[inline]
    pub fn neighbors(&self, v: VertexId) -> &[VertexId] {
        self.topology.neighbors(v)
    }

    /// Check whether a vertex has at least one neighbor.
    #[inline]
    pub fn has_neighbors(&self, v: VertexId) -> bool {
        self.topology.has_neighbors(v)
    }

    /// Check whether two vertices share an edge.
    #[inline]
    pub fn are_neighbors(&self, a: VertexId, b: VertexId) -> bool {
        self.topology.are_neighbors(a, b)
    }

    /// Iterate over all vertex IDs.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.positions.len()).map(VertexId::new)
    }

    // ==================== Geometry ====================

    /// Euclidean distance between two vertices.
    #[inline]
    pub fn edge_length(&self, a: VertexId, b: VertexId) -> f64 {
        (self.position(b) - self.position(a)).norm()
    }

    /// Find the vertex closest to a point.
    ///
    /// Ties are broken in favor of the lowest vertex index. Returns `None` for
    /// an empty surface.
    pub fn closest_vertex(&self, point: &Point3<f64>) -> Option<VertexId> {
        let mut best_dist = f64::INFINITY;
        let mut best = None;

        for (i, p) in self.positions.iter().enumerate() {
            let d = (p - point).norm_squared();
            if d < best_dist {
                best_dist = d;
                best = Some(i);
            }
        }

        best.map(VertexId::new)
    }

    /// Compute the bounding box of the surface.
    pub fn bounding_box(&self) -> Option<(Point3<f64>, Point3<f64>)> {
        let first = self.positions.first()?;

        let mut min = *first;
        let mut max = *first;

        for p in &self.positions {
            for i in 0..3 {
                min[i] = min[i].min(p[i]);
                max[i] = max[i].max(p[i]);
            }
        }

        Some((min, max))
    }

    /// Same surface with every neighbor list reversed.
    ///
    /// Border results must not depend on neighbor order, which makes this
    /// useful for checking traversal-order independence.
    pub fn reversed_neighbors(&self) -> Self {
        Self {
            positions: self.positions.clone(),
            topology: self.topology.reversed(),
        }
    }
}
