//! Geodesic distance computation on surfaces.
//!
//! Distances are shortest paths along surface edges, weighted by Euclidean
//! edge length. This is exact on the edge graph and approximates the true
//! geodesic distance on the surface.
//!
//! # Example
//!
//! ```
//! use enclose::prelude::*;
//! use enclose::algo::geodesic::{dijkstra, DijkstraOptions};
//! use nalgebra::Point3;
//!
//! let vertices = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(1.0, 1.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! ];
//! let surface = build_from_triangles(&vertices, &[[0, 1, 2], [0, 2, 3]]).unwrap();
//!
//! let options = DijkstraOptions::default().with_predecessors(true);
//! let result = dijkstra(&surface, VertexId::new(1), &options);
//!
//! let path = result.path_to(VertexId::new(3)).unwrap();
//! assert_eq!(path.first(), Some(&VertexId::new(1)));
//! assert_eq!(path.last(), Some(&VertexId::new(3)));
//! ```

mod dijkstra;

pub use dijkstra::{dijkstra, dijkstra_multiple, DijkstraOptions};

use crate::mesh::VertexId;

/// Result of geodesic distance computation.
///
/// Contains distances from source vertex/vertices to all other vertices,
/// and optionally predecessor information for path reconstruction.
#[derive(Debug, Clone)]
pub struct GeodesicResult {
    /// Distance from source(s) to each vertex.
    /// `f64::INFINITY` if the vertex is unreachable.
    distances: Vec<f64>,

    /// Predecessor vertex for each vertex (for path reconstruction).
    /// `None` if predecessors weren't computed or vertex is a source/unreachable.
    predecessors: Option<Vec<Option<usize>>>,
}

impl GeodesicResult {
    /// Create a new geodesic result.
    pub(crate) fn new(distances: Vec<f64>, predecessors: Option<Vec<Option<usize>>>) -> Self {
        Self {
            distances,
            predecessors,
        }
    }

    /// Get the distance to a vertex.
    ///
    /// Returns `f64::INFINITY` if the vertex is unreachable from the source(s).
    #[inline]
    pub fn distance(&self, v: VertexId) -> f64 {
        self.distances[v.index()]
    }

    /// Get all distances as a slice.
    #[inline]
    pub fn distances(&self) -> &[f64] {
        &self.distances
    }

    /// Get the predecessor of a vertex on its shortest path.
    ///
    /// Returns `None` for sources, unreachable vertices, or when predecessors
    /// were not stored.
    #[inline]
    pub fn predecessor(&self, v: VertexId) -> Option<VertexId> {
        self.predecessors.as_ref()?[v.index()].map(VertexId::new)
    }

    /// Get the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Find the vertex with the maximum finite distance from the source(s).
    ///
    /// Returns `None` if no vertex is reachable.
    pub fn farthest_vertex(&self) -> Option<(VertexId, f64)> {
        let mut max_dist = f64::NEG_INFINITY;
        let mut max_vertex = None;

        for (i, &d) in self.distances.iter().enumerate() {
            if d.is_finite() && d > max_dist {
                max_dist = d;
                max_vertex = Some(i);
            }
        }

        max_vertex.map(|i| (VertexId::new(i), max_dist))
    }

    /// Reconstruct the shortest path from a source to the given vertex.
    ///
    /// Returns `None` if:
    /// - Predecessors weren't stored (use `DijkstraOptions::with_predecessors(true)`)
    /// - The vertex is unreachable
    ///
    /// The returned path includes both the source and target vertices. The
    /// walk is iterative, so path length is not limited by stack depth.
    pub fn path_to(&self, target: VertexId) -> Option<Vec<VertexId>> {
        let predecessors = self.predecessors.as_ref()?;

        if !self.distances[target.index()].is_finite() {
            return None;
        }

        let mut path = Vec::new();
        let mut current = target.index();

        loop {
            path.push(VertexId::new(current));

            match predecessors[current] {
                Some(pred) => current = pred,
                None => break, // Reached a source
            }

            // Guards against a corrupted predecessor cycle
            if path.len() > self.distances.len() {
                return None;
            }
        }

        path.reverse();
        Some(path)
    }

    /// Check if a vertex is reachable from the source(s).
    #[inline]
    pub fn is_reachable(&self, v: VertexId) -> bool {
        self.distances[v.index()].is_finite()
    }

    /// Count the number of reachable vertices.
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_finite()).count()
    }

    /// Iterate over all vertices with their distances.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, f64)> + '_ {
        self.distances
            .iter()
            .enumerate()
            .map(|(i, &d)| (VertexId::new(i), d))
    }
}
