//! Vertex adjacency in compressed sparse row form.
//!
//! The neighbors of vertex `v` are stored contiguously in
//! `neighbors[offsets[v]..offsets[v + 1]]`. The structure is immutable once
//! built, so it can be shared freely between threads processing different
//! borders on the same surface.

use super::index::VertexId;

/// Per-vertex graph adjacency of a surface.
///
/// Neighbor lists never contain the vertex itself and never contain
/// duplicates. Their order is the order in which edges were first seen
/// during construction.
#[derive(Debug, Clone, Default)]
pub struct Topology {
    /// `offsets[v]..offsets[v + 1]` is the neighbor range of `v`.
    offsets: Vec<usize>,
    /// Flat neighbor storage.
    neighbors: Vec<VertexId>,
}

impl Topology {
    /// Build a topology from per-vertex neighbor lists.
    ///
    /// Lists are taken as-is; callers are responsible for de-duplication and
    /// symmetry (the builders in [`crate::mesh`] take care of both).
    pub(crate) fn from_lists(lists: &[Vec<usize>]) -> Self {
        let mut offsets = Vec::with_capacity(lists.len() + 1);
        let mut neighbors = Vec::with_capacity(lists.iter().map(Vec::len).sum());

        offsets.push(0);
        for list in lists {
            neighbors.extend(list.iter().map(|&n| VertexId::new(n)));
            offsets.push(neighbors.len());
        }

        Self { offsets, neighbors }
    }

    /// Get the number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.offsets.len().saturating_sub(1)
    }

    /// Get the number of undirected edges.
    #[inline]
    pub fn num_edges(&self) -> usize {
        // Each edge is stored once per direction
        self.neighbors.len() / 2
    }

    /// Get the neighbors of a vertex.
    #[inline]
    pub fn neighbors(&self, v: VertexId) -> &[VertexId] {
        let i = v.index();
        &self.neighbors[self.offsets[i]..self.offsets[i + 1]]
    }

    /// Number of neighbors of a vertex.
    #[inline]
    pub fn valence(&self, v: VertexId) -> usize {
        let i = v.index();
        self.offsets[i + 1] - self.offsets[i]
    }

    /// Check whether a vertex has at least one neighbor.
    ///
    /// Vertices without neighbors are not referenced by any face.
    #[inline]
    pub fn has_neighbors(&self, v: VertexId) -> bool {
        self.valence(v) > 0
    }

    /// Check whether two vertices share an edge.
    #[inline]
    pub fn are_neighbors(&self, a: VertexId, b: VertexId) -> bool {
        self.neighbors(a).contains(&b)
    }

    /// Same topology with every neighbor list reversed.
    pub fn reversed(&self) -> Self {
        let mut neighbors = self.neighbors.clone();
        for w in self.offsets.windows(2) {
            neighbors[w[0]..w[1]].reverse();
        }

        Self {
            offsets: self.offsets.clone(),
            neighbors,
        }
    }
}
