//! Surface construction utilities.
//!
//! This module provides functions for building [`Surface`]s from the inputs
//! commonly produced by mesh readers: triangle lists, edge lists, or explicit
//! per-vertex neighbor lists.

use nalgebra::Point3;

use super::surface::Surface;
use super::topology::Topology;
use crate::error::{MeshError, Result};

/// Accumulates undirected edges into per-vertex neighbor lists.
///
/// Neighbor order is first-seen order, which keeps construction deterministic.
struct AdjacencyBuilder {
    lists: Vec<Vec<usize>>,
}

impl AdjacencyBuilder {
    fn new(num_vertices: usize) -> Self {
        Self {
            lists: vec![Vec::new(); num_vertices],
        }
    }

    /// Add an edge between two vertices (if not already present).
    fn add_edge(&mut self, v0: usize, v1: usize) {
        // Valences are small, so a linear scan beats hashing here
        if !self.lists[v0].contains(&v1) {
            self.lists[v0].push(v1);
        }
        if !self.lists[v1].contains(&v0) {
            self.lists[v1].push(v0);
        }
    }

    fn finish(self, vertices: &[Point3<f64>]) -> Surface {
        let topology = Topology::from_lists(&self.lists);
        Surface::from_parts(vertices.to_vec(), topology)
    }
}

/// Build a surface from vertices and triangle faces.
///
/// # Arguments
/// * `vertices` - List of vertex positions
/// * `faces` - List of triangle faces, each as [v0, v1, v2] indices
///
/// # Returns
/// A surface, or an error if the input is invalid.
///
/// Vertices that no face references are kept but have no neighbors; border
/// processing never selects them.
///
/// # Example
/// ```
/// use enclose::mesh::build_from_triangles;
/// use nalgebra::Point3;
///
/// let vertices = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.5, 1.0, 0.0),
/// ];
/// let faces = vec![[0, 1, 2]];
///
/// let surface = build_from_triangles(&vertices, &faces).unwrap();
/// assert_eq!(surface.num_vertices(), 3);
/// assert_eq!(surface.num_edges(), 3);
/// ```
pub fn build_from_triangles(vertices: &[Point3<f64>], faces: &[[usize; 3]]) -> Result<Surface> {
    if faces.is_empty() {
        return Err(MeshError::EmptyMesh);
    }

    // Validate vertex indices
    for (fi, face) in faces.iter().enumerate() {
        for &vi in face {
            if vi >= vertices.len() {
                return Err(MeshError::InvalidVertexIndex { face: fi, vertex: vi });
            }
        }
        // Check for degenerate faces
        if face[0] == face[1] || face[1] == face[2] || face[0] == face[2] {
            return Err(MeshError::DegenerateFace { face: fi });
        }
    }

    let mut builder = AdjacencyBuilder::new(vertices.len());
    for &[v0, v1, v2] in faces {
        builder.add_edge(v0, v1);
        builder.add_edge(v1, v2);
        builder.add_edge(v2, v0);
    }

    Ok(builder.finish(vertices))
}

/// Build a surface from vertices and undirected edges.
///
/// Useful for graphs that are not triangulations, such as 4-connected grids.
/// Repeated edges are ignored.
pub fn build_from_edges(vertices: &[Point3<f64>], edges: &[[usize; 2]]) -> Result<Surface> {
    if edges.is_empty() {
        return Err(MeshError::EmptyMesh);
    }

    for (ei, &[a, b]) in edges.iter().enumerate() {
        for vi in [a, b] {
            if vi >= vertices.len() {
                return Err(MeshError::InvalidVertexIndex { face: ei, vertex: vi });
            }
        }
        if a == b {
            return Err(MeshError::DegenerateFace { face: ei });
        }
    }

    let mut builder = AdjacencyBuilder::new(vertices.len());
    for &[a, b] in edges {
        builder.add_edge(a, b);
    }

    Ok(builder.finish(vertices))
}

/// Build a surface from explicit per-vertex neighbor lists.
///
/// The order of each list is preserved (duplicates after the first occurrence
/// are dropped). The adjacency must be symmetric.
pub fn build_from_neighbor_lists(
    vertices: &[Point3<f64>],
    neighbor_lists: &[Vec<usize>],
) -> Result<Surface> {
    if vertices.is_empty() || neighbor_lists.iter().all(Vec::is_empty) {
        return Err(MeshError::EmptyMesh);
    }
    if neighbor_lists.len() != vertices.len() {
        return Err(MeshError::VertexCountMismatch {
            expected: vertices.len(),
            actual: neighbor_lists.len(),
        });
    }

    let mut lists: Vec<Vec<usize>> = Vec::with_capacity(neighbor_lists.len());
    for (vi, list) in neighbor_lists.iter().enumerate() {
        let mut cleaned = Vec::with_capacity(list.len());
        for &n in list {
            if n >= vertices.len() {
                return Err(MeshError::InvalidVertexIndex { face: vi, vertex: n });
            }
            if n == vi {
                return Err(MeshError::DegenerateFace { face: vi });
            }
            if !cleaned.contains(&n) {
                cleaned.push(n);
            }
        }
        lists.push(cleaned);
    }

    for (vi, list) in lists.iter().enumerate() {
        for &n in list {
            if !lists[n].contains(&vi) {
                return Err(MeshError::AsymmetricAdjacency { from: vi, to: n });
            }
        }
    }

    Ok(Surface::from_parts(vertices.to_vec(), Topology::from_lists(&lists)))
}
