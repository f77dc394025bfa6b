//! Turning a snapped vertex sequence into a closed, edge-connected loop.

use log::{debug, warn};
use nalgebra::Point3;

use crate::algo::geodesic::{dijkstra, DijkstraOptions};
use crate::error::{MeshError, Result};
use crate::mesh::{Surface, VertexId};

use super::snap::collapse_repeats;
use super::MIN_LOOP_VERTICES;

/// A closed loop of surface vertices.
///
/// Every consecutive pair, including the wraparound pair (last, first), is an
/// edge of the surface, no two consecutive entries are equal, and the loop has
/// at least four vertices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexLoop {
    vertices: Vec<VertexId>,
}

impl VertexLoop {
    /// Create a loop from vertices that are already edge-connected.
    ///
    /// # Errors
    ///
    /// Fails with the same errors as [`validate_loop`].
    pub fn new(surface: &Surface, vertices: Vec<VertexId>) -> Result<Self> {
        validate_loop(surface, &vertices)?;
        Ok(Self { vertices })
    }

    /// Get the loop vertices in order.
    #[inline]
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    /// Number of vertices in the loop.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false for a validated loop.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Check whether a vertex lies on the loop.
    pub fn contains(&self, v: VertexId) -> bool {
        self.vertices.contains(&v)
    }

    /// Iterate over the loop vertices.
    pub fn iter(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.iter().copied()
    }

    /// Iterate over consecutive pairs, including (last, first).
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        loop_pairs(&self.vertices)
    }

    /// Mean position of the loop vertices.
    pub fn centroid(&self, surface: &Surface) -> Point3<f64> {
        let sum = self
            .vertices
            .iter()
            .fold(nalgebra::Vector3::zeros(), |acc, &v| acc + surface.position(v).coords);
        Point3::from(sum / self.vertices.len() as f64)
    }

    /// Consume the loop, returning its vertices.
    pub fn into_vec(self) -> Vec<VertexId> {
        self.vertices
    }
}

/// Consecutive pairs of a cyclic sequence, wraparound included.
fn loop_pairs(vertices: &[VertexId]) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
    let n = vertices.len();
    (0..n).map(move |i| (vertices[i], vertices[(i + 1) % n]))
}

/// Fail on the first vertex that is not on the surface.
fn check_on_surface(surface: &Surface, vertices: &[VertexId]) -> Result<()> {
    match vertices.iter().position(|&v| !surface.contains_vertex(v)) {
        Some(position) => Err(MeshError::InvalidLoopVertex {
            position,
            vertex: vertices[position].index(),
        }),
        None => Ok(()),
    }
}

/// Connect a snapped vertex sequence into a closed loop.
///
/// Consecutive vertices (including last -> first) that are not already
/// neighbors are bridged with the interior of the shortest edge path between
/// them. Sequences whose pairs are all adjacent come back unchanged.
///
/// # Errors
///
/// - [`MeshError::InvalidLoopVertex`] if a vertex is not on the surface
/// - [`MeshError::CurveTooSmall`] if fewer than four vertices remain
/// - [`MeshError::ConnectionInconsistency`] if a pair could not be bridged,
///   which happens when the two vertices lie in different components
pub fn connect_path(surface: &Surface, snapped: &[VertexId]) -> Result<VertexLoop> {
    check_on_surface(surface, snapped)?;

    let n = snapped.len();
    let mut connected = Vec::with_capacity(n);

    for (node, next) in loop_pairs(snapped) {
        connected.push(node);
        if node == next || surface.are_neighbors(node, next) {
            continue;
        }
        connected.extend(geodesic_bridge(surface, node, next));
    }

    // Bridges can meet the next segment at a repeated vertex
    collapse_repeats(&mut connected);
    while connected.len() > 1 && connected.first() == connected.last() {
        connected.pop();
    }

    validate_loop(surface, &connected)?;
    Ok(VertexLoop {
        vertices: connected,
    })
}

/// Interior vertices of the shortest edge path from `from` to `to`.
///
/// Empty when `to` is unreachable; validation reports the gap afterwards.
fn geodesic_bridge(surface: &Surface, from: VertexId, to: VertexId) -> Vec<VertexId> {
    let options = DijkstraOptions::default()
        .with_predecessors(true)
        .with_target(to.index());
    let result = dijkstra(surface, from, &options);

    match result.path_to(to) {
        Some(path) if path.len() >= 2 => {
            debug!(
                "bridged {:?} -> {:?} with {} intermediate vertices",
                from,
                to,
                path.len() - 2
            );
            path[1..path.len() - 1].to_vec()
        }
        _ => {
            warn!("no edge path from {:?} to {:?}, cannot bridge border gap", from, to);
            Vec::new()
        }
    }
}

/// Check that a vertex sequence forms a closed, edge-connected loop.
///
/// # Errors
///
/// - [`MeshError::CurveTooSmall`] for fewer than four vertices
/// - [`MeshError::InvalidLoopVertex`] if a vertex is not on the surface
/// - [`MeshError::ConnectionInconsistency`] for the first consecutive pair
///   (wraparound included) that is not an edge of the surface
pub fn validate_loop(surface: &Surface, vertices: &[VertexId]) -> Result<()> {
    if vertices.len() < MIN_LOOP_VERTICES {
        return Err(MeshError::CurveTooSmall {
            vertices: vertices.len(),
        });
    }
    check_on_surface(surface, vertices)?;

    for (node, next) in loop_pairs(vertices) {
        if node == next || !surface.are_neighbors(node, next) {
            return Err(MeshError::ConnectionInconsistency {
                from: node.index(),
                to: next.index(),
            });
        }
    }

    Ok(())
}
