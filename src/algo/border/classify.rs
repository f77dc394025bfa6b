//! Flood-filling the surface from a far seed, with the loop acting as a wall.

use log::{debug, warn};

use crate::error::{MeshError, Result};
use crate::mesh::{Surface, VertexId};

use super::path::VertexLoop;
use super::RESIDUAL_BOUNDARY_LIMIT;

/// Traversal state of a vertex during classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexStatus {
    /// Not reached yet.
    Unvisited,
    /// Reached, either by the flood or as a consumed wall vertex.
    Visited,
    /// On the loop and not yet touched by any flood.
    Boundary,
}

/// Result of flooding one side of a vertex loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    flooded: Vec<bool>,
    flooded_count: usize,
    passes: usize,
    residual_boundary: usize,
}

impl Classification {
    /// Whether the vertex was reached by the flood. Loop vertices never are.
    #[inline]
    pub fn is_flooded(&self, v: VertexId) -> bool {
        self.flooded.get(v.index()).copied().unwrap_or(false)
    }

    /// Per-vertex flood flags, indexed by vertex index.
    #[inline]
    pub fn flooded(&self) -> &[bool] {
        &self.flooded
    }

    /// Number of flooded vertices.
    #[inline]
    pub fn flooded_count(&self) -> usize {
        self.flooded_count
    }

    /// Number of flood passes that ran.
    #[inline]
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// Distinct loop vertices never consumed by a flood.
    #[inline]
    pub fn residual_boundary(&self) -> usize {
        self.residual_boundary
    }

    /// Number of surface vertices the classification covers.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.flooded.len()
    }
}

/// Flood the surface from the vertex farthest from the loop centroid.
///
/// Loop vertices block the flood and are consumed as they are reached. If
/// `RESIDUAL_BOUNDARY_LIMIT` or more loop vertices are still untouched once
/// the flood drains, another pass starts from the farthest remaining
/// unvisited vertex. Isolated vertices are never seeded or flooded.
///
/// The flooded set depends only on which vertices are reachable without
/// crossing the loop, so neighbor order does not affect it.
///
/// # Errors
///
/// - [`MeshError::NoSeedFound`] if the first pass finds no unvisited vertex
///   with neighbors, as happens when the loop covers the whole surface
/// - [`MeshError::InvalidLoopVertex`] if a loop vertex is not on `surface`
pub fn classify_regions(surface: &Surface, vertex_loop: &VertexLoop) -> Result<Classification> {
    let n = surface.num_vertices();
    let mut status = vec![VertexStatus::Unvisited; n];
    for (i, v) in vertex_loop.iter().enumerate() {
        let Some(s) = status.get_mut(v.index()) else {
            return Err(MeshError::InvalidLoopVertex {
                position: i,
                vertex: v.index(),
            });
        };
        *s = VertexStatus::Boundary;
    }

    let centroid = vertex_loop.centroid(surface);
    let mut flooded = vec![false; n];
    let mut flooded_count = 0;
    let mut passes = 0;
    let mut residual_boundary = 0;
    let mut stack: Vec<VertexId> = Vec::new();

    loop {
        // Farthest unvisited vertex; the lowest index wins ties
        let mut seed = None;
        let mut max_dist_sq = -1.0;
        for v in surface.vertex_ids() {
            if status[v.index()] != VertexStatus::Unvisited || !surface.has_neighbors(v) {
                continue;
            }
            let dist_sq = (surface.position(v) - centroid).norm_squared();
            if dist_sq > max_dist_sq {
                max_dist_sq = dist_sq;
                seed = Some(v);
            }
        }

        let Some(seed) = seed else {
            if passes == 0 {
                return Err(MeshError::NoSeedFound);
            }
            break;
        };

        let mut pass_flooded = 0;
        stack.push(seed);
        while let Some(v) = stack.pop() {
            let idx = v.index();
            let current = status[idx];
            match current {
                VertexStatus::Visited => {}
                VertexStatus::Boundary => status[idx] = VertexStatus::Visited,
                VertexStatus::Unvisited => {
                    status[idx] = VertexStatus::Visited;
                    flooded[idx] = true;
                    pass_flooded += 1;
                    stack.extend(
                        surface
                            .neighbors(v)
                            .iter()
                            .filter(|w| status[w.index()] != VertexStatus::Visited),
                    );
                }
            }
        }

        passes += 1;
        flooded_count += pass_flooded;
        // Distinct vertices: a self-touching loop lists some of them twice
        residual_boundary = status
            .iter()
            .filter(|&&s| s == VertexStatus::Boundary)
            .count();

        debug!(
            "flood pass {} from {:?}: {} vertices flooded, {} boundary vertices left",
            passes, seed, pass_flooded, residual_boundary
        );

        if residual_boundary < RESIDUAL_BOUNDARY_LIMIT {
            break;
        }
    }

    if residual_boundary > 0 {
        warn!(
            "{} loop vertices were never reached by the flood after {} passes",
            residual_boundary, passes
        );
    }

    Ok(Classification {
        flooded,
        flooded_count,
        passes,
        residual_boundary,
    })
}
