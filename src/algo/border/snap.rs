//! Moving border points onto surface vertices.

use log::trace;

use crate::error::{MeshError, Result};
use crate::mesh::{Surface, VertexId};

use super::curve::BorderPoint;
use super::MIN_LOOP_VERTICES;

/// Move each border point to its nearest surface vertex.
///
/// Points without a usable position are skipped. Consecutive repeats are
/// collapsed, and a path whose last vertex equals its first loses the last
/// vertex, since closure is implicit.
///
/// The result is open: consecutive vertices need not be adjacent yet.
///
/// # Errors
///
/// [`MeshError::CurveTooSmall`] when fewer than four vertices remain after
/// collapsing repeats.
pub fn snap_border(surface: &Surface, points: &[BorderPoint]) -> Result<Vec<VertexId>> {
    let mut path: Vec<VertexId> = points
        .iter()
        .enumerate()
        .filter_map(|(i, point)| match point.projected_position(surface) {
            Some(xyz) => surface.closest_vertex(&xyz),
            None => {
                trace!("border point {} has no usable position, skipping", i);
                None
            }
        })
        .collect();

    collapse_repeats(&mut path);

    if path.len() < MIN_LOOP_VERTICES {
        return Err(MeshError::CurveTooSmall {
            vertices: path.len(),
        });
    }

    if path.first() == path.last() {
        path.pop();
    }

    Ok(path)
}

/// Remove consecutive identical vertices.
#[inline]
pub(crate) fn collapse_repeats(path: &mut Vec<VertexId>) {
    path.dedup();
}
