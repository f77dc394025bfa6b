//! Finding the surface vertices enclosed by a closed border curve.
//!
//! A border is an ordered list of points lying on or near the surface. The
//! pipeline runs in four stages:
//!
//! 1. [`snap_border`] moves every point to its nearest vertex.
//! 2. [`connect_path`] bridges gaps between non-adjacent vertices with
//!    shortest edge paths and validates the result as a closed [`VertexLoop`].
//! 3. [`classify_regions`] flood-fills the surface from the vertex farthest
//!    from the loop, using the loop as a wall.
//! 4. [`select_members`] decides which side is inside and returns a
//!    [`MembershipSet`].
//!
//! The side decision is a heuristic: the enclosed region is assumed to be the
//! smaller of the two. It behaves well for simple loops that do not touch
//! themselves. For self-intersecting curves the pipeline still terminates and
//! returns some bipartition, but which one is not specified.
//!
//! # Example
//!
//! ```
//! use enclose::algo::border::{find_vertices_inside_border, BorderPoint, InsideBorderOptions};
//! use enclose::mesh::build_from_edges;
//! use nalgebra::Point3;
//!
//! // 5x5 grid with 4-neighbor connectivity
//! let mut vertices = Vec::new();
//! let mut edges = Vec::new();
//! for y in 0..5 {
//!     for x in 0..5 {
//!         vertices.push(Point3::new(x as f64, y as f64, 0.0));
//!         if x < 4 { edges.push([y * 5 + x, y * 5 + x + 1]); }
//!         if y < 4 { edges.push([y * 5 + x, (y + 1) * 5 + x]); }
//!     }
//! }
//! let surface = build_from_edges(&vertices, &edges).unwrap();
//!
//! // Square border around the center vertex, corners only
//! let border: Vec<_> = [(1.0, 1.0), (3.0, 1.0), (3.0, 3.0), (1.0, 3.0)]
//!     .iter()
//!     .map(|&(x, y)| BorderPoint::from_position(Point3::new(x, y, 0.0)))
//!     .collect();
//!
//! let inside = find_vertices_inside_border(&surface, &border, &InsideBorderOptions::default())
//!     .unwrap();
//! assert_eq!(inside.len(), 1);
//! assert!(inside.contains(12.into()));
//! ```

mod batch;
mod classify;
mod curve;
mod path;
mod select;
mod snap;

#[cfg(test)]
mod fixtures;

pub use batch::{
    find_vertices_inside_borders, find_vertices_inside_borders_with_progress, roi_columns,
    BatchOptions, BorderOutcome, RoiColumns,
};
pub use classify::{classify_regions, Classification, VertexStatus};
pub use curve::{BarycentricProjection, Border, BorderPoint};
pub use path::{connect_path, validate_loop, VertexLoop};
pub use select::{select_members, MembershipSet};
pub use snap::snap_border;

use crate::error::Result;
use crate::mesh::{Surface, VertexId};

/// Smallest number of distinct vertices that can enclose a region.
pub const MIN_LOOP_VERTICES: usize = 4;

/// A flood pass that leaves fewer loop vertices untouched than this ends
/// classification.
pub const RESIDUAL_BOUNDARY_LIMIT: usize = 3;

/// Options for [`find_vertices_inside_border`].
#[derive(Debug, Clone, Default)]
pub struct InsideBorderOptions {
    /// Return the vertices outside the border instead of inside.
    pub inverse: bool,
}

impl InsideBorderOptions {
    /// Select the outside of the border instead of the inside.
    pub fn with_inverse(mut self, inverse: bool) -> Self {
        self.inverse = inverse;
        self
    }
}

/// Every intermediate of one run through the border pipeline.
#[derive(Debug, Clone)]
pub struct BorderTrace {
    /// Border points moved to their nearest vertices.
    pub snapped: Vec<VertexId>,
    /// The closed, edge-connected loop.
    pub vertex_loop: VertexLoop,
    /// Flood fill state.
    pub classification: Classification,
    /// Final selection.
    pub membership: MembershipSet,
}

/// Find the vertices enclosed by a border.
///
/// # Errors
///
/// - [`MeshError::CurveTooSmall`](crate::MeshError::CurveTooSmall) if the
///   border covers fewer than four distinct vertices
/// - [`MeshError::ConnectionInconsistency`](crate::MeshError::ConnectionInconsistency)
///   if the border spans disconnected parts of the surface
/// - [`MeshError::NoSeedFound`](crate::MeshError::NoSeedFound) if the loop
///   leaves no vertex to flood from
pub fn find_vertices_inside_border(
    surface: &Surface,
    points: &[BorderPoint],
    options: &InsideBorderOptions,
) -> Result<MembershipSet> {
    trace_vertices_inside_border(surface, points, options).map(|trace| trace.membership)
}

/// Run the border pipeline and keep every intermediate result.
///
/// Useful for inspecting where a border actually ran on the surface.
pub fn trace_vertices_inside_border(
    surface: &Surface,
    points: &[BorderPoint],
    options: &InsideBorderOptions,
) -> Result<BorderTrace> {
    let snapped = snap_border(surface, points)?;
    let vertex_loop = connect_path(surface, &snapped)?;
    let classification = classify_regions(surface, &vertex_loop)?;
    let membership = select_members(surface, &vertex_loop, &classification, options.inverse);

    Ok(BorderTrace {
        snapped,
        vertex_loop,
        classification,
        membership,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MeshError;
    use super::fixtures::{
        curve_through, four_connected_grid, grid_point, ids_of, ring_coords, self_touching_loop,
        triangulated_grid,
    };

    #[test]
    fn test_cell_border_on_small_grid() {
        let surface = four_connected_grid(4, 4);
        let curve = curve_through(&[(1, 1), (2, 1), (2, 2), (1, 2)]);

        let inside =
            find_vertices_inside_border(&surface, &curve, &InsideBorderOptions::default()).unwrap();
        assert!(inside.is_empty());

        let outside = find_vertices_inside_border(
            &surface,
            &curve,
            &InsideBorderOptions::default().with_inverse(true),
        )
        .unwrap();
        assert_eq!(outside.len(), 12);
    }

    #[test]
    fn test_gap_bridged_once() {
        let surface = four_connected_grid(4, 4);
        let curve = curve_through(&[(0, 0), (2, 0), (2, 1), (2, 2), (1, 2), (0, 2), (0, 1)]);

        let trace =
            trace_vertices_inside_border(&surface, &curve, &InsideBorderOptions::default())
                .unwrap();

        assert_eq!(trace.snapped.len(), 7);
        let ring = ids_of(4, &ring_coords(0, 0, 2, 2));
        assert_eq!(trace.vertex_loop.vertices(), ring.as_slice());
        let bridge = VertexId::new(1);
        assert_eq!(trace.vertex_loop.iter().filter(|&v| v == bridge).count(), 1);
        assert_eq!(trace.vertex_loop.vertices()[1], bridge);
    }

    #[test]
    fn test_three_points_too_small() {
        let surface = four_connected_grid(4, 4);
        // The last point snaps to the same vertex as the one before it
        let curve = vec![
            grid_point(0.0, 0.0),
            grid_point(2.0, 0.0),
            grid_point(2.0, 2.0),
            grid_point(2.1, 2.1),
        ];

        let result = find_vertices_inside_border(&surface, &curve, &InsideBorderOptions::default());
        assert_eq!(result.unwrap_err(), MeshError::CurveTooSmall { vertices: 3 });
    }

    #[test]
    fn test_corner_points_on_triangulated_grid() {
        let surface = triangulated_grid(6);
        let curve = curve_through(&[(2, 2), (4, 2), (4, 4), (2, 4)]);

        let trace =
            trace_vertices_inside_border(&surface, &curve, &InsideBorderOptions::default())
                .unwrap();

        assert_eq!(trace.vertex_loop.len(), 8);
        assert_eq!(trace.membership.vertices(), &[VertexId::new(24)]);
        assert_eq!(trace.classification.passes(), 1);
    }

    #[test]
    fn test_repeated_runs_agree() {
        let surface = triangulated_grid(10);
        let curve = curve_through(&ring_coords(3, 2, 7, 6));
        let options = InsideBorderOptions::default();

        let first = find_vertices_inside_border(&surface, &curve, &options).unwrap();
        let second = find_vertices_inside_border(&surface, &curve, &options).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.len(), 9);
    }

    #[test]
    fn test_closing_point_ignored() {
        let surface = four_connected_grid(5, 5);
        let mut coords = ring_coords(1, 1, 3, 3);
        coords.push((1, 1));

        let curve = curve_through(&coords);
        let inside =
            find_vertices_inside_border(&surface, &curve, &InsideBorderOptions::default()).unwrap();
        assert_eq!(inside.vertices(), &[VertexId::new(12)]);
    }

    #[test]
    fn test_self_touching_border() {
        let (surface, ring) = self_touching_loop();
        let curve: Vec<_> = ring
            .iter()
            .map(|&v| BorderPoint::from_position(*surface.position(v)))
            .collect();

        let trace =
            trace_vertices_inside_border(&surface, &curve, &InsideBorderOptions::default())
                .unwrap();

        assert_eq!(trace.vertex_loop.vertices(), ring.as_slice());
        assert_eq!(trace.classification.passes(), 1);
        assert_eq!(trace.classification.residual_boundary(), 2);
        // The flood covers a small minority, so it is taken as the inside
        assert_eq!(trace.membership.vertices(), &[VertexId::new(0)]);

        let outside = find_vertices_inside_border(
            &surface,
            &curve,
            &InsideBorderOptions::default().with_inverse(true),
        )
        .unwrap();
        assert_eq!(outside.vertices(), &[VertexId::new(1)]);
    }

    #[test]
    fn test_disconnected_border() {
        let vertices: Vec<_> = (0..8)
            .map(|i| nalgebra::Point3::new((i % 4) as f64, (i / 4) as f64 * 10.0, 0.0))
            .collect();
        let edges = [[0, 1], [1, 2], [2, 3], [3, 0], [4, 5], [5, 6], [6, 7], [7, 4]];
        let surface = crate::mesh::build_from_edges(&vertices, &edges).unwrap();
        let curve = vec![
            grid_point(0.0, 0.0),
            grid_point(1.0, 0.0),
            grid_point(2.0, 0.0),
            grid_point(0.0, 10.0),
        ];

        let result = find_vertices_inside_border(&surface, &curve, &InsideBorderOptions::default());
        assert_eq!(
            result.unwrap_err(),
            MeshError::ConnectionInconsistency { from: 2, to: 4 }
        );
    }
}
