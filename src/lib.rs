//! # Enclose
//!
//! Find the vertices of a surface mesh that lie inside a closed border curve.
//!
//! Enclose stores a surface as vertex coordinates plus a compact vertex
//! adjacency graph, and selects regions of it from borders drawn on the
//! surface: anatomical outlines, painted regions, cut lines.
//!
//! ## Features
//!
//! - **Compact adjacency**: offset and neighbor arrays built once per surface
//! - **Border snapping**: curve points move to their nearest vertices
//! - **Gap bridging**: non-adjacent vertices are joined by shortest edge paths
//! - **Flood classification**: the closed loop walls off one side of the surface
//! - **Batch processing**: many borders over one surface, in parallel with rayon
//!
//! ## Quick Start
//!
//! ```
//! use enclose::prelude::*;
//! use nalgebra::Point3;
//!
//! // 5x5 grid, two triangles per cell
//! let mut vertices = Vec::new();
//! for y in 0..5 {
//!     for x in 0..5 {
//!         vertices.push(Point3::new(x as f64, y as f64, 0.0));
//!     }
//! }
//! let mut faces = Vec::new();
//! for y in 0..4 {
//!     for x in 0..4 {
//!         let v = y * 5 + x;
//!         faces.push([v, v + 1, v + 6]);
//!         faces.push([v, v + 6, v + 5]);
//!     }
//! }
//! let surface = build_from_triangles(&vertices, &faces).unwrap();
//!
//! // Only the corners of the border are given; the edges between them are
//! // filled in along the mesh
//! let border = Border::from_positions(
//!     "square",
//!     [
//!         Point3::new(1.0, 1.0, 0.0),
//!         Point3::new(3.0, 1.0, 0.0),
//!         Point3::new(3.0, 3.0, 0.0),
//!         Point3::new(1.0, 3.0, 0.0),
//!     ],
//! );
//!
//! let inside =
//!     find_vertices_inside_border(&surface, &border.points, &InsideBorderOptions::default())
//!         .unwrap();
//! assert_eq!(inside.vertices(), &[VertexId::new(12)]);
//!
//! // Paint the region into a per-vertex label array
//! let mut labels = vec![0u8; surface.num_vertices()];
//! inside.paint(&mut labels, 1).unwrap();
//! assert_eq!(labels[12], 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod error;
pub mod mesh;

pub use error::{MeshError, Result};

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and functions:
///
/// ```
/// use enclose::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algo::border::{
        find_vertices_inside_border, find_vertices_inside_borders, BarycentricProjection,
        BatchOptions, Border, BorderPoint, InsideBorderOptions, MembershipSet, VertexLoop,
    };
    pub use crate::error::{MeshError, Result};
    pub use crate::mesh::{
        build_from_edges, build_from_neighbor_lists, build_from_triangles, Surface, Topology,
        VertexId,
    };
}

// Re-export nalgebra types for convenience
pub use nalgebra;
