//! Core surface data structures.
//!
//! This module provides the surface representation used by the border
//! algorithms: vertex coordinates plus a vertex adjacency graph stored in
//! compressed sparse row form.
//!
//! # Overview
//!
//! The primary type is [`Surface`], which owns its coordinates and its
//! [`Topology`]. Algorithms borrow surfaces immutably, so one surface can be
//! shared across threads while several borders are processed at once.
//!
//! Vertices are identified by the type-safe [`VertexId`] wrapper.
//!
//! # Construction
//!
//! Surfaces are typically built from triangle lists:
//!
//! ```
//! use enclose::mesh::build_from_triangles;
//! use nalgebra::Point3;
//!
//! let vertices = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.5, 1.0, 0.0),
//! ];
//! let faces = vec![[0, 1, 2]];
//!
//! let surface = build_from_triangles(&vertices, &faces).unwrap();
//! ```

mod builder;
mod index;
mod surface;
mod topology;

pub use builder::{build_from_edges, build_from_neighbor_lists, build_from_triangles};
pub use index::VertexId;
pub use surface::Surface;
pub use topology::Topology;
