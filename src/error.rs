//! Error types for enclose.
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Result type alias using [`MeshError`].
pub type Result<T> = std::result::Result<T, MeshError>;

/// Errors that can occur during surface construction and border processing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeshError {
    /// The surface has no vertices or no connectivity.
    #[error("mesh has no faces")]
    EmptyMesh,

    /// A face or edge references an invalid vertex index.
    #[error("face {face} references invalid vertex index {vertex}")]
    InvalidVertexIndex {
        /// The face (or edge, or neighbor list) index.
        face: usize,
        /// The invalid vertex index.
        vertex: usize,
    },

    /// A vertex path or loop references a vertex that is not on the surface.
    #[error("border loop position {position} references invalid vertex index {vertex}")]
    InvalidLoopVertex {
        /// Position in the path or loop.
        position: usize,
        /// The invalid vertex index.
        vertex: usize,
    },

    /// A face has duplicate vertex indices, or an edge connects a vertex to itself.
    #[error("face {face} is degenerate (has duplicate vertices)")]
    DegenerateFace {
        /// The face index.
        face: usize,
    },

    /// An explicit neighbor list contains `from -> to` without `to -> from`.
    #[error("adjacency is not symmetric: {from} lists {to} as a neighbor but not vice versa")]
    AsymmetricAdjacency {
        /// Vertex whose list contains the neighbor.
        from: usize,
        /// Neighbor that does not list `from` back.
        to: usize,
    },

    /// The border has too few distinct vertices to enclose anything.
    #[error("border is too small: {vertices} distinct vertices after moving to nearest vertices, at least 4 required")]
    CurveTooSmall {
        /// Number of distinct vertices found.
        vertices: usize,
    },

    /// A consecutive pair in the connected loop is not an edge of the surface.
    #[error("validation of vertex path along border failed: vertex {from} should be connected to {to} but it is not")]
    ConnectionInconsistency {
        /// First vertex of the pair.
        from: usize,
        /// Second vertex of the pair.
        to: usize,
    },

    /// No vertex outside the connected loop could be found to seed the flood fill.
    #[error("failed to find a vertex that is not part of the connected border path")]
    NoSeedFound,

    /// A border with the requested name does not exist.
    #[error("border named {name:?} not found")]
    BorderNotFound {
        /// The requested border name.
        name: String,
    },

    /// Output data does not have one entry per surface vertex.
    #[error("data has {actual} entries but the surface has {expected} vertices")]
    VertexCountMismatch {
        /// Number of surface vertices.
        expected: usize,
        /// Number of entries provided.
        actual: usize,
    },

    /// Invalid parameter value.
    #[error("invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// The invalid value (as string).
        value: String,
        /// Reason the value is invalid.
        reason: &'static str,
    },
}

impl MeshError {
    /// Create an invalid parameter error.
    pub fn invalid_param<T: std::fmt::Display>(
        name: &'static str,
        value: T,
        reason: &'static str,
    ) -> Self {
        MeshError::InvalidParameter {
            name,
            value: value.to_string(),
            reason,
        }
    }
}
