//! Index type for surface vertices.
//!
//! Vertices are identified by a type-safe wrapper around a `u32`, which keeps
//! vertex indices from being mixed up with counts, offsets, or face indices.

use std::fmt::{self, Debug};

/// Sentinel value representing an invalid/null vertex.
const INVALID: u32 = u32::MAX;

/// A type-safe vertex index.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct VertexId(u32);

impl VertexId {
    /// Create a new index from a raw value.
    ///
    /// # Panics
    /// Panics in debug builds if the value does not fit in a `u32`.
    #[inline]
    pub fn new(index: usize) -> Self {
        debug_assert!(index < INVALID as usize, "vertex index {} too large", index);
        Self(index as u32)
    }

    /// Create an invalid/null index.
    #[inline]
    pub fn invalid() -> Self {
        Self(INVALID)
    }

    /// Get the raw index value.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Check if this is a valid (non-null) index.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.0 != INVALID
    }
}

impl Debug for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "V({})", self.index())
        } else {
            write!(f, "V(INVALID)")
        }
    }
}

impl Default for VertexId {
    fn default() -> Self {
        Self::invalid()
    }
}

impl From<usize> for VertexId {
    fn from(v: usize) -> Self {
        Self::new(v)
    }
}
