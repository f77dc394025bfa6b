//! Border curves as they arrive from border files.

use nalgebra::Point3;

use crate::mesh::{Surface, VertexId};

/// Location of a border point inside a surface triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarycentricProjection {
    /// The three triangle vertices.
    pub vertices: [usize; 3],
    /// Weight of each vertex. Need not be normalized.
    pub weights: [f64; 3],
}

impl BarycentricProjection {
    /// Create a projection onto a triangle.
    pub fn new(vertices: [usize; 3], weights: [f64; 3]) -> Self {
        Self { vertices, weights }
    }

    /// Resolve the projection to a position on the given surface.
    ///
    /// Returns `None` if a vertex is out of range for this surface or the
    /// weights do not sum to a usable non-zero value.
    pub fn position(&self, surface: &Surface) -> Option<Point3<f64>> {
        let total: f64 = self.weights.iter().sum();
        if !total.is_finite() || total.abs() < f64::EPSILON {
            return None;
        }

        let mut coords = nalgebra::Vector3::zeros();
        for (&v, &w) in self.vertices.iter().zip(&self.weights) {
            if v >= surface.num_vertices() {
                return None;
            }
            coords += surface.position(VertexId::new(v)).coords * w;
        }

        Some(Point3::from(coords / total))
    }
}

/// One sample of a border curve.
///
/// A point may carry a raw 3D position, a projection onto a surface triangle,
/// or both. The projection is preferred because it follows the surface the
/// border is being evaluated on (for example an inflated or flat version of
/// the surface the border was drawn on).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BorderPoint {
    /// Raw coordinate of the point.
    pub position: Option<Point3<f64>>,
    /// Projection onto a surface triangle.
    pub projection: Option<BarycentricProjection>,
}

impl BorderPoint {
    /// Create a point from a raw coordinate.
    pub fn from_position(position: Point3<f64>) -> Self {
        Self {
            position: Some(position),
            projection: None,
        }
    }

    /// Create a point from a triangle projection.
    pub fn from_projection(projection: BarycentricProjection) -> Self {
        Self {
            position: None,
            projection: Some(projection),
        }
    }

    /// Attach a triangle projection to this point.
    pub fn with_projection(mut self, projection: BarycentricProjection) -> Self {
        self.projection = Some(projection);
        self
    }

    /// Position of this point on the given surface.
    ///
    /// Uses the projection when it is valid for `surface`, otherwise the raw
    /// position. Returns `None` when neither is usable.
    pub fn projected_position(&self, surface: &Surface) -> Option<Point3<f64>> {
        self.projection
            .and_then(|p| p.position(surface))
            .or(self.position)
    }
}

/// A named, ordered border curve.
///
/// The curve is implicitly closed: the last point connects back to the first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Border {
    /// Border name, used to label output columns.
    pub name: String,
    /// Ordered curve samples.
    pub points: Vec<BorderPoint>,
}

impl Border {
    /// Create a border from curve samples.
    pub fn new(name: impl Into<String>, points: Vec<BorderPoint>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }

    /// Create a border from raw coordinates.
    pub fn from_positions<P>(name: impl Into<String>, positions: P) -> Self
    where
        P: IntoIterator<Item = Point3<f64>>,
    {
        Self::new(
            name,
            positions.into_iter().map(BorderPoint::from_position).collect(),
        )
    }

    /// Number of curve samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the border has no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
