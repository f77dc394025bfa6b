//! Processing many borders over one surface.
//!
//! Each border runs the full pipeline independently with its own traversal
//! state, so borders are processed in parallel by default. A failing border
//! does not affect the others.

use std::sync::atomic::{AtomicUsize, Ordering};

use log::warn;
use rayon::prelude::*;

use crate::algo::Progress;
use crate::error::{MeshError, Result};
use crate::mesh::Surface;

use super::curve::Border;
use super::select::MembershipSet;
use super::{find_vertices_inside_border, InsideBorderOptions};

/// Options for [`find_vertices_inside_borders`].
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Select outside each border instead of inside.
    pub inverse: bool,
    /// Only process the first border with this name.
    pub border_name: Option<String>,
    /// Process borders on the rayon thread pool.
    pub parallel: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            inverse: false,
            border_name: None,
            parallel: true,
        }
    }
}

impl BatchOptions {
    /// Select the outside of each border instead of the inside.
    pub fn with_inverse(mut self, inverse: bool) -> Self {
        self.inverse = inverse;
        self
    }

    /// Restrict processing to the first border with the given name.
    pub fn with_border_name(mut self, name: impl Into<String>) -> Self {
        self.border_name = Some(name.into());
        self
    }

    /// Set whether to process borders on the rayon thread pool.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Process borders one after another on the calling thread.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

/// Result of processing one border.
#[derive(Debug, Clone, PartialEq)]
pub struct BorderOutcome {
    /// Name of the border.
    pub name: String,
    /// Selected vertices, or why the border failed.
    pub result: Result<MembershipSet>,
}

/// Find the enclosed vertices of every border.
///
/// Outcomes come back in border order. With
/// [`BatchOptions::with_border_name`] only the first matching border is
/// processed; if none matches, the single outcome is
/// [`MeshError::BorderNotFound`].
pub fn find_vertices_inside_borders(
    surface: &Surface,
    borders: &[Border],
    options: &BatchOptions,
) -> Vec<BorderOutcome> {
    find_vertices_inside_borders_with_progress(surface, borders, options, &Progress::none())
}

/// [`find_vertices_inside_borders`] with one progress report per finished
/// border.
pub fn find_vertices_inside_borders_with_progress(
    surface: &Surface,
    borders: &[Border],
    options: &BatchOptions,
    progress: &Progress,
) -> Vec<BorderOutcome> {
    let selected: &[Border] = match &options.border_name {
        Some(name) => match borders.iter().position(|b| &b.name == name) {
            Some(i) => &borders[i..=i],
            None => {
                return vec![BorderOutcome {
                    name: name.clone(),
                    result: Err(MeshError::BorderNotFound { name: name.clone() }),
                }];
            }
        },
        None => borders,
    };

    let total = selected.len();
    let finished = AtomicUsize::new(0);
    let border_options = InsideBorderOptions::default().with_inverse(options.inverse);

    let process = |border: &Border| {
        let result = find_vertices_inside_border(surface, &border.points, &border_options);
        if let Err(e) = &result {
            warn!("border {:?} failed: {}", border.name, e);
        }
        let done = finished.fetch_add(1, Ordering::Relaxed) + 1;
        progress.report(done, total, &border.name);
        BorderOutcome {
            name: border.name.clone(),
            result,
        }
    };

    if options.parallel {
        selected.par_iter().map(process).collect()
    } else {
        selected.iter().map(process).collect()
    }
}

/// One column per border, one row per surface vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct RoiColumns {
    /// Column names, in border order.
    pub names: Vec<String>,
    /// Column data; members hold the region value, everything else zero.
    pub columns: Vec<Vec<f32>>,
    /// Borders that failed, with their errors. Their columns are all zero.
    pub failures: Vec<(String, MeshError)>,
}

impl RoiColumns {
    /// Number of columns.
    #[inline]
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&[f32]> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| self.columns[i].as_slice())
    }
}

/// Paint border outcomes into per-vertex region-of-interest columns.
///
/// # Errors
///
/// [`MeshError::InvalidParameter`] if `value` is not finite, or
/// [`MeshError::VertexCountMismatch`] if a membership set was computed on a
/// surface of a different size.
pub fn roi_columns(
    surface: &Surface,
    outcomes: Vec<BorderOutcome>,
    value: f32,
) -> Result<RoiColumns> {
    if !value.is_finite() {
        return Err(MeshError::invalid_param("value", value, "must be finite"));
    }

    let n = surface.num_vertices();
    let mut roi = RoiColumns {
        names: Vec::with_capacity(outcomes.len()),
        columns: Vec::with_capacity(outcomes.len()),
        failures: Vec::new(),
    };

    for outcome in outcomes {
        let mut column = vec![0.0f32; n];
        match outcome.result {
            Ok(membership) => membership.paint(&mut column, value)?,
            Err(e) => roi.failures.push((outcome.name.clone(), e)),
        }
        roi.names.push(outcome.name);
        roi.columns.push(column);
    }

    Ok(roi)
}
