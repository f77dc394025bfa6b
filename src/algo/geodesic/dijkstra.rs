//! Dijkstra's algorithm for geodesic distances.
//!
//! Computes shortest path distances along surface edges using Dijkstra's
//! algorithm with a binary heap keyed by running distance.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::mesh::{Surface, VertexId};

use super::GeodesicResult;

/// Options for Dijkstra's algorithm.
#[derive(Debug, Clone, Default)]
pub struct DijkstraOptions {
    /// Whether to store predecessor information for path reconstruction.
    pub store_predecessors: bool,

    /// Maximum distance to explore. Vertices beyond this distance won't be visited.
    /// Set to `None` for no limit.
    pub max_distance: Option<f64>,

    /// Target vertex for early termination.
    /// If set, the algorithm stops once this vertex is settled.
    pub target: Option<usize>,
}

impl DijkstraOptions {
    /// Enable predecessor storage for path reconstruction.
    pub fn with_predecessors(mut self, store: bool) -> Self {
        self.store_predecessors = store;
        self
    }

    /// Set maximum distance to explore.
    pub fn with_max_distance(mut self, max_dist: f64) -> Self {
        self.max_distance = Some(max_dist);
        self
    }

    /// Set target vertex for early termination.
    ///
    /// Distances and predecessors along the shortest path to the target are
    /// final; other vertices may be left unsettled.
    pub fn with_target(mut self, target: usize) -> Self {
        self.target = Some(target);
        self
    }
}

/// Entry in Dijkstra's priority queue.
#[derive(Debug, Clone)]
struct DijkstraEntry {
    /// The vertex index.
    vertex: usize,
    /// Distance from source.
    distance: f64,
}

impl DijkstraEntry {
    fn new(vertex: usize, distance: f64) -> Self {
        Self { vertex, distance }
    }
}

// Implement ordering for min-heap (BinaryHeap is a max-heap by default)
impl PartialEq for DijkstraEntry {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance
    }
}

impl Eq for DijkstraEntry {}

impl PartialOrd for DijkstraEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DijkstraEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior
        other
            .distance
            .partial_cmp(&self.distance)
            .unwrap_or(Ordering::Equal)
    }
}

/// Compute geodesic distances from a single source vertex using Dijkstra's algorithm.
///
/// # Arguments
///
/// * `surface` - The input surface
/// * `source` - The source vertex
/// * `options` - Algorithm options
///
/// # Returns
///
/// A `GeodesicResult` containing distances from the source to all vertices.
pub fn dijkstra(surface: &Surface, source: VertexId, options: &DijkstraOptions) -> GeodesicResult {
    dijkstra_multiple(surface, &[source], options)
}

/// Compute geodesic distances from multiple source vertices.
///
/// All source vertices are treated as having distance 0. Sources outside the
/// surface are ignored.
pub fn dijkstra_multiple(
    surface: &Surface,
    sources: &[VertexId],
    options: &DijkstraOptions,
) -> GeodesicResult {
    let n = surface.num_vertices();

    if n == 0 || sources.is_empty() {
        return GeodesicResult::new(vec![f64::INFINITY; n], None);
    }

    let mut distances = vec![f64::INFINITY; n];

    let mut predecessors: Option<Vec<Option<usize>>> = if options.store_predecessors {
        Some(vec![None; n])
    } else {
        None
    };

    let mut heap = BinaryHeap::new();

    for &source in sources {
        if surface.contains_vertex(source) {
            let idx = source.index();
            distances[idx] = 0.0;
            heap.push(DijkstraEntry::new(idx, 0.0));
        }
    }

    while let Some(entry) = heap.pop() {
        let u = entry.vertex;
        let dist_u = entry.distance;

        // Skip if this is a stale entry (we found a shorter path already)
        if dist_u > distances[u] {
            continue;
        }

        if options.target == Some(u) {
            break;
        }

        if let Some(max_dist) = options.max_distance {
            if dist_u > max_dist {
                continue;
            }
        }

        // Relax all neighbors
        let u_vertex = VertexId::new(u);
        for &v_vertex in surface.neighbors(u_vertex) {
            let v = v_vertex.index();
            let new_dist = dist_u + surface.edge_length(u_vertex, v_vertex);

            if new_dist < distances[v] {
                distances[v] = new_dist;

                if let Some(ref mut preds) = predecessors {
                    preds[v] = Some(u);
                }

                // Duplicate entries are filtered by the stale check above
                heap.push(DijkstraEntry::new(v, new_dist));
            }
        }
    }

    GeodesicResult::new(distances, predecessors)
}
