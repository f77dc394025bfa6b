//! Shared surfaces and curves for border tests.

use nalgebra::Point3;

use crate::mesh::{
    build_from_edges, build_from_neighbor_lists, build_from_triangles, Surface, VertexId,
};

use super::curve::BorderPoint;

/// Index of grid vertex `(x, y)` in a grid `nx` vertices wide.
pub(crate) fn grid_index(nx: usize, x: usize, y: usize) -> usize {
    y * nx + x
}

fn grid_positions(nx: usize, ny: usize) -> Vec<Point3<f64>> {
    let mut vertices = Vec::with_capacity(nx * ny);
    for y in 0..ny {
        for x in 0..nx {
            vertices.push(Point3::new(x as f64, y as f64, 0.0));
        }
    }
    vertices
}

/// Unit-spaced grid where each vertex connects to its 4 axis neighbors.
pub(crate) fn four_connected_grid(nx: usize, ny: usize) -> Surface {
    let mut edges = Vec::new();
    for y in 0..ny {
        for x in 0..nx {
            if x + 1 < nx {
                edges.push([grid_index(nx, x, y), grid_index(nx, x + 1, y)]);
            }
            if y + 1 < ny {
                edges.push([grid_index(nx, x, y), grid_index(nx, x, y + 1)]);
            }
        }
    }
    build_from_edges(&grid_positions(nx, ny), &edges).unwrap()
}

/// Unit-spaced triangulated grid of `n x n` cells, split along the
/// (x, y) -> (x + 1, y + 1) diagonal.
pub(crate) fn triangulated_grid(n: usize) -> Surface {
    let nx = n + 1;
    let mut faces = Vec::with_capacity(n * n * 2);
    for j in 0..n {
        for i in 0..n {
            let v00 = grid_index(nx, i, j);
            let v10 = grid_index(nx, i + 1, j);
            let v01 = grid_index(nx, i, j + 1);
            let v11 = grid_index(nx, i + 1, j + 1);

            faces.push([v00, v10, v11]);
            faces.push([v00, v11, v01]);
        }
    }
    build_from_triangles(&grid_positions(nx, nx), &faces).unwrap()
}

/// Border point at planar grid coordinates.
pub(crate) fn grid_point(x: f64, y: f64) -> BorderPoint {
    BorderPoint::from_position(Point3::new(x, y, 0.0))
}

/// Perimeter of the rectangle `[x0, x1] x [y0, y1]`, counter-clockwise from
/// `(x0, y0)`, as grid coordinates.
pub(crate) fn ring_coords(x0: usize, y0: usize, x1: usize, y1: usize) -> Vec<(usize, usize)> {
    let mut coords = Vec::new();
    for x in x0..x1 {
        coords.push((x, y0));
    }
    for y in y0..y1 {
        coords.push((x1, y));
    }
    for x in (x0 + 1..=x1).rev() {
        coords.push((x, y1));
    }
    for y in (y0 + 1..=y1).rev() {
        coords.push((x0, y));
    }
    coords
}

/// Border points placed exactly on the given grid coordinates.
pub(crate) fn curve_through(coords: &[(usize, usize)]) -> Vec<BorderPoint> {
    coords
        .iter()
        .map(|&(x, y)| grid_point(x as f64, y as f64))
        .collect()
}

/// Vertex ids of the given grid coordinates.
pub(crate) fn ids_of(nx: usize, coords: &[(usize, usize)]) -> Vec<VertexId> {
    coords
        .iter()
        .map(|&(x, y)| VertexId::new(grid_index(nx, x, y)))
        .collect()
}

/// A loop that touches itself, `[2, 3, 4, 5, 2, 6, 7, 8]`, passing through
/// vertex 2 twice. The far vertex 0 borders 3, 5, 6, 7 and 8; vertex 1 is
/// walled in by 2 and 4, which no flood from 0 reaches.
pub(crate) fn self_touching_loop() -> (Surface, Vec<VertexId>) {
    let positions = vec![
        Point3::new(10.0, 10.0, 0.0),
        Point3::new(0.5, 0.5, 0.0),
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(1.0, 1.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        Point3::new(-1.0, 0.0, 0.0),
        Point3::new(-1.0, -1.0, 0.0),
        Point3::new(0.0, -1.0, 0.0),
    ];
    let neighbors = vec![
        vec![3, 5, 6, 7, 8],
        vec![2, 4],
        vec![1, 3, 5, 6, 8],
        vec![0, 2, 4],
        vec![1, 3, 5],
        vec![0, 2, 4],
        vec![0, 2, 7],
        vec![0, 6, 8],
        vec![0, 2, 7],
    ];
    let surface = build_from_neighbor_lists(&positions, &neighbors).unwrap();
    let ring = [2, 3, 4, 5, 2, 6, 7, 8].iter().map(|&i| VertexId::new(i)).collect();
    (surface, ring)
}
