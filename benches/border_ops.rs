//! Benchmarks for border operations.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use enclose::algo::border::{classify_regions, connect_path, snap_border};
use enclose::prelude::*;
use nalgebra::Point3;

fn create_grid_surface(n: usize) -> Surface {
    let mut vertices = Vec::with_capacity((n + 1) * (n + 1));
    let mut faces = Vec::with_capacity(n * n * 2);

    for j in 0..=n {
        for i in 0..=n {
            vertices.push(Point3::new(i as f64, j as f64, 0.0));
        }
    }

    for j in 0..n {
        for i in 0..n {
            let v00 = j * (n + 1) + i;
            let v10 = v00 + 1;
            let v01 = v00 + (n + 1);
            let v11 = v01 + 1;

            faces.push([v00, v10, v11]);
            faces.push([v00, v11, v01]);
        }
    }

    build_from_triangles(&vertices, &faces).unwrap()
}

/// Square border with a sample every `step` units, so most pairs need bridging.
fn square_border(name: &str, min: f64, max: f64, step: f64) -> Border {
    let mut points = Vec::new();
    let mut t = min;
    while t < max {
        points.push(Point3::new(t, min, 0.0));
        t += step;
    }
    let mut t = min;
    while t < max {
        points.push(Point3::new(max, t, 0.0));
        t += step;
    }
    let mut t = max;
    while t > min {
        points.push(Point3::new(t, max, 0.0));
        t -= step;
    }
    let mut t = max;
    while t > min {
        points.push(Point3::new(min, t, 0.0));
        t -= step;
    }
    Border::from_positions(name, points)
}

fn bench_single_border(c: &mut Criterion) {
    let surface = create_grid_surface(100);
    let border = square_border("square", 20.0, 80.0, 5.0);
    let options = InsideBorderOptions::default();

    c.bench_function("snap_border_100x100", |b| {
        b.iter(|| snap_border(&surface, black_box(&border.points)).unwrap())
    });

    let snapped = snap_border(&surface, &border.points).unwrap();
    c.bench_function("connect_path_100x100", |b| {
        b.iter(|| connect_path(&surface, black_box(&snapped)).unwrap())
    });

    let vertex_loop = connect_path(&surface, &snapped).unwrap();
    c.bench_function("classify_regions_100x100", |b| {
        b.iter(|| classify_regions(&surface, black_box(&vertex_loop)).unwrap())
    });

    c.bench_function("inside_border_100x100", |b| {
        b.iter(|| find_vertices_inside_border(&surface, black_box(&border.points), &options).unwrap())
    });
}

fn bench_batch(c: &mut Criterion) {
    let surface = create_grid_surface(100);
    let borders: Vec<Border> = (0..16)
        .map(|i| {
            let offset = (i % 4) as f64 * 20.0 + 5.0;
            square_border(&format!("roi_{}", i), offset, offset + 15.0, 3.0)
        })
        .collect();

    c.bench_function("batch_16_parallel", |b| {
        b.iter(|| find_vertices_inside_borders(&surface, black_box(&borders), &BatchOptions::default()))
    });

    c.bench_function("batch_16_sequential", |b| {
        let options = BatchOptions::default().with_parallel(false);
        b.iter(|| find_vertices_inside_borders(&surface, black_box(&borders), &options))
    });
}

criterion_group!(benches, bench_single_border, bench_batch);
criterion_main!(benches);
