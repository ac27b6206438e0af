//! Common test helpers for sdf-sculpt integration tests

#![allow(dead_code)]

use sdf_sculpt::prelude::*;

// ============================================================================
// Standard test shapes
// ============================================================================

/// Unit sphere at origin
pub fn test_sphere() -> SdfNode {
    SdfNode::sphere(Vec3::ZERO, 1.0)
}

/// Box with half-extents 0.5 at origin
pub fn test_box() -> SdfNode {
    SdfNode::box_centered(Vec3::ZERO, Vec3::splat(0.5))
}

/// CSG shape: sphere with box subtracted
pub fn test_csg() -> SdfNode {
    test_sphere().subtract(SdfNode::box_centered(Vec3::ZERO, Vec3::splat(0.6)))
}

/// Multi-operation shape covering every node category
pub fn test_complex_shape() -> SdfNode {
    let cut = SdfNode::box_centered(Vec3::ZERO, Vec3::new(0.5, 2.0, 0.5)).translate(Vec3::X * 0.5);
    let torus = SdfNode::torus(0.8, 0.2).rotate_x(0.4).translate(Vec3::Y);
    test_sphere()
        .subtract(cut)
        .smooth_union(torus, 0.1)
        .round(0.02)
        .scale(0.8)
}

// ============================================================================
// Standard test points
// ============================================================================

/// 8 canonical test points (origin, axes, diagonal, outside)
pub fn test_points() -> Vec<Vec3> {
    vec![
        Vec3::ZERO,                     // origin (inside sphere)
        Vec3::new(1.0, 0.0, 0.0),       // X-axis surface
        Vec3::new(0.0, 1.0, 0.0),       // Y-axis surface
        Vec3::new(0.0, 0.0, 1.0),       // Z-axis surface
        Vec3::new(0.577, 0.577, 0.577), // diagonal (~surface)
        Vec3::new(2.0, 0.0, 0.0),       // outside X
        Vec3::new(0.0, -1.5, 0.0),      // outside -Y
        Vec3::new(0.3, 0.3, 0.3),       // inside
    ]
}

/// Cell centers of an `n³` grid over [-2, 2]^3
pub fn test_grid_points(resolution: usize) -> Vec<Vec3> {
    let mut points = Vec::with_capacity(resolution * resolution * resolution);
    let step = 4.0 / resolution as f32;
    for i in 0..resolution {
        for j in 0..resolution {
            for k in 0..resolution {
                points.push(Vec3::new(
                    -2.0 + (i as f32 + 0.5) * step,
                    -2.0 + (j as f32 + 0.5) * step,
                    -2.0 + (k as f32 + 0.5) * step,
                ));
            }
        }
    }
    points
}

// ============================================================================
// Assertion helpers
// ============================================================================

/// Assert two f32 values are close within tolerance
pub fn assert_close(a: f32, b: f32, tol: f32, msg: &str) {
    assert!(
        (a - b).abs() < tol,
        "{}: {} vs {} (diff={}, tol={})",
        msg,
        a,
        b,
        (a - b).abs(),
        tol
    );
}

/// Assert every index of a triangle mesh addresses a vertex
pub fn assert_indices_valid(mesh: &Mesh) {
    assert_eq!(mesh.indices.len() % 3, 0, "Index count should be divisible by 3");
    let count = mesh.vertex_count() as u32;
    for (i, &index) in mesh.indices.iter().enumerate() {
        assert!(index < count, "index {} at {} out of range {}", index, i, count);
    }
}

/// Count directed edges without a matching opposite edge
pub fn open_edge_count(mesh: &Mesh) -> usize {
    use std::collections::HashMap;

    let mut edges: HashMap<(u32, u32), i32> = HashMap::new();
    for [a, b, c] in mesh.triangles() {
        for (from, to) in [(a, b), (b, c), (c, a)] {
            *edges.entry((from, to)).or_default() += 1;
        }
    }
    edges
        .iter()
        .filter(|(&(from, to), &count)| edges.get(&(to, from)).copied().unwrap_or(0) != count)
        .count()
}
