//! Uniform parameter sampling of caller-supplied functions
//!
//! The functions are any closures, so an expression evaluator compiled
//! elsewhere plugs in directly.

use crate::mesh::{Mesh, Topology};
use glam::DVec3;

/// Orientation of the two triangles emitted per parameter-grid quad, seen
/// in the (u, v) plane with u to the right and v up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GridWinding {
    Clockwise,
    CounterClockwise,
}

/// Parameter step for `n` samples covering `[0, 1]`
#[inline]
pub(crate) fn step(n: usize) -> f64 {
    if n > 1 {
        1.0 / (n - 1) as f64
    } else {
        0.0
    }
}

/// Sample `f` at `n` evenly spaced parameters `0, 1/(n−1), ..., 1`
pub fn curve_points<F: Fn(f64) -> DVec3>(n: usize, f: F) -> Vec<DVec3> {
    let step = step(n);
    (0..n).map(|i| f(i as f64 * step)).collect()
}

/// Sample `f` on an `n × n` grid of `(u, v)` parameters
///
/// Row `i` holds the samples at `u = i/(n−1)`.
pub fn surface_points<F: Fn(f64, f64) -> DVec3>(n: usize, f: F) -> Vec<Vec<DVec3>> {
    let step = step(n);
    (0..n)
        .map(|i| {
            let u = i as f64 * step;
            (0..n).map(|j| f(u, j as f64 * step)).collect()
        })
        .collect()
}

/// Mesh an `n × n` parameter grid sampled from `f`
///
/// Vertex `i·n + j` is `f(u_i, v_j)`. `Triangles` emits two triangles per
/// quad, `Lines` the grid edges and `LineStrip` the vertices alone.
pub(crate) fn grid_mesh<F: Fn(f64, f64) -> DVec3>(
    n: usize,
    topology: Topology,
    winding: GridWinding,
    f: F,
) -> Mesh {
    let mut mesh = Mesh::new(topology);
    let step = step(n);
    let index = |i: usize, j: usize| (i * n + j) as u32;

    for i in 0..n {
        let u = i as f64 * step;
        for j in 0..n {
            mesh.push_vertex(f(u, j as f64 * step).as_vec3());

            match topology {
                Topology::Triangles if i > 0 && j > 0 => {
                    let (p, q) = (i - 1, j - 1);
                    match winding {
                        GridWinding::Clockwise => {
                            mesh.push_triangle(index(p, q), index(i, j), index(i, q));
                            mesh.push_triangle(index(p, q), index(p, j), index(i, j));
                        }
                        GridWinding::CounterClockwise => {
                            mesh.push_triangle(index(p, q), index(i, q), index(i, j));
                            mesh.push_triangle(index(p, q), index(i, j), index(p, j));
                        }
                    }
                }
                Topology::Lines => {
                    if i > 0 {
                        mesh.indices.extend_from_slice(&[index(i - 1, j), index(i, j)]);
                    }
                    if j > 0 {
                        mesh.indices.extend_from_slice(&[index(i, j - 1), index(i, j)]);
                    }
                }
                _ => {}
            }
        }
    }
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curve_points_cover_unit_interval() {
        let points = curve_points(5, |t| DVec3::new(t, 0.0, 0.0));
        let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_surface_points_layout() {
        let grid = surface_points(3, |u, v| DVec3::new(u, v, u * v));
        assert_eq!(grid.len(), 3);
        assert!(grid.iter().all(|row| row.len() == 3));
        assert_eq!(grid[2][1], DVec3::new(1.0, 0.5, 0.5));
    }

    #[test]
    fn test_grid_mesh_counts() {
        let f = |u: f64, v: f64| DVec3::new(u, v, 0.0);
        let tris = grid_mesh(4, Topology::Triangles, GridWinding::CounterClockwise, f);
        assert_eq!(tris.vertex_count(), 16);
        assert_eq!(tris.triangle_count(), 2 * 3 * 3);

        let lines = grid_mesh(4, Topology::Lines, GridWinding::CounterClockwise, f);
        assert_eq!(lines.line_count(), 2 * 4 * 3);

        let strip = grid_mesh(4, Topology::LineStrip, GridWinding::Clockwise, f);
        assert_eq!(strip.vertex_count(), 16);
        assert!(strip.indices.is_empty());
    }

    #[test]
    fn test_grid_winding() {
        // Flat grid in the z = 0 plane: the winding decides the facing
        let f = |u: f64, v: f64| DVec3::new(u, v, 0.0);
        let facing = |winding| {
            let mesh = grid_mesh(3, Topology::Triangles, winding, f);
            mesh.triangles()
                .map(|[a, b, c]| {
                    let (a, b, c) = (
                        mesh.vertices[a as usize],
                        mesh.vertices[b as usize],
                        mesh.vertices[c as usize],
                    );
                    (b - a).cross(c - a).z
                })
                .collect::<Vec<_>>()
        };
        assert!(facing(GridWinding::CounterClockwise).iter().all(|&z| z > 0.0));
        assert!(facing(GridWinding::Clockwise).iter().all(|&z| z < 0.0));
    }

    #[test]
    fn test_degenerate_counts() {
        assert!(curve_points(0, |_| DVec3::ONE).is_empty());
        assert_eq!(curve_points(1, |t| DVec3::splat(t)), vec![DVec3::ZERO]);
    }
}
