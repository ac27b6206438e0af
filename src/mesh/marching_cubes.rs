//! Marching cubes over a uniform lattice
//!
//! The lattice has `n` samples per axis inside the bounds and is swept one
//! z-layer at a time. Only two sample planes are resident: the lower plane
//! `a` (positions `u`) and the upper plane `b` (positions `v`). Vertices are
//! created once per straddling lattice edge and shared by every cell that
//! touches the edge, so the mesh comes out indexed without a dedup pass.

use super::dichotomy::{dichotomy, DICHOTOMY_EPSILON};
use super::tables::TRI_TABLE;
use super::{Mesh, Topology};
use crate::eval::{EvalCounter, ScalarField};
use crate::types::Aabb;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::mem::swap;
use tracing::{debug, warn};

/// Sentinel for lattice edges without a vertex
const NO_VERTEX: u32 = u32::MAX;

/// Configuration for marching cubes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarchingCubesConfig {
    /// Samples along each axis (at least 2)
    pub resolution: u32,
    /// Whether to compute vertex normals from the field gradient
    pub compute_normals: bool,
    /// Stopping length of the edge refinement
    pub dichotomy_epsilon: f32,
}

impl Default for MarchingCubesConfig {
    fn default() -> Self {
        MarchingCubesConfig {
            resolution: 64,
            compute_normals: true,
            dichotomy_epsilon: DICHOTOMY_EPSILON,
        }
    }
}

impl MarchingCubesConfig {
    /// Default settings at the given resolution
    pub fn with_resolution(resolution: u32) -> Self {
        MarchingCubesConfig {
            resolution,
            ..Default::default()
        }
    }

    /// Coarse lattice without normals, for interactive previews
    pub fn preview() -> Self {
        MarchingCubesConfig {
            resolution: 24,
            compute_normals: false,
            dichotomy_epsilon: 1e-3,
        }
    }
}

/// Polygonize the zero level set of `field` inside `bounds`
///
/// A resolution below 2 yields an empty mesh.
pub fn marching_cubes<F: ScalarField + ?Sized>(
    field: &F,
    bounds: &Aabb,
    config: &MarchingCubesConfig,
) -> Mesh {
    Polygonizer::new(field, bounds, config).run()
}

/// Polygonize like [`marching_cubes`], counting every node evaluation
///
/// Sampling, edge refinement and normal estimation are all counted.
pub fn marching_cubes_counted<F: ScalarField + ?Sized>(
    field: &F,
    bounds: &Aabb,
    config: &MarchingCubesConfig,
    counter: &EvalCounter,
) -> Mesh {
    let counted = Counted { field, counter };
    Polygonizer::new(&counted, bounds, config).run()
}

/// Field adapter that routes every evaluation through a counter
struct Counted<'a, F: ?Sized> {
    field: &'a F,
    counter: &'a EvalCounter,
}

impl<F: ScalarField + ?Sized> ScalarField for Counted<'_, F> {
    fn value_with(&self, point: Vec3, _counter: Option<&EvalCounter>) -> f32 {
        self.field.value_with(point, Some(self.counter))
    }
}

/// One sample plane with its straddling-edge vertex indices
struct Plane {
    values: Vec<f32>,
    positions: Vec<Vec3>,
    /// Vertex on the edge from (i, j) to (i + 1, j)
    edge_x: Vec<u32>,
    /// Vertex on the edge from (i, j) to (i, j + 1)
    edge_y: Vec<u32>,
}

impl Plane {
    fn new(len: usize) -> Self {
        Plane {
            values: vec![0.0; len],
            positions: vec![Vec3::ZERO; len],
            edge_x: vec![NO_VERTEX; len],
            edge_y: vec![NO_VERTEX; len],
        }
    }
}

#[inline]
fn straddles(va: f32, vb: f32) -> bool {
    (va < 0.0) != (vb < 0.0)
}

struct Polygonizer<'a, F: ?Sized> {
    field: &'a F,
    origin: Vec3,
    step: Vec3,
    n: usize,
    config: &'a MarchingCubesConfig,
    mesh: Mesh,
}

impl<'a, F: ScalarField + ?Sized> Polygonizer<'a, F> {
    fn new(field: &'a F, bounds: &Aabb, config: &'a MarchingCubesConfig) -> Self {
        let n = config.resolution as usize;
        let step = if n > 1 {
            bounds.size() / (n - 1) as f32
        } else {
            Vec3::ZERO
        };
        Polygonizer {
            field,
            origin: bounds.min,
            step,
            n,
            config,
            mesh: Mesh::new(Topology::Triangles),
        }
    }

    #[inline]
    fn index(&self, i: usize, j: usize) -> usize {
        i + j * self.n
    }

    fn run(mut self) -> Mesh {
        let n = self.n;
        if n < 2 {
            warn!(resolution = n, "Resolution below 2, nothing to polygonize");
            return self.mesh;
        }

        debug!(resolution = n, step = ?self.step, "Starting marching cubes");

        let mut lower = Plane::new(n * n);
        let mut upper = Plane::new(n * n);
        let mut edge_z = vec![NO_VERTEX; n * n];

        self.sample_plane(0, &mut lower);
        self.refine_plane(&mut lower);

        for k in 1..n {
            self.sample_plane(k, &mut upper);
            self.refine_plane(&mut upper);
            self.refine_vertical(&lower, &upper, &mut edge_z);
            self.emit_layer(&lower, &upper, &edge_z);
            swap(&mut lower, &mut upper);
        }

        debug!(
            vertices = self.mesh.vertex_count(),
            triangles = self.mesh.triangle_count(),
            "Marching cubes finished"
        );
        self.mesh
    }

    fn sample_plane(&self, k: usize, plane: &mut Plane) {
        let z = self.origin.z + k as f32 * self.step.z;
        for j in 0..self.n {
            let y = self.origin.y + j as f32 * self.step.y;
            for i in 0..self.n {
                let p = Vec3::new(self.origin.x + i as f32 * self.step.x, y, z);
                let idx = self.index(i, j);
                plane.positions[idx] = p;
                plane.values[idx] = self.field.value(p);
            }
        }
    }

    /// Create vertices on the straddling x and y edges of a plane
    fn refine_plane(&mut self, plane: &mut Plane) {
        let n = self.n;
        for j in 0..n {
            for i in 0..n {
                let idx = self.index(i, j);
                if i + 1 < n {
                    let next = self.index(i + 1, j);
                    let vertex = self.edge_vertex(plane, plane, idx, next, self.step.x);
                    plane.edge_x[idx] = vertex;
                }
                if j + 1 < n {
                    let next = self.index(i, j + 1);
                    let vertex = self.edge_vertex(plane, plane, idx, next, self.step.y);
                    plane.edge_y[idx] = vertex;
                }
            }
        }
    }

    /// Create vertices on the straddling edges joining two planes
    fn refine_vertical(&mut self, lower: &Plane, upper: &Plane, edge_z: &mut [u32]) {
        for (idx, slot) in edge_z.iter_mut().enumerate() {
            *slot = self.edge_vertex(lower, upper, idx, idx, self.step.z);
        }
    }

    fn edge_vertex(&mut self, from: &Plane, to: &Plane, a: usize, b: usize, length: f32) -> u32 {
        let (va, vb) = (from.values[a], to.values[b]);
        if !straddles(va, vb) {
            return NO_VERTEX;
        }
        let p = dichotomy(
            self.field,
            from.positions[a],
            to.positions[b],
            va,
            vb,
            length,
            self.config.dichotomy_epsilon,
        );
        if self.config.compute_normals {
            let normal = self.field.normal(p);
            self.mesh.push_vertex_with_normal(p, normal)
        } else {
            self.mesh.push_vertex(p)
        }
    }

    /// Triangulate every cell between the two planes
    fn emit_layer(&mut self, a: &Plane, b: &Plane, ez: &[u32]) {
        let n = self.n;
        for j in 0..n - 1 {
            for i in 0..n - 1 {
                let i00 = self.index(i, j);
                let i10 = self.index(i + 1, j);
                let i01 = self.index(i, j + 1);
                let i11 = self.index(i + 1, j + 1);

                let corners = [
                    a.values[i00],
                    a.values[i10],
                    a.values[i01],
                    a.values[i11],
                    b.values[i00],
                    b.values[i10],
                    b.values[i01],
                    b.values[i11],
                ];
                let cube_index = corners
                    .iter()
                    .enumerate()
                    .filter(|&(_, &v)| v < 0.0)
                    .fold(0usize, |acc, (bit, _)| acc | (1 << bit));
                if cube_index == 0 || cube_index == 255 {
                    continue;
                }

                let e = [
                    a.edge_x[i00],
                    a.edge_x[i01],
                    b.edge_x[i00],
                    b.edge_x[i01],
                    a.edge_y[i00],
                    a.edge_y[i10],
                    b.edge_y[i00],
                    b.edge_y[i10],
                    ez[i00],
                    ez[i10],
                    ez[i01],
                    ez[i11],
                ];

                for tri in TRI_TABLE[cube_index].chunks_exact(3) {
                    if tri[0] < 0 {
                        break;
                    }
                    self.mesh.push_triangle(
                        e[tri[0] as usize],
                        e[tri[1] as usize],
                        e[tri[2] as usize],
                    );
                }
            }
        }
    }
}
