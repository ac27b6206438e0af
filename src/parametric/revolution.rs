//! Surfaces swept around a spline

use super::curve::Curve;
use super::sampling::{grid_mesh, GridWinding};
use super::spline::Spline;
use crate::error::SdfResult;
use crate::mesh::{Mesh, Topology};
use glam::DVec3;
use std::f64::consts::TAU;
use std::fmt;
use std::sync::Arc;

/// Radial profile `r(u, θ)` of a surface of revolution
pub type RadialFn = Arc<dyn Fn(f64, f64) -> f64 + Send + Sync>;

/// Tube swept along a spline
///
/// `point(u, θ) = curve(u) + r(u, θ)·(cos 2πθ·N(u) + sin 2πθ·B(u))`, with
/// θ in turns and `N`, `B` the curve's normal and binormal.
#[derive(Clone)]
pub struct Revolution {
    spline: Spline,
    radial: RadialFn,
}

impl fmt::Debug for Revolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Revolution")
            .field("spline", &self.spline)
            .finish_non_exhaustive()
    }
}

impl Revolution {
    /// Sweep a unit-radius tube along `spline`
    pub fn new(spline: Spline) -> Self {
        Revolution {
            spline,
            radial: Arc::new(|_: f64, _: f64| 1.0),
        }
    }

    /// Replace the radial profile
    #[must_use]
    pub fn with_radial_fn<F>(mut self, radial: F) -> Self
    where
        F: Fn(f64, f64) -> f64 + Send + Sync + 'static,
    {
        self.radial = Arc::new(radial);
        self
    }

    /// Replace the radial profile in place
    pub fn set_radial_fn(&mut self, radial: RadialFn) {
        self.radial = radial;
    }

    /// Axis curve
    #[inline]
    pub fn spline(&self) -> &Spline {
        &self.spline
    }

    /// Mutable axis curve, for interactive editing
    #[inline]
    pub fn spline_mut(&mut self) -> &mut Spline {
        &mut self.spline
    }

    /// Radius at `(u, θ)`
    #[inline]
    pub fn radius(&self, u: f64, theta: f64) -> f64 {
        (self.radial)(u, theta)
    }

    /// Surface point at axis parameter `u` and angle `theta` (in turns)
    pub fn point(&self, u: f64, theta: f64) -> DVec3 {
        let angle = TAU * theta;
        let offset = angle.cos() * self.spline.normal(u) + angle.sin() * self.spline.binormal(u);
        self.spline.point(u) + self.radius(u, theta) * offset
    }

    /// Triangulate an `n × n` (u, θ) grid
    pub fn polygonize(&self, resolution: usize) -> SdfResult<Mesh> {
        self.polygonize_with(resolution, Topology::Triangles)
    }

    /// Mesh an `n × n` (u, θ) grid with the given topology
    pub fn polygonize_with(&self, resolution: usize, topology: Topology) -> SdfResult<Mesh> {
        self.spline.check_meshable(resolution)?;
        Ok(grid_mesh(
            resolution,
            topology,
            GridWinding::Clockwise,
            |u, theta| self.point(u, theta),
        ))
    }
}
