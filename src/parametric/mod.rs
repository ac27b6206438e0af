//! Parametric curves and surfaces
//!
//! Closed-form Bernstein evaluation, meshed directly from the parameter
//! grid with no implicit-field step:
//! - [`Spline`]: Bézier curve over a control polygon
//! - [`Revolution`]: tube swept along a spline with a radial profile
//! - [`BezierPatch`]: tensor-product surface over a [`ControlGrid`]
//!
//! Computation is in `f64`; meshes are emitted in `f32`.

mod bernstein;
mod curve;
mod patch;
mod revolution;
mod sampling;
mod spline;

pub use bernstein::{bernstein, binomial, BINOMIAL_ROWS};
pub use curve::{first_derivative, second_derivative, Curve, DERIVATIVE_EPSILON};
pub use patch::{BezierPatch, ControlGrid};
pub use revolution::{RadialFn, Revolution};
pub use sampling::{curve_points, surface_points};
pub use spline::Spline;
