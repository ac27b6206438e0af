//! Tensor-product Bézier patches

use super::bernstein::bernstein;
use super::sampling::{grid_mesh, GridWinding};
use crate::error::{SdfError, SdfResult};
use crate::mesh::{Mesh, Topology};
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Row-major grid of control points
///
/// Deserialization goes through [`ControlGrid::new`], so a grid whose point
/// count does not match its shape is rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawControlGrid")]
pub struct ControlGrid {
    width: usize,
    height: usize,
    points: Vec<DVec3>,
}

/// Unchecked wire form of [`ControlGrid`]
#[derive(Deserialize)]
struct RawControlGrid {
    width: usize,
    height: usize,
    points: Vec<DVec3>,
}

impl TryFrom<RawControlGrid> for ControlGrid {
    type Error = SdfError;

    fn try_from(raw: RawControlGrid) -> SdfResult<Self> {
        ControlGrid::new(raw.width, raw.height, raw.points)
    }
}

impl ControlGrid {
    /// Wrap `width × height` points, row by row
    pub fn new(width: usize, height: usize, points: Vec<DVec3>) -> SdfResult<Self> {
        if points.len() != width * height {
            return Err(SdfError::InvalidGrid {
                width,
                height,
                len: points.len(),
            });
        }
        Ok(ControlGrid {
            width,
            height,
            points,
        })
    }

    /// Flat grid spanning the unit square of the XZ plane
    ///
    /// Column `c` sits at `x = c/(width−1)`, row `r` at `z = r/(height−1)`.
    pub fn flat(width: usize, height: usize) -> Self {
        let coord = |i: usize, n: usize| if n > 1 { i as f64 / (n - 1) as f64 } else { 0.0 };
        let points = (0..height)
            .flat_map(|r| (0..width).map(move |c| DVec3::new(coord(c, width), 0.0, coord(r, height))))
            .collect();
        ControlGrid {
            width,
            height,
            points,
        }
    }

    /// Flat grid lifted by a height map
    ///
    /// `heights` holds one sample per control point, row by row; each lifts
    /// its point to `y = height·scale`.
    pub fn from_heights(width: usize, height: usize, heights: &[f64], scale: f64) -> SdfResult<Self> {
        if heights.len() != width * height {
            return Err(SdfError::InvalidGrid {
                width,
                height,
                len: heights.len(),
            });
        }
        let mut grid = ControlGrid::flat(width, height);
        for (p, h) in grid.points.iter_mut().zip(heights) {
            p.y = h * scale;
        }
        Ok(grid)
    }

    /// Columns
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Rows
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// All points, row by row
    #[inline]
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// Point at column `x`, row `y`
    pub fn get(&self, x: usize, y: usize) -> Option<DVec3> {
        if x < self.width && y < self.height {
            Some(self.points[y * self.width + x])
        } else {
            None
        }
    }

    /// Move the point at column `x`, row `y`; returns false when out of range
    pub fn set(&mut self, x: usize, y: usize, value: DVec3) -> bool {
        if x < self.width && y < self.height {
            self.points[y * self.width + x] = value;
            true
        } else {
            false
        }
    }
}

/// Bézier surface over a control grid
///
/// `point(u, v) = Σ_r Σ_c B(u, c, w−1)·B(v, r, h−1)·P[r][c]`: `u` runs
/// along the columns, `v` along the rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BezierPatch {
    control_points: ControlGrid,
}

impl BezierPatch {
    /// Create a patch from its control grid
    pub fn new(control_points: ControlGrid) -> Self {
        BezierPatch { control_points }
    }

    /// Control grid
    #[inline]
    pub fn control_points(&self) -> &ControlGrid {
        &self.control_points
    }

    /// Mutable control grid, for interactive editing
    #[inline]
    pub fn control_points_mut(&mut self) -> &mut ControlGrid {
        &mut self.control_points
    }

    /// Columns of the control grid
    #[inline]
    pub fn width(&self) -> usize {
        self.control_points.width
    }

    /// Rows of the control grid
    #[inline]
    pub fn height(&self) -> usize {
        self.control_points.height
    }

    /// Number of control points
    #[inline]
    pub fn point_count(&self) -> usize {
        self.control_points.points.len()
    }

    /// Surface point at `(u, v)`
    pub fn point(&self, u: f64, v: f64) -> DVec3 {
        let (w, h) = (self.width(), self.height());
        let (du, dv) = (w.saturating_sub(1), h.saturating_sub(1));
        let mut p = DVec3::ZERO;
        for r in 0..h {
            let bv = bernstein(v, r, dv);
            for c in 0..w {
                p += bernstein(u, c, du) * bv * self.control_points.points[r * w + c];
            }
        }
        p
    }

    /// Triangulate an `n × n` (u, v) grid
    pub fn polygonize(&self, resolution: usize) -> SdfResult<Mesh> {
        self.polygonize_with(resolution, Topology::Triangles)
    }

    /// Mesh an `n × n` (u, v) grid with the given topology
    pub fn polygonize_with(&self, resolution: usize, topology: Topology) -> SdfResult<Mesh> {
        SdfError::check_resolution(resolution, 3)?;
        if self.width() <= 1 {
            return Err(SdfError::NotEnoughControlPoints {
                got: self.width(),
                required: 1,
            });
        }
        Ok(grid_mesh(
            resolution,
            topology,
            GridWinding::CounterClockwise,
            |u, v| self.point(u, v),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_shape_is_checked() {
        assert!(ControlGrid::new(2, 2, vec![DVec3::ZERO; 4]).is_ok());
        assert!(matches!(
            ControlGrid::new(3, 2, vec![DVec3::ZERO; 5]),
            Err(SdfError::InvalidGrid { len: 5, .. })
        ));
        assert!(ControlGrid::from_heights(2, 2, &[0.0; 3], 1.0).is_err());
    }

    #[test]
    fn test_deserialize_checks_shape() {
        let json = r#"{"control_points":{"width":3,"height":3,"points":[[0,0,0]]}}"#;
        let err = serde_json::from_str::<BezierPatch>(json).unwrap_err();
        assert!(err.to_string().contains("control grid 3x3 needs 9 points, got 1"));

        let patch = BezierPatch::new(ControlGrid::flat(2, 3));
        let json = serde_json::to_string(&patch).unwrap();
        let parsed: BezierPatch = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, patch);
        assert_eq!(parsed.point_count(), 6);
    }

    #[test]
    fn test_grid_access() {
        let mut grid = ControlGrid::flat(3, 2);
        assert_eq!(grid.get(2, 1), Some(DVec3::new(1.0, 0.0, 1.0)));
        assert_eq!(grid.get(3, 0), None);
        assert!(grid.set(1, 0, DVec3::Y));
        assert!(!grid.set(0, 2, DVec3::Y));
        assert_eq!(grid.get(1, 0), Some(DVec3::Y));
    }

    #[test]
    fn test_flat_patch_is_bilinear() {
        let patch = BezierPatch::new(ControlGrid::flat(4, 4));
        let p = patch.point(0.3, 0.8);
        assert!((p - DVec3::new(0.3, 0.0, 0.8)).length() < 1e-12);
    }

    #[test]
    fn test_corners_interpolate() {
        let heights = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        let patch = BezierPatch::new(ControlGrid::from_heights(3, 2, &heights, 0.5).unwrap());
        assert!((patch.point(0.0, 0.0).y - 0.0).abs() < 1e-12);
        assert!((patch.point(1.0, 0.0).y - 1.0).abs() < 1e-12);
        assert!((patch.point(0.0, 1.0).y - 1.5).abs() < 1e-12);
        assert!((patch.point(1.0, 1.0).y - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_polygonize() {
        let patch = BezierPatch::new(ControlGrid::flat(3, 3));
        let mesh = patch.polygonize(10).unwrap();
        assert_eq!(mesh.vertex_count(), 100);
        assert_eq!(mesh.triangle_count(), 162);

        let strip = patch.polygonize_with(10, Topology::LineStrip).unwrap();
        assert_eq!(strip.vertex_count(), 100);
        assert!(strip.indices.is_empty());
    }

    #[test]
    fn test_polygonize_rejects_bad_input() {
        let patch = BezierPatch::new(ControlGrid::flat(1, 4));
        assert!(matches!(
            patch.polygonize(10),
            Err(SdfError::NotEnoughControlPoints { got: 1, .. })
        ));
        let patch = BezierPatch::new(ControlGrid::flat(2, 2));
        assert!(matches!(
            patch.polygonize(2),
            Err(SdfError::InvalidResolution { .. })
        ));
    }
}
