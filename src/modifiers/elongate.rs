//! Elongation modifier for SDFs

use glam::Vec3;

/// Stretch a shape by collapsing the slab `[-extent, extent]` onto its center
///
/// Points inside the slab map to the child's center plane, points outside
/// are shifted toward it by `extent`.
#[inline(always)]
pub fn modifier_elongate(point: Vec3, extent: Vec3) -> Vec3 {
    let extent = extent.abs();
    point - point.clamp(-extent, extent)
}
