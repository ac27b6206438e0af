//! Hull (shell) modifier for SDFs

/// Shell of total thickness `thickness` centered on the child's surface
#[inline(always)]
pub fn modifier_hull(distance: f32, thickness: f32) -> f32 {
    distance.abs() - thickness * 0.5
}
