//! CSG (Constructive Solid Geometry) Operations
//!
//! Boolean operations for combining SDFs.

mod boolean;
mod smooth;

pub use boolean::{sdf_intersection, sdf_subtraction, sdf_union, sdf_xor};
pub use smooth::{
    sdf_smooth_intersection, sdf_smooth_subtraction, sdf_smooth_union, smooth_max, smooth_min,
};
