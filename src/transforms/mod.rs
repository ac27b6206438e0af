//! Spatial transforms for SDFs
//!
//! Inverse point mappings applied before delegating to the child.

mod rotate;
mod scale;
mod translate;

pub use rotate::{transform_rotate, transform_rotate_x, transform_rotate_y, transform_rotate_z};
pub use scale::transform_scale;
pub use translate::transform_translate;
