//! Unary field modifiers
//!
//! Domain modifiers remap the query point before the child is evaluated;
//! distance modifiers post-process the child's distance.

mod elongate;
mod hull;
mod repeat;
mod round;

pub use elongate::modifier_elongate;
pub use hull::modifier_hull;
pub use repeat::modifier_repeat_infinite;
pub use round::modifier_round;
