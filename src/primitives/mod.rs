//! Primitive SDF shapes
//!
//! Pure distance functions in the primitive's local frame. Node placement
//! (sphere center, box corners) is resolved by the evaluator.

mod box3d;
mod capsule;
mod cone;
mod cylinder;
mod ellipsoid;
mod octahedron;
mod plane;
mod pyramid;
mod sphere;
mod torus;

pub use box3d::{sdf_box3d, sdf_box_corners};
pub use capsule::{sdf_capsule, sdf_capsule_vertical};
pub use cone::sdf_cone;
pub use cylinder::sdf_cylinder;
pub use ellipsoid::sdf_ellipsoid;
pub use octahedron::sdf_octahedron;
pub use plane::sdf_plane;
pub use pyramid::sdf_pyramid;
pub use sphere::{sdf_sphere, sdf_sphere_at};
pub use torus::sdf_torus;
