//! Sphere tracing with hit details

use crate::eval::ScalarField;
use crate::types::{Hit, Ray};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Raymarch configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RaymarchConfig {
    /// Maximum number of marching steps
    pub max_steps: u32,
    /// Distance threshold for surface hit
    pub epsilon: f32,
    /// Maximum distance travelled along the ray
    pub max_distance: f32,
}

impl Default for RaymarchConfig {
    fn default() -> Self {
        RaymarchConfig {
            max_steps: 128,
            epsilon: 0.0001,
            max_distance: 100.0,
        }
    }
}

impl RaymarchConfig {
    /// High quality configuration
    pub fn high_quality() -> Self {
        RaymarchConfig {
            max_steps: 512,
            epsilon: 0.00001,
            max_distance: 100.0,
        }
    }

    /// Fast configuration for preview
    pub fn fast() -> Self {
        RaymarchConfig {
            max_steps: 64,
            epsilon: 0.0005,
            max_distance: 50.0,
        }
    }
}

/// Perform sphere tracing along a ray
///
/// Steps by the field value until it drops below `config.epsilon` (or below
/// zero, for fields that overestimate distance). The hit normal is the
/// normalized field gradient at the hit point.
///
/// # Returns
/// Hit information, or `None` when the ray escapes `max_distance` or the
/// step budget runs out
pub fn raymarch<F: ScalarField + ?Sized>(field: &F, ray: Ray, config: &RaymarchConfig) -> Option<Hit> {
    let mut t = 0.0;
    let mut steps = 0;

    while t <= config.max_distance && steps < config.max_steps {
        let point = ray.at(t);
        let d = field.value(point);

        if d < config.epsilon {
            return Some(Hit {
                distance: t,
                point,
                normal: field.normal(point),
                steps,
            });
        }

        t += d;
        steps += 1;
    }

    None
}

/// Cast multiple rays in parallel
pub fn raymarch_batch_parallel<F: ScalarField + Sync + ?Sized>(
    field: &F,
    rays: &[Ray],
    config: &RaymarchConfig,
) -> Vec<Option<Hit>> {
    rays.par_iter()
        .map(|ray| raymarch(field, *ray, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SdfNode;
    use glam::Vec3;

    #[test]
    fn test_raymarch_sphere_hit() {
        let sphere = SdfNode::sphere(Vec3::ZERO, 1.0);
        let ray = Ray::new(Vec3::new(-5.0, 0.0, 0.0), Vec3::X);

        let hit = raymarch(&sphere, ray, &RaymarchConfig::default()).unwrap();
        assert!((hit.distance - 4.0).abs() < 0.01);
        assert!((hit.point.x + 1.0).abs() < 0.01);
        assert!((hit.normal - Vec3::NEG_X).length() < 0.01);
        assert!(hit.steps > 0);
    }

    #[test]
    fn test_raymarch_miss() {
        let sphere = SdfNode::sphere(Vec3::ZERO, 1.0);
        let ray = Ray::new(Vec3::new(-5.0, 5.0, 0.0), Vec3::X);
        assert!(raymarch(&sphere, ray, &RaymarchConfig::default()).is_none());
    }

    #[test]
    fn test_raymarch_respects_max_distance() {
        let sphere = SdfNode::sphere(Vec3::new(20.0, 0.0, 0.0), 1.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let config = RaymarchConfig {
            max_distance: 10.0,
            ..Default::default()
        };
        assert!(raymarch(&sphere, ray, &config).is_none());
        assert!(raymarch(&sphere, ray, &RaymarchConfig::default()).is_some());
    }

    #[test]
    fn test_batch_parallel() {
        let sphere = SdfNode::sphere(Vec3::ZERO, 1.0);
        let rays: Vec<Ray> = (0..8)
            .map(|i| Ray::new(Vec3::new(-5.0, i as f32 * 0.5, 0.0), Vec3::X))
            .collect();
        let hits = raymarch_batch_parallel(&sphere, &rays, &RaymarchConfig::fast());
        assert_eq!(hits.len(), 8);
        assert!(hits[0].is_some());
        assert!(hits[1].is_some());
        assert!(hits[7].is_none());
    }

    #[test]
    fn test_config_serde() {
        let config = RaymarchConfig::high_quality();
        let json = serde_json::to_string(&config).unwrap();
        let back: RaymarchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
