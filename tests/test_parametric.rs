//! Integration tests: Parametric curves and surfaces
//!
//! Bernstein basis identities, curve frames and the sizes of meshes built
//! from parameter grids.

use proptest::prelude::*;
use sdf_sculpt::prelude::*;
use sdf_sculpt::parametric::{bernstein, binomial, curve_points};

proptest! {
    #[test]
    fn bernstein_is_partition_of_unity(t in 0.0f64..=1.0, n in 0usize..40) {
        let sum: f64 = (0..=n).map(|k| bernstein(t, k, n)).sum();
        prop_assert!((sum - 1.0).abs() < 1e-9, "n={} t={} sum={}", n, t, sum);
    }

    #[test]
    fn bernstein_is_symmetric(t in 0.0f64..=1.0, n in 1usize..20, k in 0usize..20) {
        let k = k.min(n);
        let (a, b) = (bernstein(t, k, n), bernstein(1.0 - t, n - k, n));
        prop_assert!((a - b).abs() < 1e-12);
    }

    #[test]
    fn spline_stays_in_control_hull(t in 0.0f64..=1.0) {
        let spline = Spline::new(vec![
            DVec3::ZERO,
            DVec3::new(1.0, 2.0, 0.0),
            DVec3::new(2.0, -1.0, 1.0),
            DVec3::new(3.0, 0.0, 0.0),
        ]);
        let p = spline.point(t);
        prop_assert!((-1e-12..=3.0 + 1e-12).contains(&p.x));
        prop_assert!((-1.0..=2.0).contains(&p.y));
        prop_assert!((0.0..=1.0).contains(&p.z));
    }
}

#[test]
fn binomial_rows_match_pascal() {
    assert_eq!(binomial(0, 0), 1.0);
    assert_eq!(binomial(5, 2), 10.0);
    assert_eq!(binomial(10, 5), 252.0);
    assert_eq!(binomial(4, 7), 0.0);
    // Beyond the precomputed table
    assert_eq!(binomial(40, 1), 40.0);
    assert!((binomial(40, 20) - 137_846_528_820.0).abs() < 1.0);
}

#[test]
fn spline_interpolates_end_points() {
    let controls = vec![
        DVec3::new(-1.0, 0.0, 0.0),
        DVec3::new(0.0, 3.0, 0.0),
        DVec3::new(1.0, 0.0, 2.0),
    ];
    let spline = Spline::new(controls.clone());
    assert_eq!(spline.degree(), 2);
    assert!((spline.point(0.0) - controls[0]).length() < 1e-12);
    assert!((spline.point(1.0) - controls[2]).length() < 1e-12);
}

#[test]
fn spline_frame_is_orthonormal() {
    let spline = Spline::new(vec![
        DVec3::ZERO,
        DVec3::new(1.0, 1.0, 0.0),
        DVec3::new(2.0, 0.0, 1.0),
        DVec3::new(3.0, 1.0, 1.0),
    ]);
    for t in [0.1, 0.35, 0.5, 0.8] {
        let (tangent, normal, binormal) = (spline.tangent(t), spline.normal(t), spline.binormal(t));
        assert!((tangent.length() - 1.0).abs() < 1e-6);
        assert!((normal.length() - 1.0).abs() < 1e-6);
        assert!((binormal.length() - 1.0).abs() < 1e-6);
        assert!(tangent.dot(normal).abs() < 1e-6);
        assert!(tangent.dot(binormal).abs() < 1e-6);
    }
}

#[test]
fn spline_line_strip() {
    let spline = Spline::new(vec![DVec3::ZERO, DVec3::X, DVec3::new(2.0, 1.0, 0.0)]);
    let mesh = spline.polygonize(16).unwrap();
    assert_eq!(mesh.topology, Topology::LineStrip);
    assert_eq!(mesh.vertex_count(), 16);
    assert_eq!(mesh.vertices[0], Vec3::ZERO);
    assert!((mesh.vertices[15] - Vec3::new(2.0, 1.0, 0.0)).length() < 1e-6);
}

#[test]
fn revolution_mesh_sizes() {
    let tube = Revolution::new(Spline::new(vec![DVec3::ZERO, DVec3::Y * 2.0]))
        .with_radial_fn(|u, _| 0.5 + 0.25 * u);

    let solid = tube.polygonize(10).unwrap();
    assert_eq!(solid.vertex_count(), 100);
    assert_eq!(solid.triangle_count(), 2 * 9 * 9);

    let wire = tube.polygonize_with(10, Topology::Lines).unwrap();
    assert_eq!(wire.vertex_count(), 100);
    assert_eq!(wire.line_count(), 2 * 10 * 9);
}

#[test]
fn revolution_follows_radial_profile() {
    let tube = Revolution::new(Spline::new(vec![DVec3::ZERO, DVec3::Y * 2.0]))
        .with_radial_fn(|u, _| 0.5 + 0.25 * u);
    for &u in &[0.0, 0.5, 1.0] {
        for &theta in &[0.0, 0.3, 0.7] {
            let offset = tube.point(u, theta) - tube.spline().point(u);
            assert!((offset.length() - (0.5 + 0.25 * u)).abs() < 1e-9);
        }
    }
}

#[test]
fn patch_mesh_sizes() {
    let heights = [0.0, 0.5, 0.0, 0.5, 1.0, 0.5, 0.0, 0.5, 0.0];
    let patch = BezierPatch::new(ControlGrid::from_heights(3, 3, &heights, 2.0).unwrap());

    let mesh = patch.polygonize(12).unwrap();
    assert_eq!(mesh.vertex_count(), 144);
    assert_eq!(mesh.triangle_count(), 2 * 11 * 11);

    // Corners interpolate, the interior stays below the control peak
    let top = mesh.bounds().unwrap().max.y;
    assert!(top > 0.0 && top < 2.0, "peak {}", top);
    assert_eq!(patch.point(0.0, 0.0), DVec3::ZERO);
}

#[test]
fn meshing_rejects_low_resolution() {
    let spline = Spline::new(vec![DVec3::ZERO, DVec3::X]);
    assert!(matches!(
        spline.polygonize(2),
        Err(SdfError::InvalidResolution { .. })
    ));
    assert!(matches!(
        Spline::new(vec![DVec3::ZERO]).polygonize(8),
        Err(SdfError::NotEnoughControlPoints { .. })
    ));
    assert!(Revolution::new(spline).polygonize(2).is_err());
}

#[test]
fn closures_sample_uniformly() {
    let helix = curve_points(9, |t| {
        let a = t * std::f64::consts::TAU;
        DVec3::new(a.cos(), t, a.sin())
    });
    assert_eq!(helix.len(), 9);
    assert!((helix[8] - DVec3::new(1.0, 1.0, 0.0)).length() < 1e-12);
}
