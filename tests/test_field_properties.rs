//! Integration tests: Field algebra and transform properties
//!
//! Property-based checks that the operators combine child distances
//! exactly and that transforms move the zero set without distorting it.

mod common;

use common::*;
use proptest::prelude::*;
use sdf_sculpt::prelude::*;

fn point_strategy() -> impl Strategy<Value = Vec3> {
    (-2.0f32..2.0, -2.0f32..2.0, -2.0f32..2.0).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

fn axis_strategy() -> impl Strategy<Value = Vec3> {
    point_strategy().prop_filter("non-degenerate axis", |v| v.length() > 0.1)
}

proptest! {
    #[test]
    fn hard_operators_are_exact(p in point_strategy()) {
        let a = test_sphere();
        let b = SdfNode::box_centered(Vec3::new(0.4, 0.0, 0.0), Vec3::splat(0.6));
        let (da, db) = (a.value(p), b.value(p));

        prop_assert_eq!(a.clone().union(b.clone()).value(p), da.min(db));
        prop_assert_eq!(a.clone().intersection(b.clone()).value(p), da.max(db));
        prop_assert_eq!(a.clone().subtract(b.clone()).value(p), da.max(-db));
        prop_assert_eq!(a.xor(b).value(p), da.min(db).max(-da.max(db)));
    }

    #[test]
    fn smooth_operators_with_zero_radius_are_hard(p in point_strategy()) {
        let a = test_sphere();
        let b = SdfNode::torus(0.8, 0.3);

        prop_assert_eq!(
            a.clone().smooth_union(b.clone(), 0.0).value(p),
            a.clone().union(b.clone()).value(p)
        );
        prop_assert_eq!(
            a.clone().smooth_intersection(b.clone(), 0.0).value(p),
            a.clone().intersection(b.clone()).value(p)
        );
        prop_assert_eq!(
            a.clone().smooth_subtract(b.clone(), 0.0).value(p),
            a.subtract(b).value(p)
        );
    }

    #[test]
    fn smooth_union_never_exceeds_hard_union(p in point_strategy(), k in 0.0f32..0.5) {
        let a = test_sphere();
        let b = test_box().translate(Vec3::X);
        let smooth = a.clone().smooth_union(b.clone(), k).value(p);
        prop_assert!(smooth <= a.union(b).value(p));
    }

    #[test]
    fn translation_round_trip(p in point_strategy(), offset in point_strategy()) {
        let shape = test_complex_shape();
        let moved = shape.clone().translate(offset);
        let (d0, d1) = (shape.value(p), moved.value(p + offset));
        prop_assert!((d0 - d1).abs() < 1e-4, "{} vs {}", d0, d1);
    }

    #[test]
    fn rotation_round_trip(p in point_strategy(), axis in axis_strategy(), angle in -3.0f32..3.0) {
        let shape = test_csg();
        let rotated = shape.clone().rotate(axis, angle);
        let q = Quat::from_axis_angle(axis.normalize(), angle);
        let (d0, d1) = (shape.value(p), rotated.value(q * p));
        prop_assert!((d0 - d1).abs() < 1e-4, "{} vs {}", d0, d1);
    }

    #[test]
    fn opposite_rotations_cancel(p in point_strategy(), axis in axis_strategy(), angle in -3.0f32..3.0) {
        let shape = test_complex_shape();
        let restored = shape.clone().rotate(axis, angle).rotate(axis, -angle);
        let (d0, d1) = (shape.value(p), restored.value(p));
        prop_assert!((d0 - d1).abs() < 1e-4, "{} vs {}", d0, d1);

        let restored_x = shape.clone().rotate_x(angle).rotate_x(-angle);
        prop_assert!((d0 - restored_x.value(p)).abs() < 1e-4);
    }

    #[test]
    fn axis_rotations_match_general_rotation(p in point_strategy(), angle in -3.0f32..3.0) {
        let shape = test_box().translate(Vec3::new(0.3, -0.2, 0.5));
        let pairs = [
            (shape.clone().rotate_x(angle), shape.clone().rotate(Vec3::X, angle)),
            (shape.clone().rotate_y(angle), shape.clone().rotate(Vec3::Y, angle)),
            (shape.clone().rotate_z(angle), shape.clone().rotate(Vec3::Z, angle)),
        ];
        for (fixed, general) in &pairs {
            let (d0, d1) = (fixed.value(p), general.value(p));
            prop_assert!((d0 - d1).abs() < 1e-4, "{} vs {}", d0, d1);
        }
    }

    #[test]
    fn uniform_scale_scales_distance(p in point_strategy(), factor in 0.25f32..4.0) {
        let shape = test_sphere();
        let scaled = shape.clone().scale(factor);
        let expected = shape.value(p / factor) * factor;
        prop_assert!((scaled.value(p) - expected).abs() < 1e-4);
    }

    #[test]
    fn tree_and_node_agree_on_sign(p in point_strategy()) {
        let shape = test_complex_shape();
        let tree = SdfTree::new(shape.clone());
        prop_assert_eq!(tree.value(p), eval(&shape, p));
        prop_assert_eq!(tree.inside(p), eval(&shape, p) < 0.0);
    }
}

#[test]
fn canonical_points_classify_against_unit_sphere() {
    let sphere = test_sphere();
    let expected_inside = [true, false, false, false, false, false, false, true];
    for (p, inside) in test_points().into_iter().zip(expected_inside) {
        if (p.length() - 1.0).abs() < 1e-2 {
            assert_close(sphere.value(p), 0.0, 1e-2, "surface point");
        } else {
            assert_eq!(sphere.inside(p), inside, "{:?}", p);
        }
    }
}

#[test]
fn hull_and_rounding_offset_the_field() {
    let p = Vec3::new(0.2, 1.4, -0.3);
    let d = test_box().value(p);
    assert_close(test_box().round(0.1).value(p), d - 0.1, 1e-6, "rounding");
    assert_close(test_box().hull(0.1).value(p), d.abs() - 0.05, 1e-6, "hull");
}

#[test]
fn repetition_is_periodic() {
    let shape = SdfNode::sphere(Vec3::ZERO, 0.3).repeat(Vec3::splat(1.5));
    for p in test_grid_points(6) {
        let shifted = p + Vec3::new(1.5, -3.0, 4.5);
        assert_close(shape.value(p), shape.value(shifted), 1e-4, "period");
    }
}

#[test]
fn gradient_is_unit_length_away_from_creases() {
    let sphere = test_sphere();
    for p in test_grid_points(5) {
        if p.length() > 0.2 {
            let g = gradient(&sphere, p, 1e-3);
            assert_close(g.length(), 1.0, 1e-2, "gradient length");
        }
    }
}

#[test]
fn batch_evaluation_matches_single_points() {
    let shape = test_complex_shape();
    let points = test_grid_points(8);
    let serial = eval_batch(&shape, &points);
    let parallel = eval_batch_parallel(&shape, &points);
    assert_eq!(serial, parallel);
    for (p, d) in points.iter().zip(&serial) {
        assert_eq!(*d, eval(&shape, *p));
    }
}
