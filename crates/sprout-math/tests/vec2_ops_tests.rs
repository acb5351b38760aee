// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use sprout_math::math::{Quat, Vec2, Vec3};

fn approx_eq2(a: Vec2, b: Vec2) {
    assert!(
        (a.x - b.x).abs() <= 1e-6 && (a.y - b.y).abs() <= 1e-6,
        "expected {b:?}, got {a:?}"
    );
}

#[test]
fn scaling_unit_x_doubles_it() {
    let v = Vec2::new(1.0, 0.0) * 2.0;
    assert_eq!(v, Vec2::new(2.0, 0.0));
    assert_eq!(2.0 * Vec2::new(1.0, 0.0), v);
}

#[test]
fn binary_ops_match_compound_assignment() {
    let a = Vec2::new(3.0, -2.0);
    let b = Vec2::new(0.5, 4.0);

    let mut c = a;
    c += b;
    assert_eq!(c, a + b);

    let mut c = a;
    c -= b;
    assert_eq!(c, a - b);

    let mut c = a;
    c *= b;
    assert_eq!(c, a * b);
    assert_eq!(a * b, Vec2::new(1.5, -8.0));

    let mut c = a;
    c /= b;
    assert_eq!(c, a / b);
    assert_eq!(a / b, Vec2::new(6.0, -0.5));

    let mut c = a;
    c /= 2.0;
    assert_eq!(c, a / 2.0);
    assert_eq!(-a, Vec2::new(-3.0, 2.0));
}

#[test]
fn product_with_zero_then_add_returns_original() {
    let a = Vec2::new(1.0, 2.0);
    let b = Vec2::new(3.0, 4.0);
    assert_eq!(a * b, Vec2::new(3.0, 8.0));
    assert_eq!(-(a * b) * 0.0 + a, a);
}

#[test]
#[should_panic(expected = "Vec2 divided by a zero scalar")]
fn dividing_by_zero_scalar_panics() {
    let _ = Vec2::ONE / 0.0;
}

#[test]
fn componentwise_division_by_zero_lane_is_not_fatal() {
    let v = Vec2::ONE / Vec2::new(0.0, 1.0);
    assert!(v.x.is_infinite());
    assert_eq!(v.y, 1.0);
}

#[test]
fn length_and_distance() {
    let v = Vec2::new(3.0, 4.0);
    assert_eq!(v.length(), 5.0);
    assert_eq!(v.length_squared(), 25.0);
    assert_eq!(Vec2::distance(&Vec2::ZERO, &v), 5.0);
    assert_eq!(Vec2::distance_squared(&Vec2::ZERO, &v), 25.0);
}

#[test]
fn normalize_zero_stays_zero() {
    let mut v = Vec2::ZERO;
    v.normalize();
    assert_eq!(v, Vec2::ZERO);

    let mut w = Vec2::new(0.0, -7.0);
    w.normalize();
    assert_eq!(w, Vec2::new(0.0, -1.0));
}

#[test]
fn normalize_survives_overflowing_and_underflowing_lengths() {
    assert_eq!(Vec2::new(1e30, 1e30).length(), f32::INFINITY);
    let huge = Vec2::new(3e30, -4e30).normalized();
    assert!((huge - Vec2::new(0.6, -0.8)).length() <= 1e-6, "{huge:?}");

    assert_eq!(Vec2::new(-1e-30, 0.0).length(), 0.0);
    assert_eq!(Vec2::new(-1e-30, 0.0).normalized(), Vec2::new(-1.0, 0.0));
}

#[test]
fn min_max_clamp() {
    let a = Vec2::new(1.0, 5.0);
    let b = Vec2::new(3.0, 2.0);
    assert_eq!(Vec2::min(&a, &b), Vec2::new(1.0, 2.0));
    assert_eq!(Vec2::max(&a, &b), Vec2::new(3.0, 5.0));
    let clamped = Vec2::clamp(&Vec2::new(-4.0, 9.0), &Vec2::ZERO, &Vec2::splat(4.0));
    assert_eq!(clamped, Vec2::new(0.0, 4.0));
}

#[test]
fn out_variants_match_returning_forms() {
    let a = Vec2::new(1.0, 2.0);
    let b = Vec2::new(-3.0, 6.0);
    let n = Vec2::UNIT_Y;
    let mut out = Vec2::ZERO;

    Vec2::lerp_into(&a, &b, 0.25, &mut out);
    assert_eq!(out, Vec2::lerp(&a, &b, 0.25));
    Vec2::min_into(&a, &b, &mut out);
    assert_eq!(out, Vec2::min(&a, &b));
    Vec2::max_into(&a, &b, &mut out);
    assert_eq!(out, Vec2::max(&a, &b));
    Vec2::clamp_into(&b, &a, &Vec2::splat(4.0), &mut out);
    assert_eq!(out, Vec2::clamp(&b, &a, &Vec2::splat(4.0)));
    Vec2::smooth_step_into(&a, &b, 0.3, &mut out);
    assert_eq!(out, Vec2::smooth_step(&a, &b, 0.3));
    Vec2::reflect_into(&a, &n, &mut out);
    assert_eq!(out, Vec2::reflect(&a, &n));
    Vec2::refract_into(&a.normalized(), &n, 0.9, &mut out);
    assert_eq!(out, Vec2::refract(&a.normalized(), &n, 0.9));
}

#[test]
fn lerp_extrapolates_and_smooth_step_clamps() {
    let a = Vec2::ZERO;
    let b = Vec2::new(10.0, -10.0);
    assert_eq!(Vec2::lerp(&a, &b, 1.5), Vec2::new(15.0, -15.0));
    assert_eq!(Vec2::smooth_step(&a, &b, -1.0), a);
    assert_eq!(Vec2::smooth_step(&a, &b, 2.0), b);
    // 0.25 → 0.15625
    approx_eq2(Vec2::smooth_step(&a, &b, 0.25), Vec2::new(1.5625, -1.5625));
}

#[test]
fn reflect_off_floor() {
    let r = Vec2::reflect(&Vec2::new(2.0, -3.0), &Vec2::UNIT_Y);
    assert_eq!(r, Vec2::new(2.0, 3.0));
}

#[test]
fn refract_straight_through_with_unit_eta() {
    let i = Vec2::new(1.0, -1.0).normalized();
    approx_eq2(Vec2::refract(&i, &Vec2::UNIT_Y, 1.0), i);
}

#[test]
fn refract_total_internal_reflection_returns_zero() {
    let i = Vec2::new(1.0, -0.1).normalized();
    assert_eq!(Vec2::refract(&i, &Vec2::UNIT_Y, 1.5), Vec2::ZERO);
}

#[test]
fn transform_rotates_in_plane() {
    let q = Quat::from_axis_angle(Vec3::UNIT_Z, core::f32::consts::FRAC_PI_2);
    approx_eq2(Vec2::transform(&Vec2::UNIT_X, &q), Vec2::UNIT_Y);
    let mut out = Vec2::ZERO;
    Vec2::transform_into(&Vec2::UNIT_Y, &q, &mut out);
    approx_eq2(out, Vec2::new(-1.0, 0.0));
}

#[test]
fn display_honours_precision() {
    let v = Vec2::new(1.0, 0.5);
    assert_eq!(format!("{v}"), "[1, 0.5]");
    assert_eq!(format!("{v:.2}"), "[1.00, 0.50]");
}

#[test]
fn array_conversions() {
    let v: Vec2 = [4.0, 5.0].into();
    let arr: [f32; 2] = v.into();
    assert_eq!(arr, [4.0, 5.0]);
    assert_eq!(bytemuck::cast::<Vec2, [f32; 2]>(v), arr);
}
