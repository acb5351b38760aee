// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use sprout_math::math::{Vec2, Vec3};

fn approx_eq3(a: Vec3, b: Vec3) {
    assert!((a - b).length() <= 1e-6, "expected {b:?}, got {a:?}");
}

#[test]
fn add_splatted_vectors() {
    assert_eq!(Vec3::splat(2.0) + Vec3::splat(1.0), Vec3::splat(3.0));
}

#[test]
fn binary_ops_match_compound_assignment() {
    let a = Vec3::new(1.0, -2.0, 4.0);
    let b = Vec3::new(2.0, 0.5, -8.0);

    let mut c = a;
    c += b;
    assert_eq!(c, a + b);
    let mut c = a;
    c -= b;
    assert_eq!(c, a - b);
    let mut c = a;
    c *= b;
    assert_eq!(c, Vec3::new(2.0, -1.0, -32.0));
    let mut c = a;
    c /= b;
    assert_eq!(c, Vec3::new(0.5, -4.0, -0.5));
    let mut c = a;
    c *= 3.0;
    assert_eq!(c, a * 3.0);
    assert_eq!(3.0 * a, a * 3.0);
    let mut c = a;
    c /= 4.0;
    assert_eq!(c, Vec3::new(0.25, -0.5, 1.0));
}

#[test]
#[should_panic(expected = "Vec3 divided by a zero scalar")]
fn dividing_by_zero_scalar_panics() {
    let _ = Vec3::new(1.0, 1.0, 1.0) / 0.0;
}

#[test]
#[should_panic(expected = "Vec3 divided by a zero scalar")]
fn compound_divide_by_zero_scalar_panics() {
    let mut v = Vec3::ONE;
    v /= 0.0;
}

#[test]
fn cross_follows_right_hand_rule() {
    assert_eq!(Vec3::UNIT_X.cross(&Vec3::UNIT_Y), Vec3::UNIT_Z);
    assert_eq!(Vec3::UNIT_Y.cross(&Vec3::UNIT_Z), Vec3::UNIT_X);
    assert_eq!(Vec3::UNIT_Y.cross(&Vec3::UNIT_X), -Vec3::UNIT_Z);
    let a = Vec3::new(1.0, 2.0, 3.0);
    assert_eq!(a.cross(&a), Vec3::ZERO);
}

#[test]
fn dot_length_distance() {
    let a = Vec3::new(2.0, 3.0, 6.0);
    assert_eq!(a.length(), 7.0);
    assert_eq!(a.length_squared(), 49.0);
    assert_eq!(a.dot(&Vec3::UNIT_Z), 6.0);
    let b = Vec3::new(2.0, 3.0, 7.0);
    assert_eq!(Vec3::distance(&a, &b), 1.0);
    assert_eq!(Vec3::distance_squared(&a, &b), 1.0);
}

#[test]
fn normalize_in_place_and_zero_policy() {
    let mut v = Vec3::new(0.0, 3.0, 4.0);
    v.normalize();
    approx_eq3(v, Vec3::new(0.0, 0.6, 0.8));
    assert_eq!(Vec3::ZERO.normalized(), Vec3::ZERO);
}

#[test]
fn normalize_rescales_extreme_magnitudes() {
    approx_eq3(
        Vec3::new(0.0, 3e30, 4e30).normalized(),
        Vec3::new(0.0, 0.6, 0.8),
    );
    approx_eq3(
        Vec3::new(0.0, 3e-25, -4e-25).normalized(),
        Vec3::new(0.0, 0.6, -0.8),
    );
    let mut v = Vec3::new(2e20, 0.0, 0.0);
    v.normalize();
    assert_eq!(v, Vec3::UNIT_X);
}

#[test]
fn lerp_hits_endpoints_exactly() {
    let a = Vec3::new(0.1, -7.3, 1e3);
    let b = Vec3::new(9.9, 0.7, -2e-3);
    assert_eq!(Vec3::lerp(&a, &b, 0.0), a);
    assert_eq!(Vec3::lerp(&a, &b, 1.0), b);
    approx_eq3(Vec3::lerp(&Vec3::ZERO, &Vec3::ONE, 0.5), Vec3::splat(0.5));
}

#[test]
fn smooth_step_midpoint_and_clamp() {
    let a = Vec3::ZERO;
    let b = Vec3::new(2.0, 4.0, 8.0);
    assert_eq!(Vec3::smooth_step(&a, &b, 0.5), Vec3::new(1.0, 2.0, 4.0));
    assert_eq!(Vec3::smooth_step(&a, &b, -3.0), a);
    assert_eq!(Vec3::smooth_step(&a, &b, 3.0), b);
}

#[test]
fn min_max_clamp() {
    let a = Vec3::new(1.0, 5.0, -2.0);
    let b = Vec3::new(3.0, 2.0, -1.0);
    assert_eq!(Vec3::min(&a, &b), Vec3::new(1.0, 2.0, -2.0));
    assert_eq!(Vec3::max(&a, &b), Vec3::new(3.0, 5.0, -1.0));
    assert_eq!(
        Vec3::clamp(&Vec3::new(-1.0, 0.5, 9.0), &Vec3::ZERO, &Vec3::ONE),
        Vec3::new(0.0, 0.5, 1.0)
    );
}

#[test]
fn reflect_preserves_length() {
    let i = Vec3::new(1.0, -2.0, 0.5);
    let r = Vec3::reflect(&i, &Vec3::UNIT_Y);
    assert_eq!(r, Vec3::new(1.0, 2.0, 0.5));
    assert_eq!(r.length(), i.length());
}

#[test]
fn refract_bends_towards_normal_and_handles_tir() {
    let i = Vec3::new(1.0, -1.0, 0.0).normalized();
    let t = Vec3::refract(&i, &Vec3::UNIT_Y, 1.0 / 1.5);
    // Snell: sin(out) = sin(45°) / 1.5
    let expected_sin = core::f32::consts::FRAC_1_SQRT_2 / 1.5;
    assert!((t.x - expected_sin).abs() < 1e-5, "{t:?}");
    assert!(t.y < 0.0);
    assert!((t.length() - 1.0).abs() < 1e-5);

    let grazing = Vec3::new(1.0, -0.1, 0.0).normalized();
    assert_eq!(Vec3::refract(&grazing, &Vec3::UNIT_Y, 1.5), Vec3::ZERO);
    let mut out = Vec3::ONE;
    Vec3::refract_into(&grazing, &Vec3::UNIT_Y, 1.5, &mut out);
    assert_eq!(out, Vec3::ZERO);
}

#[test]
fn out_variants_match_returning_forms() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(-1.0, 0.0, 9.0);
    let mut out = Vec3::ZERO;
    Vec3::lerp_into(&a, &b, 0.75, &mut out);
    assert_eq!(out, Vec3::lerp(&a, &b, 0.75));
    Vec3::min_into(&a, &b, &mut out);
    assert_eq!(out, Vec3::min(&a, &b));
    Vec3::max_into(&a, &b, &mut out);
    assert_eq!(out, Vec3::max(&a, &b));
    Vec3::clamp_into(&b, &Vec3::ZERO, &a, &mut out);
    assert_eq!(out, Vec3::clamp(&b, &Vec3::ZERO, &a));
    Vec3::smooth_step_into(&a, &b, 0.6, &mut out);
    assert_eq!(out, Vec3::smooth_step(&a, &b, 0.6));
    Vec3::reflect_into(&a, &Vec3::UNIT_X, &mut out);
    assert_eq!(out, Vec3::reflect(&a, &Vec3::UNIT_X));
}

#[test]
fn vec2_embedding_round_trips() {
    let v2 = Vec2::new(3.0, -4.0);
    let v3 = Vec3::from(v2);
    assert_eq!(v3, Vec3::new(3.0, -4.0, 0.0));
    assert_eq!(v3.truncate(), v2);
}

#[test]
fn display_and_arrays() {
    let v = Vec3::new(1.0, 2.5, -3.0);
    assert_eq!(v.to_string(), "[1, 2.5, -3]");
    assert_eq!(format!("{v:.1}"), "[1.0, 2.5, -3.0]");
    let arr: [f32; 3] = v.into();
    assert_eq!(Vec3::from(arr), v);
}
