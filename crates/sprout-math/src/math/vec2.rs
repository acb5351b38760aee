// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use bytemuck::{Pod, Zeroable};

use crate::math::{self, write_components, Quat, Vec3};

/// Single-precision 2D vector.
///
/// * Plain value type: `Copy`, `#[repr(C)]`, castable with `bytemuck`.
/// * Equality is exact componentwise comparison; there is no epsilon.
/// * Dividing by a zero scalar panics; every other
///   degenerate input returns a documented sentinel instead.
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec2 {
    /// X component.
    pub x: f32,
    /// Y component.
    pub y: f32,
}

impl Vec2 {
    /// `(0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// `(1, 1)`.
    pub const ONE: Self = Self::new(1.0, 1.0);

    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates a vector with both components set to `value`.
    pub const fn splat(value: f32) -> Self {
        Self::new(value, value)
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }

    /// Euclidean length.
    pub fn length(&self) -> f32 {
        math::Scalar::sqrt(self.length_squared())
    }

    /// Squared Euclidean length.
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Distance between two points.
    pub fn distance(a: &Self, b: &Self) -> f32 {
        (*b - *a).length()
    }

    /// Squared distance between two points.
    pub fn distance_squared(a: &Self, b: &Self) -> f32 {
        (*b - *a).length_squared()
    }

    /// Normalizes the vector in place.
    ///
    /// A zero-length vector stays `(0, 0)`.
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Returns the unit vector pointing the same way, or `(0, 0)` when the
    /// length is zero.
    ///
    /// Vectors whose squared length overflows or underflows `f32` are scaled
    /// by their largest component first.
    ///
    /// ```
    /// use sprout_math::math::Vec2;
    /// assert_eq!(Vec2::new(1e30, 0.0).normalized(), Vec2::UNIT_X);
    /// ```
    pub fn normalized(&self) -> Self {
        let len = self.length();
        if len > 0.0 && len.is_finite() {
            return Self::new(self.x / len, self.y / len);
        }
        let scale = math::max(math::abs(self.x), math::abs(self.y));
        if scale > 0.0 && scale.is_finite() {
            let (x, y) = (self.x / scale, self.y / scale);
            let len = math::Scalar::sqrt(x * x + y * y);
            Self::new(x / len, y / len)
        } else {
            Self::ZERO
        }
    }

    /// Dot product.
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product of the two vectors embedded in the
    /// XY plane.
    ///
    /// ```
    /// use sprout_math::math::Vec2;
    /// assert_eq!(Vec2::UNIT_X.cross(&Vec2::UNIT_Y), 1.0);
    /// assert_eq!(Vec2::UNIT_Y.cross(&Vec2::UNIT_X), -1.0);
    /// ```
    pub fn cross(&self, other: &Self) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Componentwise linear interpolation; `t` is not clamped.
    pub fn lerp(a: &Self, b: &Self, t: f32) -> Self {
        Self::new(math::lerp(a.x, b.x, t), math::lerp(a.y, b.y, t))
    }

    /// [`Vec2::lerp`] writing into `out`.
    pub fn lerp_into(a: &Self, b: &Self, t: f32, out: &mut Self) {
        *out = Self::lerp(a, b, t);
    }

    /// Componentwise clamp of `v` to `[lo, hi]`.
    pub fn clamp(v: &Self, lo: &Self, hi: &Self) -> Self {
        Self::new(math::clamp(v.x, lo.x, hi.x), math::clamp(v.y, lo.y, hi.y))
    }

    /// [`Vec2::clamp`] writing into `out`.
    pub fn clamp_into(v: &Self, lo: &Self, hi: &Self, out: &mut Self) {
        *out = Self::clamp(v, lo, hi);
    }

    /// Componentwise minimum.
    pub fn min(a: &Self, b: &Self) -> Self {
        Self::new(math::min(a.x, b.x), math::min(a.y, b.y))
    }

    /// [`Vec2::min`] writing into `out`.
    pub fn min_into(a: &Self, b: &Self, out: &mut Self) {
        *out = Self::min(a, b);
    }

    /// Componentwise maximum.
    pub fn max(a: &Self, b: &Self) -> Self {
        Self::new(math::max(a.x, b.x), math::max(a.y, b.y))
    }

    /// [`Vec2::max`] writing into `out`.
    pub fn max_into(a: &Self, b: &Self, out: &mut Self) {
        *out = Self::max(a, b);
    }

    /// Hermite ease between `a` and `b`.
    ///
    /// `t` is clamped to `[0, 1]`, remapped with `t² (3 − 2t)` and then used
    /// for a linear interpolation.
    ///
    /// ```
    /// use sprout_math::math::Vec2;
    /// let a = Vec2::ZERO;
    /// let b = Vec2::new(4.0, 8.0);
    /// assert_eq!(Vec2::smooth_step(&a, &b, 0.5), Vec2::new(2.0, 4.0));
    /// assert_eq!(Vec2::smooth_step(&a, &b, 7.0), b);
    /// ```
    pub fn smooth_step(a: &Self, b: &Self, t: f32) -> Self {
        Self::lerp(a, b, smooth_factor(t))
    }

    /// [`Vec2::smooth_step`] writing into `out`.
    pub fn smooth_step_into(a: &Self, b: &Self, t: f32, out: &mut Self) {
        *out = Self::smooth_step(a, b, t);
    }

    /// Reflects `incident` about the plane with unit `normal`:
    /// `i − 2 (i · n) n`.
    ///
    /// ```
    /// use sprout_math::math::Vec2;
    /// let r = Vec2::reflect(&Vec2::new(1.0, -1.0), &Vec2::UNIT_Y);
    /// assert_eq!(r, Vec2::new(1.0, 1.0));
    /// ```
    pub fn reflect(incident: &Self, normal: &Self) -> Self {
        *incident - *normal * (2.0 * incident.dot(normal))
    }

    /// [`Vec2::reflect`] writing into `out`.
    pub fn reflect_into(incident: &Self, normal: &Self, out: &mut Self) {
        *out = Self::reflect(incident, normal);
    }

    /// Refracts `incident` through a surface with unit `normal` and ratio of
    /// indices of refraction `eta`.
    ///
    /// Returns `(0, 0)` on total internal reflection.
    pub fn refract(incident: &Self, normal: &Self, eta: f32) -> Self {
        let i_dot_n = incident.dot(normal);
        let k = 1.0 - eta * eta * (1.0 - i_dot_n * i_dot_n);
        if k < 0.0 {
            return Self::ZERO;
        }
        *incident * eta - *normal * (eta * i_dot_n + math::Scalar::sqrt(k))
    }

    /// [`Vec2::refract`] writing into `out`.
    pub fn refract_into(incident: &Self, normal: &Self, eta: f32, out: &mut Self) {
        *out = Self::refract(incident, normal, eta);
    }

    /// Rotates `v` by `rotation`, treating it as `(x, y, 0)` and dropping the
    /// resulting z.
    pub fn transform(v: &Self, rotation: &Quat) -> Self {
        Vec3::transform(&Vec3::from(*v), rotation).truncate()
    }

    /// [`Vec2::transform`] writing into `out`.
    pub fn transform_into(v: &Self, rotation: &Quat, out: &mut Self) {
        *out = Self::transform(v, rotation);
    }
}

/// Clamped Hermite remap `t² (3 − 2t)` shared by the vector smooth steps.
pub(crate) fn smooth_factor(t: f32) -> f32 {
    let t = math::clamp(t, 0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

impl From<[f32; 2]> for Vec2 {
    fn from(value: [f32; 2]) -> Self {
        Self::new(value[0], value[1])
    }
}

impl From<Vec2> for [f32; 2] {
    fn from(value: Vec2) -> Self {
        value.to_array()
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_components(f, &self.to_array())
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl MulAssign for Vec2 {
    fn mul_assign(&mut self, rhs: Self) {
        self.x *= rhs.x;
        self.y *= rhs.y;
    }
}

/// Componentwise division; a zero component yields an infinite/NaN lane.
impl DivAssign for Vec2 {
    fn div_assign(&mut self, rhs: Self) {
        self.x /= rhs.x;
        self.y /= rhs.y;
    }
}

impl MulAssign<f32> for Vec2 {
    fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl DivAssign<f32> for Vec2 {
    /// # Panics
    /// Panics when `rhs` is zero.
    fn div_assign(&mut self, rhs: f32) {
        assert!(rhs != 0.0, "Vec2 divided by a zero scalar");
        self.x /= rhs;
        self.y /= rhs;
    }
}

impl Add for Vec2 {
    type Output = Self;
    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl Sub for Vec2 {
    type Output = Self;
    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl Mul for Vec2 {
    type Output = Self;
    fn mul(mut self, rhs: Self) -> Self {
        self *= rhs;
        self
    }
}

impl Div for Vec2 {
    type Output = Self;
    fn div(mut self, rhs: Self) -> Self {
        self /= rhs;
        self
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(mut self, rhs: f32) -> Self {
        self *= rhs;
        self
    }
}

impl Mul<Vec2> for f32 {
    type Output = Vec2;
    fn mul(self, rhs: Vec2) -> Vec2 {
        rhs * self
    }
}

impl Div<f32> for Vec2 {
    type Output = Self;
    fn div(mut self, rhs: f32) -> Self {
        self /= rhs;
        self
    }
}

impl Neg for Vec2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}
