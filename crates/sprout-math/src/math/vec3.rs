// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use bytemuck::{Pod, Zeroable};

use crate::math::{self, vec2::smooth_factor, write_components, Quat, Vec2};

/// Single-precision 3D vector used throughout the engine.
///
/// * Components may represent either points or directions depending on the
///   calling context.
/// * Use [`crate::math::Mat4::transform_point`] for points (homogeneous `w = 1`)
///   and [`crate::math::Mat4::transform_direction`] for directions (homogeneous
///   `w = 0`).
/// * Same operation catalogue and degenerate-input policy as [`Vec2`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec3 {
    /// X component.
    pub x: f32,
    /// Y component.
    pub y: f32,
    /// Z component.
    pub z: f32,
}

impl Vec3 {
    /// `(0, 0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// `(1, 1, 1)`.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector pointing along the positive Z axis.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector with every component set to `value`.
    pub const fn splat(value: f32) -> Self {
        Self::new(value, value, value)
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Drops the z component.
    pub fn truncate(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Vector length (magnitude).
    pub fn length(&self) -> f32 {
        math::Scalar::sqrt(self.length_squared())
    }

    /// Squared magnitude of the vector.
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

    /// Normalises the vector in place; a zero-length vector stays zero.
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Returns the normalised vector, or the zero vector when the length is
    /// zero so callers can detect the degenerate case. Huge or tiny finite
    /// vectors are rescaled by their largest component before normalising.
    pub fn normalized(&self) -> Self {
        let len = self.length();
        if len > 0.0 && len.is_finite() {
            return Self::new(self.x / len, self.y / len, self.z / len);
        }
        let scale = math::max(
            math::abs(self.x),
            math::max(math::abs(self.y), math::abs(self.z)),
        );
        if scale > 0.0 && scale.is_finite() {
            let v = Self::new(self.x / scale, self.y / scale, self.z / scale);
            let len = v.length();
            Self::new(v.x / len, v.y / len, v.z / len)
        } else {
            Self::ZERO
        }
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product with another vector.
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Componentwise linear interpolation; `t` is not clamped.
    pub fn lerp(a: &Self, b: &Self, t: f32) -> Self {
        Self::new(
            math::lerp(a.x, b.x, t),
            math::lerp(a.y, b.y, t),
            math::lerp(a.z, b.z, t),
        )
    }

    /// [`Vec3::lerp`] writing into `out`.
    pub fn lerp_into(a: &Self, b: &Self, t: f32, out: &mut Self) {
        *out = Self::lerp(a, b, t);
    }

    /// Componentwise clamp of `v` to `[lo, hi]`.
    pub fn clamp(v: &Self, lo: &Self, hi: &Self) -> Self {
        Self::new(
            math::clamp(v.x, lo.x, hi.x),
            math::clamp(v.y, lo.y, hi.y),
            math::clamp(v.z, lo.z, hi.z),
        )
    }

    /// [`Vec3::clamp`] writing into `out`.
    pub fn clamp_into(v: &Self, lo: &Self, hi: &Self, out: &mut Self) {
        *out = Self::clamp(v, lo, hi);
    }

    /// Componentwise minimum.
    pub fn min(a: &Self, b: &Self) -> Self {
        Self::new(math::min(a.x, b.x), math::min(a.y, b.y), math::min(a.z, b.z))
    }

    /// [`Vec3::min`] writing into `out`.
    pub fn min_into(a: &Self, b: &Self, out: &mut Self) {
        *out = Self::min(a, b);
    }

    /// Componentwise maximum.
    pub fn max(a: &Self, b: &Self) -> Self {
        Self::new(math::max(a.x, b.x), math::max(a.y, b.y), math::max(a.z, b.z))
    }

    /// [`Vec3::max`] writing into `out`.
    pub fn max_into(a: &Self, b: &Self, out: &mut Self) {
        *out = Self::max(a, b);
    }

    /// Hermite ease between `a` and `b` (`t` clamped, remapped by `t² (3 − 2t)`).
    pub fn smooth_step(a: &Self, b: &Self, t: f32) -> Self {
        Self::lerp(a, b, smooth_factor(t))
    }

    /// [`Vec3::smooth_step`] writing into `out`.
    pub fn smooth_step_into(a: &Self, b: &Self, t: f32, out: &mut Self) {
        *out = Self::smooth_step(a, b, t);
    }

    /// Reflects `incident` about the plane with unit `normal`.
    pub fn reflect(incident: &Self, normal: &Self) -> Self {
        *incident - *normal * (2.0 * incident.dot(normal))
    }

    /// [`Vec3::reflect`] writing into `out`.
    pub fn reflect_into(incident: &Self, normal: &Self, out: &mut Self) {
        *out = Self::reflect(incident, normal);
    }

    /// Refracts `incident` through a surface with unit `normal` and index
    /// ratio `eta`. Returns the zero vector on total internal reflection.
    pub fn refract(incident: &Self, normal: &Self, eta: f32) -> Self {
        let i_dot_n = incident.dot(normal);
        let k = 1.0 - eta * eta * (1.0 - i_dot_n * i_dot_n);
        if k < 0.0 {
            return Self::ZERO;
        }
        *incident * eta - *normal * (eta * i_dot_n + math::Scalar::sqrt(k))
    }

    /// [`Vec3::refract`] writing into `out`.
    pub fn refract_into(incident: &Self, normal: &Self, eta: f32, out: &mut Self) {
        *out = Self::refract(incident, normal, eta);
    }

    /// Rotates `v` by `rotation` as `q · (v, 0) · q*`.
    ///
    /// `rotation` is expected to be unit length; a non-unit quaternion also
    /// scales the result by `|q|²`.
    ///
    /// ```
    /// use core::f32::consts::FRAC_PI_2;
    /// use sprout_math::math::{Quat, Vec3};
    /// let q = Quat::from_axis_angle(Vec3::UNIT_Z, FRAC_PI_2);
    /// let v = Vec3::transform(&Vec3::UNIT_X, &q);
    /// assert!((v - Vec3::UNIT_Y).length() < 1e-6);
    /// ```
    pub fn transform(v: &Self, rotation: &Quat) -> Self {
        let p = Quat::from_vector_scalar(*v, 0.0);
        (*rotation * p * rotation.conjugate()).vector()
    }

    /// [`Vec3::transform`] writing into `out`.
    pub fn transform_into(v: &Self, rotation: &Quat, out: &mut Self) {
        *out = Self::transform(v, rotation);
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(value: [f32; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(value: Vec3) -> Self {
        value.to_array()
    }
}

/// Embeds a `Vec2` in the XY plane (`z = 0`).
impl From<Vec2> for Vec3 {
    fn from(value: Vec2) -> Self {
        Self::new(value.x, value.y, 0.0)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_components(f, &self.to_array())
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl MulAssign for Vec3 {
    fn mul_assign(&mut self, rhs: Self) {
        self.x *= rhs.x;
        self.y *= rhs.y;
        self.z *= rhs.z;
    }
}

/// Componentwise division; a zero component yields an infinite/NaN lane.
impl DivAssign for Vec3 {
    fn div_assign(&mut self, rhs: Self) {
        self.x /= rhs.x;
        self.y /= rhs.y;
        self.z /= rhs.z;
    }
}

impl MulAssign<f32> for Vec3 {
    fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
    }
}

impl DivAssign<f32> for Vec3 {
    /// # Panics
    /// Panics when `rhs` is zero.
    fn div_assign(&mut self, rhs: f32) {
        assert!(rhs != 0.0, "Vec3 divided by a zero scalar");
        self.x /= rhs;
        self.y /= rhs;
        self.z /= rhs;
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl Mul for Vec3 {
    type Output = Self;
    fn mul(mut self, rhs: Self) -> Self {
        self *= rhs;
        self
    }
}

impl Div for Vec3 {
    type Output = Self;
    fn div(mut self, rhs: Self) -> Self {
        self /= rhs;
        self
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(mut self, rhs: f32) -> Self {
        self *= rhs;
        self
    }
}

impl Mul<Vec3> for f32 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs * self
    }
}

impl Div<f32> for Vec3 {
    type Output = Self;
    fn div(mut self, rhs: f32) -> Self {
        self /= rhs;
        self
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}
