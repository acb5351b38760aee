// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use bytemuck::{Pod, Zeroable};

use crate::math::{write_components, Mat4, Scalar, Vec3, EPSILON, UNIT_EPSILON};

/// Quaternion stored as `(x, y, z, w)` with `w` as the scalar part.
///
/// * All angles are expressed in radians.
/// * Only unit quaternions ([`Quat::is_normalized`]) represent rotations.
///   `+`, `-` and scalar `*` are plain 4-vector operations used for blending
///   and do not preserve unit length; normalise explicitly afterwards.
/// * The default value is the identity rotation.
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Quat {
    /// X component of the vector part.
    pub x: f32,
    /// Y component of the vector part.
    pub y: f32,
    /// Z component of the vector part.
    pub z: f32,
    /// Scalar part.
    pub w: f32,
}

impl Quat {
    /// The identity rotation `(0, 0, 0, 1)`.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// The zero quaternion; the sentinel for degenerate results.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a quaternion from components.
    ///
    /// Callers should provide finite components; use
    /// [`Quat::from_axis_angle`] for axis/angle construction.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Returns the identity quaternion.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Builds a quaternion from its vector part and scalar part.
    pub const fn from_vector_scalar(vector: Vec3, scalar: f32) -> Self {
        Self::new(vector.x, vector.y, vector.z, scalar)
    }

    /// Constructs a quaternion from a rotation axis and angle in radians.
    ///
    /// Returns the identity quaternion when the axis length is ≤ `EPSILON` to
    /// avoid undefined orientations.
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let len_sq = axis.length_squared();
        if len_sq <= EPSILON * EPSILON {
            return Self::IDENTITY;
        }
        let norm_axis = axis * (1.0 / Scalar::sqrt(len_sq));
        let (sin_half, cos_half) = Scalar::sin_cos(angle * 0.5);
        Self::from_vector_scalar(norm_axis * sin_half, cos_half)
    }

    /// Returns the quaternion as an `(x, y, z, w)` array.
    pub fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Vector part `(x, y, z)`.
    pub fn vector(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Scalar part `w`.
    pub fn scalar(&self) -> f32 {
        self.w
    }

    /// 4D dot product.
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Euclidean norm over the four components.
    pub fn length(&self) -> f32 {
        Scalar::sqrt(self.length_squared())
    }

    /// Squared norm over the four components.
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// `true` when no component is infinite or NaN.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }

    /// `true` when `|q|²` is within [`UNIT_EPSILON`] of one.
    pub fn is_normalized(&self) -> bool {
        (self.length_squared() - 1.0).abs() <= UNIT_EPSILON
    }

    /// Normalises in place; the zero quaternion stays zero.
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Returns `self / |self|`, or [`Quat::ZERO`] when the norm is zero.
    pub fn normalized(&self) -> Self {
        let len = self.length();
        if len > 0.0 {
            let inv = 1.0 / len;
            Self::new(self.x * inv, self.y * inv, self.z * inv, self.w * inv)
        } else {
            Self::ZERO
        }
    }

    /// Negates the vector part and keeps the scalar part.
    pub fn conjugate(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Multiplicative inverse `conjugate / |q|²`.
    ///
    /// Equals [`Quat::conjugate`] for unit quaternions. Returns
    /// [`Quat::ZERO`] for a (near-)zero quaternion instead of dividing by zero.
    ///
    /// ```
    /// use sprout_math::math::Quat;
    /// assert_eq!(Quat::ZERO.inverse(), Quat::ZERO);
    /// let q = Quat::new(0.0, 0.0, 0.0, 2.0);
    /// assert_eq!(q.inverse(), Quat::new(0.0, 0.0, 0.0, 0.5));
    /// ```
    pub fn inverse(&self) -> Self {
        let len_sq = self.length_squared();
        if len_sq <= EPSILON * EPSILON {
            return Self::ZERO;
        }
        self.conjugate() * (1.0 / len_sq)
    }

    /// Quaternion logarithm of a unit quaternion.
    ///
    /// With `θ = acos(w)` the result is `(θ / sin θ · v, 0)`. When `sin θ` is
    /// close to zero the vector part of the result is zero.
    pub fn log(&self) -> Self {
        let theta = Scalar::acos(self.w);
        let sin_theta = Scalar::sin(theta);
        if sin_theta.abs() <= EPSILON {
            return Self::ZERO;
        }
        let scale = theta / sin_theta;
        Self::from_vector_scalar(self.vector() * scale, 0.0)
    }

    /// Quaternion exponential of a pure quaternion; inverse of [`Quat::log`].
    ///
    /// With `θ = |v|` the result is `(sin θ / θ · v, cos θ)`. The scalar part
    /// of `self` is ignored.
    ///
    /// ```
    /// use core::f32::consts::FRAC_PI_2;
    /// use sprout_math::math::{Quat, Vec3};
    /// let q = Quat::from_axis_angle(Vec3::UNIT_Y, FRAC_PI_2);
    /// let back = q.log().exp();
    /// assert!((back - q).length() < 1e-5);
    /// ```
    pub fn exp(&self) -> Self {
        let v = self.vector();
        let theta = v.length();
        let (sin_theta, cos_theta) = Scalar::sin_cos(theta);
        if theta <= EPSILON {
            return Self::from_vector_scalar(v, cos_theta);
        }
        Self::from_vector_scalar(v * (sin_theta / theta), cos_theta)
    }

    /// Spherical interpolation along the shorter arc between two unit
    /// quaternions, computed as `a · exp(t · log(a⁻¹ · b))`.
    ///
    /// `t = 0` yields `a`, `t = 1` yields `b` (or `-b`, the same rotation).
    pub fn slerp(a: &Self, b: &Self, t: f32) -> Self {
        let end = if a.dot(b) < 0.0 { -*b } else { *b };
        let delta = a.inverse() * end;
        *a * (delta.log() * t).exp()
    }

    /// Rotates `v` by this quaternion; see [`Vec3::transform`].
    pub fn rotate(&self, v: &Vec3) -> Vec3 {
        Vec3::transform(v, self)
    }

    /// Converts the quaternion to a rotation matrix.
    ///
    /// The matrix is laid out for row vectors (`v' = v · M`) and agrees with
    /// [`Quat::rotate`]. The quaternion is normalised first.
    pub fn to_mat4(&self) -> Mat4 {
        let Self { x, y, z, w } = self.normalized();

        let xx = x * x;
        let yy = y * y;
        let zz = z * z;
        let xy = x * y;
        let xz = x * z;
        let yz = y * z;
        let wx = w * x;
        let wy = w * y;
        let wz = w * z;

        Mat4::from([
            1.0 - 2.0 * (yy + zz),
            2.0 * (xy + wz),
            2.0 * (xz - wy),
            0.0,
            2.0 * (xy - wz),
            1.0 - 2.0 * (xx + zz),
            2.0 * (yz + wx),
            0.0,
            2.0 * (xz + wy),
            2.0 * (yz - wx),
            1.0 - 2.0 * (xx + yy),
            0.0,
            0.0,
            0.0,
            0.0,
            1.0,
        ])
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Converts a 4‑element `[f32; 4]` array `(x, y, z, w)` into a `Quat`.
/// The components are taken verbatim; normalization is not enforced.
impl From<[f32; 4]> for Quat {
    fn from(value: [f32; 4]) -> Self {
        Self::new(value[0], value[1], value[2], value[3])
    }
}

impl From<Quat> for [f32; 4] {
    fn from(value: Quat) -> Self {
        value.to_array()
    }
}

impl fmt::Display for Quat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_components(f, &self.to_array())
    }
}

impl AddAssign for Quat {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
        self.w += rhs.w;
    }
}

impl SubAssign for Quat {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
        self.w -= rhs.w;
    }
}

/// Hamilton product `self = self * rhs`.
///
/// Operand order matters: with `v' = q v q*`, the product `a * b` applies
/// `b` first and then `a`. Quaternion multiplication is non‑commutative.
///
/// ```
/// use core::f32::consts::FRAC_PI_2;
/// use sprout_math::math::{Quat, Vec3};
/// let yaw = Quat::from_axis_angle(Vec3::UNIT_Y, FRAC_PI_2);
/// let pitch = Quat::from_axis_angle(Vec3::UNIT_X, FRAC_PI_2);
/// assert_ne!(yaw * pitch, pitch * yaw);
/// ```
impl MulAssign for Quat {
    fn mul_assign(&mut self, rhs: Self) {
        let (ax, ay, az, aw) = (self.x, self.y, self.z, self.w);
        let (bx, by, bz, bw) = (rhs.x, rhs.y, rhs.z, rhs.w);

        *self = Self::new(
            aw * bx + ax * bw + ay * bz - az * by,
            aw * by - ax * bz + ay * bw + az * bx,
            aw * bz + ax * by - ay * bx + az * bw,
            aw * bw - ax * bx - ay * by - az * bz,
        );
    }
}

impl MulAssign<f32> for Quat {
    fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
        self.w *= rhs;
    }
}

/// `self = self * rhs⁻¹`. Dividing by the zero quaternion yields zero.
impl DivAssign for Quat {
    fn div_assign(&mut self, rhs: Self) {
        *self *= rhs.inverse();
    }
}

impl Add for Quat {
    type Output = Self;
    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl Sub for Quat {
    type Output = Self;
    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl Mul for Quat {
    type Output = Self;
    fn mul(mut self, rhs: Self) -> Self {
        self *= rhs;
        self
    }
}

impl Mul<f32> for Quat {
    type Output = Self;
    fn mul(mut self, rhs: f32) -> Self {
        self *= rhs;
        self
    }
}

impl Mul<Quat> for f32 {
    type Output = Quat;
    fn mul(self, rhs: Quat) -> Quat {
        rhs * self
    }
}

impl Div for Quat {
    type Output = Self;
    fn div(mut self, rhs: Self) -> Self {
        self /= rhs;
        self
    }
}

impl Neg for Quat {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}
