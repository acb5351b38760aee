// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use bytemuck::{Pod, Zeroable};

use crate::math::{write_components, Mat3, Mat4x3, Quat, Scalar, Vec3};

/// Row‑major 4×4 transform.
///
/// - Element `(row, col)` lives at `row * 4 + col`.
/// - Points are row vectors transformed as `v' = v · M`, so translation
///   occupies row 3 and `a * b` applies `a` first, then `b`.
/// - The default value is the identity. General matrices may be singular;
///   no inverse is offered.
///
/// # Examples
/// Basic transformations:
/// ```
/// use sprout_math::math::{Mat4, Vec3};
/// let t = Mat4::translation(5.0, -3.0, 2.0);
/// let p = Vec3::new(2.0, 4.0, -1.0);
/// assert_eq!(t.transform_point(&p).to_array(), [7.0, 1.0, 1.0]);
/// ```
///
/// # Division
/// `Mat4 / Mat4` is **componentwise** division, not `A · B⁻¹`.
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Mat4 {
    data: [f32; 16],
}

impl Mat4 {
    /// The identity matrix.
    pub const IDENTITY: Self = Self::from_array([
        1.0, 0.0, 0.0, 0.0, // row 0
        0.0, 1.0, 0.0, 0.0, // row 1
        0.0, 0.0, 1.0, 0.0, // row 2
        0.0, 0.0, 0.0, 1.0, // row 3
    ]);

    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Creates a matrix from sixteen components, row by row.
    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    pub const fn new(
        m00: f32, m01: f32, m02: f32, m03: f32,
        m10: f32, m11: f32, m12: f32, m13: f32,
        m20: f32, m21: f32, m22: f32, m23: f32,
        m30: f32, m31: f32, m32: f32, m33: f32,
    ) -> Self {
        Self::from_array([
            m00, m01, m02, m03, //
            m10, m11, m12, m13, //
            m20, m21, m22, m23, //
            m30, m31, m32, m33,
        ])
    }

    /// Creates a matrix from row‑major array data.
    pub const fn from_array(data: [f32; 16]) -> Self {
        Self { data }
    }

    /// Builds an affine matrix from three linear rows; translation is zero
    /// and the last row is `(0, 0, 0, 1)`.
    pub const fn from_rows(r0: Vec3, r1: Vec3, r2: Vec3) -> Self {
        Self::new(
            r0.x, r0.y, r0.z, 0.0, //
            r1.x, r1.y, r1.z, 0.0, //
            r2.x, r2.y, r2.z, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Builds a translation matrix.
    pub const fn translation(tx: f32, ty: f32, tz: f32) -> Self {
        Self::from_array([
            1.0, 0.0, 0.0, 0.0, // row 0
            0.0, 1.0, 0.0, 0.0, // row 1
            0.0, 0.0, 1.0, 0.0, // row 2
            tx, ty, tz, 1.0, // row 3 (translation)
        ])
    }

    /// Builds a non-uniform scale matrix.
    pub const fn scale(sx: f32, sy: f32, sz: f32) -> Self {
        Self::from_array([
            sx, 0.0, 0.0, 0.0, // row 0
            0.0, sy, 0.0, 0.0, // row 1
            0.0, 0.0, sz, 0.0, // row 2
            0.0, 0.0, 0.0, 1.0, // row 3
        ])
    }

    /// Builds a rotation matrix around the X axis by `angle` radians.
    pub fn rotation_x(angle: f32) -> Self {
        let (s, c) = Scalar::sin_cos(angle);
        Self::new(
            1.0, 0.0, 0.0, 0.0,
            0.0, c,   s,   0.0,
            0.0, -s,  c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Builds a rotation matrix around the Y axis by `angle` radians.
    pub fn rotation_y(angle: f32) -> Self {
        let (s, c) = Scalar::sin_cos(angle);
        Self::new(
            c,   0.0, -s,  0.0,
            0.0, 1.0, 0.0, 0.0,
            s,   0.0, c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Builds a rotation matrix around the Z axis by `angle` radians.
    pub fn rotation_z(angle: f32) -> Self {
        let (s, c) = Scalar::sin_cos(angle);
        Self::new(
            c,   s,   0.0, 0.0,
            -s,  c,   0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Builds a rotation matrix from an axis and angle in radians.
    ///
    /// A zero-length axis yields the identity rotation; results match
    /// [`Quat::from_axis_angle`].
    pub fn rotation_axis_angle(axis: Vec3, angle: f32) -> Self {
        Self::from_quat(&Quat::from_axis_angle(axis, angle))
    }

    /// Constructs a matrix from a quaternion.
    ///
    /// This simply forwards to [`Quat::to_mat4`].
    pub fn from_quat(q: &Quat) -> Self {
        q.to_mat4()
    }

    /// Builds a rotation matrix from Euler angles in radians.
    ///
    /// Roll (about +Z) is applied first, then pitch (about +X), then yaw
    /// (about +Y): `M = R_z(roll) · R_x(pitch) · R_y(yaw)` for row vectors.
    ///
    /// ```
    /// use core::f32::consts::FRAC_PI_2;
    /// use sprout_math::math::{Mat4, Vec3};
    /// // Yaw=90°: +Z maps to +X
    /// let r = Mat4::rotation_from_euler(FRAC_PI_2, 0.0, 0.0);
    /// let v = r.transform_direction(&Vec3::UNIT_Z);
    /// assert!((v.x - 1.0).abs() < 1e-6);
    /// ```
    pub fn rotation_from_euler(yaw: f32, pitch: f32, roll: f32) -> Self {
        Self::rotation_z(roll) * Self::rotation_x(pitch) * Self::rotation_y(yaw)
    }

    /// Returns the matrix as a row‑major array.
    pub fn to_array(self) -> [f32; 16] {
        self.data
    }

    /// Element at `row`, `col` (both `0..4`).
    pub fn at(&self, row: usize, col: usize) -> f32 {
        self.data[row * 4 + col]
    }

    /// Row `index` as an array.
    pub fn row(&self, index: usize) -> [f32; 4] {
        let base = index * 4;
        [
            self.data[base],
            self.data[base + 1],
            self.data[base + 2],
            self.data[base + 3],
        ]
    }

    /// Transforms a point (`w = 1`, no perspective divide).
    pub fn transform_point(&self, point: &Vec3) -> Vec3 {
        let Vec3 { x, y, z } = *point;
        Vec3::new(
            x * self.at(0, 0) + y * self.at(1, 0) + z * self.at(2, 0) + self.at(3, 0),
            x * self.at(0, 1) + y * self.at(1, 1) + z * self.at(2, 1) + self.at(3, 1),
            x * self.at(0, 2) + y * self.at(1, 2) + z * self.at(2, 2) + self.at(3, 2),
        )
    }

    /// Transforms a direction (`w = 0`): translation is ignored, only the
    /// rotation and scale rows apply.
    pub fn transform_direction(&self, direction: &Vec3) -> Vec3 {
        let Vec3 { x, y, z } = *direction;
        Vec3::new(
            x * self.at(0, 0) + y * self.at(1, 0) + z * self.at(2, 0),
            x * self.at(0, 1) + y * self.at(1, 1) + z * self.at(2, 1),
            x * self.at(0, 2) + y * self.at(1, 2) + z * self.at(2, 2),
        )
    }

    fn map(mut self, f: impl Fn(f32) -> f32) -> Self {
        for v in &mut self.data {
            *v = f(*v);
        }
        self
    }

    fn zip_assign(&mut self, rhs: &Self, f: impl Fn(&mut f32, f32)) {
        for (lhs, rhs) in self.data.iter_mut().zip(rhs.data) {
            f(lhs, rhs);
        }
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[f32; 16]> for Mat4 {
    fn from(value: [f32; 16]) -> Self {
        Self::from_array(value)
    }
}

/// Places the 3×3 block in the upper-left corner; translation is zero and
/// the last row is `(0, 0, 0, 1)`.
impl From<Mat3> for Mat4 {
    fn from(m: Mat3) -> Self {
        Self::new(
            m.at(0, 0), m.at(0, 1), m.at(0, 2), 0.0,
            m.at(1, 0), m.at(1, 1), m.at(1, 2), 0.0,
            m.at(2, 0), m.at(2, 1), m.at(2, 2), 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }
}

/// Copies the linear rows and the translation row; the fourth column becomes
/// `(0, 0, 0, 1)`.
impl From<Mat4x3> for Mat4 {
    fn from(m: Mat4x3) -> Self {
        Self::new(
            m.at(0, 0), m.at(0, 1), m.at(0, 2), 0.0,
            m.at(1, 0), m.at(1, 1), m.at(1, 2), 0.0,
            m.at(2, 0), m.at(2, 1), m.at(2, 2), 0.0,
            m.at(3, 0), m.at(3, 1), m.at(3, 2), 1.0,
        )
    }
}

impl fmt::Display for Mat4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for index in 0..4 {
            if index > 0 {
                f.write_str(", ")?;
            }
            write_components(f, &self.row(index))?;
        }
        f.write_str("]")
    }
}

impl AddAssign for Mat4 {
    fn add_assign(&mut self, rhs: Self) {
        self.zip_assign(&rhs, |a, b| *a += b);
    }
}

impl SubAssign for Mat4 {
    fn sub_assign(&mut self, rhs: Self) {
        self.zip_assign(&rhs, |a, b| *a -= b);
    }
}

/// Matrix product `self = self · rhs`.
///
/// ```
/// use sprout_math::math::Mat4;
/// let a = Mat4::identity();
/// let b = Mat4::scale(2.0, 3.0, 4.0);
/// assert_eq!(a * b, b);
/// ```
impl MulAssign for Mat4 {
    fn mul_assign(&mut self, rhs: Self) {
        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.at(row, k) * rhs.at(k, col);
                }
                out[row * 4 + col] = sum;
            }
        }
        self.data = out;
    }
}

impl MulAssign<f32> for Mat4 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = self.map(|v| v * rhs);
    }
}

impl DivAssign<f32> for Mat4 {
    /// # Panics
    /// Panics when `rhs` is zero.
    fn div_assign(&mut self, rhs: f32) {
        assert!(rhs != 0.0, "Mat4 divided by a zero scalar");
        *self = self.map(|v| v / rhs);
    }
}

/// Componentwise division. This is not `self · rhs⁻¹`.
impl DivAssign for Mat4 {
    fn div_assign(&mut self, rhs: Self) {
        self.zip_assign(&rhs, |a, b| *a /= b);
    }
}

impl Add for Mat4 {
    type Output = Self;
    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl Sub for Mat4 {
    type Output = Self;
    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl Mul for Mat4 {
    type Output = Self;
    fn mul(mut self, rhs: Self) -> Self {
        self *= rhs;
        self
    }
}

impl Mul<f32> for Mat4 {
    type Output = Self;
    fn mul(mut self, rhs: f32) -> Self {
        self *= rhs;
        self
    }
}

impl Mul<Mat4> for f32 {
    type Output = Mat4;
    fn mul(self, rhs: Mat4) -> Mat4 {
        rhs * self
    }
}

impl Div<f32> for Mat4 {
    type Output = Self;
    fn div(mut self, rhs: f32) -> Self {
        self /= rhs;
        self
    }
}

impl Div for Mat4 {
    type Output = Self;
    fn div(mut self, rhs: Self) -> Self {
        self /= rhs;
        self
    }
}

impl Neg for Mat4 {
    type Output = Self;
    fn neg(self) -> Self {
        self.map(|v| -v)
    }
}
