// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Scalar helpers, constants and the geometric value types.
//!
//! All geometric types store `f32`. The trigonometric helpers accept either
//! `f32` or `f64` through [`Scalar`] and evaluate in the precision of their
//! argument.

use core::fmt;
use core::ops::Neg;

mod mat3;
mod mat4;
mod mat4x3;
mod quat;
pub mod scalar;
mod vec2;
mod vec3;

pub use mat3::Mat3;
pub use mat4::Mat4;
pub use mat4x3::Mat4x3;
pub use quat::Quat;
pub use scalar::Scalar;
pub use vec2::Vec2;
pub use vec3::Vec3;

/// π.
pub const PI: f32 = core::f32::consts::PI;
/// 2π.
pub const TWO_PI: f32 = core::f32::consts::TAU;
/// 1/π.
pub const ONE_BY_PI: f32 = core::f32::consts::FRAC_1_PI;
/// 1/(2π).
pub const ONE_BY_TWO_PI: f32 = 1.0 / core::f32::consts::TAU;
/// π/2.
pub const PI_BY_TWO: f32 = core::f32::consts::FRAC_PI_2;
/// π/4.
pub const PI_BY_FOUR: f32 = core::f32::consts::FRAC_PI_4;

/// Largest signed 32-bit integer.
pub const MAX_INT: i32 = i32::MAX;
/// Smallest signed 32-bit integer.
pub const MIN_INT: i32 = i32::MIN;
/// Largest unsigned 32-bit integer.
pub const MAX_UINT: u32 = u32::MAX;
/// Smallest unsigned 32-bit integer.
pub const MIN_UINT: u32 = u32::MIN;

/// Global epsilon used by math routines when detecting degenerate values.
pub const EPSILON: f32 = 1e-6;
/// Looser tolerance for values that went through several operations.
pub const LARGE_EPSILON: f32 = 5e-5;
/// Tolerance on `|q|²` for a quaternion to count as unit length.
pub const UNIT_EPSILON: f32 = 1e-4;
/// Positive infinity.
pub const INFINITY: f32 = f32::INFINITY;

/// Converts degrees to radians.
pub fn to_radians(degrees: f32) -> f32 {
    degrees * (PI / 180.0)
}

/// Converts radians to degrees.
pub fn to_degrees(radians: f32) -> f32 {
    radians * (180.0 / PI)
}

/// Sine, in the precision of the argument.
pub fn sin<T: Scalar>(value: T) -> T {
    Scalar::sin(value)
}

/// Cosine, in the precision of the argument.
pub fn cos<T: Scalar>(value: T) -> T {
    Scalar::cos(value)
}

/// Tangent, in the precision of the argument.
pub fn tan<T: Scalar>(value: T) -> T {
    Scalar::tan(value)
}

/// Hyperbolic sine.
pub fn sinh<T: Scalar>(value: T) -> T {
    Scalar::sinh(value)
}

/// Hyperbolic cosine.
pub fn cosh<T: Scalar>(value: T) -> T {
    Scalar::cosh(value)
}

/// Hyperbolic tangent.
pub fn tanh<T: Scalar>(value: T) -> T {
    Scalar::tanh(value)
}

/// Arcsine. Inputs outside `[-1, 1]` are clamped, so `asin(1.5)` is `π/2`.
///
/// ```
/// use sprout_math::math;
/// assert_eq!(math::asin(2.0_f64), core::f64::consts::FRAC_PI_2);
/// ```
pub fn asin<T: Scalar>(value: T) -> T {
    Scalar::asin(value)
}

/// Arccosine. Inputs outside `[-1, 1]` are clamped, so `acos(-1.5)` is `π`.
pub fn acos<T: Scalar>(value: T) -> T {
    Scalar::acos(value)
}

/// Arctangent.
pub fn atan<T: Scalar>(value: T) -> T {
    Scalar::atan(value)
}

/// Four-quadrant arctangent of `y / x`.
pub fn atan2<T: Scalar>(y: T, x: T) -> T {
    Scalar::atan2(y, x)
}

/// Returns `true` if `value` is NaN.
pub fn is_nan<T: Scalar>(value: T) -> bool {
    Scalar::is_nan(value)
}

/// Linear interpolation `a + (b - a) * t`.
///
/// `t` is not clamped; values outside `[0, 1]` extrapolate. Evaluated as
/// `a * (1 - t) + b * t`, which returns `a` at `t = 0` and `b` at `t = 1`
/// without rounding drift.
///
/// ```
/// use sprout_math::math;
/// assert_eq!(math::lerp(1.0_f32, 10.0, 0.5), 5.5);
/// assert_eq!(math::lerp(0.0_f32, 10.0, 2.0), 20.0);
/// ```
pub fn lerp<T: Scalar>(a: T, b: T, t: T) -> T {
    a * (T::one() - t) + b * t
}

/// Returns the smaller of two values (`b` when they compare unordered).
pub fn min<T: PartialOrd>(a: T, b: T) -> T {
    if a < b {
        a
    } else {
        b
    }
}

/// Returns the larger of two values (`b` when they compare unordered).
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if a > b {
        a
    } else {
        b
    }
}

/// Absolute value for any signed, ordered type.
pub fn abs<T>(value: T) -> T
where
    T: Copy + PartialOrd + Default + Neg<Output = T>,
{
    if value < T::default() {
        -value
    } else {
        value
    }
}

/// Clamps `value` to the inclusive `[lo, hi]` range.
pub fn clamp<T: PartialOrd>(value: T, lo: T, hi: T) -> T {
    debug_assert!(lo <= hi || lo.partial_cmp(&hi).is_none(), "invalid clamp range");
    min(max(value, lo), hi)
}

/// Writes `[a, b, ...]`, forwarding a requested precision (`{:.3}`) to each
/// component.
pub(crate) fn write_components(f: &mut fmt::Formatter<'_>, components: &[f32]) -> fmt::Result {
    f.write_str("[")?;
    for (i, c) in components.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        match f.precision() {
            Some(p) => write!(f, "{c:.p$}")?,
            None => write!(f, "{c}")?,
        }
    }
    f.write_str("]")
}
