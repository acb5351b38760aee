// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Scalar arithmetic abstraction for Sprout math.
//!
//! [`Scalar`] is implemented for `f32` and `f64`, which gives the free
//! functions in [`crate::math`] their "overload by argument type" behaviour:
//! `math::sin(0.5_f32)` evaluates in single precision and `math::sin(0.5_f64)`
//! in double precision.
//!
//! Transcendentals go through `libm` rather than the platform `libm`/CRT so
//! every target produces bit-identical results for identical inputs.
//!
//! Domain policy for the inverse trig functions:
//! - `asin`/`acos` clamp their input to `[-1, 1]` before evaluating, so
//!   accumulated rounding (`1.0000001`) yields `±π/2` or `{0, π}` instead of
//!   NaN. Both precisions follow the same policy.

use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

/// Floating-point scalar with the transcendental catalogue used by the engine.
///
/// Arithmetic operators are required via the standard operator traits so
/// generic code can use `+`, `-`, `*`, `/` and unary `-` directly.
pub trait Scalar:
    Copy
    + fmt::Debug
    + fmt::Display
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// π in this precision.
    const PI: Self;

    /// Returns the additive identity (zero).
    fn zero() -> Self;

    /// Returns the multiplicative identity (one).
    fn one() -> Self;

    /// Converts from `f32` into this scalar type.
    fn from_f32(value: f32) -> Self;

    /// Converts this scalar value to `f32` (rounds to nearest for `f64`).
    fn to_f32(self) -> f32;

    /// Sine of `self` (radians).
    fn sin(self) -> Self;

    /// Cosine of `self` (radians).
    fn cos(self) -> Self;

    /// Returns both sine and cosine of `self` (radians).
    ///
    /// Default implementation computes `sin` and `cos` separately.
    fn sin_cos(self) -> (Self, Self) {
        (self.sin(), self.cos())
    }

    /// Tangent of `self` (radians).
    fn tan(self) -> Self;

    /// Hyperbolic sine.
    fn sinh(self) -> Self;

    /// Hyperbolic cosine.
    fn cosh(self) -> Self;

    /// Hyperbolic tangent.
    fn tanh(self) -> Self;

    /// Arcsine; input is clamped to `[-1, 1]`.
    fn asin(self) -> Self;

    /// Arccosine; input is clamped to `[-1, 1]`.
    fn acos(self) -> Self;

    /// Arctangent.
    fn atan(self) -> Self;

    /// Four-quadrant arctangent of `self / x` (`self` is the y coordinate).
    fn atan2(self, x: Self) -> Self;

    /// Square root.
    fn sqrt(self) -> Self;

    /// Returns `true` if `self` is NaN.
    fn is_nan(self) -> bool;

    /// Returns `true` if `self` is neither infinite nor NaN.
    fn is_finite(self) -> bool;
}

impl Scalar for f32 {
    const PI: Self = core::f32::consts::PI;

    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }

    fn from_f32(value: f32) -> Self {
        value
    }

    fn to_f32(self) -> f32 {
        self
    }

    fn sin(self) -> Self {
        libm::sinf(self)
    }

    fn cos(self) -> Self {
        libm::cosf(self)
    }

    fn sin_cos(self) -> (Self, Self) {
        libm::sincosf(self)
    }

    fn tan(self) -> Self {
        libm::tanf(self)
    }

    fn sinh(self) -> Self {
        libm::sinhf(self)
    }

    fn cosh(self) -> Self {
        libm::coshf(self)
    }

    fn tanh(self) -> Self {
        libm::tanhf(self)
    }

    fn asin(self) -> Self {
        libm::asinf(self.clamp(-1.0, 1.0))
    }

    fn acos(self) -> Self {
        libm::acosf(self.clamp(-1.0, 1.0))
    }

    fn atan(self) -> Self {
        libm::atanf(self)
    }

    fn atan2(self, x: Self) -> Self {
        libm::atan2f(self, x)
    }

    fn sqrt(self) -> Self {
        libm::sqrtf(self)
    }

    fn is_nan(self) -> bool {
        f32::is_nan(self)
    }

    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }
}

impl Scalar for f64 {
    const PI: Self = core::f64::consts::PI;

    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }

    fn from_f32(value: f32) -> Self {
        f64::from(value)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn to_f32(self) -> f32 {
        self as f32
    }

    fn sin(self) -> Self {
        libm::sin(self)
    }

    fn cos(self) -> Self {
        libm::cos(self)
    }

    fn sin_cos(self) -> (Self, Self) {
        libm::sincos(self)
    }

    fn tan(self) -> Self {
        libm::tan(self)
    }

    fn sinh(self) -> Self {
        libm::sinh(self)
    }

    fn cosh(self) -> Self {
        libm::cosh(self)
    }

    fn tanh(self) -> Self {
        libm::tanh(self)
    }

    fn asin(self) -> Self {
        libm::asin(self.clamp(-1.0, 1.0))
    }

    fn acos(self) -> Self {
        libm::acos(self.clamp(-1.0, 1.0))
    }

    fn atan(self) -> Self {
        libm::atan(self)
    }

    fn atan2(self, x: Self) -> Self {
        libm::atan2(self, x)
    }

    fn sqrt(self) -> Self {
        libm::sqrt(self)
    }

    fn is_nan(self) -> bool {
        f64::is_nan(self)
    }

    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }
}
