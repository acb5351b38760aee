// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! sprout-math: single-precision math for the Sprout engine.
//!
//! Plain `Copy` value types ([`math::Vec2`], [`math::Vec3`], [`math::Quat`],
//! [`math::Mat3`], [`math::Mat4x3`], [`math::Mat4`]) plus scalar helpers and
//! constants. Transcendentals go through `libm` so results do not depend on
//! the platform's libc.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::redundant_pub_crate,
    clippy::many_single_char_names,
    clippy::module_name_repetitions,
    clippy::use_self
)]

/// Scalar helpers, constants, vectors, quaternions and matrices.
pub mod math;

pub use math::{Mat3, Mat4, Mat4x3, Quat, Scalar, Vec2, Vec3};
