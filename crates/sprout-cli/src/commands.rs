// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Command bodies: build primitives, call the math catalogue, return readings.

use std::fmt;

use anyhow::{ensure, Result};
use serde::Serialize;
use sprout_math::math::{self, Quat, Vec2, Vec3};
use tracing::{debug, error, info, trace, warn};

/// A computed value of any printable primitive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Plain scalar.
    Scalar(f32),
    /// 2D vector.
    Vec2(Vec2),
    /// 3D vector.
    Vec3(Vec3),
    /// Quaternion `(x, y, z, w)`.
    Quat(Quat),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Forward the formatter so `{:.3}` reaches the component printer.
        match self {
            Self::Scalar(v) => fmt::Display::fmt(v, f),
            Self::Vec2(v) => fmt::Display::fmt(v, f),
            Self::Vec3(v) => fmt::Display::fmt(v, f),
            Self::Quat(v) => fmt::Display::fmt(v, f),
        }
    }
}

/// One labelled result line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reading {
    /// Empty for single-result commands.
    #[serde(skip_serializing_if = "str::is_empty")]
    pub label: &'static str,
    pub value: Value,
}

impl Reading {
    fn unlabelled(value: Value) -> Self {
        Self { label: "", value }
    }

    /// Plain-text rendering, honouring `precision` when set.
    pub fn render(&self, precision: Option<usize>) -> String {
        let value = match precision {
            Some(p) => format!("{:.p$}", self.value),
            None => self.value.to_string(),
        };
        if self.label.is_empty() {
            value
        } else {
            format!("{}: {value}", self.label)
        }
    }
}

/// The engine's start-up scenario: one log line per level, then a handful of
/// vector, scalar and quaternion results.
pub fn demo() -> Vec<Reading> {
    trace!("TRACE log");
    info!("INFO log");
    warn!("WARNING log");
    error!("ERROR log");

    let a = Vec2::splat(1.0);
    let b = Vec2::new(2.0, 0.0);
    let readings = vec![
        Reading {
            label: "vec2 mul",
            value: Value::Vec2(a * 2.0),
        },
        Reading {
            label: "vec2 mixed",
            value: Value::Vec2((-a * b * 0.0) + a),
        },
        Reading {
            label: "vec3 add",
            value: Value::Vec3(Vec3::splat(2.0) + Vec3::splat(1.0)),
        },
        Reading {
            label: "lerp",
            value: Value::Scalar(math::lerp(1.0_f32, 10.0, 0.5)),
        },
        Reading {
            label: "quaternion",
            value: Value::Quat(Quat::default()),
        },
    ];
    for reading in &readings {
        info!(label = reading.label, value = %reading.value, "demo value");
    }
    readings
}

/// Scalar `lerp(a, b, t)`; `t` outside `[0, 1]` extrapolates.
pub fn lerp(a: f32, b: f32, t: f32) -> Reading {
    debug!(a, b, t, "lerp");
    Reading::unlabelled(Value::Scalar(math::lerp(a, b, t)))
}

/// `Vec2::smooth_step(a, b, t)`.
pub fn smooth_step(a: Vec2, b: Vec2, t: f32) -> Reading {
    debug!(%a, %b, t, "smooth_step");
    Reading::unlabelled(Value::Vec2(Vec2::smooth_step(&a, &b, t)))
}

/// `Vec2::reflect`; the normal is normalised first so any direction works.
pub fn reflect(incident: Vec2, normal: Vec2) -> Result<Reading> {
    let unit = normal.normalized();
    ensure!(unit != Vec2::ZERO, "reflect needs a non-zero normal");
    if (normal.length_squared() - 1.0).abs() > math::UNIT_EPSILON {
        warn!(%normal, "normal was not unit length; normalised it");
    }
    Ok(Reading::unlabelled(Value::Vec2(Vec2::reflect(&incident, &unit))))
}

/// Rotates `v` about `axis` by `degrees`.
pub fn rotate(v: Vec3, axis: Vec3, degrees: f32) -> Result<Reading> {
    ensure!(
        axis.length_squared() > math::EPSILON * math::EPSILON,
        "rotation axis must not be zero"
    );
    let q = Quat::from_axis_angle(axis, math::to_radians(degrees));
    debug!(quat = %q, "rotation");
    Ok(Reading::unlabelled(Value::Vec3(q.rotate(&v))))
}
