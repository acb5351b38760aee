// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bytemuck::{Pod, Zeroable};

use crate::math::Vec3;

/// Row‑major 4×3 affine block: rows 0–2 hold the linear part, row 3 the
/// translation. The implied fourth column is `(0, 0, 0, 1)`.
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Mat4x3 {
    data: [f32; 12],
}

impl Mat4x3 {
    /// Identity linear part with zero translation.
    pub const IDENTITY: Self = Self::new([
        1.0, 0.0, 0.0, // row 0
        0.0, 1.0, 0.0, // row 1
        0.0, 0.0, 1.0, // row 2
        0.0, 0.0, 0.0, // row 3 (translation)
    ]);

    /// Creates a block from row‑major data.
    pub const fn new(data: [f32; 12]) -> Self {
        Self { data }
    }

    /// Creates a block from three linear rows and a translation row.
    pub const fn from_rows(r0: Vec3, r1: Vec3, r2: Vec3, translation: Vec3) -> Self {
        Self::new([
            r0.x, r0.y, r0.z, //
            r1.x, r1.y, r1.z, //
            r2.x, r2.y, r2.z, //
            translation.x, translation.y, translation.z,
        ])
    }

    /// Returns the block as a row‑major array.
    pub fn to_array(self) -> [f32; 12] {
        self.data
    }

    /// Element at `row` (`0..4`), `col` (`0..3`).
    pub fn at(&self, row: usize, col: usize) -> f32 {
        self.data[row * 3 + col]
    }

    /// Translation row.
    pub fn translation(&self) -> Vec3 {
        Vec3::new(self.at(3, 0), self.at(3, 1), self.at(3, 2))
    }
}

impl Default for Mat4x3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[f32; 12]> for Mat4x3 {
    fn from(value: [f32; 12]) -> Self {
        Self::new(value)
    }
}
