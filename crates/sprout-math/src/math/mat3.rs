// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bytemuck::{Pod, Zeroable};

use crate::math::Vec3;

/// Row‑major 3×3 rotation/scale block.
///
/// Exists as the source of the [`crate::math::Mat4`] conversion; it carries
/// no algebra of its own.
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Mat3 {
    data: [f32; 9],
}

impl Mat3 {
    /// The identity block.
    pub const IDENTITY: Self = Self::new([
        1.0, 0.0, 0.0, // row 0
        0.0, 1.0, 0.0, // row 1
        0.0, 0.0, 1.0, // row 2
    ]);

    /// Creates a block from row‑major data.
    pub const fn new(data: [f32; 9]) -> Self {
        Self { data }
    }

    /// Creates a block from three rows.
    pub const fn from_rows(r0: Vec3, r1: Vec3, r2: Vec3) -> Self {
        Self::new([r0.x, r0.y, r0.z, r1.x, r1.y, r1.z, r2.x, r2.y, r2.z])
    }

    /// Returns the block as a row‑major array.
    pub fn to_array(self) -> [f32; 9] {
        self.data
    }

    /// Element at `row`, `col` (both `0..3`).
    pub fn at(&self, row: usize, col: usize) -> f32 {
        self.data[row * 3 + col]
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[f32; 9]> for Mat3 {
    fn from(value: [f32; 9]) -> Self {
        Self::new(value)
    }
}
