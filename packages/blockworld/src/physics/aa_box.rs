//! Axis-aligned box.

use vek::*;


/// Axis-aligned box.
///
/// Stored as a center position plus a half extent per axis. The half extent is assumed to be
/// non-negative on every axis; callers are responsible for only constructing valid boxes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AaBox {
    /// Box center position.
    pub pos: Vec3<f32>,
    /// Half extent from `pos` along each axis. Assumed to be non-negative.
    pub half_ext: Vec3<f32>,
}

impl AaBox {
    pub fn new(pos: Vec3<f32>, half_ext: Vec3<f32>) -> Self {
        AaBox { pos, half_ext }
    }

    /// Box from a minimum corner and full dimensions, the persistence-format convention.
    pub fn from_min_corner(min_corner: Vec3<f32>, dimensions: Vec3<f32>) -> Self {
        let half_ext = dimensions * 0.5;
        AaBox {
            pos: min_corner + half_ext,
            half_ext,
        }
    }

    /// The "near" face coordinate on the given axis: `pos + half_ext`.
    ///
    /// Not a literal spatial left/right. `near(i) >= far(i)` always holds, and the collision
    /// arithmetic in [`crate::physics::swept`] depends on exactly this sign convention.
    pub fn near(self, axis: usize) -> f32 {
        self.pos[axis] + self.half_ext[axis]
    }

    /// The "far" face coordinate on the given axis: `pos - half_ext`.
    pub fn far(self, axis: usize) -> f32 {
        self.pos[axis] - self.half_ext[axis]
    }

    /// Minimum corner, i.e. the far face on all three axes.
    pub fn min_corner(self) -> Vec3<f32> {
        self.pos - self.half_ext
    }

    /// Full dimensions, `2 * half_ext`.
    pub fn dimensions(self) -> Vec3<f32> {
        self.half_ext * 2.0
    }

    /// Does self overlap with `rhs`?
    ///
    /// True iff the boxes' intervals intersect on all three axes simultaneously. Strict: boxes
    /// whose faces exactly touch do not overlap. Symmetric in its arguments.
    pub fn overlaps(self, rhs: AaBox) -> bool {
        for i in 0..3 {
            if self.far(i) >= rhs.near(i) {
                return false;
            }
            if self.near(i) <= rhs.far(i) {
                return false;
            }
        }
        true
    }
}
