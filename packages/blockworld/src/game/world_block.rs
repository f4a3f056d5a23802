//! Immovable world geometry.

use crate::physics::aa_box::AaBox;
use vek::*;


pub const WORLD_BLOCK_COLOR: Rgba<f32> = Rgba { r: 0.7, g: 0.7, b: 0.7, a: 1.0 };

/// An immovable world block. Its velocity is always the zero vector.
#[derive(Debug, Clone)]
pub struct WorldBlock {
    pub pos: Vec3<f32>,
    pub half_ext: Vec3<f32>,
    pub color: Rgba<f32>,
    /// Edit-mode display flag: currently overlapping the player.
    pub highlighted: bool,
}

impl WorldBlock {
    pub fn new(pos: Vec3<f32>, half_ext: Vec3<f32>, color: Rgba<f32>) -> Self {
        WorldBlock {
            pos,
            half_ext,
            color,
            highlighted: false,
        }
    }

    pub fn aa_box(&self) -> AaBox {
        AaBox::new(self.pos, self.half_ext)
    }
}
