//! Render collaborator boundary.
//!
//! This crate never issues GL calls. The frontend supplies something that can draw one unit
//! cube under a model matrix, and [`Game::render`] walks the body set in draw order.

use crate::game::{
    Game,
    editor::Draft,
};
use anyhow::Result;
use vek::*;


/// Ability to draw a unit cube mesh transformed by a model matrix.
pub trait DrawBlocks {
    /// Draw one box. `highlighted` is only ever set in edit mode.
    fn draw_block(&mut self, model: Mat4<f32>, color: Rgba<f32>, highlighted: bool) -> Result<()>;
}

/// Model matrix for a body: translate to its center, scale a unit cube to its half extents.
pub fn block_model(pos: Vec3<f32>, half_ext: Vec3<f32>) -> Mat4<f32> {
    Mat4::<f32>::translation_3d(pos) * Mat4::<f32>::scaling_3d(half_ext)
}

impl Game {
    /// Draw the player, every world block, every enemy, and the live editor draft.
    pub fn render(&self, renderer: &mut impl DrawBlocks) -> Result<()> {
        let player = &self.player;
        renderer.draw_block(block_model(player.pos, player.half_ext), player.color, false)?;

        for (_, block) in self.world_blocks.iter() {
            renderer.draw_block(
                block_model(block.pos, block.half_ext),
                block.color,
                block.highlighted,
            )?;
        }

        for (_, enemy) in self.enemies.iter() {
            renderer.draw_block(
                block_model(enemy.pos, enemy.half_ext),
                enemy.color,
                enemy.highlighted,
            )?;
        }

        match self.editor().draft() {
            Draft::Block(block) => {
                renderer.draw_block(block_model(block.pos, block.half_ext), block.color, false)?;
            }
            Draft::Enemy(enemy) => {
                renderer.draw_block(block_model(enemy.pos, enemy.half_ext), enemy.color, false)?;
            }
            Draft::None => {}
        }

        Ok(())
    }
}
