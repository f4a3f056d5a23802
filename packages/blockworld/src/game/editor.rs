//! Edit-mode authoring: drafting new bodies and bulk deletion.

use crate::physics::aa_box::AaBox;
use super::{
    input::{GameInput, Inputs},
    player::Player,
    enemy::{Enemy, ENEMY_COLOR},
    world_block::{WorldBlock, WORLD_BLOCK_COLOR},
};
use slab::Slab;
use vek::*;


/// Cooldown between discrete editor actions, in milliseconds. One held key press must not fire
/// the same action on consecutive frames.
pub const EDITOR_ACTION_DEBOUNCE: f32 = 1000.0;

/// The body currently being drawn, if any. At most one draft exists at a time; starting one
/// kind discards the other kind's in-progress draft.
#[derive(Debug, Clone)]
pub enum Draft {
    None,
    Block(WorldBlock),
    Enemy(Enemy),
}

/// Edit-mode authoring state.
#[derive(Debug, Clone)]
pub struct Editor {
    /// Milliseconds since the last discrete action fired.
    since_last_action: f32,
    /// Anchor corner captured when the current draft started.
    start_pos: Vec3<f32>,
    draft: Draft,
}

impl Editor {
    pub fn new() -> Self {
        Editor {
            since_last_action: 0.0,
            start_pos: Vec3::zero(),
            draft: Draft::None,
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Discard any in-progress draft and restart the action cooldown.
    pub fn clear(&mut self) {
        self.draft = Draft::None;
        self.since_last_action = 0.0;
    }

    /// One edit-mode frame: track the live draft against the player's position, then handle
    /// debounced discrete actions.
    pub(super) fn update(
        &mut self,
        dt: f32,
        inputs: &Inputs,
        player: &Player,
        world_blocks: &mut Slab<WorldBlock>,
        enemies: &mut Slab<Enemy>,
    ) {
        match &mut self.draft {
            Draft::Block(block) => refresh_block_draft(block, self.start_pos, player),
            Draft::Enemy(enemy) => refresh_enemy_draft(enemy, player),
            Draft::None => {}
        }

        self.since_last_action += dt;
        if self.since_last_action < EDITOR_ACTION_DEBOUNCE {
            return;
        }

        if inputs.active(GameInput::EditCreateWorldBlock) {
            // first press starts the draft, second press commits it
            match std::mem::replace(&mut self.draft, Draft::None) {
                Draft::Block(block) => {
                    let id = world_blocks.insert(block);
                    debug!(id, "committed world block draft");
                }
                _ => {
                    // starting a block draft discards any enemy draft
                    let mut block =
                        WorldBlock::new(player.pos, Vec3::zero(), WORLD_BLOCK_COLOR);
                    self.start_pos = player.pos;
                    refresh_block_draft(&mut block, self.start_pos, player);
                    self.draft = Draft::Block(block);
                    debug!("started world block draft");
                }
            }
            self.since_last_action = 0.0;
        }

        if inputs.active(GameInput::EditCreateEnemy) {
            match std::mem::replace(&mut self.draft, Draft::None) {
                Draft::Enemy(mut enemy) => {
                    enemy.home = enemy.pos;
                    let id = enemies.insert(enemy);
                    debug!(id, "committed enemy draft");
                }
                _ => {
                    let mut enemy = Enemy::new(player.pos, player.half_ext, ENEMY_COLOR);
                    self.start_pos = player.pos;
                    refresh_enemy_draft(&mut enemy, player);
                    self.draft = Draft::Enemy(enemy);
                    debug!("started enemy draft");
                }
            }
            self.since_last_action = 0.0;
        }

        if inputs.active(GameInput::EditDelete) {
            delete_overlapping(player.aa_box(), world_blocks, enemies);
            self.since_last_action = 0.0;
        }
    }
}

/// Recompute the block draft's box as the min/max corner pair between the anchor and the
/// player's current far corner, so the box grows and shrinks live as the player moves.
fn refresh_block_draft(block: &mut WorldBlock, start_pos: Vec3<f32>, player: &Player) {
    let player_box = player.aa_box();
    let mut hi = Vec3::zero();
    let mut lo = Vec3::zero();
    for i in 0..3 {
        hi[i] = f32::max(start_pos[i], player_box.far(i));
        lo[i] = f32::min(start_pos[i], player_box.far(i));
    }

    block.half_ext = (hi - lo) * 0.5;
    block.pos = lo + block.half_ext;
}

/// The enemy draft stays pinned directly behind the player.
fn refresh_enemy_draft(enemy: &mut Enemy, player: &Player) {
    enemy.pos = player.pos + Vec3::new(0.0, 0.0, -2.0 * enemy.half_ext.z);
    enemy.home = enemy.pos;
}

/// Remove every world block and enemy overlapping `player_box`, in one pass. Survivors keep
/// their ids and their relative order.
fn delete_overlapping(
    player_box: AaBox,
    world_blocks: &mut Slab<WorldBlock>,
    enemies: &mut Slab<Enemy>,
) {
    let blocks_before = world_blocks.len();
    world_blocks.retain(|_, block| !player_box.overlaps(block.aa_box()));

    let enemies_before = enemies.len();
    enemies.retain(|_, enemy| !player_box.overlaps(enemy.aa_box()));

    debug!(
        blocks_deleted = blocks_before - world_blocks.len(),
        enemies_deleted = enemies_before - enemies.len(),
        "deleted bodies overlapping the player",
    );
}
