//! The per-frame simulation: one player, enemy and world block arenas, and the editor.

pub mod input;
pub mod player;
pub mod enemy;
pub mod world_block;
pub mod editor;

use crate::physics::aa_box::AaBox;
use self::{
    input::{GameInput, Inputs},
    player::Player,
    enemy::Enemy,
    world_block::WorldBlock,
    editor::Editor,
};
use slab::Slab;
use vek::*;


/// Falling below this y position in play mode ends the game.
pub const FLOOR_Y: f32 = -10.0;

/// Stable integer id of a world block or enemy. Ids survive unrelated deletions; a body keeps
/// its id for its whole lifetime.
pub type BodyId = usize;

/// Which regime the per-frame update runs under.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Mode {
    /// Authoring: no gravity, no collision, bodies move freely; enemies sit at home.
    Edit,
    /// Physics: gravity and swept collision apply, enemies chase the player.
    Play,
    /// Terminal: updates are suppressed until an external reset.
    GameOver,
}

/// The whole game state. One instance owns every body; all mutation happens inside
/// [`Game::update`], one call per frame.
#[derive(Debug, Clone)]
pub struct Game {
    pub player: Player,
    pub world_blocks: Slab<WorldBlock>,
    pub enemies: Slab<Enemy>,
    mode: Mode,
    editor: Editor,
}

impl Game {
    /// New empty game, starting in edit mode.
    pub fn new() -> Self {
        Game {
            player: Player::new(),
            world_blocks: Slab::new(),
            enemies: Slab::new(),
            mode: Mode::Edit,
            editor: Editor::new(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    /// Advance exactly one frame. `dt` is the externally measured elapsed time in milliseconds.
    ///
    /// Frame order is fixed: mode toggle, player physics, enemy physics, edit-mode highlight
    /// pass, terminal check, editor actions. Camera follow happens in an external collaborator
    /// between the player and enemy steps and reads the player's committed position.
    pub fn update(&mut self, dt: f32, inputs: &Inputs) {
        if inputs.active(GameInput::EditModeToggle) {
            self.toggle_edit_mode();
        }

        match self.mode {
            Mode::GameOver => return,
            Mode::Edit => self.update_edit(dt, inputs),
            Mode::Play => self.update_play(dt, inputs),
        }
    }

    fn update_edit(&mut self, dt: f32, inputs: &Inputs) {
        self.player.update(true, dt, inputs, std::iter::empty());

        // highlight pass: enemies sit at home while authoring, and anything the player is
        // inside of gets flagged for display
        let player_box = self.player.aa_box();
        for (_, enemy) in self.enemies.iter_mut() {
            enemy.go_home();
            enemy.highlighted = player_box.overlaps(enemy.aa_box());
        }
        for (_, block) in self.world_blocks.iter_mut() {
            block.highlighted = player_box.overlaps(block.aa_box());
        }

        self.editor.update(
            dt,
            inputs,
            &self.player,
            &mut self.world_blocks,
            &mut self.enemies,
        );
    }

    fn update_play(&mut self, dt: f32, inputs: &Inputs) {
        self.player.update(
            false,
            dt,
            inputs,
            self.world_blocks.iter().map(|(_, block)| block.aa_box()),
        );

        let player_pos = self.player.pos;
        let world_blocks = &self.world_blocks;
        for (_, enemy) in self.enemies.iter_mut() {
            enemy.update(
                dt,
                player_pos,
                world_blocks.iter().map(|(_, block)| block.aa_box()),
            );
        }

        // terminal check reads this frame's committed positions
        let player_box = self.player.aa_box();
        let fell_out = self.player.pos.y < FLOOR_Y;
        let caught = self
            .enemies
            .iter()
            .any(|(_, enemy)| player_box.overlaps(enemy.aa_box()));
        if fell_out || caught {
            info!(fell_out, caught, "game over");
            self.mode = Mode::GameOver;
        }
    }

    /// Toggle between edit and play mode. Leaving play mode (including from the terminal state)
    /// resets the dynamic bodies to their authoring positions.
    pub fn toggle_edit_mode(&mut self) {
        match self.mode {
            Mode::Edit => {
                for (_, enemy) in self.enemies.iter_mut() {
                    enemy.highlighted = false;
                }
                for (_, block) in self.world_blocks.iter_mut() {
                    block.highlighted = false;
                }
                self.editor.clear();
                self.mode = Mode::Play;
                info!("entering play mode");
            }
            Mode::Play | Mode::GameOver => self.reset(),
        }
    }

    /// Return to edit mode: enemies snap home, velocities zero out, highlights clear. The only
    /// way out of the game-over state.
    pub fn reset(&mut self) {
        for (_, enemy) in self.enemies.iter_mut() {
            enemy.go_home();
            enemy.highlighted = false;
        }
        for (_, block) in self.world_blocks.iter_mut() {
            block.highlighted = false;
        }
        self.player.vel = Vec3::zero();
        self.mode = Mode::Edit;
        info!("entering edit mode");
    }

    /* Editor panel surface: id-addressed authoring and queries. Positions are min corners and
     * dimensions full extents, the persistence-format convention. */

    pub fn create_world_block(
        &mut self,
        position: [f32; 3],
        dimensions: [f32; 3],
        color: [f32; 3],
    ) -> BodyId {
        let boks = AaBox::from_min_corner(Vec3::from(position), Vec3::from(dimensions));
        let block = WorldBlock::new(boks.pos, boks.half_ext, rgb_to_rgba(color));
        self.world_blocks.insert(block)
    }

    pub fn update_world_block(
        &mut self,
        id: BodyId,
        position: [f32; 3],
        dimensions: [f32; 3],
        color: [f32; 3],
    ) {
        if let Some(block) = self.world_blocks.get_mut(id) {
            let boks = AaBox::from_min_corner(Vec3::from(position), Vec3::from(dimensions));
            block.pos = boks.pos;
            block.half_ext = boks.half_ext;
            block.color = rgb_to_rgba(color);
        } else {
            warn!(id, "update_world_block: no such block");
        }
    }

    pub fn delete_world_block(&mut self, id: BodyId) {
        if self.world_blocks.try_remove(id).is_none() {
            warn!(id, "delete_world_block: no such block");
        }
    }

    pub fn world_block_position(&self, id: BodyId) -> Option<[f32; 3]> {
        self.world_blocks.get(id).map(|b| b.aa_box().min_corner().into_array())
    }

    pub fn world_block_dimensions(&self, id: BodyId) -> Option<[f32; 3]> {
        self.world_blocks.get(id).map(|b| b.aa_box().dimensions().into_array())
    }

    pub fn world_block_color(&self, id: BodyId) -> Option<[f32; 3]> {
        self.world_blocks.get(id).map(|b| rgba_to_rgb(b.color))
    }

    pub fn world_block_ids(&self) -> impl Iterator<Item = BodyId> + '_ {
        self.world_blocks.iter().map(|(id, _)| id)
    }

    pub fn create_enemy(
        &mut self,
        position: [f32; 3],
        dimensions: [f32; 3],
        color: [f32; 3],
    ) -> BodyId {
        let boks = AaBox::from_min_corner(Vec3::from(position), Vec3::from(dimensions));
        let enemy = Enemy::new(boks.pos, boks.half_ext, rgb_to_rgba(color));
        self.enemies.insert(enemy)
    }

    pub fn update_enemy(
        &mut self,
        id: BodyId,
        position: [f32; 3],
        dimensions: [f32; 3],
        color: [f32; 3],
    ) {
        if let Some(enemy) = self.enemies.get_mut(id) {
            let boks = AaBox::from_min_corner(Vec3::from(position), Vec3::from(dimensions));
            enemy.pos = boks.pos;
            enemy.half_ext = boks.half_ext;
            enemy.home = boks.pos;
            enemy.color = rgb_to_rgba(color);
        } else {
            warn!(id, "update_enemy: no such enemy");
        }
    }

    pub fn delete_enemy(&mut self, id: BodyId) {
        if self.enemies.try_remove(id).is_none() {
            warn!(id, "delete_enemy: no such enemy");
        }
    }

    pub fn enemy_position(&self, id: BodyId) -> Option<[f32; 3]> {
        self.enemies.get(id).map(|e| e.aa_box().min_corner().into_array())
    }

    pub fn enemy_dimensions(&self, id: BodyId) -> Option<[f32; 3]> {
        self.enemies.get(id).map(|e| e.aa_box().dimensions().into_array())
    }

    pub fn enemy_color(&self, id: BodyId) -> Option<[f32; 3]> {
        self.enemies.get(id).map(|e| rgba_to_rgb(e.color))
    }

    pub fn enemy_ids(&self) -> impl Iterator<Item = BodyId> + '_ {
        self.enemies.iter().map(|(id, _)| id)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

fn rgb_to_rgba(rgb: [f32; 3]) -> Rgba<f32> {
    Rgba::new(rgb[0], rgb[1], rgb[2], 1.0)
}

fn rgba_to_rgb(rgba: Rgba<f32>) -> [f32; 3] {
    [rgba.r, rgba.g, rgba.b]
}
