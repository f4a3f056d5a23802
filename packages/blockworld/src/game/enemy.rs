//! Enemy bodies.

use crate::physics::{
    aa_box::AaBox,
    movement::{
        self,
        Drive,
        ENEMY_ACCELERATION,
        GRAVITY_ACCELERATION,
    },
    swept,
};
use vek::*;


pub const ENEMY_COLOR: Rgba<f32> = Rgba { r: 1.0, g: 0.3, b: 0.3, a: 1.0 };

/// An AI-driven enemy body. Seeks the player on the horizontal plane in play mode.
#[derive(Debug, Clone)]
pub struct Enemy {
    pub pos: Vec3<f32>,
    pub half_ext: Vec3<f32>,
    pub vel: Vec3<f32>,
    pub color: Rgba<f32>,
    /// Position the enemy snaps back to when edit mode is (re-)entered or the game resets.
    pub home: Vec3<f32>,
    /// Edit-mode display flag: currently overlapping the player.
    pub highlighted: bool,
}

impl Enemy {
    pub fn new(pos: Vec3<f32>, half_ext: Vec3<f32>, color: Rgba<f32>) -> Self {
        Enemy {
            pos,
            half_ext,
            vel: Vec3::zero(),
            color,
            home: pos,
            highlighted: false,
        }
    }

    pub fn aa_box(&self) -> AaBox {
        AaBox::new(self.pos, self.half_ext)
    }

    /// Snap back to the home position and stop moving.
    pub fn go_home(&mut self) {
        self.pos = self.home;
        self.vel = Vec3::zero();
    }

    /// One play-mode frame: steer toward the player on x and z independently, fall under
    /// gravity, then sweep the displacement against the world and commit.
    pub(super) fn update(
        &mut self,
        dt: f32,
        player_pos: Vec3<f32>,
        obstacles: impl IntoIterator<Item = AaBox>,
    ) {
        let drive_x = Drive::toward(self.pos.x, player_pos.x);
        let drive_z = Drive::toward(self.pos.z, player_pos.z);

        self.vel.x = movement::integrate_axis(self.vel.x, drive_x, ENEMY_ACCELERATION);
        self.vel.z = movement::integrate_axis(self.vel.z, drive_z, ENEMY_ACCELERATION);
        self.vel.y = (self.vel.y - GRAVITY_ACCELERATION)
            .clamp(-movement::MAX_VELOCITY, movement::MAX_VELOCITY);

        let disp = movement::displacement(self.vel, dt);
        let disp = swept::sweep(dt, disp, self.aa_box(), obstacles);

        self.pos += disp;
    }
}
