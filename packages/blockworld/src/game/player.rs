//! The player body.

use crate::physics::{
    aa_box::AaBox,
    movement::{
        self,
        Drive,
        PLAYER_ACCELERATION,
        GRAVITY_ACCELERATION,
    },
    swept,
};
use super::input::{GameInput, Inputs};
use vek::*;


pub const PLAYER_HALF_EXTENT: Vec3<f32> = Vec3 { x: 0.5, y: 0.5, z: 0.5 };
pub const PLAYER_COLOR: Rgba<f32> = Rgba { r: 0.3, g: 0.5, b: 1.0, a: 1.0 };

/// The player. Exactly one exists for the whole session.
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec3<f32>,
    pub half_ext: Vec3<f32>,
    pub vel: Vec3<f32>,
    pub color: Rgba<f32>,
}

impl Player {
    pub fn new() -> Self {
        Player {
            pos: Vec3::zero(),
            half_ext: PLAYER_HALF_EXTENT,
            vel: Vec3::zero(),
            color: PLAYER_COLOR,
        }
    }

    pub fn aa_box(&self) -> AaBox {
        AaBox::new(self.pos, self.half_ext)
    }

    /// Integrate velocity from held inputs, then commit this frame's displacement.
    ///
    /// In play mode gravity overrides the y drive and the displacement is swept against every
    /// obstacle before committing. In edit mode the body moves freely on all three axes using
    /// the dedicated up/down inputs for y.
    pub(super) fn update(
        &mut self,
        edit_mode: bool,
        dt: f32,
        inputs: &Inputs,
        obstacles: impl IntoIterator<Item = AaBox>,
    ) {
        let drive_x = Drive::from_flags(
            inputs.active(GameInput::MoveLeft),
            inputs.active(GameInput::MoveRight),
        );
        let drive_z = Drive::from_flags(
            inputs.active(GameInput::MoveForward),
            inputs.active(GameInput::MoveBack),
        );
        let drive_y = Drive::from_flags(
            inputs.active(GameInput::EditMoveUp),
            inputs.active(GameInput::EditMoveDown),
        );

        if edit_mode {
            self.vel = movement::integrate(self.vel, [drive_x, drive_y, drive_z], PLAYER_ACCELERATION);
        } else {
            // gravity replaces the y drive outright in play mode
            self.vel.x = movement::integrate_axis(self.vel.x, drive_x, PLAYER_ACCELERATION);
            self.vel.z = movement::integrate_axis(self.vel.z, drive_z, PLAYER_ACCELERATION);
            self.vel.y = (self.vel.y - GRAVITY_ACCELERATION)
                .clamp(-movement::MAX_VELOCITY, movement::MAX_VELOCITY);
        }

        let mut disp = movement::displacement(self.vel, dt);
        if !edit_mode {
            disp = swept::sweep(dt, disp, self.aa_box(), obstacles);
        }

        self.pos += disp;
    }
}
