//! Per-axis velocity integration: accelerate toward a drive signal, decay toward zero when
//! coasting, clamp to the speed limit.

use vek::*;


/// Maximum velocity magnitude per axis for a moving body.
pub const MAX_VELOCITY: f32 = 10.0;
/// Fixed-magnitude velocity decay applied per frame on coasting axes.
pub const DAMPENING: f32 = 1.0;
pub const PLAYER_ACCELERATION: f32 = 1.0;
pub const GRAVITY_ACCELERATION: f32 = 1.0;
pub const ENEMY_ACCELERATION: f32 = PLAYER_ACCELERATION * 0.75;


/// Movement signal for one axis of one body for one frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Drive {
    /// Accelerate in the positive direction.
    Positive,
    /// Accelerate in the negative direction.
    Negative,
    /// No signal: decay the current velocity toward zero.
    Coast,
}

impl Drive {
    /// Drive from a pair of held input flags; positive wins when both are held.
    pub fn from_flags(positive: bool, negative: bool) -> Self {
        if positive {
            Drive::Positive
        } else if negative {
            Drive::Negative
        } else {
            Drive::Coast
        }
    }

    /// Drive that steers `from` toward `to` on a single axis.
    pub fn toward(from: f32, to: f32) -> Self {
        if to > from {
            Drive::Positive
        } else if to < from {
            Drive::Negative
        } else {
            Drive::Coast
        }
    }
}

/// Velocity change for one axis this frame.
///
/// Coasting applies a constant `DAMPENING` step against the current velocity's sign rather than
/// a proportional decay. A velocity smaller than the step overshoots past zero within the frame;
/// that is long-standing observed behavior, kept as is (see `decay_can_overshoot_zero`).
pub fn drive_delta(drive: Drive, vel: f32, accel: f32) -> f32 {
    match drive {
        Drive::Positive => accel,
        Drive::Negative => -accel,
        Drive::Coast => {
            if vel != 0.0 {
                -vel.signum() * DAMPENING
            } else {
                0.0
            }
        }
    }
}

/// Apply one axis's drive to its velocity component and clamp to the speed limit.
pub fn integrate_axis(vel: f32, drive: Drive, accel: f32) -> f32 {
    (vel + drive_delta(drive, vel, accel)).clamp(-MAX_VELOCITY, MAX_VELOCITY)
}

/// Accumulate per-axis drives into `vel`, then clamp each component to the speed limit.
pub fn integrate(mut vel: Vec3<f32>, drives: [Drive; 3], accel: f32) -> Vec3<f32> {
    for i in 0..3 {
        vel[i] = integrate_axis(vel[i], drives[i], accel);
    }
    vel
}

/// Displacement for this frame from a velocity in units per second and `dt` in milliseconds.
///
/// A zero or negative `dt` degenerates to a zero (or backwards) translation; it is the caller's
/// measured elapsed time and is not rejected here.
pub fn displacement(vel: Vec3<f32>, dt: f32) -> Vec3<f32> {
    vel * (dt / 1000.0)
}
