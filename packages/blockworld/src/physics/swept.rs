//! Swept collision test and resolution between a moving box and static boxes.
//!
//! The test accounts for the moving box's full per-frame displacement, not just its start and
//! end position. Resolution clamps the displacement on the time-of-impact axis only, so the box
//! comes to rest exactly at contact and keeps sliding freely along the other axes.

use super::aa_box::AaBox;
use vek::*;


/// Will `moving`, displaced by `disp` over this frame, intersect the static `obstacle`?
///
/// Per axis, extends the leading face by the displacement in the direction of travel and checks
/// strict interval overlap. All three axes must overlap for a collision.
pub fn will_collide(disp: Vec3<f32>, moving: AaBox, obstacle: AaBox) -> bool {
    for i in 0..3 {
        let reach_neg = f32::max(0.0, -disp[i]);
        if moving.far(i) - reach_neg >= obstacle.near(i) {
            return false;
        }
        let reach_pos = f32::max(0.0, disp[i]);
        if moving.near(i) + reach_pos <= obstacle.far(i) {
            return false;
        }
    }
    true
}

/// Clamp `disp` so that `moving` stops exactly at contact with `obstacle`.
///
/// Only meaningful when [`will_collide`] held for the same arguments.
///
/// For each axis with nonzero displacement, the distance from the leading face to the obstacle's
/// facing face gives a time to contact (`dt * distance / displacement`). The axis whose overlap
/// closes last, the one with the largest time, is the axis actually stopping the motion; its
/// displacement component is replaced with the contact distance. Exact ties clamp every tied
/// axis (corner or edge collision). An axis with zero displacement is never a candidate and is
/// never modified.
pub fn resolve(dt: f32, mut disp: Vec3<f32>, moving: AaBox, obstacle: AaBox) -> Vec3<f32> {
    let mut time_to_contact = [f32::NEG_INFINITY; 3];
    let mut dist_to_contact = [0.0_f32; 3];

    for i in 0..3 {
        if disp[i] > 0.0 {
            dist_to_contact[i] = obstacle.far(i) - moving.near(i);
            time_to_contact[i] = dt * dist_to_contact[i] / disp[i];
        } else if disp[i] < 0.0 {
            dist_to_contact[i] = obstacle.near(i) - moving.far(i);
            time_to_contact[i] = dt * dist_to_contact[i] / disp[i];
        }
    }

    let latest = time_to_contact.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    if latest == f32::NEG_INFINITY {
        // no axis is moving
        return disp;
    }

    for i in 0..3 {
        if disp[i] != 0.0 && time_to_contact[i] == latest {
            disp[i] = dist_to_contact[i];
        }
    }

    disp
}

/// Sweep `moving` through `obstacles`, shrinking `disp` at each collision.
///
/// Each successive test/resolve pair sees the already-clamped displacement, so later obstacles
/// are checked against the true remaining motion. Iteration order is whatever the caller hands
/// in; it must be deterministic, but corner cases must not rely on a particular ordering.
pub fn sweep(
    dt: f32,
    mut disp: Vec3<f32>,
    moving: AaBox,
    obstacles: impl IntoIterator<Item = AaBox>,
) -> Vec3<f32> {
    for obstacle in obstacles {
        if will_collide(disp, moving, obstacle) {
            disp = resolve(dt, disp, moving, obstacle);
        }
    }
    disp
}


#[cfg(test)]
mod tests {
    use super::*;

    fn boks(x: f32, y: f32, z: f32, hx: f32, hy: f32, hz: f32) -> AaBox {
        AaBox::new(Vec3::new(x, y, z), Vec3::new(hx, hy, hz))
    }

    #[test]
    fn head_on_wall_clamps_to_exact_gap() {
        // player half extent 0.5 at origin moving +x at 10 units/s over a 100ms frame;
        // block spanning x in [1, 3]. leading face at 0.5, facing face at 1: gap 0.5.
        let player = boks(0.0, 0.0, 0.0, 0.5, 0.5, 0.5);
        let block = boks(2.0, 0.0, 0.0, 1.0, 1.0, 1.0);
        let disp = Vec3::new(10.0, 0.0, 0.0) * (100.0 / 1000.0);
        assert_eq!(disp.x, 1.0);

        assert!(will_collide(disp, player, block));
        let resolved = resolve(100.0, disp, player, block);
        assert_eq!(resolved, Vec3::new(0.5, 0.0, 0.0));
    }

    #[test]
    fn no_collision_when_swept_intervals_never_overlap() {
        let player = boks(0.0, 0.0, 0.0, 0.5, 0.5, 0.5);
        // ahead on x, but the frame's reach stops short of it
        let block = boks(5.0, 0.0, 0.0, 1.0, 1.0, 1.0);
        let disp = Vec3::new(1.0, 0.0, 0.0);
        assert!(!will_collide(disp, player, block));
    }

    #[test]
    fn zero_displacement_axis_is_never_clamped() {
        // moving only on z; the obstacle overlaps the mover's x interval but the x component
        // must pass through untouched no matter how close the boxes sit on x.
        let mover = boks(0.0, 0.0, 0.0, 0.5, 0.5, 0.5);
        let block = boks(0.6, 0.0, 2.0, 0.5, 0.5, 0.5);
        let disp = Vec3::new(0.0, 0.0, 3.0);
        assert!(will_collide(disp, mover, block));
        let resolved = resolve(16.0, disp, mover, block);
        assert_eq!(resolved.x, 0.0);
        assert_eq!(resolved.y, 0.0);
        // z clamped to the gap between faces: block.far(2) = 1.5, mover.near(2) = 0.5
        assert_eq!(resolved.z, 1.0);
    }

    #[test]
    fn overlap_on_one_axis_alone_is_no_collision() {
        // enemy with zero x velocity and nonzero z velocity next to a block that overlaps it
        // only on x: no collision, so x can never be clamped regardless of proximity.
        let enemy = boks(0.0, 0.0, 0.0, 0.5, 0.5, 0.5);
        let block = boks(0.2, 5.0, 5.0, 0.5, 0.5, 0.5);
        let disp = Vec3::new(0.0, 0.0, 1.0);
        assert!(!will_collide(disp, enemy, block));
        let swept = sweep(16.0, disp, enemy, [block]);
        assert_eq!(swept, disp);
    }

    #[test]
    fn resolution_never_grows_displacement() {
        let mover = boks(0.0, 0.0, 0.0, 0.5, 0.5, 0.5);
        let block = boks(2.0, 1.0, 1.5, 1.0, 1.0, 1.0);
        let disp = Vec3::new(2.0, 1.0, 2.0);
        if will_collide(disp, mover, block) {
            let resolved = resolve(50.0, disp, mover, block);
            for i in 0..3 {
                assert!(resolved[i].abs() <= disp[i].abs() + 1e-6);
            }
        }
    }

    #[test]
    fn negative_direction_uses_facing_faces() {
        let mover = boks(0.0, 0.0, 0.0, 0.5, 0.5, 0.5);
        let block = boks(-2.0, 0.0, 0.0, 1.0, 1.0, 1.0);
        let disp = Vec3::new(-1.0, 0.0, 0.0);
        assert!(will_collide(disp, mover, block));
        let resolved = resolve(100.0, disp, mover, block);
        // gap between mover's far face (-0.5) and block's near face (-1.0)
        assert_eq!(resolved, Vec3::new(-0.5, 0.0, 0.0));
    }

    #[test]
    fn exact_corner_tie_clamps_both_axes() {
        // mover approaches the block's corner along the diagonal: both axes' overlaps close at
        // the same time, so both get clamped in the same pass.
        let mover = boks(0.0, 0.0, 0.0, 0.5, 0.5, 0.5);
        let block = boks(2.0, 2.0, 0.0, 1.0, 1.0, 1.0);
        let disp = Vec3::new(1.0, 1.0, 0.0);
        assert!(will_collide(disp, mover, block));
        let resolved = resolve(16.0, disp, mover, block);
        assert_eq!(resolved, Vec3::new(0.5, 0.5, 0.0));
    }

    #[test]
    fn wall_slide_leaves_other_axes_untouched() {
        // moving diagonally into a wall ahead on x; x clamps, z keeps its full motion.
        let mover = boks(0.0, 0.0, 0.0, 0.5, 0.5, 0.5);
        let block = boks(2.0, 0.0, 0.0, 1.0, 1.0, 10.0);
        let disp = Vec3::new(1.0, 0.0, 0.4);
        assert!(will_collide(disp, mover, block));
        let resolved = resolve(16.0, disp, mover, block);
        assert_eq!(resolved.x, 0.5);
        assert_eq!(resolved.z, 0.4);
    }

    #[test]
    fn sweep_applies_progressively_shrunk_displacement() {
        let mover = boks(0.0, 0.0, 0.0, 0.5, 0.5, 0.5);
        let near_wall = boks(2.0, 0.0, 0.0, 1.0, 1.0, 1.0);
        let far_wall = boks(4.0, 0.0, 0.0, 1.0, 1.0, 1.0);
        let disp = Vec3::new(5.0, 0.0, 0.0);

        // near wall first: clamps to 0.5, after which the far wall is out of reach
        let resolved = sweep(100.0, disp, mover, [near_wall, far_wall]);
        assert_eq!(resolved, Vec3::new(0.5, 0.0, 0.0));

        // far wall listed first: clamps to 2.5, then the near wall shrinks it to 0.5
        let resolved = sweep(100.0, disp, mover, [far_wall, near_wall]);
        assert_eq!(resolved, Vec3::new(0.5, 0.0, 0.0));
    }

    #[test]
    fn stationary_mover_resolves_to_no_op() {
        let mover = boks(0.0, 0.0, 0.0, 0.5, 0.5, 0.5);
        let block = boks(0.6, 0.0, 0.0, 0.5, 0.5, 0.5);
        let disp = Vec3::zero();
        let resolved = resolve(16.0, disp, mover, block);
        assert_eq!(resolved, Vec3::zero());
    }
}
