//! Bang-bang rotation toward a target direction
//!
//! Shared by hull move orders and turret aiming: turn at a fixed rate
//! until the remaining angle fits inside one step, then report aligned.

use glam::Vec2;

use crate::math::PointExt;

/// Outcome of one steering decision
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Steer {
    /// Within the tolerance band; no rotation needed
    Aligned,
    /// Rotate by this signed angle (radians, counter-clockwise positive)
    Turn(f32),
}

/// Decide how to rotate `facing` toward `desired` when limited to
/// `step` radians this tick.
///
/// The tolerance band is exactly one step wide, so a turn never
/// overshoots into oscillation. Degenerate vectors count as aligned.
pub fn rotate_toward(facing: Vec2, desired: Vec2, step: f32) -> Steer {
    let angle = facing.signed_angle_to(desired);
    if angle.abs() <= step {
        Steer::Aligned
    } else {
        Steer::Turn(step.copysign(angle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_turns_shortest_way() {
        let step = 0.1;
        assert_eq!(rotate_toward(Vec2::X, Vec2::Y, step), Steer::Turn(0.1));
        assert_eq!(rotate_toward(Vec2::X, -Vec2::Y, step), Steer::Turn(-0.1));
    }

    #[test]
    fn test_tolerance_band() {
        let step = 0.1;
        let almost = Vec2::from_angle(0.09);
        assert_eq!(rotate_toward(Vec2::X, almost, step), Steer::Aligned);
        let outside = Vec2::from_angle(0.11);
        assert_eq!(rotate_toward(Vec2::X, outside, step), Steer::Turn(0.1));
    }

    #[test]
    fn test_degenerate_is_aligned() {
        assert_eq!(rotate_toward(Vec2::ZERO, Vec2::X, 0.1), Steer::Aligned);
        assert_eq!(rotate_toward(Vec2::X, Vec2::ZERO, 0.1), Steer::Aligned);
    }

    #[test]
    fn test_converges_without_oscillation() {
        let step = 0.05;
        let target = Vec2::from_angle(2.0);
        let mut facing = Vec2::X;
        let mut last_sign = 0.0;
        let mut turns = 0;
        while let Steer::Turn(angle) = rotate_toward(facing, target, step) {
            if last_sign != 0.0 {
                assert_eq!(angle.signum(), last_sign);
            }
            last_sign = angle.signum();
            facing = facing.rotate_about(angle, Vec2::ZERO);
            turns += 1;
            assert!(turns < 100);
        }
        assert!(facing.signed_angle_to(target).abs() <= step);
        // About 2.0 / 0.05 steps
        assert!((39..=41).contains(&turns));
    }

    #[test]
    fn test_opposite_direction_picks_a_side() {
        let result = rotate_toward(Vec2::X, Vec2::from_angle(PI - 1e-3), FRAC_PI_2 / 10.0);
        assert!(matches!(result, Steer::Turn(a) if a > 0.0));
    }
}
