//! Angular and linear motion components
//!
//! Both are pure state updates over a timestep: they integrate velocity,
//! clamp it to its bound, decay it with friction and then move the
//! geometry they are handed.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::math::Polygon;

/// Steering input for a rotating part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TurnState {
    /// Counter-clockwise
    Left,
    #[default]
    Stop,
    /// Clockwise
    Right,
}

impl TurnState {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            TurnState::Left => 1.0,
            TurnState::Stop => 0.0,
            TurnState::Right => -1.0,
        }
    }

    /// Resolve a left/right key pair; both or neither held means stop
    pub fn from_keys(left_down: bool, right_down: bool) -> Self {
        match (left_down, right_down) {
            (true, false) => TurnState::Left,
            (false, true) => TurnState::Right,
            _ => TurnState::Stop,
        }
    }
}

/// Throttle input for a translating part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Drive {
    Forward,
    #[default]
    Stop,
    Reverse,
}

impl Drive {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Drive::Forward => 1.0,
            Drive::Stop => 0.0,
            Drive::Reverse => -1.0,
        }
    }

    /// Resolve a forward/reverse key pair; both or neither held means stop
    pub fn from_keys(forward_down: bool, reverse_down: bool) -> Self {
        match (forward_down, reverse_down) {
            (true, false) => Drive::Forward,
            (false, true) => Drive::Reverse,
            _ => Drive::Stop,
        }
    }
}

/// Bounded angular velocity (degrees per second) with friction decay
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Angular {
    pub state: TurnState,
    pub velocity: f32,
    pub max_velocity: f32,
    /// Degrees per second squared
    pub acceleration: f32,
    /// Degrees per second squared, always opposing velocity
    pub friction: f32,
    /// Rotation centre used by the next update
    pub pivot: Vec2,
}

impl Angular {
    pub fn new(max_velocity: f32, acceleration: f32, friction: f32) -> Self {
        Self {
            state: TurnState::Stop,
            velocity: 0.0,
            max_velocity,
            acceleration,
            friction,
            pivot: Vec2::ZERO,
        }
    }

    /// Integrate one step without touching geometry; returns the rotation
    /// in radians to apply this step.
    pub fn step(&mut self, dt: f32) -> f32 {
        self.velocity += self.acceleration * self.state.sign() * dt;
        self.velocity = self.velocity.clamp(-self.max_velocity, self.max_velocity);

        // Capped at |velocity| so friction alone can only reach zero
        let fric = (self.friction * dt).min(self.velocity.abs());
        self.velocity += if self.velocity >= 0.0 { -fric } else { fric };

        debug_assert!(self.velocity.abs() <= self.max_velocity);
        (self.velocity * dt).to_radians()
    }

    /// Integrate and rotate `geometry` about the current pivot.
    /// Returns the rotation applied (radians) and the pivot used.
    pub fn update(&mut self, geometry: &mut Polygon, dt: f32) -> (f32, Vec2) {
        let angle = self.step(dt);
        let pivot = self.pivot;
        if angle != 0.0 {
            geometry.rotate_about(angle, pivot);
        }
        (angle, pivot)
    }
}

/// Bounded linear velocity confined to the acceleration axis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Linear {
    pub state: Drive,
    pub velocity: Vec2,
    pub max_speed: f32,
    /// Direction and magnitude of thrust; also the axis motion is confined to
    pub acceleration: Vec2,
    pub friction: f32,
}

impl Linear {
    pub fn new(max_speed: f32, friction: f32) -> Self {
        Self {
            state: Drive::Stop,
            velocity: Vec2::ZERO,
            max_speed,
            acceleration: Vec2::ZERO,
            friction,
        }
    }

    /// Signed speed along the acceleration axis
    pub fn axial_speed(&self) -> f32 {
        let axis = self.acceleration.normalize_or(Vec2::ZERO);
        self.velocity.dot(axis)
    }

    /// Integrate one step without touching geometry; returns the
    /// displacement for this step.
    pub fn step(&mut self, dt: f32) -> Vec2 {
        self.velocity += self.acceleration * self.state.sign() * dt;

        // No axis means no thrust direction: keep the previous heading
        let axis = self.acceleration.normalize_or(Vec2::ZERO);
        if axis != Vec2::ZERO {
            self.velocity = axis * self.velocity.dot(axis);
        }

        let speed = self.velocity.length();
        if speed > self.max_speed {
            self.velocity *= self.max_speed / speed;
        }

        let speed = self.velocity.length();
        if speed > 0.0 {
            let fric = self.friction * dt;
            if fric >= speed {
                self.velocity = Vec2::ZERO;
            } else {
                self.velocity -= self.velocity / speed * fric;
            }
        }

        debug_assert!(self.velocity.length() <= self.max_speed * (1.0 + 1e-4));
        self.velocity * dt
    }

    /// Integrate and translate `geometry`; returns the displacement applied
    pub fn update(&mut self, geometry: &mut Polygon, dt: f32) -> Vec2 {
        let displacement = self.step(dt);
        geometry.translate(displacement);
        displacement
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use proptest::prelude::*;

    fn turn_state() -> impl Strategy<Value = TurnState> {
        prop_oneof![
            Just(TurnState::Left),
            Just(TurnState::Stop),
            Just(TurnState::Right)
        ]
    }

    fn drive() -> impl Strategy<Value = Drive> {
        prop_oneof![Just(Drive::Forward), Just(Drive::Stop), Just(Drive::Reverse)]
    }

    #[test]
    fn test_key_pairs() {
        assert_eq!(TurnState::from_keys(true, true), TurnState::Stop);
        assert_eq!(TurnState::from_keys(false, false), TurnState::Stop);
        assert_eq!(TurnState::from_keys(true, false), TurnState::Left);
        assert_eq!(TurnState::from_keys(false, true), TurnState::Right);
        assert_eq!(Drive::from_keys(true, false), Drive::Forward);
        assert_eq!(Drive::from_keys(true, true), Drive::Stop);
    }

    #[test]
    fn test_angular_friction_example() {
        let mut angular = Angular::new(80.0, 50.0, 25.0);
        angular.velocity = 10.0;
        angular.step(SIM_DT);
        assert!((angular.velocity - (10.0 - 25.0 / 60.0)).abs() < 1e-4);
        assert!((angular.velocity - 9.583).abs() < 1e-3);
    }

    #[test]
    fn test_angular_friction_decays_to_zero_without_flip() {
        let mut angular = Angular::new(80.0, 50.0, 25.0);
        angular.velocity = -3.0;
        let mut prev = angular.velocity.abs();
        for _ in 0..20 {
            angular.step(SIM_DT);
            assert!(angular.velocity <= 0.0);
            if prev > 0.0 {
                assert!(angular.velocity.abs() < prev);
            }
            prev = angular.velocity.abs();
        }
        assert_eq!(angular.velocity, 0.0);
        angular.step(SIM_DT);
        assert_eq!(angular.velocity, 0.0);
    }

    #[test]
    fn test_angular_saturates_at_max() {
        let mut angular = Angular::new(80.0, 50.0, 25.0);
        angular.state = TurnState::Left;
        for _ in 0..1000 {
            angular.step(SIM_DT);
        }
        // Driving at the bound, friction trims one tick's worth below max
        assert!(angular.velocity <= 80.0);
        assert!(angular.velocity > 79.0);
    }

    #[test]
    fn test_angular_rotates_about_pivot() {
        let mut geometry = Polygon::rectangle(2.0, 2.0);
        let mut angular = Angular::new(90.0, 0.0, 0.0);
        angular.velocity = 90.0;
        angular.pivot = Vec2::new(0.0, -1.0);
        let (angle, pivot) = angular.update(&mut geometry, 1.0);
        assert!((angle - std::f32::consts::FRAC_PI_2).abs() < 1e-5);
        assert_eq!(pivot, Vec2::new(0.0, -1.0));
        assert!((geometry.back_midpoint() - pivot).length() < 1e-4);
        assert!((geometry.center() - Vec2::new(-1.0, -1.0)).length() < 1e-4);
    }

    #[test]
    fn test_linear_confined_to_axis() {
        let mut linear = Linear::new(100.0, 0.0);
        linear.state = Drive::Forward;
        linear.velocity = Vec2::new(10.0, 10.0);
        linear.acceleration = Vec2::new(0.0, 5.0);
        linear.step(SIM_DT);
        assert_eq!(linear.velocity.x, 0.0);
        assert!(linear.velocity.y > 10.0);
    }

    #[test]
    fn test_linear_rescales_preserving_direction() {
        let mut linear = Linear::new(5.0, 0.0);
        linear.velocity = Vec2::new(30.0, 40.0);
        linear.acceleration = Vec2::new(3.0, 4.0);
        linear.step(SIM_DT);
        assert!((linear.velocity.length() - 5.0).abs() < 1e-4);
        assert!((linear.velocity.normalize() - Vec2::new(0.6, 0.8)).length() < 1e-4);
    }

    #[test]
    fn test_linear_zero_axis_keeps_heading() {
        let mut linear = Linear::new(100.0, 6.0);
        linear.velocity = Vec2::new(1.0, 0.0);
        let mut geometry = Polygon::rectangle(1.0, 1.0);
        let moved = linear.update(&mut geometry, SIM_DT);
        assert!(moved.x > 0.0);
        assert_eq!(moved.y, 0.0);
        assert!(!linear.velocity.x.is_nan());
    }

    #[test]
    fn test_linear_friction_stops_without_reversing() {
        let mut linear = Linear::new(100.0, 60.0);
        linear.acceleration = Vec2::Y * 10.0;
        linear.velocity = Vec2::Y * 2.0;
        for _ in 0..10 {
            linear.step(SIM_DT);
            assert!(linear.velocity.y >= 0.0);
        }
        assert_eq!(linear.velocity, Vec2::ZERO);
    }

    proptest! {
        #[test]
        fn prop_angular_velocity_bounded(
            states in prop::collection::vec(turn_state(), 1..400),
            start in -200.0f32..200.0,
        ) {
            let mut angular = Angular::new(80.0, 50.0, 25.0);
            angular.velocity = start.clamp(-80.0, 80.0);
            for state in states {
                angular.state = state;
                angular.step(SIM_DT);
                prop_assert!(angular.velocity.abs() <= angular.max_velocity);
            }
        }

        #[test]
        fn prop_angular_friction_monotone(start in -80.0f32..80.0) {
            let mut angular = Angular::new(80.0, 50.0, 25.0);
            angular.velocity = start;
            let sign = start.signum();
            let mut prev = start.abs();
            for _ in 0..600 {
                angular.step(SIM_DT);
                let now = angular.velocity.abs();
                prop_assert!(angular.velocity == 0.0 || angular.velocity.signum() == sign);
                prop_assert!(now < prev || (now == 0.0 && prev == 0.0));
                prev = now;
            }
            prop_assert_eq!(angular.velocity, 0.0);
        }

        #[test]
        fn prop_linear_speed_bounded(
            drives in prop::collection::vec(drive(), 1..400),
            heading in 0.0f32..std::f32::consts::TAU,
        ) {
            let mut linear = Linear::new(60.0, 15.0);
            linear.acceleration = Vec2::from_angle(heading) * 40.0;
            for d in drives {
                linear.state = d;
                linear.step(SIM_DT);
                prop_assert!(linear.velocity.length() <= linear.max_speed * (1.0 + 1e-4));
            }
        }
    }
}
