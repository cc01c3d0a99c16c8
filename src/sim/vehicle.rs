//! Tank: hull + turret rigid bodies
//!
//! A tank can be driven two ways. The duel demo steers it physically
//! through [`Angular`]/[`Linear`] components ([`Tank::drive`]); the
//! skirmish demo hands it move and look targets and lets it turn and
//! travel at fixed rates ([`Tank::follow_orders`]). Either way the turret
//! inherits every hull translation and rotation, then traverses on its
//! own about its mount point.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::motion::{Angular, Drive, Linear, TurnState};
use super::steer::{Steer, rotate_toward};
use crate::math::Polygon;
use crate::tuning::TankTuning;

/// Physical control levels for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriveControls {
    pub hull_turn: TurnState,
    pub turret_turn: TurnState,
    pub drive: Drive,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tank {
    hull: Polygon,
    turret: Polygon,
    pub hull_angular: Angular,
    pub turret_angular: Angular,
    pub hull_linear: Linear,
    /// Magnitude of the hull's linear acceleration
    thrust: f32,
    /// Turret mount as a fraction from the hull's front edge to its back edge
    turret_mount: f32,

    order_speed: f32,
    /// Radians per second
    order_hull_turn: f32,
    /// Radians per second
    order_turret_turn: f32,
    arrival_tolerance: f32,
    move_target: Vec2,
    look_target: Vec2,
}

impl Tank {
    /// Build a tank centred on `location`, rotated `rotation` degrees
    /// counter-clockwise from a +y front.
    pub fn new(tuning: &TankTuning, location: Vec2, rotation: f32) -> Self {
        let mut hull = Polygon::rectangle(tuning.hull_size.x, tuning.hull_size.y);
        let mut turret = Polygon::rectangle(tuning.turret_size.x, tuning.turret_size.y);
        turret.move_to(
            hull.front_midpoint()
                .lerp(hull.back_midpoint(), tuning.turret_mount),
        );

        let angle = rotation.to_radians();
        hull.rotate(angle);
        turret.rotate_about(angle, hull.center());
        hull.translate(location);
        turret.translate(location);

        let look_target = hull.front_midpoint();
        Self {
            hull,
            turret,
            hull_angular: Angular::new(
                tuning.hull_max_turn,
                tuning.hull_turn_accel,
                tuning.hull_turn_friction,
            ),
            turret_angular: Angular::new(
                tuning.turret_max_turn,
                tuning.turret_turn_accel,
                tuning.turret_turn_friction,
            ),
            hull_linear: Linear::new(tuning.max_speed, tuning.drive_friction),
            thrust: tuning.thrust,
            turret_mount: tuning.turret_mount,
            order_speed: tuning.order_speed,
            order_hull_turn: tuning.order_hull_turn.to_radians(),
            order_turret_turn: tuning.order_turret_turn.to_radians(),
            arrival_tolerance: tuning.arrival_tolerance,
            move_target: location,
            look_target,
        }
    }

    #[inline]
    pub fn hull(&self) -> &Polygon {
        &self.hull
    }

    #[inline]
    pub fn turret(&self) -> &Polygon {
        &self.turret
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.hull.center()
    }

    /// Unit vector from the hull's back edge to its front edge
    pub fn forward(&self) -> Vec2 {
        (self.hull.front_midpoint() - self.hull.back_midpoint()).normalize_or(Vec2::ZERO)
    }

    /// Point the turret traverses about
    pub fn mount_point(&self) -> Vec2 {
        self.hull
            .front_midpoint()
            .lerp(self.hull.back_midpoint(), self.turret_mount)
    }

    /// Where a shell leaves the barrel
    pub fn muzzle(&self) -> Vec2 {
        self.turret.front_midpoint()
    }

    /// Unit firing direction of the turret
    pub fn aim_direction(&self) -> Vec2 {
        self.turret.facing()
    }

    /// Point the hull pivots about this tick: the back edge while rolling
    /// forward or standing, the front edge while reversing.
    pub fn hull_pivot(&self) -> Vec2 {
        if self.hull_linear.axial_speed() >= 0.0 {
            self.hull.back_midpoint()
        } else {
            self.hull.front_midpoint()
        }
    }

    /// Advance one tick under physical control
    pub fn drive(&mut self, controls: DriveControls, dt: f32) {
        self.hull_angular.state = controls.hull_turn;
        self.turret_angular.state = controls.turret_turn;
        self.hull_linear.state = controls.drive;

        // Translation, confined to the current forward axis
        self.hull_linear.acceleration = self.forward() * self.thrust;
        let displacement = self.hull_linear.update(&mut self.hull, dt);
        self.turret.translate(displacement);

        // Pivot turn, carried over to the turret
        self.hull_angular.pivot = self.hull_pivot();
        let (angle, pivot) = self.hull_angular.update(&mut self.hull, dt);
        if angle != 0.0 {
            self.turret.rotate_about(angle, pivot);
        }

        // Free traverse about the mount
        self.turret_angular.pivot = self.mount_point();
        self.turret_angular.update(&mut self.turret, dt);
    }

    pub fn move_target(&self) -> Vec2 {
        self.move_target
    }

    pub fn look_target(&self) -> Vec2 {
        self.look_target
    }

    pub fn set_move_target(&mut self, target: Vec2) {
        self.move_target = target;
    }

    pub fn set_look_target(&mut self, target: Vec2) {
        self.look_target = target;
    }

    /// Cancel the current move order where the tank stands
    pub fn stop(&mut self) {
        self.move_target = self.position();
    }

    /// Whether the hull is within the arrival tolerance of its move target
    pub fn arrived(&self) -> bool {
        self.move_target.distance(self.position()) <= self.arrival_tolerance
    }

    /// Advance one tick under move/look orders. Returns true when the
    /// turret is aimed at the look target.
    pub fn follow_orders(&mut self, dt: f32) -> bool {
        if !self.arrived() {
            let center = self.position();
            let to_target = self.move_target - center;
            match rotate_toward(self.hull.facing(), to_target, self.order_hull_turn * dt) {
                Steer::Aligned => {
                    let travel = (self.order_speed * dt).min(to_target.length());
                    let offset = self.hull.facing() * travel;
                    self.hull.translate(offset);
                    self.turret.translate(offset);
                }
                Steer::Turn(angle) => {
                    self.hull.rotate_about(angle, center);
                    self.turret.rotate_about(angle, center);
                }
            }
        }

        self.aim(dt)
    }

    /// Traverse the turret toward the look target. Returns true once aimed.
    pub fn aim(&mut self, dt: f32) -> bool {
        let mount = self.mount_point();
        let to_target = self.look_target - mount;
        match rotate_toward(self.turret.facing(), to_target, self.order_turret_turn * dt) {
            Steer::Aligned => true,
            Steer::Turn(angle) => {
                self.turret.rotate_about(angle, mount);
                false
            }
        }
    }
}
