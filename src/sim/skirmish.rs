//! Skirmish: two order-driven tanks under a pan/zoom camera
//!
//! The player selects a tank by clicking its hull and sends it move or
//! stop orders. Tanks look at each other and fire automatically once
//! both are alive and inside engagement range.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::camera::Camera;
use super::input::SkirmishInput;
use super::shell::Shell;
use super::snapshot::{Snapshot, TankView};
use super::stepper::Scene;
use super::vehicle::Tank;
use crate::math::Polygon;
use crate::tuning::{ShellTuning, Tuning};

/// Index of a tank in the skirmish roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitId(pub usize);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skirmish {
    tanks: [Tank; 2],
    alive: [bool; 2],
    /// One shell slot per side
    shells: [Option<Shell>; 2],
    map: Polygon,
    pub camera: Camera,
    selected: Option<UnitId>,
    engagement_range: f32,
    shell_tuning: ShellTuning,
    in_range: bool,
    pub time_ticks: u64,
}

impl Skirmish {
    pub fn new(tuning: &Tuning) -> Self {
        let skirmish = &tuning.skirmish;
        let tanks = skirmish
            .spawns
            .map(|(location, rotation)| Tank::new(&tuning.tank, location, rotation));
        Self {
            tanks,
            alive: [true; 2],
            shells: [None, None],
            map: Polygon::rectangle(skirmish.map_size.x, skirmish.map_size.y),
            camera: Camera::new(&skirmish.camera),
            selected: None,
            engagement_range: skirmish.engagement_range,
            shell_tuning: skirmish.shell.clone(),
            in_range: false,
            time_ticks: 0,
        }
    }

    pub fn tank(&self, id: UnitId) -> Option<&Tank> {
        self.tanks.get(id.0)
    }

    pub fn is_alive(&self, id: UnitId) -> bool {
        self.alive.get(id.0).copied().unwrap_or(false)
    }

    pub fn shell(&self, id: UnitId) -> Option<&Shell> {
        self.shells.get(id.0).and_then(Option::as_ref)
    }

    pub fn selected(&self) -> Option<UnitId> {
        self.selected
    }

    pub fn map(&self) -> &Polygon {
        &self.map
    }

    /// Whether both tanks are alive and closer than engagement range
    pub fn in_range(&self) -> bool {
        self.in_range
    }

    /// Select the tank whose hull bounds contain `point`; clicking empty
    /// ground clears the selection.
    pub fn select(&mut self, point: Vec2) -> Option<UnitId> {
        let hit = self
            .tanks
            .iter()
            .position(|tank| tank.hull().contains_point(point))
            .map(UnitId);
        if hit != self.selected {
            match hit {
                Some(id) => log::info!("Selected unit {}", id.0),
                None => log::info!("Selection cleared"),
            }
        }
        self.selected = hit;
        hit
    }

    /// Order the selected tank to `target`. No-op without a selection.
    pub fn move_selected(&mut self, target: Vec2) {
        let Some(tank) = self.selected.and_then(|id| self.tanks.get_mut(id.0)) else {
            return;
        };
        log::info!("Move order to ({:.1}, {:.1})", target.x, target.y);
        tank.set_move_target(target);
    }

    /// Cancel the selected tank's move order. No-op without a selection.
    pub fn stop_selected(&mut self) {
        let Some(tank) = self.selected.and_then(|id| self.tanks.get_mut(id.0)) else {
            return;
        };
        log::info!("Stop order");
        tank.stop();
    }

    fn apply_commands(&mut self, input: &SkirmishInput) {
        if let Some(point) = input.select {
            self.select(point);
        }
        if let Some(target) = input.move_to {
            self.move_selected(target);
        }
        if input.stop {
            self.stop_selected();
        }
    }

    /// Point turrets at each other inside engagement range, otherwise
    /// straight ahead.
    fn update_engagement(&mut self) {
        let [a, b] = &self.tanks;
        let in_range = self.alive.iter().all(|alive| *alive)
            && a.position().distance(b.position()) < self.engagement_range;
        if in_range != self.in_range {
            log::debug!("Engagement {}", if in_range { "started" } else { "ended" });
            self.in_range = in_range;
        }

        let targets = [b.position(), a.position()];
        for (tank, enemy) in self.tanks.iter_mut().zip(targets) {
            let look = if in_range {
                enemy
            } else {
                tank.hull().front_midpoint()
            };
            tank.set_look_target(look);
        }
    }

    fn update_shells(&mut self, dt: f32) {
        for side in 0..self.shells.len() {
            let enemy = 1 - side;
            let Some(shell) = self.shells[side].as_mut() else {
                continue;
            };
            shell.update(dt);

            if self.alive[enemy] && shell.geometry().aabb(self.tanks[enemy].hull()) {
                log::info!("Unit {side} destroyed unit {enemy} at tick {}", self.time_ticks);
                self.alive[enemy] = false;
                self.shells[side] = None;
            } else if !shell.geometry().aabb(&self.map) {
                log::debug!("Shell from unit {side} left the map");
                self.shells[side] = None;
            }
        }
    }

    fn update_tanks(&mut self, dt: f32) {
        for side in 0..self.tanks.len() {
            if !self.alive[side] {
                continue;
            }
            let aimed = self.tanks[side].follow_orders(dt);
            // An enemy killed earlier this tick is no longer a target
            let engaged = self.in_range && self.alive[1 - side];
            if aimed && engaged && self.shells[side].is_none() {
                let tank = &self.tanks[side];
                log::info!("Unit {side} fired");
                self.shells[side] = Some(Shell::new(
                    &self.shell_tuning,
                    tank.muzzle(),
                    tank.aim_direction(),
                ));
            }
        }
    }
}

impl Scene for Skirmish {
    type Input = SkirmishInput;

    fn tick(&mut self, input: &SkirmishInput, dt: f32) {
        self.time_ticks += 1;

        self.apply_commands(input);
        self.update_engagement();
        self.update_shells(dt);
        self.update_tanks(dt);
        self.camera.update(input.pan, input.zoom, dt);
    }

    fn snapshot(&self) -> Snapshot {
        let tanks = self
            .tanks
            .iter()
            .enumerate()
            .map(|(i, tank)| TankView::new(tank, self.alive[i], self.selected == Some(UnitId(i))))
            .collect();
        Snapshot {
            playfield: self.map,
            view: Some(self.camera.view()),
            tanks,
            shells: self.shells.iter().flatten().map(|s| *s.geometry()).collect(),
        }
    }
}
