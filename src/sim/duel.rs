//! Duel: one driven tank against a stationary target
//!
//! The player steers hull and turret physically and fires one shell at
//! a time. A hit knocks the target out until reset.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::input::DuelInput;
use super::shell::Shell;
use super::snapshot::{Snapshot, TankView};
use super::stepper::Scene;
use super::vehicle::Tank;
use crate::math::Polygon;
use crate::tuning::{ShellTuning, Tuning};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Duel {
    pub player: Tank,
    pub target: Tank,
    pub target_alive: bool,
    shell: Option<Shell>,
    shell_tuning: ShellTuning,
    playfield: Polygon,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl Duel {
    pub fn new(tuning: &Tuning) -> Self {
        let duel = &tuning.duel;
        let min = duel.playfield_min;
        let max = duel.playfield_max;
        let playfield = Polygon::new([
            Vec2::new(max.x, max.y),
            Vec2::new(min.x, max.y),
            Vec2::new(min.x, min.y),
            Vec2::new(max.x, min.y),
        ]);
        Self {
            player: Tank::new(&tuning.tank, duel.player_spawn, duel.player_rotation),
            target: Tank::new(&tuning.tank, duel.target_spawn, duel.target_rotation),
            target_alive: true,
            shell: None,
            shell_tuning: duel.shell.clone(),
            playfield,
            time_ticks: 0,
        }
    }

    pub fn shell(&self) -> Option<&Shell> {
        self.shell.as_ref()
    }

    pub fn playfield(&self) -> &Polygon {
        &self.playfield
    }

    /// Launch a shell from the player's turret unless one is in flight.
    /// Returns whether a shell was launched.
    pub fn fire(&mut self) -> bool {
        if self.shell.is_some() {
            return false;
        }
        let shell = Shell::new(
            &self.shell_tuning,
            self.player.muzzle(),
            self.player.aim_direction(),
        );
        log::info!(
            "Player fired from ({:.1}, {:.1}) heading ({:.3}, {:.3})",
            shell.position().x,
            shell.position().y,
            shell.heading().x,
            shell.heading().y
        );
        self.shell = Some(shell);
        true
    }

    /// Bring the target back to life
    pub fn reset(&mut self) {
        if !self.target_alive {
            log::info!("Target reset");
        }
        self.target_alive = true;
    }

    fn update_shell(&mut self, dt: f32) {
        let Some(shell) = self.shell.as_mut() else {
            return;
        };
        shell.update(dt);

        if shell.geometry().aabb(self.target.hull()) {
            log::info!("Target hit at tick {}", self.time_ticks);
            self.target_alive = false;
            self.shell = None;
        } else if !shell.geometry().aabb(&self.playfield) {
            log::debug!("Shell left the playfield at tick {}", self.time_ticks);
            self.shell = None;
        }
    }
}

impl Scene for Duel {
    type Input = DuelInput;

    fn tick(&mut self, input: &DuelInput, dt: f32) {
        self.time_ticks += 1;

        if input.reset {
            self.reset();
        }
        if input.fire {
            self.fire();
        }

        self.player.drive(input.controls, dt);
        self.update_shell(dt);
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            playfield: self.playfield,
            view: None,
            tanks: vec![
                TankView::new(&self.player, true, false),
                TankView::new(&self.target, self.target_alive, false),
            ],
            shells: self.shell.iter().map(|s| *s.geometry()).collect(),
        }
    }
}
