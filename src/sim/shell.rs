//! Tank shells
//!
//! A shell flies in a straight line at constant speed along the heading
//! it was fired with. Whether it hits or leaves the playfield is decided
//! by the scene that owns it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::math::{PointExt, Polygon};
use crate::normalize_angle;
use crate::tuning::ShellTuning;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shell {
    geometry: Polygon,
    /// Unit direction fixed at fire time
    heading: Vec2,
    speed: f32,
}

impl Shell {
    /// Spawn centred on `origin`, nose along `heading`. A degenerate
    /// heading falls back to +y so the shell still has a direction.
    pub fn new(tuning: &ShellTuning, origin: Vec2, heading: Vec2) -> Self {
        let heading = heading.normalize_or(Vec2::Y);
        let mut geometry = Polygon::rectangle(tuning.size.x, tuning.size.y);
        // Rectangles are built nose-up (+y)
        geometry.rotate(normalize_angle(
            heading.heading_angle() - std::f32::consts::FRAC_PI_2,
        ));
        geometry.translate(origin);
        Self {
            geometry,
            heading,
            speed: tuning.speed,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.geometry.translate(self.heading * self.speed * dt);
    }

    #[inline]
    pub fn geometry(&self) -> &Polygon {
        &self.geometry
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.geometry.center()
    }

    #[inline]
    pub fn heading(&self) -> Vec2 {
        self.heading
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }
}
