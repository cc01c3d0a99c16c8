//! Read-only frame snapshot handed to the renderer
//!
//! Geometry only: which texture or colour to draw with is the render
//! layer's business.

use serde::{Deserialize, Serialize};

use super::vehicle::Tank;
use crate::math::Polygon;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TankView {
    pub hull: Polygon,
    pub turret: Polygon,
    pub alive: bool,
    pub selected: bool,
}

impl TankView {
    pub fn new(tank: &Tank, alive: bool, selected: bool) -> Self {
        Self {
            hull: *tank.hull(),
            turret: *tank.turret(),
            alive,
            selected,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Area outside of which shells are discarded
    pub playfield: Polygon,
    /// Camera view rectangle, when the scene has a camera
    pub view: Option<Polygon>,
    pub tanks: Vec<TankView>,
    pub shells: Vec<Polygon>,
}
