//! Tank Skirmish - fixed-timestep tank simulation core
//!
//! Core modules:
//! - `math`: 2-D point algebra and fixed-size polygons
//! - `sim`: Deterministic simulation (motion, vehicles, shells, scenes)
//! - `tuning`: Data-driven game balance
//!
//! Rendering and windowing live outside this crate; they feed input
//! snapshots in and read [`sim::Snapshot`]s out once per frame.

pub mod math;
pub mod sim;
pub mod tuning;

pub use math::{Point, PointExt, Polygon};
pub use tuning::{Tuning, TuningError};

/// Simulation configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}
