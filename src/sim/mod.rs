//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Stable iteration order (by unit index)
//! - No rendering or platform dependencies

pub mod camera;
pub mod duel;
pub mod input;
pub mod motion;
pub mod shell;
pub mod skirmish;
pub mod snapshot;
pub mod steer;
pub mod stepper;
pub mod vehicle;

pub use camera::Camera;
pub use duel::Duel;
pub use input::{DuelInput, FrameInput, SkirmishInput, axis_from_keys, zoom_from_scroll};
pub use motion::{Angular, Drive, Linear, TurnState};
pub use shell::Shell;
pub use skirmish::{Skirmish, UnitId};
pub use snapshot::{Snapshot, TankView};
pub use steer::{Steer, rotate_toward};
pub use stepper::{FixedStep, Runner, Scene};
pub use vehicle::{DriveControls, Tank};
