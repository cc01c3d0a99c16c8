//! Data-driven game balance
//!
//! Every constant the simulation uses lives here so a JSON file can
//! override it. Defaults reproduce the shipped duel and skirmish demos.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Errors raised while loading or validating tuning data
#[derive(Debug, thiserror::Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Shape and motion limits shared by every tank
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TankTuning {
    /// Hull width/length in world units (front edge is the short side)
    pub hull_size: Vec2,
    pub turret_size: Vec2,
    /// Where the turret sits between the hull's front (0) and back (1) edge
    pub turret_mount: f32,

    // === Physical control (duel) ===
    /// Degrees per second
    pub hull_max_turn: f32,
    pub hull_turn_accel: f32,
    pub hull_turn_friction: f32,
    pub turret_max_turn: f32,
    pub turret_turn_accel: f32,
    pub turret_turn_friction: f32,
    /// World units per second
    pub max_speed: f32,
    pub thrust: f32,
    pub drive_friction: f32,

    // === Orders (skirmish) ===
    /// Straight-line speed while following a move order
    pub order_speed: f32,
    /// Degrees per second while turning toward a move target
    pub order_hull_turn: f32,
    /// Degrees per second while aiming
    pub order_turret_turn: f32,
    /// A move order is complete within this distance of the target
    pub arrival_tolerance: f32,
}

impl Default for TankTuning {
    fn default() -> Self {
        Self {
            hull_size: Vec2::new(62.5, 109.9),
            turret_size: Vec2::new(34.7, 76.1),
            turret_mount: 0.4,

            hull_max_turn: 80.0,
            hull_turn_accel: 50.0,
            hull_turn_friction: 25.0,
            turret_max_turn: 60.0,
            turret_turn_accel: 60.0,
            turret_turn_friction: 40.0,
            max_speed: 60.0,
            thrust: 40.0,
            drive_friction: 15.0,

            order_speed: 25.0,
            order_hull_turn: 15.0,
            order_turret_turn: 15.0,
            arrival_tolerance: 1.0,
        }
    }
}

/// Projectile shape and speed
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellTuning {
    pub size: Vec2,
    pub speed: f32,
}

impl Default for ShellTuning {
    fn default() -> Self {
        Self {
            size: Vec2::new(2.92, 8.79),
            speed: 250.0,
        }
    }
}

/// One-on-one duel against a stationary target
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DuelTuning {
    /// Shells leaving this rectangle are discarded
    pub playfield_min: Vec2,
    pub playfield_max: Vec2,
    pub player_spawn: Vec2,
    /// Degrees, counter-clockwise from the +y front
    pub player_rotation: f32,
    pub target_spawn: Vec2,
    pub target_rotation: f32,
    pub shell: ShellTuning,
}

impl Default for DuelTuning {
    fn default() -> Self {
        Self {
            playfield_min: Vec2::new(-50.0, -1200.0),
            playfield_max: Vec2::new(2100.0, 50.0),
            player_spawn: Vec2::new(1700.0, -540.0),
            player_rotation: 90.0,
            target_spawn: Vec2::new(400.0, -540.0),
            target_rotation: -90.0,
            shell: ShellTuning {
                size: Vec2::new(2.92, 8.79),
                speed: 1200.0,
            },
        }
    }
}

/// Pan/zoom camera limits
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraTuning {
    /// Base view rectangle at zoom 1.0
    pub view_size: Vec2,
    pub pan_speed: f32,
    pub min_zoom: f32,
    pub max_zoom: f32,
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self {
            view_size: Vec2::new(1600.0, 900.0),
            pan_speed: 200.0,
            min_zoom: 0.1,
            max_zoom: 2.0,
        }
    }
}

/// Two-tank RTS skirmish
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SkirmishTuning {
    /// Map rectangle centred on the origin; shells leaving it are discarded
    pub map_size: Vec2,
    pub spawns: [(Vec2, f32); 2],
    /// Tanks only look at and fire on each other inside this distance
    pub engagement_range: f32,
    pub shell: ShellTuning,
    pub camera: CameraTuning,
}

impl Default for SkirmishTuning {
    fn default() -> Self {
        Self {
            map_size: Vec2::new(1920.0, 1408.0),
            spawns: [
                (Vec2::new(715.0, 270.0), 90.0),
                (Vec2::new(-600.0, -200.0), -90.0),
            ],
            engagement_range: 800.0,
            shell: ShellTuning::default(),
            camera: CameraTuning::default(),
        }
    }
}

/// Complete balance table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub tank: TankTuning,
    pub duel: DuelTuning,
    pub skirmish: SkirmishTuning,
}

fn positive(field: &'static str, value: f32) -> Result<(), TuningError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TuningError::Invalid {
            field,
            reason: format!("must be a positive number, got {value}"),
        })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), TuningError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(TuningError::Invalid {
            field,
            reason: format!("must be zero or more, got {value}"),
        })
    }
}

impl Tuning {
    /// Parse and validate a JSON document; missing fields keep defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load from a JSON file on disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Load from `path` if given, falling back to defaults on any error
    pub fn load_or_default(path: Option<&Path>) -> Self {
        match path.map(Self::load) {
            Some(Ok(tuning)) => tuning,
            Some(Err(e)) => {
                log::warn!("Using default tuning: {e}");
                Self::default()
            }
            None => {
                log::info!("Using default tuning");
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values that would break the motion invariants
    pub fn validate(&self) -> Result<(), TuningError> {
        let t = &self.tank;
        positive("tank.hull_size.x", t.hull_size.x)?;
        positive("tank.hull_size.y", t.hull_size.y)?;
        positive("tank.turret_size.x", t.turret_size.x)?;
        positive("tank.turret_size.y", t.turret_size.y)?;
        if !(0.0..=1.0).contains(&t.turret_mount) {
            return Err(TuningError::Invalid {
                field: "tank.turret_mount",
                reason: format!("must be within 0..=1, got {}", t.turret_mount),
            });
        }
        positive("tank.hull_max_turn", t.hull_max_turn)?;
        positive("tank.turret_max_turn", t.turret_max_turn)?;
        positive("tank.max_speed", t.max_speed)?;
        non_negative("tank.hull_turn_accel", t.hull_turn_accel)?;
        non_negative("tank.hull_turn_friction", t.hull_turn_friction)?;
        non_negative("tank.turret_turn_accel", t.turret_turn_accel)?;
        non_negative("tank.turret_turn_friction", t.turret_turn_friction)?;
        non_negative("tank.thrust", t.thrust)?;
        non_negative("tank.drive_friction", t.drive_friction)?;
        positive("tank.order_speed", t.order_speed)?;
        positive("tank.order_hull_turn", t.order_hull_turn)?;
        positive("tank.order_turret_turn", t.order_turret_turn)?;
        positive("tank.arrival_tolerance", t.arrival_tolerance)?;

        let d = &self.duel;
        if d.playfield_min.x >= d.playfield_max.x || d.playfield_min.y >= d.playfield_max.y {
            return Err(TuningError::Invalid {
                field: "duel.playfield",
                reason: "min corner must be below and left of max corner".into(),
            });
        }
        positive("duel.shell.speed", d.shell.speed)?;

        let s = &self.skirmish;
        positive("skirmish.map_size.x", s.map_size.x)?;
        positive("skirmish.map_size.y", s.map_size.y)?;
        positive("skirmish.engagement_range", s.engagement_range)?;
        positive("skirmish.shell.speed", s.shell.speed)?;
        positive("skirmish.camera.pan_speed", s.camera.pan_speed)?;
        positive("skirmish.camera.min_zoom", s.camera.min_zoom)?;
        if s.camera.min_zoom > s.camera.max_zoom {
            return Err(TuningError::Invalid {
                field: "skirmish.camera.max_zoom",
                reason: format!(
                    "must not be below min_zoom ({} < {})",
                    s.camera.max_zoom, s.camera.min_zoom
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "skirmish": { "engagement_range": 500.0 } }"#).unwrap();
        assert_eq!(tuning.skirmish.engagement_range, 500.0);
        assert_eq!(tuning.skirmish.camera.max_zoom, 2.0);
        assert_eq!(tuning.tank.hull_max_turn, 80.0);
    }

    #[test]
    fn test_json_round_trip() {
        let json = Tuning::default().to_json().unwrap();
        let back = Tuning::from_json(&json).unwrap();
        assert_eq!(back.duel.shell.speed, 1200.0);
        assert_eq!(back.skirmish.spawns[1].0, Vec2::new(-600.0, -200.0));
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = Tuning::from_json(r#"{ "tank": { "max_speed": 0.0 } }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { field: "tank.max_speed", .. }));

        let err = Tuning::from_json(
            r#"{ "skirmish": { "camera": { "min_zoom": 3.0, "max_zoom": 2.0 } } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, TuningError::Invalid { .. }));
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(Tuning::from_json("{ nope"), Err(TuningError::Parse(_))));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let tuning = Tuning::load_or_default(Some(Path::new("/definitely/not/here.json")));
        assert_eq!(tuning.tank.order_speed, 25.0);
    }
}
