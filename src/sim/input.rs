//! Per-tick input snapshots
//!
//! The platform layer fills these once per frame. Level fields (held
//! keys, pan direction, zoom) apply to every tick of the frame; one-shot
//! fields (fire, reset, clicks) are consumed by the first tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::vehicle::DriveControls;

/// Input that knows which of its fields are one-shot edges
pub trait FrameInput: Clone + Default {
    /// Clear one-shot fields after they have been delivered to a tick
    fn consume_edges(&mut self);
}

/// Duel controls
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DuelInput {
    pub controls: DriveControls,
    /// Fire key pressed this frame
    pub fire: bool,
    /// Reset key pressed this frame
    pub reset: bool,
}

impl FrameInput for DuelInput {
    fn consume_edges(&mut self) {
        self.fire = false;
        self.reset = false;
    }
}

/// Skirmish controls, in world coordinates
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkirmishInput {
    /// Camera pan direction; zero means no pan
    pub pan: Vec2,
    /// Zoom direction: -1, 0 or +1
    pub zoom: f32,
    /// Select whatever unit lies under this point (or clear selection)
    pub select: Option<Vec2>,
    /// Order the selected unit to move here
    pub move_to: Option<Vec2>,
    /// Order the selected unit to stop
    pub stop: bool,
}

impl FrameInput for SkirmishInput {
    fn consume_edges(&mut self) {
        self.select = None;
        self.move_to = None;
        self.stop = false;
    }
}

/// Resolve a held negative/positive key pair to -1, 0 or +1
pub fn axis_from_keys(negative_down: bool, positive_down: bool) -> f32 {
    match (negative_down, positive_down) {
        (true, false) => -1.0,
        (false, true) => 1.0,
        _ => 0.0,
    }
}

/// Zoom direction for a scroll delta: scrolling up zooms in (smaller view)
pub fn zoom_from_scroll(scroll_y: f32) -> f32 {
    if scroll_y.abs() <= f32::EPSILON {
        0.0
    } else {
        -scroll_y.signum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consume_edges_keeps_levels() {
        let mut input = SkirmishInput {
            pan: Vec2::X,
            zoom: 1.0,
            select: Some(Vec2::ONE),
            move_to: Some(Vec2::ZERO),
            stop: true,
        };
        input.consume_edges();
        assert_eq!(input.pan, Vec2::X);
        assert_eq!(input.zoom, 1.0);
        assert!(input.select.is_none());
        assert!(input.move_to.is_none());
        assert!(!input.stop);

        let mut duel = DuelInput {
            fire: true,
            reset: true,
            ..Default::default()
        };
        duel.consume_edges();
        assert!(!duel.fire && !duel.reset);
    }

    #[test]
    fn test_axis_and_scroll() {
        assert_eq!(axis_from_keys(true, true), 0.0);
        assert_eq!(axis_from_keys(true, false), -1.0);
        assert_eq!(axis_from_keys(false, true), 1.0);
        assert_eq!(zoom_from_scroll(0.0), 0.0);
        assert_eq!(zoom_from_scroll(3.5), -1.0);
        assert_eq!(zoom_from_scroll(-0.2), 1.0);
    }
}
