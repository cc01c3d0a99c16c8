//! Pan/zoom camera for the skirmish view

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::math::Polygon;
use crate::tuning::CameraTuning;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Camera {
    /// View rectangle at zoom 1.0, centred on the origin
    base: Polygon,
    offset: Vec2,
    zoom: f32,
    pan_speed: f32,
    min_zoom: f32,
    max_zoom: f32,
}

impl Camera {
    pub fn new(tuning: &CameraTuning) -> Self {
        Self {
            base: Polygon::rectangle(tuning.view_size.x, tuning.view_size.y),
            offset: Vec2::ZERO,
            zoom: 1.0,
            pan_speed: tuning.pan_speed,
            min_zoom: tuning.min_zoom,
            max_zoom: tuning.max_zoom,
        }
    }

    /// Pan along `pan` (any length; only the direction matters) and step
    /// zoom by `zoom_input` units per second.
    pub fn update(&mut self, pan: Vec2, zoom_input: f32, dt: f32) {
        // Zooming out past 1.0 runs at double rate
        let zoom_speed = if self.zoom > 1.0 { 2.0 } else { 1.0 };

        if pan.length_squared() > f32::EPSILON {
            self.offset += pan.normalize() * self.pan_speed * dt;
        }

        self.zoom = (self.zoom + zoom_input * zoom_speed * dt).clamp(self.min_zoom, self.max_zoom);
    }

    #[inline]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    #[inline]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Visible world rectangle: base view scaled by zoom, then panned
    pub fn view(&self) -> Polygon {
        self.base.scaled(self.zoom).translated(self.offset)
    }

    /// Map a window-space cursor (origin top-left, y down) of a viewport
    /// `viewport` pixels in size onto world coordinates.
    pub fn screen_to_world(&self, cursor: Vec2, viewport: Vec2) -> Vec2 {
        let view = self.view();
        let size = view.extent();
        let frac = cursor / viewport.max(Vec2::ONE);
        // Vertex 1 of a rectangle is its top-left corner
        view.vertices()[1] + Vec2::new(size.x * frac.x, -size.y * frac.y)
    }
}
