//! 2-D geometry used by the simulation
//!
//! Points are plain `glam::Vec2` values; polygons own a fixed number of
//! vertices in a fixed winding order.

pub mod point;
pub mod polygon;

pub use point::{Point, PointExt};
pub use polygon::Polygon;
