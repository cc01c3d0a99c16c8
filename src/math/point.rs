//! Point algebra
//!
//! glam already covers translate (`+`), negate (`-`), scale (`*`), dot,
//! length, lerp, `midpoint`, `normalize_or` and projection. The extension
//! trait fills in the few operations the simulation needs that glam
//! spells differently or not at all.

use glam::Vec2;

/// A point or direction in world space
pub type Point = Vec2;

/// Extra 2-D operations on [`Point`]
pub trait PointExt: Sized {
    /// Z component of the 2-D cross product (positive when `other` is
    /// counter-clockwise from `self`)
    fn cross(self, other: Self) -> f32;

    /// Rotate counter-clockwise by `angle` radians around `pivot`
    fn rotate_about(self, angle: f32, pivot: Self) -> Self;

    /// Direction angle in radians, measured from +x
    fn heading_angle(self) -> f32;

    /// Signed angle in radians that rotates `self` onto `other`, in
    /// (-π, π]. Zero when either vector is degenerate.
    fn signed_angle_to(self, other: Self) -> f32;
}

impl PointExt for Vec2 {
    #[inline]
    fn cross(self, other: Self) -> f32 {
        self.x * other.y - self.y * other.x
    }

    #[inline]
    fn rotate_about(self, angle: f32, pivot: Self) -> Self {
        let (sin, cos) = angle.sin_cos();
        let rel = self - pivot;
        pivot + Vec2::new(rel.x * cos - rel.y * sin, rel.x * sin + rel.y * cos)
    }

    #[inline]
    fn heading_angle(self) -> f32 {
        self.y.atan2(self.x)
    }

    fn signed_angle_to(self, other: Self) -> f32 {
        let a = self.normalize_or(Vec2::ZERO);
        let b = other.normalize_or(Vec2::ZERO);
        if a == Vec2::ZERO || b == Vec2::ZERO {
            return 0.0;
        }
        a.cross(b).atan2(a.dot(b))
    }
}
