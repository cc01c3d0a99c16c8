//! Fixed-size convex polygon
//!
//! Every transform applies identically to all vertices, so the vertex
//! count and winding order never change after construction. For the
//! four-vertex shapes used by the simulation, vertices 0/1 are the
//! FRONT edge and 2/3 the BACK edge.

use glam::Vec2;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::point::PointExt;

/// An ordered ring of `N` vertices
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polygon<const N: usize = 4> {
    vertices: [Vec2; N],
}

impl<const N: usize> Polygon<N> {
    pub fn new(vertices: [Vec2; N]) -> Self {
        Self { vertices }
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec2; N] {
        &self.vertices
    }

    /// Vertex average
    pub fn center(&self) -> Vec2 {
        if N == 0 {
            return Vec2::ZERO;
        }
        self.vertices.iter().copied().sum::<Vec2>() / N as f32
    }

    pub fn edge_midpoint(&self, a: usize, b: usize) -> Vec2 {
        self.vertices[a].midpoint(self.vertices[b])
    }

    pub fn translate(&mut self, offset: Vec2) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Translate so the centre lands on `center`
    pub fn move_to(&mut self, center: Vec2) {
        let offset = center - self.center();
        self.translate(offset);
    }

    /// Rotate counter-clockwise by `angle` radians around the centre
    pub fn rotate(&mut self, angle: f32) {
        let pivot = self.center();
        self.rotate_about(angle, pivot);
    }

    /// Rotate counter-clockwise by `angle` radians around `pivot`
    pub fn rotate_about(&mut self, angle: f32, pivot: Vec2) {
        for v in &mut self.vertices {
            *v = v.rotate_about(angle, pivot);
        }
    }

    /// Scale about the centre
    pub fn scale(&mut self, factor: f32) {
        let center = self.center();
        for v in &mut self.vertices {
            *v = center + (*v - center) * factor;
        }
    }

    pub fn translated(mut self, offset: Vec2) -> Self {
        self.translate(offset);
        self
    }

    pub fn scaled(mut self, factor: f32) -> Self {
        self.scale(factor);
        self
    }

    pub fn rotated_about(mut self, angle: f32, pivot: Vec2) -> Self {
        self.rotate_about(angle, pivot);
        self
    }

    /// Axis-aligned bounds as (min, max)
    pub fn bounds(&self) -> (Vec2, Vec2) {
        self.vertices.iter().fold(
            (Vec2::splat(f32::INFINITY), Vec2::splat(f32::NEG_INFINITY)),
            |(min, max), v| (min.min(*v), max.max(*v)),
        )
    }

    /// Axis-aligned bounding-box overlap (touching edges count)
    pub fn aabb<const M: usize>(&self, other: &Polygon<M>) -> bool {
        let (a_min, a_max) = self.bounds();
        let (b_min, b_max) = other.bounds();
        a_min.x <= b_max.x && a_max.x >= b_min.x && a_min.y <= b_max.y && a_max.y >= b_min.y
    }

    /// Point-in-AABB test
    pub fn contains_point(&self, p: Vec2) -> bool {
        let (min, max) = self.bounds();
        p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y
    }
}

impl Polygon<4> {
    /// Axis-aligned rectangle centred on the origin, front edge at +y
    pub fn rectangle(width: f32, height: f32) -> Self {
        let (hw, hh) = (width * 0.5, height * 0.5);
        Self::new([
            Vec2::new(hw, hh),
            Vec2::new(-hw, hh),
            Vec2::new(-hw, -hh),
            Vec2::new(hw, -hh),
        ])
    }

    #[inline]
    pub fn front_midpoint(&self) -> Vec2 {
        self.edge_midpoint(0, 1)
    }

    #[inline]
    pub fn back_midpoint(&self) -> Vec2 {
        self.edge_midpoint(2, 3)
    }

    /// Unit vector from the centre toward the front edge
    pub fn facing(&self) -> Vec2 {
        (self.front_midpoint() - self.center()).normalize_or(Vec2::ZERO)
    }

    /// Width/height read off the unrotated frame (edge 0-1 and edge 0-3)
    pub fn extent(&self) -> Vec2 {
        let v = &self.vertices;
        Vec2::new((v[0].x - v[1].x).abs(), (v[0].y - v[3].y).abs())
    }
}

impl<const N: usize> Serialize for Polygon<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.vertices.iter())
    }
}

impl<'de, const N: usize> Deserialize<'de> for Polygon<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let points = Vec::<Vec2>::deserialize(deserializer)?;
        let len = points.len();
        let vertices: [Vec2; N] = points
            .try_into()
            .map_err(|_| D::Error::invalid_length(len, &"a polygon with the expected vertex count"))?;
        Ok(Self { vertices })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-3
    }

    #[test]
    fn test_rectangle_layout() {
        let r = Polygon::rectangle(4.0, 2.0);
        assert_eq!(r.center(), Vec2::ZERO);
        assert_eq!(r.front_midpoint(), Vec2::new(0.0, 1.0));
        assert_eq!(r.back_midpoint(), Vec2::new(0.0, -1.0));
        assert_eq!(r.facing(), Vec2::Y);
        assert_eq!(r.extent(), Vec2::new(4.0, 2.0));
    }

    #[test]
    fn test_move_and_translate() {
        let mut r = Polygon::rectangle(2.0, 2.0);
        r.move_to(Vec2::new(10.0, -5.0));
        assert!(close(r.center(), Vec2::new(10.0, -5.0)));
        r.translate(Vec2::new(-1.0, 1.0));
        assert!(close(r.center(), Vec2::new(9.0, -4.0)));
    }

    #[test]
    fn test_rotate_preserves_winding_and_center() {
        let mut r = Polygon::rectangle(4.0, 2.0);
        r.move_to(Vec2::new(3.0, 3.0));
        let before = r;
        r.rotate(FRAC_PI_2);
        assert!(close(r.center(), before.center()));
        // Front now points to -x, vertex 0 still belongs to the front edge
        assert!(close(r.facing(), Vec2::new(-1.0, 0.0)));
        assert!(close(r.vertices()[0], before.vertices()[0].rotate_about(FRAC_PI_2, before.center())));
    }

    #[test]
    fn test_rotate_about_external_pivot() {
        let mut r = Polygon::rectangle(2.0, 2.0);
        let pivot = r.back_midpoint();
        r.rotate_about(FRAC_PI_2, pivot);
        // The pivot edge midpoint stays put, the centre swings around it
        assert!(close(r.back_midpoint(), pivot));
        assert!(close(r.center(), Vec2::new(-1.0, -1.0)));
    }

    #[test]
    fn test_scale_about_center() {
        let r = Polygon::rectangle(2.0, 4.0).translated(Vec2::new(5.0, 5.0)).scaled(0.5);
        assert!(close(r.center(), Vec2::new(5.0, 5.0)));
        assert!(close(r.extent(), Vec2::new(1.0, 2.0)));
    }

    #[test]
    fn test_aabb_overlap() {
        let a = Polygon::rectangle(2.0, 2.0);
        let b = Polygon::rectangle(2.0, 2.0).translated(Vec2::new(1.5, 0.0));
        let c = Polygon::rectangle(2.0, 2.0).translated(Vec2::new(2.5, 0.0));
        let touching = Polygon::rectangle(2.0, 2.0).translated(Vec2::new(2.0, 0.0));
        assert!(a.aabb(&b));
        assert!(b.aabb(&a));
        assert!(!a.aabb(&c));
        assert!(a.aabb(&touching));
    }

    #[test]
    fn test_aabb_of_rotated_shape_is_bounding_box() {
        // A diamond's AABB is larger than the diamond itself
        let diamond = Polygon::rectangle(2.0, 2.0).rotated_about(FRAC_PI_2 / 2.0, Vec2::ZERO);
        assert!(diamond.contains_point(Vec2::new(1.3, 1.3)));
        assert!(!diamond.contains_point(Vec2::new(1.5, 0.0)));
    }

    #[test]
    fn test_serde_round_trip_and_bad_length() {
        let r = Polygon::rectangle(2.0, 2.0);
        let json = serde_json::to_string(&r).unwrap();
        let back: Polygon = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);

        let bad = serde_json::from_str::<Polygon>("[[0.0,0.0],[1.0,0.0],[1.0,1.0]]");
        assert!(bad.is_err());
    }
}
