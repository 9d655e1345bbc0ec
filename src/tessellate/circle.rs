//! Stroked/filled circle tessellation.
//!
//! Builds an annulus triangle strip for the stroke and a triangle fan for
//! the fill. Points advance around the circle by incremental rotation: the
//! tangent vector (the 90-degree rotation of the current position) scaled by
//! `tan(theta)` is added each step, then the result is scaled by
//! `cos(theta)` to correct the accumulated radius drift. This costs two
//! multiplications and an add per axis instead of a fresh sin/cos per
//! vertex. Floating-point drift still accumulates over the segment count;
//! at the counts produced by [`segment_count`] it stays visually
//! imperceptible, so this is a performance trade, not a precision guarantee.

use std::f32::consts::PI;

use crate::color::Rgba;
use crate::geometry::{Point, Stroke};
use crate::mesh::{Mesh, Vertex};

/// Minimum number of segments regardless of radius.
///
/// Keeps tiny circles visually round.
pub const MIN_SEGMENTS: usize = 8;

/// Maximum number of segments regardless of radius.
///
/// The annulus strip holds `2 * (segments + 1)` vertices addressed by `u16`
/// indices, so the segment count must stay below half the index range or
/// the indices wrap. The cap kicks in around radius 10_430, where one
/// segment spans well under a thousandth of a degree of arc.
pub const MAX_SEGMENTS: usize = (u16::MAX as usize - 2) / 2;

/// Number of segments used to tessellate a circle of the given radius.
///
/// One segment per 2 units of circumference, floored, clamped to
/// [`MIN_SEGMENTS`]..=[`MAX_SEGMENTS`]. Monotone non-decreasing in the
/// radius.
#[must_use]
pub fn segment_count(radius: f32) -> usize {
    let circumference = 2.0 * PI * radius.max(0.0);
    ((circumference / 2.0).floor() as usize).clamp(MIN_SEGMENTS, MAX_SEGMENTS)
}

/// Tessellation output: stroke ring and fill fan, each optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CircleMesh {
    /// Annulus strip for the stroke, present when a visible stroke was given.
    pub ring: Option<Mesh>,
    /// Center fan for the fill, present when a fill color was given.
    pub fill: Option<Mesh>,
}

impl CircleMesh {
    /// Whether the tessellation produced any triangles at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ring.is_none() && self.fill.is_none()
    }
}

/// Tessellate a circle into stroke and/or fill meshes.
///
/// - `radius <= 0` produces no mesh regardless of stroke/fill settings.
/// - A stroke of width 0 (or `None`) skips the ring; a fill is then built
///   against the bare radius.
/// - When a visible stroke is present, the fill fan sits on the ring's inner
///   radius so the two meshes meet without a seam.
///
/// Ring and fill each carry their own uniform solid vertex color.
#[must_use]
pub fn tessellate_circle(
    center: Point,
    radius: f32,
    stroke: Option<Stroke>,
    fill: Option<Rgba>,
) -> CircleMesh {
    if radius <= 0.0 {
        return CircleMesh::default();
    }

    let segments = segment_count(radius);
    let theta = 2.0 * PI / segments as f32;
    let tan_factor = theta.tan();
    let rad_factor = theta.cos();

    let stroke = stroke.filter(Stroke::is_visible);

    let ring = stroke.map(|s| annulus(center, radius, s, segments, tan_factor, rad_factor));

    let fill_radius = match stroke {
        Some(s) => radius - s.width / 2.0,
        None => radius,
    };
    let fill = fill.map(|color| fan(center, fill_radius, color, segments, tan_factor, rad_factor));

    CircleMesh { ring, fill }
}

/// A point advancing around a circle by incremental rotation.
#[derive(Debug, Clone, Copy)]
struct RingPoint {
    x: f32,
    y: f32,
}

impl RingPoint {
    /// Start at angle 0: (radius, 0) relative to the center.
    const fn at_radius(radius: f32) -> Self {
        Self { x: radius, y: 0.0 }
    }

    /// Advance one segment: add the scaled tangent, correct radius drift.
    fn rotate(&mut self, tan_factor: f32, rad_factor: f32) {
        let tx = -self.y;
        let ty = self.x;
        self.x = (self.x + tx * tan_factor) * rad_factor;
        self.y = (self.y + ty * tan_factor) * rad_factor;
    }
}

/// Build the annulus strip between radii `r - w/2` and `r + w/2`.
///
/// Two vertices per step (inner, outer) and one index quad per segment:
/// 2·(segments + 1) vertices, 2·segments triangles, closing back on the
/// starting pair.
fn annulus(
    center: Point,
    radius: f32,
    stroke: Stroke,
    segments: usize,
    tan_factor: f32,
    rad_factor: f32,
) -> Mesh {
    let half = stroke.width / 2.0;
    let mut inner = RingPoint::at_radius(radius - half);
    let mut outer = RingPoint::at_radius(radius + half);

    let mut mesh = Mesh::with_capacity(2 * (segments + 1), 6 * segments);
    mesh.push_vertex(Vertex::solid(center.x + inner.x, center.y + inner.y, stroke.color));
    mesh.push_vertex(Vertex::solid(center.x + outer.x, center.y + outer.y, stroke.color));

    for _ in 0..segments {
        inner.rotate(tan_factor, rad_factor);
        outer.rotate(tan_factor, rad_factor);

        mesh.push_vertex(Vertex::solid(center.x + inner.x, center.y + inner.y, stroke.color));
        mesh.push_vertex(Vertex::solid(center.x + outer.x, center.y + outer.y, stroke.color));

        // Quad connecting the previous vertex pair to the new pair.
        let base = mesh.vertices.len() as u16 - 4;
        mesh.push_triangle(base, base + 1, base + 2);
        mesh.push_triangle(base + 1, base + 2, base + 3);
    }

    mesh
}

/// Build the closed center fan: 1 center + `segments` perimeter vertices,
/// exactly `segments` triangles, the last wrapping back to the first
/// perimeter vertex.
fn fan(
    center: Point,
    radius: f32,
    color: Rgba,
    segments: usize,
    tan_factor: f32,
    rad_factor: f32,
) -> Mesh {
    let mut mesh = Mesh::with_capacity(segments + 1, 3 * segments);
    mesh.push_vertex(Vertex::solid(center.x, center.y, color));

    let mut point = RingPoint::at_radius(radius);
    for _ in 0..segments {
        mesh.push_vertex(Vertex::solid(center.x + point.x, center.y + point.y, color));
        point.rotate(tan_factor, rad_factor);
    }

    for i in 1..segments as u16 {
        mesh.push_triangle(0, i, i + 1);
    }
    mesh.push_triangle(0, segments as u16, 1);

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_count_floor() {
        // Tiny radii stay at the minimum.
        assert_eq!(segment_count(0.0), MIN_SEGMENTS);
        assert_eq!(segment_count(0.5), MIN_SEGMENTS);
        assert_eq!(segment_count(2.0), MIN_SEGMENTS);
    }

    #[test]
    fn test_segment_count_scales_with_circumference() {
        // 2*pi*10 / 2 = 31.4 -> 31
        assert_eq!(segment_count(10.0), 31);
        // 2*pi*100 / 2 = 314.1 -> 314
        assert_eq!(segment_count(100.0), 314);
    }

    #[test]
    fn test_segment_count_is_capped() {
        // 2*pi*50_000 / 2 = 157_079 raw segments; far past the index range.
        assert_eq!(segment_count(50_000.0), MAX_SEGMENTS);
        assert_eq!(segment_count(f32::MAX), MAX_SEGMENTS);
        // The cap leaves headroom for the ring's 2*(n+1) vertices.
        assert!(2 * (MAX_SEGMENTS + 1) <= usize::from(u16::MAX));
    }

    #[test]
    fn test_large_radius_meshes_stay_valid() {
        // Radius large enough that an uncapped segment count would overflow
        // u16 vertex indices.
        let stroke = Stroke::new(Rgba::BLACK, 2.0);
        let result = tessellate_circle(Point::ORIGIN, 11_000.0, Some(stroke), Some(Rgba::RED));

        let ring = result.ring.unwrap();
        assert_eq!(ring.vertices.len(), 2 * (MAX_SEGMENTS + 1));
        assert_eq!(ring.triangle_count(), 2 * MAX_SEGMENTS);
        ring.validate().unwrap();

        let fill = result.fill.unwrap();
        assert_eq!(fill.vertices.len(), MAX_SEGMENTS + 1);
        assert_eq!(fill.triangle_count(), MAX_SEGMENTS);
        fill.validate().unwrap();
    }

    #[test]
    fn test_segment_count_monotonic() {
        let mut prev = 0;
        for r in 0..200 {
            let n = segment_count(r as f32 * 0.5);
            assert!(n >= prev, "segment count decreased at r={r}");
            assert!(n >= MIN_SEGMENTS);
            prev = n;
        }
    }

    #[test]
    fn test_zero_radius_emits_nothing() {
        let stroke = Some(Stroke::new(Rgba::BLACK, 2.0));
        let result = tessellate_circle(Point::new(5.0, 5.0), 0.0, stroke, Some(Rgba::RED));
        assert!(result.is_empty());
    }

    #[test]
    fn test_stroked_circle_ring_shape() {
        // center (50,50), r=10, width 2, no fill: 31 segments.
        let stroke = Stroke::new(Rgba::BLACK, 2.0);
        let result = tessellate_circle(Point::new(50.0, 50.0), 10.0, Some(stroke), None);

        assert!(result.fill.is_none());
        let ring = result.ring.unwrap();
        // 31 index quads = 62 triangles, 2*(31+1) vertices.
        assert_eq!(ring.triangle_count(), 62);
        assert_eq!(ring.vertices.len(), 64);
        assert!(ring.validate().is_ok());
    }

    #[test]
    fn test_ring_vertices_lie_on_annulus() {
        let stroke = Stroke::new(Rgba::BLACK, 4.0);
        let center = Point::new(50.0, 50.0);
        let radius = 20.0;
        let ring = tessellate_circle(center, radius, Some(stroke), None)
            .ring
            .unwrap();

        for v in &ring.vertices {
            let d = center.distance(Point::new(v.x, v.y));
            // Every vertex sits near the inner (18) or outer (22) radius;
            // incremental rotation drift stays well under half a pixel.
            let inner_err = (d - 18.0).abs();
            let outer_err = (d - 22.0).abs();
            assert!(inner_err < 0.5 || outer_err < 0.5, "vertex at distance {d}");
        }
    }

    #[test]
    fn test_fill_without_stroke() {
        let result = tessellate_circle(Point::new(0.0, 0.0), 10.0, None, Some(Rgba::RED));

        assert!(result.ring.is_none());
        let fill = result.fill.unwrap();
        // Exactly segment_count triangles, center + perimeter vertices.
        assert_eq!(fill.triangle_count(), 31);
        assert_eq!(fill.vertices.len(), 32);
        assert!(fill.validate().is_ok());
    }

    #[test]
    fn test_zero_width_stroke_skips_ring() {
        let stroke = Stroke::new(Rgba::BLACK, 0.0);
        let result = tessellate_circle(Point::new(0.0, 0.0), 10.0, Some(stroke), Some(Rgba::RED));

        assert!(result.ring.is_none());
        let fill = result.fill.unwrap();
        assert_eq!(fill.triangle_count(), 31);

        // With no ring the fan sits on the bare radius.
        let rim = &fill.vertices[1];
        let d = Point::ORIGIN.distance(Point::new(rim.x, rim.y));
        assert!((d - 10.0).abs() < 1e-3);
    }

    #[test]
    fn test_fill_meets_ring_at_inner_radius() {
        let stroke = Stroke::new(Rgba::BLACK, 4.0);
        let result = tessellate_circle(Point::ORIGIN, 10.0, Some(stroke), Some(Rgba::RED));

        let fill = result.fill.unwrap();
        let rim = &fill.vertices[1];
        let d = Point::ORIGIN.distance(Point::new(rim.x, rim.y));
        assert!((d - 8.0).abs() < 1e-3);
    }

    #[test]
    fn test_fan_closes_back_to_first_vertex() {
        let fill = tessellate_circle(Point::ORIGIN, 3.0, None, Some(Rgba::RED))
            .fill
            .unwrap();
        let n = fill.vertices.len() as u16 - 1;

        // Last triangle wraps from the final perimeter vertex to the first.
        let last = &fill.indices[fill.indices.len() - 3..];
        assert_eq!(last, &[0, n, 1]);
    }

    #[test]
    fn test_ring_and_fill_carry_their_own_colors() {
        let stroke = Stroke::new(Rgba::BLACK, 2.0);
        let result = tessellate_circle(Point::ORIGIN, 10.0, Some(stroke), Some(Rgba::RED));

        let ring = result.ring.unwrap();
        let fill = result.fill.unwrap();
        assert!(ring.vertices.iter().all(|v| v.color == [0.0, 0.0, 0.0, 1.0]));
        assert!(fill.vertices.iter().all(|v| v.color == [1.0, 0.0, 0.0, 1.0]));
    }

    #[test]
    fn test_negative_radius_emits_nothing() {
        let result = tessellate_circle(Point::ORIGIN, -1.0, None, Some(Rgba::RED));
        assert!(result.is_empty());
    }
}
