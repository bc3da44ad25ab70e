//! Cubic Bezier evaluation.
//!
//! Control points are passed as `[P0, P1, P2, P3]`. The parameter `t` is not
//! clamped; callers stay in \[0, 1\] by convention.

use glam::Vec2;

/// Point on the curve at `t` (cubic Bernstein blend).
#[inline]
pub fn position(t: f32, points: &[Vec2; 4]) -> Vec2 {
    let [p0, p1, p2, p3] = *points;
    let mt = 1.0 - t;
    let b0 = mt * mt * mt;
    let b1 = 3.0 * mt * mt * t;
    let b2 = 3.0 * mt * t * t;
    let b3 = t * t * t;
    p0 * b0 + p1 * b1 + p2 * b2 + p3 * b3
}

/// First derivative of the curve at `t`. Not normalized, may be zero.
#[inline]
pub fn tangent(t: f32, points: &[Vec2; 4]) -> Vec2 {
    let [p0, p1, p2, p3] = *points;
    let mt = 1.0 - t;
    (p1 - p0) * (3.0 * mt * mt) + (p2 - p1) * (6.0 * mt * t) + (p3 - p2) * (3.0 * t * t)
}

/// Unit tangent at `t`, or `None` where the derivative vanishes.
#[inline]
pub fn tangent_direction(t: f32, points: &[Vec2; 4]) -> Option<Vec2> {
    let d = tangent(t, points);
    let len = d.length();
    (len > 0.0).then(|| d / len)
}

/// `segments + 1` curve points at `t = i / segments`, both ends included.
pub fn sample_polyline(points: &[Vec2; 4], segments: usize) -> Vec<Vec2> {
    let segments = segments.max(1);
    (0..=segments)
        .map(|i| position(i as f32 / segments as f32, points))
        .collect()
}
