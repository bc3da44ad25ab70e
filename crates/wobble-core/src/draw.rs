//! Draw commands produced once per frame and replayed by a front-end onto a
//! 2D drawing context.

use glam::{Vec2, Vec3, Vec4};

/// Opaque colour from an `[r, g, b]` palette entry.
#[inline]
pub fn rgb(c: [f32; 3]) -> Vec4 {
    Vec4::from((Vec3::from(c), 1.0))
}

/// Scale the colour channels, keeping alpha.
#[inline]
pub fn brighten(c: Vec4, factor: f32) -> Vec4 {
    Vec4::new(
        (c.x * factor).min(1.0),
        (c.y * factor).min(1.0),
        (c.z * factor).min(1.0),
        c.w,
    )
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Vec4,
    pub width: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole surface.
    Clear { size: Vec2, color: Vec4 },
    /// Open path through `points`, stroked.
    Polyline { points: Vec<Vec2>, stroke: Stroke },
    Segment { from: Vec2, to: Vec2, stroke: Stroke },
    /// Filled circle with an optional outline.
    Disc {
        center: Vec2,
        radius: f32,
        fill: Vec4,
        outline: Option<Stroke>,
    },
}
