use crate::constants::{ANCHOR_END_X, ANCHOR_START_X, ANCHOR_Y, HANDLE_SPREAD};
use crate::spring::{DynamicPoint, SpringParams};
use glam::Vec2;
use instant::Instant;

/// Which of the two movable control points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Handle {
    P1,
    P2,
}

impl Handle {
    /// Pick order: P1 wins when both are under the pointer.
    pub const ALL: [Handle; 2] = [Handle::P1, Handle::P2];
}

/// The four control points: fixed anchors P0/P3, movable P1/P2.
#[derive(Clone, Debug, Default)]
pub struct CurveModel {
    pub p0: Vec2,
    pub p1: DynamicPoint,
    pub p2: DynamicPoint,
    pub p3: Vec2,
}

impl CurveModel {
    pub fn points(&self) -> [Vec2; 4] {
        [self.p0, self.p1.position, self.p2.position, self.p3]
    }

    pub fn handle(&self, handle: Handle) -> &DynamicPoint {
        match handle {
            Handle::P1 => &self.p1,
            Handle::P2 => &self.p2,
        }
    }

    pub fn handle_mut(&mut self, handle: Handle) -> &mut DynamicPoint {
        match handle {
            Handle::P1 => &mut self.p1,
            Handle::P2 => &mut self.p2,
        }
    }

    /// Fit the curve to a canvas of the given size.
    ///
    /// Anchors always follow the canvas. The movable points are only placed on
    /// first layout, while both still sit at the origin.
    pub fn layout(&mut self, width: f32, height: f32) {
        self.p0 = Vec2::new(width * ANCHOR_START_X, height * ANCHOR_Y);
        self.p3 = Vec2::new(width * ANCHOR_END_X, height * ANCHOR_Y);

        if self.p1.position == Vec2::ZERO && self.p2.position == Vec2::ZERO {
            let mid = Vec2::new(width * 0.5, height * 0.5);
            let offset = width.min(height) * HANDLE_SPREAD;
            self.p1 = DynamicPoint::at(mid - Vec2::splat(offset));
            self.p2 = DynamicPoint::at(mid + Vec2::splat(offset));
            log::debug!("[layout] initial handles around ({:.0},{:.0})", mid.x, mid.y);
        }
    }

    /// Advance both movable points by one frame.
    pub fn step_springs(&mut self, now: Instant, params: &SpringParams) {
        self.p1.step(now, params);
        self.p2.step(now, params);
    }
}
