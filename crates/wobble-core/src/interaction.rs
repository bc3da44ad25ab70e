//! Pointer handling: picking, dragging and the release handoff into the spring.

use crate::constants::{HIT_RADIUS, KICK_MAX, MOMENTUM_FACTOR};
use crate::curve::{CurveModel, Handle};
use glam::Vec2;
use instant::Instant;
use rand::Rng;

/// Source of the random impulse added on release.
pub trait ImpulseSource {
    /// Independent uniform sample in `[-max, max]` per axis.
    fn impulse(&mut self, max: f32) -> Vec2;
}

impl<R: Rng> ImpulseSource for R {
    fn impulse(&mut self, max: f32) -> Vec2 {
        Vec2::new(self.gen_range(-max..=max), self.gen_range(-max..=max))
    }
}

#[inline]
pub fn hit_test(pointer: Vec2, point: Vec2, radius: f32) -> bool {
    pointer.distance(point) <= radius
}

/// The point currently held by the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub handle: Handle,
    /// `pointer - point` at grab time.
    pub offset: Vec2,
}

/// Last pointer sample and the delta from the one before it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerMotion {
    pub previous: Vec2,
    pub velocity: Vec2,
}

/// What the pointer is over, for cursor and highlight feedback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hover {
    None,
    Over(Handle),
    Grabbing(Handle),
}

#[derive(Clone, Debug)]
pub struct InteractionController {
    drag: Option<DragSession>,
    motion: PointerMotion,
    hover: Hover,
    pub hit_radius: f32,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self {
            drag: None,
            motion: PointerMotion::default(),
            hover: Hover::None,
            hit_radius: HIT_RADIUS,
        }
    }
}

impl InteractionController {
    pub fn drag(&self) -> Option<DragSession> {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn motion(&self) -> PointerMotion {
        self.motion
    }

    pub fn hover(&self) -> Hover {
        self.hover
    }

    fn pick(&self, curve: &CurveModel, pointer: Vec2) -> Option<Handle> {
        Handle::ALL
            .into_iter()
            .find(|&h| hit_test(pointer, curve.handle(h).position, self.hit_radius))
    }

    pub fn on_press_start(&mut self, curve: &mut CurveModel, pointer: Vec2) {
        self.motion = PointerMotion {
            previous: pointer,
            velocity: Vec2::ZERO,
        };
        if self.drag.is_some() {
            return;
        }
        let Some(handle) = self.pick(curve, pointer) else {
            return;
        };
        let point = curve.handle_mut(handle);
        point.hold();
        self.drag = Some(DragSession {
            handle,
            offset: pointer - point.position,
        });
        self.hover = Hover::Grabbing(handle);
        log::info!("[drag] begin on {:?}", handle);
    }

    pub fn on_pointer_move(&mut self, curve: &mut CurveModel, pointer: Vec2) -> Hover {
        self.motion.velocity = pointer - self.motion.previous;
        self.motion.previous = pointer;

        self.hover = match self.drag {
            Some(session) => {
                let point = curve.handle_mut(session.handle);
                point.position = pointer - session.offset;
                point.hold();
                Hover::Grabbing(session.handle)
            }
            None => self.pick(curve, pointer).map_or(Hover::None, Hover::Over),
        };
        self.hover
    }

    /// End the drag, if any, and hand the point over to the spring.
    pub fn on_release_or_leave(
        &mut self,
        curve: &mut CurveModel,
        now: Instant,
        impulses: &mut (impl ImpulseSource + ?Sized),
    ) {
        let Some(session) = self.drag.take() else {
            return;
        };
        let kick = impulses.impulse(KICK_MAX);
        let velocity = self.motion.velocity * MOMENTUM_FACTOR + kick;
        curve.handle_mut(session.handle).release(now, velocity);
        self.hover = self
            .pick(curve, self.motion.previous)
            .map_or(Hover::None, Hover::Over);
        log::info!(
            "[drag] release {:?} vel=({:.1},{:.1})",
            session.handle,
            velocity.x,
            velocity.y
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spring::WobbleState;

    struct NoKick;

    impl ImpulseSource for NoKick {
        fn impulse(&mut self, _max: f32) -> Vec2 {
            Vec2::ZERO
        }
    }

    fn curve() -> CurveModel {
        let mut c = CurveModel::default();
        c.layout(800.0, 600.0);
        c
    }

    #[test]
    fn hit_test_is_inclusive_at_radius() {
        assert!(hit_test(Vec2::new(20.0, 0.0), Vec2::ZERO, 20.0));
        assert!(!hit_test(Vec2::new(20.5, 0.0), Vec2::ZERO, 20.0));
    }

    #[test]
    fn press_prefers_p1_on_overlap() {
        let mut c = curve();
        c.p2.position = c.p1.position + Vec2::new(5.0, 0.0);
        let mut ctl = InteractionController::default();
        let grab = c.p1.position + Vec2::new(3.0, 0.0);
        ctl.on_press_start(&mut c, grab);
        assert_eq!(ctl.drag().map(|d| d.handle), Some(Handle::P1));
    }

    #[test]
    fn press_on_empty_space_starts_nothing() {
        let mut c = curve();
        let mut ctl = InteractionController::default();
        ctl.on_press_start(&mut c, Vec2::new(5.0, 5.0));
        assert!(!ctl.is_dragging());
    }

    #[test]
    fn drag_keeps_grab_offset() {
        let mut c = curve();
        let mut ctl = InteractionController::default();
        let grab = c.p2.position + Vec2::new(4.0, -3.0);
        ctl.on_press_start(&mut c, grab);
        let hover = ctl.on_pointer_move(&mut c, Vec2::new(100.0, 100.0));
        assert_eq!(hover, Hover::Grabbing(Handle::P2));
        assert_eq!(c.p2.position, Vec2::new(96.0, 103.0));
        assert_eq!(c.p2.velocity, Vec2::ZERO);
    }

    #[test]
    fn second_press_during_drag_is_ignored() {
        let mut c = curve();
        let mut ctl = InteractionController::default();
        let (p1, p2) = (c.p1.position, c.p2.position);
        ctl.on_press_start(&mut c, p1);
        ctl.on_press_start(&mut c, p2);
        assert_eq!(ctl.drag().map(|d| d.handle), Some(Handle::P1));
    }

    #[test]
    fn grabbing_a_wobbling_point_stops_its_wobble() {
        let mut c = curve();
        c.p1.release(Instant::now(), Vec2::new(9.0, 9.0));
        let mut ctl = InteractionController::default();
        let p1 = c.p1.position;
        ctl.on_press_start(&mut c, p1);
        assert_eq!(c.p1.state(), WobbleState::Idle);
        assert_eq!(c.p1.velocity, Vec2::ZERO);
    }

    #[test]
    fn release_without_drag_is_noop() {
        let mut c = curve();
        let before = c.clone();
        let mut ctl = InteractionController::default();
        ctl.on_release_or_leave(&mut c, Instant::now(), &mut NoKick);
        assert_eq!(c.p1, before.p1);
        assert_eq!(c.p2, before.p2);
    }

    #[test]
    fn release_rechecks_hover_at_last_sample() {
        let mut c = curve();
        let mut ctl = InteractionController::default();
        let p2 = c.p2.position;
        ctl.on_press_start(&mut c, p2);
        ctl.on_pointer_move(&mut c, Vec2::new(700.0, 100.0));
        ctl.on_release_or_leave(&mut c, Instant::now(), &mut NoKick);
        assert_eq!(ctl.hover(), Hover::Over(Handle::P2));

        // P2 dropped on top of P1: the re-pick favours P1.
        ctl.on_press_start(&mut c, Vec2::new(700.0, 100.0));
        let p1 = c.p1.position;
        ctl.on_pointer_move(&mut c, p1);
        ctl.on_release_or_leave(&mut c, Instant::now(), &mut NoKick);
        assert_eq!(ctl.hover(), Hover::Over(Handle::P1));
    }

    #[test]
    fn hover_reports_handle_under_pointer() {
        let mut c = curve();
        let mut ctl = InteractionController::default();
        let p2 = c.p2.position;
        assert_eq!(ctl.on_pointer_move(&mut c, p2), Hover::Over(Handle::P2));
        assert_eq!(ctl.on_pointer_move(&mut c, Vec2::ZERO), Hover::None);
    }
}
