//! Spring-damped wobble for the draggable control points.
//!
//! A released point oscillates around the spot it was dropped on for a fixed
//! window, then snaps onto it. Integration is one semi-implicit Euler step per
//! rendered frame with no time scaling: the look of the wobble is tied to the
//! frame rate.

use crate::constants::{SPRING_DAMPING, SPRING_STIFFNESS, WOBBLE_DURATION};
use glam::Vec2;
use instant::Instant;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct SpringParams {
    pub stiffness: f32,
    pub damping: f32,
    pub duration: Duration,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            stiffness: SPRING_STIFFNESS,
            damping: SPRING_DAMPING,
            duration: WOBBLE_DURATION,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WobbleState {
    Idle,
    Wobbling,
}

/// A movable control point together with its spring state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DynamicPoint {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Resting position of the wobble; the position at the last release.
    pub target: Vec2,
    /// `None` unless the point is inside its post-release window.
    pub released_at: Option<Instant>,
}

impl DynamicPoint {
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            target: position,
            ..Default::default()
        }
    }

    pub fn state(&self) -> WobbleState {
        match self.released_at {
            Some(_) => WobbleState::Wobbling,
            None => WobbleState::Idle,
        }
    }

    /// Start a wobble around the current position.
    pub fn release(&mut self, now: Instant, velocity: Vec2) {
        self.target = self.position;
        self.velocity = velocity;
        self.released_at = Some(now);
    }

    /// Put the point under direct control: no velocity, no running wobble.
    pub fn hold(&mut self) {
        self.velocity = Vec2::ZERO;
        self.released_at = None;
    }

    /// Advance one frame. Returns the state after the step.
    pub fn step(&mut self, now: Instant, params: &SpringParams) -> WobbleState {
        let Some(released_at) = self.released_at else {
            return WobbleState::Idle;
        };
        let elapsed = if now > released_at {
            now.duration_since(released_at)
        } else {
            Duration::ZERO
        };
        if elapsed >= params.duration {
            self.settle();
            return WobbleState::Idle;
        }
        let accel =
            -params.stiffness * (self.position - self.target) - params.damping * self.velocity;
        self.velocity += accel;
        self.position += self.velocity;
        WobbleState::Wobbling
    }

    fn settle(&mut self) {
        self.position = self.target;
        self.velocity = Vec2::ZERO;
        self.released_at = None;
        log::debug!("[wobble] settled at ({:.1},{:.1})", self.position.x, self.position.y);
    }
}
