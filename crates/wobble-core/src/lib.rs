//! Draggable cubic Bezier curve whose interior control points wobble on a
//! damped spring after being dropped.
//!
//! Everything here is platform-free: time comes in as [`instant::Instant`],
//! pointer positions as canvas pixels, and each frame goes out as a list of
//! [`DrawCommand`]s.

pub mod bezier;
pub mod constants;
pub mod curve;
pub mod draw;
pub mod frame;
pub mod interaction;
pub mod spring;

pub use constants::*;
pub use curve::{CurveModel, Handle};
pub use draw::{DrawCommand, Stroke};
pub use frame::RenderCoordinator;
pub use interaction::{
    hit_test, DragSession, Hover, ImpulseSource, InteractionController, PointerMotion,
};
pub use spring::{DynamicPoint, SpringParams, WobbleState};
