use std::time::Duration;

// Shared tuning constants for the curve, the wobble and the renderer.

// Spring wobble
pub const SPRING_STIFFNESS: f32 = 0.6;
pub const SPRING_DAMPING: f32 = 0.15;
pub const WOBBLE_DURATION: Duration = Duration::from_millis(1000);

// Interaction
pub const HIT_RADIUS: f32 = 20.0; // pointer pick radius in canvas pixels
pub const MOMENTUM_FACTOR: f32 = 5.0; // release velocity = pointer delta * factor
pub const KICK_MAX: f32 = 7.5; // random impulse bound per axis

// Layout, as fractions of the canvas
pub const ANCHOR_START_X: f32 = 0.2;
pub const ANCHOR_END_X: f32 = 0.8;
pub const ANCHOR_Y: f32 = 0.5;
pub const HANDLE_SPREAD: f32 = 0.1; // of min(width, height)

// Sampling
pub const CURVE_SEGMENTS: usize = 100; // 101 polyline points
pub const TANGENT_SEGMENTS: usize = 20; // 21 tangent markers
pub const TANGENT_LENGTH: f32 = 30.0;

// Stroke widths and marker sizes
pub const CURVE_LINE_WIDTH: f32 = 3.0;
pub const TANGENT_LINE_WIDTH: f32 = 1.0;
pub const GUIDE_LINE_WIDTH: f32 = 1.0;
pub const POINT_RADIUS: f32 = 8.0;
pub const POINT_OUTLINE_WIDTH: f32 = 2.0;

// Palette
pub const BACKGROUND_COLOR: [f32; 3] = [0.07, 0.07, 0.09];
pub const CURVE_COLOR: [f32; 3] = [0.95, 0.95, 0.95];
pub const TANGENT_COLOR: [f32; 3] = [0.3, 0.85, 0.8]; // teal
pub const GUIDE_COLOR: [f32; 3] = [0.45, 0.45, 0.5];
pub const ANCHOR_COLOR: [f32; 3] = [0.9, 0.3, 0.3]; // red-ish
pub const HANDLE_COLOR: [f32; 3] = [0.3, 0.5, 0.9]; // blue-ish
pub const OUTLINE_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
pub const TANGENT_ALPHA: f32 = 0.6;
pub const HOVER_BRIGHTEN: f32 = 1.4;
