use crate::bezier;
use crate::constants::{
    ANCHOR_COLOR, BACKGROUND_COLOR, CURVE_COLOR, CURVE_LINE_WIDTH, CURVE_SEGMENTS, GUIDE_COLOR,
    GUIDE_LINE_WIDTH, HANDLE_COLOR, HIT_RADIUS, HOVER_BRIGHTEN, OUTLINE_COLOR,
    POINT_OUTLINE_WIDTH, POINT_RADIUS, TANGENT_ALPHA, TANGENT_COLOR, TANGENT_LENGTH,
    TANGENT_LINE_WIDTH, TANGENT_SEGMENTS,
};
use crate::curve::{CurveModel, Handle};
use crate::draw::{brighten, rgb, DrawCommand, Stroke};
use crate::interaction::{Hover, ImpulseSource, InteractionController};
use crate::spring::SpringParams;
use glam::Vec2;
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Owns the curve and pointer state and turns each frame into draw commands.
///
/// Hosts forward pointer events and call [`RenderCoordinator::tick`] once per
/// display refresh. Events and ticks must not interleave.
pub struct RenderCoordinator<R = StdRng> {
    pub curve: CurveModel,
    pub interaction: InteractionController,
    pub params: SpringParams,
    size: Vec2,
    impulses: R,
    commands: Vec<DrawCommand>,
}

impl RenderCoordinator<StdRng> {
    pub fn new(seed: u64) -> Self {
        Self::with_impulses(StdRng::seed_from_u64(seed))
    }
}

impl<R: ImpulseSource> RenderCoordinator<R> {
    pub fn with_impulses(impulses: R) -> Self {
        Self {
            curve: CurveModel::default(),
            interaction: InteractionController::default(),
            params: SpringParams::default(),
            size: Vec2::ZERO,
            impulses,
            commands: Vec::new(),
        }
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.size = Vec2::new(width, height);
        self.curve.layout(width, height);
        log::debug!("[layout] canvas {}x{}", width, height);
    }

    pub fn press(&mut self, pointer: Vec2) {
        self.interaction.on_press_start(&mut self.curve, pointer);
    }

    pub fn pointer_move(&mut self, pointer: Vec2) -> Hover {
        self.interaction.on_pointer_move(&mut self.curve, pointer)
    }

    /// True while `pointer` lies on the drawing surface.
    pub fn contains(&self, pointer: Vec2) -> bool {
        pointer.cmpge(Vec2::ZERO).all() && pointer.cmplt(self.size).all()
    }

    /// Pointer move as seen by a host that also tracks the pointer off the
    /// surface: leaving the surface ends a drag before the move is applied.
    pub fn track_pointer(&mut self, pointer: Vec2, now: Instant) -> Hover {
        if self.interaction.is_dragging() && !self.contains(pointer) {
            self.release(now);
        }
        self.pointer_move(pointer)
    }

    /// Pick radius follows the device pixel ratio so it stays constant in
    /// CSS pixels.
    pub fn set_pixel_ratio(&mut self, ratio: f32) {
        let ratio = if ratio.is_finite() && ratio > 0.0 { ratio } else { 1.0 };
        self.interaction.hit_radius = HIT_RADIUS * ratio;
    }

    pub fn release(&mut self, now: Instant) {
        self.interaction
            .on_release_or_leave(&mut self.curve, now, &mut self.impulses);
    }

    /// Step the springs unless a point is held.
    pub fn advance(&mut self, now: Instant) {
        if self.interaction.is_dragging() {
            return;
        }
        self.curve.step_springs(now, &self.params);
    }

    /// Physics first, then the frame's draw list.
    pub fn tick(&mut self, now: Instant) -> &[DrawCommand] {
        self.advance(now);
        self.build_frame();
        &self.commands
    }

    fn build_frame(&mut self) {
        let points = self.curve.points();
        let [p0, p1, p2, p3] = points;
        let cmds = &mut self.commands;
        cmds.clear();

        cmds.push(DrawCommand::Clear {
            size: self.size,
            color: rgb(BACKGROUND_COLOR),
        });

        let guide = Stroke {
            color: rgb(GUIDE_COLOR),
            width: GUIDE_LINE_WIDTH,
        };
        cmds.push(DrawCommand::Segment {
            from: p0,
            to: p1,
            stroke: guide,
        });
        cmds.push(DrawCommand::Segment {
            from: p2,
            to: p3,
            stroke: guide,
        });

        cmds.push(DrawCommand::Polyline {
            points: bezier::sample_polyline(&points, CURVE_SEGMENTS),
            stroke: Stroke {
                color: rgb(CURVE_COLOR),
                width: CURVE_LINE_WIDTH,
            },
        });

        let mut tangent_color = rgb(TANGENT_COLOR);
        tangent_color.w = TANGENT_ALPHA;
        let tangent_stroke = Stroke {
            color: tangent_color,
            width: TANGENT_LINE_WIDTH,
        };
        for i in 0..=TANGENT_SEGMENTS {
            let t = i as f32 / TANGENT_SEGMENTS as f32;
            let Some(dir) = bezier::tangent_direction(t, &points) else {
                continue;
            };
            let at = bezier::position(t, &points);
            cmds.push(DrawCommand::Segment {
                from: at,
                to: at + dir * TANGENT_LENGTH,
                stroke: tangent_stroke,
            });
        }

        let outline = Some(Stroke {
            color: rgb(OUTLINE_COLOR),
            width: POINT_OUTLINE_WIDTH,
        });
        for anchor in [p0, p3] {
            cmds.push(DrawCommand::Disc {
                center: anchor,
                radius: POINT_RADIUS,
                fill: rgb(ANCHOR_COLOR),
                outline,
            });
        }
        let highlighted = match self.interaction.hover() {
            Hover::Over(h) | Hover::Grabbing(h) => Some(h),
            Hover::None => None,
        };
        for (handle, center) in [(Handle::P1, p1), (Handle::P2, p2)] {
            let mut fill = rgb(HANDLE_COLOR);
            if highlighted == Some(handle) {
                fill = brighten(fill, HOVER_BRIGHTEN);
            }
            cmds.push(DrawCommand::Disc {
                center,
                radius: POINT_RADIUS,
                fill,
                outline,
            });
        }
    }
}
