use glam::Vec4;
use std::f64::consts::TAU;
use web_sys as web;
use wobble_core::{DrawCommand, Stroke};

/// `rgba(..)` string for a 0..1 colour.
#[inline]
pub fn css_color(c: Vec4) -> String {
    let to_u8 = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "rgba({},{},{},{:.3})",
        to_u8(c.x),
        to_u8(c.y),
        to_u8(c.z),
        c.w.clamp(0.0, 1.0)
    )
}

fn apply_stroke(ctx: &web::CanvasRenderingContext2d, stroke: &Stroke) {
    ctx.set_stroke_style_str(&css_color(stroke.color));
    ctx.set_line_width(stroke.width as f64);
}

/// Replay one frame's commands onto the 2D context.
pub fn draw(ctx: &web::CanvasRenderingContext2d, commands: &[DrawCommand]) {
    for cmd in commands {
        match cmd {
            DrawCommand::Clear { size, color } => {
                ctx.set_fill_style_str(&css_color(*color));
                ctx.fill_rect(0.0, 0.0, size.x as f64, size.y as f64);
            }
            DrawCommand::Polyline { points, stroke } => {
                let Some((first, rest)) = points.split_first() else {
                    continue;
                };
                ctx.begin_path();
                ctx.move_to(first.x as f64, first.y as f64);
                for p in rest {
                    ctx.line_to(p.x as f64, p.y as f64);
                }
                apply_stroke(ctx, stroke);
                ctx.stroke();
            }
            DrawCommand::Segment { from, to, stroke } => {
                ctx.begin_path();
                ctx.move_to(from.x as f64, from.y as f64);
                ctx.line_to(to.x as f64, to.y as f64);
                apply_stroke(ctx, stroke);
                ctx.stroke();
            }
            DrawCommand::Disc {
                center,
                radius,
                fill,
                outline,
            } => {
                ctx.begin_path();
                let (x, y, r) = (center.x as f64, center.y as f64, *radius as f64);
                if let Err(e) = ctx.arc(x, y, r, 0.0, TAU) {
                    log::error!("arc error: {:?}", e);
                    continue;
                }
                ctx.set_fill_style_str(&css_color(*fill));
                ctx.fill();
                if let Some(o) = outline {
                    apply_stroke(ctx, o);
                    ctx.stroke();
                }
            }
        }
    }
}
