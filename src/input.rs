use glam::Vec2;
use web_sys as web;

/// Map a client-space point into canvas backing pixels.
///
/// `rect_origin`/`rect_size` are the canvas' CSS bounding box, `backing` its
/// pixel size. A degenerate box maps to the origin.
#[inline]
pub fn client_to_canvas_px(
    client: Vec2,
    rect_origin: Vec2,
    rect_size: Vec2,
    backing: Vec2,
) -> Vec2 {
    if rect_size.x <= 0.0 || rect_size.y <= 0.0 {
        return Vec2::ZERO;
    }
    (client - rect_origin) / rect_size * backing
}

#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    client_to_canvas_px(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
        Vec2::new(canvas.width() as f32, canvas.height() as f32),
    )
}

/// CSS cursor for the current hover state.
#[inline]
pub fn cursor_for(hover: wobble_core::Hover) -> &'static str {
    match hover {
        wobble_core::Hover::None => "default",
        wobble_core::Hover::Over(_) => "grab",
        wobble_core::Hover::Grabbing(_) => "grabbing",
    }
}
