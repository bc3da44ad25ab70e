use crate::error::StartupError;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn find_canvas(
    document: &web::Document,
    id: &'static str,
) -> Result<web::HtmlCanvasElement, StartupError> {
    document
        .get_element_by_id(id)
        .ok_or(StartupError::MissingCanvas(id))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| StartupError::NotACanvas(id))
}

pub fn context_2d(
    canvas: &web::HtmlCanvasElement,
) -> Result<web::CanvasRenderingContext2d, StartupError> {
    canvas
        .get_context("2d")
        .map_err(|e| StartupError::NoContext(format!("{:?}", e)))?
        .ok_or_else(|| StartupError::NoContext("null".into()))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| StartupError::NoContext(format!("{:?}", e)))
}

/// Match the canvas backing store to its CSS size times devicePixelRatio.
/// Returns the new backing size in pixels and the ratio used.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (u32, u32, f64) {
    let mut dpr = 1.0;
    if let Some(w) = web::window() {
        dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
    (canvas.width(), canvas.height(), dpr)
}

pub fn set_cursor(canvas: &web::HtmlCanvasElement, cursor: &str) {
    let _ = canvas.style().set_property("cursor", cursor);
}
