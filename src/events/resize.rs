use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;
use wobble_core::RenderCoordinator;

fn sync(canvas: &web::HtmlCanvasElement, scene: &Rc<RefCell<RenderCoordinator>>) {
    let (w, h, dpr) = dom::sync_canvas_backing_size(canvas);
    let mut scene = scene.borrow_mut();
    scene.set_pixel_ratio(dpr as f32);
    scene.resize(w as f32, h as f32);
}

/// Lay the curve out for the current size and again on every window resize.
pub fn wire_canvas_resize(
    canvas: &web::HtmlCanvasElement,
    scene: &Rc<RefCell<RenderCoordinator>>,
) {
    sync(canvas, scene);
    let canvas_resize = canvas.clone();
    let scene_resize = scene.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        sync(&canvas_resize, &scene_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}
