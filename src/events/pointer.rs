use crate::dom;
use crate::input;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;
use wobble_core::RenderCoordinator;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<RenderCoordinator>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_pointerdown(&w);
    wire_pointerup(&w);
    for name in ["pointerleave", "pointercancel"] {
        wire_release(&w, &w.canvas, name);
    }
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !w.canvas.is_connected() {
            return;
        }
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        let hover = w.scene.borrow_mut().track_pointer(pos, Instant::now());
        dom::set_cursor(&w.canvas, input::cursor_for(hover));
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        let mut scene = w.scene.borrow_mut();
        scene.press(pos);
        dom::set_cursor(&w.canvas, input::cursor_for(scene.interaction.hover()));
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    if let Some(wnd) = web::window() {
        wire_release(w, &wnd, "pointerup");
    }
}

fn wire_release(w: &InputWiring, target: &web::EventTarget, event: &str) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let mut scene = w.scene.borrow_mut();
        scene.release(Instant::now());
        dom::set_cursor(&w.canvas, input::cursor_for(scene.interaction.hover()));
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);

    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}
