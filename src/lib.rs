#![cfg(target_arch = "wasm32")]
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wobble_core::RenderCoordinator;

mod dom;
mod error;
mod events;
mod frame;
mod input;
mod render;

use error::StartupError;

const CANVAS_ID: &str = "app-canvas";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("wobbly-bezier starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
        return Err(JsValue::from_str(&e.to_string()));
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web_sys::window().ok_or(StartupError::NoWindow)?;
    let document = window.document().ok_or(StartupError::NoDocument)?;
    let canvas = dom::find_canvas(&document, CANVAS_ID)?;
    let ctx = dom::context_2d(&canvas)?;

    let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
    log::info!("[kick] seed={}", seed);
    let scene = Rc::new(RefCell::new(RenderCoordinator::new(seed)));

    // Sizes the backing store and performs the first layout.
    events::wire_canvas_resize(&canvas, &scene);
    {
        let size = scene.borrow().size();
        log::info!("[layout] canvas {}x{}", size.x, size.y);
    }

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        scene: scene.clone(),
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        ctx,
        frames: 0,
        started: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
