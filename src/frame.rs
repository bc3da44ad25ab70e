use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;
use wobble_core::RenderCoordinator;

pub struct FrameContext {
    pub scene: Rc<RefCell<RenderCoordinator>>,
    pub ctx: web::CanvasRenderingContext2d,
    pub frames: u64,
    pub started: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let mut scene = self.scene.borrow_mut();
        let commands = scene.tick(now);
        render::draw(&self.ctx, commands);
        self.frames += 1;
        if self.frames % 600 == 0 {
            let secs = now.duration_since(self.started).as_secs_f32();
            let fps = self.frames as f32 / secs.max(1e-3);
            log::debug!("[frame] {} frames, {:.1} fps", self.frames, fps);
        }
    }
}

fn request_frame(callback: &Closure<dyn FnMut()>) {
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(callback.as_ref().unchecked_ref());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        if let Some(cb) = tick_clone.borrow().as_ref() {
            request_frame(cb);
        }
    }) as Box<dyn FnMut()>));
    if let Some(cb) = tick.borrow().as_ref() {
        request_frame(cb);
    }
}
