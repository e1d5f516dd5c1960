use crate::events::InputQueue;
use instant::Instant;
use pillars_core::{FrameInput, Renderer, Scene, ShadingParams, SurfaceRecovery};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub canvas: web::HtmlCanvasElement,
    pub input: Rc<RefCell<InputQueue>>,
    pub scene: Scene,
    pub params: ShadingParams,
    pub renderer: Renderer<'a>,
    pub start: Instant,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    /// Run one frame. Returns false once the loop should stop.
    pub fn frame(&mut self) -> bool {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;
        let elapsed = (now - self.start).as_secs_f32();

        // Follow the backing-store size kept in sync by the resize listener.
        let (w, h) = (self.canvas.width(), self.canvas.height());
        if (w, h) != self.renderer.size() {
            self.renderer.resize(w, h);
            self.scene.resize(w, h);
        }

        let (pointer, (drag_x, drag_y), scroll) = {
            let mut q = self.input.borrow_mut();
            let (drag, scroll) = q.take_orbit();
            (q.pointer, drag, scroll)
        };
        if drag_x != 0.0 || drag_y != 0.0 {
            self.scene.orbit_drag(drag_x, drag_y);
        }
        if scroll != 0.0 {
            self.scene.orbit_scroll(scroll);
        }

        let (pointer_x, _) = pointer.effective(w, h);
        self.scene.update(&FrameInput {
            now: elapsed,
            dt: dt_sec,
            pointer_x,
            wave: pointer.wave_input(w, h),
        });
        self.params.for_frame(elapsed, self.scene.camera.eye);

        match self.renderer.render(&self.scene, &self.params) {
            Ok(()) => true,
            Err(e) => self.renderer.recover(&e) != SurfaceRecovery::Stop,
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !frame_ctx.borrow_mut().frame() {
            return;
        }
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
