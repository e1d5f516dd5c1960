use crate::dom;
use pillars_core::PointerState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Wheel delta (in pixels) that counts as one zoom step.
const WHEEL_PIXELS_PER_STEP: f32 = 100.0;

/// Pointer state plus orbit input queued by DOM handlers, drained each frame.
#[derive(Default)]
pub struct InputQueue {
    pub pointer: PointerState,
    pub drag: (f32, f32),
    pub scroll: f32,
}

impl InputQueue {
    /// Take the accumulated drag and scroll, leaving zeros behind.
    pub fn take_orbit(&mut self) -> ((f32, f32), f32) {
        (
            std::mem::take(&mut self.drag),
            std::mem::take(&mut self.scroll),
        )
    }
}

pub fn wire_input_handlers(canvas: &web::HtmlCanvasElement, queue: Rc<RefCell<InputQueue>>) {
    wire_pointermove(canvas, queue.clone());
    wire_pointerdown(canvas, queue.clone());
    wire_pointerup(queue.clone());
    wire_wheel(canvas, queue);
}

fn wire_pointermove(canvas: &web::HtmlCanvasElement, queue: Rc<RefCell<InputQueue>>) {
    let canvas = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = dom::pointer_canvas_px(ev.client_x() as f32, ev.client_y() as f32, &canvas);
        let mut q = queue.borrow_mut();
        if let Some((dx, dy)) = q.pointer.move_to(pos.x, pos.y) {
            q.drag.0 += dx;
            q.drag.1 += dy;
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerdown(canvas: &web::HtmlCanvasElement, queue: Rc<RefCell<InputQueue>>) {
    let canvas_for_listener = canvas.clone();
    let canvas = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        let pos = dom::pointer_canvas_px(ev.client_x() as f32, ev.client_y() as f32, &canvas);
        let mut q = queue.borrow_mut();
        q.pointer.move_to(pos.x, pos.y);
        q.pointer.down = true;
        _ = canvas.set_pointer_capture(ev.pointer_id());
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(queue: Rc<RefCell<InputQueue>>) {
    let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        queue.borrow_mut().pointer.down = false;
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
        _ = wnd
            .add_event_listener_with_callback("pointercancel", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_wheel(canvas: &web::HtmlCanvasElement, queue: Rc<RefCell<InputQueue>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        ev.prevent_default();
        // Wheel up (negative delta) zooms in.
        queue.borrow_mut().scroll -= ev.delta_y() as f32 / WHEEL_PIXELS_PER_STEP;
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}
