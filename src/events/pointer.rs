use crate::camera;
use crate::constants::{CLICK_TRAVEL_PX, WHEEL_LINE_PX};
use crate::input;
use book_core::layout::BOOK_BOUNDING_RADIUS;
use book_core::BookScene;
use glam::Vec3;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<BookScene>>,
    pub drag_state: Rc<RefCell<input::DragState>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_pointerdown(&w);
    wire_pointerup(&w);
    wire_wheel(&w);
    wire_contextmenu(&w);
}

/// True if the viewport position hits the book's bounding sphere.
fn hits_book(scene: &BookScene, css: glam::Vec2, size: glam::Vec2) -> bool {
    let frame = scene.frame();
    let cam = camera::camera_for_viewport(frame.camera, frame.fovy_radians, size.x, size.y);
    let (ro, rd) = camera::screen_to_world_ray(&cam, css.x, css.y, size.x, size.y);
    let center = frame.anchor_world(Vec3::ZERO);
    input::ray_sphere(ro, rd, center, BOOK_BOUNDING_RADIUS).is_some()
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_css_px(&ev, &w.canvas);
        let (panning, delta) = {
            let mut ds = w.drag_state.borrow_mut();
            if !ds.active {
                return;
            }
            (ds.panning, ds.update(pos))
        };
        if delta == glam::Vec2::ZERO {
            return;
        }
        let mut scene = w.scene.borrow_mut();
        if panning {
            scene.pan(delta.x, delta.y);
        } else {
            scene.orbit(delta.x, delta.y);
        }
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
        let pos = input::pointer_css_px(&ev, &w.canvas);
        let panning = ev.shift_key() || ev.button() == 2;
        w.drag_state.borrow_mut().begin(pos, panning);
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_css_px(&ev, &w.canvas);
        let clicked = {
            let mut ds = w.drag_state.borrow_mut();
            if !ds.active {
                return;
            }
            ds.end(pos, CLICK_TRAVEL_PX)
        };
        if clicked {
            let size = input::canvas_css_size(&w.canvas);
            let mut scene = w.scene.borrow_mut();
            if hits_book(&scene, pos, size) {
                scene.stop_spin();
                log::info!("[click] book hit, spin stopped");
            }
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        let page_px = input::canvas_css_size(&w.canvas).y;
        let delta = input::wheel_delta_px(ev.delta_y(), ev.delta_mode(), WHEEL_LINE_PX, page_px);
        if w.scene.borrow_mut().zoom(delta) {
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_contextmenu(w: &InputWiring) {
    // Right-drag pans; keep the browser menu out of the way.
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("contextmenu", closure.as_ref().unchecked_ref());
    closure.forget();
}
