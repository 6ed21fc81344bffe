use super::keymap::{action_for_key, KeyAction};
use book_core::BookScene;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn apply_key_action(scene: &mut BookScene, action: KeyAction) {
    match action {
        KeyAction::ToggleOpen => scene.toggle_open(),
        KeyAction::Dismiss => {
            if scene.menu_open() {
                scene.close_menu();
            } else {
                scene.close();
            }
        }
        KeyAction::ToggleMenu => scene.toggle_menu(),
        KeyAction::SelectRoute(route) => scene.select_route(route),
        KeyAction::StopSpin => scene.stop_spin(),
    }
}

pub fn handle_global_keydown(ev: &web::KeyboardEvent, scene: &Rc<RefCell<BookScene>>) {
    if ev.repeat() || ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    let key = ev.key();
    let Some(action) = action_for_key(&key) else {
        return;
    };
    log::debug!("[keys] {:?} -> {:?}", key, action);
    apply_key_action(&mut scene.borrow_mut(), action);
    ev.prevent_default();
}

pub fn wire_global_keydown(scene: Rc<RefCell<BookScene>>) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &scene);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
