#![cfg(target_arch = "wasm32")]
use book_core::{BookScene, InstantClock, Route, SceneParams};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod camera;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

use constants::*;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn wire_overlay_buttons(document: &web::Document, scene: &Rc<RefCell<BookScene>>) {
    let s = scene.clone();
    dom::add_click_listener(document, OPEN_BUTTON_ID, move || {
        s.borrow_mut().open();
    });

    let s = scene.clone();
    dom::add_click_listener(document, INDEX_BUTTON_ID, move || {
        s.borrow_mut().activate_index();
    });

    let s = scene.clone();
    dom::add_click_listener(document, MENU_TOGGLE_ID, move || {
        s.borrow_mut().toggle_menu();
    });

    let s = scene.clone();
    dom::add_attr_click_listeners(document, SIDE_MENU_ID, ROUTE_ATTR, move |path| {
        match Route::ALL.iter().find(|r| r.path() == path) {
            Some(route) => s.borrow_mut().select_route(*route),
            None => log::warn!("[menu] unknown route {}", path),
        }
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("book-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let seed: u64 = rand::random();
    let scene = BookScene::new(SceneParams::default(), seed)
        .map_err(|e| anyhow::anyhow!("invalid scene params: {}", e))?;
    let scene = Rc::new(RefCell::new(scene));

    wire_overlay_buttons(&document, &scene);
    events::wire_global_keydown(scene.clone());
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        scene: scene.clone(),
        drag_state: Rc::new(RefCell::new(input::DragState::default())),
    });

    let gpu = frame::init_gpu(&canvas).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        clock: InstantClock::new(),
        events: Vec::new(),
        overlay: overlay::Overlay::new(&document),
        canvas,
        gpu,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
