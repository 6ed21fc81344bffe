use crate::input;
use crate::overlay::{self, Overlay};
use crate::render;
use book_core::{BookScene, InstantClock, SceneEvent};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub scene: Rc<RefCell<BookScene>>,
    pub clock: InstantClock,
    pub events: Vec<SceneEvent>,

    pub canvas: web::HtmlCanvasElement,
    pub overlay: Overlay,
    pub gpu: Option<render::GpuState<'a>>,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        self.events.clear();
        {
            let mut scene = self.scene.borrow_mut();
            scene.advance(&mut self.clock, &mut self.events);
        }

        for ev in &self.events {
            match *ev {
                SceneEvent::Navigate(route) => overlay::navigate(route),
                SceneEvent::MenuRequested => log::info!("[scene] menu requested"),
                SceneEvent::Settled => log::info!("[scene] book settled"),
                SceneEvent::InitialFocusComplete => log::info!("[scene] focus complete"),
                _ => {}
            }
        }

        let scene = self.scene.borrow();
        let frame = scene.frame();
        self.overlay
            .update(&frame, input::canvas_css_size(&self.canvas));

        if let Some(g) = &mut self.gpu {
            let w = self.canvas.width();
            let h = self.canvas.height();
            g.resize_if_needed(w, h);
            if let Err(e) = g.render(&frame) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
