use crate::camera;
use crate::constants::*;
use crate::dom;
use book_core::layout::{INDEX_ANCHOR, OPEN_BUTTON_ANCHOR, TITLE_ANCHOR};
use book_core::{Route, SceneFrame};
use glam::{Vec2, Vec3};
use web_sys as web;

/// DOM elements laid over the canvas and pinned to book anchors.
pub struct Overlay {
    title: Option<web::HtmlElement>,
    open_button: Option<web::HtmlElement>,
    index_button: Option<web::HtmlElement>,
    side_menu: Option<web::HtmlElement>,
    last_title: String,
}

impl Overlay {
    pub fn new(document: &web::Document) -> Self {
        Self {
            title: dom::html_element(document, TITLE_ID),
            open_button: dom::html_element(document, OPEN_BUTTON_ID),
            index_button: dom::html_element(document, INDEX_BUTTON_ID),
            side_menu: dom::html_element(document, SIDE_MENU_ID),
            last_title: String::new(),
        }
    }

    /// Sync the overlay with one frame. `size` is the canvas size in CSS
    /// pixels.
    pub fn update(&mut self, frame: &SceneFrame<'_>, size: Vec2) {
        let cam = camera::camera_for_viewport(frame.camera, frame.fovy_radians, size.x, size.y);
        let place = |local: Vec3| {
            camera::world_to_screen(&cam, frame.anchor_world(local), size.x, size.y)
        };

        if let Some(el) = &self.title {
            if self.last_title != frame.title {
                el.set_text_content(Some(frame.title));
                self.last_title.clear();
                self.last_title.push_str(frame.title);
            }
            pin(el, frame.title_visible.then(|| place(TITLE_ANCHOR)).flatten());
        }
        if let Some(el) = &self.open_button {
            pin(
                el,
                frame
                    .open_control_visible
                    .then(|| place(OPEN_BUTTON_ANCHOR))
                    .flatten(),
            );
        }
        if let Some(el) = &self.index_button {
            pin(el, frame.page_visible.then(|| place(INDEX_ANCHOR)).flatten());
        }
        if let Some(el) = &self.side_menu {
            set_class(el, MENU_OPEN_CLASS, frame.menu_open);
        }
    }
}

/// Centre `el` on `at`, or hide it.
fn pin(el: &web::HtmlElement, at: Option<Vec2>) {
    match at {
        Some(p) => {
            let style = el.style();
            _ = style.set_property(
                "transform",
                &format!("translate({:.1}px, {:.1}px) translate(-50%, -50%)", p.x, p.y),
            );
            set_class(el, HIDDEN_CLASS, false);
        }
        None => set_class(el, HIDDEN_CLASS, true),
    }
}

#[inline]
fn set_class(el: &web::HtmlElement, class: &str, on: bool) {
    let cl = el.class_list();
    if on {
        _ = cl.add_1(class);
    } else {
        _ = cl.remove_1(class);
    }
}

/// Route navigation is hash-based so the page never reloads.
pub fn navigate(route: Route) {
    if let Some(window) = web::window() {
        _ = window.location().set_hash(route.path());
        log::info!("[nav] {}", route.path());
    }
}
