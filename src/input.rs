use glam::{Vec2, Vec3};
use web_sys as web;

/// One pointer press, tracked from down to up. Coordinates are CSS pixels.
#[derive(Default, Clone, Copy)]
pub struct DragState {
    pub active: bool,
    pub panning: bool,
    pub start: Vec2,
    pub last: Vec2,
    /// Longest distance from `start` seen during the press.
    pub travel: f32,
}

impl DragState {
    pub fn begin(&mut self, at: Vec2, panning: bool) {
        *self = DragState {
            active: true,
            panning,
            start: at,
            last: at,
            travel: 0.0,
        };
    }

    /// Record a move and return the delta since the previous one.
    pub fn update(&mut self, at: Vec2) -> Vec2 {
        let delta = at - self.last;
        self.last = at;
        self.travel = self.travel.max(at.distance(self.start));
        delta
    }

    /// End the press; true if it stayed within `max_travel` (a click).
    pub fn end(&mut self, at: Vec2, max_travel: f32) -> bool {
        self.update(at);
        self.active = false;
        is_click(self.travel, max_travel)
    }
}

#[inline]
pub fn is_click(travel_px: f32, max_travel_px: f32) -> bool {
    travel_px < max_travel_px
}

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Normalise a wheel delta to pixels. `delta_mode` 1 is lines, 2 is pages.
#[inline]
pub fn wheel_delta_px(delta_y: f64, delta_mode: u32, line_px: f32, page_px: f32) -> f32 {
    let dy = delta_y as f32;
    match delta_mode {
        1 => dy * line_px,
        2 => dy * page_px,
        _ => dy,
    }
}

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_css_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    )
}

#[inline]
pub fn canvas_css_size(canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(rect.width() as f32, rect.height() as f32)
}
