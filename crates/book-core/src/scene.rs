//! The book scene: owns every sub-machine and advances them in a fixed order
//! once per frame.
//!
//! Order matters: the impact simulator decides `has_settled`, the cover only
//! moves once settled, the page sequencer reads the cover, and the camera
//! director reads the page flag. Input methods (`open`, `activate_index`,
//! menu selection) only record intent; their observable effects and events
//! appear on the next [`BookScene::tick`].

use crate::camera::CameraPose;
use crate::clock::{clamp_frame_dt, FrameClock};
use crate::cover::{CoverArticulation, CoverState};
use crate::director::{CameraDirector, CameraIntent, DirectorEvent, DirectorInput};
use crate::error::ParamsError;
use crate::impact::{BookState, ImpactEvent, ImpactSimulator};
use crate::layout;
use crate::menu::{Route, Selection, SideMenu};
use crate::params::SceneParams;
use crate::sequencer::{PageEvent, PageSequencer};
use crate::typewriter::Typewriter;
use glam::{Mat4, Quat, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SceneEvent {
    Bounced { impact_speed: f32 },
    Landed,
    Settled,
    PageRevealed,
    PageHidden,
    CameraIntentChanged { from: CameraIntent, to: CameraIntent },
    InitialFocusComplete,
    /// The index control on the open page was activated.
    MenuRequested,
    MenuToggled { open: bool },
    Navigate(Route),
}

/// Everything a renderer or overlay needs for one frame.
#[derive(Clone, Debug)]
pub struct SceneFrame<'a> {
    pub book_position: Vec3,
    pub book_rotation: Quat,
    pub cover_angle: f32,
    pub camera: CameraPose,
    pub fovy_radians: f32,
    pub page_light: f32,
    pub page_visible: bool,
    pub title: &'a str,
    pub title_visible: bool,
    pub open_control_visible: bool,
    pub controls_enabled: bool,
    pub camera_intent: CameraIntent,
    pub menu_open: bool,
}

impl SceneFrame<'_> {
    pub fn book_matrix(&self) -> Mat4 {
        layout::book_transform(self.book_position, self.book_rotation)
    }

    /// World position of a book-space point (e.g. an overlay anchor).
    pub fn anchor_world(&self, local: Vec3) -> Vec3 {
        self.book_matrix().transform_point3(local)
    }
}

pub struct BookScene {
    impact: ImpactSimulator,
    cover: CoverArticulation,
    director: CameraDirector,
    sequencer: PageSequencer,
    typewriter: Typewriter,
    menu: SideMenu,
    rng: StdRng,
    open_intent: bool,
    elapsed: f64,
    max_frame_dt: f32,
    queued: Vec<SceneEvent>,
    director_events: Vec<DirectorEvent>,
}

impl BookScene {
    pub fn new(params: SceneParams, seed: u64) -> Result<Self, ParamsError> {
        params.validate()?;
        let SceneParams {
            physics,
            cover,
            camera,
            page,
            title,
            typewriter_char_sec,
            about_nav_delay_sec,
        } = params;
        let max_frame_dt = physics.max_frame_dt;
        log::info!(
            "[scene] drop from {:.1} (seed {})",
            physics.drop_height,
            seed
        );
        Ok(Self {
            impact: ImpactSimulator::new(physics),
            cover: CoverArticulation::new(cover),
            director: CameraDirector::new(camera),
            sequencer: PageSequencer::new(page),
            typewriter: Typewriter::new(title, typewriter_char_sec),
            menu: SideMenu::new(about_nav_delay_sec),
            rng: StdRng::seed_from_u64(seed),
            open_intent: false,
            elapsed: 0.0,
            max_frame_dt,
            queued: Vec::new(),
            director_events: Vec::new(),
        })
    }

    // ---------------- Inputs ----------------

    pub fn set_open_intent(&mut self, open: bool) {
        if self.open_intent == open {
            return;
        }
        self.open_intent = open;
        self.cover.set_open(open);
        if open {
            self.impact.stop_spin();
            self.typewriter.stop();
        } else {
            // A close reverses the About animation, so its navigation is stale.
            self.menu.cancel_pending();
            if self.sequencer.hide() {
                self.queued.push(SceneEvent::PageHidden);
            }
            if self.impact.has_settled() {
                self.typewriter.start(self.elapsed);
            }
        }
        log::info!("[scene] open intent = {}", open);
    }

    pub fn open(&mut self) {
        self.set_open_intent(true);
    }

    pub fn close(&mut self) {
        self.set_open_intent(false);
    }

    pub fn toggle_open(&mut self) {
        self.set_open_intent(!self.open_intent);
    }

    /// The "Index" control on the revealed page. Ignored while the page
    /// content is hidden.
    pub fn activate_index(&mut self) -> bool {
        if !self.page_content_visible() {
            return false;
        }
        self.queued.push(SceneEvent::MenuRequested);
        if self.menu.set_open(true) {
            self.queued.push(SceneEvent::MenuToggled { open: true });
        }
        true
    }

    pub fn toggle_menu(&mut self) {
        let open = self.menu.toggle();
        self.queued.push(SceneEvent::MenuToggled { open });
    }

    pub fn close_menu(&mut self) {
        if self.menu.set_open(false) {
            self.queued.push(SceneEvent::MenuToggled { open: false });
        }
    }

    pub fn select_route(&mut self, route: Route) {
        let was_open = self.menu.is_open();
        match self.menu.select(route, self.elapsed) {
            Selection::Navigate(r) => self.queued.push(SceneEvent::Navigate(r)),
            Selection::Deferred(_) => self.set_open_intent(true),
        }
        if was_open {
            self.queued.push(SceneEvent::MenuToggled { open: false });
        }
    }

    /// A click on the book ends the idle turn.
    pub fn stop_spin(&mut self) {
        self.impact.stop_spin();
    }

    pub fn orbit(&mut self, dx_px: f32, dy_px: f32) -> bool {
        self.director.orbit(dx_px, dy_px)
    }

    pub fn zoom(&mut self, delta: f32) -> bool {
        self.director.zoom(delta)
    }

    pub fn pan(&mut self, dx_px: f32, dy_px: f32) -> bool {
        self.director.pan(dx_px, dy_px)
    }

    // ---------------- Frame update ----------------

    pub fn advance<C: FrameClock + ?Sized>(&mut self, clock: &mut C, out: &mut Vec<SceneEvent>) {
        let dt = clock.delta();
        self.tick(dt, out);
    }

    pub fn tick(&mut self, dt: Duration, out: &mut Vec<SceneEvent>) {
        out.append(&mut self.queued);

        let dt_sec = clamp_frame_dt(dt.as_secs_f32(), self.max_frame_dt);
        self.elapsed += dt_sec as f64;
        let now = self.elapsed;

        match self.impact.step(dt_sec, &mut self.rng) {
            Some(ImpactEvent::Bounced { impact_speed, .. }) => {
                out.push(SceneEvent::Bounced { impact_speed })
            }
            Some(ImpactEvent::Landed { .. }) => out.push(SceneEvent::Landed),
            Some(ImpactEvent::Settled) => {
                out.push(SceneEvent::Settled);
                if !self.open_intent {
                    self.typewriter.start(now);
                }
            }
            None => {}
        }
        let settled = self.impact.has_settled();

        self.cover.step(dt_sec, settled);

        match self.sequencer.update(
            dt_sec,
            self.open_intent,
            settled,
            self.cover.is_past_ready(),
        ) {
            Some(PageEvent::Revealed) => out.push(SceneEvent::PageRevealed),
            Some(PageEvent::Hidden) => out.push(SceneEvent::PageHidden),
            None => {}
        }

        let input = DirectorInput {
            now,
            dt_sec,
            open_intent: self.open_intent,
            settled,
            page_ready: self.sequencer.page_ready(),
            page_anchor: self.book_matrix().transform_point3(layout::SPREAD_CENTER),
            book_yaw: self.impact.state().yaw,
        };
        self.director.update(input, &mut self.director_events);
        for ev in self.director_events.drain(..) {
            out.push(match ev {
                DirectorEvent::IntentChanged { from, to } => {
                    SceneEvent::CameraIntentChanged { from, to }
                }
                DirectorEvent::InitialFocusComplete => SceneEvent::InitialFocusComplete,
            });
        }

        if let Some(route) = self.menu.poll(now) {
            log::info!("[menu] navigate {}", route.path());
            out.push(SceneEvent::Navigate(route));
        }
    }

    // ---------------- Outputs ----------------

    pub fn frame(&self) -> SceneFrame<'_> {
        let book = self.impact.state();
        let title_visible = book.has_settled && !self.open_intent;
        SceneFrame {
            book_position: self.book_position(),
            book_rotation: self.book_rotation(),
            cover_angle: self.cover.angle(),
            camera: self.director.pose(),
            fovy_radians: self.director.fovy_radians(),
            page_light: self.sequencer.light_intensity(),
            page_visible: self.page_content_visible(),
            title: self.typewriter.visible_text(self.elapsed),
            title_visible,
            open_control_visible: title_visible,
            controls_enabled: self.director.controls_enabled(),
            camera_intent: self.director.intent(),
            menu_open: self.menu.is_open(),
        }
    }

    pub fn book(&self) -> &BookState {
        self.impact.state()
    }

    pub fn cover(&self) -> CoverState {
        self.cover.state()
    }

    pub fn camera_intent(&self) -> CameraIntent {
        self.director.intent()
    }

    pub fn camera_pose(&self) -> CameraPose {
        self.director.pose()
    }

    pub fn entry_pose(&self) -> CameraPose {
        self.director.entry_pose()
    }

    pub fn controls_enabled(&self) -> bool {
        self.director.controls_enabled()
    }

    pub fn initial_focus_complete(&self) -> bool {
        self.director.initial_focus_complete()
    }

    pub fn page_ready(&self) -> bool {
        self.sequencer.page_ready()
    }

    pub fn page_content_visible(&self) -> bool {
        self.sequencer.content_visible(self.impact.has_settled())
    }

    pub fn page_light(&self) -> f32 {
        self.sequencer.light_intensity()
    }

    pub fn open_intent(&self) -> bool {
        self.open_intent
    }

    pub fn menu_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn pending_route(&self) -> Option<Route> {
        self.menu.pending()
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn title_text(&self) -> &str {
        self.typewriter.visible_text(self.elapsed)
    }

    fn book_position(&self) -> Vec3 {
        Vec3::new(0.0, self.impact.state().vertical_position, 0.0)
    }

    fn book_rotation(&self) -> Quat {
        let s = self.impact.state();
        layout::book_rotation(s.yaw, s.rotation.x, s.rotation.z)
    }

    fn book_matrix(&self) -> Mat4 {
        layout::book_transform(self.book_position(), self.book_rotation())
    }
}
