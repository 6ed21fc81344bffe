//! Camera state machine: focus on the open page, return to the entry view,
//! and hand control to the user in between.

use crate::camera::{CameraPose, OrbitControls};
use crate::clock::ease_alpha;
use crate::params::CameraParams;
use crate::timer::PhaseTimer;
use glam::{Quat, Vec3};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CameraIntent {
    /// Holding the entry pose while the book drops.
    #[default]
    Idle,
    FocusingOnPage,
    Resetting,
    Free,
}

/// Per-frame inputs the director reacts to.
#[derive(Clone, Copy, Debug)]
pub struct DirectorInput {
    pub now: f64,
    pub dt_sec: f32,
    pub open_intent: bool,
    pub settled: bool,
    pub page_ready: bool,
    /// World position of the open spread.
    pub page_anchor: Vec3,
    pub book_yaw: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DirectorEvent {
    IntentChanged {
        from: CameraIntent,
        to: CameraIntent,
    },
    InitialFocusComplete,
}

pub struct CameraDirector {
    params: CameraParams,
    intent: CameraIntent,
    pose: CameraPose,
    entry_pose: CameraPose,
    orbit: OrbitControls,
    focus_delay: PhaseTimer,
    focus_phase: PhaseTimer,
    initial_focus_complete: bool,
    focused_since_reset: bool,
}

impl CameraDirector {
    pub fn new(params: CameraParams) -> Self {
        let entry_pose = CameraPose::new(params.entry_eye, params.entry_target);
        let orbit = OrbitControls::new(params.orbit.clone());
        Self {
            params,
            intent: CameraIntent::Idle,
            pose: entry_pose,
            entry_pose,
            orbit,
            focus_delay: PhaseTimer::default(),
            focus_phase: PhaseTimer::default(),
            initial_focus_complete: false,
            focused_since_reset: false,
        }
    }

    pub fn intent(&self) -> CameraIntent {
        self.intent
    }

    pub fn pose(&self) -> CameraPose {
        self.pose
    }

    pub fn entry_pose(&self) -> CameraPose {
        self.entry_pose
    }

    pub fn fovy_radians(&self) -> f32 {
        self.params.fovy_radians
    }

    /// Orbit input is honoured only in `Free`.
    pub fn controls_enabled(&self) -> bool {
        self.intent == CameraIntent::Free
    }

    pub fn initial_focus_complete(&self) -> bool {
        self.initial_focus_complete
    }

    /// Pose the camera settles into while reading the open spread.
    pub fn reading_pose(&self, page_anchor: Vec3, book_yaw: f32) -> CameraPose {
        let offset = Quat::from_rotation_y(book_yaw)
            * Vec3::new(0.0, self.params.reading_height, self.params.reading_pullback);
        CameraPose::new(page_anchor + offset, page_anchor)
    }

    pub fn orbit(&mut self, dx_px: f32, dy_px: f32) -> bool {
        if !self.controls_enabled() {
            return false;
        }
        self.orbit.rotate(&mut self.pose, dx_px, dy_px);
        true
    }

    pub fn zoom(&mut self, delta: f32) -> bool {
        if !self.controls_enabled() {
            return false;
        }
        self.orbit.zoom(&mut self.pose, delta);
        true
    }

    pub fn pan(&mut self, dx_px: f32, dy_px: f32) -> bool {
        if !self.controls_enabled() {
            return false;
        }
        self.orbit.pan(&mut self.pose, dx_px, dy_px);
        true
    }

    /// Re-evaluate intent and move the camera for one frame. Nothing is
    /// latched: the target pose is recomputed from the current inputs.
    pub fn update(&mut self, input: DirectorInput, out: &mut Vec<DirectorEvent>) {
        let from = self.intent;

        if !input.open_intent {
            self.focus_delay.cancel();
            self.focus_phase.cancel();
            self.initial_focus_complete = false;
            if self.focused_since_reset && self.intent != CameraIntent::Resetting {
                self.intent = CameraIntent::Resetting;
            }
        }

        if matches!(
            self.intent,
            CameraIntent::Idle | CameraIntent::Free | CameraIntent::Resetting
        ) && input.open_intent
            && input.settled
            && !self.initial_focus_complete
        {
            self.focus_delay.arm_if_idle(input.now);
            if input.page_ready
                && self
                    .focus_delay
                    .has_elapsed(input.now, self.params.focus_delay_sec)
            {
                self.focus_delay.cancel();
                self.focus_phase.arm(input.now);
                self.focused_since_reset = true;
                self.intent = CameraIntent::FocusingOnPage;
            }
        }

        if self.intent == CameraIntent::Idle && input.settled && !input.open_intent {
            self.intent = CameraIntent::Free;
        }

        let alpha = ease_alpha(self.params.ease_rate, input.dt_sec);
        match self.intent {
            CameraIntent::FocusingOnPage => {
                let goal = self.reading_pose(input.page_anchor, input.book_yaw);
                self.pose = self.pose.lerp(&goal, alpha);
                if self
                    .focus_phase
                    .has_elapsed(input.now, self.params.focus_settle_sec)
                {
                    self.focus_phase.cancel();
                    self.initial_focus_complete = true;
                    self.intent = CameraIntent::Free;
                    out.push(DirectorEvent::InitialFocusComplete);
                }
            }
            CameraIntent::Resetting => {
                self.pose = self.pose.lerp(&self.entry_pose, alpha);
                if self.pose.distance_to(&self.entry_pose) < self.params.reset_epsilon {
                    self.pose = self.entry_pose;
                    self.focused_since_reset = false;
                    self.intent = CameraIntent::Free;
                }
            }
            CameraIntent::Idle | CameraIntent::Free => {}
        }

        if self.intent != from {
            log::info!("[camera] {:?} -> {:?}", from, self.intent);
            out.push(DirectorEvent::IntentChanged {
                from,
                to: self.intent,
            });
        }
    }
}
