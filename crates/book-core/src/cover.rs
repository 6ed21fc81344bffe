use crate::clock::ease_alpha;
use crate::constants::{COVER_OPEN_ANGLE, COVER_SNAP_EPS};
use crate::params::CoverParams;

/// Hinge angle of the top cover: 0 is closed, π lies open beside the pages.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CoverState {
    pub current_angle: f32,
    pub target_angle: f32,
}

pub struct CoverArticulation {
    params: CoverParams,
    state: CoverState,
}

impl CoverArticulation {
    pub fn new(params: CoverParams) -> Self {
        Self {
            params,
            state: CoverState::default(),
        }
    }

    pub fn state(&self) -> CoverState {
        self.state
    }

    pub fn angle(&self) -> f32 {
        self.state.current_angle
    }

    pub fn set_open(&mut self, open: bool) {
        self.state.target_angle = if open { COVER_OPEN_ANGLE } else { 0.0 };
    }

    /// Opened past the page-ready threshold.
    pub fn is_past_ready(&self) -> bool {
        self.state.target_angle > 0.0
            && self.state.current_angle > self.params.ready_fraction * self.state.target_angle
    }

    /// Move toward the target. Does nothing until the book has settled.
    ///
    /// The blend factor is capped per frame, so a frame-time spike cannot
    /// swing the cover faster than `alpha_cap` of the remaining angle.
    pub fn step(&mut self, dt_sec: f32, settled: bool) {
        if !settled || !dt_sec.is_finite() || dt_sec <= 0.0 {
            return;
        }
        let alpha = ease_alpha(self.params.rate, dt_sec).min(self.params.alpha_cap);
        let s = &mut self.state;
        s.current_angle += (s.target_angle - s.current_angle) * alpha;
        if (s.target_angle - s.current_angle).abs() < COVER_SNAP_EPS {
            s.current_angle = s.target_angle;
        }
        s.current_angle = s.current_angle.clamp(0.0, COVER_OPEN_ANGLE);
    }
}
