use instant::Instant;
use std::time::Duration;

/// Source of the time elapsed since the previous frame.
///
/// The browser loop uses [`InstantClock`]; tests drive the scene with
/// [`FixedStepClock`] so runs are reproducible.
pub trait FrameClock {
    fn delta(&mut self) -> Duration;
}

pub struct InstantClock {
    last: Instant,
}

impl InstantClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }
}

impl Default for InstantClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for InstantClock {
    fn delta(&mut self) -> Duration {
        let now = Instant::now();
        let dt = now.duration_since(self.last);
        self.last = now;
        dt
    }
}

#[derive(Clone, Copy, Debug)]
pub struct FixedStepClock {
    step: Duration,
}

impl FixedStepClock {
    pub fn new(step: Duration) -> Self {
        Self { step }
    }

    pub fn from_hz(hz: f64) -> Self {
        Self::new(Duration::from_secs_f64(1.0 / hz.max(1.0)))
    }
}

impl FrameClock for FixedStepClock {
    fn delta(&mut self) -> Duration {
        self.step
    }
}

/// Clamp a raw frame delta to `[0, max_dt_sec]`; NaN, infinite and negative
/// deltas become 0 so they never reach the integrators.
#[inline]
pub fn clamp_frame_dt(dt_sec: f32, max_dt_sec: f32) -> f32 {
    if dt_sec.is_finite() && dt_sec > 0.0 {
        dt_sec.min(max_dt_sec)
    } else {
        0.0
    }
}

/// Frame-rate independent blend factor for exponential smoothing.
#[inline]
pub fn ease_alpha(rate_per_sec: f32, dt_sec: f32) -> f32 {
    1.0 - (-rate_per_sec * dt_sec).exp()
}
