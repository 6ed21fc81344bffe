/// A delayed phase transition measured in simulated seconds.
///
/// Arming records the entry timestamp; the owner polls
/// [`PhaseTimer::has_elapsed`] from its frame update. Cancelling clears the
/// timestamp, so a reversed intent can never fire a stale transition.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PhaseTimer {
    armed_at: Option<f64>,
}

impl PhaseTimer {
    pub fn arm(&mut self, now: f64) {
        self.armed_at = Some(now);
    }

    /// Arm only if not already running; keeps the original start time.
    pub fn arm_if_idle(&mut self, now: f64) {
        if self.armed_at.is_none() {
            self.armed_at = Some(now);
        }
    }

    pub fn cancel(&mut self) {
        self.armed_at = None;
    }

    pub fn is_armed(&self) -> bool {
        self.armed_at.is_some()
    }

    pub fn elapsed(&self, now: f64) -> Option<f64> {
        self.armed_at.map(|t0| now - t0)
    }

    pub fn has_elapsed(&self, now: f64, delay_sec: f64) -> bool {
        self.elapsed(now).is_some_and(|e| e >= delay_sec)
    }
}
