use crate::clock::ease_alpha;
use crate::params::PageParams;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageEvent {
    Revealed,
    Hidden,
}

/// Gates the index page behind the cover and ramps the page light.
pub struct PageSequencer {
    params: PageParams,
    page_ready: bool,
    light: f32,
}

impl PageSequencer {
    pub fn new(params: PageParams) -> Self {
        Self {
            params,
            page_ready: false,
            light: 0.0,
        }
    }

    pub fn page_ready(&self) -> bool {
        self.page_ready
    }

    pub fn light_intensity(&self) -> f32 {
        self.light
    }

    pub fn content_visible(&self, settled: bool) -> bool {
        settled && self.page_ready
    }

    /// Drop the flag as soon as the intent closes. Returns whether the page
    /// was showing.
    pub fn hide(&mut self) -> bool {
        std::mem::replace(&mut self.page_ready, false)
    }

    /// `cover_past_ready` is the cover's own threshold test; the flag drops
    /// with the intent, without waiting for the cover to swing back.
    pub fn update(
        &mut self,
        dt_sec: f32,
        open_intent: bool,
        settled: bool,
        cover_past_ready: bool,
    ) -> Option<PageEvent> {
        let was_ready = self.page_ready;
        if !open_intent || !settled {
            self.page_ready = false;
        } else if cover_past_ready {
            self.page_ready = true;
        }

        let target = if self.page_ready {
            self.params.light_max
        } else {
            0.0
        };
        if dt_sec > 0.0 {
            self.light += (target - self.light) * ease_alpha(self.params.light_rate, dt_sec);
        }

        match (was_ready, self.page_ready) {
            (false, true) => Some(PageEvent::Revealed),
            (true, false) => Some(PageEvent::Hidden),
            _ => None,
        }
    }
}
