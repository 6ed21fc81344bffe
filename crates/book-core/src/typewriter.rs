/// Reveals a title one character per interval, measured in scene time.
#[derive(Clone, Debug)]
pub struct Typewriter {
    text: String,
    char_interval: f32,
    started_at: Option<f64>,
}

impl Typewriter {
    pub fn new(text: impl Into<String>, char_interval: f32) -> Self {
        Self {
            text: text.into(),
            char_interval,
            started_at: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Restart from an empty string.
    pub fn start(&mut self, now: f64) {
        self.started_at = Some(now);
    }

    pub fn stop(&mut self) {
        self.started_at = None;
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn visible_chars(&self, now: f64) -> usize {
        let Some(t0) = self.started_at else {
            return 0;
        };
        let elapsed = (now - t0).max(0.0);
        let typed = (elapsed / self.char_interval as f64).floor() as usize;
        typed.min(self.text.chars().count())
    }

    pub fn visible_text(&self, now: f64) -> &str {
        let n = self.visible_chars(now);
        match self.text.char_indices().nth(n) {
            Some((byte, _)) => &self.text[..byte],
            None => &self.text,
        }
    }

    pub fn is_complete(&self, now: f64) -> bool {
        self.started_at.is_some() && self.visible_chars(now) == self.text.chars().count()
    }
}
