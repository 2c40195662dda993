//! Typewriter reveal for the scene title.
//!
//! Optional: reveals the title one character per tick interval, then stays
//! complete. One-shot, no rewind.

use std::time::{Duration, Instant};

/// One character is revealed per this interval.
pub const TYPE_INTERVAL: Duration = Duration::from_millis(100);

/// Progressive text reveal driven by an external clock.
#[derive(Debug, Clone)]
pub struct Typewriter {
    text: String,
    started: Option<Instant>,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            started: None,
        }
    }

    /// Start the reveal. Subsequent calls are ignored.
    pub fn start(&mut self, now: Instant) {
        if self.started.is_none() {
            self.started = Some(now);
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Characters revealed at `now`. Zero until started, then one more per
    /// elapsed interval, clamped to the full length.
    pub fn revealed_chars(&self, now: Instant) -> usize {
        let Some(started) = self.started else {
            return 0;
        };
        let elapsed = now.saturating_duration_since(started);
        let ticks = (elapsed.as_millis() / TYPE_INTERVAL.as_millis()) as usize;
        ticks.min(self.text.chars().count())
    }

    /// The visible prefix at `now` (respects char boundaries).
    pub fn visible(&self, now: Instant) -> &str {
        let chars = self.revealed_chars(now);
        match self.text.char_indices().nth(chars) {
            Some((byte_idx, _)) => &self.text[..byte_idx],
            None => &self.text,
        }
    }

    pub fn is_complete(&self, now: Instant) -> bool {
        self.revealed_chars(now) == self.text.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_until_started() {
        let tw = Typewriter::new("Hello");
        assert_eq!(tw.visible(Instant::now()), "");
    }

    #[test]
    fn test_reveals_one_char_per_interval() {
        let mut tw = Typewriter::new("Hello");
        let t0 = Instant::now();
        tw.start(t0);

        assert_eq!(tw.visible(t0), "");
        assert_eq!(tw.visible(t0 + Duration::from_millis(100)), "H");
        assert_eq!(tw.visible(t0 + Duration::from_millis(350)), "Hel");
        assert_eq!(tw.visible(t0 + Duration::from_millis(500)), "Hello");
    }

    #[test]
    fn test_stays_complete() {
        let mut tw = Typewriter::new("Hi");
        let t0 = Instant::now();
        tw.start(t0);

        let late = t0 + Duration::from_secs(60);
        assert_eq!(tw.visible(late), "Hi");
        assert!(tw.is_complete(late));
    }

    #[test]
    fn test_restart_is_ignored() {
        let mut tw = Typewriter::new("abc");
        let t0 = Instant::now();
        tw.start(t0);
        tw.start(t0 + Duration::from_secs(5)); // no-op
        assert!(tw.is_complete(t0 + Duration::from_millis(300)));
    }

    #[test]
    fn test_multibyte_boundaries() {
        let mut tw = Typewriter::new("héllo");
        let t0 = Instant::now();
        tw.start(t0);
        assert_eq!(tw.visible(t0 + Duration::from_millis(200)), "hé");
    }
}
