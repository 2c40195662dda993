//! Click ripples.
//!
//! A ripple is a one-shot expanding circle anchored where a button was
//! clicked. Each ripple lives exactly [`RIPPLE_LIFETIME`]; rapid clicks
//! spawn independent ripples that expand concurrently. Clocks are passed in
//! explicitly so tests control time without sleeping.

use std::time::{Duration, Instant};

use crate::types::PxRect;

/// How long a ripple lives before it is dropped.
pub const RIPPLE_LIFETIME: Duration = Duration::from_millis(600);

/// A ripple grows from scale 0 to this multiple of its base diameter.
pub const RIPPLE_MAX_SCALE: f32 = 4.0;

/// One expanding circle, positioned relative to its button's rect.
#[derive(Debug, Clone, Copy)]
pub struct Ripple {
    /// Center, px relative to the button origin.
    pub center_x: f32,
    pub center_y: f32,
    /// Base diameter: the larger of the button's width and height.
    pub diameter_px: f32,
    spawned: Instant,
}

impl Ripple {
    /// Animation progress in `[0, 1]`.
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.spawned);
        (elapsed.as_secs_f32() / RIPPLE_LIFETIME.as_secs_f32()).min(1.0)
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.spawned) >= RIPPLE_LIFETIME
    }

    /// Current radius in px: scales linearly from 0 to
    /// `diameter / 2 * RIPPLE_MAX_SCALE` over the lifetime.
    pub fn radius_px(&self, now: Instant) -> f32 {
        self.diameter_px / 2.0 * RIPPLE_MAX_SCALE * self.progress(now)
    }

    /// Remaining strength in `[0, 1]`: fades out as the circle expands.
    pub fn intensity(&self, now: Instant) -> f32 {
        1.0 - self.progress(now)
    }
}

/// Live ripples for one button.
#[derive(Debug, Default)]
pub struct RippleField {
    ripples: Vec<Ripple>,
}

impl RippleField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a ripple for a click at `(x, y)` px relative to `rect`'s
    /// origin. Sized to the larger of the rect's dimensions so the circle
    /// can cover the whole button.
    pub fn spawn(&mut self, x: f32, y: f32, rect: &PxRect, now: Instant) {
        self.ripples.push(Ripple {
            center_x: x,
            center_y: y,
            diameter_px: rect.width.max(rect.height),
            spawned: now,
        });
    }

    /// Spawn a ripple at the rect's center (programmatic activation has no
    /// pointer position).
    pub fn spawn_centered(&mut self, rect: &PxRect, now: Instant) {
        self.spawn(rect.width / 2.0, rect.height / 2.0, rect, now);
    }

    /// Drop every ripple whose lifetime has elapsed.
    pub fn prune(&mut self, now: Instant) {
        self.ripples.retain(|r| !r.is_expired(now));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ripple> {
        self.ripples.iter()
    }

    pub fn len(&self) -> usize {
        self.ripples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ripples.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> PxRect {
        PxRect::new(0.0, 0.0, 300.0, 60.0)
    }

    #[test]
    fn test_ripple_exists_then_expires() {
        let mut field = RippleField::new();
        let t0 = Instant::now();

        field.spawn(10.0, 10.0, &rect(), t0);
        field.prune(t0);
        assert_eq!(field.len(), 1);

        // Just before the lifetime elapses the ripple is still live
        field.prune(t0 + Duration::from_millis(599));
        assert_eq!(field.len(), 1);

        // At 600 ms it is gone
        field.prune(t0 + RIPPLE_LIFETIME);
        assert!(field.is_empty());
    }

    #[test]
    fn test_concurrent_ripples_are_independent() {
        let mut field = RippleField::new();
        let t0 = Instant::now();

        field.spawn(5.0, 5.0, &rect(), t0);
        field.spawn(50.0, 20.0, &rect(), t0 + Duration::from_millis(300));
        assert_eq!(field.len(), 2);

        // The first expires alone; the second keeps running
        field.prune(t0 + Duration::from_millis(700));
        assert_eq!(field.len(), 1);

        field.prune(t0 + Duration::from_millis(900));
        assert!(field.is_empty());
    }

    #[test]
    fn test_ripple_sized_to_larger_dimension() {
        let mut field = RippleField::new();
        field.spawn(0.0, 0.0, &rect(), Instant::now());
        let ripple = field.iter().next().unwrap();
        assert_eq!(ripple.diameter_px, 300.0);
    }

    #[test]
    fn test_growth_and_fade() {
        let mut field = RippleField::new();
        let t0 = Instant::now();
        field.spawn(0.0, 0.0, &rect(), t0);
        let ripple = field.iter().next().unwrap();

        assert_eq!(ripple.radius_px(t0), 0.0);
        assert_eq!(ripple.intensity(t0), 1.0);

        let half = t0 + Duration::from_millis(300);
        assert!((ripple.progress(half) - 0.5).abs() < 0.01);
        assert!((ripple.radius_px(half) - 300.0).abs() < 5.0); // 150 * 4 * 0.5

        let done = t0 + RIPPLE_LIFETIME;
        assert_eq!(ripple.progress(done), 1.0);
        assert_eq!(ripple.intensity(done), 0.0);
    }

    #[test]
    fn test_spawn_centered() {
        let mut field = RippleField::new();
        field.spawn_centered(&rect(), Instant::now());
        let ripple = field.iter().next().unwrap();
        assert_eq!((ripple.center_x, ripple.center_y), (150.0, 30.0));
    }
}
