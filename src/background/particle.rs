//! Floating particles.
//!
//! Each particle is an ephemeral visual element with randomized size,
//! position, and float-animation timing. Particles live until the layer is
//! rebuilt.

use crate::random::RandomSource;

/// Viewports narrower than this (px) get the reduced particle count.
pub const NARROW_VIEWPORT_PX: u16 = 768;

pub const NARROW_PARTICLE_COUNT: usize = 10;
pub const WIDE_PARTICLE_COUNT: usize = 20;

/// Particle size is drawn from `[MIN, MAX)` px.
pub const PARTICLE_SIZE_MIN_PX: f32 = 2.0;
pub const PARTICLE_SIZE_MAX_PX: f32 = 8.0;

/// Float animation delay is drawn from `[0, MAX)` seconds.
pub const PARTICLE_DELAY_MAX_SECS: f32 = 6.0;

/// Float animation duration is drawn from `[MIN, MAX)` seconds.
pub const PARTICLE_DURATION_MIN_SECS: f32 = 4.0;
pub const PARTICLE_DURATION_MAX_SECS: f32 = 8.0;

/// How far a particle drifts upward over one float cycle, in px.
pub const PARTICLE_DRIFT_PX: f32 = 18.0;

/// A floating particle with randomized visual attributes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub size_px: f32,
    pub left_pct: f32,
    pub top_pct: f32,
    pub delay_secs: f32,
    pub duration_secs: f32,
}

impl Particle {
    /// Phase of the float animation in `[0, 1)`, or `None` before the
    /// particle's delay has elapsed (the animation has not started yet).
    pub fn phase(&self, elapsed_secs: f32) -> Option<f32> {
        let active = elapsed_secs - self.delay_secs;
        if active < 0.0 {
            return None;
        }
        Some((active / self.duration_secs).fract())
    }

    /// Vertical drift offset (px) at the given elapsed time. Rises then
    /// settles back over one cycle.
    pub fn drift_px(&self, elapsed_secs: f32) -> f32 {
        match self.phase(elapsed_secs) {
            Some(phase) => -(phase * std::f32::consts::TAU).sin().max(0.0) * PARTICLE_DRIFT_PX,
            None => 0.0,
        }
    }

    /// Brightness of the particle at the given elapsed time, `[0, 1]`.
    /// Fades in and out across the cycle; dormant particles stay faint.
    pub fn intensity(&self, elapsed_secs: f32) -> f32 {
        match self.phase(elapsed_secs) {
            Some(phase) => (phase * std::f32::consts::PI).sin().clamp(0.15, 1.0),
            None => 0.15,
        }
    }
}

/// Particle count for a viewport width: reduced on narrow viewports.
pub fn particle_count(viewport_px_width: u16) -> usize {
    if viewport_px_width < NARROW_VIEWPORT_PX {
        NARROW_PARTICLE_COUNT
    } else {
        WIDE_PARTICLE_COUNT
    }
}

/// Spawn one particle with randomized attributes.
pub fn spawn_particle(rng: &mut dyn RandomSource) -> Particle {
    Particle {
        size_px: rng.range_f32(PARTICLE_SIZE_MIN_PX, PARTICLE_SIZE_MAX_PX),
        left_pct: rng.range_f32(0.0, 100.0),
        top_pct: rng.range_f32(0.0, 100.0),
        delay_secs: rng.range_f32(0.0, PARTICLE_DELAY_MAX_SECS),
        duration_secs: rng.range_f32(PARTICLE_DURATION_MIN_SECS, PARTICLE_DURATION_MAX_SECS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{EntropySource, StepSource};

    #[test]
    fn test_particle_count_breakpoint() {
        assert_eq!(particle_count(0), 10);
        assert_eq!(particle_count(767), 10);
        assert_eq!(particle_count(768), 20);
        assert_eq!(particle_count(1920), 20);
    }

    #[test]
    fn test_spawn_attribute_bounds() {
        let mut rng = EntropySource::with_seed(5);
        for _ in 0..500 {
            let p = spawn_particle(&mut rng);
            assert!((PARTICLE_SIZE_MIN_PX..PARTICLE_SIZE_MAX_PX).contains(&p.size_px));
            assert!((0.0..100.0).contains(&p.left_pct));
            assert!((0.0..100.0).contains(&p.top_pct));
            assert!((0.0..PARTICLE_DELAY_MAX_SECS).contains(&p.delay_secs));
            assert!(
                (PARTICLE_DURATION_MIN_SECS..PARTICLE_DURATION_MAX_SECS)
                    .contains(&p.duration_secs)
            );
        }
    }

    #[test]
    fn test_spawn_exact_extremes() {
        // Minimum draw maps to the lower bound of every range
        let mut low = StepSource::constant(0.0);
        let p = spawn_particle(&mut low);
        assert_eq!(p.size_px, PARTICLE_SIZE_MIN_PX);
        assert_eq!(p.left_pct, 0.0);
        assert_eq!(p.delay_secs, 0.0);
        assert_eq!(p.duration_secs, PARTICLE_DURATION_MIN_SECS);

        // A draw near 1 stays strictly below the upper bound
        let mut high = StepSource::constant(0.999_999);
        let p = spawn_particle(&mut high);
        assert!(p.size_px < PARTICLE_SIZE_MAX_PX);
        assert!(p.left_pct < 100.0);
        assert!(p.duration_secs < PARTICLE_DURATION_MAX_SECS);
    }

    #[test]
    fn test_phase_respects_delay() {
        let p = Particle {
            size_px: 4.0,
            left_pct: 50.0,
            top_pct: 50.0,
            delay_secs: 2.0,
            duration_secs: 4.0,
        };
        assert_eq!(p.phase(1.9), None);
        assert_eq!(p.phase(2.0), Some(0.0));
        assert_eq!(p.phase(4.0), Some(0.5));
        assert_eq!(p.phase(6.0), Some(0.0)); // wrapped
    }

    #[test]
    fn test_dormant_particle_is_faint_and_still() {
        let p = Particle {
            size_px: 4.0,
            left_pct: 0.0,
            top_pct: 0.0,
            delay_secs: 5.0,
            duration_secs: 4.0,
        };
        assert_eq!(p.drift_px(1.0), 0.0);
        assert_eq!(p.intensity(1.0), 0.15);
    }
}
