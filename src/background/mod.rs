//! Background layer: geodesic grid plus floating particles.
//!
//! The layer is a container of generated elements. A rebuild is always a
//! full clear-and-regenerate with fresh randomness, never an incremental
//! update - resize discards every prior element.

pub mod grid;
pub mod particle;

pub use grid::{
    build_grid, GridLine, GridNode, Orientation, DIAGONAL_STEP, GRID_DIVISIONS,
    NODE_DELAY_MAX_SECS, NODE_STEP,
};
pub use particle::{
    particle_count, spawn_particle, Particle, NARROW_PARTICLE_COUNT, NARROW_VIEWPORT_PX,
    PARTICLE_DELAY_MAX_SECS, PARTICLE_DURATION_MAX_SECS, PARTICLE_DURATION_MIN_SECS,
    PARTICLE_SIZE_MAX_PX, PARTICLE_SIZE_MIN_PX, WIDE_PARTICLE_COUNT,
};

use crate::random::RandomSource;

/// Generated backdrop elements for one viewport generation.
#[derive(Debug, Default)]
pub struct BackgroundLayer {
    lines: Vec<GridLine>,
    nodes: Vec<GridNode>,
    particles: Vec<Particle>,
}

impl BackgroundLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard all elements and regenerate from scratch for the given
    /// viewport width. Running it twice leaves exactly one generation.
    pub fn rebuild(&mut self, rng: &mut dyn RandomSource, viewport_px_width: u16) {
        self.clear();

        let (lines, nodes) = build_grid(rng);
        self.lines = lines;
        self.nodes = nodes;

        let count = particle_count(viewport_px_width);
        self.particles.reserve(count);
        for _ in 0..count {
            self.particles.push(spawn_particle(rng));
        }
    }

    /// Remove every generated element.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.nodes.clear();
        self.particles.clear();
    }

    pub fn lines(&self) -> &[GridLine] {
        &self.lines
    }

    pub fn nodes(&self) -> &[GridNode] {
        &self.nodes
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Total generated element count (lines + nodes + particles).
    pub fn element_count(&self) -> usize {
        self.lines.len() + self.nodes.len() + self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.element_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::EntropySource;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rebuild_populates_layer() {
        let mut layer = BackgroundLayer::new();
        assert!(layer.is_empty());

        let mut rng = EntropySource::with_seed(1);
        layer.rebuild(&mut rng, 1024);

        assert_eq!(layer.lines().len(), 21 + 21 + 25 + 25);
        assert_eq!(layer.nodes().len(), 121);
        assert_eq!(layer.particles().len(), 20);
    }

    #[test]
    fn test_narrow_viewport_particle_count() {
        let mut layer = BackgroundLayer::new();
        let mut rng = EntropySource::with_seed(2);
        layer.rebuild(&mut rng, 640);
        assert_eq!(layer.particles().len(), 10);
    }

    #[test]
    fn test_rebuild_is_idempotent_on_count() {
        // Rebuilding twice must match a single fresh generation: the old
        // elements are fully discarded, not appended to.
        let mut layer = BackgroundLayer::new();
        let mut rng = EntropySource::with_seed(3);

        layer.rebuild(&mut rng, 1024);
        let fresh_count = layer.element_count();

        layer.rebuild(&mut rng, 1024);
        layer.rebuild(&mut rng, 1024);
        assert_eq!(layer.element_count(), fresh_count);
    }

    #[test]
    fn test_rebuild_across_breakpoint_swaps_particle_count() {
        let mut layer = BackgroundLayer::new();
        let mut rng = EntropySource::with_seed(4);

        layer.rebuild(&mut rng, 1024);
        assert_eq!(layer.particles().len(), 20);

        layer.rebuild(&mut rng, 500);
        assert_eq!(layer.particles().len(), 10);
    }

    #[test]
    fn test_rebuild_uses_fresh_randomness() {
        let mut layer = BackgroundLayer::new();
        let mut rng = EntropySource::with_seed(5);

        layer.rebuild(&mut rng, 1024);
        let first: Vec<Particle> = layer.particles().to_vec();

        layer.rebuild(&mut rng, 1024);
        let second: Vec<Particle> = layer.particles().to_vec();

        // Same count, different draws
        assert_eq!(first.len(), second.len());
        assert_ne!(first, second);
    }

    #[test]
    fn test_clear_empties_layer() {
        let mut layer = BackgroundLayer::new();
        let mut rng = EntropySource::with_seed(6);
        layer.rebuild(&mut rng, 1024);
        assert!(!layer.is_empty());

        layer.clear();
        assert!(layer.is_empty());
        assert_eq!(layer.element_count(), 0);
    }
}
