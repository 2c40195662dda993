//! Geodesic grid construction.
//!
//! The backdrop lattice is deterministic: guide lines at even percentage
//! offsets, diagonal accents at every 4th intersection, decorative nodes at
//! every 2nd. Randomness only affects node pulse delays.

use crate::random::RandomSource;

/// Grid resolution: the backdrop is divided into `GRID_DIVISIONS` cells per
/// axis, producing `GRID_DIVISIONS + 1` guide lines per orientation.
pub const GRID_DIVISIONS: usize = 20;

/// Diagonal accents are anchored at every `DIAGONAL_STEP`th intersection.
pub const DIAGONAL_STEP: usize = 4;

/// Nodes sit at every `NODE_STEP`th intersection.
pub const NODE_STEP: usize = 2;

/// Node pulse delays are drawn from `[0, NODE_DELAY_MAX_SECS)`.
pub const NODE_DELAY_MAX_SECS: f32 = 4.0;

/// Guide line orientation.
///
/// Diagonals are anchored at an intersection and extend at 45 degrees,
/// rotated about their left-center origin: `DiagonalDown` toward
/// bottom-right, `DiagonalUp` toward top-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
    DiagonalDown,
    DiagonalUp,
}

/// A single guide line, positioned in percent of the container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    pub orientation: Orientation,
    pub left_pct: f32,
    pub top_pct: f32,
    /// Extent along the line's direction, in percent of the container width.
    pub length_pct: f32,
}

/// A decorative node at a major intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridNode {
    pub left_pct: f32,
    pub top_pct: f32,
    pub delay_secs: f32,
}

/// Build the full lattice: guide lines, diagonal accents, and nodes.
///
/// The random source is consumed only for node delays.
pub fn build_grid(rng: &mut dyn RandomSource) -> (Vec<GridLine>, Vec<GridNode>) {
    let cell = 100.0 / GRID_DIVISIONS as f32;
    let mut lines = Vec::new();

    // Horizontal guide lines
    for i in 0..=GRID_DIVISIONS {
        lines.push(GridLine {
            orientation: Orientation::Horizontal,
            left_pct: 0.0,
            top_pct: i as f32 * cell,
            length_pct: 100.0,
        });
    }

    // Vertical guide lines
    for i in 0..=GRID_DIVISIONS {
        lines.push(GridLine {
            orientation: Orientation::Vertical,
            left_pct: i as f32 * cell,
            top_pct: 0.0,
            length_pct: 100.0,
        });
    }

    // Diagonal accents at every 4th intersection, both orientations.
    // Each spans 4 cells of hypotenuse, anchored at the intersection.
    let diagonal_len = cell * std::f32::consts::SQRT_2 * DIAGONAL_STEP as f32;
    for i in (0..=GRID_DIVISIONS).step_by(DIAGONAL_STEP) {
        for j in (0..=GRID_DIVISIONS).step_by(DIAGONAL_STEP) {
            if i < GRID_DIVISIONS && j < GRID_DIVISIONS {
                lines.push(GridLine {
                    orientation: Orientation::DiagonalDown,
                    left_pct: j as f32 * cell,
                    top_pct: i as f32 * cell,
                    length_pct: diagonal_len,
                });
            }
            if i < GRID_DIVISIONS && j >= DIAGONAL_STEP {
                lines.push(GridLine {
                    orientation: Orientation::DiagonalUp,
                    left_pct: j as f32 * cell,
                    top_pct: i as f32 * cell,
                    length_pct: diagonal_len,
                });
            }
        }
    }

    // Nodes at every 2nd intersection with a randomized pulse delay
    let mut nodes = Vec::new();
    for i in (0..=GRID_DIVISIONS).step_by(NODE_STEP) {
        for j in (0..=GRID_DIVISIONS).step_by(NODE_STEP) {
            nodes.push(GridNode {
                left_pct: j as f32 * cell,
                top_pct: i as f32 * cell,
                delay_secs: rng.range_f32(0.0, NODE_DELAY_MAX_SECS),
            });
        }
    }

    (lines, nodes)
}
