//! Hover feedback.
//!
//! Pointer-enter lifts and slightly scales a button; pointer-leave restores
//! the neutral transform. Purely presentational - nothing is retained
//! between events.

use crate::types::PxRect;

/// Lift applied on hover, px upward.
pub const HOVER_LIFT_PX: f32 = 5.0;

/// Scale applied on hover.
pub const HOVER_SCALE: f32 = 1.02;

/// A vertical-lift-plus-scale transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverTransform {
    pub lift_px: f32,
    pub scale: f32,
}

impl HoverTransform {
    /// The resting transform: no lift, identity scale.
    pub const NEUTRAL: Self = Self {
        lift_px: 0.0,
        scale: 1.0,
    };

    /// The hovered transform.
    pub const LIFTED: Self = Self {
        lift_px: HOVER_LIFT_PX,
        scale: HOVER_SCALE,
    };

    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }

    /// Apply the transform to a rect: lift upward, scale about the center.
    pub fn apply_to(&self, rect: &PxRect) -> PxRect {
        let width = rect.width * self.scale;
        let height = rect.height * self.scale;
        PxRect {
            x: rect.x - (width - rect.width) / 2.0,
            y: rect.y - (height - rect.height) / 2.0 - self.lift_px,
            width,
            height,
        }
    }
}

impl Default for HoverTransform {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_is_identity() {
        let rect = PxRect::new(100.0, 200.0, 300.0, 60.0);
        assert_eq!(HoverTransform::NEUTRAL.apply_to(&rect), rect);
        assert!(HoverTransform::NEUTRAL.is_neutral());
    }

    #[test]
    fn test_lifted_moves_up_and_grows() {
        let rect = PxRect::new(100.0, 200.0, 300.0, 60.0);
        let lifted = HoverTransform::LIFTED.apply_to(&rect);

        assert!(!HoverTransform::LIFTED.is_neutral());
        assert!((lifted.width - 306.0).abs() < 1e-3);
        assert!((lifted.height - 61.2).abs() < 1e-3);
        // Centered growth plus 5 px lift
        assert!((lifted.x - 97.0).abs() < 1e-3);
        assert!((lifted.y - (200.0 - 0.6 - 5.0)).abs() < 1e-3);
    }

    #[test]
    fn test_enter_leave_round_trip() {
        let rect = PxRect::new(0.0, 0.0, 100.0, 40.0);
        let mut transform = HoverTransform::NEUTRAL;

        transform = HoverTransform::LIFTED; // pointer-enter
        assert_ne!(transform.apply_to(&rect), rect);

        transform = HoverTransform::NEUTRAL; // pointer-leave
        assert_eq!(transform.apply_to(&rect), rect);
    }
}
