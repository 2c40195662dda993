//! Transient visual feedback attached to interactive buttons.

pub mod hover;
pub mod ripple;
pub mod typewriter;

pub use hover::{HoverTransform, HOVER_LIFT_PX, HOVER_SCALE};
pub use ripple::{Ripple, RippleField, RIPPLE_LIFETIME, RIPPLE_MAX_SCALE};
pub use typewriter::{Typewriter, TYPE_INTERVAL};
