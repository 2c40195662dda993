//! Interaction state systems.
//!
//! - **Keyboard** - Event types and crossterm conversion
//! - **Navigator** - Manual cyclic Tab traversal and activation
//! - **Visibility** - One-way entrance-animation triggers

pub mod keyboard;
pub mod navigator;
pub mod visibility;

pub use keyboard::{convert_key_event, KeyState, KeyboardEvent, Modifiers};
pub use navigator::{NavAction, Navigator};
pub use visibility::{
    VisibilityObserver, VisibilityOptions, BOTTOM_MARGIN_PX, VISIBILITY_THRESHOLD,
};
