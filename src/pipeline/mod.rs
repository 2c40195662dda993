//! Reactive pipeline.
//!
//! Wires the scene to the terminal:
//!
//! ```text
//! Scene -> draw_scene -> FrameBuffer -> DiffRenderer
//!            ^ re-run by the render effect on viewport / frame signals
//! ```
//!
//! Only the render effect touches the terminal; everything upstream is a
//! pure computation over the scene.

pub mod mount;
pub mod terminal;

pub use mount::{mount, run, tick, MountHandle};
pub use terminal::{advance_frame, detect_viewport, frame, set_viewport, viewport};
