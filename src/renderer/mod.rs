//! Terminal renderer: frame buffer, scene composition, diff output.

pub mod buffer;
pub mod draw;
pub mod output;

pub use buffer::FrameBuffer;
pub use draw::{draw_scene, LOAD_FADE_SECS};
pub use output::DiffRenderer;
