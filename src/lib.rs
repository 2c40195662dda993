//! # lumen-tui
//!
//! Animated links-page scene for the terminal.
//!
//! Decorates a fullscreen terminal page with cosmetic effects: a geodesic
//! background lattice with floating particles, link buttons with
//! ripple/hover feedback, manual cyclic keyboard navigation, and one-shot
//! entrance animations triggered by viewport visibility.
//!
//! ## Architecture
//!
//! The scene is modeled in a pixel coordinate space - the terminal's
//! reported window pixel size, or fixed cell metrics as a fallback - and
//! mapped to character cells only at render time. Rendering is one reactive
//! effect (built on [spark-signals](https://github.com/RLabs-Inc/spark-signals))
//! over the viewport and frame-clock signals:
//!
//! ```text
//! Scene -> draw_scene -> FrameBuffer -> DiffRenderer
//! ```
//!
//! Everything is event-driven on a single thread: document-ready (mount),
//! resize, click, pointer move, keydown, and visibility changes are the
//! only suspension points.
//!
//! ## Example
//!
//! ```ignore
//! use lumen_tui::pipeline::{mount, run};
//! use lumen_tui::scene::{LinkButton, Scene, SceneOptions};
//!
//! let mut scene = Scene::new(SceneOptions {
//!     title: Some("My Links".into()),
//!     ..Default::default()
//! });
//! scene.add_button(LinkButton::new("Blog").on_activate(|| { /* open */ }));
//!
//! let mut handle = mount(scene)?;
//! run(&mut handle)?;
//! handle.unmount()?;
//! # std::io::Result::Ok(())
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Core types (Rgba, Cell, PxRect, Viewport)
//! - [`background`] - Geodesic grid and particle generation
//! - [`effects`] - Ripple, hover, and typewriter effects
//! - [`scene`] - Page model: buttons, title, scrolling, hit testing
//! - [`state`] - Keyboard events, navigator, visibility observer
//! - [`layout`] - Taffy-based button column layout
//! - [`theme`] - Semantic colors, presets, variant styles
//! - [`renderer`] - Frame buffer, scene composition, diff output
//! - [`pipeline`] - Mount, event loop, terminal signals

pub mod background;
pub mod effects;
pub mod layout;
pub mod pipeline;
pub mod random;
pub mod renderer;
pub mod scene;
pub mod state;
pub mod theme;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use background::{BackgroundLayer, GridLine, GridNode, Orientation, Particle};

pub use effects::{HoverTransform, Ripple, RippleField, Typewriter};

pub use scene::{LinkButton, Scene, SceneOptions};

pub use state::{
    // Keyboard
    convert_key_event, KeyState, KeyboardEvent, Modifiers,
    // Navigator
    NavAction, Navigator,
    // Visibility
    VisibilityObserver, VisibilityOptions,
};

pub use renderer::{draw_scene, DiffRenderer, FrameBuffer};

pub use pipeline::{mount, run, tick, MountHandle};

pub use theme::{
    button_variant, ember, get_preset, midnight, phosphor, preset_names, ripple_style,
    ButtonVariant, RippleStyle, Theme,
};

pub use random::{EntropySource, RandomSource, StepSource};
