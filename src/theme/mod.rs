//! Theme system.
//!
//! Semantic colors for every scene element, a handful of presets, and the
//! variant styles for button interaction states. The ripple style block is
//! defined here and registered once at mount - the single injected
//! "stylesheet" of the scene.

use std::time::Duration;

use crate::types::{Attr, Rgba};

// =============================================================================
// Theme
// =============================================================================

/// Semantic colors for the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub grid_line: Rgba,
    pub grid_diagonal: Rgba,
    pub grid_node: Rgba,
    pub particle: Rgba,
    pub button_bg: Rgba,
    pub button_fg: Rgba,
    pub button_border: Rgba,
    pub focus_border: Rgba,
    pub ripple: Rgba,
    pub title: Rgba,
}

impl Default for Theme {
    fn default() -> Self {
        midnight()
    }
}

// =============================================================================
// Presets
// =============================================================================

/// Deep blue-black backdrop with cyan accents.
pub fn midnight() -> Theme {
    Theme {
        name: "midnight",
        background: Rgba::rgb(8, 12, 24),
        grid_line: Rgba::rgb(24, 34, 56),
        grid_diagonal: Rgba::rgb(32, 46, 74),
        grid_node: Rgba::rgb(64, 160, 192),
        particle: Rgba::rgb(120, 200, 255),
        button_bg: Rgba::rgb(18, 26, 46),
        button_fg: Rgba::rgb(214, 226, 240),
        button_border: Rgba::rgb(52, 72, 110),
        focus_border: Rgba::rgb(92, 200, 245),
        ripple: Rgba::rgb(255, 255, 255),
        title: Rgba::rgb(235, 242, 250),
    }
}

/// Warm dusk tones.
pub fn ember() -> Theme {
    Theme {
        name: "ember",
        background: Rgba::rgb(20, 10, 8),
        grid_line: Rgba::rgb(48, 28, 22),
        grid_diagonal: Rgba::rgb(64, 38, 28),
        grid_node: Rgba::rgb(208, 120, 64),
        particle: Rgba::rgb(255, 180, 120),
        button_bg: Rgba::rgb(42, 22, 16),
        button_fg: Rgba::rgb(244, 228, 214),
        button_border: Rgba::rgb(110, 62, 44),
        focus_border: Rgba::rgb(250, 160, 92),
        ripple: Rgba::rgb(255, 236, 210),
        title: Rgba::rgb(250, 240, 228),
    }
}

/// Green-on-black phosphor look.
pub fn phosphor() -> Theme {
    Theme {
        name: "phosphor",
        background: Rgba::rgb(2, 8, 4),
        grid_line: Rgba::rgb(10, 34, 16),
        grid_diagonal: Rgba::rgb(14, 44, 20),
        grid_node: Rgba::rgb(64, 200, 96),
        particle: Rgba::rgb(140, 255, 170),
        button_bg: Rgba::rgb(8, 28, 14),
        button_fg: Rgba::rgb(190, 250, 205),
        button_border: Rgba::rgb(32, 96, 48),
        focus_border: Rgba::rgb(110, 255, 150),
        ripple: Rgba::rgb(220, 255, 230),
        title: Rgba::rgb(215, 255, 225),
    }
}

/// Look up a preset by name.
pub fn get_preset(name: &str) -> Option<Theme> {
    match name {
        "midnight" => Some(midnight()),
        "ember" => Some(ember()),
        "phosphor" => Some(phosphor()),
        _ => None,
    }
}

/// Names of all built-in presets.
pub fn preset_names() -> &'static [&'static str] {
    &["midnight", "ember", "phosphor"]
}

// =============================================================================
// Button Variants
// =============================================================================

/// Resolved style for one button interaction state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonVariant {
    pub bg: Rgba,
    pub fg: Rgba,
    pub border: Rgba,
    pub attrs: Attr,
}

/// Resolve the button style for the given interaction state.
///
/// Buttons that have not yet triggered their entrance animation render
/// dimmed; hover brightens; focus swaps the border and bolds the label.
pub fn button_variant(theme: &Theme, focused: bool, hovered: bool, animated: bool) -> ButtonVariant {
    let mut bg = theme.button_bg;
    let mut fg = theme.button_fg;
    let mut border = theme.button_border;
    let mut attrs = Attr::NONE;

    if !animated {
        bg = bg.dim(0.55);
        fg = fg.dim(0.55);
        border = border.dim(0.55);
    }

    if hovered {
        bg = Rgba::lerp(bg, Rgba::WHITE, 0.08);
        border = Rgba::lerp(border, Rgba::WHITE, 0.2);
    }

    if focused {
        border = theme.focus_border;
        attrs |= Attr::BOLD;
    }

    ButtonVariant {
        bg,
        fg,
        border,
        attrs,
    }
}

// =============================================================================
// Ripple Style
// =============================================================================

/// Appearance of click ripples: the one style block the scene injects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleStyle {
    pub color: Rgba,
    /// Peak opacity at spawn; fades linearly to zero.
    pub opacity: f32,
    pub max_scale: f32,
    pub lifetime: Duration,
}

/// Build the ripple style block for a theme.
pub fn ripple_style(theme: &Theme) -> RippleStyle {
    RippleStyle {
        color: theme.ripple,
        opacity: 0.3,
        max_scale: crate::effects::RIPPLE_MAX_SCALE,
        lifetime: crate::effects::RIPPLE_LIFETIME,
    }
}

// =============================================================================
// Tests
// =============================================================================
