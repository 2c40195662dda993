//! Frame composition.
//!
//! Maps the pixel-space scene onto the cell grid: backdrop lattice,
//! particles, buttons with their interaction variants, live ripples, and
//! the title. Pure - no terminal I/O here.

use std::time::Instant;

use crate::background::{BackgroundLayer, Orientation};
use crate::renderer::buffer::FrameBuffer;
use crate::scene::Scene;
use crate::theme::{button_variant, ripple_style, Theme};
use crate::types::{Attr, Cell, Rgba, Viewport};

/// Page fade-in duration after the loaded mark, seconds.
pub const LOAD_FADE_SECS: f32 = 0.8;

/// Node pulse cycle, seconds.
const NODE_PULSE_SECS: f32 = 2.0;

/// Title baseline in scene px.
const TITLE_Y_PX: f32 = 60.0;

/// Compose one frame of the scene into `buffer`.
///
/// `now` drives the one-shot clocks (ripples, typewriter); `elapsed_secs`
/// is time since mount and drives the looping background animations and
/// the fade-in.
pub fn draw_scene(scene: &Scene, now: Instant, elapsed_secs: f32, buffer: &mut FrameBuffer) {
    let theme = scene.theme().clone();
    let viewport = scene.viewport();

    buffer.clear(theme.background);

    // CSS-driven fade-in equivalent: everything lerps up from the
    // background color until the page has been loaded for LOAD_FADE_SECS.
    let fade = if scene.is_loaded() {
        (elapsed_secs / LOAD_FADE_SECS).clamp(0.0, 1.0)
    } else {
        0.0
    };
    if fade == 0.0 {
        return;
    }

    if let Some(background) = scene.background() {
        draw_background(background, &theme, &viewport, elapsed_secs, fade, buffer);
    }

    draw_buttons(scene, &theme, &viewport, now, fade, buffer);
    draw_title(scene, &theme, &viewport, now, fade, buffer);
}

// =============================================================================
// Background
// =============================================================================

fn draw_background(
    background: &BackgroundLayer,
    theme: &Theme,
    viewport: &Viewport,
    elapsed_secs: f32,
    fade: f32,
    buffer: &mut FrameBuffer,
) {
    let bg = theme.background;
    let width_px = viewport.px_width as f32;
    let height_px = viewport.px_height as f32;

    for line in background.lines() {
        let x0 = line.left_pct / 100.0 * width_px;
        let y0 = line.top_pct / 100.0 * height_px;

        match line.orientation {
            Orientation::Horizontal => {
                let row = viewport.row_at_px(y0);
                let fg = Rgba::lerp(bg, theme.grid_line, fade);
                for col in 0..viewport.cols {
                    put_glyph(buffer, col as i32, row, '─', fg, bg);
                }
            }
            Orientation::Vertical => {
                let col = viewport.col_at_px(x0);
                let fg = Rgba::lerp(bg, theme.grid_line, fade);
                for row in 0..viewport.rows {
                    put_glyph(buffer, col, row as i32, '│', fg, bg);
                }
            }
            Orientation::DiagonalDown | Orientation::DiagonalUp => {
                // The diagonal spans length/sqrt(2) horizontally; walk it
                // one cell column at a time.
                let extent_px = line.length_pct / 100.0 * width_px / std::f32::consts::SQRT_2;
                let steps = (extent_px / viewport.cell_width_px()).ceil() as i32;
                let (glyph, dir) = match line.orientation {
                    Orientation::DiagonalDown => ('╲', 1.0),
                    _ => ('╱', -1.0),
                };
                let fg = Rgba::lerp(bg, theme.grid_diagonal, fade);
                for step in 0..steps {
                    let offset = step as f32 * viewport.cell_width_px();
                    let col = viewport.col_at_px(x0 + offset);
                    let row = viewport.row_at_px(y0 + dir * offset);
                    put_glyph(buffer, col, row, glyph, fg, bg);
                }
            }
        }
    }

    for node in background.nodes() {
        let col = viewport.col_at_px(node.left_pct / 100.0 * width_px);
        let row = viewport.row_at_px(node.top_pct / 100.0 * height_px);
        let pulse = node_pulse(elapsed_secs, node.delay_secs);
        let fg = Rgba::lerp(bg, theme.grid_node, fade * pulse);
        put_glyph(buffer, col, row, '+', fg, bg);
    }

    for particle in background.particles() {
        let x = particle.left_pct / 100.0 * width_px;
        let y = particle.top_pct / 100.0 * height_px + particle.drift_px(elapsed_secs);
        let col = viewport.col_at_px(x);
        let row = viewport.row_at_px(y);
        let glyph = particle_glyph(particle.size_px);
        let fg = Rgba::lerp(bg, theme.particle, fade * particle.intensity(elapsed_secs));
        put_glyph(buffer, col, row, glyph, fg, bg);
    }
}

/// Node brightness over its pulse cycle; dormant until the delay elapses.
fn node_pulse(elapsed_secs: f32, delay_secs: f32) -> f32 {
    let active = elapsed_secs - delay_secs;
    if active < 0.0 {
        return 0.25;
    }
    let phase = (active / NODE_PULSE_SECS) * std::f32::consts::TAU;
    0.25 + 0.75 * (phase.sin() * 0.5 + 0.5)
}

/// Bigger particles get heavier glyphs.
fn particle_glyph(size_px: f32) -> char {
    if size_px < 4.0 {
        '·'
    } else if size_px < 6.0 {
        '•'
    } else {
        '●'
    }
}

// =============================================================================
// Buttons
// =============================================================================

fn draw_buttons(
    scene: &Scene,
    theme: &Theme,
    viewport: &Viewport,
    now: Instant,
    fade: f32,
    buffer: &mut FrameBuffer,
) {
    let ripple_block = ripple_style(theme);

    for id in scene.button_ids() {
        let Some(button) = scene.button(id) else {
            continue;
        };
        let Some(rect) = scene.screen_rect(id) else {
            continue;
        };

        let variant = button_variant(
            theme,
            scene.focused() == Some(id),
            button.is_hovered(),
            button.is_animated(),
        );

        let col0 = viewport.col_at_px(rect.x);
        let col1 = viewport.col_at_px(rect.right() - 1.0);
        let row0 = viewport.row_at_px(rect.y);
        let row1 = viewport.row_at_px(rect.bottom() - 1.0);
        if col1 <= col0 || row1 <= row0 {
            continue;
        }

        let bg = Rgba::lerp(theme.background, variant.bg, fade);
        let border_fg = Rgba::lerp(theme.background, variant.border, fade);
        let label_fg = Rgba::lerp(theme.background, variant.fg, fade);

        // Fill plus border
        for row in row0..=row1 {
            for col in col0..=col1 {
                let on_edge = row == row0 || row == row1 || col == col0 || col == col1;
                let ch = if on_edge {
                    border_glyph(col, row, col0, col1, row0, row1)
                } else {
                    ' '
                };
                let cell = Cell {
                    ch,
                    fg: border_fg,
                    bg,
                    attrs: Attr::NONE,
                };
                buffer.set_signed(col, row, cell);
            }
        }

        // Ripples tint the fill, clipped to the button (overflow hidden)
        for ripple in button.ripples().iter() {
            let cx = rect.x + ripple.center_x;
            let cy = rect.y + ripple.center_y;
            let radius = ripple.radius_px(now);
            let strength = ripple.intensity(now) * ripple_block.opacity;
            let band = viewport.cell_height_px().max(viewport.cell_width_px());

            for row in (row0 + 1)..row1 {
                for col in (col0 + 1)..col1 {
                    if col < 0 || row < 0 {
                        continue;
                    }
                    let (px, py) = viewport.px_at_cell(col as u16, row as u16);
                    let dist = ((px - cx).powi(2) + (py - cy).powi(2)).sqrt();
                    if dist <= radius && dist >= radius - band * 2.0 {
                        if let Some(cell) = buffer.get(col as u16, row as u16) {
                            let tinted = Cell {
                                bg: Rgba::lerp(cell.bg, ripple_block.color, strength),
                                ..*cell
                            };
                            buffer.set(col as u16, row as u16, tinted);
                        }
                    }
                }
            }
        }

        // Centered label on the middle row
        let label = button.label();
        let mid_row = (row0 + row1) / 2;
        let inner_width = (col1 - col0 - 1).max(0) as usize;
        let shown: String = label.chars().take(inner_width).collect();
        let start = col0 + 1 + ((inner_width.saturating_sub(shown.chars().count())) / 2) as i32;
        for (i, ch) in shown.chars().enumerate() {
            if let Some(existing) = cell_at_signed(buffer, start + i as i32, mid_row) {
                let cell = Cell {
                    ch,
                    fg: label_fg,
                    bg: existing.bg,
                    attrs: variant.attrs,
                };
                buffer.set_signed(start + i as i32, mid_row, cell);
            }
        }
    }
}

fn border_glyph(col: i32, row: i32, col0: i32, col1: i32, row0: i32, row1: i32) -> char {
    match (col == col0, col == col1, row == row0, row == row1) {
        (true, _, true, _) => '╭',
        (_, true, true, _) => '╮',
        (true, _, _, true) => '╰',
        (_, true, _, true) => '╯',
        (_, _, true, _) | (_, _, _, true) => '─',
        _ => '│',
    }
}

fn cell_at_signed(buffer: &FrameBuffer, col: i32, row: i32) -> Option<Cell> {
    if col < 0 || row < 0 {
        return None;
    }
    buffer.get(col as u16, row as u16).copied()
}

// =============================================================================
// Title
// =============================================================================

fn draw_title(
    scene: &Scene,
    theme: &Theme,
    viewport: &Viewport,
    now: Instant,
    fade: f32,
    buffer: &mut FrameBuffer,
) {
    let Some(title) = scene.visible_title(now) else {
        return;
    };
    if title.is_empty() {
        return;
    }

    let row = viewport.row_at_px(TITLE_Y_PX - scene.scroll_y());
    let chars: Vec<char> = title.chars().collect();
    let start = (viewport.cols as i32 - chars.len() as i32) / 2;
    let fg = Rgba::lerp(theme.background, theme.title, fade);

    for (i, &ch) in chars.iter().enumerate() {
        let cell = Cell {
            ch,
            fg,
            bg: theme.background,
            attrs: Attr::BOLD,
        };
        buffer.set_signed(start + i as i32, row, cell);
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn put_glyph(buffer: &mut FrameBuffer, col: i32, row: i32, ch: char, fg: Rgba, bg: Rgba) {
    buffer.set_signed(
        col,
        row,
        Cell {
            ch,
            fg,
            bg,
            attrs: Attr::NONE,
        },
    );
}

// =============================================================================
// Tests
// =============================================================================
