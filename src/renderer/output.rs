//! Terminal output.
//!
//! Differential renderer: compares the current frame to the previous one
//! and only writes cells that changed, wrapped in a single flush. Also owns
//! fullscreen setup/teardown (raw mode, alternate screen, mouse capture).

use std::io::{self, Stdout, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::queue;
use crossterm::style::{
    Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};

use crate::renderer::buffer::FrameBuffer;
use crate::types::{Attr, Cell};

/// Differential renderer for fullscreen mode.
///
/// Keeps the previous frame so only changed cells are written.
pub struct DiffRenderer {
    out: Stdout,
    previous: Option<FrameBuffer>,
    last_fg: Option<Color>,
    last_bg: Option<Color>,
    last_attrs: Option<Attr>,
}

impl DiffRenderer {
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            previous: None,
            last_fg: None,
            last_bg: None,
            last_attrs: None,
        }
    }

    /// Render a frame, outputting only changed cells.
    ///
    /// Returns true if any cells were written.
    pub fn render(&mut self, buffer: &FrameBuffer) -> io::Result<bool> {
        let mut has_changes = false;
        self.reset_sgr_state();

        let same_size = self
            .previous
            .as_ref()
            .is_some_and(|p| p.width() == buffer.width() && p.height() == buffer.height());

        for (x, y, cell) in buffer.iter() {
            let changed = if same_size {
                match self.previous.as_ref().and_then(|p| p.get(x, y)) {
                    Some(prev) => prev != cell,
                    None => true,
                }
            } else {
                true
            };

            if changed {
                has_changes = true;
                self.write_cell(x, y, cell)?;
            }
        }

        if has_changes {
            self.out.flush()?;
        }
        self.previous = Some(buffer.clone());
        Ok(has_changes)
    }

    fn write_cell(&mut self, x: u16, y: u16, cell: &Cell) -> io::Result<()> {
        queue!(self.out, MoveTo(x, y))?;

        if self.last_attrs != Some(cell.attrs) {
            queue!(self.out, SetAttribute(Attribute::Reset))?;
            // Reset clears colors too
            self.last_fg = None;
            self.last_bg = None;
            for attr in attribute_list(cell.attrs) {
                queue!(self.out, SetAttribute(attr))?;
            }
            self.last_attrs = Some(cell.attrs);
        }

        let fg = cell.fg.to_crossterm();
        if self.last_fg != Some(fg) {
            queue!(self.out, SetForegroundColor(fg))?;
            self.last_fg = Some(fg);
        }
        let bg = cell.bg.to_crossterm();
        if self.last_bg != Some(bg) {
            queue!(self.out, SetBackgroundColor(bg))?;
            self.last_bg = Some(bg);
        }

        queue!(self.out, Print(cell.ch))
    }

    fn reset_sgr_state(&mut self) {
        self.last_fg = None;
        self.last_bg = None;
        self.last_attrs = None;
    }

    /// Invalidate the previous frame; the next render is a full redraw.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    /// Enter fullscreen: raw mode, alternate screen, hidden cursor, mouse
    /// capture.
    pub fn enter_fullscreen(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        queue!(
            self.out,
            EnterAlternateScreen,
            Hide,
            Clear(ClearType::All),
            EnableMouseCapture
        )?;
        self.out.flush()?;
        self.invalidate();
        Ok(())
    }

    /// Leave fullscreen and restore the terminal.
    pub fn exit_fullscreen(&mut self) -> io::Result<()> {
        queue!(
            self.out,
            DisableMouseCapture,
            SetAttribute(Attribute::Reset),
            Show,
            LeaveAlternateScreen
        )?;
        self.out.flush()?;
        disable_raw_mode()
    }
}

impl Default for DiffRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn attribute_list(attrs: Attr) -> impl Iterator<Item = Attribute> {
    [
        (Attr::BOLD, Attribute::Bold),
        (Attr::DIM, Attribute::Dim),
        (Attr::ITALIC, Attribute::Italic),
        (Attr::UNDERLINE, Attribute::Underlined),
    ]
    .into_iter()
    .filter_map(move |(flag, attr)| attrs.contains(flag).then_some(attr))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renderer_starts_without_previous() {
        let renderer = DiffRenderer::new();
        assert!(!renderer.has_previous());
    }

    #[test]
    fn test_invalidate_clears_previous() {
        let mut renderer = DiffRenderer::new();
        renderer.previous = Some(FrameBuffer::new(4, 4));
        assert!(renderer.has_previous());

        renderer.invalidate();
        assert!(!renderer.has_previous());
    }

    #[test]
    fn test_attribute_list() {
        let attrs = Attr::BOLD | Attr::UNDERLINE;
        let list: Vec<Attribute> = attribute_list(attrs).collect();
        assert_eq!(list, vec![Attribute::Bold, Attribute::Underlined]);
        assert_eq!(attribute_list(Attr::NONE).count(), 0);
    }
}
