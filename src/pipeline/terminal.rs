//! Terminal state signals.
//!
//! Reactive viewport and frame-clock state. The render effect subscribes to
//! both: a viewport change or a frame advance re-runs it. Pixel dimensions
//! come from the terminal's reported window size when available, with fixed
//! cell metrics as the fallback.

use spark_signals::{signal, Signal};

use crate::types::Viewport;

thread_local! {
    static VIEWPORT: Signal<Viewport> = signal(Viewport::default());
    static FRAME_CLOCK: Signal<u64> = signal(0);
}

/// Current viewport. Creates a reactive dependency inside effects.
pub fn viewport() -> Viewport {
    VIEWPORT.with(|s| s.get())
}

/// Replace the viewport (resize handling, tests).
pub fn set_viewport(viewport: Viewport) {
    VIEWPORT.with(|s| s.set(viewport));
}

/// Current frame counter. Creates a reactive dependency inside effects.
pub fn frame() -> u64 {
    FRAME_CLOCK.with(|s| s.get())
}

/// Advance the frame clock; re-runs the render effect.
pub fn advance_frame() {
    FRAME_CLOCK.with(|s| {
        let next = s.get().wrapping_add(1);
        s.set(next);
    });
}

/// Query the terminal for its size and publish the viewport signal.
///
/// Falls back to 80x24 cells when the query fails (e.g. not a tty) and to
/// fixed cell metrics when the terminal reports no pixel size.
pub fn detect_viewport() -> Viewport {
    let (cols, rows) = crossterm::terminal::size().unwrap_or((80, 24));
    let (px_width, px_height) = match crossterm::terminal::window_size() {
        Ok(ws) => (ws.width, ws.height),
        Err(_) => (0, 0),
    };
    let viewport = Viewport::new(cols, rows, px_width, px_height);
    set_viewport(viewport);
    viewport
}

/// Reset terminal state (for testing).
pub fn reset_terminal_state() {
    VIEWPORT.with(|s| s.set(Viewport::default()));
    FRAME_CLOCK.with(|s| s.set(0));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_signal_round_trip() {
        reset_terminal_state();
        assert_eq!(viewport(), Viewport::default());

        let vp = Viewport::new(120, 40, 1440, 900);
        set_viewport(vp);
        assert_eq!(viewport(), vp);
    }

    #[test]
    fn test_frame_clock_advances() {
        reset_terminal_state();
        assert_eq!(frame(), 0);
        advance_frame();
        advance_frame();
        assert_eq!(frame(), 2);
    }

    #[test]
    fn test_effect_reruns_on_frame_advance() {
        use spark_signals::effect;
        use std::cell::Cell;
        use std::rc::Rc;

        reset_terminal_state();
        let runs = Rc::new(Cell::new(0u32));
        let runs_clone = runs.clone();

        let stop = effect(move || {
            let _ = frame();
            runs_clone.set(runs_clone.get() + 1);
        });

        let initial = runs.get();
        advance_frame();
        assert!(runs.get() > initial);
        stop();
    }
}
