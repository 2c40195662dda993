//! Keyboard navigator.
//!
//! Manual cyclic focus traversal over the link buttons, overriding the
//! default tab order. The cursor is explicit state owned by a context
//! object constructed at startup, not a free global.
//!
//! The button sequence is captured once at registration time and is NOT
//! refreshed if the scene's button set changes later - navigation over a
//! mutated set goes stale. Known limitation, kept intentionally.

use crate::state::keyboard::KeyboardEvent;

/// What the event loop should do in response to a handled key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    /// Move focus to the button with this id.
    Focus(usize),
    /// Invoke the click behavior of the button with this id.
    Activate(usize),
}

/// Cyclic focus cursor over a captured button sequence.
///
/// The cursor starts at -1 ("no selection"); each Tab advances it by one,
/// wrapping to the first button past the end.
pub struct Navigator {
    order: Vec<usize>,
    cursor: i32,
}

impl Navigator {
    /// Capture the button sequence. The order is fixed from here on.
    pub fn new(order: Vec<usize>) -> Self {
        Self { order, cursor: -1 }
    }

    /// The id of the currently focused button, if any.
    pub fn focused(&self) -> Option<usize> {
        if self.cursor >= 0 {
            self.order.get(self.cursor as usize).copied()
        } else {
            None
        }
    }

    /// Number of buttons in the captured sequence.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Handle a key press. Tab advances the cursor (suppressing default
    /// traversal); Enter and Space activate the focused button. Any other
    /// key - and anything but a press - is ignored.
    pub fn handle_key(&mut self, event: &KeyboardEvent) -> Option<NavAction> {
        if !event.is_press() {
            return None;
        }

        match event.key.as_str() {
            "Tab" => {
                if self.order.is_empty() {
                    return None;
                }
                self.cursor += 1;
                if self.cursor >= self.order.len() as i32 {
                    self.cursor = 0;
                }
                Some(NavAction::Focus(self.order[self.cursor as usize]))
            }
            "Enter" | " " => self.focused().map(NavAction::Activate),
            _ => None,
        }
    }
}
