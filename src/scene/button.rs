//! Link buttons.
//!
//! A link button is the scene's interactive element: ripple/hover target,
//! keyboard navigation stop, and visibility animation subject.

use std::fmt;
use std::time::Instant;

use crate::effects::{HoverTransform, RippleField};
use crate::types::PxRect;

/// Invoked when a button is activated (click, Enter, or Space).
pub type ActivateFn = Box<dyn Fn()>;

/// One interactive link button.
pub struct LinkButton {
    label: String,
    /// Layout rect in scene px space (unscrolled, neutral transform).
    rect: PxRect,
    hover: HoverTransform,
    animated: bool,
    ripples: RippleField,
    on_activate: Option<ActivateFn>,
}

impl LinkButton {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            rect: PxRect::default(),
            hover: HoverTransform::NEUTRAL,
            animated: false,
            ripples: RippleField::new(),
            on_activate: None,
        }
    }

    /// Attach an activation callback.
    pub fn on_activate(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_activate = Some(Box::new(callback));
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn rect(&self) -> PxRect {
        self.rect
    }

    pub(crate) fn set_rect(&mut self, rect: PxRect) {
        self.rect = rect;
    }

    /// Rect with the current hover transform applied.
    pub fn effective_rect(&self) -> PxRect {
        self.hover.apply_to(&self.rect)
    }

    pub fn is_hovered(&self) -> bool {
        !self.hover.is_neutral()
    }

    pub fn hover_enter(&mut self) {
        self.hover = HoverTransform::LIFTED;
    }

    pub fn hover_leave(&mut self) {
        self.hover = HoverTransform::NEUTRAL;
    }

    /// Whether the entrance animation has been triggered. One-way.
    pub fn is_animated(&self) -> bool {
        self.animated
    }

    pub(crate) fn mark_animated(&mut self) {
        self.animated = true;
    }

    pub fn ripples(&self) -> &RippleField {
        &self.ripples
    }

    pub fn ripples_mut(&mut self) -> &mut RippleField {
        &mut self.ripples
    }

    /// Click at `(x, y)` px relative to the button origin: spawns a ripple
    /// there and fires the activation callback.
    pub fn click_at(&mut self, x: f32, y: f32, now: Instant) {
        let rect = self.effective_rect();
        self.ripples.spawn(x, y, &rect, now);
        self.fire();
    }

    /// Programmatic activation (keyboard): center ripple plus callback.
    pub fn activate(&mut self, now: Instant) {
        let rect = self.effective_rect();
        self.ripples.spawn_centered(&rect, now);
        self.fire();
    }

    fn fire(&self) {
        if let Some(ref callback) = self.on_activate {
            callback();
        }
    }
}

impl fmt::Debug for LinkButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkButton")
            .field("label", &self.label)
            .field("rect", &self.rect)
            .field("hovered", &self.is_hovered())
            .field("animated", &self.animated)
            .field("ripples", &self.ripples.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_click_spawns_ripple_and_fires_callback() {
        let count = Rc::new(Cell::new(0));
        let count_clone = count.clone();

        let mut button = LinkButton::new("Blog").on_activate(move || {
            count_clone.set(count_clone.get() + 1);
        });
        button.set_rect(PxRect::new(0.0, 0.0, 300.0, 60.0));

        button.click_at(20.0, 10.0, Instant::now());
        assert_eq!(count.get(), 1);
        assert_eq!(button.ripples().len(), 1);
    }

    #[test]
    fn test_activate_centers_ripple() {
        let mut button = LinkButton::new("About");
        button.set_rect(PxRect::new(0.0, 0.0, 200.0, 50.0));

        button.activate(Instant::now());
        let ripple = button.ripples().iter().next().unwrap();
        assert_eq!((ripple.center_x, ripple.center_y), (100.0, 25.0));
    }

    #[test]
    fn test_activation_without_callback_is_silent() {
        let mut button = LinkButton::new("Contact");
        button.activate(Instant::now()); // must not panic
        assert_eq!(button.ripples().len(), 1);
    }

    #[test]
    fn test_hover_transform_toggles() {
        let mut button = LinkButton::new("Home");
        button.set_rect(PxRect::new(100.0, 100.0, 300.0, 60.0));
        assert!(!button.is_hovered());
        assert_eq!(button.effective_rect(), button.rect());

        button.hover_enter();
        assert!(button.is_hovered());
        assert!(button.effective_rect().y < button.rect().y);

        button.hover_leave();
        assert_eq!(button.effective_rect(), button.rect());
    }

    #[test]
    fn test_animated_is_one_way() {
        let mut button = LinkButton::new("X");
        assert!(!button.is_animated());
        button.mark_animated();
        assert!(button.is_animated());
    }
}
