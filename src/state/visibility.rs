//! Visibility animator.
//!
//! Watches the link buttons and marks each one animated the first time it
//! becomes sufficiently visible within the viewport. The transition is
//! monotonic: once triggered, a button is never re-observed and the mark is
//! never reverted on scroll-out.

use std::collections::HashSet;

use crate::scene::Scene;
use crate::types::PxRect;

/// A button triggers once at least this fraction of it is visible.
pub const VISIBILITY_THRESHOLD: f32 = 0.1;

/// The trigger region is the viewport shrunk by this much at the bottom,
/// px - elements animate slightly before they reach the very edge.
pub const BOTTOM_MARGIN_PX: f32 = 50.0;

/// Observer tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityOptions {
    pub threshold: f32,
    pub bottom_margin_px: f32,
}

impl Default for VisibilityOptions {
    fn default() -> Self {
        Self {
            threshold: VISIBILITY_THRESHOLD,
            bottom_margin_px: BOTTOM_MARGIN_PX,
        }
    }
}

/// One-way visibility observer over a captured button set.
pub struct VisibilityObserver {
    options: VisibilityOptions,
    observed: Vec<usize>,
    triggered: HashSet<usize>,
}

impl VisibilityObserver {
    pub fn new() -> Self {
        Self::with_options(VisibilityOptions::default())
    }

    pub fn with_options(options: VisibilityOptions) -> Self {
        Self {
            options,
            observed: Vec::new(),
            triggered: HashSet::new(),
        }
    }

    /// Register the buttons to watch.
    pub fn observe(&mut self, ids: Vec<usize>) {
        self.observed = ids;
    }

    /// Whether a button has already triggered. Never resets.
    pub fn is_triggered(&self, id: usize) -> bool {
        self.triggered.contains(&id)
    }

    /// Fraction of `rect` inside `region`, `[0, 1]`.
    fn visible_fraction(rect: &PxRect, region: &PxRect) -> f32 {
        let area = rect.area();
        if area <= 0.0 {
            return 0.0;
        }
        rect.intersect(region).area() / area
    }

    /// Check every still-untriggered button against the current viewport
    /// and mark newly visible ones animated. Returns the newly triggered
    /// ids. Call after scroll, resize, or layout changes.
    pub fn scan(&mut self, scene: &mut Scene) -> Vec<usize> {
        let viewport = scene.viewport();
        let region = PxRect::new(
            0.0,
            0.0,
            viewport.px_width as f32,
            (viewport.px_height as f32 - self.options.bottom_margin_px).max(0.0),
        );

        let mut newly = Vec::new();
        for &id in &self.observed {
            if self.triggered.contains(&id) {
                continue;
            }
            let Some(rect) = scene.screen_rect(id) else {
                continue;
            };
            if Self::visible_fraction(&rect, &region) >= self.options.threshold {
                self.triggered.insert(id);
                newly.push(id);
            }
        }

        for &id in &newly {
            if let Some(button) = scene.button_mut(id) {
                button.mark_animated();
            }
        }
        newly
    }
}

impl Default for VisibilityObserver {
    fn default() -> Self {
        Self::new()
    }
}
