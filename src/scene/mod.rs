//! Scene model: the page the effects decorate.
//!
//! The scene owns the page structure: a background container, an ordered
//! set of link buttons, and an optional title. Missing collaborators are
//! tolerated - a scene built
//! without a background container simply never draws one, and every
//! component no-ops over an empty button list.

pub mod button;

pub use button::{ActivateFn, LinkButton};

use std::time::Instant;

use crate::background::BackgroundLayer;
use crate::effects::Typewriter;
use crate::layout;
use crate::random::RandomSource;
use crate::theme::Theme;
use crate::types::{PxRect, Viewport};

// =============================================================================
// Options
// =============================================================================

/// Scene construction options.
pub struct SceneOptions {
    /// Optional page title.
    pub title: Option<String>,
    /// Reveal the title with the typewriter effect instead of all at once.
    pub typewriter_title: bool,
    /// Whether the scene has a background container at all.
    pub background: bool,
    pub theme: Theme,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            title: None,
            typewriter_title: false,
            background: true,
            theme: Theme::default(),
        }
    }
}

// =============================================================================
// Scene
// =============================================================================

/// The page model. All coordinates are scene px; the scroll offset maps
/// scene space to screen space.
pub struct Scene {
    viewport: Viewport,
    scroll_y: f32,
    loaded: bool,
    background: Option<BackgroundLayer>,
    buttons: Vec<LinkButton>,
    title: Option<String>,
    typewriter: Option<Typewriter>,
    focused: Option<usize>,
    theme: Theme,
}

impl Scene {
    pub fn new(options: SceneOptions) -> Self {
        let typewriter = if options.typewriter_title {
            options.title.as_ref().map(|t| Typewriter::new(t.clone()))
        } else {
            None
        };
        Self {
            viewport: Viewport::default(),
            scroll_y: 0.0,
            loaded: false,
            background: options.background.then(BackgroundLayer::new),
            buttons: Vec::new(),
            title: options.title,
            typewriter,
            focused: None,
            theme: options.theme,
        }
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Mark the page loaded (enables the fade-in) and start the optional
    /// title reveal. Called once from mount.
    pub fn mark_loaded(&mut self, now: Instant) {
        self.loaded = true;
        if let Some(ref mut tw) = self.typewriter {
            tw.start(now);
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    // -------------------------------------------------------------------------
    // Viewport and scrolling
    // -------------------------------------------------------------------------

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Update the viewport and re-run button layout. The background is NOT
    /// rebuilt here - the caller owns the random source (see
    /// [`Scene::rebuild_background`]).
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.relayout();
        // Re-clamp the scroll offset for the new height
        self.scroll_by(0.0);
    }

    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    /// Scroll by a px delta, clamped to the content extent.
    pub fn scroll_by(&mut self, delta: f32) {
        let max = (self.content_height() - self.viewport.px_height as f32).max(0.0);
        self.scroll_y = (self.scroll_y + delta).clamp(0.0, max);
    }

    /// Total scene content height, px.
    pub fn content_height(&self) -> f32 {
        layout::content_height(self.buttons.len())
    }

    // -------------------------------------------------------------------------
    // Background
    // -------------------------------------------------------------------------

    pub fn background(&self) -> Option<&BackgroundLayer> {
        self.background.as_ref()
    }

    /// Full clear-and-regenerate of the background for the current viewport
    /// width. A scene without a background container no-ops.
    pub fn rebuild_background(&mut self, rng: &mut dyn RandomSource) {
        let width = self.viewport.px_width;
        if let Some(ref mut bg) = self.background {
            bg.rebuild(rng, width);
        }
    }

    // -------------------------------------------------------------------------
    // Buttons
    // -------------------------------------------------------------------------

    /// Add a button and re-run layout. Returns the button id.
    pub fn add_button(&mut self, button: LinkButton) -> usize {
        self.buttons.push(button);
        self.relayout();
        self.buttons.len() - 1
    }

    pub fn buttons(&self) -> &[LinkButton] {
        &self.buttons
    }

    pub fn button(&self, id: usize) -> Option<&LinkButton> {
        self.buttons.get(id)
    }

    pub fn button_mut(&mut self, id: usize) -> Option<&mut LinkButton> {
        self.buttons.get_mut(id)
    }

    /// Ids in document order.
    pub fn button_ids(&self) -> Vec<usize> {
        (0..self.buttons.len()).collect()
    }

    fn relayout(&mut self) {
        let rects = layout::layout_buttons(&self.viewport, self.buttons.len());
        for (button, rect) in self.buttons.iter_mut().zip(rects) {
            button.set_rect(rect);
        }
    }

    // -------------------------------------------------------------------------
    // Screen-space queries (scroll applied)
    // -------------------------------------------------------------------------

    /// A button's effective rect in screen px (hover transform + scroll).
    pub fn screen_rect(&self, id: usize) -> Option<PxRect> {
        self.buttons.get(id).map(|b| {
            let mut rect = b.effective_rect();
            rect.y -= self.scroll_y;
            rect
        })
    }

    /// Topmost button containing the screen-space point.
    pub fn button_at(&self, x: f32, y: f32) -> Option<usize> {
        (0..self.buttons.len()).find(|&id| {
            self.screen_rect(id)
                .is_some_and(|rect| rect.contains(x, y))
        })
    }

    /// Route a pointer position: enter the containing button, leave all
    /// others. Returns the hovered button id, if any.
    pub fn hover_at(&mut self, x: f32, y: f32) -> Option<usize> {
        let hit = self.button_at(x, y);
        for (id, button) in self.buttons.iter_mut().enumerate() {
            if Some(id) == hit {
                button.hover_enter();
            } else {
                button.hover_leave();
            }
        }
        hit
    }

    /// Route a click at a screen-space point. Returns the clicked id.
    pub fn click_at(&mut self, x: f32, y: f32, now: Instant) -> Option<usize> {
        let id = self.button_at(x, y)?;
        let rect = self.screen_rect(id)?;
        if let Some(button) = self.buttons.get_mut(id) {
            button.click_at(x - rect.x, y - rect.y, now);
        }
        Some(id)
    }

    /// Activate a button programmatically (keyboard navigation).
    pub fn activate(&mut self, id: usize, now: Instant) {
        if let Some(button) = self.buttons.get_mut(id) {
            button.activate(now);
        }
    }

    /// Drop expired ripples on every button.
    pub fn prune_ripples(&mut self, now: Instant) {
        for button in &mut self.buttons {
            button.ripples_mut().prune(now);
        }
    }

    // -------------------------------------------------------------------------
    // Focus marker (owned by the navigator, mirrored here for rendering)
    // -------------------------------------------------------------------------

    pub fn set_focused(&mut self, id: Option<usize>) {
        self.focused = id;
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    // -------------------------------------------------------------------------
    // Title
    // -------------------------------------------------------------------------

    /// The title text visible at `now` (typewriter-aware).
    pub fn visible_title(&self, now: Instant) -> Option<&str> {
        match (&self.typewriter, &self.title) {
            (Some(tw), _) => Some(tw.visible(now)),
            (None, Some(title)) => Some(title.as_str()),
            (None, None) => None,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::EntropySource;
    use std::time::Duration;

    fn scene_with_buttons(count: usize) -> Scene {
        let mut scene = Scene::new(SceneOptions::default());
        scene.set_viewport(Viewport::new(100, 30, 1024, 480));
        for i in 0..count {
            scene.add_button(LinkButton::new(format!("Link {i}")));
        }
        scene
    }

    #[test]
    fn test_background_container_optional() {
        let mut without = Scene::new(SceneOptions {
            background: false,
            ..Default::default()
        });
        assert!(without.background().is_none());

        // Rebuild without a container exits without effect
        let mut rng = EntropySource::with_seed(1);
        without.rebuild_background(&mut rng);
        assert!(without.background().is_none());

        let mut with = scene_with_buttons(0);
        with.rebuild_background(&mut rng);
        assert!(!with.background().unwrap().is_empty());
    }

    #[test]
    fn test_buttons_get_layout_rects() {
        let scene = scene_with_buttons(3);
        for button in scene.buttons() {
            assert!(button.rect().width > 0.0);
            assert!(button.rect().height > 0.0);
        }
        assert!(scene.buttons()[1].rect().y > scene.buttons()[0].rect().y);
    }

    #[test]
    fn test_hit_test_in_screen_space() {
        // Enough buttons that the page is scrollable
        let mut scene = scene_with_buttons(10);
        let rect = scene.screen_rect(0).unwrap();
        let (cx, cy) = rect.center();
        assert_eq!(scene.button_at(cx, cy), Some(0));
        assert_eq!(scene.button_at(0.0, 0.0), None);

        // Scrolling moves buttons up on screen
        scene.scroll_by(rect.height);
        assert_ne!(scene.button_at(cx, cy), Some(0));
    }

    #[test]
    fn test_hover_routing_is_exclusive() {
        let mut scene = scene_with_buttons(3);
        let rect = scene.screen_rect(1).unwrap();
        let (cx, cy) = rect.center();

        assert_eq!(scene.hover_at(cx, cy), Some(1));
        assert!(!scene.buttons()[0].is_hovered());
        assert!(scene.buttons()[1].is_hovered());
        assert!(!scene.buttons()[2].is_hovered());

        // Pointer moves off every button
        assert_eq!(scene.hover_at(0.0, 0.0), None);
        assert!(scene.buttons().iter().all(|b| !b.is_hovered()));
    }

    #[test]
    fn test_click_routes_relative_coordinates() {
        let mut scene = scene_with_buttons(1);
        let rect = scene.screen_rect(0).unwrap();

        let id = scene.click_at(rect.x + 12.0, rect.y + 7.0, Instant::now());
        assert_eq!(id, Some(0));

        let ripple = scene.buttons()[0].ripples().iter().next().unwrap();
        assert!((ripple.center_x - 12.0).abs() < 1e-3);
        assert!((ripple.center_y - 7.0).abs() < 1e-3);
    }

    #[test]
    fn test_prune_ripples_across_buttons() {
        let mut scene = scene_with_buttons(2);
        let t0 = Instant::now();
        scene.activate(0, t0);
        scene.activate(1, t0);

        scene.prune_ripples(t0 + Duration::from_millis(700));
        assert!(scene.buttons().iter().all(|b| b.ripples().is_empty()));
    }

    #[test]
    fn test_scroll_clamps_to_content() {
        let mut scene = scene_with_buttons(10);
        assert!(scene.content_height() > scene.viewport().px_height as f32);

        scene.scroll_by(-100.0);
        assert_eq!(scene.scroll_y(), 0.0);

        scene.scroll_by(1_000_000.0);
        let max = scene.content_height() - scene.viewport().px_height as f32;
        assert!((scene.scroll_y() - max).abs() < 1e-3);
    }

    #[test]
    fn test_empty_scene_components_noop() {
        let mut scene = Scene::new(SceneOptions::default());
        scene.set_viewport(Viewport::from_cells(80, 24));
        assert_eq!(scene.button_at(10.0, 10.0), None);
        assert_eq!(scene.hover_at(10.0, 10.0), None);
        assert_eq!(scene.click_at(10.0, 10.0, Instant::now()), None);
        scene.activate(5, Instant::now()); // out of range, silent
    }

    #[test]
    fn test_title_modes() {
        let now = Instant::now();

        let plain = Scene::new(SceneOptions {
            title: Some("My Links".into()),
            ..Default::default()
        });
        assert_eq!(plain.visible_title(now), Some("My Links"));

        let mut typed = Scene::new(SceneOptions {
            title: Some("My Links".into()),
            typewriter_title: true,
            ..Default::default()
        });
        assert_eq!(typed.visible_title(now), Some(""));
        typed.mark_loaded(now);
        assert_eq!(
            typed.visible_title(now + Duration::from_millis(250)),
            Some("My")
        );

        let untitled = Scene::new(SceneOptions::default());
        assert_eq!(untitled.visible_title(now), None);
    }

    #[test]
    fn test_mark_loaded() {
        let mut scene = scene_with_buttons(1);
        assert!(!scene.is_loaded());
        scene.mark_loaded(Instant::now());
        assert!(scene.is_loaded());
    }
}
