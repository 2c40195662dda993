//! Mount API - page lifecycle and render effect.
//!
//! `mount()` is the page initializer: it detects the viewport, marks the
//! scene loaded, generates the background, and registers the interaction
//! components in order - background generator, interaction layer, keyboard
//! navigator, visibility observer. It installs the ONE render effect over
//! the viewport and frame-clock signals and returns a handle for the event
//! loop.
//!
//! # Example
//!
//! ```ignore
//! use lumen_tui::pipeline::mount::{mount, run};
//! use lumen_tui::scene::{LinkButton, Scene, SceneOptions};
//!
//! let mut scene = Scene::new(SceneOptions::default());
//! scene.add_button(LinkButton::new("Blog"));
//!
//! let mut handle = mount(scene)?;
//! run(&mut handle)?;   // Blocks until Ctrl+C
//! handle.unmount()?;
//! # std::io::Result::Ok(())
//! ```

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{
    Event as CrosstermEvent, KeyEvent as CrosstermKeyEvent, MouseButton, MouseEvent,
    MouseEventKind,
};
use spark_signals::effect;

use super::terminal;
use crate::random::EntropySource;
use crate::renderer::{draw_scene, DiffRenderer, FrameBuffer};
use crate::scene::Scene;
use crate::state::keyboard::{convert_key_event, KeyboardEvent};
use crate::state::navigator::{NavAction, Navigator};
use crate::state::visibility::VisibilityObserver;
use crate::types::Viewport;

/// Poll timeout per tick (~60fps).
const TICK_POLL: Duration = Duration::from_millis(16);

/// Scroll step for arrow keys and the mouse wheel, px.
const LINE_SCROLL_PX: f32 = 40.0;

/// Page keys scroll by this fraction of the viewport height.
const PAGE_SCROLL_FRACTION: f32 = 0.8;

// =============================================================================
// Mount Handle
// =============================================================================

/// Handle returned by [`mount`]: owns the interaction components and allows
/// unmounting.
pub struct MountHandle {
    scene: Rc<RefCell<Scene>>,
    navigator: Navigator,
    observer: VisibilityObserver,
    rng: EntropySource,
    renderer: Rc<RefCell<DiffRenderer>>,
    running: Arc<AtomicBool>,
    stop_effect: Option<Box<dyn FnOnce()>>,
    started: Instant,
}

impl MountHandle {
    /// Shared access to the scene for application logic.
    pub fn scene(&self) -> Rc<RefCell<Scene>> {
        self.scene.clone()
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Request a graceful stop from custom code.
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    /// Stop the render effect and restore the terminal.
    pub fn unmount(mut self) -> io::Result<()> {
        self.teardown()
    }

    fn teardown(&mut self) -> io::Result<()> {
        self.running.store(false, Ordering::SeqCst);
        if let Some(stop) = self.stop_effect.take() {
            stop();
            self.renderer.borrow_mut().exit_fullscreen()?;
        }
        Ok(())
    }
}

impl Drop for MountHandle {
    fn drop(&mut self) {
        // Best effort terminal restore if unmount was never called
        let _ = self.teardown();
    }
}

// =============================================================================
// Mount
// =============================================================================

/// Mount the scene: initialize the page and install the render effect.
///
/// Registration order is fixed: background generator, interaction layer
/// (implicit in the scene), keyboard navigator, visibility observer. The
/// navigator and observer capture the button set as it exists NOW; buttons
/// added later are not picked up.
pub fn mount(scene: Scene) -> io::Result<MountHandle> {
    let started = Instant::now();
    let viewport = terminal::detect_viewport();

    let scene = Rc::new(RefCell::new(scene));
    let mut rng = EntropySource::new();
    let navigator;
    let mut observer = VisibilityObserver::new();
    {
        let mut scene_mut = scene.borrow_mut();
        scene_mut.set_viewport(viewport);
        scene_mut.mark_loaded(started);
        scene_mut.rebuild_background(&mut rng);

        navigator = Navigator::new(scene_mut.button_ids());
        observer.observe(scene_mut.button_ids());
        observer.scan(&mut scene_mut);
    }

    let renderer = Rc::new(RefCell::new(DiffRenderer::new()));
    renderer.borrow_mut().enter_fullscreen()?;

    let running = Arc::new(AtomicBool::new(true));

    // The ONE render effect: re-runs on viewport change and frame advance.
    let stop_effect = {
        let scene = scene.clone();
        let renderer = renderer.clone();
        let running = running.clone();
        effect(move || {
            // Reads create the reactive dependencies
            let viewport = terminal::viewport();
            let _frame = terminal::frame();

            if !running.load(Ordering::SeqCst) {
                return;
            }

            let scene = scene.borrow();
            let mut buffer = FrameBuffer::new(viewport.cols, viewport.rows);
            draw_scene(
                &scene,
                Instant::now(),
                started.elapsed().as_secs_f32(),
                &mut buffer,
            );
            // Render to terminal (side effect!)
            let _ = renderer.borrow_mut().render(&buffer);
        })
    };

    Ok(MountHandle {
        scene,
        navigator,
        observer,
        rng,
        renderer,
        running,
        stop_effect: Some(Box::new(stop_effect)),
        started,
    })
}

// =============================================================================
// Event Loop
// =============================================================================

/// Run the event loop once. Returns `Ok(false)` when the page should stop.
pub fn tick(handle: &mut MountHandle) -> io::Result<bool> {
    if !handle.is_running() {
        return Ok(false);
    }

    if crossterm::event::poll(TICK_POLL)? {
        match crossterm::event::read()? {
            CrosstermEvent::Key(key) => handle_key(handle, key),
            CrosstermEvent::Mouse(mouse) => handle_mouse(handle, mouse),
            CrosstermEvent::Resize(cols, rows) => handle_resize(handle, cols, rows),
            _ => {}
        }
    }

    let now = Instant::now();
    {
        let mut scene = handle.scene.borrow_mut();
        scene.prune_ripples(now);
        handle.observer.scan(&mut scene);
    }

    // Drive the animations: the render effect re-runs off this signal
    terminal::advance_frame();

    Ok(handle.is_running())
}

/// Run the event loop until stopped (Ctrl+C or [`MountHandle::stop`]).
pub fn run(handle: &mut MountHandle) -> io::Result<()> {
    while tick(handle)? {}
    Ok(())
}

// =============================================================================
// Event Routing
// =============================================================================

/// Outcome of routing one key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeyOutcome {
    Stop,
    Handled,
    Ignored,
}

fn handle_key(handle: &mut MountHandle, key: CrosstermKeyEvent) {
    let event = convert_key_event(key);
    let outcome = route_key_event(
        &mut handle.scene.borrow_mut(),
        &mut handle.navigator,
        &event,
        Instant::now(),
    );
    if outcome == KeyOutcome::Stop {
        handle.stop();
    }
}

/// Route a key press: Ctrl+C stops, the navigator gets Tab/Enter/Space,
/// scroll keys move the page.
pub(crate) fn route_key_event(
    scene: &mut Scene,
    navigator: &mut Navigator,
    event: &KeyboardEvent,
    now: Instant,
) -> KeyOutcome {
    if !event.is_press() {
        return KeyOutcome::Ignored;
    }

    if event.modifiers.ctrl && event.key == "c" {
        return KeyOutcome::Stop;
    }

    if let Some(action) = navigator.handle_key(event) {
        match action {
            NavAction::Focus(id) => scene.set_focused(Some(id)),
            NavAction::Activate(id) => scene.activate(id, now),
        }
        return KeyOutcome::Handled;
    }

    let page = scene.viewport().px_height as f32 * PAGE_SCROLL_FRACTION;
    match event.key.as_str() {
        "ArrowDown" => scene.scroll_by(LINE_SCROLL_PX),
        "ArrowUp" => scene.scroll_by(-LINE_SCROLL_PX),
        "PageDown" => scene.scroll_by(page),
        "PageUp" => scene.scroll_by(-page),
        _ => return KeyOutcome::Ignored,
    }
    KeyOutcome::Handled
}

fn handle_mouse(handle: &mut MountHandle, mouse: MouseEvent) {
    let viewport = handle.scene.borrow().viewport();
    let (x, y) = viewport.px_at_cell(mouse.column, mouse.row);
    let mut scene = handle.scene.borrow_mut();

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            scene.click_at(x, y, Instant::now());
        }
        MouseEventKind::Moved => {
            scene.hover_at(x, y);
        }
        MouseEventKind::ScrollDown => scene.scroll_by(LINE_SCROLL_PX),
        MouseEventKind::ScrollUp => scene.scroll_by(-LINE_SCROLL_PX),
        _ => {}
    }
}

fn handle_resize(handle: &mut MountHandle, cols: u16, rows: u16) {
    let (px_width, px_height) = match crossterm::terminal::window_size() {
        Ok(ws) => (ws.width, ws.height),
        Err(_) => (0, 0),
    };
    let viewport = Viewport::new(cols, rows, px_width, px_height);

    {
        let mut scene = handle.scene.borrow_mut();
        scene.set_viewport(viewport);
        // Full rebuild with fresh randomness - prior elements are discarded
        scene.rebuild_background(&mut handle.rng);
    }

    handle.renderer.borrow_mut().invalidate();
    // Publishing the signal re-runs the render effect
    terminal::set_viewport(viewport);
}

// =============================================================================
// Tests
// =============================================================================
