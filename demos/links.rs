//! A small links page: title, four buttons, animated backdrop.
//!
//! Run with: `cargo run --example links`
//!
//! Tab cycles focus, Enter/Space activates, the mouse clicks and hovers,
//! arrows and the wheel scroll, Ctrl+C exits.

use std::io;

use lumen_tui::pipeline::{mount, run};
use lumen_tui::scene::{LinkButton, Scene, SceneOptions};
use lumen_tui::theme;

fn main() -> io::Result<()> {
    let mut scene = Scene::new(SceneOptions {
        title: Some("lumen".into()),
        typewriter_title: true,
        theme: theme::midnight(),
        ..Default::default()
    });

    for label in ["Blog", "Projects", "Photography", "Contact"] {
        scene.add_button(LinkButton::new(label));
    }

    let mut handle = mount(scene)?;
    run(&mut handle)?;
    handle.unmount()
}
