//! Sandcraft nine-slice preview.
//!
//! Loads a scene TOML, lays out every nine-slice sprite against a headless
//! backend, draws one frame, and prints the resulting slice geometry as
//! JSON.
//!
//! Usage:
//!   cargo run -p sandcraft-app -- [scene.toml]
//!   SANDCRAFT_SCENE=ui/scene.toml cargo run -p sandcraft-app

mod headless;
mod scene;

use anyhow::{Context, Result};

use headless::HeadlessBackend;
use scene::{Scene, SpriteReport};

const DEMO_SCENE: &str = r#"
[ui]
window_width = 854
window_height = 480
border_width = 2.0

[[sprite]]
name = "button"
width = 200
height = 20
x = 327.0
top = 240.0
border = 2

[[sprite]]
name = "chat_box"
width = 16
height = 16
x = 4.0
top = 476.0
scale_x = 20.0
scale_y = 6.0
"#;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let source = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("SANDCRAFT_SCENE").ok());
    let text = match &source {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("reading scene {path}"))?
        },
        None => DEMO_SCENE.to_string(),
    };
    let scene = Scene::from_toml_str(&text)
        .with_context(|| format!("parsing scene {}", source.as_deref().unwrap_or("<demo>")))?;
    log::info!(
        "Previewing {} sprite(s) in a {}x{} window",
        scene.sprites.len(),
        scene.ui.window_width,
        scene.ui.window_height,
    );

    let mut backend = HeadlessBackend::new();
    let sprites = scene.build(&mut backend)?;
    for (_, sprite) in &sprites {
        sprite.draw(&mut backend)?;
    }
    log::info!("Issued {} draw calls", backend.draw_calls());

    let report: Vec<SpriteReport> = sprites
        .iter()
        .map(|(name, sprite)| SpriteReport::new(name, sprite))
        .collect();
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
