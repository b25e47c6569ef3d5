//! Preview scenes: a UI config plus a list of nine-slice sprites, read from
//! TOML.

use serde::{Deserialize, Serialize};

use sandcraft_types::backend::{SpriteBackend, rgba_len};
use sandcraft_types::config::UiConfig;
use sandcraft_types::error::{Result, SandcraftError};
use sandcraft_ui::NineSliceSprite;

/// A scene file.
///
/// ```toml
/// [ui]
/// window_height = 600
///
/// [[sprite]]
/// name = "button"
/// width = 20
/// height = 20
/// border = 2
/// scale_x = 10.0
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default, rename = "sprite")]
    pub sprites: Vec<SpriteSpec>,
}

/// One nine-slice sprite. The source image is a solid texture of the given
/// size; `border` and `border_width` fall back to the `[ui]` defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct SpriteSpec {
    pub name: String,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub x: f32,
    /// Distance from the top of the window to the sprite's bottom edge.
    #[serde(default)]
    pub top: f32,
    pub border: Option<u32>,
    pub border_width: Option<f32>,
    #[serde(default = "unit_scale")]
    pub scale_x: f32,
    #[serde(default = "unit_scale")]
    pub scale_y: f32,
}

fn unit_scale() -> f32 {
    1.0
}

impl Scene {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let scene: Scene = toml::from_str(s)?;
        scene.ui.validate()?;
        Ok(scene)
    }

    /// Upload a texture per sprite and lay the sprites out.
    pub fn build(&self, backend: &mut dyn SpriteBackend) -> Result<Vec<(String, NineSliceSprite)>> {
        self.sprites
            .iter()
            .map(|spec| {
                let len = rgba_len(spec.width, spec.height).ok_or_else(|| {
                    SandcraftError::Config(format!(
                        "sprite {:?} is too large: {}x{}",
                        spec.name, spec.width, spec.height
                    ))
                })?;
                let pixels = vec![0xff; len];
                let image = backend.load_image(spec.width, spec.height, &pixels)?;
                let mut sprite = NineSliceSprite::with_border(
                    image,
                    spec.x,
                    self.ui.to_render_y(spec.top),
                    spec.border.unwrap_or(self.ui.border),
                    spec.border_width.unwrap_or(self.ui.border_width),
                )?;
                sprite.set_scale_x(spec.scale_x);
                sprite.set_scale_y(spec.scale_y);
                Ok((spec.name.clone(), sprite))
            })
            .collect()
    }
}

/// Rendered geometry of one slice.
#[derive(Debug, Clone, Serialize)]
pub struct SliceReport {
    pub slice: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub scale_x: f32,
    pub scale_y: f32,
}

/// Rendered geometry of a whole sprite.
#[derive(Debug, Clone, Serialize)]
pub struct SpriteReport {
    pub name: String,
    pub width: f32,
    pub height: f32,
    pub slices: Vec<SliceReport>,
}

impl SpriteReport {
    pub fn new(name: &str, sprite: &NineSliceSprite) -> Self {
        let slices = sprite
            .sprites()
            .iter()
            .map(|(slice, s)| SliceReport {
                slice: format!("{slice:?}").to_lowercase(),
                x: s.position.0,
                y: s.position.1,
                width: s.width(),
                height: s.height(),
                scale_x: s.scale_x,
                scale_y: s.scale_y,
            })
            .collect();
        Self {
            name: name.to_string(),
            width: sprite.width(),
            height: sprite.height(),
            slices,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessBackend;

    const SCENE: &str = r#"
[ui]
window_height = 100
border_width = 2.0

[[sprite]]
name = "frame"
width = 10
height = 10
top = 30.0
scale_x = 2.0
scale_y = 2.0

[[sprite]]
name = "bar"
width = 40
height = 8
border = 3
border_width = 1.0
"#;

    #[test]
    fn parses_scene_with_defaults() {
        let scene = Scene::from_toml_str(SCENE).unwrap();
        assert_eq!(scene.ui.window_height, 100);
        assert_eq!(scene.sprites.len(), 2);
        assert_eq!(scene.sprites[1].scale_x, 1.0);
        assert_eq!(scene.sprites[1].border, Some(3));
        assert!(scene.sprites[0].border.is_none());
    }

    #[test]
    fn build_applies_config_defaults() {
        let scene = Scene::from_toml_str(SCENE).unwrap();
        let mut backend = HeadlessBackend::new();
        let sprites = scene.build(&mut backend).unwrap();
        let (name, frame) = &sprites[0];
        assert_eq!(name, "frame");
        assert_eq!(frame.border(), 1);
        assert_eq!(frame.border_width(), 2.0);
        assert_eq!(frame.position(), (0.0, 70.0));
        assert_eq!(frame.sprites().top.position, (0.0, 88.0));
        assert_eq!(sprites[1].1.border(), 3);
    }

    #[test]
    fn report_lists_slices_in_draw_order() {
        let scene = Scene::from_toml_str(SCENE).unwrap();
        let mut backend = HeadlessBackend::new();
        let sprites = scene.build(&mut backend).unwrap();
        let report = SpriteReport::new(&sprites[0].0, &sprites[0].1);
        let names: Vec<&str> = report.slices.iter().map(|s| s.slice.as_str()).collect();
        assert_eq!(names, ["top", "left", "center", "right", "bottom"]);
        assert_eq!((report.width, report.height), (20.0, 20.0));
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"name\":\"frame\""));
    }

    #[test]
    fn undersized_sprite_fails_build() {
        let scene = Scene::from_toml_str(
            "[[sprite]]\nname = \"tiny\"\nwidth = 2\nheight = 2\n",
        )
        .unwrap();
        let mut backend = HeadlessBackend::new();
        assert!(scene.build(&mut backend).is_err());
    }

    #[test]
    fn overflowing_dimensions_rejected() {
        let scene = Scene::from_toml_str(
            "[[sprite]]\nname = \"huge\"\nwidth = 4294967295\nheight = 4294967295\n",
        )
        .unwrap();
        let mut backend = HeadlessBackend::new();
        let err = scene.build(&mut backend).unwrap_err();
        assert!(matches!(err, SandcraftError::Config(_)), "{err}");
    }

    #[test]
    fn invalid_ui_section_rejected() {
        assert!(Scene::from_toml_str("[ui]\nborder = 0\n").is_err());
    }
}
