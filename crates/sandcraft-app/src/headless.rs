//! Headless sprite backend: tracks textures and counts draws without a GPU.

use std::collections::HashMap;

use sandcraft_types::backend::{ImageRegion, SpriteBackend, TextureId};
use sandcraft_types::error::{Result, SandcraftError};

pub struct HeadlessBackend {
    textures: HashMap<TextureId, (u32, u32)>,
    next_texture: u64,
    draw_calls: usize,
}

impl HeadlessBackend {
    pub fn new() -> Self {
        log::info!("Headless backend initialized");
        Self {
            textures: HashMap::new(),
            next_texture: 0,
            draw_calls: 0,
        }
    }

    pub fn draw_calls(&self) -> usize {
        self.draw_calls
    }
}

impl SpriteBackend for HeadlessBackend {
    fn load_texture(&mut self, width: u32, height: u32, _rgba_data: &[u8]) -> Result<TextureId> {
        self.next_texture += 1;
        let tex = TextureId(self.next_texture);
        self.textures.insert(tex, (width, height));
        log::debug!("Loaded texture {} ({width}x{height})", tex.0);
        Ok(tex)
    }

    fn destroy_texture(&mut self, tex: TextureId) -> Result<()> {
        self.textures
            .remove(&tex)
            .map(|_| ())
            .ok_or_else(|| SandcraftError::Backend(format!("unknown texture {}", tex.0)))
    }

    fn draw_sprite(
        &mut self,
        image: &ImageRegion,
        x: f32,
        y: f32,
        scale_x: f32,
        scale_y: f32,
    ) -> Result<()> {
        let &(tw, th) = self.textures.get(&image.texture).ok_or_else(|| {
            SandcraftError::Backend(format!("draw with unknown texture {}", image.texture.0))
        })?;
        if image.x + image.width > tw || image.y + image.height > th {
            return Err(SandcraftError::Backend(format!(
                "region exceeds {tw}x{th} texture {}",
                image.texture.0
            )));
        }
        log::trace!(
            "draw tex {} [{},{} {}x{}] at ({x}, {y}) scale ({scale_x}, {scale_y})",
            image.texture.0,
            image.x,
            image.y,
            image.width,
            image.height
        );
        self.draw_calls += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_with_unknown_texture_fails() {
        let mut backend = HeadlessBackend::new();
        let img = ImageRegion::full(TextureId(42), 4, 4);
        assert!(backend.draw_sprite(&img, 0.0, 0.0, 1.0, 1.0).is_err());
        assert_eq!(backend.draw_calls(), 0);
    }

    #[test]
    fn destroyed_texture_cannot_be_drawn() {
        let mut backend = HeadlessBackend::new();
        let img = backend.load_image(2, 2, &[255; 16]).unwrap();
        backend.draw_sprite(&img, 0.0, 0.0, 1.0, 1.0).unwrap();
        backend.destroy_texture(img.texture).unwrap();
        assert!(backend.draw_sprite(&img, 0.0, 0.0, 1.0, 1.0).is_err());
        assert!(backend.destroy_texture(img.texture).is_err());
        assert_eq!(backend.draw_calls(), 1);
    }
}
