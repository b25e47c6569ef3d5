//! Shared test utilities for sandcraft-ui widget tests.
//!
//! Provides a [`MockBackend`] that records all draw calls for assertion.

use sandcraft_types::backend::{ImageRegion, SpriteBackend, TextureId};
use sandcraft_types::error::Result;

/// A recorded draw call from the mock backend.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    pub image: ImageRegion,
    pub x: f32,
    pub y: f32,
    pub scale_x: f32,
    pub scale_y: f32,
}

impl DrawCall {
    /// Rendered width of the drawn image.
    pub fn width(&self) -> f32 {
        self.image.width as f32 * self.scale_x
    }

    /// Rendered height of the drawn image.
    pub fn height(&self) -> f32 {
        self.image.height as f32 * self.scale_y
    }
}

/// A mock backend that records all draw calls for test assertions.
pub struct MockBackend {
    pub calls: Vec<DrawCall>,
    pub live_textures: Vec<TextureId>,
    next_texture: u64,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            live_textures: Vec::new(),
            next_texture: 0,
        }
    }

    /// Upload a blank texture and return a region covering it.
    pub fn blank_image(&mut self, width: u32, height: u32) -> ImageRegion {
        let pixels = vec![0u8; width as usize * height as usize * 4];
        self.load_image(width, height, &pixels)
            .expect("blank image upload")
    }

    /// Count of draw calls using the given texture.
    pub fn draw_count(&self, tex: TextureId) -> usize {
        self.calls.iter().filter(|c| c.image.texture == tex).count()
    }
}

impl SpriteBackend for MockBackend {
    fn load_texture(&mut self, _width: u32, _height: u32, _rgba_data: &[u8]) -> Result<TextureId> {
        self.next_texture += 1;
        let tex = TextureId(self.next_texture);
        self.live_textures.push(tex);
        Ok(tex)
    }

    fn destroy_texture(&mut self, tex: TextureId) -> Result<()> {
        self.live_textures.retain(|t| *t != tex);
        Ok(())
    }

    fn draw_sprite(
        &mut self,
        image: &ImageRegion,
        x: f32,
        y: f32,
        scale_x: f32,
        scale_y: f32,
    ) -> Result<()> {
        self.calls.push(DrawCall {
            image: *image,
            x,
            y,
            scale_x,
            scale_y,
        });
        Ok(())
    }
}

/// Assert two floats agree within a small tolerance scaled to their size.
pub fn assert_close(actual: f32, expected: f32) {
    let tol = 1e-4 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tol,
        "expected {expected}, got {actual}"
    );
}
