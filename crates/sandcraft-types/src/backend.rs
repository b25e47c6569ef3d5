//! Backend trait definitions.
//!
//! The host renderer implements [`SpriteBackend`]. Widgets dispatch all
//! drawing through this trait boundary and never call a graphics API
//! directly.
//!
//! Coordinates follow the host renderer: render space has its origin at the
//! bottom-left of the window, and image regions are addressed from the
//! bottom-left of their texture.

use crate::error::{Result, SandcraftError};

/// Opaque handle to a loaded texture in the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u64);

/// A non-owning view of a rectangular area of a texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageRegion {
    pub texture: TextureId,
    /// Left edge within the texture, in pixels.
    pub x: u32,
    /// Bottom edge within the texture, in pixels.
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl ImageRegion {
    /// A view covering a whole `width` x `height` texture.
    pub const fn full(texture: TextureId, width: u32, height: u32) -> Self {
        Self {
            texture,
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    /// Extract a sub-region. Offsets are relative to this region.
    pub fn region(&self, x: u32, y: u32, width: u32, height: u32) -> Result<ImageRegion> {
        let fits_x = x.checked_add(width).is_some_and(|r| r <= self.width);
        let fits_y = y.checked_add(height).is_some_and(|t| t <= self.height);
        if !fits_x || !fits_y {
            return Err(SandcraftError::RegionOutOfBounds {
                x,
                y,
                width,
                height,
                parent_width: self.width,
                parent_height: self.height,
            });
        }
        Ok(ImageRegion {
            texture: self.texture,
            x: self.x + x,
            y: self.y + y,
            width,
            height,
        })
    }
}

/// Rendering backend trait.
///
/// Implemented once per host renderer (GPU batch, software raster, or a
/// recording mock in tests).
pub trait SpriteBackend {
    /// Upload RGBA pixel data as a texture.
    fn load_texture(&mut self, width: u32, height: u32, rgba_data: &[u8]) -> Result<TextureId>;

    /// Release a texture. Regions referencing it must not be drawn afterwards.
    fn destroy_texture(&mut self, tex: TextureId) -> Result<()>;

    /// Draw `image` with its bottom-left corner at `(x, y)`, scaled by
    /// `scale_x` / `scale_y` relative to its native pixel size.
    fn draw_sprite(
        &mut self,
        image: &ImageRegion,
        x: f32,
        y: f32,
        scale_x: f32,
        scale_y: f32,
    ) -> Result<()>;

    /// Upload RGBA pixel data and return a region covering the whole texture.
    fn load_image(&mut self, width: u32, height: u32, rgba_data: &[u8]) -> Result<ImageRegion> {
        let expected = rgba_len(width, height).ok_or_else(|| {
            SandcraftError::Backend(format!("{width}x{height} RGBA image is too large"))
        })?;
        if rgba_data.len() != expected {
            return Err(SandcraftError::Backend(format!(
                "expected {expected} bytes of RGBA data for {width}x{height}, got {}",
                rgba_data.len()
            )));
        }
        let tex = self.load_texture(width, height, rgba_data)?;
        Ok(ImageRegion::full(tex, width, height))
    }
}

/// Byte length of a `width` x `height` RGBA buffer, or `None` if it does
/// not fit in `usize`.
pub fn rgba_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(4)
}

/// A positioned, scaled image: the renderable primitive widgets compose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSprite {
    pub image: ImageRegion,
    /// Bottom-left corner in render space.
    pub position: (f32, f32),
    pub scale_x: f32,
    pub scale_y: f32,
}

impl RenderSprite {
    /// An unscaled sprite at the origin.
    pub fn new(image: ImageRegion) -> Self {
        Self {
            image,
            position: (0.0, 0.0),
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }

    /// Rendered width in render-space units.
    pub fn width(&self) -> f32 {
        self.image.width as f32 * self.scale_x
    }

    /// Rendered height in render-space units.
    pub fn height(&self) -> f32 {
        self.image.height as f32 * self.scale_y
    }

    pub fn draw(&self, backend: &mut dyn SpriteBackend) -> Result<()> {
        let (x, y) = self.position;
        backend.draw_sprite(&self.image, x, y, self.scale_x, self.scale_y)
    }
}
