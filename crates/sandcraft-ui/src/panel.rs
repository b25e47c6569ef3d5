//! Panel widget: a rectangle filled with a nine-slice image.

use crate::nine_slice::NineSliceSprite;
use crate::widget::{Widget, WidgetBounds};
use sandcraft_types::backend::{ImageRegion, SpriteBackend};
use sandcraft_types::error::Result;

/// A widget whose background is a nine-slice sprite stretched to its bounds.
pub struct Panel {
    bounds: WidgetBounds,
    background: NineSliceSprite,
}

impl Panel {
    /// Create a panel covering `bounds`, slicing `image` with a `border`-pixel
    /// border drawn `border_width` units thick.
    pub fn new(
        image: ImageRegion,
        bounds: WidgetBounds,
        border: u32,
        border_width: f32,
    ) -> Result<Self> {
        let background = NineSliceSprite::with_border(image, bounds.x, bounds.y, border, border_width)?;
        let mut panel = Self { bounds, background };
        panel.update();
        Ok(panel)
    }

    pub fn background(&self) -> &NineSliceSprite {
        &self.background
    }

    /// Swap the background image, keeping the panel bounds.
    pub fn set_image(&mut self, image: ImageRegion) -> Result<()> {
        self.background.set_image(image)?;
        self.update();
        Ok(())
    }
}

impl Widget for Panel {
    fn bounds(&self) -> &WidgetBounds {
        &self.bounds
    }

    fn bounds_mut(&mut self) -> &mut WidgetBounds {
        &mut self.bounds
    }

    fn update(&mut self) {
        let b = self.bounds;
        self.background.fit_to(b.x, b.y, b.width, b.height);
    }

    fn draw(&self, backend: &mut dyn SpriteBackend) -> Result<()> {
        self.background.draw(backend)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{MockBackend, assert_close};

    fn panel(backend: &mut MockBackend) -> Panel {
        let img = backend.blank_image(16, 16);
        Panel::new(img, WidgetBounds::new(10.0, 20.0, 64.0, 32.0), 2, 3.0).unwrap()
    }

    #[test]
    fn background_fills_bounds() {
        let mut backend = MockBackend::new();
        let p = panel(&mut backend);
        let bg = p.background();
        assert_eq!(bg.position(), (10.0, 20.0));
        assert_eq!((bg.width(), bg.height()), (64.0, 32.0));
        assert_close(bg.sprites().top.height(), 3.0);
    }

    #[test]
    fn resizing_rescales_background() {
        let mut backend = MockBackend::new();
        let mut p = panel(&mut backend);
        p.set_width(160.0);
        p.set_y(0.0);
        let bg = p.background();
        assert_eq!(bg.scale_x(), 10.0);
        assert_eq!(bg.position(), (10.0, 0.0));
        assert_eq!(bg.sprites().right.position, (10.0 + 160.0 - 3.0, 3.0));
    }

    #[test]
    fn draw_covers_bounds_exactly() {
        let mut backend = MockBackend::new();
        let p = panel(&mut backend);
        p.draw(&mut backend).unwrap();
        assert_eq!(backend.calls.len(), 5);
        let right_edge = backend
            .calls
            .iter()
            .map(|c| c.x + c.width())
            .fold(f32::MIN, f32::max);
        let top_edge = backend
            .calls
            .iter()
            .map(|c| c.y + c.height())
            .fold(f32::MIN, f32::max);
        assert_close(right_edge, 74.0);
        assert_close(top_edge, 52.0);
    }

    #[test]
    fn zero_size_panel_draws_nothing_visible() {
        let mut backend = MockBackend::new();
        let mut p = panel(&mut backend);
        p.set_width(0.0);
        assert_eq!(p.background().sprites().center.scale_x, 0.0);
    }

    #[test]
    fn set_image_keeps_bounds() {
        let mut backend = MockBackend::new();
        let mut p = panel(&mut backend);
        let old = p.background().image().texture;
        let other = backend.blank_image(32, 8);
        p.set_image(other).unwrap();
        backend.destroy_texture(old).unwrap();
        assert_eq!(backend.live_textures, vec![other.texture]);
        assert_eq!(p.background().image().texture, other.texture);
        assert_eq!((p.background().width(), p.background().height()), (64.0, 32.0));
    }

    #[test]
    fn too_small_image_rejected() {
        let mut backend = MockBackend::new();
        let img = backend.blank_image(4, 4);
        assert!(Panel::new(img, WidgetBounds::new(0.0, 0.0, 8.0, 8.0), 2, 1.0).is_err());
    }
}
