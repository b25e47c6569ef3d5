//! Nine-slice (5-patch) sprite rendering for scalable borders.
//!
//! The source image is cut into five regions: a full-width strip along the
//! top and bottom, a border-wide strip on the left and right, and the
//! center fill. When the composite is scaled the strips keep a fixed
//! rendered thickness (`border_width`) and only the interior stretches.
//! Corners belong to the top and bottom strips, so they stretch
//! horizontally with them; the result is distortion-free when only one
//! axis is stretched or both axes scale equally.

use sandcraft_types::backend::{ImageRegion, RenderSprite, SpriteBackend};
use sandcraft_types::error::{Result, SandcraftError};

/// Default slice border in source pixels.
pub const DEFAULT_BORDER: u32 = 1;
/// Default rendered border thickness.
pub const DEFAULT_BORDER_WIDTH: f32 = 1.0;

/// One of the five regions of a sliced image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slice {
    Top,
    Left,
    Center,
    Right,
    Bottom,
}

impl Slice {
    /// Top-to-bottom, left-to-right.
    pub const DRAW_ORDER: [Slice; 5] = [
        Slice::Top,
        Slice::Left,
        Slice::Center,
        Slice::Right,
        Slice::Bottom,
    ];
}

/// One value per slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slices<T> {
    pub top: T,
    pub left: T,
    pub center: T,
    pub right: T,
    pub bottom: T,
}

impl<T> Slices<T> {
    pub fn get(&self, slice: Slice) -> &T {
        match slice {
            Slice::Top => &self.top,
            Slice::Left => &self.left,
            Slice::Center => &self.center,
            Slice::Right => &self.right,
            Slice::Bottom => &self.bottom,
        }
    }

    pub fn get_mut(&mut self, slice: Slice) -> &mut T {
        match slice {
            Slice::Top => &mut self.top,
            Slice::Left => &mut self.left,
            Slice::Center => &mut self.center,
            Slice::Right => &mut self.right,
            Slice::Bottom => &mut self.bottom,
        }
    }

    /// Iterate in [`Slice::DRAW_ORDER`].
    pub fn iter(&self) -> impl Iterator<Item = (Slice, &T)> + '_ {
        Slice::DRAW_ORDER.into_iter().map(move |s| (s, self.get(s)))
    }

    pub fn map<U>(self, mut f: impl FnMut(Slice, T) -> U) -> Slices<U> {
        Slices {
            top: f(Slice::Top, self.top),
            left: f(Slice::Left, self.left),
            center: f(Slice::Center, self.center),
            right: f(Slice::Right, self.right),
            bottom: f(Slice::Bottom, self.bottom),
        }
    }
}

/// Where and how large one slice is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Bottom-left corner in render space.
    pub x: f32,
    pub y: f32,
    pub scale_x: f32,
    pub scale_y: f32,
}

impl Placement {
    /// Place `region` at `(x, y)` scaled to cover `width` x `height`.
    fn covering(region: &ImageRegion, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            scale_x: width / region.width as f32,
            scale_y: height / region.height as f32,
        }
    }
}

/// Position, scale, and border thickness of a nine-slice composite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliceLayout {
    /// Bottom-left anchor of the composite.
    pub x: f32,
    pub y: f32,
    /// Stretch applied to the logical image size.
    pub scale_x: f32,
    pub scale_y: f32,
    /// Rendered border thickness; never scaled.
    pub border_width: f32,
}

impl Default for SliceLayout {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            border_width: DEFAULT_BORDER_WIDTH,
        }
    }
}

impl SliceLayout {
    /// Rendered composite size: the source size times the scale factors.
    pub fn extent(&self, image: &ImageRegion) -> (f32, f32) {
        (
            image.width as f32 * self.scale_x,
            image.height as f32 * self.scale_y,
        )
    }
}

/// Cut `image` into the five regions for a `border`-pixel border.
///
/// The image must be strictly larger than `2 * border` on both axes so every
/// region is non-empty.
pub fn slice_image(image: &ImageRegion, border: u32) -> Result<Slices<ImageRegion>> {
    if border == 0 {
        return Err(SandcraftError::InvalidBorder(
            "border must be at least 1px".into(),
        ));
    }
    let (w, h, b) = (image.width, image.height, border);
    let fits = b.checked_mul(2).is_some_and(|twice| w > twice && h > twice);
    if !fits {
        return Err(SandcraftError::ImageTooSmall {
            width: w,
            height: h,
            border: b,
        });
    }
    let inner_w = w - 2 * b;
    let inner_h = h - 2 * b;
    Ok(Slices {
        top: image.region(0, h - b, w, b)?,
        left: image.region(0, b, b, inner_h)?,
        center: image.region(b, b, inner_w, inner_h)?,
        right: image.region(w - b, b, b, inner_h)?,
        bottom: image.region(0, 0, w, b)?,
    })
}

/// Compute where each slice is drawn for the given layout.
///
/// Interior extents clamp to zero when `2 * border_width` exceeds the
/// rendered size, so no scale factor is ever negative. The top and right
/// strips never start before the composite origin, even when the rendered
/// extent is thinner than one border.
pub fn compute_placement(
    layout: &SliceLayout,
    image: &ImageRegion,
    regions: &Slices<ImageRegion>,
) -> Slices<Placement> {
    let SliceLayout {
        x,
        y,
        border_width: bw,
        ..
    } = *layout;
    let (w, h) = layout.extent(image);
    let inner_w = (w - 2.0 * bw).max(0.0);
    let inner_h = (h - 2.0 * bw).max(0.0);
    let right_x = x + (w - bw).max(0.0);
    let top_y = y + (h - bw).max(0.0);

    Slices {
        top: Placement::covering(&regions.top, x, top_y, w, bw),
        left: Placement::covering(&regions.left, x, y + bw, bw, inner_h),
        center: Placement::covering(&regions.center, x + bw, y + bw, inner_w, inner_h),
        right: Placement::covering(&regions.right, right_x, y + bw, bw, inner_h),
        bottom: Placement::covering(&regions.bottom, x, y, w, bw),
    }
}

fn validate_border_width(border_width: f32) -> Result<()> {
    if border_width.is_finite() && border_width >= 0.0 {
        Ok(())
    } else {
        Err(SandcraftError::InvalidBorder(format!(
            "border width {border_width} must be a non-negative number"
        )))
    }
}

/// Negative, NaN, and infinite scale factors collapse to zero.
fn sanitize_scale(scale: f32) -> f32 {
    if scale.is_finite() && scale > 0.0 {
        scale
    } else {
        0.0
    }
}

/// An image that keeps its border thickness when scaled.
///
/// Owns one [`RenderSprite`] per slice. Every setter re-derives all five
/// placements before returning.
#[derive(Debug, Clone)]
pub struct NineSliceSprite {
    image: ImageRegion,
    border: u32,
    layout: SliceLayout,
    sprites: Slices<RenderSprite>,
}

impl NineSliceSprite {
    /// Slice `image` with a 1px border drawn 1 unit thick at the origin.
    pub fn new(image: ImageRegion) -> Result<Self> {
        Self::with_border(image, 0.0, 0.0, DEFAULT_BORDER, DEFAULT_BORDER_WIDTH)
    }

    /// Slice `image` with a `border`-pixel border, drawn `border_width`
    /// units thick with its bottom-left corner at `(x, y)`.
    pub fn with_border(
        image: ImageRegion,
        x: f32,
        y: f32,
        border: u32,
        border_width: f32,
    ) -> Result<Self> {
        validate_border_width(border_width)?;
        let regions = slice_image(&image, border)?;
        let mut sprite = Self {
            image,
            border,
            layout: SliceLayout {
                x,
                y,
                border_width,
                ..SliceLayout::default()
            },
            sprites: regions.map(|_, r| RenderSprite::new(r)),
        };
        sprite.update();
        Ok(sprite)
    }

    fn update(&mut self) {
        let (w, h) = self.layout.extent(&self.image);
        let min = 2.0 * self.layout.border_width;
        if w < min || h < min {
            log::warn!(
                "Nine-slice size {w}x{h} is smaller than twice the border width {}; interior clamped",
                self.layout.border_width
            );
        }
        let placement = compute_placement(&self.layout, &self.image, &self.regions());
        for slice in Slice::DRAW_ORDER {
            let p = placement.get(slice);
            let sprite = self.sprites.get_mut(slice);
            sprite.position = (p.x, p.y);
            sprite.scale_x = p.scale_x;
            sprite.scale_y = p.scale_y;
        }
    }

    pub fn image(&self) -> &ImageRegion {
        &self.image
    }

    /// Replace the source image and re-slice it with the current border.
    ///
    /// On error the sprite keeps its previous image.
    pub fn set_image(&mut self, image: ImageRegion) -> Result<()> {
        let regions = slice_image(&image, self.border)?;
        log::debug!(
            "Re-slicing {}x{} image with a {}px border",
            image.width,
            image.height,
            self.border
        );
        self.image = image;
        self.sprites = regions.map(|_, r| RenderSprite::new(r));
        self.update();
        Ok(())
    }

    pub fn x(&self) -> f32 {
        self.layout.x
    }

    pub fn set_x(&mut self, x: f32) {
        self.layout.x = x;
        self.update();
    }

    pub fn y(&self) -> f32 {
        self.layout.y
    }

    pub fn set_y(&mut self, y: f32) {
        self.layout.y = y;
        self.update();
    }

    pub fn position(&self) -> (f32, f32) {
        (self.layout.x, self.layout.y)
    }

    pub fn set_position(&mut self, (x, y): (f32, f32)) {
        self.layout.x = x;
        self.layout.y = y;
        self.update();
    }

    pub fn scale_x(&self) -> f32 {
        self.layout.scale_x
    }

    pub fn set_scale_x(&mut self, scale_x: f32) {
        self.layout.scale_x = sanitize_scale(scale_x);
        self.update();
    }

    pub fn scale_y(&self) -> f32 {
        self.layout.scale_y
    }

    pub fn set_scale_y(&mut self, scale_y: f32) {
        self.layout.scale_y = sanitize_scale(scale_y);
        self.update();
    }

    pub fn scale(&self) -> (f32, f32) {
        (self.layout.scale_x, self.layout.scale_y)
    }

    /// Set both scale factors to the same value.
    pub fn set_scale(&mut self, scale: f32) {
        let scale = sanitize_scale(scale);
        self.layout.scale_x = scale;
        self.layout.scale_y = scale;
        self.update();
    }

    /// Move and rescale so the composite covers the given rectangle.
    pub fn fit_to(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.layout.x = x;
        self.layout.y = y;
        self.layout.scale_x = sanitize_scale(width / self.image.width as f32);
        self.layout.scale_y = sanitize_scale(height / self.image.height as f32);
        self.update();
    }

    pub fn border(&self) -> u32 {
        self.border
    }

    pub fn border_width(&self) -> f32 {
        self.layout.border_width
    }

    pub fn layout(&self) -> &SliceLayout {
        &self.layout
    }

    /// Rendered composite width.
    pub fn width(&self) -> f32 {
        self.layout.extent(&self.image).0
    }

    /// Rendered composite height.
    pub fn height(&self) -> f32 {
        self.layout.extent(&self.image).1
    }

    /// The sub-image view backing each slice.
    pub fn regions(&self) -> Slices<ImageRegion> {
        self.sprites.map(|_, s| s.image)
    }

    pub fn sprites(&self) -> &Slices<RenderSprite> {
        &self.sprites
    }

    pub fn draw(&self, backend: &mut dyn SpriteBackend) -> Result<()> {
        for (_, sprite) in self.sprites.iter() {
            sprite.draw(backend)?;
        }
        Ok(())
    }
}
