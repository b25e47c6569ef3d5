//! Widget trait, bounds, and input capabilities.
//!
//! Every widget has bounds and can draw itself. Focus and input handling
//! are opt-in capability traits: a widget implements [`Focusable`] or
//! [`InputReceiver`] only when it reacts to those events.

use sandcraft_types::backend::SpriteBackend;
use sandcraft_types::error::Result;
use sandcraft_types::input::{Key, Modifiers, MouseButton, MouseButtons, TextMotion, WidgetEvent};

/// Axis-aligned widget rectangle in render space (origin bottom-left).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WidgetBounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl WidgetBounds {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// True if `(px, py)` lies strictly inside. Points on an edge miss.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        self.x < px && px < self.x + self.width && self.y < py && py < self.y + self.height
    }
}

/// Minimum interface for a UI element.
///
/// Setters store the new value and then call [`Widget::update`] so the
/// widget can re-derive whatever it renders from its bounds.
pub trait Widget {
    fn bounds(&self) -> &WidgetBounds;

    fn bounds_mut(&mut self) -> &mut WidgetBounds;

    /// Re-derive render state after the bounds changed.
    fn update(&mut self) {}

    /// Draw the widget at its current bounds.
    fn draw(&self, backend: &mut dyn SpriteBackend) -> Result<()>;

    fn check_hit(&self, x: f32, y: f32) -> bool {
        self.bounds().contains(x, y)
    }

    fn x(&self) -> f32 {
        self.bounds().x
    }

    fn set_x(&mut self, x: f32) {
        self.bounds_mut().x = x;
        self.update();
    }

    fn y(&self) -> f32 {
        self.bounds().y
    }

    fn set_y(&mut self, y: f32) {
        self.bounds_mut().y = y;
        self.update();
    }

    fn width(&self) -> f32 {
        self.bounds().width
    }

    fn set_width(&mut self, width: f32) {
        self.bounds_mut().width = width;
        self.update();
    }

    fn height(&self) -> f32 {
        self.bounds().height
    }

    fn set_height(&mut self, height: f32) {
        self.bounds_mut().height = height;
        self.update();
    }

    /// Bottom-left corner in render space.
    fn position(&self) -> (f32, f32) {
        let b = self.bounds();
        (b.x, b.y)
    }

    /// Move the bottom-left corner, in render space.
    fn set_position(&mut self, x: f32, y: f32) {
        let b = self.bounds_mut();
        b.x = x;
        b.y = y;
        self.update();
    }

    /// Move using window coordinates measured from the top-left corner.
    ///
    /// `top_y` is flipped against `window_height` into render space, so the
    /// point becomes the widget's bottom-left anchor.
    fn place_from_top(&mut self, x: f32, top_y: f32, window_height: f32) {
        self.set_position(x, window_height - top_y);
    }
}

/// Whether a widget consumed an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Handled,
    Ignored,
}

impl EventResult {
    pub fn is_handled(self) -> bool {
        self == Self::Handled
    }
}

/// A widget that can hold keyboard focus.
pub trait Focusable {
    fn is_focused(&self) -> bool;

    fn on_focus(&mut self);

    fn on_unfocus(&mut self);
}

/// Keyboard, mouse, and text hooks. Every hook ignores the event unless
/// overridden.
pub trait InputReceiver {
    fn on_key_press(&mut self, _key: Key, _modifiers: Modifiers) -> EventResult {
        EventResult::Ignored
    }

    fn on_key_release(&mut self, _key: Key, _modifiers: Modifiers) -> EventResult {
        EventResult::Ignored
    }

    fn on_mouse_press(
        &mut self,
        _x: f32,
        _y: f32,
        _button: MouseButton,
        _modifiers: Modifiers,
    ) -> EventResult {
        EventResult::Ignored
    }

    fn on_mouse_release(
        &mut self,
        _x: f32,
        _y: f32,
        _button: MouseButton,
        _modifiers: Modifiers,
    ) -> EventResult {
        EventResult::Ignored
    }

    fn on_mouse_motion(&mut self, _x: f32, _y: f32, _dx: f32, _dy: f32) -> EventResult {
        EventResult::Ignored
    }

    fn on_mouse_drag(
        &mut self,
        _x: f32,
        _y: f32,
        _dx: f32,
        _dy: f32,
        _buttons: MouseButtons,
        _modifiers: Modifiers,
    ) -> EventResult {
        EventResult::Ignored
    }

    fn on_mouse_scroll(&mut self, _x: f32, _y: f32, _scroll_x: f32, _scroll_y: f32) -> EventResult {
        EventResult::Ignored
    }

    fn on_text(&mut self, _text: &str) -> EventResult {
        EventResult::Ignored
    }

    fn on_text_motion(&mut self, _motion: TextMotion) -> EventResult {
        EventResult::Ignored
    }

    fn on_text_motion_select(&mut self, _motion: TextMotion) -> EventResult {
        EventResult::Ignored
    }
}

/// Route one event to the matching hook of `widget`.
pub fn dispatch<W>(widget: &mut W, event: &WidgetEvent) -> EventResult
where
    W: Focusable + InputReceiver + ?Sized,
{
    match *event {
        WidgetEvent::Focus => {
            widget.on_focus();
            EventResult::Handled
        },
        WidgetEvent::Unfocus => {
            widget.on_unfocus();
            EventResult::Handled
        },
        WidgetEvent::KeyPress { key, modifiers } => widget.on_key_press(key, modifiers),
        WidgetEvent::KeyRelease { key, modifiers } => widget.on_key_release(key, modifiers),
        WidgetEvent::MousePress {
            x,
            y,
            button,
            modifiers,
        } => widget.on_mouse_press(x, y, button, modifiers),
        WidgetEvent::MouseRelease {
            x,
            y,
            button,
            modifiers,
        } => widget.on_mouse_release(x, y, button, modifiers),
        WidgetEvent::MouseMotion { x, y, dx, dy } => widget.on_mouse_motion(x, y, dx, dy),
        WidgetEvent::MouseDrag {
            x,
            y,
            dx,
            dy,
            buttons,
            modifiers,
        } => widget.on_mouse_drag(x, y, dx, dy, buttons, modifiers),
        WidgetEvent::MouseScroll {
            x,
            y,
            scroll_x,
            scroll_y,
        } => widget.on_mouse_scroll(x, y, scroll_x, scroll_y),
        WidgetEvent::Text(ref text) => widget.on_text(text),
        WidgetEvent::TextMotion(motion) => widget.on_text_motion(motion),
        WidgetEvent::TextMotionSelect(motion) => widget.on_text_motion_select(motion),
    }
}
