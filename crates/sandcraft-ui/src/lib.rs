//! sandcraft-ui: widget layer built on `SpriteBackend`.
//!
//! Provides widget bounds and hit-testing, focus and input capability
//! traits, and a nine-slice sprite for borders that keep their thickness
//! under scaling. All rendering goes through `SpriteBackend` trait methods.

pub mod nine_slice;
pub mod panel;
pub mod text_box;
pub mod widget;

#[cfg(test)]
pub(crate) mod test_utils;

pub use nine_slice::NineSliceSprite;
pub use panel::Panel;
pub use text_box::TextBox;
pub use widget::{EventResult, Focusable, InputReceiver, Widget, WidgetBounds};
