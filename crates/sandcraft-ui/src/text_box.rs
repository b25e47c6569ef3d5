//! TextBox widget: single-line text input with caret and selection.

use crate::nine_slice::NineSliceSprite;
use crate::widget::{EventResult, Focusable, InputReceiver, Widget, WidgetBounds};
use sandcraft_types::backend::{ImageRegion, SpriteBackend};
use sandcraft_types::error::Result;
use sandcraft_types::input::{Modifiers, MouseButton, TextMotion};

/// Focusable single-line text input drawn inside a nine-slice frame.
///
/// Text is only accepted while focused. The host renders the glyphs; this
/// widget owns the editing state and the frame.
pub struct TextBox {
    bounds: WidgetBounds,
    frame: NineSliceSprite,
    text: String,
    /// Caret position as a character index.
    caret: usize,
    /// Character index where the current selection started.
    anchor: Option<usize>,
    focused: bool,
}

impl TextBox {
    pub fn new(frame_image: ImageRegion, bounds: WidgetBounds, border_width: f32) -> Result<Self> {
        let frame = NineSliceSprite::with_border(frame_image, bounds.x, bounds.y, 1, border_width)?;
        let mut text_box = Self {
            bounds,
            frame,
            text: String::new(),
            caret: 0,
            anchor: None,
            focused: false,
        };
        text_box.update();
        Ok(text_box)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the content and move the caret to the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.caret = self.char_len();
        self.anchor = None;
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn frame(&self) -> &NineSliceSprite {
        &self.frame
    }

    /// Selected character range, ordered, if non-empty.
    pub fn selection(&self) -> Option<(usize, usize)> {
        let anchor = self.anchor?;
        match anchor.cmp(&self.caret) {
            std::cmp::Ordering::Less => Some((anchor, self.caret)),
            std::cmp::Ordering::Greater => Some((self.caret, anchor)),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn selected_text(&self) -> &str {
        match self.selection() {
            Some((start, end)) => &self.text[self.byte_pos(start)..self.byte_pos(end)],
            None => "",
        }
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_pos(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    /// Remove the selected text. Returns true if anything was removed.
    fn delete_selection(&mut self) -> bool {
        let Some((start, end)) = self.selection() else {
            self.anchor = None;
            return false;
        };
        let range = self.byte_pos(start)..self.byte_pos(end);
        self.text.drain(range);
        self.caret = start;
        self.anchor = None;
        true
    }

    fn insert(&mut self, s: &str) {
        self.delete_selection();
        let at = self.byte_pos(self.caret);
        self.text.insert_str(at, s);
        self.caret += s.chars().count();
    }

    fn backspace(&mut self) {
        if self.delete_selection() || self.caret == 0 {
            return;
        }
        self.caret -= 1;
        let at = self.byte_pos(self.caret);
        self.text.remove(at);
    }

    fn delete(&mut self) {
        if self.delete_selection() || self.caret >= self.char_len() {
            return;
        }
        let at = self.byte_pos(self.caret);
        self.text.remove(at);
    }

    /// Caret position after `motion`, or `None` for motions that do not
    /// move it on a single line.
    fn moved_caret(&self, motion: TextMotion) -> Option<usize> {
        match motion {
            TextMotion::Left => Some(self.caret.saturating_sub(1)),
            TextMotion::Right => Some((self.caret + 1).min(self.char_len())),
            TextMotion::BeginningOfLine => Some(0),
            TextMotion::EndOfLine => Some(self.char_len()),
            TextMotion::Up | TextMotion::Down | TextMotion::Backspace | TextMotion::Delete => None,
        }
    }
}

impl Widget for TextBox {
    fn bounds(&self) -> &WidgetBounds {
        &self.bounds
    }

    fn bounds_mut(&mut self) -> &mut WidgetBounds {
        &mut self.bounds
    }

    fn update(&mut self) {
        let b = self.bounds;
        self.frame.fit_to(b.x, b.y, b.width, b.height);
    }

    fn draw(&self, backend: &mut dyn SpriteBackend) -> Result<()> {
        self.frame.draw(backend)
    }
}

impl Focusable for TextBox {
    fn is_focused(&self) -> bool {
        self.focused
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_unfocus(&mut self) {
        self.focused = false;
        self.anchor = None;
    }
}

impl InputReceiver for TextBox {
    fn on_mouse_press(
        &mut self,
        x: f32,
        y: f32,
        _button: MouseButton,
        _modifiers: Modifiers,
    ) -> EventResult {
        if self.check_hit(x, y) {
            EventResult::Handled
        } else {
            EventResult::Ignored
        }
    }

    fn on_text(&mut self, text: &str) -> EventResult {
        if !self.focused {
            return EventResult::Ignored;
        }
        // Line breaks never enter a single-line box.
        let filtered: String = text.chars().filter(|c| !c.is_control()).collect();
        if filtered.is_empty() {
            return EventResult::Ignored;
        }
        self.insert(&filtered);
        EventResult::Handled
    }

    fn on_text_motion(&mut self, motion: TextMotion) -> EventResult {
        if !self.focused {
            return EventResult::Ignored;
        }
        match motion {
            TextMotion::Backspace => self.backspace(),
            TextMotion::Delete => self.delete(),
            _ => match self.moved_caret(motion) {
                Some(caret) => {
                    self.caret = caret;
                    self.anchor = None;
                },
                None => return EventResult::Ignored,
            },
        }
        EventResult::Handled
    }

    fn on_text_motion_select(&mut self, motion: TextMotion) -> EventResult {
        if !self.focused {
            return EventResult::Ignored;
        }
        let Some(caret) = self.moved_caret(motion) else {
            return EventResult::Ignored;
        };
        if self.anchor.is_none() {
            self.anchor = Some(self.caret);
        }
        self.caret = caret;
        EventResult::Handled
    }
}
