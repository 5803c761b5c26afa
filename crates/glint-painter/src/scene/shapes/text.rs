use crate::coords::Size;
use crate::paint::Color;
use crate::text::{FontId, FontSystem};

/// Horizontal placement of text inside its container.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum TextAlign {
    #[default]
    Leading,
    Center,
    Trailing,
}

/// Single run of text.
///
/// `min_size` is the natural size of the laid-out text; the primitive's own
/// size is the container it is aligned within.
#[derive(Debug, Clone, PartialEq)]
pub struct TextShape {
    pub text: String,
    pub align: TextAlign,
    pub min_size: Size,
    pub color: Color,
    pub font: FontId,
    /// Font size in logical pixels.
    pub font_size: f32,
}

impl TextShape {
    pub fn new(text: impl Into<String>, font: FontId, font_size: f32, color: Color) -> Self {
        Self {
            text: text.into(),
            align: TextAlign::Leading,
            min_size: Size::zero(),
            color,
            font,
            font_size,
        }
    }

    #[inline]
    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    #[inline]
    pub fn with_min_size(mut self, min_size: Size) -> Self {
        self.min_size = min_size;
        self
    }

    /// Sets `min_size` from the font metrics in `fonts`.
    pub fn measured(mut self, fonts: &FontSystem) -> Self {
        self.min_size = fonts.measure_text(&self.text, self.font, self.font_size);
        self
    }
}
