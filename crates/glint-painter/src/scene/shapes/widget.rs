use crate::paint::Color;

/// Composite container drawn as its background only.
///
/// `background` is the color resolved by the host's widget renderer; the
/// painter skips the widget entirely when it is fully transparent.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WidgetShape {
    pub background: Color,
}

impl WidgetShape {
    #[inline]
    pub fn new(background: Color) -> Self {
        Self { background }
    }
}
