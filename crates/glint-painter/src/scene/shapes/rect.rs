use crate::paint::Color;

/// Solid rectangle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RectShape {
    pub fill: Color,
}

impl RectShape {
    #[inline]
    pub fn new(fill: Color) -> Self {
        Self { fill }
    }
}
