use crate::coords::Position;
use crate::paint::Color;

/// Straight line segment.
///
/// `from` and `to` are relative to the primitive's top-left corner and
/// normally lie on the border of its rectangle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LineShape {
    pub from: Position,
    pub to: Position,
    pub stroke: Color,
    /// Stroke width in logical pixels.
    pub width: f32,
}

impl LineShape {
    #[inline]
    pub fn new(from: Position, to: Position, stroke: Color, width: f32) -> Self {
        Self { from, to, stroke, width }
    }
}
