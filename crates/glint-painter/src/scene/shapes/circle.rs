use crate::paint::Color;

/// Circle (ellipse) filling its primitive's rectangle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CircleShape {
    pub fill: Color,
    pub stroke: Color,
    /// Stroke width in logical pixels. `0` = no stroke.
    pub stroke_width: f32,
}

impl CircleShape {
    #[inline]
    pub fn new(fill: Color) -> Self {
        Self { fill, stroke: Color::transparent(), stroke_width: 0.0 }
    }

    #[inline]
    pub fn with_stroke(mut self, stroke: Color, width: f32) -> Self {
        self.stroke = stroke;
        self.stroke_width = width;
        self
    }
}
