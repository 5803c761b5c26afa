use super::{Position, Size};

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Position,
    pub size: Size,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Position::new(x, y),
            size: Size::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Position, size: Size) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn min(self) -> Position {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Position {
        Position::new(self.origin.x + self.size.width, self.origin.y + self.size.height)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.width <= 0.0 || self.size.height <= 0.0
    }

    /// Grows the rectangle by `pad` on every side.
    #[inline]
    pub fn inflate(self, pad: f32) -> Self {
        Rect::new(
            self.origin.x - pad,
            self.origin.y - pad,
            self.size.width + 2.0 * pad,
            self.size.height + 2.0 * pad,
        )
    }
}
