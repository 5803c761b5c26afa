/// Logical dimensions of a primitive or of the enclosing frame.
///
/// Widths and heights are non-negative. A frame used as the normalization
/// divisor must additionally be [`drawable`](Size::is_drawable).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Width over height. Undefined (inf/NaN) for a zero height.
    #[inline]
    pub fn aspect(self) -> f32 {
        self.width / self.height
    }

    /// True when both dimensions are finite and strictly positive.
    #[inline]
    pub fn is_drawable(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Pixel dimensions at `scale` pixels per logical pixel, at least 1×1.
    #[inline]
    pub fn to_pixels(self, scale: f32) -> (u32, u32) {
        let w = (self.width * scale).ceil().max(1.0) as u32;
        let h = (self.height * scale).ceil().max(1.0) as u32;
        (w, h)
    }
}
