use crate::coords::Position;

use super::Color;

/// Two-color linear gradient filling a primitive's rectangle.
///
/// `angle` is in degrees, clockwise: `0` runs top → bottom, `90` runs
/// left → right.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LinearGradient {
    pub start_color: Color,
    pub end_color: Color,
    pub angle: f32,
}

impl LinearGradient {
    #[inline]
    pub fn new(start_color: Color, end_color: Color, angle: f32) -> Self {
        Self { start_color, end_color, angle }
    }

    /// Top → bottom gradient.
    #[inline]
    pub fn vertical(start_color: Color, end_color: Color) -> Self {
        Self::new(start_color, end_color, 0.0)
    }

    /// Left → right gradient.
    #[inline]
    pub fn horizontal(start_color: Color, end_color: Color) -> Self {
        Self::new(start_color, end_color, 90.0)
    }

    /// Color of the pixel whose center is at (`x`, `y`) in a `w` × `h` image.
    ///
    /// The gradient axis passes through the image center; its length is the
    /// projection of the image diagonal on the axis so both corners reached by
    /// the axis get the pure start/end colors.
    pub fn color_at(&self, x: f32, y: f32, w: f32, h: f32) -> Color {
        let rad = self.angle.to_radians();
        let (dx, dy) = (rad.sin(), rad.cos());
        let half_len = (w * dx.abs() + h * dy.abs()) / 2.0;
        if half_len <= 0.0 {
            return self.start_color;
        }
        let proj = (x - w / 2.0) * dx + (y - h / 2.0) * dy;
        self.start_color.lerp(self.end_color, (proj / half_len + 1.0) / 2.0)
    }
}

/// Two-color radial gradient.
///
/// `center_offset` moves the center as a fraction of the size from the
/// middle of the rectangle (`(0, 0)` is centered, `(0.5, 0.5)` is the
/// bottom-right corner). The end color is reached at the furthest edge
/// along each axis, so the gradient is elliptical for non-square shapes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RadialGradient {
    pub start_color: Color,
    pub end_color: Color,
    pub center_offset: Position,
}

impl RadialGradient {
    #[inline]
    pub fn new(start_color: Color, end_color: Color) -> Self {
        Self { start_color, end_color, center_offset: Position::zero() }
    }

    #[inline]
    pub fn with_center_offset(mut self, offset: Position) -> Self {
        self.center_offset = offset;
        self
    }

    pub fn color_at(&self, x: f32, y: f32, w: f32, h: f32) -> Color {
        let cx = w * (0.5 + self.center_offset.x);
        let cy = h * (0.5 + self.center_offset.y);
        let rx = cx.max(w - cx);
        let ry = cy.max(h - cy);
        if rx <= 0.0 || ry <= 0.0 {
            return self.start_color;
        }
        let nx = (x - cx) / rx;
        let ny = (y - cy) / ry;
        self.start_color.lerp(self.end_color, (nx * nx + ny * ny).sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: f32 = 100.0;
    const H: f32 = 50.0;

    #[test]
    fn vertical_runs_top_to_bottom() {
        let g = LinearGradient::vertical(Color::black(), Color::white());
        assert_eq!(g.color_at(50.0, 0.0, W, H), Color::black());
        assert_eq!(g.color_at(50.0, H, W, H), Color::white());
        let mid = g.color_at(50.0, H / 2.0, W, H);
        assert!((mid.r - 0.5).abs() < 1e-5);
    }

    #[test]
    fn horizontal_runs_left_to_right() {
        let g = LinearGradient::horizontal(Color::black(), Color::white());
        assert!(g.color_at(0.0, 10.0, W, H).r < 1e-5);
        assert!((g.color_at(W, 10.0, W, H).r - 1.0).abs() < 1e-5);
    }

    #[test]
    fn radial_center_is_start_color() {
        let g = RadialGradient::new(Color::white(), Color::black());
        assert_eq!(g.color_at(W / 2.0, H / 2.0, W, H), Color::white());
        assert_eq!(g.color_at(W, H / 2.0, W, H), Color::black());
    }

    #[test]
    fn radial_offset_moves_center() {
        let g = RadialGradient::new(Color::white(), Color::black())
            .with_center_offset(Position::new(-0.5, -0.5));
        assert_eq!(g.color_at(0.0, 0.0, W, H), Color::white());
    }
}
