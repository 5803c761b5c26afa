use image::{Rgba, RgbaImage};

use crate::coords::{Position, Size};
use crate::paint::Color;
use crate::scene::{CircleShape, LineShape};

use super::from_fn;

/// 1×1 texture of `fill`; stretched over the whole quad.
pub fn solid(fill: Color) -> RgbaImage {
    RgbaImage::from_pixel(1, 1, Rgba(fill.to_rgba8()))
}

/// Anti-aliased ellipse inscribed in `size`, centered in the padded area.
///
/// The stroke lies inside the ellipse outline.
pub fn circle(circle: &CircleShape, size: Size, pad: f32, scale: f32) -> RgbaImage {
    let (w, h) = padded(size, pad).to_pixels(scale);
    let rx = size.width * scale / 2.0;
    let ry = size.height * scale / 2.0;
    let (cx, cy) = (w as f32 / 2.0, h as f32 / 2.0);
    let stroke_px = circle.stroke_width.max(0.0) * scale;

    from_fn(w, h, |x, y| {
        if rx <= 0.0 || ry <= 0.0 {
            return Color::transparent();
        }
        let nx = (x - cx) / rx;
        let ny = (y - cy) / ry;
        // Approximate signed distance to the outline, in pixels.
        let d = ((nx * nx + ny * ny).sqrt() - 1.0) * rx.min(ry);
        let outer = (0.5 - d).clamp(0.0, 1.0);
        let inner = (0.5 - (d + stroke_px)).clamp(0.0, 1.0);
        circle.stroke.scaled(outer - inner).over(circle.fill.scaled(inner))
    })
}

/// Anti-aliased segment with round-ish ends.
pub fn line(line: &LineShape, size: Size, pad: f32, scale: f32) -> RgbaImage {
    let (w, h) = padded(size, pad).to_pixels(scale);
    let to_px = |p: Position| Position::new((p.x + pad) * scale, (p.y + pad) * scale);
    let (a, b) = (to_px(line.from), to_px(line.to));
    let half = line.width.max(0.0) * scale / 2.0;

    from_fn(w, h, |x, y| {
        let d = distance_to_segment(Position::new(x, y), a, b);
        line.stroke.scaled(half + 0.5 - d)
    })
}

fn padded(size: Size, pad: f32) -> Size {
    Size::new(size.width + 2.0 * pad, size.height + 2.0 * pad)
}

fn distance_to_segment(p: Position, a: Position, b: Position) -> f32 {
    let ab = b - a;
    let ap = p - a;
    let len2 = ab.x * ab.x + ab.y * ab.y;
    let t = if len2 > 0.0 { ((ap.x * ab.x + ap.y * ab.y) / len2).clamp(0.0, 1.0) } else { 0.0 };
    let dx = ap.x - ab.x * t;
    let dy = ap.y - ab.y * t;
    (dx * dx + dy * dy).sqrt()
}
