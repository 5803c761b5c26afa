use fontdue::layout::{CoordinateSystem, HorizontalAlign, Layout, LayoutSettings, TextStyle};
use image::{Rgba, RgbaImage};

use crate::paint::Color;
use crate::scene::{TextAlign, TextShape};
use crate::text::FontSystem;

use super::TextureError;

/// Renders `text` into a texture of its `min_size`.
///
/// Unmeasured text (no drawable `min_size`) is rejected as empty.
/// Glyph coverage is blended over a transparent background in the text color.
pub fn text(fonts: &FontSystem, text: &TextShape, scale: f32) -> Result<RgbaImage, TextureError> {
    if !text.min_size.is_drawable() {
        return Err(TextureError::Empty {
            width: text.min_size.width.max(0.0) as u32,
            height: text.min_size.height.max(0.0) as u32,
        });
    }
    let font = fonts.get(text.font).ok_or(TextureError::UnknownFont(text.font))?;

    let (w, h) = text.min_size.to_pixels(scale);
    let mut img = RgbaImage::new(w, h);

    let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
    layout.reset(&LayoutSettings {
        max_width: Some(w as f32),
        horizontal_align: match text.align {
            TextAlign::Leading => HorizontalAlign::Left,
            TextAlign::Center => HorizontalAlign::Center,
            TextAlign::Trailing => HorizontalAlign::Right,
        },
        ..LayoutSettings::default()
    });
    layout.append(&[font], &TextStyle::new(&text.text, text.font_size * scale, 0));

    for glyph in layout.glyphs() {
        if !glyph.char_data.rasterize() || glyph.width == 0 || glyph.height == 0 {
            continue;
        }
        let (metrics, coverage) = font.rasterize_config(glyph.key);
        let gx = glyph.x.round() as i64;
        let gy = glyph.y.round() as i64;
        for row in 0..metrics.height {
            for col in 0..metrics.width {
                let (x, y) = (gx + col as i64, gy + row as i64);
                if x < 0 || y < 0 || x >= w as i64 || y >= h as i64 {
                    continue;
                }
                let cov = coverage[row * metrics.width + col] as f32 / 255.0;
                if cov <= 0.0 {
                    continue;
                }
                let px = img.get_pixel_mut(x as u32, y as u32);
                let below = Color::from_premul(
                    px.0[0] as f32 / 255.0,
                    px.0[1] as f32 / 255.0,
                    px.0[2] as f32 / 255.0,
                    px.0[3] as f32 / 255.0,
                );
                *px = Rgba(text.color.scaled(cov).over(below).to_rgba8());
            }
        }
    }
    Ok(img)
}
