//! CPU generation of texture content.
//!
//! Every function returns premultiplied RGBA8 pixels, ready for upload.
//! Sizes are logical; `scale` is the number of texture pixels per logical
//! pixel. Vector shapes are rendered into an area grown by `pad` on every
//! side, matching the padded quad the painter draws them on.

mod decode;
mod error;
mod gradient;
mod shapes;
mod text;

use image::{Rgba, RgbaImage};

use crate::paint::Color;

pub use decode::{decode_image, raster};
pub use error::TextureError;
pub use gradient::{linear_gradient, radial_gradient};
pub use shapes::{circle, line, solid};
pub use text::text;

/// Converts straight-alpha pixels to premultiplied alpha in place.
pub fn premultiply(img: &mut RgbaImage) {
    for Rgba([r, g, b, a]) in img.pixels_mut() {
        let k = *a as u16;
        *r = ((*r as u16 * k + 127) / 255) as u8;
        *g = ((*g as u16 * k + 127) / 255) as u8;
        *b = ((*b as u16 * k + 127) / 255) as u8;
    }
}

/// Fills a `w` × `h` image by evaluating `color_at(x, y)` at pixel centers.
fn from_fn(w: u32, h: u32, mut color_at: impl FnMut(f32, f32) -> Color) -> RgbaImage {
    RgbaImage::from_fn(w, h, |x, y| Rgba(color_at(x as f32 + 0.5, y as f32 + 0.5).to_rgba8()))
}
