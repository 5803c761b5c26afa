use image::RgbaImage;

use crate::coords::Size;
use crate::paint::{LinearGradient, RadialGradient};

use super::from_fn;

pub fn linear_gradient(gradient: &LinearGradient, size: Size, scale: f32) -> RgbaImage {
    let (w, h) = size.to_pixels(scale);
    from_fn(w, h, |x, y| gradient.color_at(x, y, w as f32, h as f32))
}

pub fn radial_gradient(gradient: &RadialGradient, size: Size, scale: f32) -> RgbaImage {
    let (w, h) = size.to_pixels(scale);
    from_fn(w, h, |x, y| gradient.color_at(x, y, w as f32, h as f32))
}
