use image::RgbaImage;

use crate::coords::Size;
use crate::scene::{ImageSource, RasterShape};

use super::{TextureError, premultiply};

/// Decodes an image into premultiplied pixels.
///
/// The aspect ratio of the result is the image's natural aspect.
pub fn decode_image(source: &ImageSource) -> Result<RgbaImage, TextureError> {
    let mut img = match source {
        ImageSource::Resource(res) => image::load_from_memory(&res.bytes)?.to_rgba8(),
        ImageSource::File(path) => image::open(path)?.to_rgba8(),
        ImageSource::Pixels(pixels) => RgbaImage::clone(pixels),
    };
    check_not_empty(&img)?;
    premultiply(&mut img);
    Ok(img)
}

/// Runs the raster's generator at the pixel size of `size` and premultiplies
/// the result.
pub fn raster(raster: &RasterShape, size: Size, scale: f32) -> Result<RgbaImage, TextureError> {
    let (w, h) = size.to_pixels(scale);
    let mut img = (raster.generator)(w, h);
    check_not_empty(&img)?;
    if img.dimensions() != (w, h) {
        log::trace!("raster generated {:?} for a {w}×{h} request", img.dimensions());
    }
    premultiply(&mut img);
    Ok(img)
}

fn check_not_empty(img: &RgbaImage) -> Result<(), TextureError> {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(TextureError::Empty { width, height });
    }
    Ok(())
}
