use std::fmt;

use crate::text::FontId;

/// Why texture content could not be produced.
#[derive(Debug)]
pub enum TextureError {
    /// Image bytes or file could not be read or decoded.
    Decode(image::ImageError),
    /// Text refers to a font that is not loaded.
    UnknownFont(FontId),
    /// Content would be zero pixels wide or high.
    Empty { width: u32, height: u32 },
}

impl fmt::Display for TextureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextureError::Decode(e) => write!(f, "image decode failed: {e}"),
            TextureError::UnknownFont(id) => write!(f, "unknown font {id:?}"),
            TextureError::Empty { width, height } => {
                write!(f, "texture content is empty ({width}×{height})")
            }
        }
    }
}

impl std::error::Error for TextureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TextureError::Decode(e) => Some(e),
            _ => None,
        }
    }
}

impl From<image::ImageError> for TextureError {
    fn from(e: image::ImageError) -> Self {
        TextureError::Decode(e)
    }
}
