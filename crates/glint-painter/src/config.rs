//! Painter configuration.

use crate::transform::VECTOR_PAD;

/// Sampling used when a texture is drawn at a size other than its own.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum TextureFilter {
    #[default]
    Linear,
    Nearest,
}

/// Settings shared by a canvas and the backend that draws it.
#[derive(Debug, Clone, PartialEq)]
pub struct RendererConfig {
    /// Margin (logical px) around circles and lines so anti-aliased edges
    /// are not clipped.
    pub vector_pad: f32,

    /// Texture pixels per logical pixel, typically the display scale factor.
    pub texture_scale: f32,

    pub filter: TextureFilter,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            vector_pad: VECTOR_PAD,
            texture_scale: 1.0,
            filter: TextureFilter::Linear,
        }
    }
}

impl RendererConfig {
    #[inline]
    pub fn with_texture_scale(mut self, scale: f32) -> Self {
        self.texture_scale = scale;
        self
    }

    /// `texture_scale` clamped to a usable value.
    #[inline]
    pub fn pixel_scale(&self) -> f32 {
        if self.texture_scale.is_finite() && self.texture_scale > 0.0 {
            self.texture_scale
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_scale_falls_back_to_one() {
        assert_eq!(RendererConfig::default().with_texture_scale(0.0).pixel_scale(), 1.0);
        assert_eq!(RendererConfig::default().with_texture_scale(f32::NAN).pixel_scale(), 1.0);
        assert_eq!(RendererConfig::default().with_texture_scale(2.0).pixel_scale(), 2.0);
    }
}
