//! Capabilities the painter consumes from the GPU layer.
//!
//! The painter never talks to a graphics API directly. It allocates a
//! transient vertex buffer per quad, issues one textured draw and frees the
//! buffer, and asks a [`TextureFactory`] for kind-specific texture content.
//! [`crate::render::WgpuBackend`] implements both traits on top of wgpu.

use std::num::NonZeroU32;

use crate::coords::Size;
use crate::paint::{Color, LinearGradient, RadialGradient};
use crate::scene::{CircleShape, ImageShape, LineShape, RasterShape, TextShape};
use crate::transform::Quad;

/// Non-null GPU texture handle.
///
/// A texture that cannot be produced yet is represented as `None` wherever a
/// handle is returned; the painter skips such primitives for the frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TextureHandle(pub NonZeroU32);

impl TextureHandle {
    /// Wraps a raw id. Returns `None` for `0`, the "not ready" value.
    #[inline]
    pub fn from_raw(raw: u32) -> Option<Self> {
        NonZeroU32::new(raw).map(Self)
    }

    #[inline]
    pub fn raw(self) -> u32 {
        self.0.get()
    }
}

/// Handle to a transient vertex buffer holding one quad.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct BufferHandle(pub u32);

/// Kind-specific texture producers.
///
/// Every method returns `None` when the content cannot be produced (missing
/// font, undecodable image, zero-sized raster...). That is not an error for
/// the painter: the primitive is skipped and retried on the next frame.
pub trait TextureFactory {
    /// Solid fill used for rectangles and widget backgrounds.
    fn fill_texture(&mut self, fill: Color) -> Option<TextureHandle>;

    /// Circle (ellipse) inscribed in `size`, inset by `pad` on every side.
    fn circle_texture(&mut self, circle: &CircleShape, size: Size, pad: f32) -> Option<TextureHandle>;

    fn line_texture(&mut self, line: &LineShape, size: Size, pad: f32) -> Option<TextureHandle>;

    /// Decoded image plus the aspect ratio (width / height) of its pixels.
    fn image_texture(&mut self, image: &ImageShape, size: Size) -> Option<(TextureHandle, f32)>;

    fn raster_texture(&mut self, raster: &RasterShape, size: Size) -> Option<TextureHandle>;

    /// Text rendered at its natural size.
    fn text_texture(&mut self, text: &TextShape) -> Option<TextureHandle>;

    fn linear_gradient_texture(&mut self, gradient: &LinearGradient, size: Size) -> Option<TextureHandle>;

    fn radial_gradient_texture(&mut self, gradient: &RadialGradient, size: Size) -> Option<TextureHandle>;
}

/// Buffer and draw capabilities.
///
/// Implementations must be used from the thread that owns the GPU context.
pub trait GpuBackend: TextureFactory {
    /// Uploads `points` (one [`Quad`], 20 floats) into a new vertex buffer.
    fn create_buffer(&mut self, points: &[f32]) -> BufferHandle;

    fn free_buffer(&mut self, buffer: BufferHandle);

    /// Draws `texture` over `quad`, scaled by `opacity` in `[0, 1]`.
    fn draw_texture(&mut self, texture: TextureHandle, quad: &Quad, opacity: f32);
}

/// A quad uploaded into a transient buffer for exactly one draw.
///
/// The buffer is freed when the guard drops, on every exit path.
pub struct TransientQuad<'g, G: GpuBackend + ?Sized> {
    gpu: &'g mut G,
    quad: Quad,
    buffer: BufferHandle,
}

impl<'g, G: GpuBackend + ?Sized> TransientQuad<'g, G> {
    pub fn upload(gpu: &'g mut G, quad: Quad) -> Self {
        let buffer = gpu.create_buffer(&quad.points());
        Self { gpu, quad, buffer }
    }

    #[inline]
    pub fn buffer(&self) -> BufferHandle {
        self.buffer
    }

    pub fn draw(&mut self, texture: TextureHandle, opacity: f32) {
        self.gpu.draw_texture(texture, &self.quad, opacity);
    }
}

impl<G: GpuBackend + ?Sized> Drop for TransientQuad<'_, G> {
    fn drop(&mut self) {
        self.gpu.free_buffer(self.buffer);
    }
}
