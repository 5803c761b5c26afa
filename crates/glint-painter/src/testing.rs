//! Test doubles for the GPU capabilities and texture resolution.

use slotmap::SlotMap;

use crate::cache::{TextureCache, TextureResolver};
use crate::coords::Size;
use crate::gpu::{BufferHandle, GpuBackend, TextureFactory, TextureHandle};
use crate::paint::{Color, LinearGradient, RadialGradient};
use crate::scene::{CircleShape, ImageShape, LineShape, ObjectId, RasterShape, TextShape};
use crate::transform::Quad;

/// `N` distinct object ids.
pub(crate) fn object_ids<const N: usize>() -> [ObjectId; N] {
    let mut ids: SlotMap<ObjectId, ()> = SlotMap::with_key();
    std::array::from_fn(|_| ids.insert(()))
}

/// Which factory method produced a texture.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum TextureKind {
    Fill,
    Circle,
    Line,
    Image,
    Raster,
    Text,
    LinearGradient,
    RadialGradient,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum GpuCall {
    CreateTexture(TextureKind),
    CreateBuffer(BufferHandle),
    FreeBuffer(BufferHandle),
    Draw { texture: TextureHandle, quad: Quad, opacity: f32 },
}

/// Records every capability call. Textures get sequential ids from 1.
#[derive(Debug)]
pub(crate) struct RecordingGpu {
    pub calls: Vec<GpuCall>,
    /// When false every factory method reports "not ready".
    pub textures_ready: bool,
    /// Aspect reported for decoded images.
    pub image_aspect: f32,
    pub next_texture: u32,
    pub next_buffer: u32,
}

impl Default for RecordingGpu {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            textures_ready: true,
            image_aspect: 1.0,
            next_texture: 1,
            next_buffer: 1,
        }
    }
}

impl RecordingGpu {
    pub fn not_ready() -> Self {
        Self { textures_ready: false, ..Self::default() }
    }

    pub fn draws(&self) -> Vec<(TextureHandle, Quad, f32)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                GpuCall::Draw { texture, quad, opacity } => Some((*texture, *quad, *opacity)),
                _ => None,
            })
            .collect()
    }

    pub fn draw_count(&self) -> usize {
        self.draws().len()
    }

    pub fn buffers_created(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, GpuCall::CreateBuffer(_))).count()
    }

    /// Buffers created but not yet freed.
    pub fn live_buffers(&self) -> usize {
        let freed = self.calls.iter().filter(|c| matches!(c, GpuCall::FreeBuffer(_))).count();
        self.buffers_created() - freed
    }

    pub fn textures_created(&self) -> Vec<TextureKind> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                GpuCall::CreateTexture(kind) => Some(*kind),
                _ => None,
            })
            .collect()
    }

    fn texture(&mut self, kind: TextureKind) -> Option<TextureHandle> {
        self.calls.push(GpuCall::CreateTexture(kind));
        if !self.textures_ready {
            return None;
        }
        let texture = TextureHandle::from_raw(self.next_texture);
        self.next_texture += 1;
        texture
    }
}

impl TextureFactory for RecordingGpu {
    fn fill_texture(&mut self, _fill: Color) -> Option<TextureHandle> {
        self.texture(TextureKind::Fill)
    }

    fn circle_texture(&mut self, _circle: &CircleShape, _size: Size, _pad: f32) -> Option<TextureHandle> {
        self.texture(TextureKind::Circle)
    }

    fn line_texture(&mut self, _line: &LineShape, _size: Size, _pad: f32) -> Option<TextureHandle> {
        self.texture(TextureKind::Line)
    }

    fn image_texture(&mut self, _image: &ImageShape, _size: Size) -> Option<(TextureHandle, f32)> {
        let aspect = self.image_aspect;
        self.texture(TextureKind::Image).map(|t| (t, aspect))
    }

    fn raster_texture(&mut self, _raster: &RasterShape, _size: Size) -> Option<TextureHandle> {
        self.texture(TextureKind::Raster)
    }

    fn text_texture(&mut self, _text: &TextShape) -> Option<TextureHandle> {
        self.texture(TextureKind::Text)
    }

    fn linear_gradient_texture(&mut self, _gradient: &LinearGradient, _size: Size) -> Option<TextureHandle> {
        self.texture(TextureKind::LinearGradient)
    }

    fn radial_gradient_texture(&mut self, _gradient: &RadialGradient, _size: Size) -> Option<TextureHandle> {
        self.texture(TextureKind::RadialGradient)
    }
}

impl GpuBackend for RecordingGpu {
    fn create_buffer(&mut self, points: &[f32]) -> BufferHandle {
        assert_eq!(points.len(), Quad::POINT_COUNT);
        let buffer = BufferHandle(self.next_buffer);
        self.next_buffer += 1;
        self.calls.push(GpuCall::CreateBuffer(buffer));
        buffer
    }

    fn free_buffer(&mut self, buffer: BufferHandle) {
        self.calls.push(GpuCall::FreeBuffer(buffer));
    }

    fn draw_texture(&mut self, texture: TextureHandle, quad: &Quad, opacity: f32) {
        self.calls.push(GpuCall::Draw { texture, quad: *quad, opacity });
    }
}

/// [`TextureCache`] that counts resolution requests.
#[derive(Debug, Default)]
pub(crate) struct CountingResolver {
    pub inner: TextureCache,
    pub requests: usize,
}

impl TextureResolver for CountingResolver {
    fn texture_for(
        &mut self,
        id: ObjectId,
        create: &mut dyn FnMut() -> Option<TextureHandle>,
    ) -> Option<TextureHandle> {
        self.requests += 1;
        self.inner.texture_for(id, create)
    }

    fn invalidate(&mut self, id: ObjectId) -> Option<TextureHandle> {
        self.inner.invalidate(id)
    }
}
