use std::collections::HashMap;

use image::RgbaImage;
use wgpu::util::DeviceExt;

use crate::config::RendererConfig;
use crate::coords::Size;
use crate::gpu::{BufferHandle, GpuBackend, TextureFactory, TextureHandle};
use crate::paint::{Color, LinearGradient, RadialGradient};
use crate::pixmap::{self, TextureError};
use crate::scene::{CircleShape, ImageShape, LineShape, RasterShape, TextShape};
use crate::text::FontSystem;
use crate::transform::Quad;

use super::pipeline::{DrawParams, QuadPipeline};

/// Recorded draws past which a missing [`WgpuBackend::flush`] is suspected.
const PENDING_WARN_THRESHOLD: usize = 16_384;

struct GpuTexture {
    // Kept alive for the bind group.
    _texture: wgpu::Texture,
    bind_group: wgpu::BindGroup,
}

/// One recorded draw, replayed by [`WgpuBackend::flush`].
struct PendingDraw {
    texture: wgpu::BindGroup,
    vertices: wgpu::Buffer,
    params: wgpu::BindGroup,
}

/// [`GpuBackend`] on top of a wgpu device.
///
/// Textures are generated on the CPU (see [`crate::pixmap`]) and uploaded
/// as premultiplied `Rgba8Unorm`. Draws are recorded in submission order and
/// executed by [`flush`](Self::flush) in a single render pass that loads the
/// existing target contents.
///
/// The vertex buffer used by a draw is the most recently created one that
/// has not been freed, mirroring a bound array buffer.
///
/// Every recorded draw holds a uniform buffer and bind groups until it is
/// flushed, so hosts must call `flush` once per frame.
pub struct WgpuBackend {
    device: wgpu::Device,
    queue: wgpu::Queue,
    pipeline: QuadPipeline,
    fonts: FontSystem,
    config: RendererConfig,

    textures: HashMap<TextureHandle, GpuTexture>,
    buffers: HashMap<BufferHandle, wgpu::Buffer>,
    bound: Option<BufferHandle>,
    pending: Vec<PendingDraw>,

    next_texture: u32,
    next_buffer: u32,
}

impl WgpuBackend {
    /// Creates a backend drawing into targets of `target_format`.
    ///
    /// `device` and `queue` are cheap handles; pass clones of the host's.
    pub fn new(
        device: wgpu::Device,
        queue: wgpu::Queue,
        target_format: wgpu::TextureFormat,
        fonts: FontSystem,
        config: RendererConfig,
    ) -> Self {
        let pipeline = QuadPipeline::new(&device, target_format, config.filter);
        Self {
            device,
            queue,
            pipeline,
            fonts,
            config,
            textures: HashMap::new(),
            buffers: HashMap::new(),
            bound: None,
            pending: Vec::new(),
            next_texture: 1,
            next_buffer: 1,
        }
    }

    pub fn fonts(&self) -> &FontSystem {
        &self.fonts
    }

    pub fn fonts_mut(&mut self) -> &mut FontSystem {
        &mut self.fonts
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }

    pub fn pending_draws(&self) -> usize {
        self.pending.len()
    }

    /// Destroys a texture. Unknown handles are ignored.
    ///
    /// Draws already recorded with it still execute at the next flush.
    pub fn release_texture(&mut self, texture: TextureHandle) {
        if self.textures.remove(&texture).is_none() {
            log::trace!("release of unknown texture {texture:?}");
        }
    }

    /// Encodes every recorded draw into one render pass over `view`.
    ///
    /// Existing contents are loaded, not cleared. Does nothing when no draws
    /// are pending.
    pub fn flush(&mut self, encoder: &mut wgpu::CommandEncoder, view: &wgpu::TextureView) {
        if self.pending.is_empty() {
            return;
        }

        let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("glint paint pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(&self.pipeline.pipeline);
        for draw in self.pending.drain(..) {
            rpass.set_bind_group(0, &draw.texture, &[]);
            rpass.set_bind_group(1, &draw.params, &[]);
            rpass.set_vertex_buffer(0, draw.vertices.slice(..));
            rpass.draw(0..4, 0..1);
        }
    }

    // ── texture upload ─────────────────────────────────────────────────────

    /// Checks generated content of `size` against the device limit before any
    /// pixels are allocated.
    fn fits(&self, what: &str, size: Size) -> bool {
        let (width, height) = size.to_pixels(self.scale());
        fits_texture_limit(what, width, height, self.device.limits().max_texture_dimension_2d)
    }

    fn upload(&mut self, what: &str, content: Result<RgbaImage, TextureError>) -> Option<TextureHandle> {
        let img = match content {
            Ok(img) => img,
            Err(e) => {
                log::warn!("{what} texture: {e}");
                return None;
            }
        };

        let (width, height) = img.dimensions();
        if !fits_texture_limit(what, width, height, self.device.limits().max_texture_dimension_2d) {
            return None;
        }

        let handle = TextureHandle::from_raw(self.next_texture)?;
        self.next_texture = self.next_texture.checked_add(1)?;

        let size = wgpu::Extent3d { width, height, depth_or_array_layers: 1 };
        let texture = self.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("glint primitive texture"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        self.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            img.as_raw(),
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let bind_group = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("glint texture bind group"),
            layout: &self.pipeline.texture_layout,
            entries: &[
                wgpu::BindGroupEntry { binding: 0, resource: wgpu::BindingResource::TextureView(&view) },
                wgpu::BindGroupEntry { binding: 1, resource: wgpu::BindingResource::Sampler(&self.pipeline.sampler) },
            ],
        });

        log::trace!("{what} texture {handle:?} uploaded ({width}×{height})");
        self.textures.insert(handle, GpuTexture { _texture: texture, bind_group });
        Some(handle)
    }

    fn scale(&self) -> f32 {
        self.config.pixel_scale()
    }
}

impl TextureFactory for WgpuBackend {
    fn fill_texture(&mut self, fill: Color) -> Option<TextureHandle> {
        self.upload("fill", Ok(pixmap::solid(fill)))
    }

    fn circle_texture(&mut self, circle: &CircleShape, size: Size, pad: f32) -> Option<TextureHandle> {
        if !self.fits("circle", padded(size, pad)) {
            return None;
        }
        let img = pixmap::circle(circle, size, pad, self.scale());
        self.upload("circle", Ok(img))
    }

    fn line_texture(&mut self, line: &LineShape, size: Size, pad: f32) -> Option<TextureHandle> {
        if !self.fits("line", padded(size, pad)) {
            return None;
        }
        let img = pixmap::line(line, size, pad, self.scale());
        self.upload("line", Ok(img))
    }

    fn image_texture(&mut self, image: &ImageShape, _size: Size) -> Option<(TextureHandle, f32)> {
        let img = pixmap::decode_image(&image.source);
        let aspect = img.as_ref().map(|img| img.width() as f32 / img.height() as f32).unwrap_or(0.0);
        let texture = self.upload("image", img)?;
        Some((texture, aspect))
    }

    fn raster_texture(&mut self, raster: &RasterShape, size: Size) -> Option<TextureHandle> {
        if !self.fits("raster", size) {
            return None;
        }
        let img = pixmap::raster(raster, size, self.scale());
        self.upload("raster", img)
    }

    fn text_texture(&mut self, text: &TextShape) -> Option<TextureHandle> {
        if !self.fits("text", text.min_size) {
            return None;
        }
        let img = pixmap::text(&self.fonts, text, self.scale());
        self.upload("text", img)
    }

    fn linear_gradient_texture(&mut self, gradient: &LinearGradient, size: Size) -> Option<TextureHandle> {
        if !self.fits("linear gradient", size) {
            return None;
        }
        let img = pixmap::linear_gradient(gradient, size, self.scale());
        self.upload("linear gradient", Ok(img))
    }

    fn radial_gradient_texture(&mut self, gradient: &RadialGradient, size: Size) -> Option<TextureHandle> {
        if !self.fits("radial gradient", size) {
            return None;
        }
        let img = pixmap::radial_gradient(gradient, size, self.scale());
        self.upload("radial gradient", Ok(img))
    }
}

impl GpuBackend for WgpuBackend {
    fn create_buffer(&mut self, points: &[f32]) -> BufferHandle {
        let handle = BufferHandle(self.next_buffer);
        self.next_buffer = self.next_buffer.wrapping_add(1);

        let buffer = self.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("glint quad vbo"),
            contents: bytemuck::cast_slice(points),
            usage: wgpu::BufferUsages::VERTEX,
        });
        self.buffers.insert(handle, buffer);
        self.bound = Some(handle);
        handle
    }

    fn free_buffer(&mut self, buffer: BufferHandle) {
        // Recorded draws hold their own reference until flushed.
        self.buffers.remove(&buffer);
        if self.bound == Some(buffer) {
            self.bound = None;
        }
    }

    fn draw_texture(&mut self, texture: TextureHandle, quad: &Quad, opacity: f32) {
        let Some(tex) = self.textures.get(&texture) else {
            log::warn!("draw with unknown texture {texture:?}");
            return;
        };

        let vertices = match self.bound.and_then(|b| self.buffers.get(&b)) {
            Some(buffer) => buffer.clone(),
            None => self.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("glint quad vbo"),
                contents: bytemuck::cast_slice(&quad.points()),
                usage: wgpu::BufferUsages::VERTEX,
            }),
        };

        let params_ubo = self.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("glint draw params ubo"),
            contents: bytemuck::bytes_of(&DrawParams::new(opacity)),
            usage: wgpu::BufferUsages::UNIFORM,
        });
        let params = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("glint draw params bind group"),
            layout: &self.pipeline.params_layout,
            entries: &[wgpu::BindGroupEntry { binding: 0, resource: params_ubo.as_entire_binding() }],
        });

        self.pending.push(PendingDraw { texture: tex.bind_group.clone(), vertices, params });
        if self.pending.len() == PENDING_WARN_THRESHOLD {
            log::warn!("{PENDING_WARN_THRESHOLD} draws recorded without a flush");
        }
    }
}

fn padded(size: Size, pad: f32) -> Size {
    Size::new(size.width + 2.0 * pad, size.height + 2.0 * pad)
}

fn fits_texture_limit(what: &str, width: u32, height: u32, max: u32) -> bool {
    if width > max || height > max {
        log::warn!("{what} texture {width}×{height} exceeds the device limit {max}");
        return false;
    }
    true
}
