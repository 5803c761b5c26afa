//! Per-canvas draw dispatch.
//!
//! The host calls [`Canvas::draw_object`] once per visible primitive per
//! frame, in paint order. Each call resolves the primitive's texture, maps
//! its rectangle to a device-space quad and issues one textured draw.
//!
//! Nothing here fails: a primitive whose texture is not ready is skipped for
//! the frame, so one bad object never aborts the rest of the frame.

use std::sync::Arc;

use crate::cache::{AspectCache, TextureCache, TextureResolver};
use crate::config::RendererConfig;
use crate::coords::{Position, Size};
use crate::gpu::{GpuBackend, TextureHandle, TransientQuad};
use crate::registry::{CanvasId, CanvasRegistry};
use crate::scene::{
    ImageShape, ObjectId, Primitive, PrimitiveKind, RasterShape, Scene, TextAlign, TextShape,
};
use crate::transform::{rect_coords, FillMode};

/// Where and how a primitive's quad is placed.
#[derive(Debug, Copy, Clone)]
struct Placement {
    size: Size,
    pos: Position,
    fill: FillMode,
    aspect: f32,
    pad: f32,
}

impl Placement {
    #[inline]
    fn stretch(size: Size, pos: Position) -> Self {
        Self { size, pos, fill: FillMode::Stretch, aspect: 0.0, pad: 0.0 }
    }

    #[inline]
    fn padded(mut self, pad: f32) -> Self {
        self.pad = pad;
        self
    }
}

/// A drawing surface's view of the scene.
///
/// Owns the canvas' texture and aspect caches and shares the
/// object → canvas registry with other canvases.
pub struct Canvas<R = TextureCache> {
    id: CanvasId,
    registry: Arc<CanvasRegistry>,
    textures: R,
    aspects: AspectCache,
    config: RendererConfig,
}

impl Canvas<TextureCache> {
    pub fn new(registry: Arc<CanvasRegistry>, config: RendererConfig) -> Self {
        Self::with_resolver(registry, TextureCache::new(), config)
    }
}

impl<R: TextureResolver> Canvas<R> {
    /// Creates a canvas that resolves textures through `textures`.
    pub fn with_resolver(registry: Arc<CanvasRegistry>, textures: R, config: RendererConfig) -> Self {
        let id = registry.register_canvas();
        log::debug!("canvas {id:?} created");
        Self { id, registry, textures, aspects: AspectCache::new(), config }
    }

    #[inline]
    pub fn id(&self) -> CanvasId {
        self.id
    }

    #[inline]
    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    #[inline]
    pub fn textures(&self) -> &R {
        &self.textures
    }

    #[inline]
    pub fn aspects(&self) -> &AspectCache {
        &self.aspects
    }

    /// Draws one primitive at `pos` (logical px, frame-relative) inside a
    /// frame of `frame` logical pixels.
    ///
    /// `frame` must be non-zero in both dimensions.
    pub fn draw_object<G: GpuBackend>(
        &mut self,
        gpu: &mut G,
        id: ObjectId,
        primitive: &Primitive,
        pos: Position,
        frame: Size,
    ) {
        if !primitive.visible {
            return;
        }
        self.registry.record(id, self.id);

        let size = primitive.size;
        let vector_pad = self.config.vector_pad;
        match &primitive.kind {
            PrimitiveKind::Circle(circle) => self.draw_textured(
                gpu,
                id,
                |gpu| gpu.circle_texture(circle, size, vector_pad),
                Placement::stretch(size, pos).padded(vector_pad),
                frame,
                1.0,
            ),
            PrimitiveKind::Line(line) => self.draw_textured(
                gpu,
                id,
                |gpu| gpu.line_texture(line, size, vector_pad),
                Placement::stretch(size, pos).padded(vector_pad),
                frame,
                1.0,
            ),
            PrimitiveKind::Image(image) => self.draw_image(gpu, id, image, size, pos, frame),
            PrimitiveKind::Raster(raster) => self.draw_raster(gpu, id, raster, size, pos, frame),
            PrimitiveKind::Rectangle(rect) => self.draw_textured(
                gpu,
                id,
                |gpu| gpu.fill_texture(rect.fill),
                Placement::stretch(size, pos),
                frame,
                1.0,
            ),
            PrimitiveKind::Text(text) => self.draw_text(gpu, id, text, size, pos, frame),
            PrimitiveKind::LinearGradient(gradient) => self.draw_gradient(
                gpu,
                id,
                |gpu| gpu.linear_gradient_texture(gradient, size),
                size,
                pos,
                frame,
            ),
            PrimitiveKind::RadialGradient(gradient) => self.draw_gradient(
                gpu,
                id,
                |gpu| gpu.radial_gradient_texture(gradient, size),
                size,
                pos,
                frame,
            ),
            PrimitiveKind::Widget(widget) => {
                if widget.background.is_transparent() {
                    return;
                }
                self.draw_textured(
                    gpu,
                    id,
                    |gpu| gpu.fill_texture(widget.background),
                    Placement::stretch(size, pos),
                    frame,
                    1.0,
                )
            }
        }
    }

    /// Draws `placements` (object, position) in order, skipping ids that are
    /// no longer in `scene`.
    pub fn draw_objects<G: GpuBackend>(
        &mut self,
        gpu: &mut G,
        scene: &Scene,
        placements: impl IntoIterator<Item = (ObjectId, Position)>,
        frame: Size,
    ) {
        for (id, pos) in placements {
            if let Some(primitive) = scene.get(id) {
                self.draw_object(gpu, id, primitive, pos, frame);
            }
        }
    }

    /// Drops cached content for objects whose content changed, so their
    /// textures are rebuilt on the next draw.
    ///
    /// Returns the stale textures for the caller to release.
    pub fn apply_changes(&mut self, changed: impl IntoIterator<Item = ObjectId>) -> Vec<TextureHandle> {
        changed
            .into_iter()
            .filter_map(|id| {
                self.aspects.forget_object(id);
                self.textures.invalidate(id)
            })
            .collect()
    }

    /// Forgets an object removed from the scene.
    pub fn forget(&mut self, id: ObjectId) -> Option<TextureHandle> {
        self.registry.forget(id);
        self.aspects.forget_object(id);
        self.textures.invalidate(id)
    }

    // ── per-kind handlers ─────────────────────────────────────────────────

    fn draw_image<G: GpuBackend>(
        &mut self,
        gpu: &mut G,
        id: ObjectId,
        image: &ImageShape,
        size: Size,
        pos: Position,
        frame: Size,
    ) {
        let resource = image.resource_id();
        let Canvas { textures, aspects, .. } = &mut *self;
        let texture = resolve(textures, gpu, id, |gpu| {
            let (texture, aspect) = gpu.image_texture(image, size)?;
            aspects.record(resource.clone(), id, aspect);
            Some(texture)
        });
        let Some(texture) = texture else { return };

        // Without a known aspect there is nothing to preserve.
        let placement = match self.aspects.lookup(resource.as_ref(), id) {
            Some(aspect) => Placement { fill: image.fill, aspect, ..Placement::stretch(size, pos) },
            None => Placement::stretch(size, pos),
        };
        draw_quad(gpu, texture, placement, frame, image.alpha);
    }

    fn draw_raster<G: GpuBackend>(
        &mut self,
        gpu: &mut G,
        id: ObjectId,
        raster: &RasterShape,
        size: Size,
        pos: Position,
        frame: Size,
    ) {
        self.draw_textured(
            gpu,
            id,
            |gpu| gpu.raster_texture(raster, size),
            Placement::stretch(size, pos),
            frame,
            raster.alpha,
        );
    }

    /// Shared path for both gradient kinds; `create` selects the generator.
    fn draw_gradient<G: GpuBackend>(
        &mut self,
        gpu: &mut G,
        id: ObjectId,
        create: impl FnMut(&mut G) -> Option<TextureHandle>,
        size: Size,
        pos: Position,
        frame: Size,
    ) {
        self.draw_textured(gpu, id, create, Placement::stretch(size, pos), frame, 1.0);
    }

    fn draw_text<G: GpuBackend>(
        &mut self,
        gpu: &mut G,
        id: ObjectId,
        text: &TextShape,
        size: Size,
        pos: Position,
        frame: Size,
    ) {
        if text.text.is_empty() {
            return;
        }
        if !text.min_size.is_drawable() {
            log::trace!("text {id:?} has no measured size; skipped this frame");
            return;
        }
        let pos = text_position(text, size, pos);
        self.draw_textured(
            gpu,
            id,
            |gpu| gpu.text_texture(text),
            Placement::stretch(text.min_size, pos),
            frame,
            1.0,
        );
    }

    fn draw_textured<G: GpuBackend>(
        &mut self,
        gpu: &mut G,
        id: ObjectId,
        create: impl FnMut(&mut G) -> Option<TextureHandle>,
        placement: Placement,
        frame: Size,
        opacity: f32,
    ) {
        let Some(texture) = resolve(&mut self.textures, gpu, id, create) else { return };
        draw_quad(gpu, texture, placement, frame, opacity);
    }
}

impl<R> Drop for Canvas<R> {
    fn drop(&mut self) {
        self.registry.forget_canvas(self.id);
    }
}

/// Anchors text of natural size `text.min_size` inside a container of
/// `container` at `pos`: horizontal alignment, then vertical centering when
/// the container is taller than the text.
pub fn text_position(text: &TextShape, container: Size, pos: Position) -> Position {
    let natural = text.min_size;
    let mut pos = match text.align {
        TextAlign::Leading => pos,
        TextAlign::Center => pos.offset((container.width - natural.width) / 2.0, 0.0),
        TextAlign::Trailing => pos.offset(container.width - natural.width, 0.0),
    };
    if container.height > natural.height {
        pos.y += (container.height - natural.height) / 2.0;
    }
    pos
}

fn resolve<R: TextureResolver, G: GpuBackend>(
    textures: &mut R,
    gpu: &mut G,
    id: ObjectId,
    mut create: impl FnMut(&mut G) -> Option<TextureHandle>,
) -> Option<TextureHandle> {
    let texture = textures.texture_for(id, &mut || create(gpu));
    if texture.is_none() {
        log::trace!("no texture for {id:?} yet; skipped this frame");
    }
    texture
}

fn draw_quad<G: GpuBackend>(gpu: &mut G, texture: TextureHandle, placement: Placement, frame: Size, opacity: f32) {
    let Placement { size, pos, fill, aspect, pad } = placement;
    let mut quad = TransientQuad::upload(gpu, rect_coords(size, pos, frame, fill, aspect, pad));
    quad.draw(texture, opacity);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::{Color, LinearGradient, RadialGradient};
    use crate::scene::{
        CircleShape, ImageSource, LineShape, RectShape, Resource, ResourceId, WidgetShape,
    };
    use crate::testing::{CountingResolver, RecordingGpu, TextureKind};
    use crate::text::FontId;
    use image::RgbaImage;

    const FRAME: Size = Size::new(200.0, 100.0);

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    fn canvas() -> Canvas {
        Canvas::new(Arc::new(CanvasRegistry::new()), RendererConfig::default())
    }

    fn rect(w: f32, h: f32) -> Primitive {
        Primitive::new(Size::new(w, h), RectShape::new(Color::white()))
    }

    fn text(content: &str, natural: Size, align: TextAlign) -> TextShape {
        // Never rasterized here, so the font does not need to exist.
        TextShape::new(content, FontId(0), 12.0, Color::black())
            .with_min_size(natural)
            .with_align(align)
    }

    fn image_shape(name: &str, fill: FillMode) -> ImageShape {
        ImageShape::new(ImageSource::Resource(Resource::new(name, Vec::<u8>::new()))).with_fill(fill)
    }

    fn every_kind() -> Vec<Primitive> {
        let size = Size::new(40.0, 20.0);
        vec![
            Primitive::new(size, CircleShape::new(Color::white())),
            Primitive::new(size, LineShape::new(Position::zero(), Position::new(40.0, 20.0), Color::black(), 1.0)),
            Primitive::new(size, image_shape("a.png", FillMode::Contain)),
            Primitive::new(size, RasterShape::new(|w, h| RgbaImage::new(w, h))),
            Primitive::new(size, RectShape::new(Color::white())),
            Primitive::new(size, text("hi", Size::new(10.0, 10.0), TextAlign::Leading)),
            Primitive::new(size, LinearGradient::vertical(Color::white(), Color::black())),
            Primitive::new(size, RadialGradient::new(Color::white(), Color::black())),
            Primitive::new(size, WidgetShape::new(Color::white())),
        ]
    }

    // ── dispatch ──────────────────────────────────────────────────────────

    #[test]
    fn rectangle_end_to_end() {
        let [id] = crate::testing::object_ids();
        let mut gpu = RecordingGpu::default();
        let mut canvas = canvas();

        canvas.draw_object(&mut gpu, id, &rect(20.0, 20.0), Position::new(10.0, 10.0), FRAME);

        let draws = gpu.draws();
        assert_eq!(draws.len(), 1);
        let (_, quad, opacity) = draws[0];
        assert_eq!(opacity, 1.0);
        let [tl, _, _, br] = quad.vertices;
        assert!(close(tl.pos[0], -0.9) && close(tl.pos[1], 0.8));
        assert!(close(br.pos[0], -0.7) && close(br.pos[1], 0.4));
        assert_eq!(gpu.live_buffers(), 0);
        assert_eq!(gpu.textures_created(), vec![TextureKind::Fill]);
    }

    #[test]
    fn every_kind_draws_once_and_frees_its_buffer() {
        let mut gpu = RecordingGpu::default();
        let mut canvas = canvas();
        let kinds = every_kind();
        let ids: [ObjectId; 9] = crate::testing::object_ids();

        for (id, primitive) in ids.iter().zip(&kinds) {
            canvas.draw_object(&mut gpu, *id, primitive, Position::new(5.0, 5.0), FRAME);
        }

        assert_eq!(gpu.draw_count(), 9);
        assert_eq!(gpu.buffers_created(), 9);
        assert_eq!(gpu.live_buffers(), 0);
        assert_eq!(
            gpu.textures_created(),
            vec![
                TextureKind::Circle,
                TextureKind::Line,
                TextureKind::Image,
                TextureKind::Raster,
                TextureKind::Fill,
                TextureKind::Text,
                TextureKind::LinearGradient,
                TextureKind::RadialGradient,
                TextureKind::Fill,
            ]
        );
    }

    #[test]
    fn invisible_is_a_no_op() {
        let [id] = crate::testing::object_ids();
        let registry = Arc::new(CanvasRegistry::new());
        let mut canvas = Canvas::new(Arc::clone(&registry), RendererConfig::default());
        let mut gpu = RecordingGpu::default();

        canvas.draw_object(&mut gpu, id, &rect(10.0, 10.0).hidden(), Position::zero(), FRAME);

        assert!(gpu.calls.is_empty());
        assert_eq!(registry.canvas_for(id), None);
    }

    #[test]
    fn textures_are_created_once_across_frames() {
        let [id] = crate::testing::object_ids();
        let mut gpu = RecordingGpu::default();
        let mut canvas = canvas();
        let circle = Primitive::new(Size::new(10.0, 10.0), CircleShape::new(Color::white()));

        for _ in 0..3 {
            canvas.draw_object(&mut gpu, id, &circle, Position::zero(), FRAME);
        }

        assert_eq!(gpu.textures_created().len(), 1);
        assert_eq!(gpu.draw_count(), 3);
        let textures: Vec<_> = gpu.draws().iter().map(|d| d.0).collect();
        assert!(textures.windows(2).all(|w| w[0] == w[1]));
    }

    // ── not-ready textures ────────────────────────────────────────────────

    #[test]
    fn null_texture_skips_draw_and_buffer() {
        let ids: [ObjectId; 9] = crate::testing::object_ids();
        for (id, primitive) in ids.iter().zip(every_kind()) {
            let mut gpu = RecordingGpu::not_ready();
            let mut canvas = canvas();
            canvas.draw_object(&mut gpu, *id, &primitive, Position::zero(), FRAME);

            assert_eq!(gpu.draw_count(), 0, "{:?}", primitive.kind);
            assert_eq!(gpu.buffers_created(), 0, "{:?}", primitive.kind);
            assert_eq!(gpu.textures_created().len(), 1);
        }
    }

    #[test]
    fn not_ready_texture_is_retried_next_frame() {
        let [id] = crate::testing::object_ids();
        let mut gpu = RecordingGpu::not_ready();
        let mut canvas = canvas();
        let prim = rect(10.0, 10.0);

        canvas.draw_object(&mut gpu, id, &prim, Position::zero(), FRAME);
        gpu.textures_ready = true;
        canvas.draw_object(&mut gpu, id, &prim, Position::zero(), FRAME);

        assert_eq!(gpu.textures_created().len(), 2);
        assert_eq!(gpu.draw_count(), 1);
    }

    // ── widget ────────────────────────────────────────────────────────────

    #[test]
    fn transparent_widget_touches_nothing() {
        let [id] = crate::testing::object_ids();
        let registry = Arc::new(CanvasRegistry::new());
        let mut canvas = Canvas::with_resolver(registry, CountingResolver::default(), RendererConfig::default());
        let mut gpu = RecordingGpu::default();
        let widget = Primitive::new(Size::new(50.0, 50.0), WidgetShape::new(Color::transparent()));

        canvas.draw_object(&mut gpu, id, &widget, Position::zero(), FRAME);

        assert_eq!(canvas.textures().requests, 0);
        assert!(gpu.calls.is_empty());
    }

    #[test]
    fn opaque_widget_draws_background() {
        let [id] = crate::testing::object_ids();
        let registry = Arc::new(CanvasRegistry::new());
        let mut canvas = Canvas::with_resolver(registry, CountingResolver::default(), RendererConfig::default());
        let mut gpu = RecordingGpu::default();
        let widget = Primitive::new(Size::new(50.0, 50.0), WidgetShape::new(Color::black()));

        canvas.draw_object(&mut gpu, id, &widget, Position::zero(), FRAME);

        assert_eq!(canvas.textures().requests, 1);
        assert_eq!(gpu.draw_count(), 1);
    }

    // ── vector shapes ─────────────────────────────────────────────────────

    #[test]
    fn circle_and_line_are_padded() {
        let [c, l] = crate::testing::object_ids();
        let mut gpu = RecordingGpu::default();
        let mut canvas = canvas();
        let size = Size::new(20.0, 20.0);
        let pos = Position::new(50.0, 40.0);

        canvas.draw_object(&mut gpu, c, &Primitive::new(size, CircleShape::new(Color::white())), pos, FRAME);
        let line = LineShape::new(Position::zero(), Position::new(20.0, 20.0), Color::white(), 2.0);
        canvas.draw_object(&mut gpu, l, &Primitive::new(size, line), pos, FRAME);

        // 40..80 horizontally, 30..70 vertically once padded by 10.
        for (_, quad, opacity) in gpu.draws() {
            assert_eq!(opacity, 1.0);
            assert!(close(quad.top_left().pos[0], -1.0 + 2.0 * 40.0 / 200.0));
            assert!(close(quad.top_left().pos[1], 1.0 - 2.0 * 30.0 / 100.0));
            assert!(close(quad.bottom_right().pos[0], -1.0 + 2.0 * 80.0 / 200.0));
            assert!(close(quad.bottom_right().pos[1], 1.0 - 2.0 * 70.0 / 100.0));
        }
    }

    // ── image / raster ────────────────────────────────────────────────────

    #[test]
    fn image_contain_uses_aspect_and_alpha() {
        let [id] = crate::testing::object_ids();
        let mut gpu = RecordingGpu { image_aspect: 1.0, ..RecordingGpu::default() };
        let mut canvas = canvas();
        let img = Primitive::new(FRAME, image_shape("square.png", FillMode::Contain).with_alpha(0.25));

        canvas.draw_object(&mut gpu, id, &img, Position::zero(), FRAME);

        let (_, quad, opacity) = gpu.draws()[0];
        assert_eq!(opacity, 0.25);
        assert!(close(quad.top_left().pos[0], -0.5));
        assert!(close(quad.bottom_right().pos[0], 0.5));
        assert!(close(quad.top_left().pos[1], 1.0));
        assert!(close(quad.bottom_right().pos[1], -1.0));
    }

    #[test]
    fn image_aspect_is_shared_by_resource() {
        let [a, b] = crate::testing::object_ids();
        let mut gpu = RecordingGpu { image_aspect: 2.0, ..RecordingGpu::default() };
        let mut canvas = canvas();
        let first = Primitive::new(FRAME, image_shape("wide.png", FillMode::Stretch));
        canvas.draw_object(&mut gpu, a, &first, Position::zero(), FRAME);

        let resource = ResourceId("wide.png".into());
        assert_eq!(canvas.aspects().lookup(Some(&resource), b), Some(2.0));
    }

    #[test]
    fn image_without_known_aspect_is_stretched() {
        let [id] = crate::testing::object_ids();
        let mut gpu = RecordingGpu { image_aspect: 0.0, ..RecordingGpu::default() };
        let mut canvas = canvas();
        let img = Primitive::new(Size::new(100.0, 50.0), image_shape("odd.png", FillMode::Contain));

        canvas.draw_object(&mut gpu, id, &img, Position::zero(), FRAME);

        let (_, quad, _) = gpu.draws()[0];
        assert!(close(quad.top_left().pos[0], -1.0));
        assert!(close(quad.bottom_right().pos[0], 0.0));
    }

    #[test]
    fn raster_uses_its_alpha() {
        let [id] = crate::testing::object_ids();
        let mut gpu = RecordingGpu::default();
        let mut canvas = canvas();
        let raster = RasterShape::new(|w, h| RgbaImage::new(w, h)).with_alpha(0.5);

        canvas.draw_object(&mut gpu, id, &Primitive::new(Size::new(10.0, 10.0), raster), Position::zero(), FRAME);

        assert_eq!(gpu.draws()[0].2, 0.5);
    }

    // ── text ──────────────────────────────────────────────────────────────

    #[test]
    fn empty_text_is_a_no_op() {
        let [id] = crate::testing::object_ids();
        let mut gpu = RecordingGpu::default();
        let mut canvas = canvas();
        let t = Primitive::new(Size::new(100.0, 20.0), text("", Size::new(0.0, 10.0), TextAlign::Center));

        canvas.draw_object(&mut gpu, id, &t, Position::zero(), FRAME);

        assert_eq!(gpu.draw_count(), 0);
        assert_eq!(gpu.buffers_created(), 0);
        assert!(gpu.textures_created().is_empty());
    }

    #[test]
    fn text_alignment_shifts_x() {
        let container = Size::new(100.0, 10.0);
        let natural = Size::new(40.0, 10.0);
        let pos = Position::new(5.0, 5.0);

        let trailing = text_position(&text("x", natural, TextAlign::Trailing), container, pos);
        let center = text_position(&text("x", natural, TextAlign::Center), container, pos);
        let leading = text_position(&text("x", natural, TextAlign::Leading), container, pos);

        assert_eq!(trailing, Position::new(65.0, 5.0));
        assert_eq!(center, Position::new(35.0, 5.0));
        assert_eq!(leading, pos);
    }

    #[test]
    fn taller_container_centers_text_vertically() {
        let shape = text("x", Size::new(40.0, 10.0), TextAlign::Leading);
        assert_eq!(text_position(&shape, Size::new(100.0, 30.0), Position::zero()), Position::new(0.0, 10.0));
        // Shorter container: no vertical shift.
        assert_eq!(text_position(&shape, Size::new(100.0, 5.0), Position::zero()), Position::zero());
    }

    #[test]
    fn unmeasured_text_is_skipped() {
        let [id] = crate::testing::object_ids();
        let mut gpu = RecordingGpu::default();
        let mut canvas = canvas();
        let unmeasured = TextShape::new("hello", FontId(0), 12.0, Color::black())
            .with_align(TextAlign::Trailing);

        canvas.draw_object(&mut gpu, id, &Primitive::new(Size::new(100.0, 30.0), unmeasured), Position::zero(), FRAME);

        assert!(gpu.textures_created().is_empty());
        assert_eq!(gpu.buffers_created(), 0);
        assert_eq!(gpu.draw_count(), 0);
    }

    #[test]
    fn text_quad_has_natural_size() {
        let [id] = crate::testing::object_ids();
        let mut gpu = RecordingGpu::default();
        let mut canvas = canvas();
        let t = text("hello", Size::new(40.0, 10.0), TextAlign::Trailing);

        canvas.draw_object(&mut gpu, id, &Primitive::new(Size::new(100.0, 30.0), t), Position::zero(), FRAME);

        // x: 60..100, y: 10..20
        let (_, quad, _) = gpu.draws()[0];
        assert!(close(quad.top_left().pos[0], -1.0 + 2.0 * 60.0 / 200.0));
        assert!(close(quad.bottom_right().pos[0], 0.0));
        assert!(close(quad.top_left().pos[1], 1.0 - 2.0 * 10.0 / 100.0));
        assert!(close(quad.bottom_right().pos[1], 1.0 - 2.0 * 20.0 / 100.0));
    }

    // ── registry ──────────────────────────────────────────────────────────

    #[test]
    fn registry_tracks_last_canvas() {
        let [id] = crate::testing::object_ids();
        let registry = Arc::new(CanvasRegistry::new());
        let mut a = Canvas::new(Arc::clone(&registry), RendererConfig::default());
        let mut b = Canvas::new(Arc::clone(&registry), RendererConfig::default());
        let mut gpu = RecordingGpu::default();
        let prim = rect(10.0, 10.0);

        a.draw_object(&mut gpu, id, &prim, Position::zero(), FRAME);
        assert_eq!(registry.canvas_for(id), Some(a.id()));
        b.draw_object(&mut gpu, id, &prim, Position::zero(), FRAME);
        assert_eq!(registry.canvas_for(id), Some(b.id()));

        drop(b);
        assert_eq!(registry.canvas_for(id), None);
    }

    #[test]
    fn registry_is_updated_even_when_texture_is_not_ready() {
        let [id] = crate::testing::object_ids();
        let registry = Arc::new(CanvasRegistry::new());
        let mut canvas = Canvas::new(Arc::clone(&registry), RendererConfig::default());
        let mut gpu = RecordingGpu::not_ready();

        canvas.draw_object(&mut gpu, id, &rect(1.0, 1.0), Position::zero(), FRAME);

        assert_eq!(registry.canvas_for(id), Some(canvas.id()));
    }

    // ── scene integration ─────────────────────────────────────────────────

    #[test]
    fn changed_objects_get_new_textures() {
        let mut scene = Scene::new();
        let id = scene.insert(rect(10.0, 10.0));
        let mut gpu = RecordingGpu::default();
        let mut canvas = canvas();

        canvas.draw_objects(&mut gpu, &scene, [(id, Position::zero())], FRAME);
        scene.update(id, |p| p.kind = RectShape::new(Color::black()).into());
        let stale = canvas.apply_changes(scene.drain_changed());
        canvas.draw_objects(&mut gpu, &scene, [(id, Position::zero())], FRAME);

        assert_eq!(stale.len(), 1);
        let textures: Vec<_> = gpu.draws().iter().map(|d| d.0).collect();
        assert_eq!(textures.len(), 2);
        assert_ne!(textures[0], textures[1]);
        assert_eq!(stale[0], textures[0]);
    }

    #[test]
    fn removed_objects_are_skipped_and_forgotten() {
        let mut scene = Scene::new();
        let kept = scene.insert(rect(10.0, 10.0));
        let gone = scene.insert(rect(10.0, 10.0));
        let registry = Arc::new(CanvasRegistry::new());
        let mut canvas = Canvas::new(Arc::clone(&registry), RendererConfig::default());
        let mut gpu = RecordingGpu::default();

        canvas.draw_objects(&mut gpu, &scene, [(kept, Position::zero()), (gone, Position::zero())], FRAME);
        scene.remove(gone);
        assert!(canvas.forget(gone).is_some());
        canvas.draw_objects(&mut gpu, &scene, [(kept, Position::zero()), (gone, Position::zero())], FRAME);

        assert_eq!(gpu.draw_count(), 3);
        assert_eq!(registry.canvas_for(gone), None);
        assert_eq!(registry.canvas_for(kept), Some(canvas.id()));
    }
}
