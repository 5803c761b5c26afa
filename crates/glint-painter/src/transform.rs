//! Widget-space → device-space mapping for textured quads.
//!
//! Every primitive is drawn as one axis-aligned quad. This module computes
//! that quad: it applies the fill policy (containment for aspect-preserving
//! content), expands it by an optional padding margin and maps the corners
//! to normalized device coordinates together with fixed texture coordinates.

use bytemuck::{Pod, Zeroable};

use crate::coords::{Position, Rect, Size};

/// Margin in logical pixels added around anti-aliased vector shapes
/// (circles, lines) so their soft edges are not clipped by the quad.
pub const VECTOR_PAD: f32 = 10.0;

/// Policy for fitting content of one aspect ratio into a region.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum FillMode {
    /// Fill the region exactly, distorting the content if needed.
    #[default]
    Stretch,
    /// Preserve the content aspect ratio, centered and padded to fit.
    Contain,
    /// Preserve the native aspect ratio, centered.
    Original,
}

/// Shrinks `size` to the target `aspect` and centers it inside the original
/// region, for [`FillMode::Contain`] and [`FillMode::Original`].
///
/// [`FillMode::Stretch`] returns the inputs unchanged.
///
/// A zero `size.height` makes the region aspect undefined; callers must pass
/// a non-empty region.
pub fn rect_inner_coords(size: Size, pos: Position, fill: FillMode, aspect: f32) -> (Size, Position) {
    if fill == FillMode::Stretch {
        return (size, pos);
    }

    let view_aspect = size.aspect();
    if view_aspect > aspect {
        let width = size.height * aspect;
        let pad = (size.width - width) / 2.0;
        (Size::new(width, size.height), pos.offset(pad, 0.0))
    } else if view_aspect < aspect {
        let height = size.width / aspect;
        let pad = (size.height - height) / 2.0;
        (Size::new(size.width, height), pos.offset(0.0, pad))
    } else {
        (size, pos)
    }
}

/// Computes the device-space quad for a primitive of `size` at `pos` inside
/// `frame`.
///
/// Horizontal coordinates map to `[-1, 1]` left → right; vertical
/// coordinates are flipped so the top-left logical origin lands at device
/// `y = 1`. `pad` grows the quad on every side before mapping.
///
/// `frame` must be drawable (non-zero in both dimensions).
pub fn rect_coords(
    size: Size,
    pos: Position,
    frame: Size,
    fill: FillMode,
    aspect: f32,
    pad: f32,
) -> Quad {
    debug_assert!(frame.is_drawable(), "rect_coords: frame {frame:?} is not drawable");

    let (size, pos) = rect_inner_coords(size, pos, fill, aspect);
    let rect = Rect::from_origin_size(pos, size).inflate(pad);
    let (min, max) = (rect.min(), rect.max());

    let x1 = -1.0 + 2.0 * (min.x / frame.width);
    let x2 = -1.0 + 2.0 * (max.x / frame.width);
    let y1 = 1.0 - 2.0 * (max.y / frame.height);
    let y2 = 1.0 - 2.0 * (min.y / frame.height);

    Quad {
        vertices: [
            QuadVertex::new(x1, y2, 0.0, 1.0), // top left
            QuadVertex::new(x1, y1, 0.0, 0.0), // bottom left
            QuadVertex::new(x2, y2, 1.0, 1.0), // top right
            QuadVertex::new(x2, y1, 1.0, 0.0), // bottom right
        ],
    }
}

/// One quad corner: device position (`z` is always 0) and texture coordinate.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct QuadVertex {
    pub pos: [f32; 3],
    pub uv: [f32; 2],
}

impl QuadVertex {
    #[inline]
    const fn new(x: f32, y: f32, u: f32, v: f32) -> Self {
        Self { pos: [x, y, 0.0], uv: [u, v] }
    }
}

/// Four-vertex textured rectangle, ordered top-left, bottom-left,
/// top-right, bottom-right (a triangle strip).
///
/// Computed fresh for every draw call and never stored.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Quad {
    pub vertices: [QuadVertex; 4],
}

impl Quad {
    /// Number of floats in [`points`](Quad::points): 4 vertices × (x, y, z, u, v).
    pub const POINT_COUNT: usize = 20;

    /// Interleaved vertex data as uploaded to the GPU.
    #[inline]
    pub fn points(&self) -> [f32; Self::POINT_COUNT] {
        bytemuck::cast(self.vertices)
    }

    #[inline]
    pub fn top_left(&self) -> QuadVertex {
        self.vertices[0]
    }

    #[inline]
    pub fn bottom_right(&self) -> QuadVertex {
        self.vertices[3]
    }
}
