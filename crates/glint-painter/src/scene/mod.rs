//! Host object model: canvas primitives stored in an arena.
//!
//! Responsibilities:
//! - define the closed set of primitive kinds the painter can draw
//! - hand out stable [`ObjectId`]s used as cache and registry keys
//! - record content changes so textures can be invalidated
//!
//! Layout is the host's concern: positions are passed to the painter per
//! draw call and are not stored here.

mod shapes;

use std::sync::Arc;

use slotmap::{new_key_type, SlotMap};

use crate::coords::Size;
use crate::paint::{LinearGradient, RadialGradient};

pub use shapes::circle::CircleShape;
pub use shapes::image::{ImageShape, ImageSource, Resource};
pub use shapes::line::LineShape;
pub use shapes::raster::{RasterGenerator, RasterShape};
pub use shapes::rect::RectShape;
pub use shapes::text::{TextAlign, TextShape};
pub use shapes::widget::WidgetShape;

new_key_type! {
    /// Stable identity of a primitive, assigned when it enters a [`Scene`].
    pub struct ObjectId;
}

/// Identity of an image's backing resource, shared by every primitive that
/// displays it.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct ResourceId(pub Arc<str>);

/// The kinds of primitive the painter knows how to draw.
#[derive(Debug, Clone)]
pub enum PrimitiveKind {
    Circle(CircleShape),
    Line(LineShape),
    Image(ImageShape),
    Raster(RasterShape),
    Rectangle(RectShape),
    Text(TextShape),
    LinearGradient(LinearGradient),
    RadialGradient(RadialGradient),
    Widget(WidgetShape),
}

macro_rules! impl_from_shape {
    ($($shape:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$shape> for PrimitiveKind {
                #[inline]
                fn from(shape: $shape) -> Self {
                    PrimitiveKind::$variant(shape)
                }
            }
        )*
    };
}

impl_from_shape! {
    CircleShape => Circle,
    LineShape => Line,
    ImageShape => Image,
    RasterShape => Raster,
    RectShape => Rectangle,
    TextShape => Text,
    LinearGradient => LinearGradient,
    RadialGradient => RadialGradient,
    WidgetShape => Widget,
}

/// One drawable object: visibility, logical size and kind-specific content.
#[derive(Debug, Clone)]
pub struct Primitive {
    pub visible: bool,
    pub size: Size,
    pub kind: PrimitiveKind,
}

impl Primitive {
    pub fn new(size: Size, kind: impl Into<PrimitiveKind>) -> Self {
        Self { visible: true, size, kind: kind.into() }
    }

    #[inline]
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

/// Arena of primitives keyed by [`ObjectId`].
///
/// Content changes go through [`Scene::update`], which records the id so
/// the owner can invalidate cached textures (see [`Scene::drain_changed`]).
#[derive(Debug, Default)]
pub struct Scene {
    objects: SlotMap<ObjectId, Primitive>,
    changed: Vec<ObjectId>,
}

impl Scene {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, primitive: Primitive) -> ObjectId {
        self.objects.insert(primitive)
    }

    #[inline]
    pub fn get(&self, id: ObjectId) -> Option<&Primitive> {
        self.objects.get(id)
    }

    /// Mutates a primitive and marks it changed.
    ///
    /// Returns `false` if `id` is not in the scene.
    pub fn update(&mut self, id: ObjectId, f: impl FnOnce(&mut Primitive)) -> bool {
        let Some(primitive) = self.objects.get_mut(id) else { return false };
        f(primitive);
        if !self.changed.contains(&id) {
            self.changed.push(id);
        }
        true
    }

    pub fn remove(&mut self, id: ObjectId) -> Option<Primitive> {
        self.changed.retain(|&c| c != id);
        self.objects.remove(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &Primitive)> {
        self.objects.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Returns and clears the ids changed since the previous call.
    pub fn drain_changed(&mut self) -> Vec<ObjectId> {
        std::mem::take(&mut self.changed)
    }
}
