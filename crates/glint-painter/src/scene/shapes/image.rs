use std::path::PathBuf;
use std::sync::Arc;

use image::RgbaImage;

use crate::scene::ResourceId;
use crate::transform::FillMode;

/// Named, encoded image bytes (PNG, JPEG...) shared between primitives.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    pub name: Arc<str>,
    pub bytes: Arc<[u8]>,
}

impl Resource {
    pub fn new(name: impl Into<Arc<str>>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self { name: name.into(), bytes: bytes.into() }
    }

    #[inline]
    pub fn id(&self) -> ResourceId {
        ResourceId(self.name.clone())
    }
}

/// Where an image's pixels come from.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageSource {
    Resource(Resource),
    File(PathBuf),
    /// Already decoded, straight-alpha pixels owned by this primitive.
    Pixels(Arc<RgbaImage>),
}

/// Bitmap image placed with its own fill policy.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageShape {
    pub source: ImageSource,
    pub fill: FillMode,
    /// Draw opacity in `[0, 1]`.
    pub alpha: f32,
}

impl ImageShape {
    pub fn new(source: ImageSource) -> Self {
        Self { source, fill: FillMode::Stretch, alpha: 1.0 }
    }

    #[inline]
    pub fn with_fill(mut self, fill: FillMode) -> Self {
        self.fill = fill;
        self
    }

    #[inline]
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    /// Identity of the shared backing resource, if any.
    ///
    /// Resources are identified by name and files by path; in-memory pixels
    /// belong to a single primitive and have no shared identity.
    pub fn resource_id(&self) -> Option<ResourceId> {
        match &self.source {
            ImageSource::Resource(res) => Some(res.id()),
            ImageSource::File(path) => Some(ResourceId(path.to_string_lossy().into())),
            ImageSource::Pixels(_) => None,
        }
    }
}
