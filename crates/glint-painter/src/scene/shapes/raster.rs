use std::fmt;
use std::sync::Arc;

use image::RgbaImage;

/// Produces straight-alpha pixels for a raster of the requested pixel size.
pub type RasterGenerator = Arc<dyn Fn(u32, u32) -> RgbaImage + Send + Sync>;

/// Procedurally generated pixels, always stretched over the primitive.
#[derive(Clone)]
pub struct RasterShape {
    pub generator: RasterGenerator,
    /// Draw opacity in `[0, 1]`.
    pub alpha: f32,
}

impl RasterShape {
    pub fn new(generator: impl Fn(u32, u32) -> RgbaImage + Send + Sync + 'static) -> Self {
        Self { generator: Arc::new(generator), alpha: 1.0 }
    }

    #[inline]
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }
}

impl fmt::Debug for RasterShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RasterShape").field("alpha", &self.alpha).finish_non_exhaustive()
    }
}
