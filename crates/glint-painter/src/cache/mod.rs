//! Per-canvas caches for texture handles and image aspect ratios.
//!
//! Both are keyed by stable ids, never by object address. Entries are
//! created lazily on first draw and dropped when the host reports a content
//! change; eviction beyond that belongs to the owner of the GPU resources.

mod aspect;
mod texture;

pub use aspect::AspectCache;
pub use texture::{TextureCache, TextureResolver};
