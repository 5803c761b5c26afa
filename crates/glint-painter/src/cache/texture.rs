use std::collections::HashMap;

use crate::gpu::TextureHandle;
use crate::scene::ObjectId;

/// Resolves the texture backing a primitive, creating it on first use.
pub trait TextureResolver {
    /// Returns the cached texture for `id`, or calls `create` to make one.
    ///
    /// A `None` from `create` is not cached, so the next frame retries.
    fn texture_for(
        &mut self,
        id: ObjectId,
        create: &mut dyn FnMut() -> Option<TextureHandle>,
    ) -> Option<TextureHandle>;

    /// Forgets the texture for `id` and returns it so the caller can release it.
    fn invalidate(&mut self, id: ObjectId) -> Option<TextureHandle>;
}

/// Texture handles keyed by [`ObjectId`].
#[derive(Debug, Default)]
pub struct TextureCache {
    textures: HashMap<ObjectId, TextureHandle>,
}

impl TextureCache {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, id: ObjectId) -> Option<TextureHandle> {
        self.textures.get(&id).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    /// Removes every entry, returning the handles for release.
    pub fn clear(&mut self) -> Vec<TextureHandle> {
        self.textures.drain().map(|(_, t)| t).collect()
    }
}

impl TextureResolver for TextureCache {
    fn texture_for(
        &mut self,
        id: ObjectId,
        create: &mut dyn FnMut() -> Option<TextureHandle>,
    ) -> Option<TextureHandle> {
        if let Some(&texture) = self.textures.get(&id) {
            return Some(texture);
        }
        let texture = create()?;
        self.textures.insert(id, texture);
        Some(texture)
    }

    fn invalidate(&mut self, id: ObjectId) -> Option<TextureHandle> {
        self.textures.remove(&id)
    }
}
