use std::collections::HashMap;

use crate::scene::{ObjectId, ResourceId};

/// Aspect ratios (width / height) of decoded image content.
///
/// Two tables: one keyed by the shared backing resource, so every image
/// showing the same resource reuses a single entry, and one keyed by the
/// image primitive itself for content without a shared identity.
#[derive(Debug, Default)]
pub struct AspectCache {
    by_resource: HashMap<ResourceId, f32>,
    by_object: HashMap<ObjectId, f32>,
}

impl AspectCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `aspect` under `resource` when present, else under `object`.
    ///
    /// Non-positive or non-finite ratios are ignored.
    pub fn record(&mut self, resource: Option<ResourceId>, object: ObjectId, aspect: f32) {
        if !(aspect.is_finite() && aspect > 0.0) {
            log::debug!("ignoring invalid aspect ratio {aspect} for {object:?}");
            return;
        }
        match resource {
            Some(resource) => {
                self.by_resource.insert(resource, aspect);
            }
            None => {
                self.by_object.insert(object, aspect);
            }
        }
    }

    /// Resource entry first, then the per-object entry.
    pub fn lookup(&self, resource: Option<&ResourceId>, object: ObjectId) -> Option<f32> {
        resource
            .and_then(|r| self.by_resource.get(r))
            .or_else(|| self.by_object.get(&object))
            .copied()
    }

    pub fn forget_object(&mut self, object: ObjectId) {
        self.by_object.remove(&object);
    }

    pub fn forget_resource(&mut self, resource: &ResourceId) {
        self.by_resource.remove(resource);
    }
}
