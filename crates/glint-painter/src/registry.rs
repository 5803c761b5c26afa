//! Shared map from drawn objects to the canvas that last drew them.
//!
//! Hit-testing and other subsystems that start from an on-screen object use
//! it to find the owning canvas. One registry is shared (via `Arc`) by every
//! canvas that should be visible to those subsystems.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::scene::ObjectId;

/// Identity of a canvas, allocated by [`CanvasRegistry::register_canvas`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct CanvasId(pub u32);

/// `ObjectId → CanvasId`, last write wins.
///
/// The lock is held only for the map access itself, never while drawing.
#[derive(Debug, Default)]
pub struct CanvasRegistry {
    next_canvas: AtomicU32,
    owners: Mutex<HashMap<ObjectId, CanvasId>>,
}

impl CanvasRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a fresh canvas id.
    pub fn register_canvas(&self) -> CanvasId {
        CanvasId(self.next_canvas.fetch_add(1, Ordering::Relaxed))
    }

    /// Records that `canvas` is now rendering `object`.
    pub fn record(&self, object: ObjectId, canvas: CanvasId) {
        self.owners().insert(object, canvas);
    }

    /// The canvas that most recently drew `object`.
    pub fn canvas_for(&self, object: ObjectId) -> Option<CanvasId> {
        self.owners().get(&object).copied()
    }

    pub fn forget(&self, object: ObjectId) -> Option<CanvasId> {
        self.owners().remove(&object)
    }

    /// Drops every association pointing at `canvas` (e.g. when it closes).
    pub fn forget_canvas(&self, canvas: CanvasId) {
        self.owners().retain(|_, c| *c != canvas);
    }

    pub fn len(&self) -> usize {
        self.owners().len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners().is_empty()
    }

    // A panic while holding the lock cannot leave the map half-written, so a
    // poisoned lock is still usable.
    fn owners(&self) -> MutexGuard<'_, HashMap<ObjectId, CanvasId>> {
        self.owners.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
