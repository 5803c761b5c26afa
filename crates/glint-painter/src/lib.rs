//! Glint painter crate.
//!
//! Maps retained 2D canvas primitives onto textured-quad GPU draws: placement
//! math in device coordinates, per-canvas texture caching and one dispatch
//! path per primitive kind. The GPU is reached through the traits in [`gpu`];
//! [`render`] implements them on wgpu.

pub mod cache;
pub mod canvas;
pub mod config;
pub mod coords;
pub mod gpu;
pub mod logging;
pub mod paint;
pub mod pixmap;
pub mod registry;
pub mod render;
pub mod scene;
pub mod text;
pub mod transform;

#[cfg(test)]
mod testing;

pub use canvas::Canvas;
pub use config::RendererConfig;
