//! wgpu implementation of the painter's GPU capabilities.
//!
//! [`GpuContext`] acquires a device without a surface. [`WgpuBackend`]
//! turns painter calls into uploaded textures and recorded draws, which the
//! host replays into its own render target with [`WgpuBackend::flush`].

mod backend;
mod device;
mod pipeline;

pub use backend::WgpuBackend;
pub use device::{GpuContext, GpuInit};
