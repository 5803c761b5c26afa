//! Geometry types shared by the transform, the dispatcher and the host.
//!
//! Canonical CPU space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! Conversion to normalized device coordinates happens in [`crate::transform`].

mod position;
mod rect;
mod size;

pub use position::Position;
pub use rect::Rect;
pub use size::Size;
