//! Paint model: premultiplied colors and the two gradient kinds.
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod gradient;

pub use color::Color;
pub use gradient::{LinearGradient, RadialGradient};
