//! Fonts and text measurement.

mod font_system;

pub use font_system::{FontId, FontLoadError, FontSystem};
