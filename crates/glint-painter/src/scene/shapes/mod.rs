pub(crate) mod circle;
pub(crate) mod image;
pub(crate) mod line;
pub(crate) mod raster;
pub(crate) mod rect;
pub(crate) mod text;
pub(crate) mod widget;
