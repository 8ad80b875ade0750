//! Slide rendering: the cached font resource, SVG rasterization of the text
//! layer, and final compositing.

/// Final compositing and PNG encoding.
pub mod compositor;
/// Process-wide cached font database.
pub mod fonts;
/// Layer-tree-to-SVG emission and rasterization.
pub mod svg;
