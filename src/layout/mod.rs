//! Declarative slide layout.
//!
//! Templates emit a [`tree::LayerTree`]; the taffy-backed [`solver`] turns it
//! into canvas-absolute pixel rects that the SVG emitter consumes.

/// Flex solve of layer trees into pixel rects.
pub mod solver;
/// Layer tree model.
pub mod tree;
