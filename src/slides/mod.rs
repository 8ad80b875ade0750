//! Per-slide content and template selection.

/// Slide content model and the headline/body split.
pub mod content;
/// Template selection and layer-tree builders.
pub mod template;
