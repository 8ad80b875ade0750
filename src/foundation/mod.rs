//! Shared primitives: the error taxonomy and the color value type.

/// Color parsing and conversions.
pub mod color;
/// Canvas dimensions and shared value types.
pub mod core;
/// Crate error taxonomy and result alias.
pub mod error;
