//! Design-context resolution.
//!
//! A carousel job resolves exactly one [`context::DesignContext`] up front;
//! every slide and the background prompt read the same frozen value.

/// Design context and input types.
pub mod context;
/// Fixed style-defaults and typography-preset tables.
pub mod presets;
mod resolve;

pub use resolve::resolve;
