//! Background acquisition with graceful degradation.

/// Prompt construction for the image service.
pub mod prompt;
/// The background provider itself.
pub mod provider;
