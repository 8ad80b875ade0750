/// Convenience result type used across Caravel.
pub type CaravelResult<T> = Result<T, CaravelError>;

/// Top-level error taxonomy used by pipeline APIs.
///
/// The variants mirror the stages of carousel generation so callers can map
/// failures onto job error codes without string matching.
#[derive(thiserror::Error, Debug)]
pub enum CaravelError {
    /// Invalid user-provided request or slide data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while resolving design context values.
    #[error("design error: {0}")]
    Design(String),

    /// Font resource could not be loaded. Fatal to a whole job.
    #[error("font error: {0}")]
    Font(String),

    /// Background acquisition failed. Non-fatal; the pipeline degrades to a
    /// solid fill.
    #[error("background error: {0}")]
    Background(String),

    /// Errors while laying out, rasterizing, or compositing one slide.
    #[error("render error: {0}")]
    Render(String),

    /// Errors from the persistent job/image store.
    #[error("store error: {0}")]
    Store(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CaravelError {
    /// Build a [`CaravelError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CaravelError::Design`] value.
    pub fn design(msg: impl Into<String>) -> Self {
        Self::Design(msg.into())
    }

    /// Build a [`CaravelError::Font`] value.
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    /// Build a [`CaravelError::Background`] value.
    pub fn background(msg: impl Into<String>) -> Self {
        Self::Background(msg.into())
    }

    /// Build a [`CaravelError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`CaravelError::Store`] value.
    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
