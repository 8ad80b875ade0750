use std::sync::Arc;

use tracing::{info, warn};

use crate::design::context::DesignContext;
use crate::foundation::core::Canvas;
use crate::foundation::error::CaravelResult;
use crate::store::ImageGenerator;

use super::prompt::build_background_prompt;

/// Outcome of background acquisition for one job.
///
/// Absence is an expected, non-fatal state: downstream compositing falls
/// back to a solid `background_color` fill. When present, `bytes` is shared
/// by reference across every slide of the job.
#[derive(Clone, Debug, Default)]
pub struct Background {
    /// Encoded background image, shared across all slides.
    pub bytes: Option<Arc<Vec<u8>>>,
    /// True when this job called the image service (vs. reuse or absence).
    pub generated: bool,
    /// Reason the background is absent, when it is.
    pub error: Option<String>,
}

impl Background {
    fn supplied(bytes: Vec<u8>) -> Self {
        Self {
            bytes: Some(Arc::new(bytes)),
            generated: false,
            error: None,
        }
    }

    fn generated(bytes: Vec<u8>) -> Self {
        Self {
            bytes: Some(Arc::new(bytes)),
            generated: true,
            error: None,
        }
    }

    fn absent(reason: Option<String>) -> Self {
        Self {
            bytes: None,
            generated: false,
            error: reason,
        }
    }
}

/// Acquires the single background image for a job, with graceful
/// degradation: any service error, empty result, or missing credential
/// yields an absent background rather than a failure.
pub struct BackgroundProvider<'a> {
    generator: &'a dyn ImageGenerator,
}

impl<'a> BackgroundProvider<'a> {
    /// Wrap an image-generation collaborator.
    pub fn new(generator: &'a dyn ImageGenerator) -> Self {
        Self { generator }
    }

    /// Acquire the job's background.
    ///
    /// A caller-supplied image is returned unchanged (never regenerated),
    /// which is what guarantees one background across all slides when jobs
    /// are retried with a prior result. `style_key` may differ from the
    /// design's own style when the caller requested a background-only
    /// override.
    pub async fn acquire(
        &self,
        design: &DesignContext,
        style_key: &str,
        supplied: Option<Vec<u8>>,
        canvas: Canvas,
    ) -> CaravelResult<Background> {
        if let Some(bytes) = supplied {
            info!(bytes = bytes.len(), "reusing caller-supplied background");
            return Ok(Background::supplied(bytes));
        }

        if !self.generator.has_credentials() {
            info!("image service credentials missing, proceeding without background");
            return Ok(Background::absent(Some(
                "image service credentials not configured".to_owned(),
            )));
        }

        let prompt = build_background_prompt(design, style_key);
        match self.generator.generate(&prompt, &canvas.aspect_hint()).await {
            Ok(bytes) if bytes.is_empty() => {
                warn!("image service returned an empty background");
                Ok(Background::absent(Some(
                    "image service returned no bytes".to_owned(),
                )))
            }
            Ok(bytes) => {
                info!(bytes = bytes.len(), "background generated");
                Ok(Background::generated(bytes))
            }
            Err(e) => {
                warn!(error = %e, "background generation failed, using solid fill");
                Ok(Background::absent(Some(e.to_string())))
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/background/provider.rs"]
mod tests;
