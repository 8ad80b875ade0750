use serde::{Deserialize, Serialize};

use crate::render::fonts::FontSource;
use crate::store::http::ImageServiceConfig;

/// Service-level configuration for assembling a pipeline.
///
/// Everything defaults to a credential-less, system-font setup so local runs
/// and tests work with no environment at all; backgrounds are then skipped
/// and slides render on solid fills.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// External image-generation service.
    #[serde(default)]
    pub image_service: ImageServiceConfig,
    /// Shared font resource source.
    #[serde(default)]
    pub font: FontSource,
}

impl ServiceConfig {
    /// Read configuration from the environment.
    ///
    /// `CARAVEL_IMAGE_API_URL` / `CARAVEL_IMAGE_API_KEY` configure the image
    /// service; `CARAVEL_FONT_URL` or `CARAVEL_FONT_PATH` select the font
    /// source (URL wins when both are set).
    pub fn from_env() -> Self {
        fn non_empty(var: &str) -> Option<String> {
            std::env::var(var).ok().filter(|s| !s.trim().is_empty())
        }

        let font = if let Some(url) = non_empty("CARAVEL_FONT_URL") {
            FontSource::Remote { url }
        } else if let Some(path) = non_empty("CARAVEL_FONT_PATH") {
            FontSource::File { path: path.into() }
        } else {
            FontSource::System
        };

        Self {
            image_service: ImageServiceConfig::from_env(),
            font,
        }
    }
}
