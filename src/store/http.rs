use std::time::Duration;

use async_trait::async_trait;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::foundation::error::{CaravelError, CaravelResult};

use super::ImageGenerator;

/// Configuration for the external image-generation service.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ImageServiceConfig {
    /// Generation endpoint URL.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Bearer token. Absent means "no credentials": the background step is
    /// skipped rather than attempted.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Per-call timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    60
}

impl ImageServiceConfig {
    /// Read endpoint and key from `CARAVEL_IMAGE_API_URL` /
    /// `CARAVEL_IMAGE_API_KEY`.
    pub fn from_env() -> Self {
        fn non_empty(var: &str) -> Option<String> {
            std::env::var(var).ok().filter(|s| !s.trim().is_empty())
        }
        Self {
            endpoint: non_empty("CARAVEL_IMAGE_API_URL"),
            api_key: non_empty("CARAVEL_IMAGE_API_KEY"),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    prompt: &'a str,
    aspect_ratio: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    image_b64: Option<String>,
    #[serde(default)]
    url: Option<String>,
}

/// Reqwest-backed [`ImageGenerator`].
///
/// The service contract is deliberately narrow: POST `{prompt, aspect_ratio}`
/// as JSON, receive either inline base64 bytes or a URL to fetch. Non-2xx
/// responses, empty payloads, and transport errors all surface as
/// [`CaravelError::Background`] for the provider to degrade on.
pub struct HttpImageGenerator {
    config: ImageServiceConfig,
    client: reqwest::Client,
}

impl HttpImageGenerator {
    /// Build a generator from config. Fails only on TLS/client setup.
    pub fn new(config: ImageServiceConfig) -> CaravelResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .build()
            .map_err(|e| CaravelError::background(format!("image http client: {e}")))?;
        Ok(Self { config, client })
    }

    async fn fetch_url(&self, url: &str) -> CaravelResult<Vec<u8>> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| CaravelError::background(format!("fetch generated image: {e}")))?;
        if !resp.status().is_success() {
            return Err(CaravelError::background(format!(
                "fetch generated image: status {}",
                resp.status()
            )));
        }
        let bytes = resp
            .bytes()
            .await
            .map_err(|e| CaravelError::background(format!("read generated image: {e}")))?;
        Ok(bytes.to_vec())
    }

    /// Map a service response body onto raw image bytes: inline base64 wins
    /// over a follow-up URL; a body carrying neither is an error.
    async fn resolve_payload(&self, body: GenerateResponse) -> CaravelResult<Vec<u8>> {
        if let Some(b64) = body.image_b64 {
            let bytes = base64::engine::general_purpose::STANDARD
                .decode(b64.trim())
                .map_err(|e| CaravelError::background(format!("decode image payload: {e}")))?;
            if bytes.is_empty() {
                return Err(CaravelError::background("image service returned no bytes"));
            }
            return Ok(bytes);
        }
        if let Some(url) = body.url {
            let bytes = self.fetch_url(&url).await?;
            if bytes.is_empty() {
                return Err(CaravelError::background("image service returned no bytes"));
            }
            return Ok(bytes);
        }

        Err(CaravelError::background(
            "image service response carried neither image bytes nor a url",
        ))
    }
}

#[async_trait]
impl ImageGenerator for HttpImageGenerator {
    fn has_credentials(&self) -> bool {
        self.config.endpoint.is_some()
            && self
                .config
                .api_key
                .as_deref()
                .is_some_and(|k| !k.trim().is_empty())
    }

    async fn generate(&self, prompt: &str, aspect_hint: &str) -> CaravelResult<Vec<u8>> {
        let endpoint = self
            .config
            .endpoint
            .as_deref()
            .ok_or_else(|| CaravelError::background("image service endpoint not configured"))?;
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| CaravelError::background("image service api key not configured"))?;

        debug!(endpoint, aspect = aspect_hint, "requesting background generation");
        let resp = self
            .client
            .post(endpoint)
            .bearer_auth(api_key)
            .json(&GenerateRequest {
                prompt,
                aspect_ratio: aspect_hint,
            })
            .send()
            .await
            .map_err(|e| CaravelError::background(format!("image service call: {e}")))?;

        if !resp.status().is_success() {
            return Err(CaravelError::background(format!(
                "image service returned status {}",
                resp.status()
            )));
        }

        let body: GenerateResponse = resp
            .json()
            .await
            .map_err(|e| CaravelError::background(format!("image service response: {e}")))?;
        self.resolve_payload(body).await
    }
}

#[cfg(test)]
#[path = "../../tests/unit/store/http.rs"]
mod tests;
