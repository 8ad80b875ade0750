//! Collaborator seams: the persistent store and the external image service.
//!
//! Schema ownership lives outside this crate; the pipeline only needs the
//! narrow create/update/fetch surface below. In-memory implementations back
//! tests and credential-less local runs.

/// Production HTTP client for the image-generation service.
pub mod http;
/// In-memory store and generator implementations.
pub mod memory;

use async_trait::async_trait;
use uuid::Uuid;

use crate::foundation::error::CaravelResult;
use crate::job::model::{ContentImage, GenerationJob};

/// External generative-image service: natural-language prompt plus aspect
/// hint in, one encoded raster image out.
///
/// Implementations are treated as unreliable; callers map every failure to a
/// degraded-but-successful outcome.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Whether credentials are configured. Without them the provider skips
    /// the call entirely instead of failing it.
    fn has_credentials(&self) -> bool;

    /// Generate one image for the prompt. `aspect_hint` is `"W:H"` reduced.
    async fn generate(&self, prompt: &str, aspect_hint: &str) -> CaravelResult<Vec<u8>>;
}

/// Narrow persistence surface for [`GenerationJob`] records.
#[async_trait]
pub trait JobStore: Send + Sync {
    /// Insert a new job record (or overwrite a reused id).
    async fn create(&self, job: &GenerationJob) -> CaravelResult<()>;

    /// Persist the current state of a job. Called after every transition.
    async fn update(&self, job: &GenerationJob) -> CaravelResult<()>;

    /// Fetch a job by id, for polling.
    async fn fetch(&self, id: Uuid) -> CaravelResult<Option<GenerationJob>>;
}

/// Location of a persisted slide artifact.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredImage {
    /// Store-assigned (or record-carried) artifact id.
    pub id: Uuid,
    /// Opaque URL the artifact can be fetched from.
    pub url: String,
}

/// Narrow persistence surface for [`ContentImage`] artifacts.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Persist one slide artifact and return where it lives.
    async fn save(&self, image: &ContentImage) -> CaravelResult<StoredImage>;
}
