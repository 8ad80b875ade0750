use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use base64::Engine as _;
use uuid::Uuid;

use crate::foundation::error::{CaravelError, CaravelResult};
use crate::job::model::{ContentImage, GenerationJob};

use super::{ImageGenerator, ImageStore, JobStore, StoredImage};

/// In-memory [`JobStore`]. Backs tests and is a usable default when no
/// database is wired; pollers share it via `Arc`.
#[derive(Clone, Default)]
pub struct MemoryJobStore {
    jobs: Arc<Mutex<HashMap<Uuid, GenerationJob>>>,
}

impl MemoryJobStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> CaravelResult<std::sync::MutexGuard<'_, HashMap<Uuid, GenerationJob>>> {
        self.jobs
            .lock()
            .map_err(|_| CaravelError::store("job store mutex poisoned"))
    }
}

#[async_trait]
impl JobStore for MemoryJobStore {
    async fn create(&self, job: &GenerationJob) -> CaravelResult<()> {
        self.lock()?.insert(job.id, job.clone());
        Ok(())
    }

    async fn update(&self, job: &GenerationJob) -> CaravelResult<()> {
        self.lock()?.insert(job.id, job.clone());
        Ok(())
    }

    async fn fetch(&self, id: Uuid) -> CaravelResult<Option<GenerationJob>> {
        Ok(self.lock()?.get(&id).cloned())
    }
}

/// In-memory [`ImageStore`] that returns `data:` URLs, so credential-less
/// runs still produce a complete response manifest.
#[derive(Clone, Default)]
pub struct MemoryImageStore {
    images: Arc<Mutex<Vec<ContentImage>>>,
}

impl MemoryImageStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything saved so far, in insertion order.
    pub fn saved(&self) -> Vec<ContentImage> {
        self.images.lock().map(|v| v.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl ImageStore for MemoryImageStore {
    async fn save(&self, image: &ContentImage) -> CaravelResult<StoredImage> {
        let url = format!(
            "data:image/png;base64,{}",
            base64::engine::general_purpose::STANDARD.encode(&image.data)
        );
        self.images
            .lock()
            .map_err(|_| CaravelError::store("image store mutex poisoned"))?
            .push(image.clone());
        Ok(StoredImage { id: image.id, url })
    }
}

/// Test/demo [`ImageGenerator`]: returns fixed bytes, or reports missing
/// credentials when constructed with none.
#[derive(Clone, Default)]
pub struct FixedImageGenerator {
    bytes: Option<Vec<u8>>,
}

impl FixedImageGenerator {
    /// Generator that always yields `bytes`.
    pub fn with_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes: Some(bytes) }
    }

    /// Generator with no credentials configured.
    pub fn without_credentials() -> Self {
        Self { bytes: None }
    }
}

#[async_trait]
impl ImageGenerator for FixedImageGenerator {
    fn has_credentials(&self) -> bool {
        self.bytes.is_some()
    }

    async fn generate(&self, _prompt: &str, _aspect_hint: &str) -> CaravelResult<Vec<u8>> {
        self.bytes
            .clone()
            .ok_or_else(|| CaravelError::background("image service credentials not configured"))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/store/memory.rs"]
mod tests;
