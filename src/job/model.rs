use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generation status shared by jobs and individual slides.
///
/// `Completed` and `Failed` are terminal; no transition leaves them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Created, no work started.
    Pending,
    /// Work in progress.
    Generating,
    /// Finished successfully (possibly with warnings at the job level).
    Completed,
    /// Finished unsuccessfully.
    Failed,
}

impl Status {
    /// Whether this status absorbs further transitions.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

/// Job error code set when a job fails (or partially fails).
pub mod error_code {
    /// Every slide failed to render or persist.
    pub const ALL_FAILED: &str = "ALL_FAILED";
    /// The shared font resource could not be loaded; no slide was attempted.
    pub const FONT_ERROR: &str = "FONT_ERROR";
    /// Some slides failed or the background could not be generated.
    pub const PARTIAL_FAILURE: &str = "PARTIAL_FAILURE";
}

/// Per-slide progress entry, embedded in the job metadata so one fetch
/// reveals full progress.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SlideStatus {
    /// 1-based slide number.
    pub slide_number: u32,
    /// Current slide status.
    pub status: Status,
    /// Captured error for failed slides.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Job metadata blob persisted alongside scalar fields.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct JobMetadata {
    /// One entry per requested slide, seeded as pending.
    #[serde(default)]
    pub slide_statuses: Vec<SlideStatus>,
}

/// One carousel-generation request's lifecycle record.
///
/// Persisted after every transition so a concurrent poller observes live
/// progress. Single writer per job; no locking beyond read-modify-write.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationJob {
    /// Job id (caller-supplied for reuse, otherwise fresh).
    pub id: Uuid,
    /// Content item this carousel belongs to.
    pub content_id: String,
    /// Job type tag, e.g. `"composite"`.
    pub kind: String,
    /// Current job status.
    pub status: Status,
    /// 0-100, monotonically non-decreasing.
    pub progress: u8,
    /// Number of requested slides.
    pub total_items: u32,
    /// Number of successfully persisted slides so far.
    pub completed_items: u32,
    /// Human-readable label of the step in flight.
    pub current_step: String,
    /// Terminal error or warning summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// Machine-readable error code ([`error_code`]).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    /// Structured failure payload (per-slide errors, background error).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_details: Option<serde_json::Value>,
    /// Embedded per-slide statuses.
    #[serde(default)]
    pub metadata: JobMetadata,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last transition timestamp.
    pub updated_at: DateTime<Utc>,
}

impl GenerationJob {
    /// Create a pending job seeded with one pending status per slide.
    pub fn new(id: Uuid, content_id: impl Into<String>, slide_numbers: &[u32]) -> Self {
        let now = Utc::now();
        Self {
            id,
            content_id: content_id.into(),
            kind: "composite".to_owned(),
            status: Status::Pending,
            progress: 0,
            total_items: slide_numbers.len() as u32,
            completed_items: 0,
            current_step: "Queued".to_owned(),
            error_message: None,
            error_code: None,
            error_details: None,
            metadata: JobMetadata {
                slide_statuses: slide_numbers
                    .iter()
                    .map(|&n| SlideStatus {
                        slide_number: n,
                        status: Status::Pending,
                        error: None,
                    })
                    .collect(),
            },
            created_at: now,
            updated_at: now,
        }
    }

    /// Look up the embedded status entry for a slide number.
    pub fn slide_status(&self, slide_number: u32) -> Option<&SlideStatus> {
        self.metadata
            .slide_statuses
            .iter()
            .find(|s| s.slide_number == slide_number)
    }
}

/// Persisted artifact for one successfully composited slide. Never mutated
/// after creation; many-to-one with a content item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContentImage {
    /// Artifact id.
    pub id: Uuid,
    /// Owning content item.
    pub content_id: String,
    /// Descriptive prompt, includes the slide index.
    pub prompt: String,
    /// Encoded PNG bytes.
    #[serde(with = "png_base64")]
    pub data: Vec<u8>,
    /// True for slide 1.
    pub is_primary: bool,
    /// Encoding format tag.
    pub format: String,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Reduced aspect-ratio tag, e.g. `"4:5"`.
    pub aspect_ratio: String,
    /// Generator tag, e.g. `"caravel-compositor"`.
    pub generator: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

mod png_base64 {
    use base64::Engine as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&base64::engine::general_purpose::STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(d)?;
        base64::engine::general_purpose::STANDARD
            .decode(s)
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/job/model.rs"]
mod tests;
