use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::foundation::error::CaravelResult;
use crate::store::JobStore;

use super::model::{error_code, GenerationJob, Status};

/// Progress reserved for setup (design, background, fonts) before the slide
/// loop begins.
const SETUP_PROGRESS: u8 = 10;
/// Progress span covered by the slide loop; the remainder is finalization.
const SLIDE_SPAN: f64 = 80.0;

/// Owns one [`GenerationJob`] record and persists every transition
/// immediately, so a concurrent poller always observes live state.
///
/// State machine: `pending -> generating -> {completed, failed}`. Terminal
/// states absorb; a transition attempted after one is logged and dropped.
/// Job progress is clamped monotonically non-decreasing.
pub struct GenerationJobTracker {
    job: GenerationJob,
    store: Arc<dyn JobStore>,
}

impl GenerationJobTracker {
    /// Create (or overwrite, when the caller reuses an id) a pending job with
    /// one pending status per slide, and persist it.
    pub async fn create(
        store: Arc<dyn JobStore>,
        content_id: &str,
        slide_numbers: &[u32],
        job_id: Option<Uuid>,
    ) -> CaravelResult<Self> {
        let id = job_id.unwrap_or_else(Uuid::new_v4);
        let job = GenerationJob::new(id, content_id, slide_numbers);
        store.create(&job).await?;
        debug!(job_id = %id, slides = slide_numbers.len(), "job created");
        Ok(Self { job, store })
    }

    /// Read access to the current record.
    pub fn job(&self) -> &GenerationJob {
        &self.job
    }

    /// Number of slides persisted successfully so far.
    pub fn completed_items(&self) -> u32 {
        self.job.completed_items
    }

    async fn persist(&mut self) -> CaravelResult<()> {
        self.job.updated_at = Utc::now();
        self.store.update(&self.job).await
    }

    fn guard_terminal(&self, transition: &str) -> bool {
        if self.job.status.is_terminal() {
            warn!(
                job_id = %self.job.id,
                status = ?self.job.status,
                transition,
                "transition after terminal state dropped"
            );
            return true;
        }
        false
    }

    fn bump_progress(&mut self, target: u8) {
        // Monotone by construction: later steps can only raise it.
        self.job.progress = self.job.progress.max(target.min(100));
    }

    /// Mark the job generating with a descriptive step label.
    pub async fn start(&mut self, step: &str) -> CaravelResult<()> {
        if self.guard_terminal("start") {
            return Ok(());
        }
        self.job.status = Status::Generating;
        self.job.current_step = step.to_owned();
        self.bump_progress(5);
        self.persist().await
    }

    /// Update the step label and raise progress while setup work runs.
    pub async fn step(&mut self, label: &str, progress: u8) -> CaravelResult<()> {
        if self.guard_terminal("step") {
            return Ok(());
        }
        self.job.current_step = label.to_owned();
        self.bump_progress(progress);
        self.persist().await
    }

    /// Mark one slide generating.
    pub async fn slide_generating(&mut self, slide_number: u32) -> CaravelResult<()> {
        if self.guard_terminal("slide_generating") {
            return Ok(());
        }
        self.set_slide(slide_number, Status::Generating, None);
        let (done, total) = self.loop_position();
        self.job.current_step = format!("Compositing slide {}/{}", done + 1, total);
        self.persist().await
    }

    /// Mark one slide completed and advance loop progress.
    pub async fn slide_completed(&mut self, slide_number: u32) -> CaravelResult<()> {
        if self.guard_terminal("slide_completed") {
            return Ok(());
        }
        self.set_slide(slide_number, Status::Completed, None);
        self.job.completed_items += 1;
        self.advance_loop_progress();
        self.persist().await
    }

    /// Mark one slide failed with a captured error; the loop continues.
    pub async fn slide_failed(&mut self, slide_number: u32, error: &str) -> CaravelResult<()> {
        if self.guard_terminal("slide_failed") {
            return Ok(());
        }
        self.set_slide(slide_number, Status::Failed, Some(error.to_owned()));
        self.advance_loop_progress();
        self.persist().await
    }

    /// Terminal transition for a font-load failure: the job fails before any
    /// slide is attempted.
    pub async fn fail_font(&mut self, error: &str) -> CaravelResult<()> {
        if self.guard_terminal("fail_font") {
            return Ok(());
        }
        self.job.status = Status::Failed;
        self.job.error_code = Some(error_code::FONT_ERROR.to_owned());
        self.job.error_message = Some(error.to_owned());
        self.job.current_step = "Font load failed".to_owned();
        self.bump_progress(100);
        self.persist().await
    }

    /// Terminal aggregation over slide outcomes.
    ///
    /// Zero successes fails the job (`ALL_FAILED`). At least one success with
    /// any slide failure, or a background failure, completes the job with a
    /// warnings payload. A clean run completes with no error fields.
    pub async fn finish(&mut self, background_error: Option<&str>) -> CaravelResult<()> {
        if self.guard_terminal("finish") {
            return Ok(());
        }

        let slide_errors: Vec<_> = self
            .job
            .metadata
            .slide_statuses
            .iter()
            .filter(|s| s.status == Status::Failed)
            .map(|s| {
                json!({
                    "slideNumber": s.slide_number,
                    "error": s.error.clone().unwrap_or_default(),
                })
            })
            .collect();
        let succeeded = self.job.completed_items;

        if succeeded == 0 {
            self.job.status = Status::Failed;
            self.job.error_code = Some(error_code::ALL_FAILED.to_owned());
            self.job.error_message = Some("all slides failed to generate".to_owned());
            self.job.error_details = Some(json!({
                "slideErrors": slide_errors,
                "backgroundError": background_error,
            }));
        } else if !slide_errors.is_empty() || background_error.is_some() {
            self.job.status = Status::Completed;
            self.job.error_code = Some(error_code::PARTIAL_FAILURE.to_owned());
            self.job.error_message = Some(format!(
                "{} of {} slides generated",
                succeeded, self.job.total_items
            ));
            self.job.error_details = Some(json!({
                "slideErrors": slide_errors,
                "backgroundError": background_error,
            }));
        } else {
            self.job.status = Status::Completed;
        }

        self.job.current_step = "Done".to_owned();
        self.bump_progress(100);
        self.persist().await
    }

    fn set_slide(&mut self, slide_number: u32, status: Status, error: Option<String>) {
        if let Some(s) = self
            .job
            .metadata
            .slide_statuses
            .iter_mut()
            .find(|s| s.slide_number == slide_number)
        {
            if s.status.is_terminal() {
                warn!(slide_number, "slide transition after terminal state dropped");
                return;
            }
            s.status = status;
            s.error = error;
        }
    }

    fn loop_position(&self) -> (u32, u32) {
        let done = self
            .job
            .metadata
            .slide_statuses
            .iter()
            .filter(|s| s.status.is_terminal())
            .count() as u32;
        (done, self.job.total_items.max(1))
    }

    fn advance_loop_progress(&mut self) {
        let (done, total) = self.loop_position();
        let target =
            SETUP_PROGRESS + ((f64::from(done) / f64::from(total)) * SLIDE_SPAN).round() as u8;
        self.bump_progress(target);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/job/tracker.rs"]
mod tests;
