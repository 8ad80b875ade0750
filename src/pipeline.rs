use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::background::provider::{Background, BackgroundProvider};
use crate::design::context::{BrandVisualConfig, DesignContext, DesignInput};
use crate::foundation::core::Canvas;
use crate::foundation::error::{CaravelError, CaravelResult};
use crate::job::model::ContentImage;
use crate::job::tracker::GenerationJobTracker;
use crate::layout::solver::solve;
use crate::render::compositor::{composite_slide, encode_png};
use crate::render::fonts::{self, FontSource};
use crate::render::svg::rasterize_text_layer;
use crate::slides::content::SlideContent;
use crate::slides::template::{build_layer_tree, select_template, TemplateKind};
use crate::store::{ImageGenerator, ImageStore, JobStore};

/// One slide's raw input: the already-generated copy for that position.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideInput {
    /// 1-based position, unique within the request.
    pub slide_number: u32,
    /// Raw slide text; split into headline/body by the pipeline.
    pub text: String,
}

/// Carousel generation request.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselRequest {
    /// Content item the carousel belongs to.
    pub content_id: String,
    /// Ordered slide inputs.
    #[serde(default)]
    pub slides: Vec<SlideInput>,
    /// Visual style selection, parsed leniently.
    #[serde(default)]
    pub visual_style: Option<String>,
    /// Typography preset key.
    #[serde(default)]
    pub text_style: Option<String>,
    /// Style override applied to the background prompt only.
    #[serde(default)]
    pub background_style: Option<String>,
    /// Caller-supplied background image bytes; reused unchanged when present.
    #[serde(default, skip_serializing_if = "Option::is_none", with = "opt_b64")]
    pub background_image: Option<Vec<u8>>,
    /// Alias for `text_style`, kept for callers that send a preset name.
    #[serde(default)]
    pub design_preset: Option<String>,
    /// Brand visual configuration fetched by the caller, if any.
    #[serde(default)]
    pub brand: Option<BrandVisualConfig>,
    /// Render interior slides with large ordinals.
    #[serde(default)]
    pub use_numbered_slides: bool,
    /// Reuse an existing job id instead of minting one.
    #[serde(default)]
    pub job_id: Option<Uuid>,
}

/// One successfully generated slide in the response manifest.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideImage {
    /// 1-based slide number.
    pub slide_number: u32,
    /// Where the artifact can be fetched.
    pub image_url: String,
    /// Persisted artifact id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_image_id: Option<Uuid>,
}

/// One failed slide in the response manifest, enabling selective retry.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideError {
    /// 1-based slide number.
    pub slide_number: u32,
    /// Captured error message.
    pub error: String,
}

/// Summary of the resolved design.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DesignSummary {
    /// Typography preset key.
    pub preset: String,
    /// Visual style key.
    pub system: String,
}

/// Carousel generation response.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselResponse {
    /// True when the job completed (clean or with warnings).
    pub success: bool,
    /// Successfully generated slides, ascending slide number.
    pub images: Vec<SlideImage>,
    /// Resolved design summary.
    pub design: DesignSummary,
    /// True when this job generated a fresh background.
    pub background_generated: bool,
    /// Why the background is absent, when it is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_error: Option<String>,
    /// Failed slides, when any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slide_errors: Option<Vec<SlideError>>,
    /// Job id for polling.
    pub job_id: Uuid,
}

/// The carousel pipeline orchestrator.
///
/// Resolves the design context once, acquires one background, loads the
/// shared font resource, then composites and persists slides strictly
/// sequentially. Sequential processing bounds load on the image service and
/// keeps background reuse trivially correct.
pub struct CarouselPipeline {
    job_store: Arc<dyn JobStore>,
    image_store: Arc<dyn ImageStore>,
    generator: Arc<dyn ImageGenerator>,
    font_source: FontSource,
    canvas: Canvas,
}

impl CarouselPipeline {
    /// Assemble a pipeline from its collaborators, targeting the fixed
    /// 1080x1350 carousel canvas.
    pub fn new(
        job_store: Arc<dyn JobStore>,
        image_store: Arc<dyn ImageStore>,
        generator: Arc<dyn ImageGenerator>,
        font_source: FontSource,
    ) -> Self {
        Self {
            job_store,
            image_store,
            generator,
            font_source,
            canvas: Canvas::carousel(),
        }
    }

    /// Run one carousel generation job to completion.
    ///
    /// Returns `Err` only for request validation failures, the fatal
    /// font-load case, or a job-store failure; per-slide and background
    /// failures are reported inside the response and the job record.
    #[instrument(skip_all, fields(content_id = %request.content_id))]
    pub async fn generate(&self, request: CarouselRequest) -> CaravelResult<CarouselResponse> {
        let slides = validate_slides(&request.slides)?;
        let total = slides.len();
        let slide_numbers: Vec<u32> = slides.iter().map(|s| s.slide_number).collect();

        let mut tracker = GenerationJobTracker::create(
            Arc::clone(&self.job_store),
            &request.content_id,
            &slide_numbers,
            request.job_id,
        )
        .await?;

        // Resolve once; every slide and the background prompt read this value.
        let design = crate::design::resolve(&DesignInput {
            visual_style: request.visual_style.clone(),
            text_style: request.text_style.clone().or(request.design_preset.clone()),
            brand: request.brand.clone(),
        });

        tracker.start("Generating background").await?;
        let bg_style_key = request
            .background_style
            .clone()
            .unwrap_or_else(|| design.visual_style.key().to_owned());
        let background = BackgroundProvider::new(self.generator.as_ref())
            .acquire(
                &design,
                &bg_style_key,
                request.background_image.clone(),
                self.canvas,
            )
            .await?;

        tracker.step("Loading fonts", 10).await?;
        let fontdb = match fonts::load_cached(&self.font_source).await {
            Ok(db) => db,
            Err(e) => {
                tracker.fail_font(&e.to_string()).await?;
                return Err(e);
            }
        };

        let mut images = Vec::new();
        let mut slide_errors = Vec::new();
        for (index, slide) in slides.iter().enumerate() {
            tracker.slide_generating(slide.slide_number).await?;

            let kind = select_template(index, total, request.use_numbered_slides);
            let outcome = self
                .render_one(
                    &request.content_id,
                    slide,
                    kind,
                    &design,
                    &background,
                    Arc::clone(&fontdb),
                )
                .await;

            match outcome {
                Ok(image) => {
                    tracker.slide_completed(slide.slide_number).await?;
                    images.push(image);
                }
                Err(e) => {
                    let msg = e.to_string();
                    tracker.slide_failed(slide.slide_number, &msg).await?;
                    slide_errors.push(SlideError {
                        slide_number: slide.slide_number,
                        error: msg,
                    });
                }
            }
        }

        // Absence because no credentials are configured is expected, not a
        // failure; only a failed generation attempt warrants a job warning.
        let job_bg_error = self
            .generator
            .has_credentials()
            .then_some(background.error.as_deref())
            .flatten();
        tracker.finish(job_bg_error).await?;
        let job = tracker.job();
        info!(
            job_id = %job.id,
            status = ?job.status,
            completed = job.completed_items,
            total = job.total_items,
            "carousel job finished"
        );

        Ok(CarouselResponse {
            success: job.status == crate::job::model::Status::Completed,
            images,
            design: DesignSummary {
                preset: design.text_style.clone(),
                system: design.visual_style.key().to_owned(),
            },
            background_generated: background.generated,
            background_error: background.error.clone(),
            slide_errors: (!slide_errors.is_empty()).then_some(slide_errors),
            job_id: job.id,
        })
    }

    /// Composite and persist one slide. Any error here is per-slide
    /// recoverable: the caller records it and moves on.
    async fn render_one(
        &self,
        content_id: &str,
        slide: &SlideInput,
        kind: TemplateKind,
        design: &DesignContext,
        background: &Background,
        fontdb: Arc<usvg::fontdb::Database>,
    ) -> CaravelResult<SlideImage> {
        let content = SlideContent::from_raw_text(slide.slide_number, &slide.text);
        let tree = build_layer_tree(kind, &content, design);
        let solved = solve(&tree, design, self.canvas)?;
        let text_layer = rasterize_text_layer(&solved, design, fontdb)?;

        let bg_bytes = background.bytes.as_ref().map(|b| b.as_slice());
        let final_image = composite_slide(bg_bytes, &text_layer, design, self.canvas)?;
        let png = encode_png(&final_image)?;

        let record = ContentImage {
            id: Uuid::new_v4(),
            content_id: content_id.to_owned(),
            prompt: format!(
                "Carousel slide {} ({:?} template, {} style)",
                slide.slide_number,
                kind,
                design.visual_style.key()
            ),
            data: png,
            is_primary: slide.slide_number == 1,
            format: "png".to_owned(),
            width: self.canvas.width,
            height: self.canvas.height,
            aspect_ratio: self.canvas.aspect_hint(),
            generator: "caravel-compositor".to_owned(),
            created_at: chrono::Utc::now(),
        };
        let stored = self.image_store.save(&record).await?;

        Ok(SlideImage {
            slide_number: slide.slide_number,
            image_url: stored.url,
            saved_image_id: Some(stored.id),
        })
    }
}

/// Validate and sort slide inputs: non-empty, 1-based, unique numbers.
fn validate_slides(slides: &[SlideInput]) -> CaravelResult<Vec<SlideInput>> {
    if slides.is_empty() {
        return Err(CaravelError::validation("at least one slide is required"));
    }
    let mut sorted = slides.to_vec();
    sorted.sort_by_key(|s| s.slide_number);
    for pair in sorted.windows(2) {
        if pair[0].slide_number == pair[1].slide_number {
            return Err(CaravelError::validation(format!(
                "duplicate slide number {}",
                pair[0].slide_number
            )));
        }
    }
    if sorted[0].slide_number == 0 {
        return Err(CaravelError::validation("slide numbers are 1-based"));
    }
    Ok(sorted)
}

mod opt_b64 {
    use base64::Engine as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(v: &Option<Vec<u8>>, s: S) -> Result<S::Ok, S::Error> {
        match v {
            Some(bytes) => {
                s.serialize_some(&base64::engine::general_purpose::STANDARD.encode(bytes))
            }
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Vec<u8>>, D::Error> {
        let raw: Option<String> = Option::deserialize(d)?;
        raw.map(|s| {
            base64::engine::general_purpose::STANDARD
                .decode(s.trim())
                .map_err(serde::de::Error::custom)
        })
        .transpose()
    }
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
