//! Caravel generates multi-slide social-media carousels.
//!
//! One request resolves a single immutable [`DesignContext`], acquires one
//! shared background image (degrading to a solid fill when the image service
//! is unavailable), then composites a text layer per slide onto that
//! background, tracking progress and partial failures in a pollable
//! [`GenerationJob`] record.
//!
//! The public surface is pipeline-oriented:
//!
//! - Assemble a [`CarouselPipeline`] from collaborator implementations
//!   (job store, image store, image generator)
//! - Call [`CarouselPipeline::generate`] with a [`CarouselRequest`]
//! - Poll the job store for live progress; the response manifest
//!   distinguishes successful slides from failed ones for selective retry
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Background acquisition and prompt construction.
pub mod background;
/// Service configuration.
pub mod config;
/// Design-context resolution.
pub mod design;
/// Job records and the tracking state machine.
pub mod job;
/// Declarative slide layout.
pub mod layout;
/// Orchestration entry point.
pub mod pipeline;
/// Font cache, SVG rasterization, and compositing.
pub mod render;
/// Slide content and templates.
pub mod slides;
/// Collaborator seams: stores and the image service.
pub mod store;

pub use crate::foundation::color::Color;
pub use crate::foundation::core::Canvas;
pub use crate::foundation::error::{CaravelError, CaravelResult};

pub use crate::config::ServiceConfig;
pub use crate::design::context::{BrandVisualConfig, DesignContext, DesignInput, VisualStyle};
pub use crate::design::resolve;
pub use crate::job::model::{GenerationJob, SlideStatus, Status};
pub use crate::job::tracker::GenerationJobTracker;
pub use crate::pipeline::{CarouselPipeline, CarouselRequest, CarouselResponse};
pub use crate::render::fonts::FontSource;
pub use crate::slides::template::{select_template, TemplateKind};
pub use crate::store::{ImageGenerator, ImageStore, JobStore};
