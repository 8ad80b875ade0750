use serde::{Deserialize, Serialize};

use crate::foundation::color::Color;

/// Horizontal text padding applied to every template, in pixels.
pub const PADDING_X: f32 = 60.0;
/// Vertical text padding applied to every template, in pixels.
pub const PADDING_Y: f32 = 80.0;

/// The six visual styles a carousel can be generated in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VisualStyle {
    /// Large type on a flat or subtly textured ground.
    Typography,
    /// Photographic backgrounds with editorial text overlays.
    Photorealistic,
    /// Hand-drawn / flat illustration backgrounds.
    Illustration,
    /// Rendered 3D scenes with soft studio lighting.
    #[serde(rename = "3d-render")]
    Render3d,
    /// Non-figurative shapes, gradients, and texture.
    AbstractArt,
    /// Cut-paper and mixed-media collage.
    Collage,
}

impl VisualStyle {
    /// Normalize free-form user input to a known style.
    ///
    /// Exact kebab-case names match first; otherwise a tolerant substring
    /// pass catches inputs like `"photo"` or `"3d render"`. Anything else
    /// (including absence) falls back to [`VisualStyle::Typography`].
    pub fn parse_lenient(input: Option<&str>) -> Self {
        let Some(raw) = input else {
            return Self::Typography;
        };
        let s = raw.trim().to_ascii_lowercase();
        match s.as_str() {
            "typography" => return Self::Typography,
            "photorealistic" => return Self::Photorealistic,
            "illustration" => return Self::Illustration,
            "3d-render" => return Self::Render3d,
            "abstract-art" => return Self::AbstractArt,
            "collage" => return Self::Collage,
            _ => {}
        }
        if s.contains("photo") {
            Self::Photorealistic
        } else if s.contains("3d") {
            Self::Render3d
        } else if s.contains("illust") {
            Self::Illustration
        } else if s.contains("abstract") {
            Self::AbstractArt
        } else if s.contains("collage") {
            Self::Collage
        } else {
            Self::Typography
        }
    }

    /// Stable kebab-case key, e.g. for prompt-template lookup.
    pub fn key(self) -> &'static str {
        match self {
            Self::Typography => "typography",
            Self::Photorealistic => "photorealistic",
            Self::Illustration => "illustration",
            Self::Render3d => "3d-render",
            Self::AbstractArt => "abstract-art",
            Self::Collage => "collage",
        }
    }
}

/// Brand-supplied visual configuration.
///
/// Only two fields may influence the resolved design: the brand primary
/// color (mapped onto the accent slot) and the master brand prompt. Brand
/// input never overrides typography or the legibility-critical primary /
/// background colors.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BrandVisualConfig {
    /// Brand primary color; becomes the carousel accent when present.
    #[serde(default)]
    pub primary_color: Option<Color>,
    /// Authoritative brand-voice text appended to the style aesthetic and
    /// used verbatim for background prompts.
    #[serde(default)]
    pub master_brand_prompt: Option<String>,
}

/// Input to [`crate::design::resolve`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DesignInput {
    /// Free-form visual style selection, parsed leniently.
    #[serde(default)]
    pub visual_style: Option<String>,
    /// Typography preset key; defaults to `bold-editorial`.
    #[serde(default)]
    pub text_style: Option<String>,
    /// Brand visual configuration, if the caller has one.
    #[serde(default)]
    pub brand: Option<BrandVisualConfig>,
}

/// The single resolved visual specification for one carousel job.
///
/// Computed once per request and never mutated afterwards; the background
/// prompt and every slide read from the same value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DesignContext {
    /// Normalized visual style.
    pub visual_style: VisualStyle,
    /// Headline / body text color. Always the style default.
    pub primary_color: Color,
    /// Accent color for underlines, rules, and CTA pills.
    pub accent_color: Color,
    /// Solid-fill fallback and prompt ground color. Always the style default.
    pub background_color: Color,
    /// Font family name requested from the cached font resource.
    pub font_family: String,
    /// Headline size in pixels.
    pub headline_font_size: f32,
    /// Body size in pixels.
    pub body_font_size: f32,
    /// Headline weight (CSS numeric scale).
    pub headline_font_weight: u16,
    /// Body weight (CSS numeric scale).
    pub body_font_weight: u16,
    /// Horizontal padding in pixels (fixed).
    pub padding_x: f32,
    /// Vertical padding in pixels (fixed).
    pub padding_y: f32,
    /// Free-text description steering the background prompt.
    pub aesthetic: String,
    /// Master brand prompt, when the brand supplied one.
    pub master_brand_prompt: Option<String>,
    /// Typography preset key the context was resolved with.
    pub text_style: String,
}

#[cfg(test)]
#[path = "../../tests/unit/design/context.rs"]
mod tests;
