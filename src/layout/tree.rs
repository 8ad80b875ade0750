use serde::{Deserialize, Serialize};

use crate::design::context::DesignContext;
use crate::foundation::color::Color;

/// Text role within a template. Maps onto the shared design-context
/// typography; templates never carry their own sizes or colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextRole {
    /// Primary headline.
    Headline,
    /// Body copy.
    Body,
    /// Short accent line rendered in the accent color.
    Accent,
    /// Large zero-padded slide ordinal.
    Ordinal,
    /// Secondary line under a CTA pill.
    Secondary,
}

impl TextRole {
    /// Font size in pixels for this role.
    pub fn font_size(self, design: &DesignContext) -> f32 {
        match self {
            Self::Headline => design.headline_font_size,
            Self::Body => design.body_font_size,
            Self::Accent => design.body_font_size,
            Self::Ordinal => design.headline_font_size * 1.5,
            Self::Secondary => design.body_font_size * 0.85,
        }
    }

    /// Font weight for this role.
    pub fn font_weight(self, design: &DesignContext) -> u16 {
        match self {
            Self::Headline | Self::Ordinal => design.headline_font_weight,
            Self::Accent => design.headline_font_weight,
            Self::Body | Self::Secondary => design.body_font_weight,
        }
    }

    /// Fill color for this role.
    pub fn color(self, design: &DesignContext) -> Color {
        match self {
            Self::Headline | Self::Body | Self::Secondary => design.primary_color,
            Self::Accent | Self::Ordinal => design.accent_color,
        }
    }

    /// Line height multiplier for this role.
    pub fn line_height(self) -> f32 {
        match self {
            Self::Headline | Self::Ordinal => 1.12,
            Self::Body => 1.45,
            Self::Accent | Self::Secondary => 1.3,
        }
    }
}

/// Horizontal alignment of a layer within the content column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerAlign {
    /// Left-aligned (default).
    #[default]
    Start,
    /// Horizontally centered.
    Center,
}

/// One element of a slide's declarative layer tree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    /// Wrapped text block.
    Text {
        /// Text content.
        text: String,
        /// Typography role.
        role: TextRole,
        /// Horizontal alignment.
        #[serde(default)]
        align: LayerAlign,
    },
    /// Solid accent rule (underline / divider).
    Rule {
        /// Width in pixels.
        width: f32,
        /// Thickness in pixels.
        thickness: f32,
    },
    /// Pill-shaped call-to-action element.
    Pill {
        /// Pill label.
        text: String,
    },
}

/// Vertical distribution of the layer column within the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalJustify {
    /// Layers flow from the top padding edge.
    #[default]
    Top,
    /// Layers are centered vertically.
    Center,
}

/// Declarative layout tree for one slide: a padded flex column of layers.
///
/// Templates differ only in this arrangement; colors, typography, and padding
/// always come from the job's [`DesignContext`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayerTree {
    /// Vertical distribution.
    #[serde(default)]
    pub justify: VerticalJustify,
    /// Horizontal alignment of the column's items.
    #[serde(default)]
    pub align: LayerAlign,
    /// Gap between consecutive layers, in pixels.
    pub gap: f32,
    /// Ordered layers, top to bottom.
    pub layers: Vec<Layer>,
}

#[cfg(test)]
#[path = "../../tests/unit/layout/tree.rs"]
mod tests;
