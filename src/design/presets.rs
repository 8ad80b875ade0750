use crate::foundation::color::Color;

use super::context::VisualStyle;

/// Per-style color and aesthetic defaults.
///
/// `primary` and `background` are chosen as a legible pair per style and are
/// never overridden by brand input.
#[derive(Clone, Copy, Debug)]
pub struct StyleDefaults {
    /// Text color.
    pub primary: Color,
    /// Accent color (overridable by the brand primary).
    pub accent: Color,
    /// Canvas / fallback fill color.
    pub background: Color,
    /// Prompt-steering description of the style.
    pub aesthetic: &'static str,
}

/// Typography preset: the four font fields plus the family.
#[derive(Clone, Copy, Debug)]
pub struct TypographyPreset {
    /// Preset key.
    pub key: &'static str,
    /// Font family name.
    pub font_family: &'static str,
    /// Headline size in pixels.
    pub headline_size: f32,
    /// Body size in pixels.
    pub body_size: f32,
    /// Headline weight.
    pub headline_weight: u16,
    /// Body weight.
    pub body_weight: u16,
}

/// Key of the preset used when the caller specifies none.
pub const DEFAULT_TEXT_STYLE: &str = "bold-editorial";

fn hex(s: &str) -> Color {
    // All table entries are compile-time literals; a bad one is a programmer
    // error caught by the table unit test.
    Color::from_hex(s).unwrap_or(Color::rgba(0.0, 0.0, 0.0, 1.0))
}

/// Look up the fixed color/aesthetic defaults for a style.
pub fn style_defaults(style: VisualStyle) -> StyleDefaults {
    match style {
        VisualStyle::Typography => StyleDefaults {
            primary: hex("#FAFAF7"),
            accent: hex("#E8FF5A"),
            background: hex("#101014"),
            aesthetic: "bold modernist typography poster, flat near-black ground, \
                        generous negative space, subtle paper grain",
        },
        VisualStyle::Photorealistic => StyleDefaults {
            primary: hex("#F5F7FA"),
            accent: hex("#FF8A3D"),
            background: hex("#12161B"),
            aesthetic: "moody editorial photography, shallow depth of field, \
                        natural window light, muted cinematic grade",
        },
        VisualStyle::Illustration => StyleDefaults {
            primary: hex("#2B2118"),
            accent: hex("#E4572E"),
            background: hex("#FFF6E9"),
            aesthetic: "flat vector illustration, warm cream background, \
                        limited retro palette, textured shapes",
        },
        VisualStyle::Render3d => StyleDefaults {
            primary: hex("#EDF2FF"),
            accent: hex("#7C5CFF"),
            background: hex("#0B1026"),
            aesthetic: "soft 3d render, matte clay materials, studio lighting, \
                        deep indigo environment, gentle ambient occlusion",
        },
        VisualStyle::AbstractArt => StyleDefaults {
            primary: hex("#181818"),
            accent: hex("#0057FF"),
            background: hex("#F4F1EC"),
            aesthetic: "abstract composition of organic shapes and gradients, \
                        gallery-white field, bold color blocking",
        },
        VisualStyle::Collage => StyleDefaults {
            primary: hex("#1F1B16"),
            accent: hex("#D72638"),
            background: hex("#F8EFE6"),
            aesthetic: "cut-paper collage, torn edges, halftone scraps, \
                        off-white paper ground, analog texture",
        },
    }
}

const TYPOGRAPHY_PRESETS: &[TypographyPreset] = &[
    TypographyPreset {
        key: "bold-editorial",
        font_family: "Inter",
        headline_size: 72.0,
        body_size: 36.0,
        headline_weight: 800,
        body_weight: 400,
    },
    TypographyPreset {
        key: "clean-minimal",
        font_family: "Inter",
        headline_size: 60.0,
        body_size: 32.0,
        headline_weight: 600,
        body_weight: 300,
    },
    TypographyPreset {
        key: "bold-display",
        font_family: "Inter",
        headline_size: 84.0,
        body_size: 34.0,
        headline_weight: 900,
        body_weight: 500,
    },
    TypographyPreset {
        key: "elegant-serif",
        font_family: "Source Serif 4",
        headline_size: 66.0,
        body_size: 34.0,
        headline_weight: 700,
        body_weight: 400,
    },
];

/// Look up a typography preset by key.
///
/// Unknown or missing keys resolve to [`DEFAULT_TEXT_STYLE`]; font sizing
/// always comes from a preset, never from brand input.
pub fn typography_preset(text_style: Option<&str>) -> TypographyPreset {
    let key = text_style.map(str::trim).filter(|s| !s.is_empty());
    key.and_then(|k| {
        TYPOGRAPHY_PRESETS
            .iter()
            .find(|p| p.key.eq_ignore_ascii_case(k))
            .copied()
    })
    .unwrap_or(TYPOGRAPHY_PRESETS[0])
}

#[cfg(test)]
#[path = "../../tests/unit/design/presets.rs"]
mod tests;
