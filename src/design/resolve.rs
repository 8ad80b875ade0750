use tracing::debug;

use super::context::{DesignContext, DesignInput, VisualStyle, PADDING_X, PADDING_Y};
use super::presets::{style_defaults, typography_preset};

/// Separator used when appending the master brand prompt to a style
/// aesthetic.
const AESTHETIC_SEPARATOR: &str = ". ";

/// Resolve one immutable [`DesignContext`] from style selection, brand
/// configuration, and defaults.
///
/// Pure and deterministic: no clock, no randomness, no I/O. The priority
/// rules run as an ordered sequence so each is independently testable:
///
/// 1. normalize the visual style (lenient parse, `typography` fallback)
/// 2. take color/aesthetic defaults from the style table
/// 3. take all typography from the preset table (brand never overrides it)
/// 4. accent = brand primary when supplied, else the style accent;
///    primary and background always stay the style defaults so text remains
///    legible against whatever background gets generated
/// 5. append the master brand prompt to the aesthetic when present
pub fn resolve(input: &DesignInput) -> DesignContext {
    // 1. Normalize style.
    let style = VisualStyle::parse_lenient(input.visual_style.as_deref());

    // 2. Style defaults.
    let defaults = style_defaults(style);

    // 3. Typography preset.
    let typo = typography_preset(input.text_style.as_deref());

    // 4. Color priority.
    let brand = input.brand.as_ref();
    let accent = brand
        .and_then(|b| b.primary_color)
        .unwrap_or(defaults.accent);

    // 5. Aesthetic assembly.
    let master_brand_prompt = brand
        .and_then(|b| b.master_brand_prompt.as_deref())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned);
    let aesthetic = match &master_brand_prompt {
        Some(master) => {
            let base = defaults.aesthetic.trim_end_matches('.');
            format!("{base}{AESTHETIC_SEPARATOR}{master}")
        }
        None => defaults.aesthetic.to_owned(),
    };

    debug!(
        style = style.key(),
        text_style = typo.key,
        brand_accent = brand.and_then(|b| b.primary_color).is_some(),
        "resolved design context"
    );

    DesignContext {
        visual_style: style,
        primary_color: defaults.primary,
        accent_color: accent,
        background_color: defaults.background,
        font_family: typo.font_family.to_owned(),
        headline_font_size: typo.headline_size,
        body_font_size: typo.body_size,
        headline_font_weight: typo.headline_weight,
        body_font_weight: typo.body_weight,
        padding_x: PADDING_X,
        padding_y: PADDING_Y,
        aesthetic,
        master_brand_prompt,
        text_style: typo.key.to_owned(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/design/resolve.rs"]
mod tests;
