use super::*;
use crate::design::context::{BrandVisualConfig, DesignInput};
use crate::foundation::color::Color;

fn input(visual: Option<&str>, text: Option<&str>, brand: Option<BrandVisualConfig>) -> DesignInput {
    DesignInput {
        visual_style: visual.map(str::to_owned),
        text_style: text.map(str::to_owned),
        brand,
    }
}

#[test]
fn resolve_is_deterministic() {
    let i = input(Some("photorealistic"), Some("clean-minimal"), None);
    assert_eq!(resolve(&i), resolve(&i));
}

#[test]
fn varying_text_style_changes_only_typography() {
    let a = resolve(&input(Some("collage"), Some("bold-editorial"), None));
    let b = resolve(&input(Some("collage"), Some("bold-display"), None));

    assert_ne!(a.headline_font_size, b.headline_font_size);
    assert_ne!(a.headline_font_weight, b.headline_font_weight);

    assert_eq!(a.primary_color, b.primary_color);
    assert_eq!(a.accent_color, b.accent_color);
    assert_eq!(a.background_color, b.background_color);
    assert_eq!(a.aesthetic, b.aesthetic);
    assert_eq!(a.visual_style, b.visual_style);
}

#[test]
fn brand_primary_becomes_accent_only() {
    let brand_color = Color::from_hex("#123456").unwrap();
    let with_brand = resolve(&input(
        Some("typography"),
        None,
        Some(BrandVisualConfig {
            primary_color: Some(brand_color),
            master_brand_prompt: None,
        }),
    ));
    let without = resolve(&input(Some("typography"), None, None));

    assert_eq!(with_brand.accent_color, brand_color);
    // Legibility pair is never brand-overridable.
    assert_eq!(with_brand.primary_color, without.primary_color);
    assert_eq!(with_brand.background_color, without.background_color);
}

#[test]
fn master_brand_prompt_appends_to_aesthetic() {
    let ctx = resolve(&input(
        Some("illustration"),
        None,
        Some(BrandVisualConfig {
            primary_color: None,
            master_brand_prompt: Some("warm, optimistic, hand-made feel".to_owned()),
        }),
    ));
    assert!(ctx.aesthetic.ends_with(". warm, optimistic, hand-made feel"));
    assert_eq!(
        ctx.master_brand_prompt.as_deref(),
        Some("warm, optimistic, hand-made feel")
    );
}

#[test]
fn blank_master_brand_prompt_is_ignored() {
    let ctx = resolve(&input(
        Some("illustration"),
        None,
        Some(BrandVisualConfig {
            primary_color: None,
            master_brand_prompt: Some("   ".to_owned()),
        }),
    ));
    assert!(ctx.master_brand_prompt.is_none());
}

#[test]
fn padding_is_fixed() {
    let ctx = resolve(&DesignInput::default());
    assert_eq!(ctx.padding_x, 60.0);
    assert_eq!(ctx.padding_y, 80.0);
}
