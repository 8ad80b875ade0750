use serde::{Deserialize, Serialize};

use crate::design::context::DesignContext;
use crate::layout::tree::{Layer, LayerAlign, LayerTree, TextRole, VerticalJustify};

use super::content::SlideContent;

/// Template kind for one slide position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    /// Opening slide: centered large headline with an accent underline.
    Hook,
    /// Interior slide: top-aligned headline, accent rule, body.
    Content,
    /// Interior slide with a large zero-padded ordinal.
    Numbered,
    /// Closing slide: centered headline with a CTA pill.
    Cta,
}

/// Select the template for a slide position.
///
/// Pure function of `(index, total, use_numbering)`. Index 0 wins the hook
/// check before the CTA check, so a single-slide carousel renders as a hook.
pub fn select_template(index: usize, total: usize, use_numbering: bool) -> TemplateKind {
    if index == 0 {
        TemplateKind::Hook
    } else if total > 0 && index == total - 1 {
        TemplateKind::Cta
    } else if use_numbering {
        TemplateKind::Numbered
    } else {
        TemplateKind::Content
    }
}

const ACCENT_RULE_WIDTH: f32 = 160.0;
const ACCENT_RULE_THICKNESS: f32 = 10.0;

fn text(role: TextRole, align: LayerAlign, value: &str) -> Layer {
    Layer::Text {
        text: value.to_owned(),
        role,
        align,
    }
}

/// Build the declarative layer tree for one slide.
///
/// The four templates differ only in arrangement; every color, size, and
/// padding value is read from the shared [`DesignContext`] at render time.
pub fn build_layer_tree(
    kind: TemplateKind,
    content: &SlideContent,
    design: &DesignContext,
) -> LayerTree {
    let headline = content.headline.as_deref().unwrap_or_default();
    let body = content.body.as_deref();
    let accent = content.accent_text.as_deref();

    match kind {
        TemplateKind::Hook => {
            let mut layers = vec![text(TextRole::Headline, LayerAlign::Center, headline)];
            layers.push(Layer::Rule {
                width: ACCENT_RULE_WIDTH,
                thickness: ACCENT_RULE_THICKNESS,
            });
            if let Some(b) = body {
                layers.push(text(TextRole::Body, LayerAlign::Center, b));
            }
            LayerTree {
                justify: VerticalJustify::Center,
                align: LayerAlign::Center,
                gap: design.body_font_size,
                layers,
            }
        }
        TemplateKind::Content => {
            let mut layers = vec![text(TextRole::Headline, LayerAlign::Start, headline)];
            if let Some(a) = accent {
                layers.push(text(TextRole::Accent, LayerAlign::Start, a));
            } else {
                layers.push(Layer::Rule {
                    width: ACCENT_RULE_WIDTH * 0.6,
                    thickness: ACCENT_RULE_THICKNESS * 0.6,
                });
            }
            if let Some(b) = body {
                layers.push(text(TextRole::Body, LayerAlign::Start, b));
            }
            LayerTree {
                justify: VerticalJustify::Top,
                align: LayerAlign::Start,
                gap: design.body_font_size * 0.9,
                layers,
            }
        }
        TemplateKind::Numbered => {
            let ordinal = format!("{:02}", content.slide_number);
            let mut layers = vec![
                text(TextRole::Ordinal, LayerAlign::Start, &ordinal),
                text(TextRole::Headline, LayerAlign::Start, headline),
            ];
            if let Some(b) = body {
                layers.push(text(TextRole::Body, LayerAlign::Start, b));
            }
            LayerTree {
                justify: VerticalJustify::Top,
                align: LayerAlign::Start,
                gap: design.body_font_size * 0.9,
                layers,
            }
        }
        TemplateKind::Cta => {
            let mut layers = vec![text(TextRole::Headline, LayerAlign::Center, headline)];
            let cta = content.cta_text.as_deref().or(body).unwrap_or("Learn more");
            layers.push(Layer::Pill {
                text: cta.to_owned(),
            });
            if let Some(s) = accent {
                layers.push(text(TextRole::Secondary, LayerAlign::Center, s));
            }
            LayerTree {
                justify: VerticalJustify::Center,
                align: LayerAlign::Center,
                gap: design.body_font_size * 1.2,
                layers,
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/slides/template.rs"]
mod tests;
