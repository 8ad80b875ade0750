use super::*;
use crate::design::context::DesignInput;

fn design() -> DesignContext {
    crate::design::resolve(&DesignInput::default())
}

#[test]
fn five_slide_numbered_carousel_boundaries() {
    let kinds: Vec<_> = (0..5).map(|i| select_template(i, 5, true)).collect();
    assert_eq!(
        kinds,
        vec![
            TemplateKind::Hook,
            TemplateKind::Numbered,
            TemplateKind::Numbered,
            TemplateKind::Numbered,
            TemplateKind::Cta,
        ]
    );
}

#[test]
fn interior_slides_without_numbering_are_content() {
    assert_eq!(select_template(1, 4, false), TemplateKind::Content);
    assert_eq!(select_template(2, 4, false), TemplateKind::Content);
}

#[test]
fn single_slide_is_hook_not_cta() {
    // Index 0 is both first and last; the hook check wins the tie.
    assert_eq!(select_template(0, 1, false), TemplateKind::Hook);
    assert_eq!(select_template(0, 1, true), TemplateKind::Hook);
}

#[test]
fn two_slide_carousel_is_hook_then_cta() {
    assert_eq!(select_template(0, 2, true), TemplateKind::Hook);
    assert_eq!(select_template(1, 2, true), TemplateKind::Cta);
}

#[test]
fn hook_tree_is_centered_with_accent_rule() {
    let content = SlideContent::from_raw_text(1, "Big opening line.");
    let tree = build_layer_tree(TemplateKind::Hook, &content, &design());
    assert_eq!(tree.justify, VerticalJustify::Center);
    assert!(matches!(tree.layers[0], Layer::Text { role: TextRole::Headline, .. }));
    assert!(matches!(tree.layers[1], Layer::Rule { .. }));
}

#[test]
fn numbered_tree_zero_pads_the_ordinal() {
    let content = SlideContent::from_raw_text(3, "Point three. Details here.");
    let tree = build_layer_tree(TemplateKind::Numbered, &content, &design());
    match &tree.layers[0] {
        Layer::Text { text, role, .. } => {
            assert_eq!(text, "03");
            assert_eq!(*role, TextRole::Ordinal);
        }
        other => panic!("expected ordinal text layer, got {other:?}"),
    }
}

#[test]
fn cta_tree_has_a_pill_with_fallback_label() {
    let content = SlideContent::from_raw_text(5, "Wrap up.");
    let tree = build_layer_tree(TemplateKind::Cta, &content, &design());
    assert!(tree
        .layers
        .iter()
        .any(|l| matches!(l, Layer::Pill { text } if text == "Learn more")));
}

#[test]
fn cta_pill_prefers_explicit_cta_text() {
    let mut content = SlideContent::from_raw_text(4, "Closing. Follow for more.");
    content.cta_text = Some("Follow us".to_owned());
    let tree = build_layer_tree(TemplateKind::Cta, &content, &design());
    assert!(tree
        .layers
        .iter()
        .any(|l| matches!(l, Layer::Pill { text } if text == "Follow us")));
}
