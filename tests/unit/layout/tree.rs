use super::*;
use crate::design::context::DesignInput;

fn design() -> DesignContext {
    crate::design::resolve(&DesignInput::default())
}

#[test]
fn roles_map_onto_design_typography() {
    let d = design();
    assert_eq!(TextRole::Headline.font_size(&d), d.headline_font_size);
    assert_eq!(TextRole::Body.font_size(&d), d.body_font_size);
    assert!(TextRole::Ordinal.font_size(&d) > d.headline_font_size);
    assert!(TextRole::Secondary.font_size(&d) < d.body_font_size);
}

#[test]
fn accent_roles_use_the_accent_color() {
    let d = design();
    assert_eq!(TextRole::Accent.color(&d), d.accent_color);
    assert_eq!(TextRole::Ordinal.color(&d), d.accent_color);
    assert_eq!(TextRole::Headline.color(&d), d.primary_color);
}

#[test]
fn layer_tree_serde_round_trips() {
    let tree = LayerTree {
        justify: VerticalJustify::Center,
        align: LayerAlign::Center,
        gap: 24.0,
        layers: vec![
            Layer::Text {
                text: "Hello".to_owned(),
                role: TextRole::Headline,
                align: LayerAlign::Center,
            },
            Layer::Rule {
                width: 160.0,
                thickness: 10.0,
            },
            Layer::Pill {
                text: "Go".to_owned(),
            },
        ],
    };
    let json = serde_json::to_string(&tree).unwrap();
    let back: LayerTree = serde_json::from_str(&json).unwrap();
    assert_eq!(back, tree);
}
