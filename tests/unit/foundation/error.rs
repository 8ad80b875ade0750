use super::*;

#[test]
fn helpers_build_expected_variants() {
    assert!(matches!(
        CaravelError::validation("x"),
        CaravelError::Validation(_)
    ));
    assert!(matches!(CaravelError::font("x"), CaravelError::Font(_)));
    assert!(matches!(
        CaravelError::background("x"),
        CaravelError::Background(_)
    ));
    assert!(matches!(CaravelError::render("x"), CaravelError::Render(_)));
    assert!(matches!(CaravelError::store("x"), CaravelError::Store(_)));
}

#[test]
fn display_includes_stage_prefix() {
    assert_eq!(
        CaravelError::render("bad layer").to_string(),
        "render error: bad layer"
    );
    assert_eq!(
        CaravelError::font("missing").to_string(),
        "font error: missing"
    );
}

#[test]
fn anyhow_errors_wrap_transparently() {
    let inner = anyhow::anyhow!("underlying io failure");
    let err: CaravelError = inner.into();
    assert_eq!(err.to_string(), "underlying io failure");
}
