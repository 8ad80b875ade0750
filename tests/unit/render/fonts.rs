use super::*;

#[test]
fn empty_font_database_is_a_fatal_font_error() {
    let db = usvg::fontdb::Database::new();
    let err = ensure_has_faces(&db).unwrap_err();
    assert!(matches!(err, CaravelError::Font(_)));
    assert!(err.to_string().contains("no fonts available"));
}

#[tokio::test]
async fn missing_font_file_is_a_fatal_font_error() {
    let source = FontSource::File {
        path: "/nonexistent/fonts/inter.ttf".into(),
    };
    let err = build_database(&source).await.unwrap_err();
    assert!(matches!(err, CaravelError::Font(_)));
}

#[test]
fn font_source_serde_uses_snake_case_tags() {
    let json = serde_json::to_string(&FontSource::Remote {
        url: "https://fonts.example/inter.ttf".to_owned(),
    })
    .unwrap();
    assert!(json.contains("remote"));
    assert_eq!(
        serde_json::from_str::<FontSource>("\"system\"").unwrap(),
        FontSource::System
    );
}
