use super::*;

fn slide(n: u32, text: &str) -> SlideInput {
    SlideInput {
        slide_number: n,
        text: text.to_owned(),
    }
}

#[test]
fn empty_slide_list_is_rejected() {
    assert!(validate_slides(&[]).is_err());
}

#[test]
fn duplicate_slide_numbers_are_rejected() {
    let err = validate_slides(&[slide(1, "a"), slide(2, "b"), slide(2, "c")]).unwrap_err();
    assert!(err.to_string().contains("duplicate slide number 2"));
}

#[test]
fn zero_slide_number_is_rejected() {
    assert!(validate_slides(&[slide(0, "a")]).is_err());
}

#[test]
fn retry_subsets_omitting_slide_one_are_accepted() {
    // Selective retry of failed slides sends only their numbers; slide 1 may
    // legitimately be absent because its artifact already exists.
    let sorted = validate_slides(&[slide(3, "c"), slide(2, "b")]).unwrap();
    let order: Vec<u32> = sorted.iter().map(|s| s.slide_number).collect();
    assert_eq!(order, vec![2, 3]);
}

#[test]
fn slides_are_sorted_by_slide_number() {
    let sorted = validate_slides(&[slide(3, "c"), slide(1, "a"), slide(2, "b")]).unwrap();
    let order: Vec<u32> = sorted.iter().map(|s| s.slide_number).collect();
    assert_eq!(order, vec![1, 2, 3]);
    assert_eq!(sorted[0].text, "a");
}

#[test]
fn request_parses_camel_case_json() {
    let req: CarouselRequest = serde_json::from_str(
        r#"{
            "contentId": "c-1",
            "slides": [{"slideNumber": 1, "text": "Hello."}],
            "visualStyle": "typography",
            "textStyle": "bold-editorial",
            "useNumberedSlides": true
        }"#,
    )
    .unwrap();
    assert_eq!(req.content_id, "c-1");
    assert_eq!(req.slides.len(), 1);
    assert_eq!(req.visual_style.as_deref(), Some("typography"));
    assert!(req.use_numbered_slides);
    assert!(req.background_image.is_none());
    assert!(req.job_id.is_none());
}

#[test]
fn background_image_is_transported_as_base64() {
    let req: CarouselRequest = serde_json::from_str(
        r#"{"contentId": "c", "slides": [], "backgroundImage": "iVBORw=="}"#,
    )
    .unwrap();
    assert_eq!(
        req.background_image.as_deref(),
        Some(&[0x89u8, 0x50, 0x4E, 0x47][..])
    );

    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json["backgroundImage"], "iVBORw==");
}

#[test]
fn design_preset_is_accepted_alongside_text_style() {
    let req: CarouselRequest = serde_json::from_str(
        r#"{"contentId": "c", "slides": [], "designPreset": "elegant-serif"}"#,
    )
    .unwrap();
    assert!(req.text_style.is_none());
    assert_eq!(req.design_preset.as_deref(), Some("elegant-serif"));
}
