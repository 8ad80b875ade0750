use super::*;

#[test]
fn first_sentence_becomes_headline() {
    let c = SlideContent::from_raw_text(2, "Body line one. Body line two.");
    assert_eq!(c.headline.as_deref(), Some("Body line one."));
    assert_eq!(c.body.as_deref(), Some("Body line two."));
}

#[test]
fn single_sentence_is_all_headline() {
    let c = SlideContent::from_raw_text(1, "Hook line.");
    assert_eq!(c.headline.as_deref(), Some("Hook line."));
    assert!(c.body.is_none());
}

#[test]
fn newline_before_sentence_end_wins() {
    let c = SlideContent::from_raw_text(1, "Short headline\nThen a body. With sentences.");
    assert_eq!(c.headline.as_deref(), Some("Short headline"));
    assert_eq!(c.body.as_deref(), Some("Then a body. With sentences."));
}

#[test]
fn question_and_exclamation_terminate_headlines() {
    let q = SlideContent::from_raw_text(1, "Ready to grow? Here is how.");
    assert_eq!(q.headline.as_deref(), Some("Ready to grow?"));
    assert_eq!(q.body.as_deref(), Some("Here is how."));

    let e = SlideContent::from_raw_text(1, "Stop guessing! Start measuring.");
    assert_eq!(e.headline.as_deref(), Some("Stop guessing!"));
    assert_eq!(e.body.as_deref(), Some("Start measuring."));
}

#[test]
fn empty_text_yields_empty_content() {
    let c = SlideContent::from_raw_text(3, "   ");
    assert_eq!(c.slide_number, 3);
    assert!(c.headline.is_none());
    assert!(c.body.is_none());
}
