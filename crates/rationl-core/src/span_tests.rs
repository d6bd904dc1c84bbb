use super::*;

#[test]
fn display_is_half_open() {
    insta::assert_snapshot!(Span::new(2, 8).to_string(), @"[2, 8)");
}

#[test]
fn length_and_emptiness() {
    let span = Span::new(3, 7);
    assert_eq!(span.len(), 4);
    assert!(!span.is_empty());
    assert!(Span::new(5, 5).is_empty());
    assert_eq!(std::ops::Range::from(span), 3..7);
}

#[test]
fn serializes_as_object() {
    let json = serde_json::to_string(&Span::new(0, 4)).unwrap();
    assert_eq!(json, r#"{"start":0,"end":4}"#);
}
