use std::ops::Range;

use super::lexer::{TokenKind, lex, repetition_len};

fn tokens(source: &str) -> Vec<(TokenKind, Range<usize>)> {
    lex(source)
        .into_iter()
        .map(|t| (t.kind, t.span.into()))
        .collect()
}

#[test]
fn operators() {
    use TokenKind::*;

    assert_eq!(
        tokens("(?:a|b)*+?^$."),
        vec![
            (GroupOpenNonCapturing, 0..3),
            (Literal, 3..4),
            (Pipe, 4..5),
            (Literal, 5..6),
            (ParenClose, 6..7),
            (Star, 7..8),
            (Plus, 8..9),
            (Question, 9..10),
            (Caret, 10..11),
            (Dollar, 11..12),
            (Dot, 12..13),
        ]
    );
}

#[test]
fn class_is_one_token() {
    assert_eq!(
        tokens(r"[a\]b]c"),
        vec![(TokenKind::Class, 0..6), (TokenKind::Literal, 6..7)]
    );
    assert_eq!(tokens("[]]"), vec![(TokenKind::Class, 0..3)]);
    assert_eq!(tokens("[^]a]"), vec![(TokenKind::Class, 0..5)]);
}

#[test]
fn unterminated_class_runs_to_end() {
    assert_eq!(
        tokens("a[bc"),
        vec![(TokenKind::Literal, 0..1), (TokenKind::UnterminatedClass, 1..4)]
    );
    assert_eq!(tokens("[]"), vec![(TokenKind::UnterminatedClass, 0..2)]);
}

#[test]
fn repetition() {
    assert_eq!(tokens("a{2,3}"), vec![(TokenKind::Literal, 0..1), (TokenKind::Repetition, 1..6)]);
    assert_eq!(tokens("{7}"), vec![(TokenKind::Repetition, 0..3)]);
    assert_eq!(tokens("{1,}"), vec![(TokenKind::Repetition, 0..4)]);
}

#[test]
fn malformed_brace_is_literal() {
    assert_eq!(
        tokens("{a}"),
        vec![
            (TokenKind::Literal, 0..1),
            (TokenKind::Literal, 1..2),
            (TokenKind::Literal, 2..3),
        ]
    );
}

#[test]
fn escapes() {
    assert_eq!(tokens(r"\x41"), vec![(TokenKind::Escape, 0..4)]);
    assert_eq!(tokens(r"\x4g"), vec![(TokenKind::Escape, 0..3), (TokenKind::Literal, 3..4)]);
    assert_eq!(tokens(r"\*a"), vec![(TokenKind::Escape, 0..2), (TokenKind::Literal, 2..3)]);
    assert_eq!(tokens("\\"), vec![(TokenKind::Escape, 0..1)]);
    assert_eq!(tokens("\\é"), vec![(TokenKind::Escape, 0..3)]);
}

#[test]
fn multibyte_literal() {
    assert_eq!(tokens("é"), vec![(TokenKind::Literal, 0..2)]);
    assert_eq!(tokens("\n"), vec![(TokenKind::Literal, 0..1)]);
}

#[test]
fn repetition_shape() {
    assert_eq!(repetition_len("3}"), Some(2));
    assert_eq!(repetition_len("3,}x"), Some(3));
    assert_eq!(repetition_len("10,20}"), Some(6));
    assert_eq!(repetition_len(",3}"), None);
    assert_eq!(repetition_len("3,4"), None);
    assert_eq!(repetition_len(""), None);
}
