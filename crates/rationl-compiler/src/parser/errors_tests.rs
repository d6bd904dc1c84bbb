use crate::ErrorKind;
use crate::parser::Parser;
use crate::test_utils::{error_line, parse_error, rendered};

#[test]
fn unclosed_group_points_past_the_end() {
    insta::assert_snapshot!(error_line("("), @"UnbalancedGroup at 1: missing closing `)`");

    let e = parse_error("(ab");
    let related = e.related().unwrap();
    assert_eq!(related.message, "group opened here");
    assert_eq!(usize::from(related.range.start()), 0);
}

#[test]
fn stray_close_paren() {
    insta::assert_snapshot!(error_line(")"), @"UnbalancedGroup at 0: unmatched `)`");
    insta::assert_snapshot!(error_line("a)b"), @"UnbalancedGroup at 1: unmatched `)`");
}

#[test]
fn leading_quantifier() {
    insta::assert_snapshot!(error_line("*a"), @"DanglingOperator at 0: repetition operator has nothing to repeat");
    insta::assert_snapshot!(error_line("a|*"), @"DanglingOperator at 2: repetition operator has nothing to repeat");
    insta::assert_snapshot!(error_line("(+)"), @"DanglingOperator at 1: repetition operator has nothing to repeat");
    insta::assert_snapshot!(error_line("{2}"), @"DanglingOperator at 0: repetition operator has nothing to repeat");
}

#[test]
fn stacked_quantifiers_are_rejected() {
    insta::assert_snapshot!(error_line("a**"), @"DanglingOperator at 2: quantifier cannot follow another quantifier");
    insta::assert_snapshot!(error_line("a+?"), @"DanglingOperator at 2: quantifier cannot follow another quantifier");
    insta::assert_snapshot!(error_line("a{2}*"), @"DanglingOperator at 4: quantifier cannot follow another quantifier");
    insta::assert_snapshot!(error_line("a?{1,2}"), @"DanglingOperator at 2: quantifier cannot follow another quantifier");
}

#[test]
fn repetition_bounds() {
    insta::assert_snapshot!(error_line("a{3,2}"), @"InvalidRepetitionBounds at 1: repetition lower bound 3 exceeds upper bound 2");
    insta::assert_snapshot!(error_line("a{99999999999}"), @"InvalidRepetitionBounds at 1: repetition bound in `{99999999999}` does not fit in 32 bits");
}

#[test]
fn invalid_escapes() {
    insta::assert_snapshot!(error_line(r"\q"), @r"InvalidEscape at 0: invalid escape `\q`");
    insta::assert_snapshot!(error_line(r"\x4"), @r"InvalidEscape at 0: invalid escape `\x4`");
    insta::assert_snapshot!(error_line(r"ab\"), @r"InvalidEscape at 2: pattern ends with a lone `\`");
}

#[test]
fn unterminated_class() {
    insta::assert_snapshot!(error_line("[abc"), @"UnterminatedClass at 4: missing closing `]`");
    insta::assert_snapshot!(error_line(r"x[a\]"), @"UnterminatedClass at 5: missing closing `]`");

    let e = parse_error("x[abc");
    assert_eq!(e.related().unwrap().message, "class opened here");
    assert_eq!(usize::from(e.related().unwrap().range.start()), 1);
}

#[test]
fn class_ranges() {
    insta::assert_snapshot!(error_line("[z-a]"), @"InvalidClassRange at 1: class range `z-a` is out of order");
    insta::assert_snapshot!(error_line(r"[\d-z]"), @"InvalidClassRange at 1: a shorthand class cannot be a range endpoint");
    insta::assert_snapshot!(error_line(r"[a-\w]"), @"InvalidClassRange at 3: a shorthand class cannot be a range endpoint");
    insta::assert_snapshot!(error_line(r"[\q]"), @r"InvalidEscape at 1: invalid escape `\q` in class");
}

#[test]
fn nesting_limit() {
    let e = Parser::new("((a))").with_nesting_limit(1).parse().unwrap_err();

    assert_eq!(e.kind, ErrorKind::NestingTooDeep);
    assert_eq!(e.position, 1);
    assert!(e.kind.is_resource_limit());

    let deep = format!("{}a{}", "(".repeat(257), ")".repeat(257));
    let e = parse_error(&deep);
    assert_eq!(e.kind, ErrorKind::NestingTooDeep);
    assert_eq!(e.position, 256);
}

#[test]
fn rendered_report() {
    let out = rendered("a(b");

    assert!(out.starts_with("error: missing closing `)`"));
    assert!(out.contains("a(b"));
    assert!(out.contains("group opened here"));
}

#[test]
fn display_includes_position() {
    let e = parse_error("ab)");

    insta::assert_snapshot!(e.to_string(), @"unmatched `)` at position 2");
}
