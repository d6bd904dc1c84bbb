use rationl_lib::{Colors, compile};

use super::find::{render_json, render_plain};

fn plain(pattern: &str, text: &str, colors: Colors) -> String {
    let automaton = compile(pattern).unwrap();
    automaton
        .find_matches(text)
        .map(|m| render_plain(&m, colors))
        .collect::<Vec<_>>()
        .join("\n")
}

fn json(pattern: &str, text: &str) -> String {
    let automaton = compile(pattern).unwrap();
    automaton
        .find_matches(text)
        .map(|m| render_json(&m).unwrap())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn plain_lines() {
    insta::assert_snapshot!(plain("[a-z]+", "ab 12 cde", Colors::OFF), @r"
    0..2 ab
    6..9 cde
    ");
}

#[test]
fn plain_lines_colored() {
    let out = plain("[0-9]+", "x42", Colors::ON);
    assert_eq!(out, "\x1b[34m1..3\x1b[0m 42");
}

#[test]
fn plain_lines_without_matches() {
    assert_eq!(plain("z", "abc", Colors::OFF), "");
}

#[test]
fn json_records() {
    insta::assert_snapshot!(json("[0-9]+|\"[a-z]*\"", r#"id 7 is "ok""#), @r#"
    {"start":3,"end":4,"text":"7"}
    {"start":8,"end":12,"text":"\"ok\""}
    "#);
}

#[test]
fn json_offsets_are_bytes() {
    insta::assert_snapshot!(json("é+", "aéé"), @r#"{"start":1,"end":5,"text":"éé"}"#);
}
