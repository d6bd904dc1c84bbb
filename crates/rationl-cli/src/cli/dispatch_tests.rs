//! Tests for CLI dispatch logic.
//!
//! These tests verify that commands accept the flags they document and
//! that params are extracted and resolved correctly.

use std::path::PathBuf;

use rationl_lib::{Strategy, Verbosity};

use super::*;
use crate::cli::commands::{ast_command, check_command, find_command, match_command, trace_command};
use crate::commands::trace::TraceArgs;

#[test]
fn cli_is_well_formed() {
    build_cli().debug_assert();
}

#[test]
fn check_requires_pattern() {
    let result = check_command().try_get_matches_from(["check"]);
    assert!(result.is_err());
}

#[test]
fn check_extracts_pattern() {
    let m = check_command()
        .try_get_matches_from(["check", "a(b|c)*", "--color", "never"])
        .unwrap();
    let params = CheckParams::from_matches(&m);

    assert_eq!(params.pattern, "a(b|c)*");
    assert_eq!(params.color, ColorChoice::Never);
}

#[test]
fn ast_defaults_to_auto_color() {
    let m = ast_command().try_get_matches_from(["ast", "ab"]).unwrap();
    let params = AstParams::from_matches(&m);

    assert_eq!(params.pattern, "ab");
    assert_eq!(params.color, ColorChoice::Auto);
}

#[test]
fn match_takes_file_positional() {
    let m = match_command()
        .try_get_matches_from(["match", "[0-9]+", "input.txt"])
        .unwrap();
    let params = MatchParams::from_matches(&m);

    assert_eq!(params.pattern, "[0-9]+");
    assert_eq!(params.input_path, Some(PathBuf::from("input.txt")));
    assert_eq!(params.input_text, None);
    assert_eq!(params.strategy, Strategy::Eager);
    assert_eq!(params.cache_capacity, None);
}

#[test]
fn match_takes_inline_text() {
    let m = match_command()
        .try_get_matches_from(["match", "[0-9]+", "-t", "123"])
        .unwrap();
    let params = MatchParams::from_matches(&m);

    assert_eq!(params.input_path, None);
    assert_eq!(params.input_text.as_deref(), Some("123"));
}

#[test]
fn text_conflicts_with_file() {
    let result = match_command().try_get_matches_from(["match", "a", "input.txt", "--text", "a"]);
    assert!(result.is_err(), "--text and FILE should conflict");
}

#[test]
fn strategy_is_parsed() {
    for (name, strategy) in [
        ("eager", Strategy::Eager),
        ("lazy", Strategy::Lazy),
        ("nfa", Strategy::Nfa),
    ] {
        let m = find_command()
            .try_get_matches_from(["find", "a", "-t", "a", "--strategy", name])
            .unwrap();
        assert_eq!(FindParams::from_matches(&m).strategy, strategy);
    }
}

#[test]
fn unknown_strategy_is_rejected() {
    let result = find_command().try_get_matches_from(["find", "a", "-t", "a", "--strategy", "jit"]);
    assert!(result.is_err());
}

#[test]
fn find_extracts_json_and_cache_capacity() {
    let m = find_command()
        .try_get_matches_from([
            "find",
            "[a-z]+",
            "app.log",
            "--json",
            "--strategy",
            "lazy",
            "--cache-capacity",
            "64",
        ])
        .unwrap();
    let params = FindParams::from_matches(&m);

    assert!(params.json);
    assert_eq!(params.strategy, Strategy::Lazy);
    assert_eq!(params.cache_capacity, Some(64));
}

#[test]
fn cache_capacity_must_be_a_number() {
    let result =
        find_command().try_get_matches_from(["find", "a", "-t", "a", "--cache-capacity", "lots"]);
    assert!(result.is_err());
}

#[test]
fn trace_verbosity_levels() {
    for (flags, expected) in [
        (&[][..], Verbosity::Default),
        (&["-v"][..], Verbosity::Verbose),
        (&["-vv"][..], Verbosity::VeryVerbose),
        (&["-vvv"][..], Verbosity::VeryVerbose),
    ] {
        let argv = ["trace", "ab", "-t", "xab"].iter().chain(flags).copied();
        let m = trace_command().try_get_matches_from(argv).unwrap();
        let args: TraceArgs = TraceParams::from_matches(&m).into();
        assert_eq!(args.verbosity, expected, "flags: {:?}", flags);
    }
}

#[test]
fn trace_whole_flag() {
    let m = trace_command()
        .try_get_matches_from(["trace", "ab", "-t", "ab", "--whole", "--color", "never"])
        .unwrap();
    let args: TraceArgs = TraceParams::from_matches(&m).into();

    assert!(args.whole);
    assert!(!args.color);
}

#[test]
fn match_rejects_trace_flags() {
    let result = match_command().try_get_matches_from(["match", "a", "-t", "a", "-v"]);
    assert!(result.is_err());
}
