use rationl_automata::{DEAD, TooManyStates};

use super::{CompileOptions, compile_dfa, determinize};
use crate::ErrorKind;
use crate::test_utils::{dfa, dfa_accepts, nfa, nfa_accepts, strings};

#[test]
fn subset_states_for_a_literal() {
    let dfa = determinize(&nfa("ab"), 100).unwrap();

    insta::assert_snapshot!(format!("{dfa:?}"), @r"
    start: S1 / S2
    S1: a => S3;
    S2: a => S3;
    S3: b => S4;
    S4*:
    ");
}

#[test]
fn state_limit_counts_the_dead_state() {
    let result = determinize(&nfa("ab"), 3);

    assert_eq!(result.unwrap_err(), TooManyStates { limit: 3 });
}

#[test]
fn end_anchor_accepts_only_at_eof() {
    let dfa = determinize(&nfa("a$"), 100).unwrap();
    let after_a = dfa.next_state(dfa.start(true), b'a');

    assert!(!dfa.is_accepting(after_a));
    assert!(dfa.is_accepting_at_eof(after_a));
}

#[test]
fn start_anchor_only_holds_at_offset_zero() {
    let dfa = dfa("^a");

    assert_ne!(dfa.start(true), DEAD);
    assert_eq!(dfa.start(false), DEAD);
}

#[test]
fn byte_classes_compress_rows() {
    let dfa = dfa("[a-z]+");

    assert_eq!(dfa.alphabet_len(), 3);
    assert!(dfa_accepts(&dfa, "hello"));
    assert!(!dfa_accepts(&dfa, "Hello"));
}

#[test]
fn dfa_agrees_with_nfa() {
    let patterns = [
        "",
        "a*",
        "a+",
        "(a|b)*c",
        "a(b|c)*a",
        "(ab|a)(bc|c)",
        "[^a]?c{1,2}",
        "^(a|b)*$",
        "((a|b)c?)+",
        "a{2,}b{0,2}",
        "(a*)*b",
    ];
    for pattern in patterns {
        let nfa = nfa(pattern);
        let dfa = dfa(pattern);
        for s in strings(&['a', 'b', 'c'], 6) {
            assert_eq!(
                dfa_accepts(&dfa, &s),
                nfa_accepts(&nfa, &s),
                "pattern {pattern:?} on {s:?}"
            );
        }
    }
}

#[test]
fn boundary_languages() {
    let empty = dfa("");
    assert!(dfa_accepts(&empty, ""));
    assert!(!dfa_accepts(&empty, "a"));

    let star = dfa("a*");
    assert!(dfa_accepts(&star, ""));
    assert!(dfa_accepts(&star, "aaaa"));
    assert!(!dfa_accepts(&star, "ab"));

    let plus = dfa("a+");
    assert!(!dfa_accepts(&plus, ""));
    assert!(dfa_accepts(&plus, "a"));
}

#[test]
fn exponential_blowup_hits_the_ceiling() {
    let e = compile_dfa("[ab]*a[ab]{20}", &CompileOptions::default()).unwrap_err();

    assert_eq!(e.kind, ErrorKind::AutomatonTooLarge);
    assert_eq!(e.position, 0);
    assert_eq!(e.message(), "DFA needs more than 10000 states");
}
