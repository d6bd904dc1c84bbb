use rationl_automata::DEAD;

use super::search::is_match;
use super::{Cursor, NfaCursor, NfaScratch, NoopTracer};
use crate::test_utils::nfa;

#[test]
fn dies_when_no_state_is_live() {
    let nfa = nfa("ab");
    let mut scratch = NfaScratch::new(&nfa);
    let mut cursor = NfaCursor::new(&nfa, &mut scratch);

    assert!(!cursor.is_dead());
    cursor.advance(b'b', &mut NoopTracer);
    assert!(cursor.is_dead());
    assert_eq!(cursor.state_id(), DEAD);
}

#[test]
fn end_anchor_is_checked_at_eof_only() {
    let nfa = nfa("a$");
    let mut scratch = NfaScratch::new(&nfa);
    let mut cursor = NfaCursor::new(&nfa, &mut scratch);

    cursor.advance(b'a', &mut NoopTracer);
    assert!(!cursor.is_accepting());
    assert!(cursor.is_accepting_at_eof());
}

#[test]
fn start_anchor_follows_the_reset_offset() {
    let nfa = nfa("^$");
    let mut scratch = NfaScratch::new(&nfa);
    let mut cursor = NfaCursor::new(&nfa, &mut scratch);

    assert!(cursor.is_accepting_at_eof());
    cursor.reset(false, &mut NoopTracer);
    assert!(!cursor.is_accepting_at_eof());
}

#[test]
fn scratch_is_reused_across_searches() {
    let nfa = nfa("(a|b)*c");
    let mut scratch = NfaScratch::new(&nfa);
    let mut cursor = NfaCursor::new(&nfa, &mut scratch);

    assert!(is_match(&mut cursor, b"ababc", &mut NoopTracer));
    assert!(!is_match(&mut cursor, b"abab", &mut NoopTracer));
    assert!(is_match(&mut cursor, b"c", &mut NoopTracer));
}

#[test]
fn pathological_pattern_stays_linear() {
    let n = 30;
    let pattern = format!("{}{}", "a?".repeat(n), "a".repeat(n));
    let nfa = nfa(&pattern);
    let mut scratch = NfaScratch::new(&nfa);
    let mut cursor = NfaCursor::new(&nfa, &mut scratch);

    assert!(is_match(&mut cursor, "a".repeat(n).as_bytes(), &mut NoopTracer));
    assert!(is_match(&mut cursor, "a".repeat(2 * n).as_bytes(), &mut NoopTracer));
    assert!(!is_match(&mut cursor, "a".repeat(2 * n + 1).as_bytes(), &mut NoopTracer));
}
