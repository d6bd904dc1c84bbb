use rationl_core::ByteRange;

use super::closure::{contains_match, epsilon_closure, reclose, step};
use super::*;

/// `^a$` plus an epsilon cycle between two splits in front of it.
struct Anchored {
    nfa: Nfa,
    accept: StateId,
    end: StateId,
    on_a: StateId,
    start_look: StateId,
}

fn anchored() -> Anchored {
    let mut b = NfaBuilder::new(16);
    let accept = b.add_match().unwrap();
    let end = b.add_look(Look::End, accept).unwrap();
    let on_a = b
        .add_bytes(vec![Transition::new(ByteRange::single(b'a'), end)])
        .unwrap();
    let start_look = b.add_look(Look::Start, on_a).unwrap();
    let loop_a = b.add_empty().unwrap();
    let loop_b = b.add_empty().unwrap();
    b.add_epsilon(loop_a, loop_b);
    b.add_epsilon(loop_b, loop_a);
    b.add_epsilon(loop_b, start_look);
    Anchored {
        nfa: b.build(loop_a),
        accept,
        end,
        on_a,
        start_look,
    }
}

fn close(nfa: &Nfa, seed: StateId, boundary: Boundary) -> StateSet {
    let mut set = SparseSet::new(nfa.len());
    let mut stack = Vec::new();
    epsilon_closure(nfa, seed, boundary, &mut set, &mut stack);
    StateSet::from_sparse(&set)
}

#[test]
fn closure_survives_epsilon_cycles() {
    let a = anchored();
    let set = close(&a.nfa, a.nfa.start(), Boundary::INTERIOR);

    assert_eq!(set.len(), 3);
    assert!(set.as_slice().contains(&a.start_look));
    assert!(!set.as_slice().contains(&a.on_a));
}

#[test]
fn start_look_needs_input_start() {
    let a = anchored();
    let set = close(&a.nfa, a.nfa.start(), Boundary::start(true));

    assert!(set.as_slice().contains(&a.on_a));
}

#[test]
fn state_sets_are_sorted() {
    let a = anchored();
    let set = close(&a.nfa, a.nfa.start(), Boundary::start(true));
    let ids = set.as_slice();

    assert!(ids.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn step_then_end_reaches_match() {
    let a = anchored();
    let mut next = SparseSet::new(a.nfa.len());
    let mut stack = Vec::new();
    step(
        &a.nfa,
        &[a.on_a],
        b'a',
        Boundary::INTERIOR,
        &mut next,
        &mut stack,
    );

    assert_eq!(next.as_slice(), &[a.end]);
    assert!(!contains_match(&a.nfa, next.as_slice()));

    let mut at_eof = SparseSet::new(a.nfa.len());
    reclose(
        &a.nfa,
        next.as_slice(),
        Boundary::INTERIOR.with_end(),
        &mut at_eof,
        &mut stack,
    );
    assert!(at_eof.contains(a.accept));
    assert!(contains_match(&a.nfa, at_eof.as_slice()));
}

#[test]
fn step_on_other_byte_is_empty() {
    let a = anchored();
    let mut next = SparseSet::new(a.nfa.len());
    step(
        &a.nfa,
        &[a.on_a],
        b'b',
        Boundary::INTERIOR,
        &mut next,
        &mut Vec::new(),
    );

    assert!(next.is_empty());
}

#[test]
fn sparse_set_clear_and_reuse() {
    let mut set = SparseSet::new(4);
    assert!(set.insert(StateId::new(3)));
    assert!(!set.insert(StateId::new(3)));
    assert!(set.insert(StateId::new(1)));
    assert_eq!(set.as_slice(), &[StateId::new(3), StateId::new(1)]);

    set.clear();
    assert!(set.is_empty());
    assert!(!set.contains(StateId::new(3)));
    assert!(!set.contains(StateId::new(9)));
}
