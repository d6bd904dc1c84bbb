use rationl_core::{ByteClassSet, ByteRange};

use super::*;

const ACCEPT: StateFlags = StateFlags {
    accept: true,
    accept_at_eof: true,
};

/// `a+` built by hand.
fn a_plus() -> Dfa {
    let mut classes = ByteClassSet::new();
    classes.set_range(ByteRange::single(b'a'));
    let mut b = DfaBuilder::new(classes.byte_classes());
    let start = b.add_state(StateFlags::REJECT);
    let seen_a = b.add_state(ACCEPT);
    let class_a = usize::from(b.classes().get(b'a'));
    b.set_transition(start, class_a, seen_a);
    b.set_transition(seen_a, class_a, seen_a);
    b.build(start, start)
}

#[test]
fn dead_state_is_allocated_first() {
    let dfa = DfaBuilder::new(ByteClassSet::new().byte_classes()).build(DEAD, DEAD);

    assert_eq!(dfa.state_count(), 1);
    assert_eq!(dfa.alphabet_len(), 1);
    assert_eq!(dfa.next_state(DEAD, b'x'), DEAD);
    assert!(!dfa.flags(DEAD).can_accept());
}

#[test]
fn transitions_follow_classes() {
    let dfa = a_plus();
    let start = dfa.start(true);

    let after = dfa.next_state(start, b'a');
    assert!(dfa.is_accepting(after));
    assert_eq!(dfa.next_state(after, b'a'), after);
    assert_eq!(dfa.next_state(after, b'b'), DEAD);
    assert_eq!(dfa.next_state(start, b'A'), DEAD);
    assert_eq!(dfa.row(start).len(), 3);
}

#[test]
fn debug_lists_rows() {
    insta::assert_snapshot!(format!("{:?}", a_plus()), @r"
    start: S1 / S1
    S1: a => S2;
    S2*: a => S2;
    ");
}

#[test]
fn flags_distinguish_eof_only_acceptance() {
    let flags = StateFlags {
        accept: false,
        accept_at_eof: true,
    };

    assert!(flags.can_accept());
    assert!(!StateFlags::REJECT.can_accept());
}
