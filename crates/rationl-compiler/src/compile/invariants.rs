//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use rationl_automata::{NfaBuilder, State, StateId};

use crate::parser::Node;

/// The task loop always leaves the root's fragment behind.
pub(super) fn root_fragment<T>(fragment: Option<T>) -> T {
    match fragment {
        Some(fragment) => fragment,
        None => panic!("broken compiler invariant: root fragment was never built"),
    }
}

/// Only concatenation, alternation and repetition schedule a finish step.
pub(super) fn no_finish_step(node: &Node) -> ! {
    panic!("broken compiler invariant: no finish step for {node:?}")
}

/// The pruned builder is sized to hold exactly the kept states.
pub(super) fn push_kept(builder: &mut NfaBuilder, state: State) -> StateId {
    match builder.push(state) {
        Ok(id) => id,
        Err(e) => panic!(
            "broken compiler invariant: pruned NFA outgrew its {} kept states",
            e.limit
        ),
    }
}
