//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use serde::Serialize;
use smallvec::SmallVec;

use crate::{NfaBuilder, State, StateId};

impl NfaBuilder {
    pub(crate) fn ensure_split(&mut self, id: StateId) -> &mut SmallVec<[StateId; 2]> {
        match self.states.get_mut(id.as_usize()) {
            Some(State::Split { targets }) => targets,
            other => panic!("NfaBuilder: epsilon source {id} is {other:?}, not a split state"),
        }
    }
}

/// Encoding a DFA into a `Vec` has no failure mode.
pub(crate) fn encode_payload<T: Serialize>(value: &T) -> Vec<u8> {
    match postcard::to_allocvec(value) {
        Ok(bytes) => bytes,
        Err(e) => panic!("broken automaton invariant: DFA payload failed to encode: {e}"),
    }
}
