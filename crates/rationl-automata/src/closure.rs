//! Epsilon closures and byte steps over sets of NFA states.
//!
//! Shared by eager subset construction, the lazy DFA and direct NFA
//! simulation, so all three agree on which states a position reaches.

use crate::{Look, Nfa, SparseSet, State, StateId};

/// Input boundaries that hold where a closure is taken.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Boundary {
    pub at_start: bool,
    pub at_end: bool,
}

impl Boundary {
    /// Somewhere strictly inside the input.
    pub const INTERIOR: Self = Self {
        at_start: false,
        at_end: false,
    };

    pub fn start(at_start: bool) -> Self {
        Self {
            at_start,
            at_end: false,
        }
    }

    pub fn with_end(self) -> Self {
        Self {
            at_end: true,
            ..self
        }
    }

    #[inline]
    pub fn holds(self, look: Look) -> bool {
        match look {
            Look::Start => self.at_start,
            Look::End => self.at_end,
        }
    }
}

/// Sorted, duplicate-free NFA state set. Two closures denote the same DFA
/// state exactly when their `StateSet`s are equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateSet(Box<[StateId]>);

impl StateSet {
    pub fn from_sparse(set: &SparseSet) -> Self {
        let mut ids = set.as_slice().to_vec();
        ids.sort_unstable();
        Self(ids.into_boxed_slice())
    }

    pub fn as_slice(&self) -> &[StateId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Adds `seed` and every state reachable from it through epsilon edges whose
/// condition holds at `boundary`.
pub fn epsilon_closure(
    nfa: &Nfa,
    seed: StateId,
    boundary: Boundary,
    set: &mut SparseSet,
    stack: &mut Vec<StateId>,
) {
    stack.push(seed);
    while let Some(id) = stack.pop() {
        if !set.insert(id) {
            continue;
        }
        match nfa.state(id) {
            // Reversed so the first target is explored first.
            State::Split { targets } => stack.extend(targets.iter().rev().copied()),
            State::Look { look, next } if boundary.holds(*look) => stack.push(*next),
            _ => {}
        }
    }
}

/// Closes every state of `from` again under a different boundary.
pub fn reclose(
    nfa: &Nfa,
    from: &[StateId],
    boundary: Boundary,
    set: &mut SparseSet,
    stack: &mut Vec<StateId>,
) {
    for &id in from {
        epsilon_closure(nfa, id, boundary, set, stack);
    }
}

/// Follows every byte transition of `from` that accepts `byte`, closing each
/// target under `boundary`.
pub fn step(
    nfa: &Nfa,
    from: &[StateId],
    byte: u8,
    boundary: Boundary,
    into: &mut SparseSet,
    stack: &mut Vec<StateId>,
) {
    for &id in from {
        let State::Bytes { transitions } = nfa.state(id) else {
            continue;
        };
        for t in transitions {
            if t.range.contains(byte) {
                epsilon_closure(nfa, t.next, boundary, into, stack);
            }
        }
    }
}

pub fn contains_match(nfa: &Nfa, states: &[StateId]) -> bool {
    states.iter().any(|&id| nfa.is_match_state(id))
}
