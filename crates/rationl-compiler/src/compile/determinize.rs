//! Subset construction.
//!
//! A DFA state is an epsilon-closed set of NFA states together with whether
//! the closure was taken at the start of input (where `^` holds). States are
//! interned in an `IndexMap`, whose insertion order doubles as the worklist:
//! index `i` is DFA state `i + 1`, because state 0 is `DEAD`.

use indexmap::IndexMap;
use indexmap::map::Entry;
use rationl_automata::closure::{contains_match, epsilon_closure, reclose, step};
use rationl_automata::{
    Boundary, DEAD, Dfa, DfaBuilder, Nfa, SparseSet, StateFlags, StateId, StateSet, TooManyStates,
};

struct Determinizer<'a> {
    nfa: &'a Nfa,
    builder: DfaBuilder,
    states: IndexMap<(StateSet, bool), StateId>,
    scratch: SparseSet,
    eof: SparseSet,
    stack: Vec<StateId>,
    limit: usize,
}

/// Builds a DFA with at most `limit` states (the dead state included).
pub fn determinize(nfa: &Nfa, limit: usize) -> Result<Dfa, TooManyStates> {
    let mut d = Determinizer {
        nfa,
        builder: DfaBuilder::new(nfa.byte_classes()),
        states: IndexMap::new(),
        scratch: SparseSet::new(nfa.len()),
        eof: SparseSet::new(nfa.len()),
        stack: Vec::new(),
        limit,
    };

    let start_at_input = d.start(true)?;
    let start_in_text = d.start(false)?;

    let representatives: Vec<u8> = d.builder.classes().representatives().collect();
    let mut next = 0;
    while let Some(((set, _), &id)) = d.states.get_index(next) {
        let set = set.clone();
        next += 1;
        for (class, &byte) in representatives.iter().enumerate() {
            d.scratch.clear();
            step(
                nfa,
                set.as_slice(),
                byte,
                Boundary::INTERIOR,
                &mut d.scratch,
                &mut d.stack,
            );
            let to = d.intern(false)?;
            d.builder.set_transition(id, class, to);
        }
    }

    Ok(d.builder.build(start_at_input, start_in_text))
}

impl Determinizer<'_> {
    fn start(&mut self, at_input_start: bool) -> Result<StateId, TooManyStates> {
        self.scratch.clear();
        epsilon_closure(
            self.nfa,
            self.nfa.start(),
            Boundary::start(at_input_start),
            &mut self.scratch,
            &mut self.stack,
        );
        self.intern(at_input_start)
    }

    /// The DFA state for the closure currently in `scratch`.
    fn intern(&mut self, at_input_start: bool) -> Result<StateId, TooManyStates> {
        if self.scratch.is_empty() {
            return Ok(DEAD);
        }
        let set = StateSet::from_sparse(&self.scratch);
        let Self {
            nfa,
            builder,
            states,
            eof,
            stack,
            limit,
            ..
        } = self;

        match states.entry((set, at_input_start)) {
            Entry::Occupied(e) => Ok(*e.get()),
            Entry::Vacant(e) => {
                if builder.state_count() >= *limit {
                    return Err(TooManyStates { limit: *limit });
                }
                let members = e.key().0.as_slice();
                eof.clear();
                reclose(
                    nfa,
                    members,
                    Boundary::start(at_input_start).with_end(),
                    eof,
                    stack,
                );
                let flags = StateFlags {
                    accept: contains_match(nfa, members),
                    accept_at_eof: contains_match(nfa, eof.as_slice()),
                };
                Ok(*e.insert(builder.add_state(flags)))
            }
        }
    }
}
