//! Direct simulation of a Thompson NFA.
//!
//! Tracks the full set of live NFA states, so no automaton is built up
//! front and memory stays linear in the NFA. Each byte costs time
//! proportional to the number of live states.

use rationl_automata::closure::{contains_match, epsilon_closure, reclose, step};
use rationl_automata::{Boundary, DEAD, Nfa, SparseSet, StateId};

use super::cursor::Cursor;
use super::trace::Tracer;

/// Reusable state sets for [`NfaCursor`].
///
/// Kept outside the cursor so an iterator can run many short searches
/// without reallocating.
#[derive(Debug)]
pub struct NfaScratch {
    current: SparseSet,
    next: SparseSet,
    eof: SparseSet,
    stack: Vec<StateId>,
}

impl NfaScratch {
    pub fn new(nfa: &Nfa) -> Self {
        Self {
            current: SparseSet::new(nfa.len()),
            next: SparseSet::new(nfa.len()),
            eof: SparseSet::new(nfa.len()),
            stack: Vec::new(),
        }
    }
}

pub struct NfaCursor<'a> {
    nfa: &'a Nfa,
    scratch: &'a mut NfaScratch,
    boundary: Boundary,
}

impl<'a> NfaCursor<'a> {
    pub fn new(nfa: &'a Nfa, scratch: &'a mut NfaScratch) -> Self {
        debug_assert_eq!(scratch.current.capacity(), nfa.len());
        let mut cursor = Self {
            nfa,
            scratch,
            boundary: Boundary::start(true),
        };
        cursor.close_start();
        cursor
    }

    fn close_start(&mut self) {
        let s = &mut *self.scratch;
        s.current.clear();
        epsilon_closure(
            self.nfa,
            self.nfa.start(),
            self.boundary,
            &mut s.current,
            &mut s.stack,
        );
    }
}

impl Cursor for NfaCursor<'_> {
    fn reset<T: Tracer>(&mut self, at_input_start: bool, _tracer: &mut T) {
        self.boundary = Boundary::start(at_input_start);
        self.close_start();
    }

    fn advance<T: Tracer>(&mut self, byte: u8, _tracer: &mut T) {
        let s = &mut *self.scratch;
        s.next.clear();
        step(
            self.nfa,
            s.current.as_slice(),
            byte,
            Boundary::INTERIOR,
            &mut s.next,
            &mut s.stack,
        );
        std::mem::swap(&mut s.current, &mut s.next);
        self.boundary = Boundary::INTERIOR;
    }

    fn is_dead(&self) -> bool {
        self.scratch.current.is_empty()
    }

    fn is_accepting(&self) -> bool {
        contains_match(self.nfa, self.scratch.current.as_slice())
    }

    fn is_accepting_at_eof(&mut self) -> bool {
        let s = &mut *self.scratch;
        s.eof.clear();
        reclose(
            self.nfa,
            s.current.as_slice(),
            self.boundary.with_end(),
            &mut s.eof,
            &mut s.stack,
        );
        contains_match(self.nfa, s.eof.as_slice())
    }

    /// The lowest live NFA state, or `DEAD` once no state is live.
    fn state_id(&self) -> StateId {
        self.scratch.current.iter().min().unwrap_or(DEAD)
    }
}
