//! One running automaton, advanced a byte at a time.

use rationl_automata::{DEAD, Dfa, StateId};

use super::trace::Tracer;

/// A position inside one automaton.
///
/// The search loop never looks at engine internals: it resets the cursor at
/// a start offset, feeds bytes and asks whether the current position
/// accepts. `is_accepting` answers for a position with input remaining,
/// `is_accepting_at_eof` for a position at the end of the input, where `$`
/// also holds.
pub trait Cursor {
    fn reset<T: Tracer>(&mut self, at_input_start: bool, tracer: &mut T);

    fn advance<T: Tracer>(&mut self, byte: u8, tracer: &mut T);

    /// No continuation of the input can lead to acceptance.
    fn is_dead(&self) -> bool;

    fn is_accepting(&self) -> bool;

    fn is_accepting_at_eof(&mut self) -> bool;

    /// Identifies the current position for tracing.
    fn state_id(&self) -> StateId;
}

/// Cursor over an eagerly built DFA table.
pub struct DfaCursor<'a> {
    dfa: &'a Dfa,
    state: StateId,
}

impl<'a> DfaCursor<'a> {
    pub fn new(dfa: &'a Dfa) -> Self {
        Self {
            dfa,
            state: dfa.start(true),
        }
    }
}

impl Cursor for DfaCursor<'_> {
    #[inline]
    fn reset<T: Tracer>(&mut self, at_input_start: bool, _tracer: &mut T) {
        self.state = self.dfa.start(at_input_start);
    }

    #[inline]
    fn advance<T: Tracer>(&mut self, byte: u8, _tracer: &mut T) {
        self.state = self.dfa.next_state(self.state, byte);
    }

    #[inline]
    fn is_dead(&self) -> bool {
        self.state == DEAD
    }

    #[inline]
    fn is_accepting(&self) -> bool {
        self.dfa.is_accepting(self.state)
    }

    #[inline]
    fn is_accepting_at_eof(&mut self) -> bool {
        self.dfa.is_accepting_at_eof(self.state)
    }

    fn state_id(&self) -> StateId {
        self.state
    }
}
