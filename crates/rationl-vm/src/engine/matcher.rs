//! Engine selection and the match iterator.

use rationl_automata::{Dfa, Nfa};
use rationl_core::Span;

use super::cursor::DfaCursor;
use super::lazy::LazyDfa;
use super::nfa_sim::{NfaCursor, NfaScratch};
use super::search;
use super::trace::Tracer;

/// A compiled automaton together with the engine that runs it.
#[derive(Debug)]
pub enum Matcher {
    /// Fully determinized table.
    Dfa(Dfa),
    /// DFA states built on first use.
    Lazy(LazyDfa),
    /// Thompson simulation, no determinization at all.
    Nfa(Nfa),
}

impl Matcher {
    pub fn is_match<T: Tracer>(&self, input: &[u8], tracer: &mut T) -> bool {
        match self {
            Matcher::Dfa(dfa) => search::is_match(&mut DfaCursor::new(dfa), input, tracer),
            Matcher::Lazy(lazy) => search::is_match(&mut lazy.cursor(), input, tracer),
            Matcher::Nfa(nfa) => {
                let mut scratch = NfaScratch::new(nfa);
                search::is_match(&mut NfaCursor::new(nfa, &mut scratch), input, tracer)
            }
        }
    }

    /// Iterates over non-overlapping, non-empty leftmost-longest matches.
    pub fn find_iter<'m, 't, T: Tracer>(
        &'m self,
        input: &'t [u8],
        tracer: T,
    ) -> FindIter<'m, 't, T> {
        FindIter {
            matcher: self,
            input,
            pos: 0,
            scratch: None,
            tracer,
        }
    }

    /// States the engine holds right now: the table size for an eager DFA,
    /// the cached states for a lazy one, the NFA size for simulation.
    pub fn state_count(&self) -> usize {
        match self {
            Matcher::Dfa(dfa) => dfa.state_count(),
            Matcher::Lazy(lazy) => lazy.cached_states(),
            Matcher::Nfa(nfa) => nfa.len(),
        }
    }
}

/// Iterator over the matches of one input.
///
/// A lazy DFA's cache stays locked only while `next` runs.
pub struct FindIter<'m, 't, T> {
    matcher: &'m Matcher,
    input: &'t [u8],
    pos: usize,
    scratch: Option<NfaScratch>,
    tracer: T,
}

impl<T: Tracer> Iterator for FindIter<'_, '_, T> {
    type Item = Span;

    fn next(&mut self) -> Option<Span> {
        let Self {
            matcher,
            input,
            pos,
            scratch,
            tracer,
        } = self;

        let (input, from) = (*input, *pos);
        let span = match *matcher {
            Matcher::Dfa(dfa) => search::find_at(&mut DfaCursor::new(dfa), input, from, tracer),
            Matcher::Lazy(lazy) => search::find_at(&mut lazy.cursor(), input, from, tracer),
            Matcher::Nfa(nfa) => {
                let scratch = scratch.get_or_insert_with(|| NfaScratch::new(nfa));
                search::find_at(&mut NfaCursor::new(nfa, scratch), input, from, tracer)
            }
        };

        *pos = span.map_or(input.len(), |span| span.end);
        span
    }
}
