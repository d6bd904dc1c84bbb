//! Compiled patterns and their search API.

use std::iter::FusedIterator;

use rationl_automata::{DecodeError, Dfa};
use rationl_core::Span;
use rationl_vm::{FindIter, Matcher, NoopTracer, Tracer};

use crate::{AutomatonBuilder, Strategy};

/// A compiled pattern.
///
/// Immutable once built and safe to share between threads. Text is
/// searched as bytes and every [`Span`] is a byte range; `&str`, `String`
/// and byte slices are all accepted.
#[derive(Debug)]
pub struct Automaton {
    pattern: String,
    strategy: Strategy,
    matcher: Matcher,
}

impl Automaton {
    pub fn builder() -> AutomatonBuilder {
        AutomatonBuilder::new()
    }

    pub(crate) fn new(pattern: &str, strategy: Strategy, matcher: Matcher) -> Self {
        Self {
            pattern: pattern.to_owned(),
            strategy,
            matcher,
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Automaton size: DFA states for the eager strategy, states cached so
    /// far for the lazy one, NFA states for simulation.
    pub fn state_count(&self) -> usize {
        self.matcher.state_count()
    }

    /// Does the whole of `text` belong to the pattern's language?
    pub fn matches<T: AsRef<[u8]> + ?Sized>(&self, text: &T) -> bool {
        self.matcher.is_match(text.as_ref(), &mut NoopTracer)
    }

    pub fn matches_traced<T: AsRef<[u8]> + ?Sized, R: Tracer>(
        &self,
        text: &T,
        tracer: &mut R,
    ) -> bool {
        self.matcher.is_match(text.as_ref(), tracer)
    }

    /// Non-overlapping matches, left to right.
    ///
    /// From each start offset the longest match wins. Empty matches are
    /// never reported: where only the empty string matches, the scan moves
    /// on by one byte.
    pub fn find_all<'a, 't, T: AsRef<[u8]> + ?Sized>(&'a self, text: &'t T) -> FindAll<'a, 't> {
        FindAll(self.matcher.find_iter(text.as_ref(), NoopTracer))
    }

    pub fn find_all_traced<T: AsRef<[u8]> + ?Sized, R: Tracer>(
        &self,
        text: &T,
        tracer: &mut R,
    ) -> Vec<Span> {
        self.matcher.find_iter(text.as_ref(), tracer).collect()
    }

    /// The first match, if any.
    pub fn find<T: AsRef<[u8]> + ?Sized>(&self, text: &T) -> Option<Span> {
        self.find_all(text).next()
    }

    /// Like [`find_all`](Self::find_all), but each match also carries the
    /// matched bytes.
    pub fn find_matches<'a, 't, T: AsRef<[u8]> + ?Sized>(
        &'a self,
        text: &'t T,
    ) -> Matches<'a, 't> {
        let text = text.as_ref();
        Matches {
            text,
            spans: FindAll(self.matcher.find_iter(text, NoopTracer)),
        }
    }

    /// Replaces every match with `replacement`.
    ///
    /// Compiled patterns only match whole UTF-8 sequences. A table restored
    /// with [`from_bytes`](Self::from_bytes) may split one; the affected
    /// bytes come out as U+FFFD.
    pub fn replace_all(&self, text: &str, replacement: &str) -> String {
        let bytes = text.as_bytes();
        let mut out = Vec::with_capacity(bytes.len());
        let mut last = 0;
        for span in self.find_all(text) {
            out.extend_from_slice(&bytes[last..span.start]);
            out.extend_from_slice(replacement.as_bytes());
            last = span.end;
        }
        out.extend_from_slice(&bytes[last..]);

        match String::from_utf8(out) {
            Ok(replaced) => replaced,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        }
    }

    /// Serialized eager DFA; `None` for the lazy and NFA strategies, which
    /// have no finished table to store.
    pub fn to_bytes(&self) -> Option<Vec<u8>> {
        match &self.matcher {
            Matcher::Dfa(dfa) => Some(dfa.to_bytes()),
            Matcher::Lazy(_) | Matcher::Nfa(_) => None,
        }
    }

    /// Restores an automaton written by [`to_bytes`](Self::to_bytes).
    ///
    /// `pattern` is kept for display only; it is not recompiled or checked
    /// against the table.
    pub fn from_bytes(pattern: &str, bytes: &[u8]) -> Result<Self, DecodeError> {
        let dfa = Dfa::from_bytes(bytes)?;
        Ok(Self::new(pattern, Strategy::Eager, Matcher::Dfa(dfa)))
    }
}

/// Iterator over match spans, created by [`Automaton::find_all`].
pub struct FindAll<'a, 't>(FindIter<'a, 't, NoopTracer>);

impl Iterator for FindAll<'_, '_> {
    type Item = Span;

    fn next(&mut self) -> Option<Span> {
        self.0.next()
    }
}

impl FusedIterator for FindAll<'_, '_> {}

/// One match and the bytes it covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Match<'t> {
    span: Span,
    bytes: &'t [u8],
}

impl<'t> Match<'t> {
    pub fn span(&self) -> Span {
        self.span
    }

    pub fn start(&self) -> usize {
        self.span.start
    }

    pub fn end(&self) -> usize {
        self.span.end
    }

    pub fn len(&self) -> usize {
        self.span.len()
    }

    /// Always false: empty matches are never reported.
    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    pub fn as_bytes(&self) -> &'t [u8] {
        self.bytes
    }

    /// The matched text, when the searched bytes were valid UTF-8 there.
    pub fn as_str(&self) -> Option<&'t str> {
        std::str::from_utf8(self.bytes).ok()
    }
}

/// Iterator over [`Match`]es, created by [`Automaton::find_matches`].
pub struct Matches<'a, 't> {
    text: &'t [u8],
    spans: FindAll<'a, 't>,
}

impl<'t> Iterator for Matches<'_, 't> {
    type Item = Match<'t>;

    fn next(&mut self) -> Option<Match<'t>> {
        let span = self.spans.next()?;
        Some(Match {
            span,
            bytes: &self.text[span.range()],
        })
    }
}

impl FusedIterator for Matches<'_, '_> {}
