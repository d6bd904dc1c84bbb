//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use super::core::Parser;
use super::lexer::Token;

impl Parser<'_> {
    /// Callers only dispatch on a token they have already peeked.
    #[inline]
    pub(super) fn expect_token(&self) -> Token {
        match self.current_token() {
            Some(token) => token,
            None => panic!("broken parser invariant: atom requested at end of input"),
        }
    }

    /// Literal tokens always hold exactly one character.
    pub(super) fn literal_char(&self, token: &Token) -> char {
        match self.text(token).chars().next() {
            Some(c) => c,
            None => panic!("broken parser invariant: empty literal token at {:?}", token.span),
        }
    }

    pub(super) fn unreachable_atom(&self, token: &Token) -> ! {
        panic!(
            "broken parser invariant: {:?} cannot start an atom (upstream caller's responsibility)",
            token.kind
        )
    }
}
