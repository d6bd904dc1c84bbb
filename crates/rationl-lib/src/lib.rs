//! rationl: pattern matching on finite automata.
//!
//! Patterns compile to a Thompson NFA and, by default, to a minimized DFA.
//! Matching never backtracks, so every search is linear in the input.
//!
//! # Example
//!
//! ```
//! let automaton = rationl_lib::compile("a(b|c)*d").unwrap();
//!
//! assert!(automaton.matches("abcbcd"));
//! let spans: Vec<_> = automaton.find_all("xxabcbcdxx").map(|s| s.range()).collect();
//! assert_eq!(spans, [2..8]);
//! ```
//!
//! Engines are chosen with [`AutomatonBuilder::strategy`]; all of them
//! report the same matches.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod automaton;
mod builder;

#[cfg(test)]
mod builder_tests;

pub use automaton::{Automaton, FindAll, Match, Matches};
pub use builder::{AutomatonBuilder, Strategy};

pub use rationl_automata::DecodeError;
pub use rationl_compiler::{Ast, ErrorKind, ErrorPrinter, Parser, PatternError};
pub use rationl_core::{Colors, Span};
pub use rationl_vm::{NoopTracer, PrintTracer, Tracer, Verbosity};

/// Compiles `pattern` with the default settings: an eager, minimized DFA.
pub fn compile(pattern: &str) -> Result<Automaton, PatternError> {
    Automaton::builder().build(pattern)
}
