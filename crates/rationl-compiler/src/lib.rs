#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Pattern compiler: text → AST → Thompson NFA → DFA.
//!
//! Passes:
//! - `parser`: logos lexer and recursive-descent parser into an arena AST
//! - `compile::thompson`: structural NFA construction
//! - `compile::prune`: drop states that cannot contribute to a match
//! - `compile::determinize`: subset construction over byte classes
//! - `compile::minimize`: partition refinement
//!
//! Every failure is a `PatternError`; no pass exposes a partial result.

pub mod compile;
pub mod diagnostics;
pub mod parser;

#[cfg(test)]
pub mod test_utils;

pub use diagnostics::{ErrorKind, ErrorPrinter, PatternError, Related};
pub use parser::{Ast, DEFAULT_NESTING_LIMIT, Node, NodeId, Parser, parse};
