//! Pattern parser.
//!
//! # Architecture
//!
//! - Zero-copy lexing: `logos` tokens carry spans; text is sliced on demand
//! - Recursive descent, one method per precedence tier
//! - Arena AST: nodes referenced by `NodeId`, children before parents
//!
//! Unlike a resilient IDE parser this one stops at the first error, since a
//! partially understood pattern is useless to the automaton compiler.

pub mod ast;
pub mod class_set;
pub mod lexer;

mod class;
mod core;
mod escape;
mod grammar;
mod invariants;

#[cfg(test)]
mod errors_tests;
#[cfg(test)]
mod lexer_tests;

pub use ast::{Ast, Node, NodeId};
pub use class_set::{CharRange, ClassSet};
pub use core::{DEFAULT_NESTING_LIMIT, Parser, parse};
