//! Automaton construction passes.
//!
//! # Module Organization
//!
//! - `thompson`: AST to NFA, one entry and one exit per fragment
//! - `prune`: drops NFA states off every accepting path, and folds hopeless
//!   DFA states into the dead state
//! - `determinize`: subset construction over byte classes
//! - `minimize`: Moore partition refinement

mod determinize;
mod invariants;
mod minimize;
mod prune;
mod thompson;

#[cfg(test)]
mod determinize_tests;

pub use determinize::determinize;
pub use minimize::minimize;
pub use prune::{prune_dfa, prune_nfa};
pub use thompson::compile_nfa;

use rationl_automata::{Dfa, Nfa};

use crate::diagnostics::{ErrorKind, PatternError};
use crate::parser::{DEFAULT_NESTING_LIMIT, Parser};

pub const DEFAULT_NFA_SIZE_LIMIT: usize = 100_000;
pub const DEFAULT_DFA_SIZE_LIMIT: usize = 10_000;

/// Limits and switches shared by every pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompileOptions {
    pub nfa_size_limit: usize,
    pub dfa_size_limit: usize,
    pub nesting_limit: u32,
    pub minimize: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            nfa_size_limit: DEFAULT_NFA_SIZE_LIMIT,
            dfa_size_limit: DEFAULT_DFA_SIZE_LIMIT,
            nesting_limit: DEFAULT_NESTING_LIMIT,
            minimize: true,
        }
    }
}

/// Parses `pattern` and builds its pruned Thompson NFA.
pub fn build_nfa(pattern: &str, options: &CompileOptions) -> Result<Nfa, PatternError> {
    let ast = Parser::new(pattern)
        .with_nesting_limit(options.nesting_limit)
        .parse()?;
    let nfa = compile_nfa(&ast, options.nfa_size_limit)?;
    Ok(prune_nfa(&nfa))
}

/// Eagerly determinizes an NFA, then prunes and optionally minimizes the result.
pub fn nfa_to_dfa(nfa: &Nfa, options: &CompileOptions) -> Result<Dfa, PatternError> {
    let dfa = determinize(nfa, options.dfa_size_limit).map_err(|e| {
        PatternError::at(ErrorKind::AutomatonTooLarge, 0..0)
            .with_message(format!("DFA needs more than {} states", e.limit))
    })?;
    let dfa = prune_dfa(&dfa);
    if options.minimize {
        return Ok(minimize(&dfa));
    }
    Ok(dfa)
}

/// The whole eager pipeline: pattern text to a ready-to-run DFA.
pub fn compile_dfa(pattern: &str, options: &CompileOptions) -> Result<Dfa, PatternError> {
    let nfa = build_nfa(pattern, options)?;
    nfa_to_dfa(&nfa, options)
}
