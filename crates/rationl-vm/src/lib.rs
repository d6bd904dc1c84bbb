#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Matching engines for rationl automata.
//!
//! Every engine is driven through the same [`Cursor`] interface, so the
//! search loops in [`engine::search`] are written once and shared by the
//! eager DFA, the lazily built DFA and direct NFA simulation.

pub mod engine;

#[cfg(test)]
mod test_utils;

// Re-export commonly used items at crate root
pub use engine::{
    Cursor, DEFAULT_CACHE_CAPACITY, DfaCursor, FindIter, LazyCursor, LazyDfa, Matcher, NfaCursor,
    NfaScratch, NoopTracer, PrintTracer, Tracer, Verbosity,
};
