//! Automaton execution.

mod cursor;
mod lazy;
mod matcher;
mod nfa_sim;
pub mod search;
mod trace;

#[cfg(test)]
mod lazy_tests;
#[cfg(test)]
mod nfa_sim_tests;

pub use cursor::{Cursor, DfaCursor};
pub use lazy::{DEFAULT_CACHE_CAPACITY, LazyCursor, LazyDfa};
pub use matcher::{FindIter, Matcher};
pub use nfa_sim::{NfaCursor, NfaScratch};
pub use trace::{NoopTracer, PrintTracer, Tracer, Verbosity};
