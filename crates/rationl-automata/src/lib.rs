#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Automaton data model: Thompson NFAs, epsilon closures and table DFAs.
//!
//! States are opaque `StateId` handles into per-automaton tables; nothing is
//! shared between automata. Both automata transition on bytes.

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod closure;
pub mod dfa;
mod invariants;
pub mod look;
pub mod nfa;
pub mod sparse_set;
mod wire;

pub use closure::{Boundary, StateSet};
pub use dfa::{DEAD, Dfa, DfaBuilder, StateFlags};
pub use look::Look;
pub use nfa::{Nfa, NfaBuilder, State, Transition};
pub use sparse_set::SparseSet;
pub use wire::DecodeError;

#[cfg(test)]
mod closure_tests;
#[cfg(test)]
mod dfa_tests;

/// Index of a state within one automaton.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(u32);

impl StateId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    #[inline]
    pub fn from_usize(index: usize) -> Self {
        debug_assert!(index <= u32::MAX as usize);
        Self(index as u32)
    }

    #[inline]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0)
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0)
    }
}

/// Construction stopped at the configured state ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("automaton exceeds the limit of {limit} states")]
pub struct TooManyStates {
    pub limit: usize,
}
