//! Compilation settings.

use std::fmt;

use rationl_compiler::PatternError;
use rationl_compiler::compile::{CompileOptions, build_nfa, nfa_to_dfa};
use rationl_vm::{DEFAULT_CACHE_CAPACITY, LazyDfa, Matcher};

use crate::Automaton;

/// How a compiled pattern is executed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Determinize the whole automaton up front.
    #[default]
    Eager,
    /// Determinize during search, caching states as they are reached.
    Lazy,
    /// Simulate the NFA directly.
    Nfa,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Eager, Strategy::Lazy, Strategy::Nfa];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Eager => "eager",
            Strategy::Lazy => "lazy",
            Strategy::Nfa => "nfa",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Builder for [`Automaton`].
///
/// ```
/// use rationl_lib::{Automaton, Strategy};
///
/// let automaton = Automaton::builder()
///     .strategy(Strategy::Lazy)
///     .cache_capacity(64)
///     .build("[a-z]+@[a-z]+")
///     .unwrap();
/// assert!(automaton.matches("me@example"));
/// ```
#[derive(Clone, Debug)]
pub struct AutomatonBuilder {
    strategy: Strategy,
    options: CompileOptions,
    cache_capacity: usize,
}

impl Default for AutomatonBuilder {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            options: CompileOptions::default(),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl AutomatonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Merge equivalent DFA states (default: on). Eager strategy only.
    pub fn minimize(mut self, yes: bool) -> Self {
        self.options.minimize = yes;
        self
    }

    /// Maximum NFA states (default: 100,000).
    pub fn nfa_size_limit(mut self, limit: usize) -> Self {
        self.options.nfa_size_limit = limit;
        self
    }

    /// Maximum DFA states, dead state included (default: 10,000).
    /// Eager strategy only.
    pub fn dfa_size_limit(mut self, limit: usize) -> Self {
        self.options.dfa_size_limit = limit;
        self
    }

    /// Lazy DFA states kept before the cache is flushed (default: 4,096,
    /// at least 2).
    pub fn cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity.max(2);
        self
    }

    /// Maximum group nesting depth (default: 256).
    pub fn nesting_limit(mut self, limit: u32) -> Self {
        self.options.nesting_limit = limit;
        self
    }

    pub fn get_strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn get_cache_capacity(&self) -> usize {
        self.cache_capacity
    }

    pub fn build(&self, pattern: &str) -> Result<Automaton, PatternError> {
        let nfa = build_nfa(pattern, &self.options)?;
        let matcher = match self.strategy {
            Strategy::Eager => Matcher::Dfa(nfa_to_dfa(&nfa, &self.options)?),
            Strategy::Lazy => Matcher::Lazy(LazyDfa::new(nfa, self.cache_capacity)),
            Strategy::Nfa => Matcher::Nfa(nfa),
        };
        Ok(Automaton::new(pattern, self.strategy, matcher))
    }
}
