//! Tracing infrastructure for watching a search run.
//!
//! # Design: Zero-Cost Abstraction
//!
//! Every search entry point is generic over [`Tracer`]. With `NoopTracer`:
//! - all trait methods are `#[inline(always)]` empty functions
//! - the compiler eliminates the calls together with their arguments
//! - cursors and the search loop carry no tracing state
//!
//! `PrintTracer` collects human-readable lines instead, filtered by
//! [`Verbosity`].

use rationl_automata::StateId;
use rationl_core::{Colors, Span, escape_byte};

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Default: reported matches only.
    #[default]
    Default,
    /// Verbose (-v): search starts, accepting positions, dead states and
    /// cache clears.
    Verbose,
    /// Very verbose (-vv): every consumed byte and every lazy cache miss.
    VeryVerbose,
}

/// Tracer trait for search instrumentation.
///
/// All methods receive raw data (offsets, bytes, state ids) that the search
/// loop already has. Formatting happens in the tracer implementation.
///
/// - `trace_search_start` - a cursor was reset at `offset`
/// - `trace_step` - after consuming the byte at `offset`
/// - `trace_accept` - a match could end at `offset`
/// - `trace_dead` - the cursor died before consuming the byte at `offset`
/// - `trace_match` - a match was reported
/// - `trace_cache_miss` - the lazy DFA computed a new transition
/// - `trace_cache_clear` - the lazy DFA dropped its cached states
pub trait Tracer {
    fn trace_search_start(&mut self, offset: usize, state: StateId);

    fn trace_step(&mut self, offset: usize, byte: u8, state: StateId);

    fn trace_accept(&mut self, offset: usize);

    fn trace_dead(&mut self, offset: usize);

    fn trace_match(&mut self, span: Span);

    fn trace_cache_miss(&mut self, state: StateId, byte: u8);

    /// `states` is the number of cached states that were dropped.
    fn trace_cache_clear(&mut self, states: usize);
}

impl<T: Tracer + ?Sized> Tracer for &mut T {
    #[inline(always)]
    fn trace_search_start(&mut self, offset: usize, state: StateId) {
        (**self).trace_search_start(offset, state);
    }

    #[inline(always)]
    fn trace_step(&mut self, offset: usize, byte: u8, state: StateId) {
        (**self).trace_step(offset, byte, state);
    }

    #[inline(always)]
    fn trace_accept(&mut self, offset: usize) {
        (**self).trace_accept(offset);
    }

    #[inline(always)]
    fn trace_dead(&mut self, offset: usize) {
        (**self).trace_dead(offset);
    }

    #[inline(always)]
    fn trace_match(&mut self, span: Span) {
        (**self).trace_match(span);
    }

    #[inline(always)]
    fn trace_cache_miss(&mut self, state: StateId, byte: u8) {
        (**self).trace_cache_miss(state, byte);
    }

    #[inline(always)]
    fn trace_cache_clear(&mut self, states: usize) {
        (**self).trace_cache_clear(states);
    }
}

/// No-op tracer that gets optimized away completely.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_search_start(&mut self, _offset: usize, _state: StateId) {}

    #[inline(always)]
    fn trace_step(&mut self, _offset: usize, _byte: u8, _state: StateId) {}

    #[inline(always)]
    fn trace_accept(&mut self, _offset: usize) {}

    #[inline(always)]
    fn trace_dead(&mut self, _offset: usize) {}

    #[inline(always)]
    fn trace_match(&mut self, _span: Span) {}

    #[inline(always)]
    fn trace_cache_miss(&mut self, _state: StateId, _byte: u8) {}

    #[inline(always)]
    fn trace_cache_clear(&mut self, _states: usize) {}
}

/// Tracer that collects formatted lines for display.
#[derive(Debug, Default)]
pub struct PrintTracer {
    verbosity: Verbosity,
    colors: Colors,
    lines: Vec<String>,
}

impl PrintTracer {
    pub fn new(verbosity: Verbosity, colors: Colors) -> Self {
        Self {
            verbosity,
            colors,
            lines: Vec::new(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Print all buffered lines to stdout.
    pub fn print(&self) {
        for line in &self.lines {
            println!("{}", line);
        }
    }

    fn shows(&self, level: Verbosity) -> bool {
        self.verbosity >= level
    }
}

impl Tracer for PrintTracer {
    fn trace_search_start(&mut self, offset: usize, state: StateId) {
        if !self.shows(Verbosity::Verbose) {
            return;
        }
        let c = self.colors;
        self.lines.push(format!(
            "{}@{offset}{} start {}{state}{}",
            c.dim, c.reset, c.blue, c.reset
        ));
    }

    fn trace_step(&mut self, offset: usize, byte: u8, state: StateId) {
        if !self.shows(Verbosity::VeryVerbose) {
            return;
        }
        let c = self.colors;
        let byte = escape_byte(byte);
        self.lines.push(format!(
            "  {}@{offset} {byte}{} -> {}{state}{}",
            c.dim, c.reset, c.blue, c.reset
        ));
    }

    fn trace_accept(&mut self, offset: usize) {
        if !self.shows(Verbosity::Verbose) {
            return;
        }
        self.lines.push(format!("  accept @{offset}"));
    }

    fn trace_dead(&mut self, offset: usize) {
        if !self.shows(Verbosity::Verbose) {
            return;
        }
        let c = self.colors;
        self.lines.push(format!("  {}dead{} @{offset}", c.red, c.reset));
    }

    fn trace_match(&mut self, span: Span) {
        let c = self.colors;
        self.lines.push(format!("{}match{} {span}", c.green, c.reset));
    }

    fn trace_cache_miss(&mut self, state: StateId, byte: u8) {
        if !self.shows(Verbosity::VeryVerbose) {
            return;
        }
        let c = self.colors;
        let byte = escape_byte(byte);
        self.lines.push(format!(
            "  {}miss{} {}{state}{} on {byte}",
            c.dim, c.reset, c.blue, c.reset
        ));
    }

    fn trace_cache_clear(&mut self, states: usize) {
        if !self.shows(Verbosity::Verbose) {
            return;
        }
        self.lines.push(format!("  cache cleared, dropped {states}"));
    }
}
