//! DFA built on demand during search.
//!
//! Subset construction runs one transition at a time: the first time a
//! (state, byte class) pair is followed, its successor closure is computed
//! from the NFA and memoized in the transition table. States are interned by
//! `(closure set, at-input-start)`, exactly as the eager construction keys
//! them, so both engines agree on every input.
//!
//! The cache is bounded. When interning a new state would exceed the
//! capacity, every cached state is dropped and only the state being entered
//! is interned again, so a search in progress continues without noticing.
//!
//! The cache sits behind one `parking_lot::Mutex`. A cursor holds the lock
//! for its whole lifetime, which is one `is_match` call or one step of a
//! match iterator.

use parking_lot::{Mutex, MutexGuard};
use rationl_automata::closure::{contains_match, epsilon_closure, reclose, step};
use rationl_automata::{Boundary, DEAD, Nfa, SparseSet, StateFlags, StateId, StateSet};
use rationl_core::ByteClasses;
use rustc_hash::FxHashMap;

use super::cursor::Cursor;
use super::trace::{NoopTracer, Tracer};

pub const DEFAULT_CACHE_CAPACITY: usize = 4096;

/// Table entry for a transition that was never computed.
const UNKNOWN: StateId = StateId::new(u32::MAX);

#[derive(Debug)]
pub struct LazyDfa {
    nfa: Nfa,
    classes: ByteClasses,
    capacity: usize,
    cache: Mutex<Cache>,
}

impl LazyDfa {
    /// `capacity` counts cached states including the dead state and is
    /// raised to at least 2.
    pub fn new(nfa: Nfa, capacity: usize) -> Self {
        let classes = nfa.byte_classes();
        let cache = Cache::new(&nfa, classes.alphabet_len());
        Self {
            nfa,
            classes,
            capacity: capacity.max(2),
            cache: Mutex::new(cache),
        }
    }

    pub fn nfa(&self) -> &Nfa {
        &self.nfa
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of states currently cached, the dead state included.
    pub fn cached_states(&self) -> usize {
        self.cache.lock().sets.len()
    }

    /// How many times the cache has been emptied so far.
    pub fn cache_clears(&self) -> usize {
        self.cache.lock().clears
    }

    /// Locks the cache and positions a cursor at the input-start state.
    pub fn cursor(&self) -> LazyCursor<'_> {
        let mut cursor = LazyCursor {
            dfa: self,
            cache: self.cache.lock(),
            state: DEAD,
        };
        cursor.reset(true, &mut NoopTracer);
        cursor
    }
}

#[derive(Debug)]
struct Cache {
    stride: usize,
    /// Closure set of every cached state; index 0 is the dead state.
    sets: Vec<StateSet>,
    flags: Vec<StateFlags>,
    /// `stride` entries per state, `UNKNOWN` until computed.
    table: Vec<StateId>,
    index: FxHashMap<(StateSet, bool), StateId>,
    /// Start states for a search in the middle of the input and at offset 0.
    starts: [StateId; 2],
    next: SparseSet,
    eof: SparseSet,
    stack: Vec<StateId>,
    clears: usize,
}

impl Cache {
    fn new(nfa: &Nfa, stride: usize) -> Self {
        let empty = SparseSet::new(0);
        Self {
            stride,
            sets: vec![StateSet::from_sparse(&empty)],
            flags: vec![StateFlags::REJECT],
            table: vec![DEAD; stride],
            index: FxHashMap::default(),
            starts: [UNKNOWN; 2],
            next: SparseSet::new(nfa.len()),
            eof: SparseSet::new(nfa.len()),
            stack: Vec::new(),
            clears: 0,
        }
    }

    /// Drops every state but the dead one.
    fn clear(&mut self) {
        self.sets.truncate(1);
        self.flags.truncate(1);
        self.table.truncate(self.stride);
        self.index.clear();
        self.starts = [UNKNOWN; 2];
        self.clears += 1;
    }

    fn start<T: Tracer>(
        &mut self,
        dfa: &LazyDfa,
        at_input_start: bool,
        tracer: &mut T,
    ) -> StateId {
        let slot = usize::from(at_input_start);
        if self.starts[slot] != UNKNOWN {
            return self.starts[slot];
        }
        self.next.clear();
        epsilon_closure(
            &dfa.nfa,
            dfa.nfa.start(),
            Boundary::start(at_input_start),
            &mut self.next,
            &mut self.stack,
        );
        let id = self.intern(dfa, at_input_start, tracer);
        self.starts[slot] = id;
        id
    }

    fn next_state<T: Tracer>(
        &mut self,
        dfa: &LazyDfa,
        from: StateId,
        byte: u8,
        tracer: &mut T,
    ) -> StateId {
        let slot = from.as_usize() * self.stride + usize::from(dfa.classes.get(byte));
        let cached = self.table[slot];
        if cached != UNKNOWN {
            return cached;
        }

        tracer.trace_cache_miss(from, byte);
        let Self { sets, next, stack, .. } = self;
        next.clear();
        step(
            &dfa.nfa,
            sets[from.as_usize()].as_slice(),
            byte,
            Boundary::INTERIOR,
            next,
            stack,
        );

        let generation = self.clears;
        let to = self.intern(dfa, false, tracer);
        // After a clear `from` no longer names a cached state.
        if self.clears == generation {
            self.table[slot] = to;
        }
        to
    }

    /// Interns the closure currently held in `next`.
    fn intern<T: Tracer>(
        &mut self,
        dfa: &LazyDfa,
        at_input_start: bool,
        tracer: &mut T,
    ) -> StateId {
        if self.next.is_empty() {
            return DEAD;
        }
        let key = (StateSet::from_sparse(&self.next), at_input_start);
        if let Some(&id) = self.index.get(&key) {
            return id;
        }

        if self.sets.len() >= dfa.capacity {
            tracer.trace_cache_clear(self.sets.len() - 1);
            self.clear();
        }

        let states = key.0.as_slice();
        self.eof.clear();
        reclose(
            &dfa.nfa,
            states,
            Boundary::start(at_input_start).with_end(),
            &mut self.eof,
            &mut self.stack,
        );
        let flags = StateFlags {
            accept: contains_match(&dfa.nfa, states),
            accept_at_eof: contains_match(&dfa.nfa, self.eof.as_slice()),
        };

        let id = StateId::from_usize(self.sets.len());
        self.sets.push(key.0.clone());
        self.flags.push(flags);
        self.table.resize(self.table.len() + self.stride, UNKNOWN);
        self.index.insert(key, id);
        id
    }
}

/// Cursor over a [`LazyDfa`]; owns the cache lock while alive.
pub struct LazyCursor<'a> {
    dfa: &'a LazyDfa,
    cache: MutexGuard<'a, Cache>,
    state: StateId,
}

impl Cursor for LazyCursor<'_> {
    fn reset<T: Tracer>(&mut self, at_input_start: bool, tracer: &mut T) {
        self.state = self.cache.start(self.dfa, at_input_start, tracer);
    }

    fn advance<T: Tracer>(&mut self, byte: u8, tracer: &mut T) {
        self.state = self.cache.next_state(self.dfa, self.state, byte, tracer);
    }

    fn is_dead(&self) -> bool {
        self.state == DEAD
    }

    fn is_accepting(&self) -> bool {
        self.cache.flags[self.state.as_usize()].accept
    }

    fn is_accepting_at_eof(&mut self) -> bool {
        self.cache.flags[self.state.as_usize()].accept_at_eof
    }

    fn state_id(&self) -> StateId {
        self.state
    }
}
