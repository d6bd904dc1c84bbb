//! Thompson NFA over bytes.

use std::fmt;

use rationl_core::{ByteClassSet, ByteClasses, ByteRange};
use smallvec::SmallVec;

use crate::{Look, StateId, TooManyStates};

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transition {
    pub range: ByteRange,
    pub next: StateId,
}

impl Transition {
    pub fn new(range: ByteRange, next: StateId) -> Self {
        Self { range, next }
    }
}

impl fmt::Debug for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} => {}", self.range, self.next)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum State {
    /// Consumes one byte from any listed range. Ranges may overlap; every
    /// matching transition is followed.
    Bytes { transitions: Vec<Transition> },
    /// Epsilon edges. Fragment exits start with no targets and are wired later.
    Split { targets: SmallVec<[StateId; 2]> },
    /// Epsilon edge that holds only at an input boundary.
    Look { look: Look, next: StateId },
    Match,
}

impl State {
    /// Every state this one has an edge to, epsilon or not.
    pub fn successors(&self) -> impl Iterator<Item = StateId> + '_ {
        let bytes: &[Transition] = match self {
            State::Bytes { transitions } => transitions,
            _ => &[],
        };
        let eps: &[StateId] = match self {
            State::Split { targets } => targets,
            _ => &[],
        };
        let look = match self {
            State::Look { next, .. } => Some(*next),
            _ => None,
        };
        bytes
            .iter()
            .map(|t| t.next)
            .chain(eps.iter().copied())
            .chain(look)
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct Nfa {
    states: Vec<State>,
    start: StateId,
}

impl Nfa {
    #[inline]
    pub fn start(&self) -> StateId {
        self.start
    }

    #[inline]
    pub fn state(&self, id: StateId) -> &State {
        &self.states[id.as_usize()]
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn is_match_state(&self, id: StateId) -> bool {
        matches!(self.state(id), State::Match)
    }

    /// Alphabet partition that no transition of this NFA distinguishes within.
    pub fn byte_classes(&self) -> ByteClasses {
        let mut set = ByteClassSet::new();
        for state in &self.states {
            if let State::Bytes { transitions } = state {
                for t in transitions {
                    set.set_range(t.range);
                }
            }
        }
        set.byte_classes()
    }
}

impl fmt::Debug for Nfa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "start: {}", self.start)?;
        for (i, state) in self.states.iter().enumerate() {
            write!(f, "{}: ", StateId::from_usize(i))?;
            match state {
                State::Bytes { transitions } => {
                    let body: Vec<String> = transitions.iter().map(|t| format!("{t:?}")).collect();
                    write!(f, "{}", body.join(", "))?;
                }
                State::Split { targets } => {
                    write!(f, "split")?;
                    for (j, t) in targets.iter().enumerate() {
                        let sep = if j == 0 { " " } else { ", " };
                        write!(f, "{sep}{t}")?;
                    }
                }
                State::Look { look, next } => write!(f, "look {} => {next}", look.as_char())?,
                State::Match => write!(f, "match")?,
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Incremental NFA construction with a state ceiling.
#[derive(Debug)]
pub struct NfaBuilder {
    pub(crate) states: Vec<State>,
    limit: usize,
}

impl NfaBuilder {
    pub fn new(limit: usize) -> Self {
        Self {
            states: Vec::new(),
            limit,
        }
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn push(&mut self, state: State) -> Result<StateId, TooManyStates> {
        if self.states.len() >= self.limit {
            return Err(TooManyStates { limit: self.limit });
        }
        let id = StateId::from_usize(self.states.len());
        self.states.push(state);
        Ok(id)
    }

    /// A split with no targets yet.
    pub fn add_empty(&mut self) -> Result<StateId, TooManyStates> {
        self.push(State::Split {
            targets: SmallVec::new(),
        })
    }

    pub fn add_bytes(&mut self, transitions: Vec<Transition>) -> Result<StateId, TooManyStates> {
        self.push(State::Bytes { transitions })
    }

    pub fn add_look(&mut self, look: Look, next: StateId) -> Result<StateId, TooManyStates> {
        self.push(State::Look { look, next })
    }

    pub fn add_match(&mut self) -> Result<StateId, TooManyStates> {
        self.push(State::Match)
    }

    /// Adds an epsilon edge. `from` must be a split state.
    pub fn add_epsilon(&mut self, from: StateId, to: StateId) {
        self.ensure_split(from).push(to);
    }

    pub fn build(self, start: StateId) -> Nfa {
        Nfa {
            states: self.states,
            start,
        }
    }
}
