//! Table-driven DFA.
//!
//! Rows are indexed by byte class. State 0 is the dead state: every row
//! entry of a missing transition points there and it never accepts, so the
//! transition function is total.
//!
//! Anchors are resolved at construction time:
//! - there are two start states, one for a search beginning at offset 0
//!   (where `^` holds) and one for any later offset;
//! - every state carries `accept` (a match ends here and input may follow)
//!   and `accept_at_eof` (a match ends here if input ends here, i.e. after
//!   crossing `$` edges).

use std::fmt;

use rationl_core::ByteClasses;
use serde::{Deserialize, Serialize};

use crate::StateId;

pub const DEAD: StateId = StateId::new(0);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateFlags {
    pub accept: bool,
    pub accept_at_eof: bool,
}

impl StateFlags {
    pub const REJECT: Self = Self {
        accept: false,
        accept_at_eof: false,
    };

    pub fn can_accept(self) -> bool {
        self.accept || self.accept_at_eof
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct Dfa {
    pub(crate) classes: ByteClasses,
    pub(crate) stride: usize,
    pub(crate) table: Vec<StateId>,
    pub(crate) flags: Vec<StateFlags>,
    pub(crate) start_at_input: StateId,
    pub(crate) start_in_text: StateId,
}

impl Dfa {
    #[inline]
    pub fn next_state(&self, from: StateId, byte: u8) -> StateId {
        self.table[from.as_usize() * self.stride + usize::from(self.classes.get(byte))]
    }

    #[inline]
    pub fn next_state_by_class(&self, from: StateId, class: usize) -> StateId {
        self.table[from.as_usize() * self.stride + class]
    }

    /// Start state for a search beginning at offset 0 or elsewhere.
    #[inline]
    pub fn start(&self, at_input_start: bool) -> StateId {
        if at_input_start {
            self.start_at_input
        } else {
            self.start_in_text
        }
    }

    #[inline]
    pub fn flags(&self, id: StateId) -> StateFlags {
        self.flags[id.as_usize()]
    }

    #[inline]
    pub fn is_accepting(&self, id: StateId) -> bool {
        self.flags(id).accept
    }

    #[inline]
    pub fn is_accepting_at_eof(&self, id: StateId) -> bool {
        self.flags(id).accept_at_eof
    }

    /// Number of states, the dead state included.
    pub fn state_count(&self) -> usize {
        self.flags.len()
    }

    pub fn classes(&self) -> &ByteClasses {
        &self.classes
    }

    pub fn alphabet_len(&self) -> usize {
        self.stride
    }

    pub fn row(&self, id: StateId) -> &[StateId] {
        let start = id.as_usize() * self.stride;
        &self.table[start..start + self.stride]
    }

    pub fn state_ids(&self) -> impl Iterator<Item = StateId> {
        (0..self.state_count()).map(StateId::from_usize)
    }
}

impl fmt::Debug for Dfa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "start: {} / {}", self.start_at_input, self.start_in_text)?;
        for id in self.state_ids().skip(1) {
            let flags = self.flags(id);
            let marker = match (flags.accept, flags.accept_at_eof) {
                (true, _) => "*",
                (false, true) => "$",
                (false, false) => "",
            };
            write!(f, "{id}{marker}:")?;
            for (class, &next) in self.row(id).iter().enumerate() {
                if next == DEAD {
                    continue;
                }
                if let Some(range) = self.classes.range_of(class as u8) {
                    write!(f, " {range:?} => {next};")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Builds a `Dfa` row by row. The dead state is allocated up front.
#[derive(Debug)]
pub struct DfaBuilder {
    classes: ByteClasses,
    stride: usize,
    table: Vec<StateId>,
    flags: Vec<StateFlags>,
}

impl DfaBuilder {
    pub fn new(classes: ByteClasses) -> Self {
        let stride = classes.alphabet_len();
        Self {
            classes,
            stride,
            table: vec![DEAD; stride],
            flags: vec![StateFlags::REJECT],
        }
    }

    pub fn add_state(&mut self, flags: StateFlags) -> StateId {
        let id = StateId::from_usize(self.flags.len());
        self.flags.push(flags);
        self.table.extend(std::iter::repeat_n(DEAD, self.stride));
        id
    }

    pub fn set_transition(&mut self, from: StateId, class: usize, to: StateId) {
        debug_assert!(class < self.stride);
        self.table[from.as_usize() * self.stride + class] = to;
    }

    pub fn state_count(&self) -> usize {
        self.flags.len()
    }

    pub fn alphabet_len(&self) -> usize {
        self.stride
    }

    pub fn classes(&self) -> &ByteClasses {
        &self.classes
    }

    pub fn build(self, start_at_input: StateId, start_in_text: StateId) -> Dfa {
        Dfa {
            classes: self.classes,
            stride: self.stride,
            table: self.table,
            flags: self.flags,
            start_at_input,
            start_in_text,
        }
    }
}
