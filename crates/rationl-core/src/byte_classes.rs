//! Alphabet compression.
//!
//! Two bytes belong to the same class when no transition in an automaton
//! tells them apart. DFA tables are indexed by class, so a pattern like
//! `[a-z]+` needs a row of 3 entries instead of 256.
//!
//! Classes are always contiguous byte ranges: the builder only records the
//! boundaries where one range ends and the next begins.

use crate::{ByteRange, ByteSet};

/// Collects byte-range boundaries to derive a `ByteClasses` partition.
#[derive(Clone, Debug, Default)]
pub struct ByteClassSet {
    /// A member byte ends a class; the next byte starts a new one.
    boundaries: ByteSet,
}

impl ByteClassSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `range` must not share a class with its neighbours.
    pub fn set_range(&mut self, range: ByteRange) {
        if range.start > 0 {
            self.boundaries.insert(range.start - 1);
        }
        self.boundaries.insert(range.end);
    }

    pub fn byte_classes(&self) -> ByteClasses {
        let mut map = [0u8; 256];
        let mut class = 0u8;
        for byte in 0..=255u8 {
            map[usize::from(byte)] = class;
            if byte < 255 && self.boundaries.contains(byte) {
                class += 1;
            }
        }
        ByteClasses { map }
    }
}

/// Maps every byte to its equivalence class.
#[derive(Clone, PartialEq, Eq)]
pub struct ByteClasses {
    map: [u8; 256],
}

impl ByteClasses {
    /// One class per byte; no compression.
    pub fn singletons() -> Self {
        let mut map = [0u8; 256];
        for (i, slot) in map.iter_mut().enumerate() {
            *slot = i as u8;
        }
        Self { map }
    }

    /// Rebuilds a partition from its raw table, rejecting tables that do not
    /// start at class 0 or that skip a class number.
    pub fn from_slice(raw: &[u8]) -> Option<Self> {
        let map: [u8; 256] = raw.try_into().ok()?;
        if map[0] != 0 {
            return None;
        }
        let well_formed = map
            .windows(2)
            .all(|w| w[1] == w[0] || Some(w[1]) == w[0].checked_add(1));
        well_formed.then_some(Self { map })
    }

    #[inline]
    pub fn get(&self, byte: u8) -> u8 {
        self.map[usize::from(byte)]
    }

    /// Number of classes (the DFA row width).
    #[inline]
    pub fn alphabet_len(&self) -> usize {
        usize::from(self.map[255]) + 1
    }

    /// The smallest byte of each class, in class order.
    pub fn representatives(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=255u8).filter(move |&b| b == 0 || self.get(b) != self.get(b - 1))
    }

    /// The bytes belonging to `class` as one inclusive range.
    pub fn range_of(&self, class: u8) -> Option<ByteRange> {
        let mut members = (0..=255u8).filter(|&b| self.get(b) == class);
        let start = members.next()?;
        let end = members.last().unwrap_or(start);
        Some(ByteRange::new(start, end))
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.map
    }
}

impl std::fmt::Debug for ByteClasses {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ranges: Vec<ByteRange> = (0..self.alphabet_len())
            .filter_map(|class| self.range_of(class as u8))
            .collect();
        f.debug_tuple("ByteClasses").field(&ranges).finish()
    }
}
