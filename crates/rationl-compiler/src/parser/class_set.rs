//! Sets of Unicode scalar values, kept as sorted disjoint ranges.

use std::fmt;

const MAX: u32 = char::MAX as u32;
const SURROGATES: (u32, u32) = (0xD800, 0xDFFF);

/// Inclusive range of scalar values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CharRange {
    pub start: char,
    pub end: char,
}

impl CharRange {
    pub fn new(start: char, end: char) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }
}

/// Canonical set: ranges are sorted, non-overlapping and never adjacent.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct ClassSet {
    ranges: Vec<CharRange>,
}

impl ClassSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ranges(ranges: impl IntoIterator<Item = (char, char)>) -> Self {
        let mut set = Self::new();
        for (start, end) in ranges {
            set.ranges.push(CharRange::new(start, end));
        }
        set.canonicalize();
        set
    }

    /// `.`: every scalar except `\n`.
    pub fn any_except_newline() -> Self {
        Self::from_ranges([('\0', '\t'), ('\u{0B}', char::MAX)])
    }

    pub fn digit() -> Self {
        Self::from_ranges([('0', '9')])
    }

    pub fn word() -> Self {
        Self::from_ranges([('0', '9'), ('A', 'Z'), ('_', '_'), ('a', 'z')])
    }

    pub fn space() -> Self {
        Self::from_ranges([('\t', '\r'), (' ', ' ')])
    }

    pub fn push(&mut self, start: char, end: char) {
        self.ranges.push(CharRange::new(start, end));
        self.canonicalize();
    }

    pub fn union(&mut self, other: &ClassSet) {
        self.ranges.extend_from_slice(&other.ranges);
        self.canonicalize();
    }

    /// Complement over all scalar values.
    pub fn negate(&self) -> ClassSet {
        let mut out = Vec::new();
        let mut next = 0u32;
        for r in &self.ranges {
            let start = r.start as u32;
            if start > next {
                push_scalars(&mut out, next, start - 1);
            }
            next = r.end as u32 + 1;
        }
        if next <= MAX {
            push_scalars(&mut out, next, MAX);
        }
        let mut set = ClassSet { ranges: out };
        set.canonicalize();
        set
    }

    pub fn ranges(&self) -> &[CharRange] {
        &self.ranges
    }

    pub fn contains(&self, c: char) -> bool {
        self.ranges.iter().any(|r| r.start <= c && c <= r.end)
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    fn canonicalize(&mut self) {
        self.ranges.sort_by_key(|r| (r.start, r.end));
        let mut merged: Vec<CharRange> = Vec::with_capacity(self.ranges.len());
        for r in self.ranges.drain(..) {
            match merged.last_mut() {
                Some(last) if touches(*last, r) => {
                    if r.end > last.end {
                        last.end = r.end;
                    }
                }
                _ => merged.push(r),
            }
        }
        self.ranges = merged;
    }
}

/// Overlapping or adjacent, with the surrogate gap counting as adjacency.
fn touches(a: CharRange, b: CharRange) -> bool {
    let after = a.end as u32 + 1;
    let after = if after == SURROGATES.0 {
        SURROGATES.1 + 1
    } else {
        after
    };
    b.start as u32 <= after
}

/// Pushes `lo..=hi`, splitting around the surrogate block.
fn push_scalars(out: &mut Vec<CharRange>, lo: u32, hi: u32) {
    let pieces = [
        (lo, hi.min(SURROGATES.0 - 1)),
        (lo.max(SURROGATES.1 + 1), hi),
    ];
    for (lo, hi) in pieces {
        if lo > hi {
            continue;
        }
        if let (Some(start), Some(end)) = (char::from_u32(lo), char::from_u32(hi)) {
            out.push(CharRange::new(start, end));
        }
    }
}

impl fmt::Debug for ClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for r in &self.ranges {
            write!(f, "{}", r.start.escape_debug())?;
            if r.end != r.start {
                write!(f, "-{}", r.end.escape_debug())?;
            }
        }
        write!(f, "]")
    }
}
