//! Byte ranges and byte sets.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Inclusive range of byte values.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ByteRange {
    pub start: u8,
    pub end: u8,
}

impl ByteRange {
    #[inline]
    pub const fn new(start: u8, end: u8) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    #[inline]
    pub const fn single(byte: u8) -> Self {
        Self {
            start: byte,
            end: byte,
        }
    }

    #[inline]
    pub fn contains(&self, byte: u8) -> bool {
        self.start <= byte && byte <= self.end
    }

    pub fn len(&self) -> usize {
        usize::from(self.end - self.start) + 1
    }

    /// Always false: a range holds at least one byte.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Debug for ByteRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", escape_byte(self.start))
        } else {
            write!(f, "{}-{}", escape_byte(self.start), escape_byte(self.end))
        }
    }
}

/// Printable form of a byte: ASCII graphic characters as-is, the common
/// control characters as escapes, everything else as `\xHH`.
pub fn escape_byte(byte: u8) -> String {
    match byte {
        b'\n' => "\\n".to_string(),
        b'\t' => "\\t".to_string(),
        b'\r' => "\\r".to_string(),
        b'\\' => "\\\\".to_string(),
        b' '..=b'~' => char::from(byte).to_string(),
        _ => format!("\\x{byte:02x}"),
    }
}

/// Set of bytes stored as a 256-bit bitmap.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ByteSet {
    bits: [u64; 4],
}

impl ByteSet {
    pub const EMPTY: Self = Self { bits: [0; 4] };
    pub const FULL: Self = Self {
        bits: [u64::MAX; 4],
    };

    pub fn new() -> Self {
        Self::EMPTY
    }

    #[inline]
    pub fn insert(&mut self, byte: u8) {
        self.bits[usize::from(byte >> 6)] |= 1 << (byte & 63);
    }

    pub fn insert_range(&mut self, range: ByteRange) {
        for byte in range.start..=range.end {
            self.insert(byte);
        }
    }

    #[inline]
    pub fn contains(&self, byte: u8) -> bool {
        self.bits[usize::from(byte >> 6)] & (1 << (byte & 63)) != 0
    }

    pub fn len(&self) -> usize {
        self.bits.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&w| w == 0)
    }

    pub fn union(&mut self, other: &ByteSet) {
        for (a, b) in self.bits.iter_mut().zip(other.bits) {
            *a |= b;
        }
    }

    pub fn complement(&self) -> ByteSet {
        ByteSet {
            bits: self.bits.map(|w| !w),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=255u8).filter(move |&b| self.contains(b))
    }

    /// Maximal runs of consecutive members, in ascending order.
    pub fn ranges(&self) -> Vec<ByteRange> {
        let mut out: Vec<ByteRange> = Vec::new();
        for byte in self.iter() {
            match out.last_mut() {
                Some(last) if last.end.checked_add(1) == Some(byte) => last.end = byte,
                _ => out.push(ByteRange::single(byte)),
            }
        }
        out
    }
}

impl FromIterator<ByteRange> for ByteSet {
    fn from_iter<I: IntoIterator<Item = ByteRange>>(iter: I) -> Self {
        let mut set = ByteSet::new();
        for range in iter {
            set.insert_range(range);
        }
        set
    }
}

impl fmt::Debug for ByteSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.ranges()).finish()
    }
}
