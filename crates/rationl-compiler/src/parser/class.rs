//! Bracket class bodies: `[abc]`, `[a-z0-9]`, `[^\n]`, `[\d_]`.
//!
//! The lexer hands over the whole `[...]` token. A `]` right after the
//! opening bracket (or `[^`) is literal, as is a `-` at either end.

use std::ops::Range;

use super::class_set::ClassSet;
use super::escape::{self, Escape, escape_len};
use crate::diagnostics::{ErrorKind, PatternError};

enum Item {
    Char(char),
    Set(ClassSet),
}

struct ClassBody<'a> {
    body: &'a str,
    pos: usize,
    /// Pattern offset of `body[0]`.
    base: usize,
}

impl ClassBody<'_> {
    fn peek(&self) -> Option<char> {
        self.body[self.pos..].chars().next()
    }

    fn at_end(&self) -> bool {
        self.pos >= self.body.len()
    }

    /// Next item and its range in the pattern.
    fn next_item(&mut self) -> Result<Option<(Item, Range<usize>)>, PatternError> {
        let Some(c) = self.peek() else {
            return Ok(None);
        };
        let start = self.pos;
        if c != '\\' {
            self.pos += c.len_utf8();
            return Ok(Some((Item::Char(c), self.range(start))));
        }

        self.pos += 1 + escape_len(&self.body[self.pos + 1..]);
        let text = &self.body[start..self.pos];
        let range = self.range(start);
        match escape::decode(text) {
            Some(Escape::Char(c)) => Ok(Some((Item::Char(c), range))),
            Some(Escape::Class(set)) => Ok(Some((Item::Set(set), range))),
            None => Err(PatternError::at(ErrorKind::InvalidEscape, range)
                .with_message(format!("invalid escape `{text}` in class"))),
        }
    }

    fn range(&self, start: usize) -> Range<usize> {
        self.base + start..self.base + self.pos
    }

    /// A `-` that joins two endpoints, as opposed to a trailing literal one.
    fn at_range_dash(&self) -> bool {
        self.peek() == Some('-') && self.pos + 1 < self.body.len()
    }
}

/// Parses a full `[...]` token starting at pattern offset `offset`.
pub(super) fn parse_class(text: &str, offset: usize) -> Result<ClassSet, PatternError> {
    let inner = &text[1..text.len() - 1];
    let (negated, body, base) = match inner.strip_prefix('^') {
        Some(rest) => (true, rest, offset + 2),
        None => (false, inner, offset + 1),
    };

    let mut cursor = ClassBody { body, pos: 0, base };
    let mut set = ClassSet::new();

    while let Some((item, range)) = cursor.next_item()? {
        if !cursor.at_range_dash() {
            match item {
                Item::Char(c) => set.push(c, c),
                Item::Set(s) => set.union(&s),
            }
            continue;
        }

        let Item::Char(lo) = item else {
            return Err(shorthand_endpoint(range));
        };
        cursor.pos += 1;
        let Some((hi, hi_range)) = cursor.next_item()? else {
            // at_range_dash guarantees a character after the dash.
            set.push(lo, lo);
            break;
        };
        let Item::Char(hi) = hi else {
            return Err(shorthand_endpoint(hi_range));
        };
        if lo > hi {
            return Err(PatternError::at(ErrorKind::InvalidClassRange, range.start..hi_range.end)
                .with_message(format!(
                    "class range `{}-{}` is out of order",
                    lo.escape_debug(),
                    hi.escape_debug()
                )));
        }
        set.push(lo, hi);
    }

    debug_assert!(cursor.at_end());
    Ok(if negated { set.negate() } else { set })
}

fn shorthand_endpoint(range: Range<usize>) -> PatternError {
    PatternError::at(ErrorKind::InvalidClassRange, range)
        .with_message("a shorthand class cannot be a range endpoint")
}
