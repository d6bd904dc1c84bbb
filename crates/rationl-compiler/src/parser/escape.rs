//! Backslash escapes, shared by atoms and class bodies.

use super::class_set::ClassSet;

/// Characters that may be escaped to stand for themselves.
const METACHARS: &str = "\\|*+?()[]{}.^$-/";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Escape {
    Char(char),
    Class(ClassSet),
}

/// Decodes one escape. `text` starts with the backslash.
pub fn decode(text: &str) -> Option<Escape> {
    let body = text.strip_prefix('\\')?;
    let mut chars = body.chars();
    let c = chars.next()?;
    let rest = chars.as_str();

    if c == 'x' {
        if rest.len() != 2 || !rest.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let value = u8::from_str_radix(rest, 16).ok()?;
        return Some(Escape::Char(char::from(value)));
    }
    if !rest.is_empty() {
        return None;
    }

    let decoded = match c {
        'n' => Escape::Char('\n'),
        't' => Escape::Char('\t'),
        'r' => Escape::Char('\r'),
        'v' => Escape::Char('\u{0B}'),
        'f' => Escape::Char('\u{0C}'),
        '0' => Escape::Char('\0'),
        'd' => Escape::Class(ClassSet::digit()),
        'D' => Escape::Class(ClassSet::digit().negate()),
        'w' => Escape::Class(ClassSet::word()),
        'W' => Escape::Class(ClassSet::word().negate()),
        's' => Escape::Class(ClassSet::space()),
        'S' => Escape::Class(ClassSet::space().negate()),
        c if METACHARS.contains(c) => Escape::Char(c),
        _ => return None,
    };
    Some(decoded)
}

/// Length in bytes of the escape body following a backslash in `rest`.
///
/// `\x` takes up to two hex digits so that `\x4` reports as one bad escape.
pub fn escape_len(rest: &str) -> usize {
    let Some(c) = rest.chars().next() else {
        return 0;
    };
    if c != 'x' {
        return c.len_utf8();
    }
    let digits = rest[1..]
        .bytes()
        .take(2)
        .take_while(u8::is_ascii_hexdigit)
        .count();
    1 + digits
}
