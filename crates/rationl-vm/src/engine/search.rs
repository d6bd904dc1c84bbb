//! Search loops shared by every engine.
//!
//! Matches are leftmost and, from a given start, longest. A scan from one
//! start offset stops at the first dead state or at the end of the input, so
//! each attempt is linear in the bytes it reads.

use rationl_core::Span;

use super::cursor::Cursor;
use super::trace::Tracer;

/// Does the automaton accept the whole of `input`?
pub fn is_match<C: Cursor, T: Tracer>(cursor: &mut C, input: &[u8], tracer: &mut T) -> bool {
    cursor.reset(true, tracer);
    tracer.trace_search_start(0, cursor.state_id());
    for (offset, &byte) in input.iter().enumerate() {
        if cursor.is_dead() {
            tracer.trace_dead(offset);
            return false;
        }
        cursor.advance(byte, tracer);
        tracer.trace_step(offset, byte, cursor.state_id());
    }
    if cursor.is_dead() {
        tracer.trace_dead(input.len());
        return false;
    }
    let accepted = cursor.is_accepting_at_eof();
    if accepted {
        tracer.trace_accept(input.len());
    }
    accepted
}

/// End of the longest match that begins at `start`, if any.
///
/// A match may be empty, in which case the returned end equals `start`.
pub fn longest_match_at<C: Cursor, T: Tracer>(
    cursor: &mut C,
    input: &[u8],
    start: usize,
    tracer: &mut T,
) -> Option<usize> {
    cursor.reset(start == 0, tracer);
    tracer.trace_search_start(start, cursor.state_id());

    let mut last = None;
    for (offset, &byte) in input.iter().enumerate().skip(start) {
        if cursor.is_dead() {
            tracer.trace_dead(offset);
            return last;
        }
        if cursor.is_accepting() {
            tracer.trace_accept(offset);
            last = Some(offset);
        }
        cursor.advance(byte, tracer);
        tracer.trace_step(offset, byte, cursor.state_id());
    }

    if cursor.is_dead() {
        tracer.trace_dead(input.len());
    } else if cursor.is_accepting_at_eof() {
        tracer.trace_accept(input.len());
        last = Some(input.len());
    }
    last
}

/// First non-empty match starting at or after `from`.
///
/// Start offsets are tried left to right; an attempt that only finds an
/// empty match moves on to the next byte.
pub fn find_at<C: Cursor, T: Tracer>(
    cursor: &mut C,
    input: &[u8],
    from: usize,
    tracer: &mut T,
) -> Option<Span> {
    for start in from..input.len() {
        let Some(end) = longest_match_at(cursor, input, start, tracer) else {
            continue;
        };
        if end > start {
            let span = Span::new(start, end);
            tracer.trace_match(span);
            return Some(span);
        }
    }
    None
}
