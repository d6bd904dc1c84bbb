use std::ops::Range;

use rowan::TextRange;

use super::message::ErrorKind;

/// A secondary span explaining the primary one, like the `(` of an unclosed group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Related {
    pub range: TextRange,
    pub message: String,
}

/// Why a pattern failed to compile.
///
/// `position` is the byte offset of the offending text in the pattern. For
/// errors detected at end of input (an unclosed group or class) it is the
/// pattern length, and `related` points back at the opening delimiter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} at position {position}")]
pub struct PatternError {
    pub kind: ErrorKind,
    pub position: usize,
    range: TextRange,
    message: String,
    related: Option<Related>,
    hint: Option<String>,
}

impl PatternError {
    pub fn new(kind: ErrorKind, range: TextRange) -> Self {
        Self {
            kind,
            position: usize::from(range.start()),
            range,
            message: kind.fallback_message().to_string(),
            related: None,
            hint: None,
        }
    }

    /// Error covering the byte range `range` of the pattern.
    pub fn at(kind: ErrorKind, range: Range<usize>) -> Self {
        Self::new(kind, text_range(range))
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn related_to(mut self, message: impl Into<String>, range: TextRange) -> Self {
        self.related = Some(Related {
            range,
            message: message.into(),
        });
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn range(&self) -> Range<usize> {
        usize::from(self.range.start())..usize::from(self.range.end())
    }

    pub fn text_range(&self) -> TextRange {
        self.range
    }

    pub fn related(&self) -> Option<&Related> {
        self.related.as_ref()
    }

    /// Site-specific hint, falling back to the kind's default.
    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref().or(self.kind.default_hint())
    }
}

pub(crate) fn text_range(range: Range<usize>) -> TextRange {
    TextRange::new((range.start as u32).into(), (range.end as u32).into())
}
