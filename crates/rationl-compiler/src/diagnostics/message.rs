use std::fmt;

/// What went wrong while compiling a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    // Syntax
    UnbalancedGroup,
    DanglingOperator,
    InvalidRepetitionBounds,
    InvalidEscape,
    UnterminatedClass,
    InvalidClassRange,

    // Resource limits
    NestingTooDeep,
    AutomatonTooLarge,
}

impl ErrorKind {
    /// Base message, used when the reporting site has nothing more specific.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::UnbalancedGroup => "unbalanced parenthesis",
            Self::DanglingOperator => "repetition operator has nothing to repeat",
            Self::InvalidRepetitionBounds => "invalid repetition bounds",
            Self::InvalidEscape => "invalid escape sequence",
            Self::UnterminatedClass => "missing closing `]`",
            Self::InvalidClassRange => "invalid character class range",
            Self::NestingTooDeep => "groups are nested too deeply",
            Self::AutomatonTooLarge => "automaton is too large",
        }
    }

    /// Hint shown under the primary span when the reporting site adds none.
    pub fn default_hint(&self) -> Option<&'static str> {
        match self {
            Self::DanglingOperator => Some("escape it with `\\` to match it literally"),
            Self::InvalidRepetitionBounds => Some("write `{m}`, `{m,}` or `{m,n}` with m <= n"),
            Self::InvalidEscape => Some("escape only metacharacters, or use \\n \\t \\r \\v \\f \\0 \\xHH \\d \\w \\s"),
            Self::InvalidClassRange => Some("the first endpoint must not be greater than the second"),
            Self::AutomatonTooLarge => Some("reduce counted repetitions or raise the state limit"),
            _ => None,
        }
    }

    pub fn is_resource_limit(&self) -> bool {
        matches!(self, Self::NestingTooDeep | Self::AutomatonTooLarge)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.fallback_message())
    }
}
