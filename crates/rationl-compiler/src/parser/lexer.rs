//! Lexer for patterns.
//!
//! Produces span-based tokens without storing text; text is sliced from the
//! source only when needed. Bracket classes, escapes and `{m,n}` repetitions
//! are single tokens whose bodies the parser decodes.
//!
//! ## Error handling
//!
//! The lexer never fails. A `{` that does not open a well-formed repetition
//! becomes a `Literal`, and a `[` without its `]` becomes one
//! `UnterminatedClass` token running to the end of input.

use logos::{Lexer, Logos};
use rowan::TextRange;

use super::escape::escape_len;
use crate::diagnostics::text_range;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `(?:` opens a non-capturing group. Longer than `(`, so it wins.
    #[token("(?:")]
    GroupOpenNonCapturing,

    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    #[token("|")]
    Pipe,

    #[token("*")]
    Star,

    #[token("+")]
    Plus,

    #[token("?")]
    Question,

    /// `{m}`, `{m,}` or `{m,n}`.
    #[token("{", lex_repetition)]
    Repetition,

    #[token("^")]
    Caret,

    #[token("$")]
    Dollar,

    #[token(".")]
    Dot,

    /// `[...]` including both brackets.
    #[token("[", lex_class)]
    Class,

    /// Backslash plus its body, possibly malformed.
    #[token("\\", lex_escape)]
    Escape,

    #[regex(r"[^()|*+?^$.\[\\{]")]
    Literal,

    /// Produced by post-processing, never by logos.
    UnterminatedClass,
}

impl TokenKind {
    pub fn is_quantifier(self) -> bool {
        matches!(self, Self::Star | Self::Plus | Self::Question | Self::Repetition)
    }
}

/// Zero-copy token: kind + span, text retrieved via [`token_text`] when needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: TextRange,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: TextRange) -> Self {
        Self { kind, span }
    }
}

fn lex_repetition(lex: &mut Lexer<TokenKind>) -> bool {
    match repetition_len(lex.remainder()) {
        Some(len) => {
            lex.bump(len);
            true
        }
        None => false,
    }
}

fn lex_class(lex: &mut Lexer<TokenKind>) -> bool {
    match class_len(lex.remainder()) {
        Some(len) => {
            lex.bump(len);
            true
        }
        None => false,
    }
}

fn lex_escape(lex: &mut Lexer<TokenKind>) -> bool {
    let len = escape_len(lex.remainder());
    lex.bump(len);
    true
}

/// Length of `m}`, `m,}` or `m,n}` after the opening brace.
pub(crate) fn repetition_len(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    let min = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    if min == 0 {
        return None;
    }
    let mut pos = min;
    if bytes.get(pos) == Some(&b',') {
        pos += 1;
        pos += bytes[pos..].iter().take_while(|b| b.is_ascii_digit()).count();
    }
    (bytes.get(pos) == Some(&b'}')).then_some(pos + 1)
}

/// Length of a class body and its closing `]` after the opening bracket.
fn class_len(rest: &str) -> Option<usize> {
    let mut pos = 0;
    if rest.starts_with('^') {
        pos += 1;
    }
    if rest[pos..].starts_with(']') {
        pos += 1;
    }
    while let Some(c) = rest[pos..].chars().next() {
        match c {
            ']' => return Some(pos + 1),
            '\\' => pos += 1 + escape_len(&rest[pos + 1..]),
            _ => pos += c.len_utf8(),
        }
    }
    None
}

/// Tokenizes a pattern into span-based tokens.
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(kind) => tokens.push(Token::new(kind, text_range(span))),
            Err(()) if source[span.start..].starts_with('[') => {
                tokens.push(Token::new(
                    TokenKind::UnterminatedClass,
                    text_range(span.start..source.len()),
                ));
                break;
            }
            Err(()) => {
                // A `{` that opens no repetition, or anything logos could not
                // classify: one literal per character.
                for (offset, c) in source[span.clone()].char_indices() {
                    let start = span.start + offset;
                    tokens.push(Token::new(
                        TokenKind::Literal,
                        text_range(start..start + c.len_utf8()),
                    ));
                }
            }
        }
    }

    tokens
}

/// Retrieves the text slice for a token. O(1) slice into source.
#[inline]
pub fn token_text<'p>(source: &'p str, token: &Token) -> &'p str {
    &source[std::ops::Range::<usize>::from(token.span)]
}
