//! Parser state and low-level token operations.

use rowan::TextRange;

use super::ast::{Ast, AstBuilder};
use super::lexer::{Token, TokenKind, lex, token_text};
use crate::diagnostics::{ErrorKind, PatternError};

/// Maximum group nesting accepted by default.
pub const DEFAULT_NESTING_LIMIT: u32 = 256;

/// Recursive-descent parser over a pre-lexed token stream.
///
/// There is no recovery: the first error aborts the parse.
pub struct Parser<'src> {
    pub(super) source: &'src str,
    pub(super) tokens: Vec<Token>,
    pub(super) pos: usize,
    pub(super) depth: u32,
    pub(super) nesting_limit: u32,
    pub(super) group_count: u32,
    pub(super) ast: AstBuilder,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            tokens: lex(source),
            pos: 0,
            depth: 0,
            nesting_limit: DEFAULT_NESTING_LIMIT,
            group_count: 0,
            ast: AstBuilder::default(),
        }
    }

    pub fn with_nesting_limit(mut self, limit: u32) -> Self {
        self.nesting_limit = limit;
        self
    }

    pub fn parse(mut self) -> Result<Ast, PatternError> {
        let root = self.parse_alternation()?;
        // Alternation stops only at `)` or end of input.
        if let Some(token) = self.current_token() {
            return Err(PatternError::new(ErrorKind::UnbalancedGroup, token.span)
                .with_message("unmatched `)`"));
        }
        Ok(self.ast.finish(root, self.group_count))
    }

    #[inline]
    pub(super) fn current(&self) -> Option<TokenKind> {
        self.tokens.get(self.pos).map(|t| t.kind)
    }

    #[inline]
    pub(super) fn current_token(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    pub(super) fn bump(&mut self) {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
    }

    pub(super) fn eat(&mut self, kind: TokenKind) -> bool {
        if self.current() == Some(kind) {
            self.bump();
            return true;
        }
        false
    }

    /// Start of the current token, or the pattern length at end of input.
    pub(super) fn offset(&self) -> u32 {
        match self.current_token() {
            Some(token) => token.span.start().into(),
            None => self.source.len() as u32,
        }
    }

    pub(super) fn eof_range(&self) -> TextRange {
        TextRange::empty((self.source.len() as u32).into())
    }

    pub(super) fn text(&self, token: &Token) -> &'src str {
        token_text(self.source, token)
    }
}

/// Parses `pattern` with default limits.
pub fn parse(pattern: &str) -> Result<Ast, PatternError> {
    Parser::new(pattern).parse()
}
