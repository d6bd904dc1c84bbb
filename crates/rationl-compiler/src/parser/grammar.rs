//! Grammar productions, lowest precedence first:
//! alternation `|` < concatenation < repetition `* + ? {m,n}` < atoms.

use rationl_automata::Look;
use rowan::{TextRange, TextSize};

use super::ast::{Node, NodeId};
use super::class::parse_class;
use super::class_set::ClassSet;
use super::core::Parser;
use super::escape::{self, Escape};
use super::lexer::{Token, TokenKind};
use crate::diagnostics::{ErrorKind, PatternError};

type Bounds = (u32, Option<u32>);

impl Parser<'_> {
    pub(super) fn parse_alternation(&mut self) -> Result<NodeId, PatternError> {
        let start = self.offset();
        let first = self.parse_concat()?;
        if self.current() != Some(TokenKind::Pipe) {
            return Ok(first);
        }

        let mut branches = vec![first];
        while self.eat(TokenKind::Pipe) {
            branches.push(self.parse_concat()?);
        }
        let end = self.end_of(branches[branches.len() - 1]);
        Ok(self.push(Node::Alternate(branches), start, end))
    }

    fn parse_concat(&mut self) -> Result<NodeId, PatternError> {
        let start = self.offset();
        let mut items = Vec::new();
        while let Some(kind) = self.current() {
            if matches!(kind, TokenKind::Pipe | TokenKind::ParenClose) {
                break;
            }
            items.push(self.parse_repeat()?);
        }

        match items.len() {
            0 => Ok(self.push(Node::Empty, start, start)),
            1 => Ok(items[0]),
            _ => {
                let end = self.end_of(items[items.len() - 1]);
                Ok(self.push(Node::Concat(items), start, end))
            }
        }
    }

    fn parse_repeat(&mut self) -> Result<NodeId, PatternError> {
        let start = self.offset();
        let atom = self.parse_atom()?;
        let Some(token) = self.current_token().filter(|t| t.kind.is_quantifier()) else {
            return Ok(atom);
        };

        let (min, max) = self.parse_quantifier(&token)?;
        self.bump();

        if let Some(next) = self.current_token().filter(|t| t.kind.is_quantifier()) {
            return Err(PatternError::new(ErrorKind::DanglingOperator, next.span)
                .with_message("quantifier cannot follow another quantifier")
                .with_hint("wrap the repeated part in a group, like `(a*)*`"));
        }

        let end = u32::from(token.span.end());
        Ok(self.push(Node::Repeat { child: atom, min, max }, start, end))
    }

    fn parse_quantifier(&self, token: &Token) -> Result<Bounds, PatternError> {
        match token.kind {
            TokenKind::Star => Ok((0, None)),
            TokenKind::Plus => Ok((1, None)),
            TokenKind::Question => Ok((0, Some(1))),
            _ => self.parse_bounds(token),
        }
    }

    /// Decodes `{m}`, `{m,}` or `{m,n}`; the lexer guarantees the shape.
    fn parse_bounds(&self, token: &Token) -> Result<Bounds, PatternError> {
        let text = self.text(token);
        let inner = &text[1..text.len() - 1];
        let overflow = || {
            PatternError::new(ErrorKind::InvalidRepetitionBounds, token.span)
                .with_message(format!("repetition bound in `{text}` does not fit in 32 bits"))
        };

        let (min, max) = match inner.split_once(',') {
            None => {
                let n = inner.parse::<u32>().map_err(|_| overflow())?;
                (n, Some(n))
            }
            Some((min, "")) => (min.parse::<u32>().map_err(|_| overflow())?, None),
            Some((min, max)) => (
                min.parse::<u32>().map_err(|_| overflow())?,
                Some(max.parse::<u32>().map_err(|_| overflow())?),
            ),
        };

        match max {
            Some(max) if min > max => Err(PatternError::new(
                ErrorKind::InvalidRepetitionBounds,
                token.span,
            )
            .with_message(format!(
                "repetition lower bound {min} exceeds upper bound {max}"
            ))),
            _ => Ok((min, max)),
        }
    }

    fn parse_atom(&mut self) -> Result<NodeId, PatternError> {
        let token = self.expect_token();
        let start = u32::from(token.span.start());
        let end = u32::from(token.span.end());

        let node = match token.kind {
            TokenKind::ParenOpen | TokenKind::GroupOpenNonCapturing => {
                return self.parse_group(token);
            }
            TokenKind::Star | TokenKind::Plus | TokenKind::Question | TokenKind::Repetition => {
                return Err(PatternError::new(ErrorKind::DanglingOperator, token.span));
            }
            TokenKind::UnterminatedClass => {
                return Err(PatternError::new(ErrorKind::UnterminatedClass, self.eof_range())
                    .related_to("class opened here", first_char(token.span)));
            }
            TokenKind::Caret => Node::Anchor(Look::Start),
            TokenKind::Dollar => Node::Anchor(Look::End),
            TokenKind::Dot => Node::Class(ClassSet::any_except_newline()),
            TokenKind::Class => {
                Node::Class(parse_class(self.text(&token), token.span.start().into())?)
            }
            TokenKind::Escape => match escape::decode(self.text(&token)) {
                Some(Escape::Char(c)) => Node::Literal(c),
                Some(Escape::Class(set)) => Node::Class(set),
                None => return Err(self.invalid_escape(&token)),
            },
            TokenKind::Literal => Node::Literal(self.literal_char(&token)),
            TokenKind::Pipe | TokenKind::ParenClose => self.unreachable_atom(&token),
        };

        self.bump();
        Ok(self.push(node, start, end))
    }

    fn parse_group(&mut self, open: Token) -> Result<NodeId, PatternError> {
        if self.depth >= self.nesting_limit {
            return Err(PatternError::new(ErrorKind::NestingTooDeep, first_char(open.span))
                .with_message(format!(
                    "groups are nested more than {} levels deep",
                    self.nesting_limit
                )));
        }
        self.bump();

        let index = if open.kind == TokenKind::ParenOpen {
            self.group_count += 1;
            Some(self.group_count)
        } else {
            None
        };

        self.depth += 1;
        let child = self.parse_alternation()?;
        self.depth -= 1;

        if !self.eat(TokenKind::ParenClose) {
            return Err(PatternError::new(ErrorKind::UnbalancedGroup, self.eof_range())
                .with_message("missing closing `)`")
                .related_to("group opened here", first_char(open.span)));
        }

        let start = u32::from(open.span.start());
        let end = self.offset_after_previous();
        Ok(self.push(Node::Group { child, index }, start, end))
    }

    fn invalid_escape(&self, token: &Token) -> PatternError {
        let text = self.text(token);
        let error = PatternError::new(ErrorKind::InvalidEscape, token.span);
        if text == "\\" {
            return error.with_message("pattern ends with a lone `\\`");
        }
        error.with_message(format!("invalid escape `{text}`"))
    }

    fn push(&mut self, node: Node, start: u32, end: u32) -> NodeId {
        self.ast
            .push(node, TextRange::new(start.into(), end.into()))
    }

    fn end_of(&self, id: NodeId) -> u32 {
        self.ast.range(id).end().into()
    }

    fn offset_after_previous(&self) -> u32 {
        self.tokens[self.pos - 1].span.end().into()
    }
}

/// The one-character range at the start of `span`, used for opening delimiters.
fn first_char(span: TextRange) -> TextRange {
    TextRange::at(span.start(), TextSize::from(1))
}
