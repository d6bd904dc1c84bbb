//! Builder-pattern printer for rendering pattern errors.

use std::fmt::Write;

use annotate_snippets::{AnnotationKind, Level, Renderer, Snippet};
use rowan::TextRange;

use super::error::PatternError;

/// Renders a `PatternError` against the pattern it came from.
pub struct ErrorPrinter<'e, 's> {
    error: &'e PatternError,
    source: &'s str,
    path: Option<&'s str>,
    colored: bool,
}

impl<'e, 's> ErrorPrinter<'e, 's> {
    pub fn new(error: &'e PatternError, source: &'s str) -> Self {
        Self {
            error,
            source,
            path: None,
            colored: false,
        }
    }

    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let limit = self.source.len();
        let mut primary = AnnotationKind::Primary.span(adjust_range(self.error.text_range(), limit));
        if let Some(hint) = self.error.hint() {
            primary = primary.label(hint);
        }

        let mut snippet = Snippet::source(self.source).line_start(1).annotation(primary);
        if let Some(p) = self.path {
            snippet = snippet.path(p);
        }
        if let Some(related) = self.error.related() {
            snippet = snippet.annotation(
                AnnotationKind::Context
                    .span(adjust_range(related.range, limit))
                    .label(&related.message),
            );
        }

        let report = vec![Level::ERROR.primary_title(self.error.message()).element(snippet)];
        write!(w, "{}", renderer.render(&report))
    }
}

/// Empty spans (end of pattern) still need one column to point at.
fn adjust_range(range: TextRange, limit: usize) -> std::ops::Range<usize> {
    let start: usize = range.start().into();
    let end: usize = range.end().into();

    if start == end {
        return start..(start + 1).min(limit);
    }

    start..end
}

impl PatternError {
    pub fn printer<'e, 's>(&'e self, source: &'s str) -> ErrorPrinter<'e, 's> {
        ErrorPrinter::new(self, source)
    }
}
