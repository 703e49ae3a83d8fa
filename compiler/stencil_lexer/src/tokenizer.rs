//! Template-level tokenizer.
//!
//! Scans for the two-byte delimiters with `memchr::memmem`. Delimiters do
//! not nest: an interpolation ends at the first `}}` after its `{{`. A `}}`
//! outside an interpolation is ordinary literal text.

use memchr::memmem::Finder;
use stencil_diagnostic::{CompileError, CompileErrorKind, CompileResult};
use stencil_ir::Span;

/// Opening interpolation delimiter.
pub const OPEN: &str = "{{";
/// Closing interpolation delimiter.
pub const CLOSE: &str = "}}";

/// A span of template source: literal text or one interpolation token.
///
/// The spans of consecutive segments tile the source exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RawSegment<'src> {
    Literal {
        text: &'src str,
        span: Span,
    },
    Interpolation {
        /// Text between the delimiters, untrimmed.
        body: &'src str,
        body_span: Span,
        /// Whole token including `{{` and `}}`.
        span: Span,
    },
}

impl RawSegment<'_> {
    pub fn span(&self) -> Span {
        match self {
            RawSegment::Literal { span, .. } | RawSegment::Interpolation { span, .. } => *span,
        }
    }
}

/// Streaming tokenizer over a template string.
///
/// Yields `Err` at most once (for an unterminated `{{`) and then stops.
pub struct Tokenizer<'src> {
    source: &'src str,
    pos: usize,
    pending: Option<RawSegment<'src>>,
    failed: bool,
    open: Finder<'static>,
    close: Finder<'static>,
}

impl<'src> Tokenizer<'src> {
    pub fn new(source: &'src str) -> Self {
        Tokenizer {
            source,
            pos: 0,
            pending: None,
            failed: false,
            open: Finder::new(OPEN),
            close: Finder::new(CLOSE),
        }
    }

    fn literal(&self, start: usize, end: usize) -> RawSegment<'src> {
        RawSegment::Literal {
            text: &self.source[start..end],
            span: Span::from_range(start..end),
        }
    }
}

impl<'src> Iterator for Tokenizer<'src> {
    type Item = CompileResult<RawSegment<'src>>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(segment) = self.pending.take() {
            return Some(Ok(segment));
        }
        if self.failed || self.pos >= self.source.len() {
            return None;
        }

        let start = self.pos;
        let bytes = self.source.as_bytes();
        let Some(open_rel) = self.open.find(&bytes[start..]) else {
            self.pos = self.source.len();
            return Some(Ok(self.literal(start, self.source.len())));
        };

        let open_at = start + open_rel;
        let body_start = open_at + OPEN.len();
        let Some(close_rel) = self.close.find(&bytes[body_start..]) else {
            self.failed = true;
            return Some(Err(CompileError::new(
                CompileErrorKind::UnterminatedInterpolation,
                Span::from_range(open_at..body_start),
            )));
        };

        let body_end = body_start + close_rel;
        let token_end = body_end + CLOSE.len();
        let interpolation = RawSegment::Interpolation {
            body: &self.source[body_start..body_end],
            body_span: Span::from_range(body_start..body_end),
            span: Span::from_range(open_at..token_end),
        };
        self.pos = token_end;

        if open_at > start {
            self.pending = Some(interpolation);
            Some(Ok(self.literal(start, open_at)))
        } else {
            Some(Ok(interpolation))
        }
    }
}

/// Split `source` into literal and interpolation segments.
pub fn tokenize(source: &str) -> CompileResult<Vec<RawSegment<'_>>> {
    Tokenizer::new(source).collect()
}

#[cfg(test)]
mod tests;
