//! Token cursor for navigating an interpolation's token list.

use stencil_ir::Span;
use stencil_lexer::{InterpToken, InterpTokenKind};

/// Cursor over the tokens of one interpolation body.
///
/// There is no EOF token: `current()` returns `None` past the end and
/// `end_span()` points just after the last token.
pub struct Cursor<'t, 'src> {
    tokens: &'t [InterpToken<'src>],
    pos: usize,
    end: Span,
}

impl<'t, 'src> Cursor<'t, 'src> {
    pub fn new(tokens: &'t [InterpToken<'src>], end: Span) -> Self {
        Cursor {
            tokens,
            pos: 0,
            end,
        }
    }

    #[inline]
    pub fn current(&self) -> Option<InterpToken<'src>> {
        self.tokens.get(self.pos).copied()
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Span of the current token, or the end-of-body point.
    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().map_or(self.end, |t| t.span)
    }

    #[inline]
    pub fn check(&self, kind: InterpTokenKind) -> bool {
        self.current().is_some_and(|t| t.kind == kind)
    }

    /// Consume the current token if it has `kind`.
    pub fn eat(&mut self, kind: InterpTokenKind) -> Option<InterpToken<'src>> {
        let token = self.current().filter(|t| t.kind == kind)?;
        self.pos += 1;
        Some(token)
    }

    /// Consume and return the current token, whatever it is.
    pub fn bump(&mut self) -> Option<InterpToken<'src>> {
        let token = self.current()?;
        self.pos += 1;
        Some(token)
    }
}
