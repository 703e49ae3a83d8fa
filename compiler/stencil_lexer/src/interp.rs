//! Lexer for the body of a single interpolation, using logos.
//!
//! Produces a flat token list; whitespace between tokens, including
//! non-ASCII spaces such as U+00A0, is skipped so
//! `a | lower | mid : 3, 5` and `a|lower|mid:3,5` lex identically.

use logos::Logos;
use stencil_ir::Span;

/// Raw token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
// Unicode whitespace, plus the byte order mark.
#[logos(skip r"[\s\u{FEFF}]+")]
enum RawToken {
    #[token("|")]
    Pipe,
    #[token(":")]
    Colon,
    #[token(",")]
    Comma,
    #[regex(r"'[^']*'")]
    SingleQuoted,
    #[regex(r#""[^"]*""#)]
    DoubleQuoted,
    // Paths, filter names, numbers and keywords.
    #[regex(r#"[^\s\u{FEFF}|:,'"]+"#)]
    Bare,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InterpTokenKind {
    Pipe,
    Colon,
    Comma,
    /// `'...'` or `"..."`; no escapes inside.
    Quoted,
    /// Run of characters up to the next separator, quote or whitespace.
    Bare,
    /// A quote with no matching closing quote.
    UnterminatedQuote,
}

/// A token inside an interpolation body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InterpToken<'src> {
    pub kind: InterpTokenKind,
    /// Source text of the token, quotes included.
    pub text: &'src str,
    /// Template-level span.
    pub span: Span,
}

impl<'src> InterpToken<'src> {
    /// Text of a quoted token without its quotes; other tokens unchanged.
    pub fn unquoted(&self) -> &'src str {
        match self.kind {
            InterpTokenKind::Quoted => &self.text[1..self.text.len() - 1],
            _ => self.text,
        }
    }
}

/// Lex an interpolation body. `base` is the body's template-level offset.
pub fn lex_interpolation(body: &str, base: u32) -> Vec<InterpToken<'_>> {
    let mut lexer = RawToken::lexer(body);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = Span::from_range(lexer.span()).offset(base);
        let text = lexer.slice();
        let kind = match result {
            Ok(RawToken::Pipe) => InterpTokenKind::Pipe,
            Ok(RawToken::Colon) => InterpTokenKind::Colon,
            Ok(RawToken::Comma) => InterpTokenKind::Comma,
            Ok(RawToken::SingleQuoted | RawToken::DoubleQuoted) => InterpTokenKind::Quoted,
            Ok(RawToken::Bare) => InterpTokenKind::Bare,
            // Every other character is covered by `Bare`, so only a
            // dangling quote can fail to match.
            Err(()) => InterpTokenKind::UnterminatedQuote,
        };
        tokens.push(InterpToken { kind, text, span });
    }

    tokens
}
