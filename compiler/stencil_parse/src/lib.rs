//! Parser for Stencil templates.
//!
//! [`parse_template`] runs the tokenizer and parses every interpolation
//! body into a property path and a filter pipeline, producing a
//! [`TemplateIr`]. Interpolation grammar:
//!
//! ```text
//! interpolation := path ( "|" filter )*
//! path          := ident ( "." ident )*
//! filter        := name ( ":" arg ( "," arg )* )?
//! arg           := quoted | bare
//! ```
//!
//! Filter names are checked against the registry here, so an unknown
//! filter never reaches evaluation. `number` and `time` must be given a
//! quoted pattern.

mod cursor;

use stencil_diagnostic::{CompileError, CompileErrorKind, CompileResult};
use stencil_ir::{
    Arg, FilterInvocation, FilterKind, Interpolation, PropertyPath, Segment, Span, TemplateIr,
};
use stencil_lexer::{lex_interpolation, InterpToken, InterpTokenKind, RawSegment, Tokenizer};

pub use cursor::Cursor;

/// Parse a whole template.
pub fn parse_template(source: &str) -> CompileResult<TemplateIr> {
    let mut segments = Vec::new();
    for raw in Tokenizer::new(source) {
        match raw? {
            RawSegment::Literal { text, span } => segments.push(Segment::Literal {
                text: text.to_string(),
                span,
            }),
            RawSegment::Interpolation {
                body,
                body_span,
                span,
            } => {
                let interp = parse_interpolation(body, body_span, span)?;
                segments.push(Segment::Interpolation(interp));
            }
        }
    }
    Ok(TemplateIr::new(segments))
}

/// Parse the body of one `{{ ... }}` token.
///
/// `body_span` locates `body` in the template; `span` covers the whole
/// token including delimiters.
pub fn parse_interpolation(body: &str, body_span: Span, span: Span) -> CompileResult<Interpolation> {
    let tokens = lex_interpolation(body, body_span.start);
    if tokens.is_empty() {
        return Err(CompileError::new(CompileErrorKind::EmptyInterpolation, span));
    }

    let mut parser = Parser::new(&tokens, Span::point(body_span.end));
    let path = parser.parse_path()?;
    let mut pipeline = Vec::new();
    while !parser.cursor.is_at_end() {
        parser.expect(InterpTokenKind::Pipe, "`|` or end of interpolation")?;
        pipeline.push(parser.parse_filter()?);
    }

    tracing::trace!(path = %path, filters = pipeline.len(), "parsed interpolation");
    Ok(Interpolation {
        path,
        pipeline,
        span,
    })
}

struct Parser<'t, 'src> {
    cursor: Cursor<'t, 'src>,
}

impl<'t, 'src> Parser<'t, 'src> {
    fn new(tokens: &'t [InterpToken<'src>], end: Span) -> Self {
        Parser {
            cursor: Cursor::new(tokens, end),
        }
    }

    fn parse_path(&mut self) -> CompileResult<PropertyPath> {
        let Some(token) = self
            .cursor
            .current()
            .filter(|t| matches!(t.kind, InterpTokenKind::Bare | InterpTokenKind::Quoted))
        else {
            return Err(self.unexpected("a property path"));
        };
        self.cursor.bump();

        let invalid = || {
            CompileError::new(
                CompileErrorKind::InvalidPropertyPath {
                    path: token.text.to_string(),
                },
                token.span,
            )
        };
        let segments: Vec<String> = token.text.split('.').map(str::to_string).collect();
        if token.kind == InterpTokenKind::Quoted || !segments.iter().all(|s| is_path_segment(s)) {
            return Err(invalid());
        }
        PropertyPath::new(segments, token.span).ok_or_else(invalid)
    }

    fn parse_filter(&mut self) -> CompileResult<FilterInvocation> {
        let Some(name) = self.cursor.eat(InterpTokenKind::Bare) else {
            self.reject_dangling_quote()?;
            return Err(CompileError::new(
                CompileErrorKind::MissingFilterName,
                self.cursor.current_span(),
            ));
        };
        let kind = FilterKind::from_name(name.text).ok_or_else(|| {
            CompileError::new(
                CompileErrorKind::UnknownFilter {
                    name: name.text.to_string(),
                },
                name.span,
            )
        })?;

        let mut args = Vec::new();
        if self.cursor.eat(InterpTokenKind::Colon).is_some() {
            loop {
                args.push(self.parse_arg(kind)?);
                if self.cursor.eat(InterpTokenKind::Comma).is_none() {
                    break;
                }
            }
        }

        if !self.cursor.is_at_end() && !self.cursor.check(InterpTokenKind::Pipe) {
            return Err(self.unexpected("`,`, `|` or end of interpolation"));
        }

        Ok(FilterInvocation {
            kind,
            args,
            span: name.span,
        })
    }

    fn parse_arg(&mut self, filter: FilterKind) -> CompileResult<Arg> {
        let Some(token) = self.cursor.current() else {
            return Err(self.unexpected("a filter argument"));
        };

        let arg = match token.kind {
            InterpTokenKind::Quoted => Arg::Str {
                value: token.unquoted().to_string(),
                span: token.span,
            },
            InterpTokenKind::Bare if filter.format_family().is_some() => {
                return Err(CompileError::new(
                    CompileErrorKind::UnquotedFormatArgument {
                        filter,
                        pattern: token.text.to_string(),
                    },
                    token.span,
                ));
            }
            InterpTokenKind::Bare => classify_bare(token),
            _ => return Err(self.unexpected("a filter argument")),
        };
        self.cursor.bump();
        Ok(arg)
    }

    fn expect(&mut self, kind: InterpTokenKind, expected: &'static str) -> CompileResult<()> {
        if self.cursor.eat(kind).is_some() {
            Ok(())
        } else {
            Err(self.unexpected(expected))
        }
    }

    /// A dangling quote is reported as such rather than as an unexpected token.
    fn reject_dangling_quote(&self) -> CompileResult<()> {
        if self.cursor.check(InterpTokenKind::UnterminatedQuote) {
            Err(CompileError::new(
                CompileErrorKind::UnterminatedQuote,
                self.cursor.current_span(),
            ))
        } else {
            Ok(())
        }
    }

    fn unexpected(&self, expected: &'static str) -> CompileError {
        if self.cursor.check(InterpTokenKind::UnterminatedQuote) {
            return CompileError::new(CompileErrorKind::UnterminatedQuote, self.cursor.current_span());
        }
        let found = self
            .cursor
            .current()
            .map_or_else(|| "end of interpolation".to_string(), |t| t.text.to_string());
        CompileError::new(
            CompileErrorKind::UnexpectedToken { found, expected },
            self.cursor.current_span(),
        )
    }
}

/// Bare tokens are numbers when they parse fully as a finite number.
fn classify_bare(token: InterpToken<'_>) -> Arg {
    match token.text.parse::<f64>() {
        Ok(value) if value.is_finite() => Arg::Number {
            value,
            span: token.span,
        },
        _ => Arg::Keyword {
            value: token.text.to_string(),
            span: token.span,
        },
    }
}

fn is_path_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '_' | '$' | '-'))
}

#[cfg(test)]
mod tests;
