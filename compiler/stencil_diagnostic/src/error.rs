//! Compile error types.

use ariadne::{Config, Label, Report, ReportKind, Source};
use stencil_ir::{FilterKind, FormatFamily, Span};

use crate::ErrorCode;

/// Result of any compile-time phase.
pub type CompileResult<T> = Result<T, CompileError>;

/// What went wrong while compiling a template.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CompileErrorKind {
    #[error("unterminated interpolation: `{{{{` has no matching `}}}}`")]
    UnterminatedInterpolation,

    #[error("empty interpolation: expected a property path between `{{{{` and `}}}}`")]
    EmptyInterpolation,

    #[error("invalid property path `{path}`")]
    InvalidPropertyPath { path: String },

    #[error("unknown filter `{name}`")]
    UnknownFilter { name: String },

    #[error("expected a filter name after `|`")]
    MissingFilterName,

    #[error("unterminated quoted argument")]
    UnterminatedQuote,

    #[error("unexpected `{found}`, expected {expected}")]
    UnexpectedToken {
        found: String,
        expected: &'static str,
    },

    #[error("format pattern for `{filter}` must be quoted: {pattern}")]
    UnquotedFormatArgument { filter: FilterKind, pattern: String },

    #[error("filter `{filter}` takes {}, got {got}", describe_arity(.min, .max))]
    WrongArgumentCount {
        filter: FilterKind,
        min: usize,
        max: usize,
        got: usize,
    },

    #[error("invalid argument to `{filter}`: {reason}")]
    InvalidArgument { filter: FilterKind, reason: String },

    #[error("invalid {family} format pattern \"{pattern}\": {reason}")]
    InvalidFormatPattern {
        family: FormatFamily,
        pattern: String,
        reason: String,
    },

    #[error("context parameter `{name}` is not a valid identifier")]
    InvalidContextParam { name: String },
}

fn describe_arity(min: &usize, max: &usize) -> String {
    let plural = |n: usize| if n == 1 { "argument" } else { "arguments" };
    if min == max {
        format!("{min} {}", plural(*min))
    } else {
        format!("{min} to {max} {}", plural(*max))
    }
}

impl CompileErrorKind {
    /// Stable error code for this kind.
    pub fn code(&self) -> ErrorCode {
        match self {
            CompileErrorKind::UnterminatedInterpolation => ErrorCode::E0001,
            CompileErrorKind::EmptyInterpolation => ErrorCode::E1001,
            CompileErrorKind::InvalidPropertyPath { .. } => ErrorCode::E1002,
            CompileErrorKind::UnknownFilter { .. } => ErrorCode::E1003,
            CompileErrorKind::MissingFilterName => ErrorCode::E1004,
            CompileErrorKind::UnterminatedQuote => ErrorCode::E1005,
            CompileErrorKind::UnexpectedToken { .. } => ErrorCode::E1006,
            CompileErrorKind::UnquotedFormatArgument { .. } => ErrorCode::E1007,
            CompileErrorKind::WrongArgumentCount { .. } => ErrorCode::E2001,
            CompileErrorKind::InvalidArgument { .. } => ErrorCode::E2002,
            CompileErrorKind::InvalidFormatPattern { .. } => ErrorCode::E2003,
            CompileErrorKind::InvalidContextParam { .. } => ErrorCode::E3001,
        }
    }

    /// Short text attached to the highlighted span.
    fn label(&self) -> &'static str {
        match self {
            CompileErrorKind::UnterminatedInterpolation => "opened here",
            CompileErrorKind::EmptyInterpolation => "nothing to interpolate",
            CompileErrorKind::InvalidPropertyPath { .. } => "not a dotted property path",
            CompileErrorKind::UnknownFilter { .. } => "no filter with this name",
            CompileErrorKind::MissingFilterName => "filter name expected here",
            CompileErrorKind::UnterminatedQuote => "quote opened here",
            CompileErrorKind::UnexpectedToken { .. } => "unexpected",
            CompileErrorKind::UnquotedFormatArgument { .. } => "wrap the pattern in quotes",
            CompileErrorKind::WrongArgumentCount { .. } => "in this filter",
            CompileErrorKind::InvalidArgument { .. } => "invalid argument",
            CompileErrorKind::InvalidFormatPattern { .. } => "invalid pattern",
            CompileErrorKind::InvalidContextParam { .. } => "emitting this template",
        }
    }
}

/// A compile error located in template source.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct CompileError {
    pub kind: CompileErrorKind,
    pub span: Span,
}

impl CompileError {
    pub fn new(kind: CompileErrorKind, span: Span) -> Self {
        CompileError { kind, span }
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    /// Render the error as a labelled snippet of `source`.
    ///
    /// `source` must be the template text the error was produced from.
    /// Output is plain text (no ANSI colors).
    pub fn render(&self, source: &str) -> String {
        let end = (self.span.end as usize).min(source.len());
        let start = (self.span.start as usize).min(end);
        let mut out = Vec::new();
        let written = Report::build(ReportKind::Error, (), start)
            .with_code(self.code())
            .with_message(&self.kind)
            .with_label(Label::new(start..end).with_message(self.kind.label()))
            .with_config(Config::default().with_color(false))
            .finish()
            .write(Source::from(source), &mut out);
        match written {
            Ok(()) => String::from_utf8_lossy(&out).into_owned(),
            Err(_) => format!("error[{}]: {} at {}", self.code(), self.kind, self.span),
        }
    }
}
