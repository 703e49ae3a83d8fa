//! Formatter objects for the `number` and `time` filters.
//!
//! A formatter is built once per distinct pattern, validated when it is
//! built, and shared through the [`FormatCache`](crate::FormatCache).

mod number;
mod time;

use stencil_diagnostic::CompileErrorKind;
use stencil_ir::FormatFamily;

pub use number::NumberFormat;
pub use time::TimeFormat;

/// A parsed pattern of either family.
#[derive(Clone, Debug, PartialEq)]
pub enum Formatter {
    Number(NumberFormat),
    Time(TimeFormat),
}

/// A pattern that could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid {family} format pattern \"{pattern}\": {reason}")]
pub struct FormatError {
    pub family: FormatFamily,
    pub pattern: String,
    pub reason: String,
}

impl Formatter {
    /// Parse `pattern` as a formatter of `family`.
    pub fn parse(family: FormatFamily, pattern: &str) -> Result<Formatter, FormatError> {
        let parsed = match family {
            FormatFamily::Number => NumberFormat::parse(pattern)
                .map(Formatter::Number)
                .map_err(|e| e.to_string()),
            FormatFamily::Time => TimeFormat::parse(pattern).map(Formatter::Time),
        };
        parsed.map_err(|reason| FormatError {
            family,
            pattern: pattern.to_string(),
            reason,
        })
    }

    pub fn family(&self) -> FormatFamily {
        match self {
            Formatter::Number(_) => FormatFamily::Number,
            Formatter::Time(_) => FormatFamily::Time,
        }
    }

    pub fn pattern(&self) -> &str {
        match self {
            Formatter::Number(format) => format.pattern(),
            Formatter::Time(format) => format.pattern(),
        }
    }
}

impl From<FormatError> for CompileErrorKind {
    fn from(err: FormatError) -> Self {
        CompileErrorKind::InvalidFormatPattern {
            family: err.family,
            pattern: err.pattern,
            reason: err.reason,
        }
    }
}

#[cfg(test)]
mod tests;
