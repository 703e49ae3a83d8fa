use std::fmt;

/// Error codes for all compile diagnostics.
///
/// Format: E#### where the first digit indicates the phase:
/// - E0xxx: Tokenizer errors
/// - E1xxx: Interpolation parser errors
/// - E2xxx: Filter resolution errors
/// - E3xxx: Source emission errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Tokenizer Errors (E0xxx)
    /// `{{` without a matching `}}`
    E0001,

    // Parser Errors (E1xxx)
    /// Empty interpolation
    E1001,
    /// Malformed property path
    E1002,
    /// Unknown filter name
    E1003,
    /// Missing filter name after `|`
    E1004,
    /// Unterminated quoted argument
    E1005,
    /// Unexpected token inside an interpolation
    E1006,
    /// Format pattern written without quotes
    E1007,

    // Filter Resolution Errors (E2xxx)
    /// Wrong number of filter arguments
    E2001,
    /// Argument of the wrong kind or out of range
    E2002,
    /// Invalid numeric or date format pattern
    E2003,

    // Emission Errors (E3xxx)
    /// Context parameter is not an identifier
    E3001,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E3001 => "E3001",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
