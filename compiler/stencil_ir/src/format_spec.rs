//! Numeric format pattern parser for the `number` filter.
//!
//! Parses the pattern syntax
//! `[[fill]align][sign][symbol][0][width][,][.precision][~][type]`
//! used in interpolations like `{{ price | number:"$,.2f" }}`.
//!
//! The parsed result ([`ParsedFormatSpec`]) is built once per distinct
//! pattern and cached by the evaluator's format cache.

use std::fmt;

/// Parsed numeric format pattern.
///
/// All fields are optional: an empty pattern produces [`ParsedFormatSpec::EMPTY`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParsedFormatSpec {
    /// Padding character (default: space).
    pub fill: Option<char>,
    /// Alignment direction.
    pub align: Option<Align>,
    /// Sign display.
    pub sign: Option<Sign>,
    /// Currency prefix (`$`).
    pub currency: bool,
    /// Alternate form (`#`): adds `0b`/`0o`/`0x` prefix.
    pub alternate: bool,
    /// Zero-pad (`0`): pads with zeros between sign and digits.
    pub zero_pad: bool,
    /// Minimum field width.
    pub width: Option<usize>,
    /// Thousands separator (`,`).
    pub grouping: bool,
    /// Decimal places (`f`, `e`, `%`) or significant digits (`g`).
    pub precision: Option<usize>,
    /// Trim insignificant trailing zeros (`~`).
    pub trim: bool,
    /// Type-specific format.
    pub format_type: Option<FormatType>,
}

impl ParsedFormatSpec {
    /// A spec with no formatting options set.
    pub const EMPTY: Self = Self {
        fill: None,
        align: None,
        sign: None,
        currency: false,
        alternate: false,
        zero_pad: false,
        width: None,
        grouping: false,
        precision: None,
        trim: false,
        format_type: None,
    };
}

/// Alignment direction for field padding.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Align {
    /// `<`: pad on the right.
    Left,
    /// `^`: pad equally on both sides.
    Center,
    /// `>`: pad on the left.
    Right,
}

/// Sign display mode.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    /// `+`: always show sign.
    Plus,
    /// `-`: show sign only for negatives (default).
    Minus,
    /// ` `: space for positive, `-` for negative.
    Space,
}

/// Type-specific formatting mode.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FormatType {
    /// `b`: binary integer.
    Binary,
    /// `o`: octal integer.
    Octal,
    /// `d`: decimal integer (rounded).
    Decimal,
    /// `x`: lowercase hexadecimal.
    Hex,
    /// `X`: uppercase hexadecimal.
    HexUpper,
    /// `e`: lowercase scientific notation.
    Exp,
    /// `E`: uppercase scientific notation.
    ExpUpper,
    /// `f`: fixed-point decimal.
    Fixed,
    /// `g`: fixed or scientific, by significant digits.
    General,
    /// `%`: percentage (multiply by 100, append `%`).
    Percent,
}

impl FormatType {
    /// Returns `true` if this format rounds the value to an integer.
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            Self::Binary | Self::Octal | Self::Decimal | Self::Hex | Self::HexUpper
        )
    }
}

/// Largest width or precision a pattern may request.
pub const MAX_FIELD: usize = 1024;

/// Error from parsing a numeric format pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormatSpecError {
    /// Unknown format type character (e.g., `z`).
    UnknownType(char),
    /// Trailing characters after a valid spec.
    TrailingCharacters(String),
    /// Width is not a number or exceeds [`MAX_FIELD`].
    InvalidWidth(String),
    /// Precision is not a number or exceeds [`MAX_FIELD`].
    InvalidPrecision(String),
}

impl fmt::Display for FormatSpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownType(c) => write!(f, "unknown format type '{c}'"),
            Self::TrailingCharacters(s) => write!(f, "unexpected characters '{s}' in format spec"),
            Self::InvalidWidth(s) => write!(f, "invalid width '{s}' (at most {MAX_FIELD})"),
            Self::InvalidPrecision(s) => {
                write!(f, "invalid precision '{s}' (at most {MAX_FIELD})")
            }
        }
    }
}

impl std::error::Error for FormatSpecError {}

/// Parse a numeric format pattern.
///
/// Syntax: `[[fill]align][sign][symbol][0][width][,][.precision][~][type]`
///
/// # Examples
///
/// ```
/// use stencil_ir::format_spec::{parse_format_spec, FormatType};
///
/// let spec = parse_format_spec(".3f").unwrap_or_default();
/// assert_eq!(spec.precision, Some(3));
/// assert_eq!(spec.format_type, Some(FormatType::Fixed));
/// ```
pub fn parse_format_spec(spec: &str) -> Result<ParsedFormatSpec, FormatSpecError> {
    if spec.is_empty() {
        return Ok(ParsedFormatSpec::EMPTY);
    }

    let mut result = ParsedFormatSpec::EMPTY;
    let chars: Vec<char> = spec.chars().collect();
    let mut pos = 0;

    // [[fill]align]: if chars[1] is an alignment char, chars[0] is the fill.
    if chars.len() >= 2 && is_align_char(chars[1]) {
        result.fill = Some(chars[0]);
        result.align = parse_align(chars[1]);
        pos = 2;
    } else if is_align_char(chars[0]) {
        result.align = parse_align(chars[0]);
        pos = 1;
    }

    // [sign]
    if let Some(&c) = chars.get(pos) {
        let sign = match c {
            '+' => Some(Sign::Plus),
            '-' => Some(Sign::Minus),
            ' ' => Some(Sign::Space),
            _ => None,
        };
        if sign.is_some() {
            result.sign = sign;
            pos += 1;
        }
    }

    // [symbol]
    match chars.get(pos) {
        Some('$') => {
            result.currency = true;
            pos += 1;
        }
        Some('#') => {
            result.alternate = true;
            pos += 1;
        }
        _ => {}
    }

    // [0] zero-pad, only when it is not the whole width ("0" followed by digits,
    // or a lone "0" before grouping/precision/type/end).
    if chars.get(pos) == Some(&'0') {
        match chars.get(pos + 1) {
            Some(c) if c.is_ascii_digit() => {
                result.zero_pad = true;
                pos += 1;
            }
            None | Some(',' | '.' | '~') => {
                result.zero_pad = true;
                pos += 1;
            }
            Some(&c) if is_format_type(c) => {
                result.zero_pad = true;
                pos += 1;
            }
            _ => {}
        }
    }

    // [width]
    let width_start = pos;
    while chars.get(pos).is_some_and(char::is_ascii_digit) {
        pos += 1;
    }
    if pos > width_start {
        let width_str: String = chars[width_start..pos].iter().collect();
        result.width = Some(
            parse_bounded(&width_str).ok_or(FormatSpecError::InvalidWidth(width_str))?,
        );
    }

    // [,]
    if chars.get(pos) == Some(&',') {
        result.grouping = true;
        pos += 1;
    }

    // [.precision]
    if chars.get(pos) == Some(&'.') {
        pos += 1;
        let prec_start = pos;
        while chars.get(pos).is_some_and(char::is_ascii_digit) {
            pos += 1;
        }
        if pos > prec_start {
            let prec_str: String = chars[prec_start..pos].iter().collect();
            result.precision = Some(
                parse_bounded(&prec_str).ok_or(FormatSpecError::InvalidPrecision(prec_str))?,
            );
        } else {
            return Err(FormatSpecError::InvalidPrecision(String::new()));
        }
    }

    // [~]
    if chars.get(pos) == Some(&'~') {
        result.trim = true;
        pos += 1;
    }

    // [type]
    if let Some(&type_char) = chars.get(pos) {
        result.format_type = Some(match type_char {
            'b' => FormatType::Binary,
            'o' => FormatType::Octal,
            'd' => FormatType::Decimal,
            'x' => FormatType::Hex,
            'X' => FormatType::HexUpper,
            'e' => FormatType::Exp,
            'E' => FormatType::ExpUpper,
            'f' => FormatType::Fixed,
            'g' => FormatType::General,
            '%' => FormatType::Percent,
            c => return Err(FormatSpecError::UnknownType(c)),
        });
        pos += 1;
    }

    if pos < chars.len() {
        let trailing: String = chars[pos..].iter().collect();
        return Err(FormatSpecError::TrailingCharacters(trailing));
    }

    Ok(result)
}

impl Default for ParsedFormatSpec {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// A width or precision, rejecting values above [`MAX_FIELD`].
fn parse_bounded(digits: &str) -> Option<usize> {
    digits.parse().ok().filter(|&n| n <= MAX_FIELD)
}

fn is_align_char(c: char) -> bool {
    matches!(c, '<' | '>' | '^')
}

fn parse_align(c: char) -> Option<Align> {
    match c {
        '<' => Some(Align::Left),
        '^' => Some(Align::Center),
        '>' => Some(Align::Right),
        _ => None,
    }
}

fn is_format_type(c: char) -> bool {
    matches!(
        c,
        'b' | 'o' | 'd' | 'x' | 'X' | 'e' | 'E' | 'f' | 'g' | '%'
    )
}

#[cfg(test)]
mod tests;
