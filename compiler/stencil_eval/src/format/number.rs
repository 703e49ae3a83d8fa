//! Numeric formatting for the `number` filter.
//!
//! Supports:
//! - Integer types: decimal, binary, octal, hex, with `#` prefixes
//! - Fractional types: fixed-point, scientific, general, percentage
//! - Sign, `$` symbol, zero-padding, thousands grouping, `~` trimming
//! - Width with fill and alignment (numbers align right by default)

use stencil_ir::format_spec::{
    parse_format_spec, Align, FormatSpecError, FormatType, ParsedFormatSpec, Sign,
};

use crate::value::format_number;

/// A compiled numeric pattern such as `".3f"` or `"$,.2f"`.
#[derive(Clone, Debug, PartialEq)]
pub struct NumberFormat {
    pattern: String,
    spec: ParsedFormatSpec,
}

impl NumberFormat {
    pub fn parse(pattern: &str) -> Result<Self, FormatSpecError> {
        Ok(NumberFormat {
            pattern: pattern.to_string(),
            spec: parse_format_spec(pattern)?,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Format `value` according to the pattern.
    pub fn format(&self, value: f64) -> String {
        let spec = &self.spec;
        if !value.is_finite() {
            let body = if value.is_nan() { "NaN" } else { "Infinity" };
            let sign = format_sign(value < 0.0, spec);
            return apply_alignment(&format!("{sign}{body}"), spec);
        }

        let (negative, prefix, mut digits) = match spec.format_type {
            Some(ty) if ty.is_integer() => format_int(value, ty, spec.alternate),
            ty => {
                let digits = format_float(value.abs(), ty, spec.precision);
                (value < 0.0 && !is_zero_text(&digits), "", digits)
            }
        };

        if spec.trim {
            digits = trim_insignificant_zeros(&digits);
        }
        let radix_digits = matches!(
            spec.format_type,
            Some(FormatType::Binary | FormatType::Octal | FormatType::Hex | FormatType::HexUpper)
        );
        if spec.grouping && !radix_digits {
            digits = group_thousands(&digits);
        }

        let sign = format_sign(negative, spec);
        let symbol = if spec.currency { "$" } else { prefix };

        // Zero-padding goes between sign/symbol and digits.
        if spec.zero_pad {
            if let Some(width) = spec.width {
                let core_len = sign.len() + symbol.len() + digits.chars().count();
                if core_len < width {
                    let pad = width - sign.len() - symbol.len();
                    return format!("{sign}{symbol}{digits:0>pad$}");
                }
            }
        }

        apply_alignment(&format!("{sign}{symbol}{digits}"), spec)
    }
}

/// Round to an integer and render it in the type's radix.
///
/// Returns `(negative, prefix, digits)`.
fn format_int(value: f64, ty: FormatType, alternate: bool) -> (bool, &'static str, String) {
    let rounded = value.round();
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "saturating cast of a finite, non-negative rounded value"
    )]
    let magnitude = rounded.abs() as u64;

    let (digits, prefix) = match ty {
        FormatType::Binary => (format!("{magnitude:b}"), "0b"),
        FormatType::Octal => (format!("{magnitude:o}"), "0o"),
        FormatType::Hex => (format!("{magnitude:x}"), "0x"),
        FormatType::HexUpper => (format!("{magnitude:X}"), "0X"),
        _ => (magnitude.to_string(), ""),
    };
    let prefix = if alternate { prefix } else { "" };
    (rounded < 0.0, prefix, digits)
}

/// Render a non-negative finite value for the fractional types.
fn format_float(abs: f64, ty: Option<FormatType>, precision: Option<usize>) -> String {
    match ty {
        Some(FormatType::Fixed) => {
            let prec = precision.unwrap_or(6);
            format!("{abs:.prec$}")
        }
        Some(FormatType::Exp) => format_scientific(abs, false, precision),
        Some(FormatType::ExpUpper) => format_scientific(abs, true, precision),
        Some(FormatType::General) => format_general(abs, precision.unwrap_or(6)),
        Some(FormatType::Percent) => {
            let pct = abs * 100.0;
            match precision {
                Some(prec) => format!("{pct:.prec$}%"),
                None => format!("{}%", trim_insignificant_zeros(&format!("{pct:.6}"))),
            }
        }
        // No type: plain number text, or significant digits when a
        // precision is given.
        _ => match precision {
            Some(prec) => trim_insignificant_zeros(&format_general(abs, prec)),
            None => format_number(abs),
        },
    }
}

/// Scientific notation with an explicit exponent sign, e.g. `1.23e+4`.
///
/// Without a precision the shortest exact mantissa is used.
fn format_scientific(abs: f64, uppercase: bool, precision: Option<usize>) -> String {
    let text = match precision {
        Some(prec) => format!("{abs:.prec$e}"),
        None => format!("{abs:e}"),
    };
    let e = if uppercase { 'E' } else { 'e' };
    match text.split_once('e') {
        Some((mantissa, exp)) => match exp.strip_prefix('-') {
            Some(exp) => format!("{mantissa}{e}-{exp}"),
            None => format!("{mantissa}{e}+{exp}"),
        },
        None => text,
    }
}

/// `precision` significant digits, switching to scientific notation for
/// very small or very large magnitudes.
fn format_general(abs: f64, precision: usize) -> String {
    let precision = precision.max(1);
    let decimals = precision - 1;
    if abs == 0.0 {
        return format!("{abs:.decimals$}");
    }

    // Take the exponent after rounding to `precision` digits, so 9.99 at
    // two digits counts as 1.0e1.
    let rounded = format!("{abs:.decimals$e}");
    let exp: i64 = rounded
        .split_once('e')
        .and_then(|(_, exp)| exp.parse().ok())
        .unwrap_or(0);
    let digits = i64::try_from(precision).unwrap_or(i64::MAX);

    if exp < -4 || exp >= digits {
        format_scientific(abs, false, Some(decimals))
    } else {
        let decimals = usize::try_from(digits - 1 - exp).unwrap_or(0);
        format!("{abs:.decimals$}")
    }
}

/// Drop trailing zeros after the decimal point, and the point itself if
/// nothing is left after it. Exponent and `%` suffixes are kept.
fn trim_insignificant_zeros(text: &str) -> String {
    let split = text
        .find(|c| matches!(c, 'e' | 'E' | '%'))
        .unwrap_or(text.len());
    let (body, suffix) = text.split_at(split);
    if !body.contains('.') {
        return text.to_string();
    }
    let body = body.trim_end_matches('0').trim_end_matches('.');
    format!("{body}{suffix}")
}

/// Insert `,` every three digits of the integer part.
fn group_thousands(digits: &str) -> String {
    let int_len = digits.bytes().take_while(u8::is_ascii_digit).count();
    let (int_part, rest) = digits.split_at(int_len);
    let mut out = String::with_capacity(digits.len() + int_len / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out.push_str(rest);
    out
}

/// Whether rendered digits denote zero, so `-0.0001` at `.2f` prints `0.00`.
fn is_zero_text(digits: &str) -> bool {
    digits
        .chars()
        .take_while(|c| !matches!(c, 'e' | 'E' | '%'))
        .all(|c| c == '0' || c == '.')
}

/// Apply width and alignment to formatted text.
fn apply_alignment(s: &str, spec: &ParsedFormatSpec) -> String {
    let Some(width) = spec.width else {
        return s.to_string();
    };

    let len = s.chars().count();
    if len >= width {
        return s.to_string();
    }

    let fill = spec.fill.unwrap_or(' ');
    let padding = width - len;

    match spec.align.unwrap_or(Align::Right) {
        Align::Left => {
            let right_pad: String = std::iter::repeat_n(fill, padding).collect();
            format!("{s}{right_pad}")
        }
        Align::Right => {
            let left_pad: String = std::iter::repeat_n(fill, padding).collect();
            format!("{left_pad}{s}")
        }
        Align::Center => {
            let left = padding / 2;
            let right = padding - left;
            let left_pad: String = std::iter::repeat_n(fill, left).collect();
            let right_pad: String = std::iter::repeat_n(fill, right).collect();
            format!("{left_pad}{s}{right_pad}")
        }
    }
}

/// Build the sign prefix for a numeric value.
fn format_sign(is_negative: bool, spec: &ParsedFormatSpec) -> &'static str {
    if is_negative {
        "-"
    } else {
        match spec.sign {
            Some(Sign::Plus) => "+",
            Some(Sign::Space) => " ",
            _ => "",
        }
    }
}
