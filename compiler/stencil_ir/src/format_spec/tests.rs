//! Tests for the numeric format pattern parser.

#![allow(
    clippy::unwrap_used,
    reason = "test code uses unwrap for concise assertions"
)]

use super::*;

#[test]
fn empty_spec() {
    assert_eq!(parse_format_spec("").unwrap(), ParsedFormatSpec::EMPTY);
}

// Fill and alignment

#[test]
fn align_without_fill() {
    let spec = parse_format_spec(">").unwrap();
    assert_eq!(spec.align, Some(Align::Right));
    assert_eq!(spec.fill, None);
}

#[test]
fn fill_then_align() {
    let spec = parse_format_spec("*^").unwrap();
    assert_eq!(spec.fill, Some('*'));
    assert_eq!(spec.align, Some(Align::Center));
}

#[test]
fn fill_can_be_an_align_char() {
    let spec = parse_format_spec("<<").unwrap();
    assert_eq!(spec.fill, Some('<'));
    assert_eq!(spec.align, Some(Align::Left));
}

// Sign and symbol

#[test]
fn sign_variants() {
    assert_eq!(parse_format_spec("+").unwrap().sign, Some(Sign::Plus));
    assert_eq!(parse_format_spec("-").unwrap().sign, Some(Sign::Minus));
    assert_eq!(parse_format_spec(" ").unwrap().sign, Some(Sign::Space));
}

#[test]
fn currency_symbol() {
    let spec = parse_format_spec("$.2f").unwrap();
    assert!(spec.currency);
    assert!(!spec.alternate);
    assert_eq!(spec.precision, Some(2));
}

#[test]
fn alternate_symbol() {
    let spec = parse_format_spec("#x").unwrap();
    assert!(spec.alternate);
    assert_eq!(spec.format_type, Some(FormatType::Hex));
}

// Zero-pad and width

#[test]
fn zero_pad_before_width() {
    let spec = parse_format_spec("08d").unwrap();
    assert!(spec.zero_pad);
    assert_eq!(spec.width, Some(8));
    assert_eq!(spec.format_type, Some(FormatType::Decimal));
}

#[test]
fn lone_zero_is_zero_pad() {
    let spec = parse_format_spec("0").unwrap();
    assert!(spec.zero_pad);
    assert_eq!(spec.width, None);
}

#[test]
fn width_only() {
    let spec = parse_format_spec("12").unwrap();
    assert_eq!(spec.width, Some(12));
    assert!(!spec.zero_pad);
}

// Grouping, precision, trim

#[test]
fn grouping_flag() {
    let spec = parse_format_spec(",d").unwrap();
    assert!(spec.grouping);
    assert_eq!(spec.format_type, Some(FormatType::Decimal));
}

#[test]
fn fixed_precision() {
    let spec = parse_format_spec(".3f").unwrap();
    assert_eq!(spec.precision, Some(3));
    assert_eq!(spec.format_type, Some(FormatType::Fixed));
}

#[test]
fn precision_requires_digits() {
    assert_eq!(
        parse_format_spec(".f").unwrap_err(),
        FormatSpecError::InvalidPrecision(String::new())
    );
}

#[test]
fn width_and_precision_are_bounded() {
    let spec = parse_format_spec("01024.1024f").unwrap();
    assert_eq!(spec.width, Some(MAX_FIELD));
    assert_eq!(spec.precision, Some(MAX_FIELD));

    assert_eq!(
        parse_format_spec(".70000f").unwrap_err(),
        FormatSpecError::InvalidPrecision("70000".to_string())
    );
    assert_eq!(
        parse_format_spec("070000d").unwrap_err(),
        FormatSpecError::InvalidWidth("70000".to_string())
    );
    assert_eq!(
        parse_format_spec("1025d").unwrap_err(),
        FormatSpecError::InvalidWidth("1025".to_string())
    );
    assert!(matches!(
        parse_format_spec("99999999999999999999999d"),
        Err(FormatSpecError::InvalidWidth(_))
    ));
}

#[test]
fn trim_flag() {
    let spec = parse_format_spec(".4~g").unwrap();
    assert!(spec.trim);
    assert_eq!(spec.precision, Some(4));
    assert_eq!(spec.format_type, Some(FormatType::General));
}

// Full specs

#[test]
fn every_field_at_once() {
    let spec = parse_format_spec("*^+$020,.5~f").unwrap();
    assert_eq!(spec.fill, Some('*'));
    assert_eq!(spec.align, Some(Align::Center));
    assert_eq!(spec.sign, Some(Sign::Plus));
    assert!(spec.currency);
    assert!(spec.zero_pad);
    assert_eq!(spec.width, Some(20));
    assert!(spec.grouping);
    assert_eq!(spec.precision, Some(5));
    assert!(spec.trim);
    assert_eq!(spec.format_type, Some(FormatType::Fixed));
}

#[test]
fn percent_with_precision() {
    let spec = parse_format_spec(".1%").unwrap();
    assert_eq!(spec.precision, Some(1));
    assert_eq!(spec.format_type, Some(FormatType::Percent));
}

// Errors

#[test]
fn unknown_type() {
    assert_eq!(
        parse_format_spec("z").unwrap_err(),
        FormatSpecError::UnknownType('z')
    );
}

#[test]
fn trailing_characters() {
    assert_eq!(
        parse_format_spec(".2fx").unwrap_err(),
        FormatSpecError::TrailingCharacters("x".to_string())
    );
}

#[test]
fn error_messages_name_the_problem() {
    assert_eq!(
        FormatSpecError::UnknownType('q').to_string(),
        "unknown format type 'q'"
    );
}

// FormatType queries

#[test]
fn integer_types() {
    for ty in [
        FormatType::Binary,
        FormatType::Octal,
        FormatType::Decimal,
        FormatType::Hex,
        FormatType::HexUpper,
    ] {
        assert!(ty.is_integer(), "{ty:?}");
    }
    for ty in [
        FormatType::Exp,
        FormatType::Fixed,
        FormatType::General,
        FormatType::Percent,
    ] {
        assert!(!ty.is_integer(), "{ty:?}");
    }
}
