#![allow(
    clippy::unwrap_used,
    reason = "test code uses unwrap for concise assertions"
)]

use chrono::{NaiveDate, NaiveDateTime};
use pretty_assertions::assert_eq;

use super::*;

fn num(pattern: &str, value: f64) -> String {
    NumberFormat::parse(pattern).unwrap().format(value)
}

fn date(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

// Numbers

#[test]
fn fixed_point() {
    assert_eq!(num(".3f", 1.0), "1.000");
    assert_eq!(num(".1f", 5.0), "5.0");
    assert_eq!(num("f", 1.5), "1.500000");
    assert_eq!(num(".0f", 2.4), "2");
}

#[test]
fn sign_modes() {
    assert_eq!(num("+.1f", 3.0), "+3.0");
    assert_eq!(num("+.1f", -3.0), "-3.0");
    assert_eq!(num(" d", 7.0), " 7");
    assert_eq!(num("-d", 7.0), "7");
}

#[test]
fn negative_zero_after_rounding_has_no_sign() {
    assert_eq!(num(".2f", -0.001), "0.00");
    assert_eq!(num("d", -0.4), "0");
}

#[test]
fn integer_types_round() {
    assert_eq!(num("d", 2.6), "3");
    assert_eq!(num("d", -2.6), "-3");
    assert_eq!(num("x", 255.0), "ff");
    assert_eq!(num("X", 255.0), "FF");
    assert_eq!(num("o", 8.0), "10");
    assert_eq!(num("b", 5.0), "101");
}

#[test]
fn alternate_prefixes() {
    assert_eq!(num("#x", 255.0), "0xff");
    assert_eq!(num("#b", 5.0), "0b101");
    assert_eq!(num("#o", 8.0), "0o10");
    assert_eq!(num("#X", -255.0), "-0XFF");
}

#[test]
fn currency_and_grouping() {
    assert_eq!(num("$,.2f", 1234.5), "$1,234.50");
    assert_eq!(num(",d", 1_234_567.0), "1,234,567");
    assert_eq!(num(",.2f", 1_234_567.891), "1,234,567.89");
    assert_eq!(num(",d", 999.0), "999");
    assert_eq!(num(",x", 65535.0), "ffff");
}

#[test]
fn width_and_alignment() {
    assert_eq!(num("8d", 42.0), "      42");
    assert_eq!(num(">8d", 42.0), "      42");
    assert_eq!(num("<6d", 42.0), "42    ");
    assert_eq!(num("*^7d", 42.0), "**42***");
    assert_eq!(num("2d", 12345.0), "12345");
}

#[test]
fn zero_padding_sits_after_the_sign() {
    assert_eq!(num("08.2f", -3.14159), "-0003.14");
    assert_eq!(num("+06d", 42.0), "+00042");
    assert_eq!(num("#010x", 255.0), "0x000000ff");
}

#[test]
fn scientific() {
    assert_eq!(num(".2e", 12345.0), "1.23e+4");
    assert_eq!(num("e", 0.00012), "1.2e-4");
    assert_eq!(num("E", 0.00012), "1.2E-4");
    assert_eq!(num(".1e", 0.0), "0.0e+0");
}

#[test]
fn general_uses_significant_digits() {
    assert_eq!(num("g", 123.456), "123.456");
    assert_eq!(num(".3g", 1234.5), "1.23e+3");
    assert_eq!(num(".3g", 0.5), "0.500");
    assert_eq!(num(".2g", 9.99), "10");
    assert_eq!(num(".3g", 0.000_012_34), "1.23e-5");
}

#[test]
fn tilde_trims_trailing_zeros() {
    assert_eq!(num(".3~g", 0.5), "0.5");
    assert_eq!(num("~f", 1.5), "1.5");
    assert_eq!(num(".2~f", 2.0), "2");
    assert_eq!(num(".3~e", 1500.0), "1.5e+3");
}

#[test]
fn percentage() {
    assert_eq!(num("%", 0.123), "12.3%");
    assert_eq!(num(".1%", 0.5), "50.0%");
    assert_eq!(num(".0%", -0.25), "-25%");
}

#[test]
fn no_type() {
    assert_eq!(num("", 1234.5), "1234.5");
    assert_eq!(num(".2", 3.14159), "3.1");
    assert_eq!(num(",", 1_234_567.0), "1,234,567");
}

#[test]
fn non_finite_values() {
    assert_eq!(num(".2f", f64::NAN), "NaN");
    assert_eq!(num("+.1f", f64::NEG_INFINITY), "-Infinity");
    assert_eq!(num("+.1f", f64::INFINITY), "+Infinity");
    assert_eq!(num("10f", f64::NAN), "       NaN");
}

// Dates

#[test]
fn strftime_patterns() {
    let format = TimeFormat::parse("%Y-%m-%d").unwrap();
    assert_eq!(
        format.format(date(2011, 1, 1, 0, 0)).as_deref(),
        Some("2011-01-01")
    );

    let format = TimeFormat::parse("%b %e, %H:%M").unwrap();
    assert_eq!(
        format.format(date(2011, 3, 7, 14, 5)).as_deref(),
        Some("Mar  7, 14:05")
    );
}

#[test]
fn literal_only_time_pattern() {
    let format = TimeFormat::parse("at noon").unwrap();
    assert_eq!(format.format(date(2020, 1, 1, 12, 0)).as_deref(), Some("at noon"));
}

#[test]
fn offset_specifiers_cannot_render_naive_dates() {
    let format = TimeFormat::parse("%z").unwrap();
    assert_eq!(format.format(date(2011, 1, 1, 0, 0)), None);
}

// Formatter

#[test]
fn formatter_reports_family_and_pattern() {
    let number = Formatter::parse(FormatFamily::Number, ".3f").unwrap();
    assert_eq!(number.family(), FormatFamily::Number);
    assert_eq!(number.pattern(), ".3f");

    let time = Formatter::parse(FormatFamily::Time, "%Y").unwrap();
    assert_eq!(time.family(), FormatFamily::Time);
    assert_eq!(time.pattern(), "%Y");
}

#[test]
fn invalid_number_pattern() {
    let err = Formatter::parse(FormatFamily::Number, ".3z").unwrap_err();
    assert_eq!(err.family, FormatFamily::Number);
    assert_eq!(err.reason, "unknown format type 'z'");
    assert_eq!(
        err.to_string(),
        "invalid number format pattern \".3z\": unknown format type 'z'"
    );
}

#[test]
fn invalid_time_pattern() {
    let err = Formatter::parse(FormatFamily::Time, "%Q").unwrap_err();
    assert_eq!(err.family, FormatFamily::Time);
    assert!(Formatter::parse(FormatFamily::Time, "%Y-%").is_err());
}

#[test]
fn errors_convert_to_compile_error_kinds() {
    let err = Formatter::parse(FormatFamily::Number, "..").unwrap_err();
    let kind = CompileErrorKind::from(err);
    assert_eq!(kind.code(), stencil_diagnostic::ErrorCode::E2003);
}
