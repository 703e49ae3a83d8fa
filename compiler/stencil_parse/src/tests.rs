#![allow(
    clippy::unwrap_used,
    reason = "test code uses unwrap for concise assertions"
)]

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use stencil_diagnostic::ErrorCode;

use super::*;

fn only_interpolation(source: &str) -> Interpolation {
    let ir = parse_template(source).unwrap();
    let mut interps = ir.interpolations().cloned();
    let interp = interps.next().unwrap();
    assert!(interps.next().is_none());
    interp
}

fn error_code(source: &str) -> ErrorCode {
    parse_template(source).unwrap_err().code()
}

/// Filters and args with spans erased, for whitespace comparisons.
fn shape(interp: &Interpolation) -> (Vec<String>, Vec<(FilterKind, Vec<String>)>) {
    (
        interp.path.segments().to_vec(),
        interp
            .pipeline
            .iter()
            .map(|f| (f.kind, f.args.iter().map(ToString::to_string).collect()))
            .collect(),
    )
}

// Templates

#[test]
fn literal_only_template() {
    let ir = parse_template("hello").unwrap();
    assert!(ir.is_static());
    assert_eq!(ir.to_string(), "hello");
}

#[test]
fn literals_and_interpolations_keep_order() {
    let ir = parse_template("hello {{a}} {{b}}!").unwrap();
    assert_eq!(ir.segments.len(), 5);
    assert_eq!(ir.root_names(), vec!["a", "b"]);
    assert_eq!(ir.to_string(), "hello {{a}} {{b}}!");
}

// Paths

#[test]
fn dotted_path() {
    let interp = only_interpolation("{{a.b.c}}");
    assert_eq!(interp.path.segments(), ["a", "b", "c"]);
    assert!(interp.pipeline.is_empty());
}

#[test]
fn numeric_path_segment() {
    let interp = only_interpolation("{{items.0.name}}");
    assert_eq!(interp.path.segments(), ["items", "0", "name"]);
}

#[test]
fn path_span_points_into_template() {
    let interp = only_interpolation("ab{{ a.b }}");
    assert_eq!(interp.path.span(), Span::new(5, 8));
    assert_eq!(interp.span, Span::new(2, 11));
}

#[test]
fn malformed_paths() {
    assert_eq!(error_code("{{a..b}}"), ErrorCode::E1002);
    assert_eq!(error_code("{{.a}}"), ErrorCode::E1002);
    assert_eq!(error_code("{{a.}}"), ErrorCode::E1002);
    assert_eq!(error_code("{{'a'}}"), ErrorCode::E1002);
    assert_eq!(error_code("{{a{b}}"), ErrorCode::E1002);
}

#[test]
fn empty_interpolation() {
    assert_eq!(error_code("{{}}"), ErrorCode::E1001);
    assert_eq!(error_code("x {{   }} y"), ErrorCode::E1001);
}

#[test]
fn path_must_come_first() {
    assert_eq!(error_code("{{|lower}}"), ErrorCode::E1006);
}

#[test]
fn two_paths_are_rejected() {
    let err = parse_template("{{a b}}").unwrap_err();
    assert_eq!(
        err.kind,
        CompileErrorKind::UnexpectedToken {
            found: "b".to_string(),
            expected: "`|` or end of interpolation",
        }
    );
    assert_eq!(err.span, Span::new(4, 5));
}

// Filters

#[test]
fn filter_without_args() {
    let interp = only_interpolation("{{a|lower}}");
    assert_eq!(interp.pipeline.len(), 1);
    assert_eq!(interp.pipeline[0].kind, FilterKind::Lower);
    assert!(interp.pipeline[0].args.is_empty());
}

#[test]
fn chained_filters_keep_order() {
    let interp = only_interpolation("{{a|lower|slice:3,-3|length}}");
    let kinds: Vec<FilterKind> = interp.pipeline.iter().map(|f| f.kind).collect();
    assert_eq!(
        kinds,
        vec![FilterKind::Lower, FilterKind::Slice, FilterKind::Length]
    );
}

#[test]
fn hyphenated_filter_names() {
    let interp = only_interpolation("{{a|upper-locale}}");
    assert_eq!(interp.pipeline[0].kind, FilterKind::UpperLocale);
}

#[test]
fn unknown_filter_is_named() {
    let err = parse_template("{{a|fake}}").unwrap_err();
    assert_eq!(
        err.kind,
        CompileErrorKind::UnknownFilter {
            name: "fake".to_string()
        }
    );
    assert_eq!(err.span, Span::new(4, 8));
}

#[test]
fn missing_filter_name() {
    assert_eq!(error_code("{{a|}}"), ErrorCode::E1004);
    assert_eq!(error_code("{{a||lower}}"), ErrorCode::E1004);
    assert_eq!(error_code("{{a|:3}}"), ErrorCode::E1004);
}

// Arguments

#[test]
fn args_are_classified() {
    let interp = only_interpolation(r#"{{a|truncate:6,left|pad:'8',"x"}}"#);
    let truncate = &interp.pipeline[0].args;
    assert_eq!(truncate[0].as_number(), Some(6.0));
    assert!(matches!(&truncate[1], Arg::Keyword { value, .. } if value == "left"));

    let pad = &interp.pipeline[1].args;
    assert!(matches!(&pad[0], Arg::Str { value, .. } if value == "8"));
    assert!(matches!(&pad[1], Arg::Str { value, .. } if value == "x"));
}

#[test]
fn negative_and_fractional_numbers() {
    let interp = only_interpolation("{{a|slice:-5,2.5}}");
    let args = &interp.pipeline[0].args;
    assert_eq!(args[0].as_number(), Some(-5.0));
    assert_eq!(args[1].as_number(), Some(2.5));
}

#[test]
fn non_finite_words_stay_keywords() {
    let interp = only_interpolation("{{a|pad:inf,nan}}");
    let args = &interp.pipeline[0].args;
    assert_eq!(args[0].describe(), "keyword");
    assert_eq!(args[1].describe(), "keyword");
}

#[test]
fn quoted_pattern_keeps_separators() {
    let interp = only_interpolation(r#"{{a|time:"%H:%M, %d|%m"}}"#);
    assert!(matches!(
        &interp.pipeline[0].args[0],
        Arg::Str { value, .. } if value == "%H:%M, %d|%m"
    ));
}

#[test]
fn single_and_double_quoted_patterns_are_equivalent() {
    let double = only_interpolation(r#"{{a|number:".3f"}}"#);
    let single = only_interpolation("{{a|number:'.3f'}}");
    assert_eq!(shape(&double), shape(&single));
}

#[test]
fn unquoted_format_pattern_is_rejected() {
    let err = parse_template("hello {{a|number:.3f}}").unwrap_err();
    assert_eq!(
        err.kind,
        CompileErrorKind::UnquotedFormatArgument {
            filter: FilterKind::Number,
            pattern: ".3f".to_string()
        }
    );
    assert_eq!(error_code("{{a|time:%Y}}"), ErrorCode::E1007);
    assert_eq!(error_code("{{a|number:3}}"), ErrorCode::E1007);
}

#[test]
fn unterminated_quote() {
    assert_eq!(error_code("{{a|number:'.3f}}"), ErrorCode::E1005);
    assert_eq!(error_code(r#"{{a|pad:8,"left}}"#), ErrorCode::E1005);
}

#[test]
fn empty_and_dangling_args() {
    assert_eq!(error_code("{{a|mid:}}"), ErrorCode::E1006);
    assert_eq!(error_code("{{a|mid:3,,5}}"), ErrorCode::E1006);
    assert_eq!(error_code("{{a|mid:3,}}"), ErrorCode::E1006);
    assert_eq!(error_code("{{a|pad:8:left}}"), ErrorCode::E1006);
}

#[test]
fn adjacent_args_without_comma() {
    assert_eq!(error_code("{{a|pad:8 left}}"), ErrorCode::E1006);
}

// Whitespace

#[test]
fn whitespace_is_insignificant() {
    let spaced = only_interpolation("{{ a | lower | mid : 3, 5 }}");
    let tight = only_interpolation("{{a|lower|mid:3,5}}");
    assert_eq!(shape(&spaced), shape(&tight));
}

#[test]
fn non_ascii_whitespace_is_insignificant() {
    let spaced = only_interpolation("{{\u{a0}a\u{a0}|\u{2009}lower\u{feff}}}");
    let tight = only_interpolation("{{a|lower}}");
    assert_eq!(shape(&spaced), shape(&tight));
}

#[test]
fn whitespace_inside_quotes_is_kept() {
    let interp = only_interpolation("{{a|time:' %Y '}}");
    assert!(matches!(
        &interp.pipeline[0].args[0],
        Arg::Str { value, .. } if value == " %Y "
    ));
}

#[test]
fn tokenizer_errors_propagate() {
    assert_eq!(error_code("hello {{a"), ErrorCode::E0001);
}

proptest! {
    #[test]
    fn padding_around_separators_never_matters(
        pads in prop::collection::vec("[ \t]{0,3}", 8)
    ) {
        let source = format!(
            "{{{{{}a{}|{}lower{}|{}mid{}:{}3,{}5}}}}",
            pads[0], pads[1], pads[2], pads[3], pads[4], pads[5], pads[6], pads[7]
        );
        let spaced = only_interpolation(&source);
        let tight = only_interpolation("{{a|lower|mid:3,5}}");
        prop_assert_eq!(shape(&spaced), shape(&tight));
    }
}
