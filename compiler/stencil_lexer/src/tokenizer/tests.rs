#![allow(
    clippy::unwrap_used,
    reason = "test code uses unwrap for concise assertions"
)]

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use stencil_diagnostic::ErrorCode;

use super::*;

fn bodies(source: &str) -> Vec<&str> {
    tokenize(source)
        .unwrap()
        .into_iter()
        .filter_map(|segment| match segment {
            RawSegment::Interpolation { body, .. } => Some(body),
            RawSegment::Literal { .. } => None,
        })
        .collect()
}

#[test]
fn plain_text_is_one_literal() {
    let segments = tokenize("hello").unwrap();
    assert_eq!(
        segments,
        vec![RawSegment::Literal {
            text: "hello",
            span: Span::new(0, 5)
        }]
    );
}

#[test]
fn empty_template_has_no_segments() {
    assert!(tokenize("").unwrap().is_empty());
}

#[test]
fn interpolation_between_literals() {
    let segments = tokenize("hello {{a}} there").unwrap();
    assert_eq!(
        segments,
        vec![
            RawSegment::Literal {
                text: "hello ",
                span: Span::new(0, 6)
            },
            RawSegment::Interpolation {
                body: "a",
                body_span: Span::new(8, 9),
                span: Span::new(6, 11)
            },
            RawSegment::Literal {
                text: " there",
                span: Span::new(11, 17)
            },
        ]
    );
}

#[test]
fn adjacent_interpolations() {
    assert_eq!(bodies("{{a}}{{b}}"), vec!["a", "b"]);
}

#[test]
fn body_whitespace_is_preserved_for_the_parser() {
    assert_eq!(bodies("{{ a | lower }}"), vec![" a | lower "]);
}

#[test]
fn quotes_in_literal_text_are_not_special() {
    let segments = tokenize("\"{{a}}\"'").unwrap();
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[0].span(), Span::new(0, 1));
    assert_eq!(segments[2].span(), Span::new(6, 8));
}

#[test]
fn interpolation_ends_at_first_close() {
    assert_eq!(bodies("{{a}}}"), vec!["a"]);
    assert_eq!(bodies("{{{a}}"), vec!["{a"]);
}

#[test]
fn stray_close_is_literal() {
    let segments = tokenize("a }} b").unwrap();
    assert_eq!(segments.len(), 1);
}

#[test]
fn unterminated_open_is_an_error() {
    let err = tokenize("hello {{a").unwrap_err();
    assert_eq!(err.code(), ErrorCode::E0001);
    assert_eq!(err.span, Span::new(6, 8));
}

#[test]
fn tokenizer_stops_after_error() {
    let mut tokenizer = Tokenizer::new("x{{a");
    assert!(tokenizer.next().unwrap().is_err());
    assert!(tokenizer.next().is_none());
}

#[test]
fn multibyte_literals_keep_byte_spans() {
    let segments = tokenize("héllo {{a}}").unwrap();
    assert_eq!(segments[0].span(), Span::new(0, 7));
    assert_eq!(segments[1].span(), Span::new(7, 12));
}

proptest! {
    #[test]
    fn segment_spans_tile_the_source(source in "[a-c{}| '\"é]{0,40}") {
        if let Ok(segments) = tokenize(&source) {
            let mut rebuilt = String::new();
            for segment in &segments {
                rebuilt.push_str(&source[segment.span().to_range()]);
                if let RawSegment::Interpolation { body, body_span, .. } = segment {
                    prop_assert_eq!(*body, &source[body_span.to_range()]);
                }
            }
            prop_assert_eq!(rebuilt, source);
        } else {
            prop_assert!(source.contains(OPEN));
        }
    }

    #[test]
    fn text_without_open_is_single_literal(source in "[a-z }|'\"]{1,40}") {
        let segments = tokenize(&source).unwrap();
        prop_assert_eq!(segments.len(), 1);
        let is_literal = matches!(segments[0], RawSegment::Literal { .. });
        prop_assert!(is_literal);
    }
}
