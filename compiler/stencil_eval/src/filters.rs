//! Filter registry: turns parsed filter invocations into executable stages.
//!
//! Resolution happens once, at compile time. It checks argument counts and
//! kinds, reads direction keywords, and fetches `number`/`time` formatters
//! from the [`FormatCache`], so evaluation itself never fails.

use std::sync::Arc;

use stencil_diagnostic::{CompileError, CompileErrorKind, CompileResult};
use stencil_ir::{Arg, FilterInvocation, FilterKind, Span};

use crate::format::Formatter;
use crate::format_cache::FormatCache;
use crate::runtime::{self, PadSide, TruncateSide};
use crate::value::Value;

/// Largest count or index a filter argument may carry.
const MAX_ARGUMENT: f64 = 1_048_576.0 * 1024.0;

/// One resolved filter with its arguments decoded.
#[derive(Clone, Debug, PartialEq)]
pub enum Stage {
    Lower,
    Upper,
    LowerLocale,
    UpperLocale,
    Trim,
    Left(usize),
    Right(usize),
    Mid { start: usize, len: usize },
    Slice { start: i64, end: Option<i64> },
    Length,
    Truncate { width: usize, side: TruncateSide },
    Pad { width: usize, side: PadSide },
    /// `number` or `time`, holding the shared formatter.
    Format(Arc<Formatter>),
}

impl Stage {
    /// Resolve one invocation against the registry.
    pub fn resolve(invocation: &FilterInvocation, cache: &FormatCache) -> CompileResult<Stage> {
        let kind = invocation.kind;
        let stage = match (kind, invocation.args.as_slice()) {
            (FilterKind::Lower, []) => Stage::Lower,
            (FilterKind::Upper, []) => Stage::Upper,
            (FilterKind::LowerLocale, []) => Stage::LowerLocale,
            (FilterKind::UpperLocale, []) => Stage::UpperLocale,
            (FilterKind::Trim, []) => Stage::Trim,
            (FilterKind::Length, []) => Stage::Length,
            (FilterKind::Left, [n]) => Stage::Left(count(kind, n)?),
            (FilterKind::Right, [n]) => Stage::Right(count(kind, n)?),
            (FilterKind::Mid, [start, len]) => Stage::Mid {
                start: count(kind, start)?,
                len: count(kind, len)?,
            },
            (FilterKind::Slice, [start]) => Stage::Slice {
                start: index(kind, start)?,
                end: None,
            },
            (FilterKind::Slice, [start, end]) => Stage::Slice {
                start: index(kind, start)?,
                end: Some(index(kind, end)?),
            },
            (FilterKind::Truncate, [width]) => Stage::Truncate {
                width: count(kind, width)?,
                side: TruncateSide::default(),
            },
            (FilterKind::Truncate, [width, side]) => Stage::Truncate {
                width: count(kind, width)?,
                side: keyword(kind, side, TruncateSide::from_keyword)?,
            },
            (FilterKind::Pad, [width]) => Stage::Pad {
                width: count(kind, width)?,
                side: PadSide::default(),
            },
            (FilterKind::Pad, [width, side]) => Stage::Pad {
                width: count(kind, width)?,
                side: keyword(kind, side, PadSide::from_keyword)?,
            },
            (FilterKind::Number | FilterKind::Time, [pattern]) => {
                Stage::Format(formatter(kind, pattern, cache)?)
            }
            (_, args) => {
                let (min, max) = kind.arity();
                return Err(CompileError::new(
                    CompileErrorKind::WrongArgumentCount {
                        filter: kind,
                        min,
                        max,
                        got: args.len(),
                    },
                    invocation.span,
                ));
            }
        };
        Ok(stage)
    }

    /// Resolve a whole pipeline, stopping at the first error.
    pub fn resolve_all(
        pipeline: &[FilterInvocation],
        cache: &FormatCache,
    ) -> CompileResult<Vec<Stage>> {
        pipeline
            .iter()
            .map(|invocation| Stage::resolve(invocation, cache))
            .collect()
    }

    pub fn kind(&self) -> FilterKind {
        match self {
            Stage::Lower => FilterKind::Lower,
            Stage::Upper => FilterKind::Upper,
            Stage::LowerLocale => FilterKind::LowerLocale,
            Stage::UpperLocale => FilterKind::UpperLocale,
            Stage::Trim => FilterKind::Trim,
            Stage::Left(_) => FilterKind::Left,
            Stage::Right(_) => FilterKind::Right,
            Stage::Mid { .. } => FilterKind::Mid,
            Stage::Slice { .. } => FilterKind::Slice,
            Stage::Length => FilterKind::Length,
            Stage::Truncate { .. } => FilterKind::Truncate,
            Stage::Pad { .. } => FilterKind::Pad,
            Stage::Format(formatter) => match formatter.as_ref() {
                Formatter::Number(_) => FilterKind::Number,
                Formatter::Time(_) => FilterKind::Time,
            },
        }
    }

    /// Apply this stage to a value.
    pub fn apply(&self, value: &Value) -> Value {
        match self {
            Stage::Lower => runtime::lower(value),
            Stage::Upper => runtime::upper(value),
            Stage::LowerLocale => runtime::lower_locale(value),
            Stage::UpperLocale => runtime::upper_locale(value),
            Stage::Trim => runtime::trim(value),
            Stage::Left(n) => runtime::left(value, *n),
            Stage::Right(n) => runtime::right(value, *n),
            Stage::Mid { start, len } => runtime::mid(value, *start, *len),
            Stage::Slice { start, end } => runtime::slice(value, *start, *end),
            Stage::Length => runtime::length(value),
            Stage::Truncate { width, side } => runtime::truncate(value, *width, *side),
            Stage::Pad { width, side } => runtime::pad(value, *width, *side),
            Stage::Format(formatter) => runtime::format(value, formatter),
        }
    }
}

fn invalid(filter: FilterKind, span: Span, reason: String) -> CompileError {
    CompileError::new(CompileErrorKind::InvalidArgument { filter, reason }, span)
}

/// A whole number in range, written as a bare number.
fn whole_number(filter: FilterKind, arg: &Arg) -> CompileResult<f64> {
    let span = arg.span();
    let Some(value) = arg.as_number() else {
        return Err(invalid(
            filter,
            span,
            format!("expected a whole number, found {} `{arg}`", arg.describe()),
        ));
    };
    if value.fract() != 0.0 {
        return Err(invalid(
            filter,
            span,
            format!("expected a whole number, found `{value}`"),
        ));
    }
    if value.abs() > MAX_ARGUMENT {
        return Err(invalid(filter, span, format!("`{value}` is too large")));
    }
    Ok(value)
}

/// A non-negative count or width.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is a whole number in 0..=MAX_ARGUMENT"
)]
fn count(filter: FilterKind, arg: &Arg) -> CompileResult<usize> {
    let value = whole_number(filter, arg)?;
    if value < 0.0 {
        return Err(invalid(
            filter,
            arg.span(),
            format!("expected a non-negative number, found `{value}`"),
        ));
    }
    Ok(value as usize)
}

/// A position that may count from the end when negative.
#[expect(
    clippy::cast_possible_truncation,
    reason = "value is a whole number within +/-MAX_ARGUMENT"
)]
fn index(filter: FilterKind, arg: &Arg) -> CompileResult<i64> {
    Ok(whole_number(filter, arg)? as i64)
}

/// A direction keyword, bare or quoted.
fn keyword<T>(filter: FilterKind, arg: &Arg, parse: fn(&str) -> Option<T>) -> CompileResult<T> {
    arg.as_text().and_then(parse).ok_or_else(|| {
        invalid(
            filter,
            arg.span(),
            format!("unknown direction `{arg}`, expected `left`, `right` or `middle`"),
        )
    })
}

fn formatter(filter: FilterKind, arg: &Arg, cache: &FormatCache) -> CompileResult<Arc<Formatter>> {
    let (Some(family), Arg::Str { value, span }) = (filter.format_family(), arg) else {
        return Err(invalid(
            filter,
            arg.span(),
            format!("expected a quoted pattern, found {} `{arg}`", arg.describe()),
        ));
    };
    cache
        .get_or_insert(family, value)
        .map_err(|err| CompileError::new(err.into(), *span))
}
