//! Filter functions.
//!
//! These are the primitives both evaluation strategies call: the
//! interpreter dispatches to them from resolved stages, and source emitted
//! by `stencil_codegen` names them directly. Every function is total.
//! Nullish input passes through the string filters unchanged, and lengths
//! and positions count Unicode scalar values.

use std::fmt::Write;
use std::iter;

use crate::format::Formatter;
use crate::value::Value;

const ELLIPSIS: char = '\u{2026}';

/// Which end `truncate` cuts.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum TruncateSide {
    #[default]
    Right,
    Left,
    /// Keep both ends, elide the middle.
    Middle,
}

/// Where `pad` adds spaces.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum PadSide {
    /// Spaces after the text (left-aligned output).
    #[default]
    Right,
    Left,
    Middle,
}

impl TruncateSide {
    pub fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "right" => Some(TruncateSide::Right),
            "left" => Some(TruncateSide::Left),
            "middle" | "center" => Some(TruncateSide::Middle),
            _ => None,
        }
    }
}

impl PadSide {
    pub fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "right" => Some(PadSide::Right),
            "left" => Some(PadSide::Left),
            "middle" | "center" => Some(PadSide::Middle),
            _ => None,
        }
    }
}

/// Resolve a property path against the context.
#[inline]
pub fn lookup<'v>(context: &'v Value, path: &[&str]) -> &'v Value {
    context.lookup(path)
}

/// Append the final text of an interpolation.
pub fn render(value: &Value, out: &mut String) {
    match value {
        Value::Undefined | Value::Null => {}
        Value::Str(s) => out.push_str(s),
        other => {
            // Writing into a `String` cannot fail.
            let _ = write!(out, "{other}");
        }
    }
}

fn map_text(value: &Value, f: impl FnOnce(&str) -> String) -> Value {
    if value.is_nullish() {
        return value.clone();
    }
    Value::Str(f(&value.to_text()))
}

pub fn lower(value: &Value) -> Value {
    map_text(value, str::to_lowercase)
}

pub fn upper(value: &Value) -> Value {
    map_text(value, str::to_uppercase)
}

/// Lowercase under the root locale, which is the Unicode default mapping.
pub fn lower_locale(value: &Value) -> Value {
    lower(value)
}

/// Uppercase under the root locale, which is the Unicode default mapping.
pub fn upper_locale(value: &Value) -> Value {
    upper(value)
}

pub fn trim(value: &Value) -> Value {
    map_text(value, |s| s.trim().to_string())
}

/// The first `n` characters.
pub fn left(value: &Value, n: usize) -> Value {
    map_text(value, |s| s.chars().take(n).collect())
}

/// The last `n` characters.
pub fn right(value: &Value, n: usize) -> Value {
    map_text(value, |s| {
        let len = s.chars().count();
        s.chars().skip(len.saturating_sub(n)).collect()
    })
}

/// `len` characters starting at `start`.
pub fn mid(value: &Value, start: usize, len: usize) -> Value {
    map_text(value, |s| s.chars().skip(start).take(len).collect())
}

/// Characters in `start..end`; negative positions count from the end.
pub fn slice(value: &Value, start: i64, end: Option<i64>) -> Value {
    map_text(value, |s| {
        let len = s.chars().count();
        let from = clamp_position(start, len);
        let to = end.map_or(len, |end| clamp_position(end, len));
        if to <= from {
            return String::new();
        }
        s.chars().skip(from).take(to - from).collect()
    })
}

fn clamp_position(position: i64, len: usize) -> usize {
    let magnitude = usize::try_from(position.unsigned_abs()).unwrap_or(usize::MAX);
    if position < 0 {
        len.saturating_sub(magnitude)
    } else {
        magnitude.min(len)
    }
}

/// Character count of the rendered value.
pub fn length(value: &Value) -> Value {
    Value::from(value.to_text().chars().count())
}

/// Shorten to at most `width` characters, one of which is `…`.
pub fn truncate(value: &Value, width: usize, side: TruncateSide) -> Value {
    map_text(value, |s| {
        let len = s.chars().count();
        if len <= width {
            return s.to_string();
        }
        let keep = width.saturating_sub(1);
        match side {
            TruncateSide::Right => s.chars().take(keep).chain(iter::once(ELLIPSIS)).collect(),
            TruncateSide::Left => iter::once(ELLIPSIS)
                .chain(s.chars().skip(len - keep))
                .collect(),
            TruncateSide::Middle => {
                let head = keep.div_ceil(2);
                let tail = keep / 2;
                s.chars()
                    .take(head)
                    .chain(iter::once(ELLIPSIS))
                    .chain(s.chars().skip(len - tail))
                    .collect()
            }
        }
    })
}

/// Pad with spaces to at least `width` characters.
pub fn pad(value: &Value, width: usize, side: PadSide) -> Value {
    map_text(value, |s| {
        let len = s.chars().count();
        if len >= width {
            return s.to_string();
        }
        let missing = width - len;
        let (before, after) = match side {
            PadSide::Right => (0, missing),
            PadSide::Left => (missing, 0),
            PadSide::Middle => (missing / 2, missing - missing / 2),
        };
        let mut out = String::with_capacity(s.len() + missing);
        out.extend(iter::repeat_n(' ', before));
        out.push_str(s);
        out.extend(iter::repeat_n(' ', after));
        out
    })
}

/// Apply a cached `number` or `time` formatter.
///
/// Values the formatter cannot handle are passed through unchanged.
pub fn format(value: &Value, formatter: &Formatter) -> Value {
    match formatter {
        Formatter::Number(format) => match value {
            Value::Number(n) => Value::Str(format.format(*n)),
            other => {
                tracing::debug!(
                    pattern = format.pattern(),
                    found = other.type_name(),
                    "number filter applied to a non-number; passing through"
                );
                other.clone()
            }
        },
        Formatter::Time(format) => {
            let Some(date) = value.as_date() else {
                tracing::debug!(
                    pattern = format.pattern(),
                    found = value.type_name(),
                    "time filter applied to a non-date; passing through"
                );
                return value.clone();
            };
            match format.format(date) {
                Some(text) => Value::Str(text),
                None => {
                    tracing::debug!(
                        pattern = format.pattern(),
                        %date,
                        "time pattern cannot render this date; using default text"
                    );
                    Value::Str(date.to_string())
                }
            }
        }
    }
}
