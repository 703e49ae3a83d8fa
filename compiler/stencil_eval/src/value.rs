//! Context values that templates are evaluated against.
//!
//! A [`Value`] is a small dynamic data model: enough structure for dotted
//! property lookup (`a.b`, `items.0`) and for the filters to stringify,
//! count and format what they receive.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// A runtime value.
///
/// `Undefined` is what a missing property resolves to; `Null` is an explicit
/// absence. Both render as the empty string.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    Str(String),
    Date(NaiveDateTime),
    List(Vec<Value>),
    /// Keys are kept sorted so rendering is deterministic.
    Object(BTreeMap<String, Value>),
}

static UNDEFINED: Value = Value::Undefined;

impl Value {
    /// Build an object from key/value pairs.
    pub fn object<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Value
    where
        K: Into<String>,
        V: Into<Value>,
    {
        pairs.into_iter().collect()
    }

    /// `Undefined` or `Null`.
    #[inline]
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Date(_) => "date",
            Value::List(_) => "list",
            Value::Object(_) => "object",
        }
    }

    /// One property step: an object key, or a list index written in digits.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(map) => map.get(key),
            Value::List(items) if !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit()) => {
                key.parse::<usize>().ok().and_then(|index| items.get(index))
            }
            _ => None,
        }
    }

    /// Follow a property path. Any missing step yields `Undefined`.
    pub fn lookup<S: AsRef<str>>(&self, path: &[S]) -> &Value {
        path.iter()
            .try_fold(self, |value, key| value.get(key.as_ref()))
            .unwrap_or(&UNDEFINED)
    }

    /// The value as a date. Numbers are read as milliseconds since the
    /// Unix epoch, in UTC.
    pub fn as_date(&self) -> Option<NaiveDateTime> {
        match self {
            Value::Date(date) => Some(*date),
            Value::Number(millis) if millis.is_finite() => {
                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "saturating cast; out-of-range instants are rejected by chrono"
                )]
                let millis = millis.trunc() as i64;
                chrono::DateTime::from_timestamp_millis(millis).map(|dt| dt.naive_utc())
            }
            _ => None,
        }
    }

    /// The rendered text of this value. Nullish values render as `""`.
    pub fn to_text(&self) -> Cow<'_, str> {
        match self {
            Value::Str(s) => Cow::Borrowed(s),
            Value::Undefined | Value::Null => Cow::Borrowed(""),
            other => Cow::Owned(other.to_string()),
        }
    }
}

/// Render a number the way a script engine would: integral values have no
/// fractional part, very large and very small magnitudes use an exponent.
pub(crate) fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n < 0.0 { "-Infinity" } else { "Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    let magnitude = n.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{n}");
    }
    let text = format!("{n:e}");
    match text.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => text,
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined | Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => f.write_str(&format_number(*n)),
            Value::Str(s) => f.write_str(s),
            Value::Date(date) => write!(f, "{date}"),
            Value::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
            Value::Object(map) => {
                f.write_str("{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

// Conversions

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<i64> for Value {
    #[expect(
        clippy::cast_precision_loss,
        reason = "numbers are doubles; integers beyond 2^53 round"
    )]
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<u64> for Value {
    #[expect(
        clippy::cast_precision_loss,
        reason = "numbers are doubles; integers beyond 2^53 round"
    )]
    fn from(n: u64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<usize> for Value {
    #[expect(
        clippy::cast_precision_loss,
        reason = "numbers are doubles; integers beyond 2^53 round"
    )]
    fn from(n: usize) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(date: NaiveDateTime) -> Self {
        Value::Date(date)
    }
}

/// A calendar date is midnight on that day.
impl From<NaiveDate> for Value {
    fn from(date: NaiveDate) -> Self {
        Value::Date(date.and_time(NaiveTime::MIN))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Value::Object(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Object(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => Value::from(items),
            serde_json::Value::Object(map) => map.into_iter().collect(),
        }
    }
}
