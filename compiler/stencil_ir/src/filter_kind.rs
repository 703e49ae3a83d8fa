//! The fixed set of template filters.

use std::fmt;

/// A filter that may appear after `|` in an interpolation.
///
/// The set is closed: names outside it are rejected at compile time.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FilterKind {
    Lower,
    Upper,
    LowerLocale,
    UpperLocale,
    Trim,
    Left,
    Right,
    Mid,
    Slice,
    Length,
    Truncate,
    Pad,
    Number,
    Time,
}

/// Namespace of a cached formatter.
///
/// Numeric and date patterns are cached separately even when the pattern
/// strings are equal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormatFamily {
    Number,
    Time,
}

impl FilterKind {
    pub const ALL: [FilterKind; 14] = [
        FilterKind::Lower,
        FilterKind::Upper,
        FilterKind::LowerLocale,
        FilterKind::UpperLocale,
        FilterKind::Trim,
        FilterKind::Left,
        FilterKind::Right,
        FilterKind::Mid,
        FilterKind::Slice,
        FilterKind::Length,
        FilterKind::Truncate,
        FilterKind::Pad,
        FilterKind::Number,
        FilterKind::Time,
    ];

    /// Look up a filter by its template name.
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "lower" => FilterKind::Lower,
            "upper" => FilterKind::Upper,
            "lower-locale" => FilterKind::LowerLocale,
            "upper-locale" => FilterKind::UpperLocale,
            "trim" => FilterKind::Trim,
            "left" => FilterKind::Left,
            "right" => FilterKind::Right,
            "mid" => FilterKind::Mid,
            "slice" => FilterKind::Slice,
            "length" => FilterKind::Length,
            "truncate" => FilterKind::Truncate,
            "pad" => FilterKind::Pad,
            "number" => FilterKind::Number,
            "time" => FilterKind::Time,
            _ => return None,
        })
    }

    /// The name used in template source.
    pub fn name(self) -> &'static str {
        match self {
            FilterKind::Lower => "lower",
            FilterKind::Upper => "upper",
            FilterKind::LowerLocale => "lower-locale",
            FilterKind::UpperLocale => "upper-locale",
            FilterKind::Trim => "trim",
            FilterKind::Left => "left",
            FilterKind::Right => "right",
            FilterKind::Mid => "mid",
            FilterKind::Slice => "slice",
            FilterKind::Length => "length",
            FilterKind::Truncate => "truncate",
            FilterKind::Pad => "pad",
            FilterKind::Number => "number",
            FilterKind::Time => "time",
        }
    }

    /// Accepted argument counts as an inclusive `(min, max)` range.
    pub fn arity(self) -> (usize, usize) {
        match self {
            FilterKind::Lower
            | FilterKind::Upper
            | FilterKind::LowerLocale
            | FilterKind::UpperLocale
            | FilterKind::Trim
            | FilterKind::Length => (0, 0),
            FilterKind::Left | FilterKind::Right | FilterKind::Number | FilterKind::Time => (1, 1),
            FilterKind::Mid => (2, 2),
            FilterKind::Slice | FilterKind::Truncate | FilterKind::Pad => (1, 2),
        }
    }

    /// The formatter family for filters whose sole argument is a pattern.
    ///
    /// These filters require the pattern to be a quoted literal.
    pub fn format_family(self) -> Option<FormatFamily> {
        match self {
            FilterKind::Number => Some(FormatFamily::Number),
            FilterKind::Time => Some(FormatFamily::Time),
            _ => None,
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FormatFamily {
    pub fn name(self) -> &'static str {
        match self {
            FormatFamily::Number => "number",
            FormatFamily::Time => "time",
        }
    }
}

impl fmt::Display for FormatFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_lookup() {
        for kind in FilterKind::ALL {
            assert_eq!(FilterKind::from_name(kind.name()), Some(kind));
        }
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(FilterKind::from_name("fake"), None);
        assert_eq!(FilterKind::from_name("LOWER"), None);
        assert_eq!(FilterKind::from_name(""), None);
    }

    #[test]
    fn only_number_and_time_take_patterns() {
        let with_family: Vec<_> = FilterKind::ALL
            .into_iter()
            .filter(|k| k.format_family().is_some())
            .collect();
        assert_eq!(with_family, vec![FilterKind::Number, FilterKind::Time]);
    }

    #[test]
    fn arity_bounds_are_ordered() {
        for kind in FilterKind::ALL {
            let (min, max) = kind.arity();
            assert!(min <= max, "{kind}");
        }
    }
}
