//! Date formatting for the `time` filter, over chrono's strftime items.

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDateTime;

/// A compiled strftime pattern such as `"%Y-%m-%d"`.
///
/// The pattern is parsed into chrono items once; formatting a date only
/// walks the items.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeFormat {
    pattern: String,
    items: Vec<Item<'static>>,
}

impl TimeFormat {
    pub fn parse(pattern: &str) -> Result<Self, String> {
        let mut items = Vec::new();
        for item in StrftimeItems::new(pattern) {
            if matches!(item, Item::Error) {
                return Err("unsupported or incomplete `%` specifier".to_string());
            }
            items.push(into_owned(item));
        }
        Ok(TimeFormat {
            pattern: pattern.to_string(),
            items,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Format `date`, or `None` when a specifier needs information the
    /// date does not carry (such as `%z` on a date without an offset).
    pub fn format(&self, date: NaiveDateTime) -> Option<String> {
        let mut out = String::new();
        write!(out, "{}", date.format_with_items(self.items.iter())).ok()?;
        Some(out)
    }
}

fn into_owned(item: Item<'_>) -> Item<'static> {
    match item {
        Item::Literal(s) => Item::OwnedLiteral(s.into()),
        Item::Space(s) => Item::OwnedSpace(s.into()),
        Item::OwnedLiteral(s) => Item::OwnedLiteral(s),
        Item::OwnedSpace(s) => Item::OwnedSpace(s),
        Item::Numeric(numeric, pad) => Item::Numeric(numeric, pad),
        Item::Fixed(fixed) => Item::Fixed(fixed),
        Item::Error => Item::Error,
    }
}
