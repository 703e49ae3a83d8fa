//! Byte spans into a template source string.

use std::fmt;

/// Error when creating a span from a range that exceeds `u32::MAX`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanError {
    /// Span start position exceeds `u32::MAX`.
    StartTooLarge(usize),
    /// Span end position exceeds `u32::MAX`.
    EndTooLarge(usize),
}

impl fmt::Display for SpanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpanError::StartTooLarge(v) => write!(f, "span start {v} exceeds u32::MAX"),
            SpanError::EndTooLarge(v) => write!(f, "span end {v} exceeds u32::MAX"),
        }
    }
}

impl std::error::Error for SpanError {}

/// Source location span.
///
/// Layout: 8 bytes total
/// - start: u32 - byte offset from template start
/// - end: u32 - byte offset (exclusive)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Placeholder span for synthesized nodes.
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Try to create a span from a byte range.
    ///
    /// Returns an error if the range exceeds `u32::MAX` bytes.
    #[inline]
    pub fn try_from_range(range: std::ops::Range<usize>) -> Result<Self, SpanError> {
        let start =
            u32::try_from(range.start).map_err(|_| SpanError::StartTooLarge(range.start))?;
        let end = u32::try_from(range.end).map_err(|_| SpanError::EndTooLarge(range.end))?;
        Ok(Span { start, end })
    }

    /// Create from a byte range, saturating offsets at `u32::MAX`.
    ///
    /// Templates larger than 4 GiB still compile; their far-end spans
    /// simply stop being precise.
    #[inline]
    pub fn from_range(range: std::ops::Range<usize>) -> Self {
        Self::try_from_range(range.clone()).unwrap_or_else(|_| Span {
            start: u32::try_from(range.start).unwrap_or(u32::MAX),
            end: u32::try_from(range.end).unwrap_or(u32::MAX),
        })
    }

    /// Length of the span in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Shift both ends of the span by `offset` bytes.
    ///
    /// Used to move a span measured inside an interpolation token into
    /// template-level coordinates.
    #[inline]
    #[must_use]
    pub const fn offset(self, offset: u32) -> Span {
        Span {
            start: self.start.saturating_add(offset),
            end: self.end.saturating_add(offset),
        }
    }

    /// Create a point span (zero-length).
    #[inline]
    pub const fn point(offset: u32) -> Span {
        Span {
            start: offset,
            end: offset,
        }
    }

    /// Convert to a `std::ops::Range`.
    #[inline]
    pub fn to_range(&self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::Span;
    crate::static_assert_size!(Span, 8);
}
