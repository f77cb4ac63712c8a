//! Half-open byte ranges into a token.

use std::fmt;
use std::ops::Range;

/// A half-open `[start, end)` byte range into a token.
///
/// Spans are plain values: they never own or borrow the text they index.
/// Every span produced by this crate satisfies `start <= end`, and indexes
/// only at ASCII boundaries, so slicing a `&str` with one is always valid.
///
/// # Examples
///
/// ```
/// use grepurls::Span;
///
/// let span = Span::new(1, 4);
/// assert_eq!(span.len(), 3);
/// assert_eq!(span.slice("(abc)"), "abc");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Creates a new span.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `start > end`.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// Creates an empty span at `at`.
    #[must_use]
    pub const fn empty(at: usize) -> Self {
        Self { start: at, end: at }
    }

    /// Returns the inclusive start offset.
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Returns the exclusive end offset.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Returns the number of bytes covered.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if the span covers nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the span as a `Range`.
    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Returns the text this span covers.
    ///
    /// # Panics
    ///
    /// Panics if the span is out of bounds for `text` or does not fall on
    /// character boundaries.
    #[must_use]
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.range()]
    }

    /// Returns the bytes this span covers.
    ///
    /// # Panics
    ///
    /// Panics if the span is out of bounds for `bytes`.
    #[must_use]
    pub fn slice_bytes<'a>(&self, bytes: &'a [u8]) -> &'a [u8] {
        &bytes[self.range()]
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.range()
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
