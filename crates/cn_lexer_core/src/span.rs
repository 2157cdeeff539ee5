//! Span types produced by the scanner.

use std::ops::Range;

/// Inclusive byte range `[start, end]` into the scanned text.
///
/// Never empty: `start <= end`. `start` and `end + 1` are character
/// boundaries, so `&source[span.range()]` never panics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Create a span covering `start..=end`.
    #[inline]
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end, "empty span {start}..={end}");
        Span { start, end }
    }

    /// Number of bytes covered.
    #[allow(clippy::len_without_is_empty, reason = "spans are never empty")]
    #[inline]
    pub fn len(self) -> u32 {
        self.end - self.start + 1
    }

    /// Half-open byte range, for slicing the source.
    #[inline]
    pub fn range(self) -> Range<usize> {
        self.start as usize..self.end as usize + 1
    }

    /// Same start, new inclusive end.
    #[inline]
    pub fn with_end(self, end: u32) -> Self {
        Span::new(self.start, end)
    }
}

/// Whether a span lies inside a string literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpanKind {
    /// Outside any string literal: a word, a symbol, or a whitespace character.
    Plain,
    /// A quoted literal, quotes included.
    String,
}

/// A span tagged with its kind, the unit the scanner emits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RawSpan {
    pub span: Span,
    pub kind: SpanKind,
}

impl RawSpan {
    #[inline]
    pub fn plain(start: u32, end: u32) -> Self {
        RawSpan {
            span: Span::new(start, end),
            kind: SpanKind::Plain,
        }
    }

    #[inline]
    pub fn string(start: u32, end: u32) -> Self {
        RawSpan {
            span: Span::new(start, end),
            kind: SpanKind::String,
        }
    }

    /// The text this span covers in `source`.
    ///
    /// `source` must be the text the span was scanned from.
    #[inline]
    pub fn text(self, source: &str) -> &str {
        &source[self.span.range()]
    }
}
