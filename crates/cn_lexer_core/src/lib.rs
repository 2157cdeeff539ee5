//! Standalone span scanner for CodeNotes snippets.
//!
//! Splits snippet text into an ordered, gap-free sequence of [`RawSpan`]s:
//! plain tokens, one-character delimiters, and quoted string literals.
//! Classification and coloring are left to `cn_highlight`.
//!
//! ```text
//! SourceBuffer ──cursor()──▶ Cursor ──▶ Scanner ──▶ RawSpan, RawSpan, ...
//! ```
//!
//! The scanner never fails. Unterminated literals, trailing escapes and
//! empty input all have defined results.

mod cursor;
mod scanner;
mod source_buffer;
mod span;

pub use cursor::Cursor;
pub use scanner::{is_delimiter, is_quote, is_symbol, Scanner, SYMBOLS};
pub use source_buffer::SourceBuffer;
pub use span::{RawSpan, Span, SpanKind};

/// Scan `source` into its ordered spans.
///
/// Convenience wrapper that builds a [`SourceBuffer`] snapshot and drains a
/// [`Scanner`] over it.
pub fn scan(source: &str) -> Vec<RawSpan> {
    let buf = SourceBuffer::new(source);
    Scanner::new(buf.cursor()).collect()
}
