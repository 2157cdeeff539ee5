//! Single-pass span scanner.
//!
//! Splits text into plain tokens, delimiter characters, and quoted string
//! literals. The scanner does not classify anything; keyword lookup and
//! coloring live in `cn_highlight`.
//!
//! # Rules
//!
//! - Outside a string, whitespace or a symbol from [`SYMBOLS`] ends the
//!   pending plain token and is emitted as its own one-character span.
//! - A `'` or `"` ends the pending plain token and opens a string literal.
//! - Inside a string, `\` skips the next character unconditionally; the
//!   same quote character that opened the literal closes it.
//! - An unterminated literal runs to the end of the text.
//!
//! Every byte of the input lands in exactly one span, and no span is empty.

use std::iter::FusedIterator;

use crate::cursor::Cursor;
use crate::span::RawSpan;

/// Symbol characters that always stand alone as one-character tokens.
pub const SYMBOLS: [u8; 14] = [
    b'.', b',', b';', b'=', b'+', b'-', b'*', b'{', b'}', b'(', b')', b'[', b']', b'@',
];

/// Returns `true` if `byte` is in [`SYMBOLS`].
#[inline]
pub fn is_symbol(byte: u8) -> bool {
    matches!(
        byte,
        b'.' | b','
            | b';'
            | b'='
            | b'+'
            | b'-'
            | b'*'
            | b'{'
            | b'}'
            | b'('
            | b')'
            | b'['
            | b']'
            | b'@'
    )
}

/// Returns `true` if `ch` opens or closes a string literal.
#[inline]
pub fn is_quote(ch: char) -> bool {
    ch == '"' || ch == '\''
}

/// Returns `true` if `ch` ends a plain token (whitespace or a symbol).
#[inline]
pub fn is_delimiter(ch: char) -> bool {
    ch.is_whitespace() || (ch.is_ascii() && is_symbol(ch as u8))
}

/// Forward-only span scanner over one text snapshot.
///
/// Produces spans strictly left to right. A delimiter or an opening quote
/// can complete two spans at once (the pending plain token and the
/// delimiter or literal itself); the second is held in `queued` and
/// returned by the following call.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    /// Start of the pending plain token. Equal to the cursor position when
    /// nothing is pending.
    plain_start: u32,
    queued: Option<RawSpan>,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner from a cursor.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self {
            plain_start: cursor.pos(),
            cursor,
            queued: None,
        }
    }

    /// Produce the next span, or `None` once the text is exhausted.
    ///
    /// Subsequent calls after the end keep returning `None`.
    pub fn next_span(&mut self) -> Option<RawSpan> {
        if let Some(span) = self.queued.take() {
            return Some(span);
        }

        while !self.cursor.is_eof() {
            let start = self.cursor.pos();
            match self.cursor.current() {
                quote @ (b'"' | b'\'') => {
                    let pending = self.close_plain(start);
                    let literal = self.string(start, quote);
                    return Some(self.emit(pending, literal));
                }
                b if is_symbol(b) => return Some(self.delimiter(start)),
                b if b.is_ascii() => {
                    if char::from(b).is_whitespace() {
                        return Some(self.delimiter(start));
                    }
                    self.cursor.advance();
                }
                _ => {
                    if self.cursor.current_char().is_whitespace() {
                        return Some(self.delimiter(start));
                    }
                    self.cursor.advance_char();
                }
            }
        }

        self.close_plain(self.cursor.pos())
    }

    /// Close the pending plain token just before `end` (exclusive).
    ///
    /// Returns `None` when nothing is pending.
    fn close_plain(&mut self, end: u32) -> Option<RawSpan> {
        let start = self.plain_start;
        self.plain_start = end;
        (start < end).then(|| RawSpan::plain(start, end - 1))
    }

    /// Emit a delimiter character at `start` as its own span.
    fn delimiter(&mut self, start: u32) -> RawSpan {
        let pending = self.close_plain(start);
        self.cursor.advance_char();
        self.plain_start = self.cursor.pos();
        let delimiter = RawSpan::plain(start, self.cursor.pos() - 1);
        self.emit(pending, delimiter)
    }

    /// Scan a string literal opened by `quote` at `start`.
    fn string(&mut self, start: u32, quote: u8) -> RawSpan {
        self.cursor.advance(); // consume opening quote
        loop {
            match self.cursor.skip_to_string_delim(quote) {
                b'\\' => {
                    self.cursor.advance(); // consume '\'
                    self.cursor.advance_char(); // escaped char, clamped at EOF
                }
                0 => {
                    // Unterminated: the literal owns the rest of the text.
                    self.plain_start = self.cursor.pos();
                    return RawSpan::string(start, self.cursor.pos() - 1);
                }
                _ => {
                    self.cursor.advance(); // consume closing quote
                    self.plain_start = self.cursor.pos();
                    return RawSpan::string(start, self.cursor.pos() - 1);
                }
            }
        }
    }

    /// Return `first` if present, holding `second` for the next call.
    fn emit(&mut self, first: Option<RawSpan>, second: RawSpan) -> RawSpan {
        match first {
            Some(first) => {
                self.queued = Some(second);
                first
            }
            None => second,
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = RawSpan;

    #[inline]
    fn next(&mut self) -> Option<RawSpan> {
        self.next_span()
    }
}

impl FusedIterator for Scanner<'_> {}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
