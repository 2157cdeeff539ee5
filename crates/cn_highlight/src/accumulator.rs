//! Run accumulation: classify spans, merge default text, fill gaps.
//!
//! Spans arrive in scan order. Plain spans are classified against the
//! keyword table; a default span directly after a default entry extends
//! that entry instead of starting a new one, so a stretch of ordinary words,
//! spaces and symbols becomes a single run. String spans are never
//! classified and never merged.
//!
//! [`RunAccumulator::finish`] then walks the entries in order and bridges
//! any uncovered bytes with default-colored runs, so the output always
//! reproduces the whole input.

use cn_lexer_core::{RawSpan, Span, SpanKind};
use tracing::trace;

use crate::category::Category;
use crate::keywords::KeywordTable;
use crate::palette::Palette;
use crate::run::Run;

/// One accumulated entry, before colors are resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunInfo {
    pub span: Span,
    pub category: Category,
}

/// Collects classified spans for one scan of one text snapshot.
pub struct RunAccumulator<'src, 't> {
    source: &'src str,
    keywords: &'t KeywordTable,
    entries: Vec<RunInfo>,
}

impl<'src, 't> RunAccumulator<'src, 't> {
    pub fn new(source: &'src str, keywords: &'t KeywordTable) -> Self {
        Self {
            source,
            keywords,
            entries: Vec::new(),
        }
    }

    /// Add the next span in scan order.
    pub fn push(&mut self, raw: RawSpan) {
        let category = match raw.kind {
            SpanKind::String => Category::StringLiteral,
            SpanKind::Plain => self.keywords.classify(raw.text(self.source)),
        };

        if category.is_default() {
            if let Some(last) = self.entries.last_mut() {
                if last.category.is_default() {
                    last.span = last.span.with_end(raw.span.end);
                    trace!(start = last.span.start, end = last.span.end, "merged default");
                    return;
                }
            }
        }

        trace!(
            start = raw.span.start,
            end = raw.span.end,
            ?category,
            "new entry"
        );
        self.entries.push(RunInfo {
            span: raw.span,
            category,
        });
    }

    /// Entries accumulated so far, in scan order.
    pub fn entries(&self) -> &[RunInfo] {
        &self.entries
    }

    /// Resolve colors and produce the gap-free run list.
    pub fn finish(self, palette: &Palette) -> Vec<Run<'src>> {
        let mut runs = Vec::with_capacity(self.entries.len() + 1);
        let mut next = 0usize;

        for info in &self.entries {
            let start = info.span.start as usize;
            if start > next {
                runs.push(self.bridge(next, start, palette));
            }
            runs.push(Run {
                text: &self.source[info.span.range()],
                span: info.span,
                category: info.category,
                color: palette.color_of(info.category),
            });
            next = info.span.end as usize + 1;
        }

        if next < self.source.len() {
            runs.push(self.bridge(next, self.source.len(), palette));
        }
        runs
    }

    /// Default-colored run over the uncovered bytes `start..end`.
    fn bridge(&self, start: usize, end: usize, palette: &Palette) -> Run<'src> {
        trace!(start, end, "bridging gap");
        Run {
            text: &self.source[start..end],
            span: Span::new(saturate(start), saturate(end - 1)),
            category: Category::Default,
            color: palette.default_color(),
        }
    }
}

impl Extend<RawSpan> for RunAccumulator<'_, '_> {
    fn extend<I: IntoIterator<Item = RawSpan>>(&mut self, spans: I) {
        for raw in spans {
            self.push(raw);
        }
    }
}

/// Offsets past `u32::MAX` only occur in the unscanned tail of oversized text.
fn saturate(offset: usize) -> u32 {
    u32::try_from(offset).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests;
