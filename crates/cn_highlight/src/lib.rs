//! Snippet highlighting for CodeNotes.
//!
//! Turns snippet text into an ordered list of colored [`Run`]s:
//!
//! ```text
//! text ──cn_lexer_core::Scanner──▶ RawSpan* ──RunAccumulator──▶ RunInfo* ──finish──▶ Run*
//!                                               │                              │
//!                                          KeywordTable                     Palette
//! ```
//!
//! Every input is renderable: the run texts always concatenate back to the
//! input, and malformed text (unterminated strings, trailing escapes) has
//! defined results rather than errors. Errors only exist at the edges,
//! when a [`Theme`] is built from configuration or a [`Surface`] fails
//! to draw.

mod accumulator;
mod category;
mod color;
mod keywords;
mod palette;
mod run;
mod surface;
mod theme;

pub use accumulator::{RunAccumulator, RunInfo};
pub use category::{Category, KeywordGroup};
pub use color::{ColorError, Rgb};
pub use keywords::{
    KeywordTable, KeywordTableBuilder, TableError, BLUE_KEYWORDS, GREEN_KEYWORDS, MAGENTA_KEYWORDS,
};
pub use palette::Palette;
pub use run::{to_records, OwnedRun, Run, RunRecord};
pub use surface::{AnsiSurface, RunBuffer, Snippet, Surface};
pub use theme::{GroupConfig, Theme, ThemeConfig, ThemeError};

pub use cn_lexer_core::{RawSpan, Span, SpanKind};

use cn_lexer_core::{Scanner, SourceBuffer};

/// Highlight one text snapshot with `theme`.
///
/// Runs borrow `text`. Re-running on identical text yields identical runs.
#[tracing::instrument(level = "debug", skip_all, fields(len = text.len()))]
pub fn highlight<'src>(text: &'src str, theme: &Theme) -> Vec<Run<'src>> {
    let buf = SourceBuffer::new(text);
    let mut accumulator = RunAccumulator::new(text, theme.keywords());
    accumulator.extend(Scanner::new(buf.cursor()));
    let runs = accumulator.finish(theme.palette());
    tracing::debug!(runs = runs.len(), "highlight complete");
    runs
}
