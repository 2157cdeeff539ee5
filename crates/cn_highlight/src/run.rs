//! Styled runs, the unit handed to a display surface.

use cn_lexer_core::Span;
use serde::Serialize;

use crate::category::Category;
use crate::color::Rgb;
use crate::theme::Theme;

/// A maximal text fragment drawn in one color.
///
/// Borrows the text snapshot it was built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Run<'src> {
    pub text: &'src str,
    pub span: Span,
    pub category: Category,
    pub color: Rgb,
}

impl Run<'_> {
    pub fn to_owned_run(&self) -> OwnedRun {
        OwnedRun {
            text: self.text.to_owned(),
            category: self.category,
            color: self.color,
        }
    }
}

/// A [`Run`] detached from its source text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OwnedRun {
    pub text: String,
    pub category: Category,
    pub color: Rgb,
}

/// JSON view of a run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RunRecord<'a> {
    pub text: &'a str,
    pub color: Rgb,
    pub category: &'a str,
    /// Inclusive byte offsets.
    pub start: u32,
    pub end: u32,
}

/// Describe `runs` for serialization, naming categories through `theme`.
pub fn to_records<'a>(runs: &'a [Run<'_>], theme: &'a Theme) -> Vec<RunRecord<'a>> {
    runs.iter()
        .map(|run| RunRecord {
            text: run.text,
            color: run.color,
            category: theme.category_name(run.category),
            start: run.span.start,
            end: run.span.end,
        })
        .collect()
}
