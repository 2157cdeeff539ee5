//! Display surfaces and the snippet controller that feeds them.
//!
//! A [`Surface`] shows exactly the runs of the latest scan: every
//! [`replace`](Surface::replace) clears what was there and draws the new
//! list. [`Snippet`] wires a text-change notification to one full,
//! synchronous re-scan followed by one `replace`.

use std::convert::Infallible;
use std::io::{self, Write};

use tracing::debug;

use crate::highlight;
use crate::run::{OwnedRun, Run};
use crate::theme::Theme;

/// Host display surface.
pub trait Surface {
    type Error;

    /// Drop the current content and show `runs` in order.
    fn replace(&mut self, runs: &[Run<'_>]) -> Result<(), Self::Error>;
}

/// In-memory surface holding owned copies of the latest runs.
#[derive(Clone, Debug, Default)]
pub struct RunBuffer {
    runs: Vec<OwnedRun>,
    replacements: u64,
}

impl RunBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn runs(&self) -> &[OwnedRun] {
        &self.runs
    }

    /// Concatenated text of the current runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }

    /// How many times the content has been replaced.
    pub fn replacements(&self) -> u64 {
        self.replacements
    }
}

impl Surface for RunBuffer {
    type Error = Infallible;

    fn replace(&mut self, runs: &[Run<'_>]) -> Result<(), Infallible> {
        self.runs.clear();
        self.runs.extend(runs.iter().map(Run::to_owned_run));
        self.replacements += 1;
        Ok(())
    }
}

/// Writes runs as 24-bit ANSI foreground colors.
///
/// Terminals cannot clear what was already printed, so each `replace`
/// simply writes the new list, followed by a color reset.
pub struct AnsiSurface<W: Write> {
    out: W,
}

impl<W: Write> AnsiSurface<W> {
    pub fn new(out: W) -> Self {
        AnsiSurface { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Surface for AnsiSurface<W> {
    type Error = io::Error;

    fn replace(&mut self, runs: &[Run<'_>]) -> io::Result<()> {
        for run in runs {
            let c = run.color;
            write!(self.out, "\x1b[38;2;{};{};{}m{}", c.r, c.g, c.b, run.text)?;
        }
        if !runs.is_empty() {
            self.out.write_all(b"\x1b[0m")?;
        }
        self.out.flush()
    }
}

/// An editable snippet bound to a theme and a surface.
///
/// Each [`on_text_changed`](Self::on_text_changed) re-scans the full text;
/// there is no incremental update.
pub struct Snippet<'t, S> {
    theme: &'t Theme,
    surface: S,
}

impl<'t, S: Surface> Snippet<'t, S> {
    pub fn new(theme: &'t Theme, surface: S) -> Self {
        Snippet { theme, surface }
    }

    /// Re-highlight `text` and replace the surface content.
    ///
    /// Returns the number of runs drawn. Only the surface itself can fail;
    /// every input text produces a run list.
    pub fn on_text_changed(&mut self, text: &str) -> Result<usize, S::Error> {
        let runs = highlight(text, self.theme);
        self.surface.replace(&runs)?;
        debug!(runs = runs.len(), "surface replaced");
        Ok(runs.len())
    }

    pub fn theme(&self) -> &'t Theme {
        self.theme
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
