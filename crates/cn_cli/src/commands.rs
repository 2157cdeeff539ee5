//! `codenotes` subcommands.
//!
//! Each command parses its own arguments, loads the theme, and reports
//! failures as [`CliError`]. `main` prints the error and exits.

use std::borrow::Cow;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use cn_highlight::{highlight, to_records, AnsiSurface, Snippet, Theme, ThemeError};
use tracing::debug;

/// Where the snippet text comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

/// How runs are written to stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// 24-bit ANSI colored text.
    #[default]
    Ansi,
    /// JSON array of run records.
    Json,
}

/// Options for `codenotes highlight`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HighlightOptions {
    pub input: Input,
    pub format: OutputFormat,
    pub theme: Option<PathBuf>,
}

impl HighlightOptions {
    /// Parse the arguments following `highlight`.
    pub fn parse(args: &[String]) -> Result<Self, CliError> {
        let mut input = None;
        let mut format = OutputFormat::default();
        let mut theme = None;

        for arg in args {
            if arg == "--json" {
                format = OutputFormat::Json;
            } else if let Some(path) = arg.strip_prefix("--theme=") {
                theme = Some(parse_theme_path(path)?);
            } else if arg == "-" {
                input = Some(set_once(input, Input::Stdin)?);
            } else if arg.starts_with('-') {
                return Err(CliError::Usage(format!("unknown option `{arg}`")));
            } else {
                input = Some(set_once(input, Input::File(PathBuf::from(arg)))?);
            }
        }

        let Some(input) = input else {
            return Err(CliError::Usage("missing input file (use `-` for stdin)".to_owned()));
        };
        Ok(HighlightOptions {
            input,
            format,
            theme,
        })
    }
}

/// Parse the arguments following `theme`: an optional `--theme=<path>`.
pub fn parse_theme_options(args: &[String]) -> Result<Option<PathBuf>, CliError> {
    let mut theme = None;
    for arg in args {
        if let Some(path) = arg.strip_prefix("--theme=") {
            theme = Some(parse_theme_path(path)?);
        } else {
            return Err(CliError::Usage(format!("unexpected argument `{arg}`")));
        }
    }
    Ok(theme)
}

fn parse_theme_path(path: &str) -> Result<PathBuf, CliError> {
    if path.is_empty() {
        return Err(CliError::Usage("`--theme=` needs a path".to_owned()));
    }
    Ok(PathBuf::from(path))
}

fn set_once(current: Option<Input>, next: Input) -> Result<Input, CliError> {
    match current {
        None => Ok(next),
        Some(_) => Err(CliError::Usage("only one input may be given".to_owned())),
    }
}

/// Load the theme at `path`, or the built-in theme.
pub fn load_theme(path: Option<&Path>) -> Result<Cow<'static, Theme>, CliError> {
    let Some(path) = path else {
        return Ok(Cow::Borrowed(Theme::builtin_shared()));
    };
    debug!(path = %path.display(), "loading theme");
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_owned(),
        source,
    })?;
    let theme = Theme::from_json(&text).map_err(|source| CliError::Theme {
        path: path.to_owned(),
        source,
    })?;
    Ok(Cow::Owned(theme))
}

/// Read the snippet text.
///
/// Invalid UTF-8 is replaced with U+FFFD so any file can be highlighted.
pub fn read_input(input: &Input) -> Result<String, CliError> {
    let (path, bytes) = match input {
        Input::Stdin => {
            let mut bytes = Vec::new();
            let read = io::stdin().lock().read_to_end(&mut bytes);
            (Path::new("<stdin>"), read.map(|_| bytes))
        }
        Input::File(path) => (path.as_path(), std::fs::read(path)),
    };
    let bytes = bytes.map_err(|source| CliError::Read {
        path: path.to_owned(),
        source,
    })?;
    Ok(decode_lossy(bytes))
}

fn decode_lossy(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            debug!(valid_up_to = err.utf8_error().valid_up_to(), "input is not UTF-8");
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    }
}

/// Highlight `text` and write it to `out` in `format`.
pub fn write_highlighted<W: Write>(
    text: &str,
    theme: &Theme,
    format: OutputFormat,
    mut out: W,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Ansi => {
            let mut snippet = Snippet::new(theme, AnsiSurface::new(out));
            snippet.on_text_changed(text)?;
        }
        OutputFormat::Json => {
            let runs = highlight(text, theme);
            serde_json::to_writer_pretty(&mut out, &to_records(&runs, theme))?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// `codenotes highlight <file|-> [--json] [--theme=<path>]`
pub fn run_highlight(options: &HighlightOptions) -> Result<(), CliError> {
    let theme = load_theme(options.theme.as_deref())?;
    let text = read_input(&options.input)?;
    debug!(bytes = text.len(), format = ?options.format, "highlighting input");
    write_highlighted(&text, &theme, options.format, io::stdout().lock())
}

/// `codenotes theme [--theme=<path>]`: print the effective theme as JSON.
pub fn run_theme(path: Option<&Path>) -> Result<(), CliError> {
    let theme = load_theme(path)?;
    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &theme.to_config())?;
    writeln!(out)?;
    Ok(())
}

/// Command failure, printed by `main` before exiting with status 1.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("cannot read `{}`: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("cannot load theme `{}`: {source}", path.display())]
    Theme { path: PathBuf, source: ThemeError },
    #[error("cannot write output: {0}")]
    Write(#[from] io::Error),
    #[error("cannot encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
