//! CodeNotes snippet highlighter - command line front end.
//!
//! The binary is a thin host around `cn_highlight`: it reads a snippet,
//! highlights it once, and writes the runs as ANSI color or JSON.

pub mod commands;

pub use commands::{
    load_theme, parse_theme_options, read_input, run_highlight, run_theme, write_highlighted,
    CliError, HighlightOptions, Input, OutputFormat,
};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=cn_highlight=debug`
/// (or `trace` for per-span detail); set `CN_LOG_TREE=1` to get an indented
/// span tree instead of flat lines. Logs go to stderr so JSON output on
/// stdout stays clean.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        if std::env::var_os("CN_LOG_TREE").is_some() {
            tracing_subscriber::registry()
                .with(tracing_tree::HierarchicalLayer::new(2))
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
