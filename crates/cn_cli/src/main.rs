//! CodeNotes snippet highlighter CLI.

use cn_cli::{init_tracing, parse_theme_options, run_highlight, run_theme, HighlightOptions};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    let result = match command.as_str() {
        "highlight" => match HighlightOptions::parse(&args[2..]) {
            Ok(options) => run_highlight(&options),
            Err(err) => {
                eprintln!("error: {err}");
                eprintln!();
                eprintln!("Usage: codenotes highlight <file|-> [--json] [--theme=<path>]");
                std::process::exit(1);
            }
        },
        "theme" => match parse_theme_options(&args[2..]) {
            Ok(path) => run_theme(path.as_deref()),
            Err(err) => {
                eprintln!("error: {err}");
                eprintln!();
                eprintln!("Usage: codenotes theme [--theme=<path>]");
                std::process::exit(1);
            }
        },
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("CodeNotes snippet highlighter");
    println!();
    println!("Usage: codenotes <command> [options]");
    println!();
    println!("Commands:");
    println!("  highlight <file|->   Highlight a snippet (`-` reads stdin)");
    println!("  theme                Print the effective theme as JSON");
    println!("  help                 Show this message");
    println!();
    println!("Options:");
    println!("  --json               Write runs as JSON instead of ANSI color");
    println!("  --theme=<path>       Load colors and keywords from a JSON theme");
    println!();
    println!("Logging: RUST_LOG=cn_highlight=debug (CN_LOG_TREE=1 for a span tree)");
}
