//! CLI entry point for lsr

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use lsr::metadata::now_secs;
use lsr::terminal::detect_width;
use lsr::{ListingOptions, OutputConfig, RecursiveWalker, StreamingFormatter};
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "lsr")]
#[command(about = "List directory contents")]
#[command(version)]
struct Args {
    /// Directory to list
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Do not ignore entries starting with .
    #[arg(short, long)]
    all: bool,

    /// Use a long listing format
    #[arg(short = 'l')]
    long: bool,

    /// List entries by lines instead of by columns
    #[arg(short = 'x')]
    across: bool,

    /// List subdirectories recursively
    #[arg(short = 'R', long = "recursive")]
    recursive: bool,

    /// List one entry per line
    #[arg(short = '1')]
    one_per_line: bool,

    /// Do not sort; list entries in directory order
    #[arg(short = 'U', long = "unsorted")]
    unsorted: bool,

    /// List numeric user and group IDs
    #[arg(short = 'n', long = "numeric-uid-gid")]
    numeric_ids: bool,

    /// Set output width to COLS (default: $COLUMNS, then terminal width, then 80)
    #[arg(short = 'w', long = "width", value_name = "COLS")]
    width: Option<usize>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Log traversal details to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .without_time()
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("lsr: cannot initialize logging: {}", e);
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let options = ListingOptions {
        show_hidden: args.all,
        long_format: args.long,
        horizontal_layout: args.across,
        recursive: args.recursive,
        sort: !args.unsorted,
        one_per_line: args.one_per_line,
        numeric_ids: args.numeric_ids,
    };

    let config = OutputConfig {
        use_color: should_use_color(args.color),
        width: detect_width(args.width),
        now: now_secs(),
    };
    debug!("options: {:?}, width: {}", options, config.width);

    let mut formatter = StreamingFormatter::new(&options, config);
    match RecursiveWalker::new(&options).walk(&args.path, &mut formatter) {
        Ok(summary) if summary.is_success() => {}
        Ok(_) => process::exit(1),
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {}
        Err(e) => {
            eprintln!("lsr: error writing output: {}", e);
            process::exit(1);
        }
    }
}
