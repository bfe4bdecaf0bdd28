//! Output width detection

use std::io::IsTerminal;

/// Width used when nothing better is known.
pub const DEFAULT_WIDTH: usize = 80;

/// Pick the output width for grid layout.
///
/// Order: an explicit override, then `COLUMNS`, then the size of the terminal
/// attached to stdout. Anything zero or unparsable is skipped.
pub fn detect_width(explicit: Option<usize>) -> usize {
    explicit
        .filter(|&w| w > 0)
        .or_else(|| parse_columns(std::env::var("COLUMNS").ok().as_deref()))
        .or_else(terminal_columns)
        .unwrap_or(DEFAULT_WIDTH)
}

fn parse_columns(value: Option<&str>) -> Option<usize> {
    value
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|&w| w > 0)
}

fn terminal_columns() -> Option<usize> {
    if !std::io::stdout().is_terminal() {
        return None;
    }
    crossterm::terminal::size()
        .ok()
        .map(|(cols, _)| cols as usize)
        .filter(|&w| w > 0)
}
