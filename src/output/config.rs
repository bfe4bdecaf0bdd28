//! Output configuration types

use crate::metadata::now_secs;
use crate::terminal::DEFAULT_WIDTH;

/// Configuration for output formatting.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
    /// Line width available to the short-format grid.
    pub width: usize,
    /// Reference time for long-format timestamps, fixed for the whole run.
    pub now: i64,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_color: false,
            width: DEFAULT_WIDTH,
            now: now_secs(),
        }
    }
}
