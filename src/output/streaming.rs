//! Terminal output for a listing run
//!
//! Each directory's block goes to stdout and is flushed once its entries are
//! written, so a deep `-R` walk shows progress. Diagnostics go to stderr after
//! pending stdout is flushed, keeping the two streams in walk order.

use std::io::{self, Write};
use std::path::Path;

use termcolor::{ColorChoice, StandardStream, WriteColor};

use crate::error::ListError;
use crate::listing::{DirEntry, ListingOptions, ListingOutput};

use super::config::OutputConfig;
use super::renderer::ListingRenderer;
use super::utils::{RenderedLine, Segment};

/// Writes rendered lines to stdout through termcolor, one flush per directory.
pub struct StreamingFormatter {
    renderer: ListingRenderer,
    stdout: StandardStream,
    stderr: StandardStream,
}

impl StreamingFormatter {
    pub fn new(options: &ListingOptions, config: OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self {
            renderer: ListingRenderer::new(options, config),
            stdout: StandardStream::stdout(choice),
            stderr: StandardStream::stderr(ColorChoice::Never),
        }
    }

    /// Write rendered lines, coloring names when enabled.
    fn write_lines(&mut self, lines: &[RenderedLine]) -> io::Result<()> {
        let use_color = self.renderer.config().use_color;
        for line in lines {
            for segment in line {
                match segment {
                    Segment::Text(text) => write!(self.stdout, "{}", text)?,
                    Segment::Name { text, style } => match style.color_spec() {
                        Some(spec) if use_color => {
                            self.stdout.set_color(&spec)?;
                            write!(self.stdout, "{}", text)?;
                            self.stdout.reset()?;
                        }
                        _ => write!(self.stdout, "{}", text)?,
                    },
                }
            }
            writeln!(self.stdout)?;
        }
        Ok(())
    }
}

impl ListingOutput for StreamingFormatter {
    fn directory_header(&mut self, path: &Path) -> io::Result<()> {
        let lines = self.renderer.header(path);
        self.write_lines(&lines)
    }

    fn entries(&mut self, entries: &[DirEntry]) -> io::Result<()> {
        let lines = self.renderer.entries(entries);
        self.write_lines(&lines)?;
        self.stdout.flush()
    }

    fn report_error(&mut self, err: &ListError) -> io::Result<()> {
        self.stdout.flush()?;
        writeln!(self.stderr, "{}", err)
    }
}
