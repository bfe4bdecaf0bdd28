//! In-memory listing output
//!
//! The whole run is rendered as uncolored text into one `String`, with error
//! lines collected on the side.

use std::io;
use std::path::Path;

use crate::error::ListError;
use crate::listing::{DirEntry, ListingOptions, ListingOutput};

use super::config::OutputConfig;
use super::renderer::ListingRenderer;
use super::utils::{RenderedLine, plain_text};

/// Formatter that renders into a `String` and keeps diagnostics separately.
pub struct BufferedFormatter {
    renderer: ListingRenderer,
    output: String,
    errors: Vec<String>,
}

impl BufferedFormatter {
    pub fn new(options: &ListingOptions, config: OutputConfig) -> Self {
        Self::with_renderer(ListingRenderer::new(options, config))
    }

    pub fn with_renderer(renderer: ListingRenderer) -> Self {
        Self {
            renderer,
            output: String::new(),
            errors: Vec::new(),
        }
    }

    /// Everything written to the listing so far.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Diagnostic lines, one per directory that could not be listed.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    fn push_lines(&mut self, lines: &[RenderedLine]) {
        for line in lines {
            self.output.push_str(&plain_text(line));
            self.output.push('\n');
        }
    }
}

impl ListingOutput for BufferedFormatter {
    fn directory_header(&mut self, path: &Path) -> io::Result<()> {
        let lines = self.renderer.header(path);
        self.push_lines(&lines);
        Ok(())
    }

    fn entries(&mut self, entries: &[DirEntry]) -> io::Result<()> {
        let lines = self.renderer.entries(entries);
        self.push_lines(&lines);
        Ok(())
    }

    fn report_error(&mut self, err: &ListError) -> io::Result<()> {
        self.errors.push(err.to_string());
        Ok(())
    }
}
