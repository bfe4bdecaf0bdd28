//! Turns listing events into rendered lines, shared by every formatter

use std::path::Path;

use crate::ids::{IdResolver, NumericIdResolver, SystemIdResolver};
use crate::listing::{DirEntry, ListingOptions};

use super::config::OutputConfig;
use super::grid::{GridStyle, grid_lines};
use super::long::long_lines;
use super::utils::{RenderedLine, Segment};

/// Picks long or grid rendering from the run's options.
pub struct ListingRenderer {
    options: ListingOptions,
    config: OutputConfig,
    resolver: Box<dyn IdResolver>,
}

impl ListingRenderer {
    pub fn new(options: &ListingOptions, config: OutputConfig) -> Self {
        let resolver: Box<dyn IdResolver> = if options.numeric_ids {
            Box::new(NumericIdResolver)
        } else {
            Box::new(SystemIdResolver::new())
        };
        Self {
            options: options.clone(),
            config,
            resolver,
        }
    }

    /// Replace the id resolver (tests use a numeric one for stable output).
    pub fn with_resolver(mut self, resolver: Box<dyn IdResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn config(&self) -> &OutputConfig {
        &self.config
    }

    /// A blank line, then `<path>:`.
    pub fn header(&self, path: &Path) -> Vec<RenderedLine> {
        vec![
            Vec::new(),
            vec![Segment::Text(format!("{}:", path.display()))],
        ]
    }

    pub fn entries(&mut self, entries: &[DirEntry]) -> Vec<RenderedLine> {
        if self.options.long_format {
            long_lines(entries, self.resolver.as_mut(), self.config.now)
        } else {
            grid_lines(
                entries,
                GridStyle {
                    width: self.config.width,
                    order: self.options.fill_order(),
                    one_per_line: self.options.one_per_line,
                },
            )
        }
    }
}
