//! RecursiveWalker - depth-first, pre-order traversal of a directory tree

use std::ffi::OsString;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::error::ListError;

use super::config::ListingOptions;
use super::lister::{DirEntry, DirectoryLister};

/// Sink for listing output, one directory at a time.
pub trait ListingOutput {
    /// Called before each directory's block in recursive mode.
    fn directory_header(&mut self, path: &Path) -> io::Result<()>;

    /// The filtered, ordered entries of one directory.
    fn entries(&mut self, entries: &[DirEntry]) -> io::Result<()>;

    /// A directory that could not be listed.
    fn report_error(&mut self, err: &ListError) -> io::Result<()>;
}

/// Counts of directories processed during a walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    pub listed: usize,
    pub failed: usize,
}

impl WalkSummary {
    /// A run succeeds when at least one directory was listed.
    pub fn is_success(&self) -> bool {
        self.listed > 0
    }
}

/// Lists a directory, and with `recursive` set, every real subdirectory below it.
pub struct RecursiveWalker<'a> {
    options: &'a ListingOptions,
    lister: DirectoryLister<'a>,
}

impl<'a> RecursiveWalker<'a> {
    pub fn new(options: &'a ListingOptions) -> Self {
        Self {
            options,
            lister: DirectoryLister::new(options),
        }
    }

    /// Walk from `root`, sending every directory to `output`.
    ///
    /// Unreadable directories are reported through the output and skipped;
    /// only write errors end the walk early.
    pub fn walk<O: ListingOutput>(&self, root: &Path, output: &mut O) -> io::Result<WalkSummary> {
        let mut summary = WalkSummary::default();
        if self.options.recursive {
            self.walk_dir(root, output, &mut summary)?;
        } else if let Some(entries) = self.list_one(root, output, &mut summary)? {
            output.entries(&entries)?;
        }
        Ok(summary)
    }

    fn walk_dir<O: ListingOutput>(
        &self,
        dir: &Path,
        output: &mut O,
        summary: &mut WalkSummary,
    ) -> io::Result<()> {
        output.directory_header(dir)?;

        let Some(entries) = self.list_one(dir, output, summary)? else {
            return Ok(());
        };
        output.entries(&entries)?;

        // Keep only what the descent needs so sibling listings are not held in memory.
        let subdirs: Vec<OsString> = entries
            .into_iter()
            .filter(DirEntry::is_descendable)
            .map(|e| e.name)
            .collect();

        for name in subdirs {
            let child = dir.join(&name);
            debug!("descending into {}", child.display());
            self.walk_dir(&child, output, summary)?;
        }
        Ok(())
    }

    fn list_one<O: ListingOutput>(
        &self,
        dir: &Path,
        output: &mut O,
        summary: &mut WalkSummary,
    ) -> io::Result<Option<Vec<DirEntry>>> {
        match self.lister.list(dir) {
            Ok(entries) => {
                summary.listed += 1;
                Ok(Some(entries))
            }
            Err(err) => {
                summary.failed += 1;
                output.report_error(&err)?;
                Ok(None)
            }
        }
    }
}
