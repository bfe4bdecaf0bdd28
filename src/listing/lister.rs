//! DirectoryLister - reads one directory into an ordered entry list

use std::borrow::Cow;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{ListError, describe};
use crate::metadata::{EntryKind, EntryMetadata};

use super::config::ListingOptions;
use super::filter::{is_visible, sort_by_name};

/// One entry found directly inside a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// Raw filesystem name.
    pub name: OsString,
    /// Sentinel (`EntryMetadata::default()`) when the lookup failed.
    pub metadata: EntryMetadata,
    /// Target of a symbolic link, when it could be read.
    pub link_target: Option<PathBuf>,
}

impl DirEntry {
    /// Look up metadata for `name` inside `dir`, degrading to sentinel values.
    pub fn load(dir: &Path, name: OsString) -> Self {
        let path = dir.join(&name);
        let metadata = EntryMetadata::read(&path).unwrap_or_else(|e| {
            warn!("cannot access {}: {}", path.display(), describe(&e));
            EntryMetadata::default()
        });
        let link_target = if metadata.kind == EntryKind::Symlink {
            fs::read_link(&path).ok()
        } else {
            None
        };
        Self {
            name,
            metadata,
            link_target,
        }
    }

    /// Name for display; invalid UTF-8 is replaced.
    pub fn display_name(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }

    /// `.` and `..`, which are listed with `-a` but never descended into.
    pub fn is_self_or_parent(&self) -> bool {
        self.name == "." || self.name == ".."
    }

    /// A real subdirectory the walker should descend into.
    ///
    /// Symlinks never qualify, even when they point at a directory.
    pub fn is_descendable(&self) -> bool {
        self.metadata.is_dir() && !self.is_self_or_parent()
    }
}

/// Reads a single directory according to the run's options.
pub struct DirectoryLister<'a> {
    options: &'a ListingOptions,
}

impl<'a> DirectoryLister<'a> {
    pub fn new(options: &'a ListingOptions) -> Self {
        Self { options }
    }

    /// Read, filter and (optionally) sort the entries of `dir`.
    pub fn list(&self, dir: &Path) -> Result<Vec<DirEntry>, ListError> {
        let read = fs::read_dir(dir).map_err(|e| ListError::unreadable("opendir", dir, e))?;
        let mut entries: Vec<DirEntry> = Vec::new();

        if self.options.show_hidden {
            for name in [".", ".."] {
                push_entry(&mut entries, dir, DirEntry::load(dir, OsString::from(name)))?;
            }
        }

        for item in read {
            let item = match item {
                Ok(item) => item,
                Err(e) => {
                    warn!("reading directory {}: {}", dir.display(), describe(&e));
                    break;
                }
            };
            let name = item.file_name();
            if !is_visible(&name, self.options.show_hidden) {
                continue;
            }
            push_entry(&mut entries, dir, DirEntry::load(dir, name))?;
        }

        if self.options.sorts() {
            sort_by_name(&mut entries);
        }

        debug!("listed {} entries in {}", entries.len(), dir.display());
        Ok(entries)
    }
}

fn push_entry(entries: &mut Vec<DirEntry>, dir: &Path, entry: DirEntry) -> Result<(), ListError> {
    entries
        .try_reserve(1)
        .map_err(|source| ListError::AllocationFailure {
            path: dir.to_path_buf(),
            source,
        })?;
    entries.push(entry);
    Ok(())
}
