//! Per-entry metadata and its display strings
//!
//! Turns raw `lstat` data into the fields of a long-format row: the 10-character
//! permission string, link count, owner, group, size and modification time.
//! Column widths for those fields are measured across a whole directory with
//! [`LongColumnWidths`] before any row is written.

use std::fs::{self, Metadata};
use std::os::unix::fs::{FileTypeExt, MetadataExt};
use std::path::Path;

use chrono::{Local, TimeZone};
use unicode_width::UnicodeWidthStr;

/// Modification times further than this from "now" show the year instead of the time.
pub const RECENT_THRESHOLD_SECS: i64 = 15_552_000;

const S_ISUID: u32 = 0o4000;
const S_ISGID: u32 = 0o2000;
const S_ISVTX: u32 = 0o1000;

/// File type classification used for the first permission character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryKind {
    Regular,
    Directory,
    Symlink,
    CharDevice,
    BlockDevice,
    Fifo,
    Socket,
    #[default]
    Unknown,
}

impl EntryKind {
    pub fn from_metadata(meta: &Metadata) -> Self {
        let ft = meta.file_type();
        if ft.is_symlink() {
            Self::Symlink
        } else if ft.is_dir() {
            Self::Directory
        } else if ft.is_file() {
            Self::Regular
        } else if ft.is_char_device() {
            Self::CharDevice
        } else if ft.is_block_device() {
            Self::BlockDevice
        } else if ft.is_fifo() {
            Self::Fifo
        } else if ft.is_socket() {
            Self::Socket
        } else {
            Self::Unknown
        }
    }

    /// Character shown at position 0 of the permission string.
    pub fn type_char(self) -> char {
        match self {
            Self::Directory => 'd',
            Self::Symlink => 'l',
            Self::CharDevice => 'c',
            Self::BlockDevice => 'b',
            Self::Fifo => 'p',
            Self::Socket => 's',
            Self::Regular | Self::Unknown => '-',
        }
    }
}

/// Stat-like metadata for one entry.
///
/// `Default` is the sentinel used when the lookup fails: unknown kind and every
/// numeric field zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryMetadata {
    pub kind: EntryKind,
    /// Permission bits including setuid/setgid/sticky (low 12 bits of st_mode).
    pub mode: u32,
    pub nlink: u64,
    pub uid: u32,
    pub gid: u32,
    pub size: u64,
    /// Modification time, seconds since the Unix epoch.
    pub mtime: i64,
}

impl EntryMetadata {
    /// Read metadata without following a trailing symlink.
    pub fn read(path: &Path) -> std::io::Result<Self> {
        fs::symlink_metadata(path).map(|m| Self::from(&m))
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn is_executable(&self) -> bool {
        self.kind == EntryKind::Regular && self.mode & 0o111 != 0
    }
}

impl From<&Metadata> for EntryMetadata {
    fn from(meta: &Metadata) -> Self {
        Self {
            kind: EntryKind::from_metadata(meta),
            mode: meta.mode() & 0o7777,
            nlink: meta.nlink(),
            uid: meta.uid(),
            gid: meta.gid(),
            size: meta.size(),
            mtime: meta.mtime(),
        }
    }
}

/// Build the 10-character `ls -l` permission string.
pub fn permission_string(kind: EntryKind, mode: u32) -> String {
    let bit = |mask: u32, c: char| if mode & mask != 0 { c } else { '-' };
    let mut perm = [
        kind.type_char(),
        bit(0o400, 'r'),
        bit(0o200, 'w'),
        bit(0o100, 'x'),
        bit(0o040, 'r'),
        bit(0o020, 'w'),
        bit(0o010, 'x'),
        bit(0o004, 'r'),
        bit(0o002, 'w'),
        bit(0o001, 'x'),
    ];

    for (mask, pos, set, unset) in [
        (S_ISUID, 3, 's', 'S'),
        (S_ISGID, 6, 's', 'S'),
        (S_ISVTX, 9, 't', 'T'),
    ] {
        if mode & mask != 0 {
            perm[pos] = if perm[pos] == 'x' { set } else { unset };
        }
    }

    perm.iter().collect()
}

/// Format a modification time relative to `now` (both in epoch seconds).
///
/// Times within [`RECENT_THRESHOLD_SECS`] of now render as `Mon dd HH:MM`,
/// everything else (including the future) as `Mon dd  YYYY`.
pub fn format_timestamp(mtime: i64, now: i64) -> String {
    let local = Local.timestamp_opt(mtime, 0).earliest().unwrap_or_default();

    if now.abs_diff(mtime) > RECENT_THRESHOLD_SECS as u64 {
        local.format("%b %e  %Y").to_string()
    } else {
        local.format("%b %e %H:%M").to_string()
    }
}

/// Current time in epoch seconds.
pub fn now_secs() -> i64 {
    Local::now().timestamp()
}

/// Maximum display widths of the aligned long-format columns in one directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LongColumnWidths {
    pub links: usize,
    pub owner: usize,
    pub group: usize,
    pub size: usize,
}

impl LongColumnWidths {
    /// Widen each column to fit the given field strings.
    pub fn fit(&mut self, links: &str, owner: &str, group: &str, size: &str) {
        self.links = self.links.max(links.width());
        self.owner = self.owner.max(owner.width());
        self.group = self.group.max(group.width());
        self.size = self.size.max(size.width());
    }
}
