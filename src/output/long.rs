//! Long-format rows
//!
//! Rendering happens in two passes: every entry is turned into its field
//! strings first, the column widths are measured across all of them, and only
//! then are the rows assembled.

use crate::ids::IdResolver;
use crate::listing::DirEntry;
use crate::metadata::{LongColumnWidths, format_timestamp, permission_string};

use super::utils::{NameStyle, RenderedLine, Segment, pad_right};

/// The rendered fields of one long-format row, before alignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongFields {
    pub permissions: String,
    pub links: String,
    pub owner: String,
    pub group: String,
    pub size: String,
    pub modified: String,
}

impl LongFields {
    pub fn new<R: IdResolver + ?Sized>(entry: &DirEntry, resolver: &mut R, now: i64) -> Self {
        let meta = &entry.metadata;
        Self {
            permissions: permission_string(meta.kind, meta.mode),
            links: meta.nlink.to_string(),
            owner: resolver.user_name(meta.uid),
            group: resolver.group_name(meta.gid),
            size: meta.size.to_string(),
            modified: format_timestamp(meta.mtime, now),
        }
    }

    /// Everything before the name, aligned to `widths`, ending in a space.
    pub fn aligned(&self, widths: &LongColumnWidths) -> String {
        format!(
            "{} {:>lw$} {} {} {:>sw$} {} ",
            self.permissions,
            self.links,
            pad_right(&self.owner, widths.owner),
            pad_right(&self.group, widths.group),
            self.size,
            self.modified,
            lw = widths.links,
            sw = widths.size,
        )
    }
}

/// Render one directory's entries as aligned long-format lines.
pub fn long_lines<R: IdResolver + ?Sized>(
    entries: &[DirEntry],
    resolver: &mut R,
    now: i64,
) -> Vec<RenderedLine> {
    let fields: Vec<LongFields> = entries
        .iter()
        .map(|entry| LongFields::new(entry, resolver, now))
        .collect();

    let mut widths = LongColumnWidths::default();
    for f in &fields {
        widths.fit(&f.links, &f.owner, &f.group, &f.size);
    }

    entries
        .iter()
        .zip(&fields)
        .map(|(entry, f)| {
            let mut line = vec![
                Segment::Text(f.aligned(&widths)),
                Segment::Name {
                    text: entry.display_name().into_owned(),
                    style: NameStyle::for_entry(entry),
                },
            ];
            if let Some(target) = &entry.link_target {
                line.push(Segment::Text(format!(" -> {}", target.display())));
            }
            line
        })
        .collect()
}
