//! Shared utility functions for output formatting

use termcolor::{Color, ColorSpec};
use unicode_width::UnicodeWidthStr;

use crate::listing::DirEntry;
use crate::metadata::EntryKind;

/// How an entry name is colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameStyle {
    #[default]
    Plain,
    Directory,
    Symlink,
    Executable,
}

impl NameStyle {
    pub fn for_entry(entry: &DirEntry) -> Self {
        match entry.metadata.kind {
            EntryKind::Directory => Self::Directory,
            EntryKind::Symlink => Self::Symlink,
            _ if entry.metadata.is_executable() => Self::Executable,
            _ => Self::Plain,
        }
    }

    /// Color for this style, or `None` to leave the text alone.
    pub fn color_spec(&self) -> Option<ColorSpec> {
        let mut spec = ColorSpec::new();
        match self {
            NameStyle::Plain => return None,
            NameStyle::Directory => spec.set_fg(Some(Color::Blue)).set_bold(true),
            NameStyle::Symlink => spec.set_fg(Some(Color::Cyan)),
            NameStyle::Executable => spec.set_fg(Some(Color::Green)).set_bold(true),
        };
        Some(spec)
    }
}

/// One piece of an output line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Name { text: String, style: NameStyle },
}

/// A full output line, without the trailing newline.
pub type RenderedLine = Vec<Segment>;

/// Concatenate a line's segments without any styling.
pub fn plain_text(line: &[Segment]) -> String {
    line.iter()
        .map(|seg| match seg {
            Segment::Text(text) | Segment::Name { text, .. } => text.as_str(),
        })
        .collect()
}

/// Left-align `s` in a field `width` display columns wide.
pub fn pad_right(s: &str, width: usize) -> String {
    let mut out = String::with_capacity(width.max(s.len()));
    out.push_str(s);
    out.extend(std::iter::repeat_n(' ', width.saturating_sub(s.width())));
    out
}
