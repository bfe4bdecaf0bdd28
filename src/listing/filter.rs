//! Hidden-entry filtering and name ordering

use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt;

use super::lister::DirEntry;

/// Whether an entry with this name is listed.
///
/// Only the first byte matters: anything starting with `.` is hidden.
pub fn is_visible(name: &OsStr, show_hidden: bool) -> bool {
    show_hidden || name.as_bytes().first() != Some(&b'.')
}

/// Sort entries by the raw bytes of their names.
pub fn sort_by_name(entries: &mut [DirEntry]) {
    entries.sort_by(|a, b| a.name.as_bytes().cmp(b.name.as_bytes()));
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    use crate::metadata::EntryMetadata;

    use super::*;

    fn entry(name: &[u8]) -> DirEntry {
        DirEntry {
            name: OsString::from_vec(name.to_vec()),
            metadata: EntryMetadata::default(),
            link_target: None,
        }
    }

    #[test]
    fn test_hidden_filter() {
        assert!(is_visible(OsStr::new("a.txt"), false));
        assert!(!is_visible(OsStr::new(".foo"), false));
        assert!(!is_visible(OsStr::new("."), false));
        assert!(is_visible(OsStr::new(".foo"), true));
        // Only a leading dot hides an entry.
        assert!(is_visible(OsStr::new("foo."), false));
        assert!(is_visible(OsStr::new("a.b"), false));
    }

    #[test]
    fn test_sort_is_bytewise() {
        let mut entries = vec![
            entry(b"b.txt"),
            entry(b"B.txt"),
            entry(b"a.txt"),
            entry(b".hidden"),
            entry("é".as_bytes()),
            entry(b"_x"),
        ];
        sort_by_name(&mut entries);
        let names: Vec<_> = entries.iter().map(|e| e.name.as_bytes().to_vec()).collect();
        assert_eq!(
            names,
            vec![
                b".hidden".to_vec(),
                b"B.txt".to_vec(),
                b"_x".to_vec(),
                b"a.txt".to_vec(),
                b"b.txt".to_vec(),
                "é".as_bytes().to_vec(),
            ]
        );
    }

    #[test]
    fn test_sort_handles_non_utf8_names() {
        let mut entries = vec![entry(&[0xff, b'a']), entry(b"z")];
        sort_by_name(&mut entries);
        assert_eq!(entries[0].name.as_bytes(), b"z");
    }
}
