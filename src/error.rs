//! Error types for directory listing

use std::collections::TryReserveError;
use std::io;
use std::path::PathBuf;

use nix::errno::Errno;
use thiserror::Error;

/// Failures that stop one directory from being listed.
///
/// Neither variant aborts a run: the walker reports it and moves on to the
/// next directory. Per-entry metadata failures never show up here, they are
/// rendered with sentinel metadata instead.
#[derive(Debug, Error)]
pub enum ListError {
    /// The directory could not be opened or read.
    #[error("{op}({}): {}", path.display(), describe(source))]
    PathUnreadable {
        op: &'static str,
        path: PathBuf,
        source: io::Error,
    },

    /// Growing the entry buffer failed.
    #[error("readdir({}): {}", path.display(), Errno::ENOMEM.desc())]
    AllocationFailure {
        path: PathBuf,
        source: TryReserveError,
    },
}

impl ListError {
    pub fn unreadable(op: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::PathUnreadable {
            op,
            path: path.into(),
            source,
        }
    }

    /// The directory this error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::PathUnreadable { path, .. } | Self::AllocationFailure { path, .. } => path,
        }
    }
}

/// Describe an io error by its errno text, without Rust's "(os error N)" suffix.
pub fn describe(err: &io::Error) -> String {
    match err.raw_os_error() {
        Some(code) => Errno::from_raw(code).desc().to_string(),
        None => err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreadable_display_uses_errno_text() {
        let err = ListError::unreadable(
            "opendir",
            "/no/such/dir",
            io::Error::from_raw_os_error(Errno::ENOENT as i32),
        );
        assert_eq!(
            err.to_string(),
            "opendir(/no/such/dir): No such file or directory"
        );
    }

    #[test]
    fn test_unreadable_display_without_os_code() {
        let err = ListError::unreadable(
            "opendir",
            "x",
            io::Error::new(io::ErrorKind::Other, "custom failure"),
        );
        assert_eq!(err.to_string(), "opendir(x): custom failure");
    }

    #[test]
    fn test_allocation_failure_display() {
        let source = Vec::<u8>::new().try_reserve(usize::MAX).unwrap_err();
        let err = ListError::AllocationFailure {
            path: PathBuf::from("big"),
            source,
        };
        assert_eq!(err.to_string(), format!("readdir(big): {}", Errno::ENOMEM.desc()));
        assert_eq!(err.path(), std::path::Path::new("big"));
    }

    #[test]
    fn test_allocation_failure_matches_describe() {
        let source = Vec::<u8>::new().try_reserve(usize::MAX).unwrap_err();
        let err = ListError::AllocationFailure {
            path: PathBuf::from("big"),
            source,
        };
        let enomem = io::Error::from_raw_os_error(Errno::ENOMEM as i32);
        assert_eq!(err.to_string(), format!("readdir(big): {}", describe(&enomem)));
    }
}
