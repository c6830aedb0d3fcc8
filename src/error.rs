//! Error types for typed path operations.

use std::io;

use crate::markers::AnyPath;
use crate::observation::Observation;
use crate::path::PathStr;

/// Convenience alias used by every fallible operation in this crate.
pub type Result<T, E = PathError> = std::result::Result<T, E>;

/// Error type shared by all path operations.
///
/// Variants separate "absent" ([`NotFound`](Self::NotFound)) from "present but not what the
/// path claims to be" ([`WrongKind`](Self::WrongKind)), so callers can treat the two
/// differently. Uses `#[non_exhaustive]` for forward compatibility.
///
/// # Examples
///
/// ```rust
/// use typed_paths::{PathError, PathStr};
///
/// let err = PathError::NotFound { path: PathStr::new("/missing") };
/// assert_eq!(err.to_string(), "not found: /missing");
/// ```
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum PathError {
    /// The OS reports that the path does not exist.
    #[error("not found: {path}")]
    NotFound {
        /// The path that was not found.
        path: PathStr,
    },

    /// The path exists, but its on-disk type does not match the declared kind.
    ///
    /// The real observation is kept so diagnostics can inspect it.
    #[error(
        "{expected}({}) unexpectedly found {} with mode {:o} on disk",
        .observed.path(),
        .observed.file_type(),
        .observed.permissions().mode()
    )]
    WrongKind {
        /// Name of the kind the caller declared.
        expected: &'static str,
        /// What was actually found.
        observed: Box<Observation<AnyPath>>,
    },

    /// Any other OS-level failure.
    #[error("{operation} failed for {path}: {source}")]
    Io {
        /// The operation that failed.
        operation: &'static str,
        /// The path involved in the operation.
        path: PathStr,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A purely lexical failure: no filesystem access was involved.
    #[error("invalid path {:?}: {reason}", .path.as_str())]
    InvalidPath {
        /// The offending path.
        path: PathStr,
        /// Why the path could not be processed.
        reason: String,
    },

    /// An operation was attempted on a closed [`FileHandle`](crate::FileHandle).
    #[error("file handle is closed: {path}")]
    Closed {
        /// The path the handle was opened on.
        path: PathStr,
    },

    /// The host platform cannot perform this operation for this kind of path.
    #[error("{operation}: not supported for {path}")]
    NotSupported {
        /// The unsupported operation.
        operation: &'static str,
        /// The path it was attempted on.
        path: PathStr,
    },
}

impl PathError {
    /// Wrap an OS error with the operation and path that produced it.
    ///
    /// `ErrorKind::NotFound` always becomes [`PathError::NotFound`].
    pub fn io(operation: &'static str, path: impl Into<PathStr>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => PathError::NotFound { path },
            _ => PathError::Io {
                operation,
                path,
                source,
            },
        }
    }

    pub(crate) fn invalid(path: impl Into<PathStr>, reason: impl Into<String>) -> Self {
        PathError::InvalidPath {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Returns `true` if this is [`PathError::NotFound`].
    #[inline]
    pub fn is_not_found(&self) -> bool {
        matches!(self, PathError::NotFound { .. })
    }

    /// Returns `true` if this is [`PathError::WrongKind`].
    #[inline]
    pub fn is_wrong_kind(&self) -> bool {
        matches!(self, PathError::WrongKind { .. })
    }

    /// Returns `true` if this is [`PathError::Closed`].
    #[inline]
    pub fn is_closed(&self) -> bool {
        matches!(self, PathError::Closed { .. })
    }

    /// The observation carried by a [`PathError::WrongKind`], if any.
    pub fn observed(&self) -> Option<&Observation<AnyPath>> {
        match self {
            PathError::WrongKind { observed, .. } => Some(observed),
            _ => None,
        }
    }
}

impl From<PathError> for io::Error {
    fn from(error: PathError) -> Self {
        match error {
            PathError::Io { source, .. } => source,
            PathError::NotFound { .. } => io::Error::new(io::ErrorKind::NotFound, error),
            PathError::NotSupported { .. } => io::Error::new(io::ErrorKind::Unsupported, error),
            PathError::InvalidPath { .. } => io::Error::new(io::ErrorKind::InvalidInput, error),
            other => io::Error::other(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display() {
        let err = PathError::NotFound {
            path: PathStr::new("/missing"),
        };
        assert_eq!(err.to_string(), "not found: /missing");
    }

    #[test]
    fn closed_display() {
        let err = PathError::Closed {
            path: PathStr::new("/tmp/x.txt"),
        };
        assert_eq!(err.to_string(), "file handle is closed: /tmp/x.txt");
        assert!(err.is_closed());
    }

    #[test]
    fn io_not_found_becomes_not_found() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "test");
        let err = PathError::io("lstat", "/nope", io_err);
        assert!(err.is_not_found());
        assert!(matches!(err, PathError::NotFound { ref path } if path == "/nope"));
    }

    #[test]
    fn io_permission_denied_keeps_source() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "test");
        let err = PathError::io("chmod", "/secret", io_err);
        match err {
            PathError::Io {
                operation,
                ref path,
                ref source,
            } => {
                assert_eq!(operation, "chmod");
                assert_eq!(path, "/secret");
                assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
            }
            other => panic!("expected Io, got {other:?}"),
        }
    }

    #[test]
    fn io_display_includes_operation_and_path() {
        let err = PathError::io("rename", "/a", io::Error::other("cross-device"));
        let text = err.to_string();
        assert!(text.starts_with("rename failed for /a"));
        assert!(text.contains("cross-device"));
    }

    #[test]
    fn invalid_path_display() {
        let err = PathError::invalid("../x", "escapes the base");
        assert_eq!(err.to_string(), "invalid path \"../x\": escapes the base");
    }

    #[test]
    fn into_io_error_preserves_kind() {
        let closed: io::Error = PathError::Closed {
            path: PathStr::new("f"),
        }
        .into();
        assert_eq!(closed.kind(), io::ErrorKind::Other);
        let inner = closed.into_inner().expect("wrapped error");
        assert!(inner.downcast_ref::<PathError>().is_some_and(PathError::is_closed));

        let missing: io::Error = PathError::NotFound {
            path: PathStr::new("f"),
        }
        .into();
        assert_eq!(missing.kind(), io::ErrorKind::NotFound);

        let raw: io::Error = PathError::io("write", "f", io::Error::other("disk full")).into();
        assert_eq!(raw.to_string(), "disk full");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PathError>();
    }
}
