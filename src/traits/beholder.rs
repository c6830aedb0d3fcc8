//! # Beholder Trait
//!
//! Read-only observation of a path on disk, with kind validation.

use crate::error::Result;
use crate::markers::{AnyPath, Directory};
use crate::observation::{observe, Observation};
use crate::path::{Dir, TypedPath};
use crate::traits::Transformer;

/// Observe a path on disk and check that it matches its kind.
///
/// | Kind | `lstat` accepts | `stat` accepts |
/// |------|-----------------|----------------|
/// | [`Dir`] | directory or symlink | directory |
/// | [`File`](crate::File) | regular file or symlink | regular file |
/// | [`Symlink`](crate::Symlink) | symlink | anything |
/// | [`PathStr`](crate::PathStr) | anything | anything |
///
/// A mismatch fails with [`PathError::WrongKind`](crate::PathError::WrongKind), which
/// carries the real observation.
///
/// # Example
///
/// ```rust,no_run
/// use typed_paths::{Beholder, File};
///
/// let config = File::new("/etc/hosts");
/// if config.exists() {
///     let seen = config.stat()?;
///     assert!(seen.is_file());
/// }
/// # Ok::<(), typed_paths::PathError>(())
/// ```
pub trait Beholder: Transformer {
    /// Observe without following a final symlink.
    ///
    /// # Errors
    ///
    /// - [`PathError::NotFound`](crate::PathError::NotFound) if nothing is there
    /// - [`PathError::WrongKind`](crate::PathError::WrongKind) if something else is there
    /// - [`PathError::Io`](crate::PathError::Io) for any other OS failure
    fn lstat(&self) -> Result<Observation<Self::Kind>> {
        observe(self.as_str(), false)
    }

    /// Observe, following symlinks to their target.
    ///
    /// # Errors
    ///
    /// Same as [`lstat`](Self::lstat).
    fn stat(&self) -> Result<Observation<Self::Kind>> {
        observe(self.as_str(), true)
    }

    /// Alias for [`lstat`](Self::lstat).
    fn on_disk(&self) -> Result<Observation<Self::Kind>> {
        self.lstat()
    }

    /// Returns `true` unless the OS reports that nothing is at this path.
    ///
    /// Does not follow symlinks and ignores the kind, so a path of the wrong kind still
    /// exists.
    fn exists(&self) -> bool {
        match observe::<AnyPath>(self.as_str(), false) {
            Ok(_) => true,
            Err(e) => !e.is_not_found(),
        }
    }

    /// This path if it is a directory on disk (following symlinks), otherwise its
    /// parent.
    fn nearest_dir(&self) -> Dir {
        if observe::<Directory>(self.as_str(), true).is_ok() {
            Dir::new(self.as_str())
        } else {
            self.parent()
        }
    }
}

impl<K: crate::markers::Kind> Beholder for TypedPath<K> {}

impl<K: crate::markers::Kind> Beholder for Observation<K> {}
