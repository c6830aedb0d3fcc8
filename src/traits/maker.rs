//! # Maker Trait
//!
//! Creation of new directories and files.

use crate::error::Result;
use crate::types::Permissions;

/// Bring a path into existence.
///
/// Implemented by [`Dir`](crate::Dir) (yielding the directory) and
/// [`File`](crate::File) (yielding an open [`FileHandle`](crate::FileHandle)).
/// OS errors such as "already exists" or "permission denied" are returned as-is.
///
/// # Example
///
/// ```rust,no_run
/// use typed_paths::{Dir, File, Maker, Permissions};
///
/// let logs = Dir::new("/tmp/app/logs");
/// logs.make_all(Permissions::default_dir(), Permissions::default_dir())?;
///
/// let handle = File::new("/tmp/app/logs/today.log").make(Permissions::default_file())?;
/// handle.close()?;
/// # Ok::<(), typed_paths::PathError>(())
/// ```
pub trait Maker {
    /// What a successful creation returns.
    type Output;

    /// Create this path. The parent directory must already exist.
    ///
    /// # Errors
    ///
    /// [`PathError::NotFound`](crate::PathError::NotFound) if the parent is missing,
    /// [`PathError::Io`](crate::PathError::Io) for anything else.
    fn make(&self, perm: Permissions) -> Result<Self::Output>;

    /// Create this path and any missing parents. Missing parents are created with
    /// `parent_perm`, this path with `perm`.
    ///
    /// Directories created before a failure are left in place. The existence check and
    /// the creation are separate OS calls, so a concurrent creator can win the race.
    ///
    /// # Errors
    ///
    /// The first error from any level of the chain.
    fn make_all(&self, perm: Permissions, parent_perm: Permissions) -> Result<Self::Output>;
}
