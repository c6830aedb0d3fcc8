//! Kind-validated metadata snapshots.

use std::fs;
use std::time::SystemTime;

use crate::error::{PathError, Result};
use crate::markers::{AnyPath, Kind};
use crate::path::TypedPath;
use crate::types::{FileType, Permissions};

/// A point-in-time view of a path on disk.
///
/// An `Observation<K>` can only be built by [`Beholder::stat`](crate::Beholder::stat) or
/// [`Beholder::lstat`](crate::Beholder::lstat), and only if the on-disk type satisfies the
/// kind `K`. When it does not, the record is relabeled to [`AnyPath`] and returned inside
/// [`PathError::WrongKind`], so the real metadata is never lost.
///
/// Records are never refreshed; observe again to see later changes.
///
/// # Example
///
/// ```rust,no_run
/// use typed_paths::{Beholder, File};
///
/// let seen = File::new("/etc/hostname").stat()?;
/// println!("{} is {} bytes, mode {}", seen.path(), seen.size(), seen.permissions());
/// # Ok::<(), typed_paths::PathError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Observation<K: Kind> {
    path: TypedPath<K>,
    metadata: fs::Metadata,
    observed_at: SystemTime,
}

impl<K: Kind> Observation<K> {
    /// The path that was observed.
    pub fn path(&self) -> &TypedPath<K> {
        &self.path
    }

    /// Drop the metadata and keep the path.
    pub fn into_path(self) -> TypedPath<K> {
        self.path
    }

    /// The raw metadata reported by the OS.
    pub fn metadata(&self) -> &fs::Metadata {
        &self.metadata
    }

    /// Type classification of the observed entry.
    pub fn file_type(&self) -> FileType {
        self.metadata.file_type().into()
    }

    /// Returns `true` if the entry is a directory.
    pub fn is_dir(&self) -> bool {
        self.metadata.is_dir()
    }

    /// Returns `true` if the entry is a regular file.
    pub fn is_file(&self) -> bool {
        self.metadata.is_file()
    }

    /// Returns `true` if the entry is a symbolic link. Only an `lstat` can report this.
    pub fn is_symlink(&self) -> bool {
        self.metadata.file_type().is_symlink()
    }

    /// Size in bytes.
    pub fn size(&self) -> u64 {
        self.metadata.len()
    }

    /// Permission bits.
    pub fn permissions(&self) -> Permissions {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            Permissions::from_mode(self.metadata.permissions().mode())
        }
        #[cfg(not(unix))]
        {
            if self.metadata.permissions().readonly() {
                Permissions::from_mode(0o444)
            } else {
                Permissions::from_mode(0o666)
            }
        }
    }

    /// Full `st_mode`, including the file type bits.
    #[cfg(unix)]
    pub fn mode(&self) -> u32 {
        use std::os::unix::fs::MetadataExt;
        self.metadata.mode()
    }

    /// Last modification time.
    ///
    /// # Errors
    ///
    /// [`PathError::NotSupported`] on platforms that do not record it.
    pub fn modified(&self) -> Result<SystemTime> {
        self.metadata.modified().map_err(|_| PathError::NotSupported {
            operation: "modified",
            path: self.path.to_path_str(),
        })
    }

    /// When this record was taken.
    pub fn observed_at(&self) -> SystemTime {
        self.observed_at
    }

    /// Last element of the observed path.
    pub fn name(&self) -> String {
        crate::lexical::base(self.path.as_str())
    }

    pub(crate) fn into_kind<K2: Kind>(self) -> Observation<K2> {
        Observation {
            path: self.path.into_kind(),
            metadata: self.metadata,
            observed_at: self.observed_at,
        }
    }
}

/// Stat `path` and validate the result against `K`.
///
/// `follow` selects `stat` over `lstat`.
pub(crate) fn observe<K: Kind>(path: &str, follow: bool) -> Result<Observation<K>> {
    let (operation, result) = if follow {
        ("stat", fs::metadata(path))
    } else {
        ("lstat", fs::symlink_metadata(path))
    };
    let metadata = result.map_err(|e| PathError::io(operation, path, e))?;
    let file_type = FileType::from(metadata.file_type());
    log::trace!("{operation} {path}: {file_type}");

    let accepted = if follow {
        K::accepts_followed(file_type)
    } else {
        K::accepts_unfollowed(file_type)
    };
    let observation = Observation {
        path: TypedPath::new(path),
        metadata,
        observed_at: SystemTime::now(),
    };
    if accepted {
        Ok(observation)
    } else {
        Err(PathError::WrongKind {
            expected: K::NAME,
            observed: Box::new(observation.into_kind::<AnyPath>()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markers::{Directory, RegularFile, SymbolicLink};
    use tempfile::TempDir;

    fn sandbox() -> (TempDir, String, String) {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("d");
        let file = temp.path().join("f.txt");
        std::fs::create_dir(&dir).unwrap();
        std::fs::write(&file, b"hello").unwrap();
        (
            temp,
            dir.to_string_lossy().into_owned(),
            file.to_string_lossy().into_owned(),
        )
    }

    #[test]
    fn matching_kind_builds_a_record() {
        let (_temp, dir, file) = sandbox();
        let d = observe::<Directory>(&dir, true).unwrap();
        assert!(d.is_dir());
        assert_eq!(d.path().as_str(), dir);

        let f = observe::<RegularFile>(&file, true).unwrap();
        assert!(f.is_file());
        assert_eq!(f.size(), 5);
        assert_eq!(f.name(), "f.txt");
        assert!(f.observed_at() <= SystemTime::now());
    }

    #[test]
    fn mismatch_keeps_the_real_metadata() {
        let (_temp, dir, _file) = sandbox();
        let err = observe::<RegularFile>(&dir, true).unwrap_err();
        let seen = err.observed().unwrap();
        assert!(seen.is_dir());
        assert_eq!(seen.file_type(), FileType::Directory);
        assert_eq!(seen.path().as_str(), dir);
        assert!(err.to_string().starts_with("File("));
    }

    #[test]
    fn missing_path_is_not_found() {
        let (_temp, dir, _file) = sandbox();
        let missing = format!("{dir}/nope");
        let err = observe::<AnyPath>(&missing, false).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn lstat_of_regular_file_fails_symlink_kind() {
        let (_temp, _dir, file) = sandbox();
        let err = observe::<SymbolicLink>(&file, false).unwrap_err();
        assert!(err.is_wrong_kind());
        // following is unchecked for links
        assert!(observe::<SymbolicLink>(&file, true).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn permissions_and_mode() {
        use std::os::unix::fs::PermissionsExt;

        let (_temp, _dir, file) = sandbox();
        std::fs::set_permissions(&file, std::fs::Permissions::from_mode(0o640)).unwrap();
        let f = observe::<RegularFile>(&file, true).unwrap();
        assert_eq!(f.permissions().mode(), 0o640);
        assert_eq!(f.mode() & 0o170000, 0o100000);
        assert!(f.modified().is_ok());
    }
}
