//! # Manipulator Trait
//!
//! Permission, ownership and identity changes on an existing path.

use std::path::Path;

use crate::error::{PathError, Result};
use crate::markers::Kind;
use crate::observation::Observation;
use crate::path::TypedPath;
use crate::sys;
use crate::traits::Transformer;
use crate::types::Permissions;

/// Change an existing filesystem entry. Each method is one OS call; nothing is retried.
///
/// Every method returns the path that is valid afterwards, with the same kind label.
///
/// # Symlinks
///
/// For [`Symlink`](crate::Symlink) paths the link itself is changed, never its target:
/// `chown` uses `lchown` and `remove` unlinks the link. `chmod` fails with
/// [`PathError::NotSupported`], because links carry no permission bits of their own on
/// most hosts. Use [`Symlink::chmod_target`](crate::Symlink::chmod_target) to follow
/// the link deliberately.
pub trait Manipulator: Transformer {
    /// Set the permission bits.
    ///
    /// # Errors
    ///
    /// [`PathError::NotFound`], [`PathError::Io`], or [`PathError::NotSupported`] for
    /// symlink paths.
    fn chmod(&self, perm: Permissions) -> Result<TypedPath<Self::Kind>> {
        if !<Self::Kind as Kind>::FOLLOWS_LINKS {
            return Err(PathError::NotSupported {
                operation: "chmod",
                path: self.as_str().into(),
            });
        }
        sys::set_permissions(Path::new(self.as_str()), perm)
            .map_err(|e| PathError::io("chmod", self.as_str(), e))?;
        Ok(self.typed_path())
    }

    /// Set the owning user and/or group. `None` leaves that id unchanged.
    ///
    /// # Errors
    ///
    /// [`PathError::NotFound`] or [`PathError::Io`] (typically permission denied).
    fn chown(&self, uid: Option<u32>, gid: Option<u32>) -> Result<TypedPath<Self::Kind>> {
        let follow = <Self::Kind as Kind>::FOLLOWS_LINKS;
        sys::chown(Path::new(self.as_str()), uid, gid, follow)
            .map_err(|e| PathError::io("chown", self.as_str(), e))?;
        Ok(self.typed_path())
    }

    /// Atomically rename to `new_path`, returning the new path with this path's kind.
    ///
    /// The old path no longer names anything once this succeeds.
    ///
    /// # Errors
    ///
    /// [`PathError::NotFound`] or [`PathError::Io`] (for example across devices).
    fn rename(&self, new_path: impl AsRef<str>) -> Result<TypedPath<Self::Kind>> {
        let new_path = new_path.as_ref();
        std::fs::rename(self.as_str(), new_path)
            .map_err(|e| PathError::io("rename", self.as_str(), e))?;
        log::debug!("renamed {} to {new_path}", self.as_str());
        Ok(TypedPath::new(new_path))
    }

    /// Remove exactly this entry. Directories must be empty.
    ///
    /// # Errors
    ///
    /// [`PathError::NotFound`] or [`PathError::Io`] (for example a non-empty directory).
    fn remove(&self) -> Result<TypedPath<Self::Kind>> {
        sys::remove(Path::new(self.as_str()))
            .map_err(|e| PathError::io("remove", self.as_str(), e))?;
        log::debug!("removed {}", self.as_str());
        Ok(self.typed_path())
    }
}

impl<K: Kind> Manipulator for TypedPath<K> {}

impl<K: Kind> Manipulator for Observation<K> {}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::{Beholder, Dir, File, PurePath, Symlink};
    use tempfile::TempDir;

    fn root() -> (TempDir, Dir) {
        let temp = TempDir::new().unwrap();
        let root = Dir::try_from(temp.path()).unwrap();
        (temp, root)
    }

    #[test]
    fn chmod_sets_bits() {
        let (_temp, root) = root();
        let file = root.join("f").to_file();
        std::fs::write(&file, b"").unwrap();
        let same = file.chmod(Permissions::from_mode(0o600)).unwrap();
        assert_eq!(same, file);
        assert_eq!(file.stat().unwrap().permissions().mode(), 0o600);
    }

    #[test]
    fn chmod_on_symlink_is_not_supported() {
        let (_temp, root) = root();
        let link = root.join("l").to_symlink();
        std::os::unix::fs::symlink("target", &link).unwrap();
        let err = link.chmod(Permissions::from_mode(0o600)).unwrap_err();
        assert!(matches!(err, PathError::NotSupported { operation: "chmod", .. }));
    }

    #[test]
    fn chown_to_current_owner_succeeds() {
        use std::os::unix::fs::MetadataExt;

        let (_temp, root) = root();
        let dir = root.join("d").to_dir();
        std::fs::create_dir(&dir).unwrap();
        let meta = std::fs::metadata(&dir).unwrap();
        dir.chown(Some(meta.uid()), Some(meta.gid())).unwrap();
        dir.chown(None, None).unwrap();
    }

    #[test]
    fn chown_on_dangling_symlink_changes_the_link() {
        use std::os::unix::fs::MetadataExt;

        let (_temp, root) = root();
        let link = root.join("dangling").to_symlink();
        std::os::unix::fs::symlink("nowhere", &link).unwrap();
        let meta = std::fs::symlink_metadata(&link).unwrap();
        // would fail with NotFound if it followed the link
        link.chown(Some(meta.uid()), Some(meta.gid())).unwrap();
    }

    #[test]
    fn rename_keeps_kind() {
        let (_temp, root) = root();
        let old = root.join("old.txt").to_file();
        std::fs::write(&old, b"x").unwrap();
        let new: File = old.rename(root.join("new.txt")).unwrap();
        assert_eq!(new, root.join("new.txt").to_file());
        assert!(!old.exists());
        assert!(new.stat().unwrap().is_file());
    }

    #[test]
    fn remove_symlink_keeps_target() {
        let (_temp, root) = root();
        let target = root.join("t").to_file();
        std::fs::write(&target, b"keep").unwrap();
        let link: Symlink = root.join("l").to_symlink();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        link.remove().unwrap();
        assert!(!link.exists());
        assert!(target.exists());
    }

    #[test]
    fn remove_non_empty_dir_fails() {
        let (_temp, root) = root();
        let dir = root.join("d").to_dir();
        std::fs::create_dir(&dir).unwrap();
        std::fs::write(dir.join("f"), b"").unwrap();
        let err = dir.remove().unwrap_err();
        assert!(matches!(err, PathError::Io { operation: "remove", .. }));
    }

    #[test]
    fn remove_missing_is_not_found() {
        let (_temp, root) = root();
        assert!(root.join("missing").remove().unwrap_err().is_not_found());
    }
}
