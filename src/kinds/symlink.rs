//! Symlink creation, link-target reads and the opt-in link-following mutators.

use std::fs;
use std::path::Path;

use crate::error::{PathError, Result};
use crate::path::{PathStr, Symlink};
use crate::sys;
use crate::traits::Readable;
use crate::types::Permissions;

impl Symlink {
    /// Create a symlink at this path pointing at `target`, stored verbatim.
    ///
    /// The target does not need to exist.
    ///
    /// # Errors
    ///
    /// [`PathError::Io`] if something is already at this path, or
    /// [`PathError::NotFound`] if the parent directory is missing.
    pub fn link_to(&self, target: impl AsRef<str>) -> Result<Symlink> {
        let target = target.as_ref();
        sys::symlink(Path::new(target), Path::new(self.as_str()))
            .map_err(|e| PathError::io("symlink", self.as_str(), e))?;
        log::debug!("linked {self} -> {target}");
        Ok(self.clone())
    }

    /// Set the permission bits of the link's target.
    ///
    /// # Errors
    ///
    /// [`PathError::NotFound`] if the link dangles, [`PathError::Io`] otherwise.
    pub fn chmod_target(&self, perm: Permissions) -> Result<Symlink> {
        sys::set_permissions(Path::new(self.as_str()), perm)
            .map_err(|e| PathError::io("chmod", self.as_str(), e))?;
        Ok(self.clone())
    }

    /// Set the owner of the link's target.
    ///
    /// # Errors
    ///
    /// [`PathError::NotFound`] if the link dangles, [`PathError::Io`] otherwise.
    pub fn chown_target(&self, uid: Option<u32>, gid: Option<u32>) -> Result<Symlink> {
        sys::chown(Path::new(self.as_str()), uid, gid, true)
            .map_err(|e| PathError::io("chown", self.as_str(), e))?;
        Ok(self.clone())
    }
}

impl Readable for Symlink {
    type Output = PathStr;

    /// The literal target string. It may be relative and may not exist.
    fn read(&self) -> Result<PathStr> {
        let target = fs::read_link(self.as_str())
            .map_err(|e| PathError::io("readlink", self.as_str(), e))?;
        PathStr::try_from(target)
    }
}
