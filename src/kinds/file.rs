//! Regular-file operations: opening, creation and whole-file reads.

use std::fs;
use std::path::Path;

use crate::error::{PathError, Result};
use crate::handle::FileHandle;
use crate::path::File;
use crate::sys;
use crate::traits::{Maker, PurePath, Readable};
use crate::types::{OpenFlags, Permissions};

impl File {
    /// Open with explicit flags. `perm` only matters if the file gets created.
    ///
    /// # Errors
    ///
    /// [`PathError::NotFound`] if the file (or, when creating, its parent) is missing;
    /// [`PathError::Io`] for anything else.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use std::io::Write;
    /// use typed_paths::{File, OpenFlags, Permissions};
    ///
    /// let mut log = File::new("/tmp/app.log").open(OpenFlags::APPEND, Permissions::default_file())?;
    /// writeln!(log, "started")?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn open(&self, flags: OpenFlags, perm: Permissions) -> Result<FileHandle> {
        let file = sys::open(Path::new(self.as_str()), flags, perm)
            .map_err(|e| PathError::io("open", self.as_str(), e))?;
        Ok(FileHandle::new(self.clone(), file))
    }

    /// Create the file if it is missing. Existing contents are kept.
    ///
    /// # Errors
    ///
    /// Same as [`Maker::make`].
    pub fn touch(&self) -> Result<File> {
        self.make(Permissions::default_file())?.close()?;
        Ok(self.clone())
    }

    /// Deserialize the file's JSON contents.
    ///
    /// # Errors
    ///
    /// [`PathError::NotFound`], or [`PathError::Io`] for read failures and malformed
    /// JSON (with kind `InvalidData`).
    #[cfg(feature = "serde")]
    pub fn read_json<T: serde::de::DeserializeOwned>(&self) -> Result<T> {
        let bytes = self.read()?;
        serde_json::from_slice(&bytes)
            .map_err(|e| PathError::io("read_json", self.as_str(), e.into()))
    }

    /// Serialize `value` as pretty-printed JSON, replacing the file's contents.
    ///
    /// # Errors
    ///
    /// [`PathError::Io`] if serialization or the write fails.
    #[cfg(feature = "serde")]
    pub fn write_json<T: serde::Serialize>(&self, value: &T) -> Result<File> {
        let json = serde_json::to_vec_pretty(value)
            .map_err(|e| PathError::io("write_json", self.as_str(), e.into()))?;
        fs::write(self.as_str(), json).map_err(|e| PathError::io("write_json", self.as_str(), e))?;
        Ok(self.clone())
    }
}

impl Readable for File {
    type Output = Vec<u8>;

    fn read(&self) -> Result<Vec<u8>> {
        fs::read(self.as_str()).map_err(|e| PathError::io("read", self.as_str(), e))
    }
}

impl Maker for File {
    type Output = FileHandle;

    /// Open read-write, creating the file if needed. Existing contents are not truncated.
    fn make(&self, perm: Permissions) -> Result<FileHandle> {
        let handle = self.open(OpenFlags::CREATE, perm)?;
        log::debug!("made file {self} ({perm})");
        Ok(handle)
    }

    fn make_all(&self, perm: Permissions, parent_perm: Permissions) -> Result<FileHandle> {
        self.parent().make_all(parent_perm, parent_perm)?;
        self.make(perm)
    }
}
