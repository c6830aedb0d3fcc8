//! An open regular file that closes itself once its path disappears.

use std::cell::RefCell;
use std::fs;
use std::io::{self, Read, Seek, SeekFrom, Write};

use crate::error::{PathError, Result};
use crate::markers::{AnyPath, RegularFile};
use crate::observation::{observe, Observation};
use crate::path::File;
use crate::sys;
use crate::traits::{Beholder, Manipulator, PurePath, Transformer};
use crate::types::Permissions;

/// An open descriptor for a [`File`], obtained from [`File::open`] or
/// [`Maker::make`](crate::Maker::make).
///
/// A handle is either open or closed, and closing is one-way. Once closed, every I/O
/// method fails with [`PathError::Closed`]. A handle closes itself when it notices that
/// its path no longer exists: `stat`, `lstat` and every I/O method check first, and
/// report [`PathError::NotFound`] the first time.
///
/// Handles carry the path operations of the file they were opened on. `rename` and
/// `remove` close the descriptor before touching the path.
///
/// `FileHandle` is `Send` but not `Sync`; share it across threads only behind a lock.
///
/// # Example
///
/// ```rust,no_run
/// use std::io::Write;
/// use typed_paths::{File, Maker, Permissions};
///
/// let mut handle = File::new("/tmp/notes.txt").make(Permissions::default_file())?;
/// handle.write_all(b"first line\n")?;
/// handle.sync()?;
/// handle.close()?;
/// assert!(handle.is_closed());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct FileHandle {
    path: File,
    file: RefCell<Option<fs::File>>,
}

impl FileHandle {
    pub(crate) fn new(path: File, file: fs::File) -> Self {
        Self {
            path,
            file: RefCell::new(Some(file)),
        }
    }

    /// The path this handle was opened on.
    pub fn path(&self) -> &File {
        &self.path
    }

    /// Returns `true` once the handle has been closed.
    pub fn is_closed(&self) -> bool {
        self.file.borrow().is_none()
    }

    /// Close the descriptor.
    ///
    /// # Errors
    ///
    /// [`PathError::Closed`] if it was already closed.
    pub fn close(&self) -> Result<()> {
        match self.file.borrow_mut().take() {
            Some(file) => {
                drop(file);
                Ok(())
            }
            None => Err(self.closed()),
        }
    }

    /// Read up to `buf.len()` bytes at the current position.
    ///
    /// # Errors
    ///
    /// [`PathError::Closed`], [`PathError::NotFound`] if the file is gone, or
    /// [`PathError::Io`].
    pub fn read(&self, buf: &mut [u8]) -> Result<usize> {
        self.with_file("read", |file| file.read(buf))
    }

    /// Read from the current position to the end.
    ///
    /// # Errors
    ///
    /// Same as [`read`](Self::read).
    pub fn read_to_end(&self) -> Result<Vec<u8>> {
        self.with_file("read", |file| {
            let mut contents = Vec::new();
            file.read_to_end(&mut contents)?;
            Ok(contents)
        })
    }

    /// Write `data` at the current position, returning how many bytes were written.
    ///
    /// # Errors
    ///
    /// Same as [`read`](Self::read).
    pub fn write(&self, data: &[u8]) -> Result<usize> {
        self.with_file("write", |file| file.write(data))
    }

    /// Move the cursor.
    ///
    /// # Errors
    ///
    /// Same as [`read`](Self::read).
    pub fn seek(&self, pos: SeekFrom) -> Result<u64> {
        self.with_file("seek", |file| file.seek(pos))
    }

    /// Set the file's length, extending with zeros or cutting off the end.
    ///
    /// # Errors
    ///
    /// Same as [`read`](Self::read).
    pub fn truncate(&self, size: u64) -> Result<()> {
        self.with_file("truncate", |file| file.set_len(size))
    }

    /// Flush data and metadata to the device.
    ///
    /// # Errors
    ///
    /// Same as [`read`](Self::read).
    pub fn sync(&self) -> Result<()> {
        self.with_file("sync", |file| file.sync_all())
    }

    fn closed(&self) -> PathError {
        PathError::Closed {
            path: self.path.to_path_str(),
        }
    }

    fn close_if_gone(&self, error: &PathError) {
        if error.is_not_found() && self.file.borrow_mut().take().is_some() {
            log::debug!("closed handle for {}: file no longer exists", self.path);
        }
    }

    fn with_file<T>(
        &self,
        operation: &'static str,
        f: impl FnOnce(&mut fs::File) -> io::Result<T>,
    ) -> Result<T> {
        if self.is_closed() {
            return Err(self.closed());
        }
        if let Err(e) = observe::<AnyPath>(self.path.as_str(), false) {
            self.close_if_gone(&e);
            return Err(e);
        }
        let mut slot = self.file.borrow_mut();
        let file = slot.as_mut().ok_or_else(|| self.closed())?;
        f(file).map_err(|e| PathError::io(operation, self.path.as_str(), e))
    }
}

impl PurePath for FileHandle {
    fn as_str(&self) -> &str {
        self.path.as_str()
    }
}

impl Transformer for FileHandle {
    type Kind = RegularFile;
}

impl Beholder for FileHandle {
    /// Closes the handle if the path no longer exists.
    fn lstat(&self) -> Result<Observation<RegularFile>> {
        observe(self.path.as_str(), false).inspect_err(|e| self.close_if_gone(e))
    }

    /// Closes the handle if the path no longer exists.
    fn stat(&self) -> Result<Observation<RegularFile>> {
        observe(self.path.as_str(), true).inspect_err(|e| self.close_if_gone(e))
    }
}

impl Manipulator for FileHandle {
    /// Applied through the open descriptor.
    fn chmod(&self, perm: Permissions) -> Result<File> {
        self.with_file("chmod", |file| sys::set_file_permissions(file, perm))?;
        Ok(self.path.clone())
    }

    fn chown(&self, uid: Option<u32>, gid: Option<u32>) -> Result<File> {
        self.with_file("chown", |file| sys::fchown(file, uid, gid))?;
        Ok(self.path.clone())
    }

    /// Closes the handle, then renames the path.
    fn rename(&self, new_path: impl AsRef<str>) -> Result<File> {
        if !self.is_closed() {
            self.close()?;
        }
        self.path.rename(new_path)
    }

    /// Closes the handle, then removes the path.
    fn remove(&self) -> Result<File> {
        if !self.is_closed() {
            self.close()?;
        }
        self.path.remove()
    }
}

impl Read for FileHandle {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        FileHandle::read(self, buf).map_err(io::Error::from)
    }
}

impl Write for FileHandle {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        FileHandle::write(self, buf).map_err(io::Error::from)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.with_file("flush", |file| file.flush())
            .map_err(io::Error::from)
    }
}

impl Seek for FileHandle {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        FileHandle::seek(self, pos).map_err(io::Error::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Dir, Maker};
    use tempfile::TempDir;

    fn open() -> (TempDir, FileHandle) {
        let temp = TempDir::new().unwrap();
        let root = Dir::try_from(temp.path()).unwrap();
        let handle = root
            .join("f.txt")
            .to_file()
            .make(Permissions::default_file())
            .unwrap();
        (temp, handle)
    }

    #[test]
    fn write_seek_read() {
        let (_temp, handle) = open();
        assert_eq!(handle.write(b"hello world").unwrap(), 11);
        assert_eq!(handle.seek(SeekFrom::Start(6)).unwrap(), 6);
        let mut buf = [0u8; 5];
        assert_eq!(handle.read(&mut buf).unwrap(), 5);
        assert_eq!(&buf, b"world");
    }

    #[test]
    fn truncate_and_sync() {
        let (_temp, handle) = open();
        handle.write(b"0123456789").unwrap();
        handle.truncate(4).unwrap();
        handle.sync().unwrap();
        handle.seek(SeekFrom::Start(0)).unwrap();
        assert_eq!(handle.read_to_end().unwrap(), b"0123");
        assert_eq!(handle.stat().unwrap().size(), 4);
    }

    #[test]
    fn close_is_one_way() {
        let (_temp, handle) = open();
        handle.close().unwrap();
        assert!(handle.is_closed());
        assert!(handle.close().unwrap_err().is_closed());
        assert!(handle.write(b"x").unwrap_err().is_closed());
        assert!(handle.sync().unwrap_err().is_closed());
    }

    #[test]
    fn stat_of_removed_file_closes() {
        let (_temp, handle) = open();
        fs::remove_file(handle.path()).unwrap();
        assert!(handle.stat().unwrap_err().is_not_found());
        assert!(handle.is_closed());
        assert!(handle.read_to_end().unwrap_err().is_closed());
    }

    #[test]
    fn io_on_removed_file_closes() {
        let (_temp, handle) = open();
        fs::remove_file(handle.path()).unwrap();
        assert!(handle.write(b"late").unwrap_err().is_not_found());
        assert!(handle.is_closed());
        assert!(handle.write(b"later").unwrap_err().is_closed());
    }

    #[test]
    fn remove_closes_first() {
        let (_temp, handle) = open();
        let path = handle.remove().unwrap();
        assert!(handle.is_closed());
        assert!(!path.exists());
    }

    #[test]
    fn rename_closes_and_returns_new_path() {
        let (temp, handle) = open();
        let target = Dir::try_from(temp.path()).unwrap().join("g.txt");
        let renamed = handle.rename(&target).unwrap();
        assert!(handle.is_closed());
        assert_eq!(renamed, target.to_file());
        assert!(renamed.stat().unwrap().is_file());
    }

    #[cfg(unix)]
    #[test]
    fn chmod_goes_through_the_descriptor() {
        let (_temp, handle) = open();
        handle.chmod(Permissions::from_mode(0o600)).unwrap();
        assert_eq!(handle.stat().unwrap().permissions().mode(), 0o600);
    }

    #[cfg(unix)]
    #[test]
    fn chown_goes_through_the_descriptor() {
        use std::os::unix::fs::MetadataExt;

        let (_temp, handle) = open();
        let meta = fs::metadata(handle.path()).unwrap();
        let same = handle.chown(Some(meta.uid()), Some(meta.gid())).unwrap();
        assert_eq!(&same, handle.path());
        handle.chown(None, None).unwrap();
        assert_eq!(handle.stat().unwrap().metadata().uid(), meta.uid());
    }

    #[test]
    fn permission_changes_on_closed_handle_fail() {
        let (_temp, handle) = open();
        handle.close().unwrap();
        assert!(handle.chmod(Permissions::default_file()).unwrap_err().is_closed());
        assert!(handle.chown(None, None).unwrap_err().is_closed());
    }

    #[test]
    fn remove_after_close_still_removes() {
        let (_temp, handle) = open();
        handle.close().unwrap();
        let path = handle.remove().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn closed_converts_to_io_error() {
        let (_temp, mut handle) = open();
        handle.close().unwrap();
        let err = Write::write(&mut handle, b"x").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Other);
        assert!(err.to_string().contains("closed"));
    }

    #[test]
    fn pure_path_ops_come_from_the_path() {
        let (_temp, handle) = open();
        assert_eq!(handle.base_name(), "f.txt");
        assert_eq!(handle.ext(), ".txt");
        assert_eq!(handle.clean(), handle.path().clean());
    }
}
