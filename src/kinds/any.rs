//! Reading a path whose kind is only known once it is observed.

use crate::error::Result;
use crate::markers::AnyPath;
use crate::observation::observe;
use crate::path::PathStr;
use crate::traits::Readable;
use crate::types::DirEntry;

/// What [`PathStr::read`](Readable::read) found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Contents {
    /// Sorted directory entries.
    Directory(Vec<DirEntry>),
    /// The literal target of a symlink.
    Link(PathStr),
    /// The bytes of anything else.
    Bytes(Vec<u8>),
}

impl Readable for PathStr {
    type Output = Contents;

    /// Dispatches on the `lstat` classification: directories are listed, symlinks are
    /// read as links and everything else is read as bytes.
    fn read(&self) -> Result<Contents> {
        let seen = observe::<AnyPath>(self.as_str(), false)?;
        if seen.is_dir() {
            self.to_dir().read().map(Contents::Directory)
        } else if seen.is_symlink() {
            self.to_symlink().read().map(Contents::Link)
        } else {
            self.to_file().read().map(Contents::Bytes)
        }
    }
}
