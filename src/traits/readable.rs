//! # Readable Trait

use crate::error::Result;

/// Read the contents of a path in the form natural to its kind.
///
/// | Kind | Output |
/// |------|--------|
/// | [`Dir`](crate::Dir) | entries sorted by name |
/// | [`File`](crate::File) | bytes |
/// | [`Symlink`](crate::Symlink) | the literal link target |
/// | [`PathStr`](crate::PathStr) | [`Contents`](crate::Contents), chosen by what is on disk |
pub trait Readable {
    /// What reading yields.
    type Output;

    /// Read the contents.
    ///
    /// # Errors
    ///
    /// [`PathError::NotFound`](crate::PathError::NotFound) or
    /// [`PathError::Io`](crate::PathError::Io).
    fn read(&self) -> Result<Self::Output>;
}
