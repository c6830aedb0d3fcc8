//! # Kind Markers
//!
//! Zero-cost marker types that label a path with what the caller believes it denotes.
//!
//! ## Overview
//!
//! A [`TypedPath`](crate::TypedPath) is a string plus one of these markers. The marker
//! never changes at runtime and costs nothing: it exists so the compiler can select the
//! right operations (a [`Dir`](crate::Dir) can be listed, a [`File`](crate::File) can be
//! opened) and so observation knows which on-disk types to accept.
//!
//! | Marker | Alias | `lstat` accepts | `stat` accepts |
//! |--------|-------|-----------------|----------------|
//! | [`AnyPath`] | [`PathStr`](crate::PathStr) | anything | anything |
//! | [`Directory`] | [`Dir`](crate::Dir) | directory, symlink | directory |
//! | [`RegularFile`] | [`File`](crate::File) | regular file, symlink | regular file |
//! | [`SymbolicLink`] | [`Symlink`](crate::Symlink) | symlink | anything |
//!
//! Non-following observation accepts a symlink for directories and files because the
//! link itself is what is being inspected.

use std::fmt::Debug;
use std::hash::Hash;

use crate::FileType;

mod private {
    pub trait Sealed {}
}

/// The label carried by every [`TypedPath`](crate::TypedPath).
///
/// This trait is sealed: the four kinds below are the only implementations.
pub trait Kind:
    private::Sealed + Debug + Clone + Copy + PartialEq + Eq + Hash + Default + Send + Sync + 'static
{
    /// Name used in diagnostics, e.g. `"Dir"`.
    const NAME: &'static str;

    /// Whether permission and ownership changes follow a symlink at this path.
    const FOLLOWS_LINKS: bool = true;

    /// Kind-validation rule for a non-following observation (`lstat`).
    fn accepts_unfollowed(file_type: FileType) -> bool;

    /// Kind-validation rule for a following observation (`stat`).
    fn accepts_followed(file_type: FileType) -> bool;
}

/// Kind-agnostic label: any on-disk type is acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct AnyPath;

/// The path is expected to be a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Directory;

/// The path is expected to be a regular file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RegularFile;

/// The path is expected to be a symbolic link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SymbolicLink;

impl private::Sealed for AnyPath {}
impl private::Sealed for Directory {}
impl private::Sealed for RegularFile {}
impl private::Sealed for SymbolicLink {}

impl Kind for AnyPath {
    const NAME: &'static str = "PathStr";

    fn accepts_unfollowed(_: FileType) -> bool {
        true
    }

    fn accepts_followed(_: FileType) -> bool {
        true
    }
}

impl Kind for Directory {
    const NAME: &'static str = "Dir";

    fn accepts_unfollowed(file_type: FileType) -> bool {
        matches!(file_type, FileType::Directory | FileType::Symlink)
    }

    fn accepts_followed(file_type: FileType) -> bool {
        file_type == FileType::Directory
    }
}

impl Kind for RegularFile {
    const NAME: &'static str = "File";

    fn accepts_unfollowed(file_type: FileType) -> bool {
        matches!(file_type, FileType::File | FileType::Symlink)
    }

    fn accepts_followed(file_type: FileType) -> bool {
        file_type == FileType::File
    }
}

impl Kind for SymbolicLink {
    const NAME: &'static str = "Symlink";
    const FOLLOWS_LINKS: bool = false;

    fn accepts_unfollowed(file_type: FileType) -> bool {
        file_type == FileType::Symlink
    }

    // `stat` reports the target, which may be anything.
    fn accepts_followed(_: FileType) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [FileType; 8] = [
        FileType::File,
        FileType::Directory,
        FileType::Symlink,
        FileType::Fifo,
        FileType::Socket,
        FileType::BlockDevice,
        FileType::CharDevice,
        FileType::Unknown,
    ];

    #[test]
    fn any_path_accepts_everything() {
        for ft in ALL {
            assert!(AnyPath::accepts_unfollowed(ft));
            assert!(AnyPath::accepts_followed(ft));
        }
    }

    #[test]
    fn directory_rules() {
        assert!(Directory::accepts_unfollowed(FileType::Directory));
        assert!(Directory::accepts_unfollowed(FileType::Symlink));
        assert!(!Directory::accepts_unfollowed(FileType::File));
        assert!(Directory::accepts_followed(FileType::Directory));
        assert!(!Directory::accepts_followed(FileType::Symlink));
        assert!(!Directory::accepts_followed(FileType::File));
    }

    #[test]
    fn regular_file_rules() {
        assert!(RegularFile::accepts_unfollowed(FileType::File));
        assert!(RegularFile::accepts_unfollowed(FileType::Symlink));
        assert!(!RegularFile::accepts_unfollowed(FileType::Directory));
        assert!(!RegularFile::accepts_unfollowed(FileType::Fifo));
        assert!(RegularFile::accepts_followed(FileType::File));
        assert!(!RegularFile::accepts_followed(FileType::Directory));
    }

    #[test]
    fn symlink_rules() {
        assert!(SymbolicLink::accepts_unfollowed(FileType::Symlink));
        assert!(!SymbolicLink::accepts_unfollowed(FileType::File));
        assert!(!SymbolicLink::accepts_unfollowed(FileType::Directory));
        for ft in ALL {
            assert!(SymbolicLink::accepts_followed(ft));
        }
    }

    #[test]
    fn only_symlinks_avoid_following() {
        assert!(AnyPath::FOLLOWS_LINKS);
        assert!(Directory::FOLLOWS_LINKS);
        assert!(RegularFile::FOLLOWS_LINKS);
        assert!(!SymbolicLink::FOLLOWS_LINKS);
    }

    #[test]
    fn kind_names() {
        assert_eq!(AnyPath::NAME, "PathStr");
        assert_eq!(Directory::NAME, "Dir");
        assert_eq!(RegularFile::NAME, "File");
        assert_eq!(SymbolicLink::NAME, "Symlink");
    }

    #[test]
    fn markers_are_zero_sized() {
        assert_eq!(std::mem::size_of::<AnyPath>(), 0);
        assert_eq!(std::mem::size_of::<Directory>(), 0);
        assert_eq!(std::mem::size_of::<RegularFile>(), 0);
        assert_eq!(std::mem::size_of::<SymbolicLink>(), 0);
    }
}
