//! The typed path value and its four kind aliases.

use std::cmp::Ordering;
use std::ffi::OsStr;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::PathError;
use crate::markers::{AnyPath, Directory, Kind, RegularFile, SymbolicLink};

/// A path string labeled with the caller's belief about what it denotes.
///
/// Construction is cheap and infallible; no filesystem access happens until an
/// observation or mutation method is called. The label `K` is checked only when the
/// path is observed on disk (see [`Beholder`](crate::Beholder)).
///
/// Use the aliases [`PathStr`], [`Dir`], [`File`] and [`Symlink`] rather than naming
/// the markers directly.
///
/// # Example
///
/// ```rust
/// use typed_paths::{Dir, PurePath, Transformer};
///
/// let config = Dir::new("~/.config/git/..");
/// assert_eq!(config.clean(), "~/.config");
/// assert_eq!(config.parent(), "~");
/// assert_eq!(config.base_name(), "..");
/// ```
pub struct TypedPath<K: Kind> {
    inner: String,
    kind: PhantomData<K>,
}

/// A path of unknown kind.
pub type PathStr = TypedPath<AnyPath>;
/// A path expected to be a directory.
pub type Dir = TypedPath<Directory>;
/// A path expected to be a regular file.
pub type File = TypedPath<RegularFile>;
/// A path expected to be a symbolic link.
pub type Symlink = TypedPath<SymbolicLink>;

impl<K: Kind> TypedPath<K> {
    /// Wrap a string as a path of kind `K`.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            inner: path.into(),
            kind: PhantomData,
        }
    }

    /// The path as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// The path as a [`Path`], for use with `std` APIs.
    #[inline]
    pub fn as_path(&self) -> &Path {
        Path::new(&self.inner)
    }

    /// Unwrap into the underlying string.
    #[inline]
    pub fn into_string(self) -> String {
        self.inner
    }

    /// Relabel as another kind. Never validates.
    #[inline]
    pub fn into_kind<K2: Kind>(self) -> TypedPath<K2> {
        TypedPath::new(self.inner)
    }

    /// Relabel a copy as a [`Dir`].
    pub fn to_dir(&self) -> Dir {
        Dir::new(self.inner.clone())
    }

    /// Relabel a copy as a [`File`].
    pub fn to_file(&self) -> File {
        File::new(self.inner.clone())
    }

    /// Relabel a copy as a [`Symlink`].
    pub fn to_symlink(&self) -> Symlink {
        Symlink::new(self.inner.clone())
    }

    /// Relabel a copy as a [`PathStr`].
    pub fn to_path_str(&self) -> PathStr {
        PathStr::new(self.inner.clone())
    }
}

impl<K: Kind> Clone for TypedPath<K> {
    fn clone(&self) -> Self {
        Self::new(self.inner.clone())
    }
}

impl<K: Kind> fmt::Debug for TypedPath<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", K::NAME, self.inner)
    }
}

impl<K: Kind> fmt::Display for TypedPath<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner)
    }
}

impl<K: Kind> Default for TypedPath<K> {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl<K: Kind> PartialEq for TypedPath<K> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<K: Kind> Eq for TypedPath<K> {}

impl<K: Kind> PartialEq<str> for TypedPath<K> {
    fn eq(&self, other: &str) -> bool {
        self.inner == other
    }
}

impl<K: Kind> PartialEq<&str> for TypedPath<K> {
    fn eq(&self, other: &&str) -> bool {
        self.inner == *other
    }
}

impl<K: Kind> PartialEq<String> for TypedPath<K> {
    fn eq(&self, other: &String) -> bool {
        &self.inner == other
    }
}

impl<K: Kind> PartialOrd for TypedPath<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Kind> Ord for TypedPath<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}

impl<K: Kind> Hash for TypedPath<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.hash(state);
    }
}

impl<K: Kind> AsRef<str> for TypedPath<K> {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl<K: Kind> AsRef<Path> for TypedPath<K> {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

impl<K: Kind> AsRef<OsStr> for TypedPath<K> {
    fn as_ref(&self) -> &OsStr {
        OsStr::new(&self.inner)
    }
}

impl<K: Kind> From<&str> for TypedPath<K> {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl<K: Kind> From<String> for TypedPath<K> {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

impl<K: Kind> From<&String> for TypedPath<K> {
    fn from(path: &String) -> Self {
        Self::new(path.as_str())
    }
}

impl<K: Kind> FromStr for TypedPath<K> {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl<K: Kind> TryFrom<PathBuf> for TypedPath<K> {
    type Error = PathError;

    fn try_from(path: PathBuf) -> Result<Self, Self::Error> {
        path.into_os_string()
            .into_string()
            .map(Self::new)
            .map_err(|raw| {
                PathError::invalid(raw.to_string_lossy().into_owned(), "path is not valid UTF-8")
            })
    }
}

impl<K: Kind> TryFrom<&Path> for TypedPath<K> {
    type Error = PathError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        Self::try_from(path.to_path_buf())
    }
}

#[cfg(feature = "serde")]
impl<K: Kind> serde::Serialize for TypedPath<K> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.inner)
    }
}

#[cfg(feature = "serde")]
impl<'de, K: Kind> serde::Deserialize<'de> for TypedPath<K> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relabel_keeps_the_string() {
        let p = PathStr::new("/tmp/x");
        let d: Dir = p.to_dir();
        let f: File = d.to_file();
        let s: Symlink = f.clone().into_kind();
        assert_eq!(d.as_str(), "/tmp/x");
        assert_eq!(f, "/tmp/x");
        assert_eq!(s.to_path_str(), p);
    }

    #[test]
    fn debug_names_the_kind() {
        assert_eq!(format!("{:?}", Dir::new("/a")), "Dir(\"/a\")");
        assert_eq!(format!("{:?}", File::new("b")), "File(\"b\")");
        assert_eq!(format!("{:?}", Symlink::new("c")), "Symlink(\"c\")");
        assert_eq!(format!("{:?}", PathStr::new("")), "PathStr(\"\")");
    }

    #[test]
    fn display_is_the_raw_string() {
        assert_eq!(Dir::new("/a/b").to_string(), "/a/b");
    }

    #[test]
    fn conversions() {
        let from_str: File = "a.txt".parse().unwrap();
        let from_string = File::from(String::from("a.txt"));
        let from_path = File::try_from(PathBuf::from("a.txt")).unwrap();
        assert_eq!(from_str, from_string);
        assert_eq!(from_string, from_path);
        assert_eq!(from_path.as_path(), Path::new("a.txt"));
        assert_eq!(from_path.into_string(), "a.txt");
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_path_is_rejected() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let raw = PathBuf::from(OsString::from_vec(vec![b'a', 0xff]));
        let err = PathStr::try_from(raw).unwrap_err();
        assert!(matches!(err, PathError::InvalidPath { .. }));
    }

    #[test]
    fn ordering_and_hashing_follow_the_string() {
        use std::collections::HashSet;

        let mut paths = vec![Dir::new("b"), Dir::new("a"), Dir::new("c")];
        paths.sort();
        assert_eq!(paths, [Dir::new("a"), Dir::new("b"), Dir::new("c")]);

        let set: HashSet<Dir> = paths.into_iter().collect();
        assert!(set.contains(&Dir::new("a")));
    }

    #[test]
    fn typed_paths_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PathStr>();
        assert_send_sync::<Dir>();
        assert_send_sync::<File>();
        assert_send_sync::<Symlink>();
    }

    #[test]
    fn kind_label_is_free() {
        assert_eq!(std::mem::size_of::<Dir>(), std::mem::size_of::<String>());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_plain_string() {
        let dir = Dir::new("/etc");
        let json = serde_json::to_string(&dir).unwrap();
        assert_eq!(json, "\"/etc\"");
        let back: Dir = serde_json::from_str(&json).unwrap();
        assert_eq!(back, dir);
    }
}
