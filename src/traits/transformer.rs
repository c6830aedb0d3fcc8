//! # Transformer Trait
//!
//! Kind-preserving rewrites of a path string.

use crate::env;
use crate::error::{PathError, Result};
use crate::lexical;
use crate::markers::Kind;
use crate::observation::Observation;
use crate::path::{Dir, TypedPath};
use crate::traits::PurePath;

/// Path rewrites that keep the kind label.
///
/// Everything here is lexical except [`abs`](Self::abs) (reads the working directory)
/// and [`expand_user`](Self::expand_user) (reads the home directory).
///
/// # Example
///
/// ```rust
/// use typed_paths::{Dir, File, Transformer};
///
/// let file = File::new("~/foo/bar/../baz.txt");
/// assert_eq!(file.clean(), "~/foo/baz.txt");
///
/// let home = Dir::new("/home/u");
/// assert_eq!(file.expand_user_with(&home), "/home/u/foo/bar/../baz.txt");
///
/// let relative = File::new("/a/b/c").rel(&Dir::new("/a")).unwrap();
/// assert_eq!(relative, "b/c");
/// ```
pub trait Transformer: PurePath {
    /// The kind label carried through every rewrite.
    type Kind: Kind;

    /// This path as a [`TypedPath`] of the same kind.
    fn typed_path(&self) -> TypedPath<Self::Kind> {
        TypedPath::new(self.as_str())
    }

    /// Remove `.` elements, resolve `..` where lexically possible, and collapse repeated
    /// separators.
    fn clean(&self) -> TypedPath<Self::Kind> {
        TypedPath::new(lexical::clean(self.as_str()))
    }

    /// An absolute, cleaned form of this path. Relative paths are joined onto the current
    /// working directory.
    ///
    /// # Errors
    ///
    /// Fails only if the working directory cannot be determined.
    fn abs(&self) -> Result<TypedPath<Self::Kind>> {
        if self.is_absolute() {
            return Ok(self.clean());
        }
        let cwd = env::cwd()?;
        Ok(TypedPath::new(lexical::join([cwd.as_str(), self.as_str()])))
    }

    /// Convert a portable, slash-separated relative path into the host's native form.
    ///
    /// # Errors
    ///
    /// [`PathError::InvalidPath`] if the path is absolute, empty, contains `.` or `..`
    /// elements, or has empty elements.
    fn localize(&self) -> Result<TypedPath<Self::Kind>> {
        lexical::localize(self.as_str())
            .map(TypedPath::new)
            .map_err(|reason| PathError::invalid(self.as_str(), reason))
    }

    /// A path lexically equivalent to this one when joined onto `base`.
    ///
    /// # Errors
    ///
    /// [`PathError::InvalidPath`] if one path is absolute and the other is not, or if
    /// `base` climbs out through `..` in a way that would need the working directory.
    fn rel(&self, base: &Dir) -> Result<TypedPath<Self::Kind>> {
        lexical::rel(base.as_str(), self.as_str())
            .map(TypedPath::new)
            .map_err(|reason| {
                PathError::invalid(self.as_str(), format!("relative to {base}: {reason}"))
            })
    }

    /// Replace a leading `~` with the user's home directory.
    ///
    /// Only a `~` that is the whole path or is followed by a separator is expanded.
    /// Paths that need no expansion are returned unchanged without looking up the home
    /// directory.
    ///
    /// # Errors
    ///
    /// [`PathError::InvalidPath`] if expansion is needed and the home directory cannot
    /// be determined.
    fn expand_user(&self) -> Result<TypedPath<Self::Kind>> {
        if !lexical::has_tilde_prefix(self.as_str()) {
            return Ok(self.typed_path());
        }
        let home = env::user_home_dir()?;
        Ok(self.expand_user_with(&home))
    }

    /// Like [`expand_user`](Self::expand_user) with an explicit home directory.
    fn expand_user_with(&self, home: &Dir) -> TypedPath<Self::Kind> {
        lexical::expand_tilde(self.as_str(), home.as_str())
            .map_or_else(|| self.typed_path(), TypedPath::new)
    }

    /// Returns `true` if both paths name the same location.
    ///
    /// Two local paths are compared after cleaning. Otherwise both are made absolute
    /// against the working directory; if that fails the paths are reported unequal.
    /// Symlinks are not resolved.
    fn path_eq(&self, other: &impl PurePath) -> bool {
        let (a, b) = (self.as_str(), other.as_str());
        if lexical::is_local(a) && lexical::is_local(b) {
            return lexical::clean(a) == lexical::clean(b);
        }
        match (absolute(a), absolute(b)) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}

fn absolute(path: &str) -> Result<String> {
    if lexical::is_absolute(path) {
        return Ok(lexical::clean(path));
    }
    let cwd = env::cwd()?;
    Ok(lexical::join([cwd.as_str(), path]))
}

impl<K: Kind> Transformer for TypedPath<K> {
    type Kind = K;
}

impl<K: Kind> Transformer for Observation<K> {
    type Kind = K;
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::{File, PathStr};
    use serial_test::serial;

    #[test]
    fn clean_preserves_kind() {
        let cleaned: File = File::new("a//b/./c.txt").clean();
        assert_eq!(cleaned, "a/b/c.txt");
    }

    #[test]
    fn clean_is_idempotent_on_examples() {
        for raw in ["", "/", "a/../..", "../x/./y//", "~/.config/git/.."] {
            let once = PathStr::new(raw).clean();
            assert_eq!(once.clean(), once);
        }
    }

    #[test]
    fn rel_examples() {
        let base = Dir::new("/a");
        assert_eq!(PathStr::new("/a/b/c").rel(&base).unwrap(), "b/c");
        assert_eq!(PathStr::new("/b/c").rel(&base).unwrap(), "../b/c");
        let err = PathStr::new("./b/c").rel(&base).unwrap_err();
        assert!(matches!(err, PathError::InvalidPath { .. }));
    }

    #[test]
    fn localize_rejects_absolute() {
        assert!(File::new("/etc/passwd").localize().is_err());
        assert_eq!(File::new("a/b.txt").localize().unwrap(), "a/b.txt");
    }

    #[test]
    fn expand_user_with_explicit_home() {
        let home = Dir::new("/home/u");
        assert_eq!(PathStr::new("~/foo/bar.txt").expand_user_with(&home), "/home/u/foo/bar.txt");
        assert_eq!(PathStr::new("~").expand_user_with(&home), "/home/u");
        assert_eq!(PathStr::new("foo/~/bar").expand_user_with(&home), "foo/~/bar");
    }

    #[test]
    fn expand_user_without_tilde_skips_home_lookup() {
        let p = PathStr::new("foo/~/bar");
        assert_eq!(p.expand_user().unwrap(), p);
    }

    #[test]
    #[serial]
    fn abs_of_absolute_is_cleaned() {
        assert_eq!(Dir::new("/a/./b/").abs().unwrap(), "/a/b");
    }

    #[test]
    #[serial]
    fn abs_joins_relative_paths_onto_cwd() {
        let cwd = env::cwd().unwrap();
        let p = PathStr::new("x/../y");
        assert_eq!(p.abs().unwrap(), cwd.join("y"));
        // and back again
        assert_eq!(p.abs().unwrap().rel(&cwd).unwrap().clean(), p.clean());
    }

    #[test]
    #[serial]
    fn path_eq_examples() {
        let cwd = env::cwd().unwrap();
        assert!(cwd.path_eq(&PathStr::new(".")));
        assert!(Dir::new("/foo").path_eq(&Dir::new("/foo")));
        assert!(cwd.join("./relative").path_eq(&PathStr::new("relative")));
        assert!(!Dir::new("/a/b").path_eq(&PathStr::new("b")));
        assert!(PathStr::new("a/./b").path_eq(&File::new("a/b")));
    }
}
