//! # PurePath Trait
//!
//! String-only path operations that never touch the filesystem.
//!
//! ## Usage
//!
//! ```rust
//! use typed_paths::{Dir, File, PurePath};
//!
//! let file = File::new("/srv/site/index.html");
//! assert_eq!(file.base_name(), "index.html");
//! assert_eq!(file.ext(), ".html");
//! assert_eq!(file.parent(), Dir::new("/srv/site"));
//! assert_eq!(file.parts(), ["/", "srv", "site", "index.html"]);
//! ```

use crate::lexical;
use crate::markers::Kind;
use crate::observation::Observation;
use crate::path::{Dir, PathStr, TypedPath};

/// Lexical operations shared by every path kind.
///
/// Only [`as_str`](Self::as_str) is required; everything else is provided.
pub trait PurePath {
    /// The raw path string.
    fn as_str(&self) -> &str;

    /// Join one segment onto this path and clean the result.
    ///
    /// An absolute `segment` does not reset the base: `"a/b".join("/c")` is `"a/b/c"`.
    /// The result is a [`PathStr`] since joining says nothing about what the new path is.
    fn join(&self, segment: impl AsRef<str>) -> PathStr {
        PathStr::new(lexical::join([self.as_str(), segment.as_ref()]))
    }

    /// Join several segments onto this path and clean the result. Empty segments are
    /// ignored.
    fn join_all<I, S>(&self, segments: I) -> PathStr
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut elements = vec![self.as_str().to_string()];
        elements.extend(segments.into_iter().map(|s| s.as_ref().to_string()));
        PathStr::new(lexical::join(elements))
    }

    /// All but the last element, after cleaning. `""` yields `"."` and the root is its
    /// own parent.
    fn parent(&self) -> Dir {
        Dir::new(lexical::dir(self.as_str()))
    }

    /// Every ancestor directory, nearest first, stopping at the fixed point
    /// (`/` for absolute paths, `.` for relative ones).
    fn ancestors(&self) -> Ancestors {
        Ancestors {
            next: Some(self.parent()),
        }
    }

    /// The last element. `""` yields `"."`, a path of only separators yields the
    /// separator.
    fn base_name(&self) -> String {
        lexical::base(self.as_str())
    }

    /// Suffix from the final `.` in the final element, or `""`.
    fn ext(&self) -> &str {
        lexical::ext(self.as_str())
    }

    /// Path segments. A leading root separator is its own segment; repeated separators
    /// do not produce empty segments.
    fn parts(&self) -> Vec<String> {
        lexical::parts(self.as_str())
    }

    /// Returns `true` if the path is absolute on this host.
    fn is_absolute(&self) -> bool {
        lexical::is_absolute(self.as_str())
    }

    /// Returns `true` if the path is relative, non-empty and stays beneath its base
    /// after cleaning.
    fn is_local(&self) -> bool {
        lexical::is_local(self.as_str())
    }
}

/// Iterator returned by [`PurePath::ancestors`].
#[derive(Debug, Clone)]
pub struct Ancestors {
    next: Option<Dir>,
}

impl Iterator for Ancestors {
    type Item = Dir;

    fn next(&mut self) -> Option<Dir> {
        let current = self.next.take()?;
        let parent = current.parent();
        if parent != current {
            self.next = Some(parent);
        }
        Some(current)
    }
}

impl std::iter::FusedIterator for Ancestors {}

impl<K: Kind> PurePath for TypedPath<K> {
    fn as_str(&self) -> &str {
        TypedPath::as_str(self)
    }
}

impl<K: Kind> PurePath for Observation<K> {
    fn as_str(&self) -> &str {
        self.path().as_str()
    }
}
