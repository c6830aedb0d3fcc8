//! Directory-only operations: listing, walking, globbing and creation.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{PathError, Result};
use crate::markers::Directory;
use crate::observation::observe;
use crate::path::{Dir, PathStr};
use crate::sys;
use crate::traits::{Maker, PurePath, Readable, Transformer};
use crate::types::{DirEntry, FileType, Permissions};

/// Entries whose names are not UTF-8 cannot be represented as paths. Listing, walking
/// and globbing all leave them out.
fn entry_name(raw: &std::ffi::OsStr, parent: &str) -> Option<String> {
    let name = raw.to_str().map(str::to_owned);
    if name.is_none() {
        log::warn!("skipping entry in {parent}: name {raw:?} is not valid UTF-8");
    }
    name
}

impl Dir {
    /// Recursively list this directory, root first, in lexical order within each
    /// directory. Symlinks are reported as links and not descended into. Entries whose
    /// names are not valid UTF-8 are skipped along with anything beneath them.
    ///
    /// ```rust,no_run
    /// use typed_paths::Dir;
    ///
    /// for entry in Dir::new("/etc/ssh").walk() {
    ///     println!("{}", entry?);
    /// }
    /// # Ok::<(), typed_paths::PathError>(())
    /// ```
    pub fn walk(&self) -> Walk {
        Walk {
            inner: walkdir::WalkDir::new(self.as_str())
                .follow_links(false)
                .sort_by_file_name()
                .into_iter(),
        }
    }

    /// Paths under this directory matching `pattern`, in alphabetical order.
    ///
    /// The pattern is joined onto this directory before matching, so it may contain
    /// separators. Entries that cannot be read while matching are skipped, as are
    /// entries whose names are not valid UTF-8.
    ///
    /// # Errors
    ///
    /// [`PathError::InvalidPath`] if `pattern` is malformed.
    pub fn glob(&self, pattern: &str) -> Result<Vec<PathStr>> {
        let full = self.join(pattern);
        let paths = glob::glob(full.as_str())
            .map_err(|e| PathError::invalid(full.as_str(), e.msg))?;
        Ok(paths
            .filter_map(|entry| entry.ok())
            .filter_map(|path| PathStr::try_from(path).ok())
            .collect())
    }

    /// Make this the process working directory.
    ///
    /// # Errors
    ///
    /// [`PathError::NotFound`] or [`PathError::Io`].
    pub fn chdir(&self) -> Result<Dir> {
        std::env::set_current_dir(self.as_str())
            .map_err(|e| PathError::io("chdir", self.as_str(), e))?;
        log::debug!("changed working directory to {self}");
        Ok(self.clone())
    }
}

impl Readable for Dir {
    type Output = Vec<DirEntry>;

    /// All entries, excluding `.` and `..`, sorted by name. Entries whose names are not
    /// valid UTF-8 are skipped.
    fn read(&self) -> Result<Vec<DirEntry>> {
        let entries = fs::read_dir(self.as_str())
            .map_err(|e| PathError::io("read_dir", self.as_str(), e))?;
        let mut listing = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| PathError::io("read_dir", self.as_str(), e))?;
            let file_type = entry
                .file_type()
                .map_err(|e| PathError::io("read_dir", self.as_str(), e))?;
            let Some(name) = entry_name(&entry.file_name(), self.as_str()) else {
                continue;
            };
            listing.push(DirEntry {
                path: self.join(&name),
                name,
                file_type: file_type.into(),
            });
        }
        listing.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(listing)
    }
}

impl Maker for Dir {
    type Output = Dir;

    fn make(&self, perm: Permissions) -> Result<Dir> {
        sys::create_dir(Path::new(self.as_str()), perm)
            .map_err(|e| PathError::io("mkdir", self.as_str(), e))?;
        log::debug!("created directory {self} ({perm})");
        Ok(self.clone())
    }

    /// An existing directory is left untouched, including its permissions.
    fn make_all(&self, perm: Permissions, parent_perm: Permissions) -> Result<Dir> {
        let target = self.clean();
        match observe::<Directory>(target.as_str(), true) {
            Ok(_) => return Ok(self.clone()),
            Err(e) if e.is_not_found() => {}
            Err(e) => return Err(e),
        }
        let parent = target.parent();
        if parent != target {
            parent.make_all(parent_perm, parent_perm)?;
        }
        match target.make(perm) {
            Ok(_) => Ok(self.clone()),
            // lost a race with another creator
            Err(PathError::Io { source, .. })
                if source.kind() == io::ErrorKind::AlreadyExists
                    && observe::<Directory>(target.as_str(), true).is_ok() =>
            {
                Ok(self.clone())
            }
            Err(e) => Err(e),
        }
    }
}

/// Iterator returned by [`Dir::walk`].
pub struct Walk {
    inner: walkdir::IntoIter,
}

impl std::fmt::Debug for Walk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Walk").finish_non_exhaustive()
    }
}

impl Walk {
    fn convert(entry: &walkdir::DirEntry) -> Option<DirEntry> {
        let parent = entry
            .path()
            .parent()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default();
        let name = entry_name(entry.file_name(), &parent)?;
        let path = PathStr::try_from(entry.path()).ok()?;
        Some(DirEntry {
            name,
            path,
            file_type: FileType::from(entry.file_type()),
        })
    }
}

impl Iterator for Walk {
    type Item = Result<DirEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.inner.next()? {
                Ok(entry) => match Walk::convert(&entry) {
                    Some(converted) => return Some(Ok(converted)),
                    None if entry.file_type().is_dir() => self.inner.skip_current_dir(),
                    None => {}
                },
                Err(e) => {
                    let path = e
                        .path()
                        .map(|p| p.to_string_lossy().into_owned())
                        .unwrap_or_default();
                    return Some(Err(PathError::io("walk", path, io::Error::from(e))));
                }
            }
        }
    }
}
