//! # typed-paths
//!
//! Filesystem paths labeled with what they are supposed to be.
//!
//! A path string is wrapped as one of four kinds: [`Dir`], [`File`], [`Symlink`] or
//! the kind-agnostic [`PathStr`]. The label is a promise made by the caller. It costs
//! nothing at runtime and is only checked when the path is observed on disk, at which
//! point a mismatch becomes a [`PathError::WrongKind`] carrying what was really there.
//!
//! ---
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use typed_paths::{Dir, File, Maker, Permissions, PurePath, Readable};
//!
//! fn copy_config(from: &File, to_dir: &Dir) -> Result<File, Box<dyn std::error::Error>> {
//!     to_dir.make_all(Permissions::default_dir(), Permissions::default_dir())?;
//!     let bytes = from.read()?;
//!     let target = to_dir.join(from.base_name()).to_file();
//!     let mut handle = target.make(Permissions::default_file())?;
//!     std::io::Write::write_all(&mut handle, &bytes)?;
//!     handle.close()?;
//!     Ok(target)
//! }
//! ```
//!
//! ---
//!
//! ## Path Kinds
//!
//! | Alias | Marker | Meaning |
//! |-------|--------|---------|
//! | [`PathStr`] | [`AnyPath`] | anything, or not yet known |
//! | [`Dir`] | [`Directory`] | a directory |
//! | [`File`] | [`RegularFile`] | a regular file |
//! | [`Symlink`] | [`SymbolicLink`] | a symbolic link |
//!
//! All four are [`TypedPath<K>`]. Relabeling (`to_dir`, `to_file`, `into_kind`, ...)
//! never touches the disk and never fails.
//!
//! ---
//!
//! ## Capabilities
//!
//! ```text
//! PurePath ─→ Transformer ─→ Beholder      (lstat, stat, exists)
//!                         ─→ Manipulator   (chmod, chown, rename, remove)
//!                         ─→ Destroyer     (remove_all)
//!
//! Maker:    Dir → Dir, File → FileHandle
//! Readable: Dir → entries, File → bytes, Symlink → target, PathStr → Contents
//! ```
//!
//! Every `TypedPath` and every [`Observation`] gets the shared traits through blanket
//! implementations. [`FileHandle`] implements them too, closing itself when it finds
//! that its file is gone.
//!
//! ---
//!
//! ## Error Handling
//!
//! Every operation that touches the OS returns `Result<T, PathError>`:
//!
//! ```rust
//! use typed_paths::{Beholder, File};
//!
//! let err = File::new("/definitely/not/here").stat().unwrap_err();
//! assert!(err.is_not_found());
//! assert_eq!(err.to_string(), "not found: /definitely/not/here");
//! ```
//!
//! Nothing is retried, and recursive operations stop at the first failure without
//! undoing earlier steps.
//!
//! ---
//!
//! ## Logging
//!
//! Mutations emit `log::debug!` records and observations emit `log::trace!` records.
//! Nothing is printed unless the application installs a logger.
//!
//! ---
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Serialization for paths (as plain strings), [`FileType`], [`Permissions`], [`OpenFlags`], [`DirEntry`]; `File::read_json` and `File::write_json` |

// Private modules
mod env;
mod error;
mod handle;
mod kinds;
mod lexical;
mod markers;
mod observation;
mod path;
mod sys;
mod traits;
mod types;

// Public re-exports - error types
pub use error::{PathError, Result};

// Public re-exports - paths and kinds
pub use markers::{AnyPath, Directory, Kind, RegularFile, SymbolicLink};
pub use path::{Dir, File, PathStr, Symlink, TypedPath};

// Public re-exports - capability traits
pub use traits::{
    Ancestors, Beholder, Destroyer, Maker, Manipulator, PurePath, Readable, Transformer,
};

// Public re-exports - observation and handles
pub use handle::FileHandle;
pub use observation::Observation;

// Public re-exports - data types
pub use kinds::{Contents, Walk};
pub use types::{DirEntry, FileType, OpenFlags, Permissions};

// Public re-exports - process environment
pub use env::{cwd, forget_home_dir, temp_dir, user_cache_dir, user_config_dir, user_home_dir};
