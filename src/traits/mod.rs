//! # Capability Traits
//!
//! The operations every path kind shares, written once.
//!
//! ## Trait Layers
//!
//! ```text
//! Lexical:     PurePath ─→ Transformer
//!                              ↓
//! On disk:     Beholder, Manipulator, Destroyer     (all require Transformer)
//!
//! Per kind:    Maker (Dir, File), Readable (PathStr, Dir, File, Symlink)
//! ```
//!
//! ## Quick Reference
//!
//! | Trait | Touches disk | Methods |
//! |-------|--------------|---------|
//! | [`PurePath`] | no | `join`, `parent`, `ancestors`, `base_name`, `ext`, `parts`, `is_absolute`, `is_local` |
//! | [`Transformer`] | cwd/home only | `clean`, `abs`, `localize`, `rel`, `expand_user`, `path_eq` |
//! | [`Beholder`] | read | `lstat`, `stat`, `on_disk`, `exists`, `nearest_dir` |
//! | [`Manipulator`] | write | `chmod`, `chown`, `rename`, `remove` |
//! | [`Destroyer`] | write | `remove_all` |
//! | [`Maker`] | write | `make`, `make_all` |
//! | [`Readable`] | read | `read` |
//!
//! ## Blanket Implementations
//!
//! [`PurePath`], [`Transformer`], [`Beholder`], [`Manipulator`] and [`Destroyer`] are
//! implemented for every [`TypedPath`](crate::TypedPath) and every
//! [`Observation`](crate::Observation). All provided methods are built on
//! [`PurePath::as_str`], so a new implementor only has to say where its path string lives
//! and which [`Kind`](crate::Kind) it carries.
//!
//! ## Thread Safety
//!
//! Path values are immutable and `Send + Sync`. No method adds locking of its own; two
//! threads acting on the same on-disk path see whatever ordering the host filesystem
//! provides.

mod beholder;
mod destroyer;
mod maker;
mod manipulator;
mod pure_path;
mod readable;
mod transformer;

pub use beholder::Beholder;
pub use destroyer::Destroyer;
pub use maker::Maker;
pub use manipulator::Manipulator;
pub use pure_path::{Ancestors, PurePath};
pub use readable::Readable;
pub use transformer::Transformer;
