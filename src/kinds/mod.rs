//! Operations that exist only for one kind of path.

mod any;
mod dir;
mod file;
mod symlink;

pub use any::Contents;
pub use dir::Walk;
