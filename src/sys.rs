//! Thin wrappers over the host OS calls that need a mode or an ownership argument.
//!
//! Every function returns the raw `io::Result`; callers attach the operation name and
//! path when converting to [`PathError`](crate::PathError).

use std::fs;
use std::io;
use std::path::Path;

use crate::types::{OpenFlags, Permissions};

pub(crate) fn create_dir(path: &Path, perm: Permissions) -> io::Result<()> {
    let mut builder = fs::DirBuilder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(perm.mode());
    }
    #[cfg(not(unix))]
    let _ = perm;
    builder.create(path)
}

pub(crate) fn open(path: &Path, flags: OpenFlags, perm: Permissions) -> io::Result<fs::File> {
    let mut options = flags.to_options();
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(perm.mode());
    }
    #[cfg(not(unix))]
    let _ = perm;
    options.open(path)
}

/// Follows symlinks.
#[cfg(unix)]
pub(crate) fn set_permissions(path: &Path, perm: Permissions) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(perm.mode()))
}

#[cfg(not(unix))]
pub(crate) fn set_permissions(path: &Path, perm: Permissions) -> io::Result<()> {
    let mut current = fs::metadata(path)?.permissions();
    current.set_readonly(perm.readonly());
    fs::set_permissions(path, current)
}

#[cfg(unix)]
pub(crate) fn set_file_permissions(file: &fs::File, perm: Permissions) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(fs::Permissions::from_mode(perm.mode()))
}

#[cfg(not(unix))]
pub(crate) fn set_file_permissions(file: &fs::File, perm: Permissions) -> io::Result<()> {
    let mut current = file.metadata()?.permissions();
    current.set_readonly(perm.readonly());
    file.set_permissions(current)
}

#[cfg(unix)]
pub(crate) fn chown(
    path: &Path,
    uid: Option<u32>,
    gid: Option<u32>,
    follow: bool,
) -> io::Result<()> {
    if follow {
        std::os::unix::fs::chown(path, uid, gid)
    } else {
        std::os::unix::fs::lchown(path, uid, gid)
    }
}

#[cfg(not(unix))]
pub(crate) fn chown(_: &Path, _: Option<u32>, _: Option<u32>, _: bool) -> io::Result<()> {
    Err(io::Error::from(io::ErrorKind::Unsupported))
}

#[cfg(unix)]
pub(crate) fn fchown(file: &fs::File, uid: Option<u32>, gid: Option<u32>) -> io::Result<()> {
    std::os::unix::fs::fchown(file, uid, gid)
}

#[cfg(not(unix))]
pub(crate) fn fchown(_: &fs::File, _: Option<u32>, _: Option<u32>) -> io::Result<()> {
    Err(io::Error::from(io::ErrorKind::Unsupported))
}

#[cfg(unix)]
pub(crate) fn symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
pub(crate) fn symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_file(target, link)
}

#[cfg(not(any(unix, windows)))]
pub(crate) fn symlink(_: &Path, _: &Path) -> io::Result<()> {
    Err(io::Error::from(io::ErrorKind::Unsupported))
}

/// Remove exactly one entry. Directories must be empty; symlinks are never followed.
pub(crate) fn remove(path: &Path) -> io::Result<()> {
    if fs::symlink_metadata(path)?.is_dir() {
        fs::remove_dir(path)
    } else {
        fs::remove_file(path)
    }
}

/// Remove `path` and everything beneath it. A missing path is not an error.
pub(crate) fn remove_all(path: &Path) -> io::Result<()> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e),
    };
    let result = if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };
    match result {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}
