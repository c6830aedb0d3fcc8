//! Process environment lookups returned as typed directories.

use std::path::PathBuf;
use std::sync::{PoisonError, RwLock};

use crate::error::{PathError, Result};
use crate::path::Dir;

static HOME_DIR: RwLock<Option<Dir>> = RwLock::new(None);

fn to_dir(path: PathBuf, what: &str) -> Result<Dir> {
    Dir::try_from(path).map_err(|e| match e {
        PathError::InvalidPath { path, .. } => {
            PathError::invalid(path, format!("{what} is not valid UTF-8"))
        }
        other => other,
    })
}

/// The current working directory.
///
/// # Errors
///
/// Fails if the directory has been removed, is unreadable, or is not valid UTF-8.
pub fn cwd() -> Result<Dir> {
    let dir = std::env::current_dir()
        .map_err(|e| PathError::io("current_dir", "", e))?;
    to_dir(dir, "working directory")
}

/// The current user's home directory.
///
/// The first successful lookup is cached for the life of the process; see
/// [`forget_home_dir`] to drop it.
///
/// # Errors
///
/// [`PathError::InvalidPath`] if the home directory cannot be determined.
pub fn user_home_dir() -> Result<Dir> {
    if let Some(home) = HOME_DIR.read().unwrap_or_else(PoisonError::into_inner).as_ref() {
        return Ok(home.clone());
    }
    let found = home::home_dir()
        .ok_or_else(|| PathError::invalid("~", "home directory could not be determined"))?;
    let home = to_dir(found, "home directory")?;
    *HOME_DIR.write().unwrap_or_else(PoisonError::into_inner) = Some(home.clone());
    Ok(home)
}

/// Clear the cached home directory so the next [`user_home_dir`] call looks it up again.
pub fn forget_home_dir() {
    *HOME_DIR.write().unwrap_or_else(PoisonError::into_inner) = None;
}

/// The per-user cache directory (`$XDG_CACHE_HOME` or `~/.cache` on Linux).
///
/// # Errors
///
/// [`PathError::InvalidPath`] if the platform has no such directory.
pub fn user_cache_dir() -> Result<Dir> {
    let dir = dirs::cache_dir()
        .ok_or_else(|| PathError::invalid("", "user cache directory could not be determined"))?;
    to_dir(dir, "cache directory")
}

/// The per-user configuration directory (`$XDG_CONFIG_HOME` or `~/.config` on Linux).
///
/// # Errors
///
/// [`PathError::InvalidPath`] if the platform has no such directory.
pub fn user_config_dir() -> Result<Dir> {
    let dir = dirs::config_dir()
        .ok_or_else(|| PathError::invalid("", "user config directory could not be determined"))?;
    to_dir(dir, "config directory")
}

/// The process-wide temporary directory.
///
/// Never fails; a non-UTF-8 location is converted lossily.
pub fn temp_dir() -> Dir {
    Dir::new(std::env::temp_dir().to_string_lossy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PurePath;
    use serial_test::serial;

    #[test]
    #[serial]
    fn cwd_is_absolute() {
        assert!(cwd().unwrap().is_absolute());
    }

    #[test]
    #[serial]
    fn home_dir_is_memoized_until_forgotten() {
        forget_home_dir();
        let Ok(first) = user_home_dir() else {
            return;
        };
        assert_eq!(HOME_DIR.read().unwrap().as_ref(), Some(&first));
        assert_eq!(user_home_dir().unwrap(), first);

        forget_home_dir();
        assert!(HOME_DIR.read().unwrap().is_none());
    }

    #[test]
    fn cache_dir_matches_platform_lookup() {
        match (user_cache_dir(), dirs::cache_dir()) {
            (Ok(dir), Some(expected)) => {
                assert!(dir.is_absolute());
                assert_eq!(dir, Dir::try_from(expected).unwrap());
            }
            (Err(e), None) => assert!(matches!(e, PathError::InvalidPath { .. })),
            (got, expected) => panic!("got {got:?}, platform says {expected:?}"),
        }
    }

    #[test]
    fn config_dir_matches_platform_lookup() {
        match (user_config_dir(), dirs::config_dir()) {
            (Ok(dir), Some(expected)) => {
                assert!(dir.is_absolute());
                assert_eq!(dir, Dir::try_from(expected).unwrap());
            }
            (Err(e), None) => assert!(matches!(e, PathError::InvalidPath { .. })),
            (got, expected) => panic!("got {got:?}, platform says {expected:?}"),
        }
    }

    #[test]
    fn temp_dir_is_not_empty() {
        assert!(!temp_dir().as_str().is_empty());
    }
}
