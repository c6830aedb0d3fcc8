//! # Destroyer Trait
//!
//! Recursive removal.

use std::path::Path;

use crate::error::{PathError, Result};
use crate::markers::Kind;
use crate::observation::Observation;
use crate::path::TypedPath;
use crate::sys;
use crate::traits::Transformer;

/// Remove a path and everything beneath it.
pub trait Destroyer: Transformer {
    /// Remove this path and, if it is a directory, all of its contents.
    ///
    /// Succeeds without doing anything if the path does not exist. A symlink is removed
    /// as a link; its target is left alone. The first failure stops the walk and
    /// anything already removed stays removed.
    ///
    /// # Errors
    ///
    /// [`PathError::Io`] if any entry cannot be removed.
    fn remove_all(&self) -> Result<TypedPath<Self::Kind>> {
        sys::remove_all(Path::new(self.as_str()))
            .map_err(|e| PathError::io("remove_all", self.as_str(), e))?;
        log::debug!("removed {} recursively", self.as_str());
        Ok(self.typed_path())
    }
}

impl<K: Kind> Destroyer for TypedPath<K> {}

impl<K: Kind> Destroyer for Observation<K> {}
