//! Whole-file JSON collection store
//!
//! A [`JsonStore`] backs one flat collection (vehicles or transactions) with a
//! single JSON array file. Every load reads and parses the whole file; every
//! save rewrites it.
//!
//! # Empty vs. missing
//!
//! - A missing file is an error ([`FleetError::StoreUnavailable`]).
//! - An empty file, whitespace, or a JSON `null` loads as an empty collection.
//!
//! # Writes
//!
//! Saves write to a temporary file next to the target and rename it over the
//! store, so a crash mid-write leaves the previous contents in place. The
//! temporary file takes the permissions of the file it replaces. There is no
//! locking; concurrent writers race and the last rename wins.

use crate::types::FleetError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::{BufWriter, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// JSON array file holding a collection of `T`
#[derive(Debug, Clone)]
pub struct JsonStore<T> {
    path: PathBuf,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonStore<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Create a store backed by `path`
    ///
    /// Nothing is read or created until the first load or save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonStore {
            path: path.into(),
            _marker: PhantomData,
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full collection
    ///
    /// # Errors
    ///
    /// - [`FleetError::StoreUnavailable`] if the file cannot be opened
    /// - [`FleetError::MalformedStore`] if the content is not an array of `T`
    pub fn load(&self) -> Result<Vec<T>, FleetError> {
        let content = fs::read_to_string(&self.path)
            .map_err(|e| FleetError::store_unavailable(&self.path, e))?;

        if content.trim().is_empty() {
            debug!(path = %self.path.display(), "store is empty");
            return Ok(Vec::new());
        }

        let items: Option<Vec<T>> = serde_json::from_str(&content)
            .map_err(|e| FleetError::malformed_store(&self.path, e))?;
        let items = items.unwrap_or_default();

        debug!(path = %self.path.display(), count = items.len(), "loaded store");
        Ok(items)
    }

    /// Replace the full collection on disk
    ///
    /// # Errors
    ///
    /// Returns [`FleetError::StoreWriteFailed`] if the temporary file cannot be
    /// created or written, or cannot replace the store file.
    pub fn save(&self, items: &[T]) -> Result<(), FleetError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let temp = NamedTempFile::new_in(dir)
            .map_err(|e| FleetError::store_write_failed(&self.path, e))?;
        {
            let mut writer = BufWriter::new(temp.as_file());
            serde_json::to_writer_pretty(&mut writer, items)
                .map_err(|e| FleetError::store_write_failed(&self.path, e))?;
            writer
                .flush()
                .map_err(|e| FleetError::store_write_failed(&self.path, e))?;
        }
        if let Ok(metadata) = fs::metadata(&self.path) {
            temp.as_file()
                .set_permissions(metadata.permissions())
                .map_err(|e| FleetError::store_write_failed(&self.path, e))?;
        }
        temp.persist(&self.path)
            .map_err(|e| FleetError::store_write_failed(&self.path, e.error))?;

        debug!(path = %self.path.display(), count = items.len(), "saved store");
        Ok(())
    }
}
