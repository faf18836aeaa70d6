//! Persistence of the record set to a single JSON file.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::CensusError;
use crate::models::Person;

/// Loads and saves the full record set as pretty-printed JSON.
///
/// An absent file on load is not an error; it means an empty collection.
/// Malformed data, permission failures, and other I/O failures surface as
/// distinct [`CensusError`] variants.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and validate the record set. `Ok(None)` means the file does not
    /// exist yet.
    pub fn load(&self) -> Result<Option<Vec<Person>>, CensusError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        let records: Vec<Person> = serde_json::from_str(&raw)?;
        for person in &records {
            person.validate().map_err(|e| {
                CensusError::Malformed(format!("record {}: {}", person.id, e))
            })?;
        }
        info!(count = records.len(), path = %self.path.display(), "collection loaded");
        Ok(Some(records))
    }

    /// Write the record set, replacing any previous file contents.
    pub fn save<'a, I>(&self, records: I) -> Result<(), CensusError>
    where
        I: IntoIterator<Item = &'a Person>,
    {
        let records: Vec<&Person> = records.into_iter().collect();
        let json = serde_json::to_string_pretty(&records)?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }
        fs::write(&self.path, json).map_err(|e| self.io_error(e))?;
        info!(count = records.len(), path = %self.path.display(), "collection saved");
        Ok(())
    }

    fn io_error(&self, err: std::io::Error) -> CensusError {
        if err.kind() == ErrorKind::PermissionDenied {
            CensusError::PermissionDenied(self.path.clone())
        } else {
            CensusError::Io(err)
        }
    }
}
