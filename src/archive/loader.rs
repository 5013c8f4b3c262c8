//! Record loader
//!
//! Reads the data file and decodes it as a JSON array of records. The file is
//! read fresh on every call; nothing is cached between requests.
//!
//! A decode failure anywhere in the file rejects the whole batch.

use std::fs;
use std::path::{Path, PathBuf};

use super::errors::{ArchiveError, ArchiveResult};
use super::filter::filter_by_type;
use super::record::Record;

/// Loader bound to a single data file.
#[derive(Debug, Clone)]
pub struct RecordLoader {
    /// Path to the JSON data file
    path: PathBuf,
}

impl RecordLoader {
    /// Creates a loader for the given data file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the data file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and decodes every record in the data file.
    pub fn load(&self) -> ArchiveResult<Vec<Record>> {
        let bytes = fs::read(&self.path)
            .map_err(|e| ArchiveError::io(self.path.display().to_string(), e))?;

        decode_records(&bytes)
    }

    /// Loads the data file and keeps only records of the given category.
    pub fn load_by_type(&self, category: &str) -> ArchiveResult<Vec<Record>> {
        let records = self.load()?;
        Ok(filter_by_type(records, category))
    }
}

/// Decodes a JSON array of records.
pub fn decode_records(bytes: &[u8]) -> ArchiveResult<Vec<Record>> {
    let records: Vec<Record> = serde_json::from_slice(bytes)?;
    Ok(records)
}
