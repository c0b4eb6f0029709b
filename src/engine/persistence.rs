use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::engine::Record;
use crate::Result;

/// Handles disk I/O for the [`RecordStore`](crate::engine::RecordStore).
///
/// The full record set lives in one pretty-printed JSON file, rewritten
/// on every mutation. Writes use an atomic "write-then-rename" strategy
/// so a crash mid-save leaves the previous file intact.
pub struct Persistence {
    file_path: PathBuf,
}

impl Persistence {
    /// Creates a handler for the record file at `path`. No I/O happens
    /// until [`save`](Self::save) or [`load`](Self::load) is called.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            file_path: path.as_ref().to_path_buf(),
        }
    }

    /// Writes the full record set, replacing whatever the file held.
    ///
    /// The data is written to a temporary sibling first and then renamed
    /// over the destination.
    pub fn save(&self, records: &[Record]) -> Result<()> {
        let temp_path = self.file_path.with_extension("json.tmp");

        let bytes = serde_json::to_vec_pretty(records)?;

        fs::write(&temp_path, bytes)?;
        fs::rename(&temp_path, &self.file_path)?;

        debug!("saved {} records to {:?}", records.len(), self.file_path);
        Ok(())
    }

    /// Reads the record set back, preserving file order.
    ///
    /// A missing file is a first run and yields an empty set. A file
    /// that exists but cannot be read or parsed is an error; callers
    /// are expected to surface it rather than start from scratch over
    /// data that may still be recoverable.
    pub fn load(&self) -> Result<Vec<Record>> {
        if !self.file_path.exists() {
            debug!("record file {:?} not found, starting empty", self.file_path);
            return Ok(Vec::new());
        }

        let content = fs::read(&self.file_path)?;
        let records: Vec<Record> = serde_json::from_slice(&content)?;

        debug!("loaded {} records from {:?}", records.len(), self.file_path);
        Ok(records)
    }
}
