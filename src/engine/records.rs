use std::fmt;

use serde::{Deserialize, Serialize};

use crate::engine::Persistence;
use crate::Result;

/// A single student entry as held by the store and written to disk.
///
/// `age` is deliberately free text: callers may pass "20" or "twenty"
/// and the store keeps it as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: u64,
    pub name: String,
    pub age: String,
    pub programme: String,
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}, {} yrs, {}",
            self.id, self.name, self.age, self.programme
        )
    }
}

/// The in-memory record set plus the next-id counter.
///
/// Records are kept in insertion order. Every mutation rewrites the
/// backing file in full before returning, so the file always mirrors
/// the current set. With no [`Persistence`] attached the store is
/// purely in-memory.
pub struct RecordStore {
    records: Vec<Record>,
    next_id: u64,
    persistence: Option<Persistence>,
}

impl RecordStore {
    /// Builds a store over an initial record set.
    ///
    /// The next id is recomputed as one past the highest id present,
    /// so ids loaded from disk are never reissued.
    pub fn new(initial: Vec<Record>, persistence: Option<Persistence>) -> Self {
        let next_id = initial.iter().map(|r| r.id).max().map_or(1, |m| m + 1);
        Self {
            records: initial,
            next_id,
            persistence,
        }
    }

    /// Opens a store backed by the record file at `path`.
    ///
    /// A missing file starts an empty store; an unreadable or malformed
    /// file is an error.
    pub fn open<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let persistence = Persistence::new(path);
        let initial = persistence.load()?;
        Ok(Self::new(initial, Some(persistence)))
    }

    /// Adds a new record and persists the full set.
    ///
    /// Field contents are stored as given; whether they are sensible is
    /// the caller's concern. Returns a copy of the stored record.
    pub fn add(&mut self, name: &str, age: &str, programme: &str) -> Result<Record> {
        let record = Record {
            id: self.next_id,
            name: name.to_string(),
            age: age.to_string(),
            programme: programme.to_string(),
        };
        self.records.push(record.clone());
        self.next_id += 1;
        self.persist()?;
        Ok(record)
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Finds the first record whose id or name matches `keyword`.
    ///
    /// The keyword is trimmed and compared case-insensitively against
    /// names, and literally against the decimal form of ids. Duplicates
    /// resolve to the earliest insertion.
    pub fn find(&self, keyword: &str) -> Option<&Record> {
        let keyword = keyword.trim().to_lowercase();
        self.records
            .iter()
            .find(|r| r.id.to_string() == keyword || r.name.to_lowercase() == keyword)
    }

    /// Removes the record with the given id and persists the full set.
    ///
    /// Returns `Ok(false)` without touching disk when no record has
    /// that id.
    pub fn delete(&mut self, id: u64) -> Result<bool> {
        match self.records.iter().position(|r| r.id == id) {
            Some(idx) => {
                self.records.remove(idx);
                self.persist()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn persist(&self) -> Result<()> {
        if let Some(p) = &self.persistence {
            p.save(&self.records)?;
        }
        Ok(())
    }
}
