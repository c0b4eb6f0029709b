//! Rollbook is a small, file-backed store for student records.
//!
//! Each record carries an `id` assigned by the store, a `name`, an `age`
//! and a `programme`. Records live in memory in insertion order and are
//! mirrored to a single JSON file on every mutation.
//!
//! ## Core Components
//! - [`engine::RecordStore`]: the in-memory record set and id counter.
//! - [`engine::Persistence`]: JSON file serialization for the record set.
//!
//! The `rollbook` binary wraps the store in a small CLI; any other
//! presentation layer can drive the same four operations (add, list,
//! find, delete) directly.

pub mod engine;

use thiserror::Error;

/// Errors returned by the rollbook store.
#[derive(Error, Debug)]
pub enum Error {
    /// An I/O error occurred while reading or writing the record file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Error during JSON serialization or deserialization.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A specialized Result type for rollbook operations.
pub type Result<T> = std::result::Result<T, Error>;
