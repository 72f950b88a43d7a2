//! Append-only record store.
//!
//! The [`RecordStore`] is an ordered sequence of text records, each
//! identified by its 0-based position. Positions equal insertion order, are
//! contiguous, and stay stable for the lifetime of the store: records are
//! never mutated or removed after ingestion.
//!
//! # Examples
//!
//! ```
//! use javelin::store::RecordStore;
//!
//! let mut store = RecordStore::new();
//! let p0 = store.ingest("Alice Smith alice@x.com");
//! let p1 = store.ingest("Bob Alice bob@x.com");
//!
//! assert_eq!((p0, p1), (0, 1));
//! assert_eq!(store.get(1).unwrap(), "Bob Alice bob@x.com");
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{JavelinError, Result};

/// A single immutable record: a line of text plus its position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// The record position, assigned at ingestion time.
    pub position: usize,

    /// The record text, unchanged from ingestion.
    pub text: String,
}

impl Record {
    /// Create a new record.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Record {
            position,
            text: text.into(),
        }
    }
}

/// An ordered, append-only sequence of text records.
#[derive(Clone, Debug, Default)]
pub struct RecordStore {
    records: Vec<String>,
}

impl RecordStore {
    /// Create a new empty record store.
    pub fn new() -> Self {
        RecordStore {
            records: Vec::new(),
        }
    }

    /// Append a line as the next record and return its assigned position.
    ///
    /// Positions are strictly increasing from 0. Ingestion always succeeds,
    /// including for the empty string.
    pub fn ingest<S: Into<String>>(&mut self, line: S) -> usize {
        let position = self.records.len();
        self.records.push(line.into());
        position
    }

    /// Get the record text at the given position.
    ///
    /// Fails with [`JavelinError::OutOfRange`] when the position was never
    /// ingested.
    pub fn get(&self, position: usize) -> Result<&str> {
        self.records
            .get(position)
            .map(|s| s.as_str())
            .ok_or_else(|| JavelinError::out_of_range(position, self.records.len()))
    }

    /// Current record count.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over all records in position order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|s| s.as_str())
    }
}
