//! Error types for the Javelin library.
//!
//! All fallible operations in Javelin return [`Result`], whose error type is
//! the [`JavelinError`] enum.
//!
//! # Examples
//!
//! ```
//! use javelin::error::{JavelinError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(JavelinError::query("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Javelin operations.
///
/// This enum represents all possible errors that can occur in the Javelin
/// library. It uses the `thiserror` crate for automatic `Error` trait
/// implementation and provides convenient constructor methods for the
/// string-carrying variants.
#[derive(Error, Debug)]
pub enum JavelinError {
    /// I/O errors (corpus loading).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A record position that was never ingested was requested.
    #[error("position {position} is out of range for a store of {size} records")]
    OutOfRange {
        /// The requested record position.
        position: usize,
        /// The number of records in the store.
        size: usize,
    },

    /// Analysis-related errors (tokenizer construction).
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Query-related errors (unknown strategy, malformed query).
    #[error("Query error: {0}")]
    Query(String),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error.
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with JavelinError.
pub type Result<T> = std::result::Result<T, JavelinError>;

impl JavelinError {
    /// Create a new out-of-range error.
    pub fn out_of_range(position: usize, size: usize) -> Self {
        JavelinError::OutOfRange { position, size }
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        JavelinError::Analysis(msg.into())
    }

    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        JavelinError::Query(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        JavelinError::Other(msg.into())
    }
}
