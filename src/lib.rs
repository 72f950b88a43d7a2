//! # Javelin
//!
//! A small in-memory full-text search engine for line-oriented corpora.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Append-only record store with stable 0-based positions
//! - Inverted word index built in a single ingestion pass
//! - Boolean query strategies: ALL, ANY, NONE
//! - Read-only after construction; queries run in parallel without locking
//!
//! ## Example
//!
//! ```
//! use javelin::engine::SearchEngine;
//! use javelin::query::Strategy;
//!
//! let engine = SearchEngine::from_lines([
//!     "Alice Smith alice@x.com",
//!     "Bob Alice bob@x.com",
//! ]).unwrap();
//!
//! let hits = engine.search("alice bob", Strategy::All).unwrap();
//! assert!(hits.contains(&1));
//! ```

pub mod analysis;
pub mod cli;
pub mod engine;
pub mod error;
pub mod index;
pub mod parallel;
pub mod query;
pub mod store;

pub mod prelude {
    //! Convenience re-exports of the most commonly used types.

    pub use crate::engine::SearchEngine;
    pub use crate::error::{JavelinError, Result};
    pub use crate::query::Strategy;
    pub use crate::store::RecordStore;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
