//! The search engine facade.
//!
//! [`SearchEngine`] ties the record store, the inverted index and the
//! tokenizer together. Construction is a single one-shot ingestion pass:
//! every supplied line is appended to the store and folded into the index
//! before the first query is accepted. After construction both structures are
//! immutable, so an engine may be shared read-only across threads.
//!
//! # Examples
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
//! let hits = engine.search("alice", Strategy::Any).unwrap();
//! assert_eq!(hits.len(), 2);
//!
//! let none = engine.search("bob", Strategy::None).unwrap();
//! assert!(none.contains(&0));
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ahash::AHashSet;

use crate::analysis::token::Token;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::fold::FoldTokenizer;
use crate::error::Result;
use crate::index::InvertedIndex;
use crate::query::evaluator::QueryEvaluator;
use crate::query::strategy::Strategy;
use crate::store::RecordStore;

/// An in-memory full-text search engine over a line-oriented corpus.
///
/// The engine owns the tokenizer and applies it identically when indexing
/// records and when parsing query strings. Using different normalization on
/// the two paths would make index lookups silently miss, so there is no way
/// to query with a different tokenizer than the one the index was built with.
pub struct SearchEngine {
    store: RecordStore,
    index: InvertedIndex,
    tokenizer: Box<dyn Tokenizer>,
}

impl SearchEngine {
    /// Build an engine from an iterator of lines, in order.
    ///
    /// Lines are assigned positions in the order supplied; the engine does
    /// no reordering or deduplication.
    pub fn from_lines<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_lines_with_tokenizer(lines, Box::new(FoldTokenizer::new()?))
    }

    /// Build an engine from an iterator of lines with an explicit tokenizer.
    pub fn from_lines_with_tokenizer<I, S>(lines: I, tokenizer: Box<dyn Tokenizer>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut store = RecordStore::new();
        for line in lines {
            store.ingest(line);
        }
        let index = InvertedIndex::build(&store, tokenizer.as_ref())?;

        Ok(SearchEngine {
            store,
            index,
            tokenizer,
        })
    }

    /// Build an engine by reading lines from a buffered reader, in order.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let lines = reader.lines().collect::<std::io::Result<Vec<String>>>()?;
        Self::from_lines(lines)
    }

    /// Build an engine from the lines of a file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Evaluate a raw query string under the given strategy.
    ///
    /// The query is tokenized exactly like record text. The result is the
    /// unordered set of matching record positions; an empty set is a valid
    /// outcome, not an error.
    pub fn search(&self, query: &str, strategy: Strategy) -> Result<AHashSet<usize>> {
        let tokens: Vec<Token> = self.tokenizer.tokenize(query)?.collect();
        let evaluator = QueryEvaluator::new(&self.index, self.store.len());
        Ok(evaluator.evaluate(&tokens, strategy))
    }

    /// Resolve a record position back to its text.
    pub fn record(&self, position: usize) -> Result<&str> {
        self.store.get(position)
    }

    /// Number of records in the corpus.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Check if the corpus is empty.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// The underlying record store.
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// The underlying inverted index.
    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    /// The tokenizer shared by indexing and querying.
    pub fn tokenizer(&self) -> &dyn Tokenizer {
        self.tokenizer.as_ref()
    }
}

impl std::fmt::Debug for SearchEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchEngine")
            .field("records", &self.store.len())
            .field("terms", &self.index.term_count())
            .field("tokenizer", &self.tokenizer.name())
            .finish()
    }
}
