//! Inverted word index.
//!
//! The [`InvertedIndex`] maps each normalized token to the set of record
//! positions whose text contains that token. It is built once from the full
//! [`RecordStore`] during engine construction and is read-only afterward —
//! there is no incremental insert or remove.
//!
//! Index invariant: `p ∈ index[t]` exactly when tokenizing record `p`
//! produces `t`. Lookups for unknown tokens return the empty set; absence is
//! a valid zero-match answer, never an error.

use ahash::{AHashMap, AHashSet};
use lazy_static::lazy_static;

use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;
use crate::store::RecordStore;

lazy_static! {
    /// Shared empty posting set returned for tokens that are not keys.
    static ref EMPTY_POSTINGS: AHashSet<usize> = AHashSet::new();
}

/// Mapping from token to the set of record positions containing it.
#[derive(Clone, Debug, Default)]
pub struct InvertedIndex {
    postings: AHashMap<String, AHashSet<usize>>,
}

impl InvertedIndex {
    /// Build the index from every record in the store.
    ///
    /// Each record is tokenized with the given tokenizer and every distinct
    /// token maps back to the record's position. Duplicate tokens within one
    /// record collapse under set semantics. Runs in O(total tokens).
    pub fn build(store: &RecordStore, tokenizer: &dyn Tokenizer) -> Result<Self> {
        let mut postings: AHashMap<String, AHashSet<usize>> = AHashMap::new();

        for (position, line) in store.iter().enumerate() {
            for token in tokenizer.tokenize(line)? {
                postings.entry(token.text).or_default().insert(position);
            }
        }

        Ok(InvertedIndex { postings })
    }

    /// Lookup the positions of records containing the given token.
    ///
    /// Returns the stored set if the token is a key, otherwise the empty set.
    pub fn lookup(&self, token: &str) -> &AHashSet<usize> {
        self.postings.get(token).unwrap_or(&EMPTY_POSTINGS)
    }

    /// Check whether the token is a key in the index.
    pub fn contains(&self, token: &str) -> bool {
        self.postings.contains_key(token)
    }

    /// Number of distinct tokens in the index.
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    /// Iterate over all indexed tokens.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.postings.keys().map(|s| s.as_str())
    }
}
