//! Parallel batch query evaluation.
//!
//! After construction the engine is immutable, so queries share no mutable
//! state and need no coordination. A batch of queries therefore evaluates on
//! the rayon thread pool with `par_iter`, one query per task. Output order
//! matches input order; each element equals what the sequential
//! [`SearchEngine::search`] path produces for the same query.

use ahash::AHashSet;
use rayon::prelude::*;

use crate::engine::SearchEngine;
use crate::error::Result;
use crate::query::strategy::Strategy;

/// Evaluate a batch of queries in parallel.
///
/// Fails if any single query fails; there are no partial results.
pub fn search_batch(
    engine: &SearchEngine,
    queries: &[(String, Strategy)],
) -> Result<Vec<AHashSet<usize>>> {
    queries
        .par_iter()
        .map(|(query, strategy)| engine.search(query, *strategy))
        .collect()
}
