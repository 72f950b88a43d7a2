//! Set-based evaluation of boolean queries against the inverted index.

use ahash::AHashSet;

use crate::analysis::token::Token;
use crate::index::InvertedIndex;
use crate::query::strategy::Strategy;

/// Evaluates token sequences against an immutable index.
///
/// The evaluator borrows the index and carries the record count, which the
/// NONE strategy needs for its complement. It holds no mutable state, so one
/// evaluator may serve any number of concurrent evaluations.
#[derive(Clone, Copy, Debug)]
pub struct QueryEvaluator<'a> {
    index: &'a InvertedIndex,
    record_count: usize,
}

impl<'a> QueryEvaluator<'a> {
    /// Create an evaluator over the given index.
    ///
    /// `record_count` must be the size of the store the index was built from.
    pub fn new(index: &'a InvertedIndex, record_count: usize) -> Self {
        QueryEvaluator {
            index,
            record_count,
        }
    }

    /// Evaluate the query tokens under the given strategy.
    ///
    /// - `ALL`: intersection of the tokens' posting sets. Empty query yields
    ///   the empty set — there is no "intersection of nothing" that equals
    ///   everything here.
    /// - `ANY`: union of the posting sets. Empty query yields the empty set.
    /// - `NONE`: every position in `{0..record_count}` not present in any
    ///   token's posting set. Empty query yields all positions.
    ///
    /// The result is an unordered set; callers must not rely on iteration
    /// order.
    pub fn evaluate(&self, tokens: &[Token], strategy: Strategy) -> AHashSet<usize> {
        match strategy {
            Strategy::All => self.evaluate_all(tokens),
            Strategy::Any => self.evaluate_any(tokens),
            Strategy::None => self.evaluate_none(tokens),
        }
    }

    fn evaluate_all(&self, tokens: &[Token]) -> AHashSet<usize> {
        let Some((first, rest)) = tokens.split_first() else {
            return AHashSet::new();
        };

        let mut positions = self.index.lookup(&first.text).clone();
        for token in rest {
            if positions.is_empty() {
                break;
            }
            let postings = self.index.lookup(&token.text);
            positions.retain(|p| postings.contains(p));
        }
        positions
    }

    fn evaluate_any(&self, tokens: &[Token]) -> AHashSet<usize> {
        let mut positions = AHashSet::new();
        for token in tokens {
            positions.extend(self.index.lookup(&token.text).iter().copied());
        }
        positions
    }

    fn evaluate_none(&self, tokens: &[Token]) -> AHashSet<usize> {
        let mut positions: AHashSet<usize> = (0..self.record_count).collect();
        for token in tokens {
            for p in self.index.lookup(&token.text) {
                positions.remove(p);
            }
        }
        positions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tokenizer::Tokenizer;
    use crate::analysis::tokenizer::fold::FoldTokenizer;
    use crate::store::RecordStore;

    struct Fixture {
        index: InvertedIndex,
        record_count: usize,
        tokenizer: FoldTokenizer,
    }

    impl Fixture {
        fn new(lines: &[&str]) -> Self {
            let mut store = RecordStore::new();
            for line in lines {
                store.ingest(*line);
            }
            let tokenizer = FoldTokenizer::new().unwrap();
            let index = InvertedIndex::build(&store, &tokenizer).unwrap();
            Fixture {
                index,
                record_count: store.len(),
                tokenizer,
            }
        }

        fn eval(&self, query: &str, strategy: Strategy) -> AHashSet<usize> {
            let tokens: Vec<Token> = self.tokenizer.tokenize(query).unwrap().collect();
            QueryEvaluator::new(&self.index, self.record_count).evaluate(&tokens, strategy)
        }
    }

    fn set(positions: &[usize]) -> AHashSet<usize> {
        positions.iter().copied().collect()
    }

    #[test]
    fn test_all_intersects_posting_sets() {
        let fx = Fixture::new(&["Alice Smith alice@x.com", "Bob Alice bob@x.com"]);

        assert_eq!(fx.eval("alice bob", Strategy::All), set(&[1]));
        assert_eq!(fx.eval("alice", Strategy::All), set(&[0, 1]));
    }

    #[test]
    fn test_any_unions_posting_sets() {
        let fx = Fixture::new(&["Alice Smith alice@x.com", "Bob Alice bob@x.com"]);

        assert_eq!(fx.eval("alice", Strategy::Any), set(&[0, 1]));
        assert_eq!(fx.eval("smith bob", Strategy::Any), set(&[0, 1]));
    }

    #[test]
    fn test_none_complements_the_union() {
        let fx = Fixture::new(&["Alice Smith alice@x.com", "Bob Alice bob@x.com"]);

        assert_eq!(fx.eval("bob", Strategy::None), set(&[0]));
        assert_eq!(fx.eval("alice", Strategy::None), set(&[]));
    }

    #[test]
    fn test_empty_token_sequence() {
        let fx = Fixture::new(&["one", "two", "three"]);
        let evaluator = QueryEvaluator::new(&fx.index, fx.record_count);

        assert!(evaluator.evaluate(&[], Strategy::All).is_empty());
        assert!(evaluator.evaluate(&[], Strategy::Any).is_empty());
        assert_eq!(evaluator.evaluate(&[], Strategy::None), set(&[0, 1, 2]));
    }

    #[test]
    fn test_unknown_token() {
        let fx = Fixture::new(&["one", "two"]);

        assert!(fx.eval("zzz", Strategy::All).is_empty());
        assert!(fx.eval("zzz", Strategy::Any).is_empty());
        assert_eq!(fx.eval("zzz", Strategy::None), set(&[0, 1]));
    }

    #[test]
    fn test_empty_corpus() {
        let fx = Fixture::new(&[]);

        for strategy in Strategy::ALL_STRATEGIES {
            assert!(fx.eval("anything", strategy).is_empty());
        }
    }

    #[test]
    fn test_all_is_subset_of_any() {
        let fx = Fixture::new(&["red green", "green blue", "blue red", "red green blue"]);

        for query in ["red", "red green", "green blue red", "zzz red"] {
            let all = fx.eval(query, Strategy::All);
            let any = fx.eval(query, Strategy::Any);
            assert!(all.is_subset(&any), "ALL({query:?}) not within ANY");
        }
    }

    #[test]
    fn test_none_is_complement_of_any() {
        let fx = Fixture::new(&["red green", "green blue", "blue red"]);

        for query in ["red", "green blue", "zzz"] {
            let any = fx.eval(query, Strategy::Any);
            let none = fx.eval(query, Strategy::None);

            assert!(any.is_disjoint(&none));
            assert_eq!(any.len() + none.len(), fx.record_count);
        }
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let fx = Fixture::new(&["alpha beta", "beta gamma"]);

        for strategy in Strategy::ALL_STRATEGIES {
            let first = fx.eval("beta alpha", strategy);
            let second = fx.eval("beta alpha", strategy);
            assert_eq!(first, second);
        }
    }
}
