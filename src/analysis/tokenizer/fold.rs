//! Case-folding, whitespace-splitting tokenizer.

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{JavelinError, Result};
use regex::Regex;
use std::sync::Arc;

/// The tokenizer used for both indexing and querying.
///
/// Normalization happens in three steps: the input is lower-cased with a
/// locale-independent mapping, every maximal run of whitespace is collapsed
/// to a single delimiter, and the text is split on that delimiter. Empty
/// fields are kept, so the split does not behave like `split_whitespace`:
///
/// - `""` produces `[""]`
/// - `"   "` produces `["", ""]`
/// - `"  a  b "` produces `["", "a", "b", ""]`
///
/// Leading and trailing whitespace is NOT trimmed before splitting. Trimming
/// first would change which records match queries containing only whitespace,
/// so the no-trim behavior is pinned by the tests below.
#[derive(Clone, Debug)]
pub struct FoldTokenizer {
    /// The regex matching the whitespace runs the split collapses.
    pattern: Arc<Regex>,
}

impl FoldTokenizer {
    /// Create a new fold tokenizer.
    pub fn new() -> Result<Self> {
        let regex = Regex::new(r"\s+")
            .map_err(|e| JavelinError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(FoldTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for FoldTokenizer {
    fn default() -> Self {
        Self::new().expect("Whitespace pattern should be valid")
    }
}

impl Tokenizer for FoldTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let lowered = text.to_lowercase();

        let tokens: Vec<Token> = self
            .pattern
            .split(&lowered)
            .enumerate()
            .map(|(position, word)| Token::new(word, position))
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "fold"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(input: &str) -> Vec<String> {
        let tokenizer = FoldTokenizer::new().unwrap();
        tokenizer
            .tokenize(input)
            .unwrap()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_fold_tokenizer() {
        assert_eq!(texts("hello world"), vec!["hello", "world"]);
    }

    #[test]
    fn test_case_folding() {
        assert_eq!(
            texts("Alice SMITH alice@x.com"),
            vec!["alice", "smith", "alice@x.com"]
        );
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        assert_eq!(texts("hello \t\n world"), vec!["hello", "world"]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(texts(""), vec![""]);
    }

    #[test]
    fn test_all_whitespace_input() {
        // One collapsed delimiter splits into leading and trailing empties.
        assert_eq!(texts("   "), vec!["", ""]);
    }

    #[test]
    fn test_leading_and_trailing_whitespace_not_trimmed() {
        assert_eq!(texts("  a  b "), vec!["", "a", "b", ""]);
    }

    #[test]
    fn test_token_positions() {
        let tokenizer = FoldTokenizer::new().unwrap();
        let tokens: Vec<Token> = tokenizer.tokenize("one two three").unwrap().collect();

        assert_eq!(tokens[0].position, 0);
        assert_eq!(tokens[1].position, 1);
        assert_eq!(tokens[2].position, 2);
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(FoldTokenizer::new().unwrap().name(), "fold");
    }
}
