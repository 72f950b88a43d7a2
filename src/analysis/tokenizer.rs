//! Tokenizer implementations for text analysis.
//!
//! Tokenizers break input text into [`crate::analysis::token::Token`]s.
//! Javelin ships a single
//! tokenizer, [`fold::FoldTokenizer`], which performs the whole
//! normalization pipeline in one step: case folding followed by a
//! whitespace-collapsing split.
//!
//! The engine applies the same tokenizer value to records at indexing time
//! and to query strings at search time; using different tokenization on the
//! two paths would make index lookups silently miss.
//!
//! # Examples
//!
//! ```
//! use javelin::analysis::tokenizer::Tokenizer;
//! use javelin::analysis::tokenizer::fold::FoldTokenizer;
//!
//! let tokenizer = FoldTokenizer::new().unwrap();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello World").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].text, "hello");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so a tokenizer can be shared by
/// concurrent query evaluations.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual tokenizer modules
pub mod fold;
