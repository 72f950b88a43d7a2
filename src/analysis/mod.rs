//! Text analysis for indexing and querying.
//!
//! Analysis in Javelin is deliberately small: one normalization applied
//! identically to record text and to query strings. The engine holds a single
//! [`tokenizer::Tokenizer`] value and runs every line and every query through
//! it, so a record and a query can only match when they agree token for token.

pub mod token;
pub mod tokenizer;

pub use token::{Token, TokenStream};
pub use tokenizer::Tokenizer;
