//! Query types and evaluation.
//!
//! A query is a sequence of tokens (produced by the same tokenizer as record
//! text) combined under one of three [`Strategy`] values. Evaluation is pure
//! set algebra over the posting sets of the inverted index; results are
//! unordered sets of record positions.

pub mod evaluator;
pub mod strategy;

pub use evaluator::QueryEvaluator;
pub use strategy::Strategy;
