//! Text analysis pipeline: tokenizers, token filters, and analyzers.
//!
//! Raw utterances pass through an [`analyzer::Analyzer`], which combines a
//! [`tokenizer::Tokenizer`] with a chain of [`token_filter::Filter`]s to
//! produce normalized word tokens:
//!
//! ```text
//! Raw Text → Tokenizer → Filter 1 → ... → Filter N → Token Stream
//! ```
//!
//! The [`analyzer::StandardAnalyzer`] provides the normalization the
//! classifier trains and predicts with: whitespace splitting, ASCII case
//! folding, punctuation stripping, and removal of emptied tokens.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use analyzer::{Analyzer, PipelineAnalyzer, StandardAnalyzer};
pub use token::{Token, TokenStream};
pub use token_filter::{Filter, LowercaseFilter, PunctuationFilter, RemoveEmptyFilter};
pub use tokenizer::{Tokenizer, WhitespaceTokenizer};
