//! Punctuation filter implementation.
//!
//! This module provides a filter that removes ASCII punctuation characters
//! from token text. Words consisting entirely of punctuation are marked as
//! stopped so a later [`RemoveEmptyFilter`](super::remove_empty::RemoveEmptyFilter)
//! can drop them.
//!
//! # Examples
//!
//! ```
//! use vesper::analysis::token::Token;
//! use vesper::analysis::token_filter::Filter;
//! use vesper::analysis::token_filter::punctuation::PunctuationFilter;
//!
//! let filter = PunctuationFilter::new();
//! let tokens = vec![Token::new("what's", 0), Token::new("up?", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "whats");
//! assert_eq!(filtered[1].text, "up");
//! ```

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that strips ASCII punctuation characters from tokens.
///
/// # Behavior
///
/// - Removes every character for which `char::is_ascii_punctuation` is true
/// - Marks tokens that become empty as stopped
/// - Skips tokens already marked as stopped
/// - Preserves token positions and offsets (offsets keep pointing at the raw word)
#[derive(Clone, Debug, Default)]
pub struct PunctuationFilter;

impl PunctuationFilter {
    /// Create a new punctuation filter.
    pub fn new() -> Self {
        PunctuationFilter
    }
}

impl Filter for PunctuationFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                if token.is_stopped() {
                    token
                } else {
                    let stripped: String = token
                        .text
                        .chars()
                        .filter(|c| !c.is_ascii_punctuation())
                        .collect();
                    if stripped.is_empty() {
                        token.stop()
                    } else {
                        token.with_text(stripped)
                    }
                }
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "punctuation"
    }
}
