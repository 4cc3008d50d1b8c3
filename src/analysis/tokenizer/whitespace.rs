//! Whitespace tokenizer implementation.

use super::Tokenizer;

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// A tokenizer that splits text on whitespace runs.
///
/// Consecutive whitespace characters are treated as a single separator, so
/// empty tokens are never produced. Tokenization cannot fail; empty input
/// yields an empty stream.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        let mut position = 0;
        let mut word_start: Option<usize> = None;

        for (offset, ch) in text.char_indices() {
            if ch.is_whitespace() {
                if let Some(start) = word_start.take() {
                    tokens.push(Token::with_offsets(&text[start..offset], position, start, offset));
                    position += 1;
                }
            } else if word_start.is_none() {
                word_start = Some(offset);
            }
        }

        if let Some(start) = word_start {
            tokens.push(Token::with_offsets(&text[start..], position, start, text.len()));
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_tokenizer() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("hello  world\ttest").unwrap().collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[2].text, "test");
    }

    #[test]
    fn test_whitespace_tokenizer_offsets() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("  hi hi ").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].start_offset, 2);
        assert_eq!(tokens[0].end_offset, 4);
        assert_eq!(tokens[1].start_offset, 5);
        assert_eq!(tokens[1].end_offset, 7);
        assert_eq!(tokens[1].position, 1);
    }

    #[test]
    fn test_whitespace_tokenizer_empty_input() {
        let tokenizer = WhitespaceTokenizer::new();
        assert_eq!(tokenizer.tokenize("").unwrap().count(), 0);
        assert_eq!(tokenizer.tokenize("   \t\n").unwrap().count(), 0);
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(WhitespaceTokenizer::new().name(), "whitespace");
    }
}
