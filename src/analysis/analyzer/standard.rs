//! Standard analyzer that normalizes utterances for intent matching.
//!
//! # Pipeline
//!
//! 1. WhitespaceTokenizer (split on whitespace runs)
//! 2. LowercaseFilter (ASCII case folding)
//! 3. PunctuationFilter (strip ASCII punctuation characters)
//! 4. RemoveEmptyFilter (drop words emptied by stripping)
//!
//! Duplicates and token order are preserved; callers that need distinct
//! tokens deduplicate themselves.
//!
//! # Examples
//!
//! ```
//! use vesper::analysis::analyzer::{Analyzer, StandardAnalyzer};
//!
//! let analyzer = StandardAnalyzer::new();
//! let tokens: Vec<_> = analyzer.analyze("What's the TIME?").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[0].text, "whats");
//! assert_eq!(tokens[1].text, "the");
//! assert_eq!(tokens[2].text, "time");
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::punctuation::PunctuationFilter;
use crate::analysis::token_filter::remove_empty::RemoveEmptyFilter;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::error::Result;

/// The default analyzer for training corpora and incoming queries.
pub struct StandardAnalyzer {
    inner: PipelineAnalyzer,
}

impl StandardAnalyzer {
    /// Create a new standard analyzer with default settings.
    pub fn new() -> Self {
        let tokenizer = Arc::new(WhitespaceTokenizer::new());
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(PunctuationFilter::new()))
            .add_filter(Arc::new(RemoveEmptyFilter::new()))
            .with_name("standard".to_string());

        StandardAnalyzer { inner: analyzer }
    }

    /// Get the inner pipeline analyzer.
    pub fn inner(&self) -> &PipelineAnalyzer {
        &self.inner
    }
}

impl Default for StandardAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for StandardAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "standard"
    }
}

impl std::fmt::Debug for StandardAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StandardAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}
