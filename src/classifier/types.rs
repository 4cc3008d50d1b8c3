//! Common types for intent classification.

use serde::{Deserialize, Serialize};

/// The sentinel label returned when no intent clears the confidence
/// threshold. Downstream dispatchers must treat it as "no match"; the
/// classifier never special-cases any other label name.
pub const UNKNOWN_INTENT: &str = "unknown";

/// One labeled phrase of the training corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingExample {
    /// Intent label.
    pub intent: String,
    /// Example phrase.
    pub phrase: String,
}

/// The outcome of classifying a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// The winning intent label, or [`UNKNOWN_INTENT`].
    pub intent: String,
    /// The best cosine similarity observed, `0.0` when nothing was scored.
    pub confidence: f64,
}
