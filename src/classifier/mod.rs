//! Intent classification using TF-IDF centroids and cosine similarity.
//!
//! # Architecture
//!
//! - [`IntentClassifier`]: owns an analyzer and a trained [`IntentModel`],
//!   exposes training and prediction
//! - [`IntentModel`]: vocabulary, global IDF weights, and per-intent
//!   centroid vectors, produced together by a single training pass
//! - [`corpus`]: line-oriented `label: phrase` corpus parsing
//! - [`types`]: training and classification data structures
//!
//! # Example
//!
//! ```
//! use vesper::classifier::IntentClassifier;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let corpus = "\
//! greeting: hello there
//! greeting: hi how are you
//! farewell: goodbye see you later
//! ";
//!
//! let mut classifier = IntentClassifier::new();
//! classifier.train_from_reader(corpus.as_bytes())?;
//!
//! assert_eq!(classifier.predict("hi"), "greeting");
//! assert_eq!(classifier.predict("xyz"), "unknown");
//! # Ok(())
//! # }
//! ```

mod classifier;
pub mod corpus;
mod model;
mod types;

// Public exports
pub use classifier::{CONFIDENCE_THRESHOLD, IntentClassifier};
pub use model::{Centroid, IntentModel};
pub use types::{Classification, TrainingExample, UNKNOWN_INTENT};
