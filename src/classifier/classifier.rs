//! The intent classifier: training entry points and prediction.

use std::io::BufRead;
use std::path::Path;
use std::sync::Arc;

use crate::analysis::analyzer::{Analyzer, StandardAnalyzer};
use crate::classifier::corpus;
use crate::classifier::model::IntentModel;
use crate::classifier::types::{Classification, TrainingExample, UNKNOWN_INTENT};
use crate::error::Result;

/// Minimum cosine similarity required to accept a match instead of
/// returning [`UNKNOWN_INTENT`]. The boundary is inclusive: a similarity of
/// exactly this value is accepted.
pub const CONFIDENCE_THRESHOLD: f64 = 0.2;

/// Nearest-centroid intent classifier over TF-IDF weighted term vectors.
///
/// Training builds an [`IntentModel`] from a labeled corpus; prediction is a
/// pure in-memory computation over that model. Prediction never fails: an
/// untrained classifier has an empty vocabulary and answers
/// [`UNKNOWN_INTENT`] for every query.
pub struct IntentClassifier {
    analyzer: Arc<dyn Analyzer>,
    model: IntentModel,
}

impl IntentClassifier {
    /// Create an untrained classifier with the standard analyzer.
    pub fn new() -> Self {
        Self::with_analyzer(Arc::new(StandardAnalyzer::new()))
    }

    /// Create an untrained classifier with a custom analyzer.
    pub fn with_analyzer(analyzer: Arc<dyn Analyzer>) -> Self {
        IntentClassifier {
            analyzer,
            model: IntentModel::default(),
        }
    }

    /// Train from a `label: phrase` corpus file on disk.
    ///
    /// Fails with [`crate::error::VesperError::Io`] if the file cannot be
    /// opened or read; in that case the previously trained model (if any) is
    /// left untouched.
    pub fn train_from_path<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let examples = corpus::load_corpus(path)?;
        self.train(&examples)
    }

    /// Train from any buffered `label: phrase` corpus source.
    pub fn train_from_reader<R: BufRead>(&mut self, reader: R) -> Result<()> {
        let examples = corpus::read_examples(reader)?;
        self.train(&examples)
    }

    /// Train from already-parsed examples, replacing any prior model.
    ///
    /// The model is swapped in only once training has fully succeeded.
    pub fn train(&mut self, examples: &[TrainingExample]) -> Result<()> {
        let model = IntentModel::fit(examples, self.analyzer.as_ref())?;
        log::info!(
            "training complete: {} documents, {} vocabulary tokens, {} intents",
            model.document_count(),
            model.vocabulary_size(),
            model.intent_count()
        );
        self.model = model;
        Ok(())
    }

    /// Classify a query, returning the winning intent and its confidence.
    ///
    /// The intent is [`UNKNOWN_INTENT`] when the query has no usable tokens
    /// or the best similarity falls below [`CONFIDENCE_THRESHOLD`]; the
    /// confidence still reports the best similarity observed.
    pub fn classify(&self, query: &str) -> Classification {
        let tokens: Vec<String> = match self.analyzer.analyze(query) {
            Ok(stream) => stream.map(|token| token.text).collect(),
            Err(_) => Vec::new(),
        };

        match self.model.best_match(&tokens) {
            Some((intent, similarity)) if similarity >= CONFIDENCE_THRESHOLD => Classification {
                intent: intent.to_string(),
                confidence: similarity,
            },
            Some((_, similarity)) => Classification {
                intent: UNKNOWN_INTENT.to_string(),
                confidence: similarity,
            },
            None => Classification {
                intent: UNKNOWN_INTENT.to_string(),
                confidence: 0.0,
            },
        }
    }

    /// Classify a query and return only the intent label.
    pub fn predict(&self, query: &str) -> String {
        self.classify(query).intent
    }

    /// Access the trained model.
    pub fn model(&self) -> &IntentModel {
        &self.model
    }

    /// Number of distinct tokens observed during training.
    pub fn vocabulary_size(&self) -> usize {
        self.model.vocabulary_size()
    }

    /// Number of trained intents.
    pub fn intent_count(&self) -> usize {
        self.model.intent_count()
    }

    /// The trained intent labels, in lexical order.
    pub fn intents(&self) -> Vec<&str> {
        self.model.intents().collect()
    }
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for IntentClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntentClassifier")
            .field("analyzer", &self.analyzer.name())
            .field("vocabulary_size", &self.model.vocabulary_size())
            .field("intent_count", &self.model.intent_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, HashMap, HashSet};

    use super::*;
    use crate::classifier::model::Centroid;

    fn example(intent: &str, phrase: &str) -> TrainingExample {
        TrainingExample {
            intent: intent.to_string(),
            phrase: phrase.to_string(),
        }
    }

    #[test]
    fn test_untrained_classifier_answers_unknown() {
        let classifier = IntentClassifier::new();

        assert_eq!(classifier.predict("hello"), UNKNOWN_INTENT);
        assert_eq!(classifier.predict(""), UNKNOWN_INTENT);
        assert_eq!(classifier.vocabulary_size(), 0);
        assert_eq!(classifier.intent_count(), 0);
    }

    #[test]
    fn test_train_and_predict() {
        let mut classifier = IntentClassifier::new();
        classifier
            .train(&[
                example("greeting", "hello there"),
                example("greeting", "hi how are you"),
                example("farewell", "goodbye see you later"),
            ])
            .unwrap();

        assert_eq!(classifier.predict("hi"), "greeting");
        assert_eq!(classifier.predict("goodbye"), "farewell");
        assert_eq!(classifier.predict("xyz"), UNKNOWN_INTENT);
        assert_eq!(classifier.intents(), vec!["farewell", "greeting"]);
    }

    #[test]
    fn test_classify_reports_confidence() {
        let mut classifier = IntentClassifier::new();
        classifier
            .train(&[
                example("greeting", "hello there"),
                example("greeting", "hi how are you"),
                example("farewell", "goodbye see you later"),
            ])
            .unwrap();

        let classification = classifier.classify("hi");
        assert_eq!(classification.intent, "greeting");
        assert!(classification.confidence >= CONFIDENCE_THRESHOLD);
        assert!(classification.confidence <= 1.0);

        let unknown = classifier.classify("xyz");
        assert_eq!(unknown.intent, UNKNOWN_INTENT);
        assert_eq!(unknown.confidence, 0.0);
    }

    #[test]
    fn test_retrain_replaces_model() {
        let mut classifier = IntentClassifier::new();
        classifier
            .train(&[example("greeting", "hello there friend")])
            .unwrap();
        assert_eq!(classifier.intents(), vec!["greeting"]);

        classifier
            .train(&[example("farewell", "goodbye for now")])
            .unwrap();
        assert_eq!(classifier.intents(), vec!["farewell"]);
        assert_eq!(classifier.predict("hello"), UNKNOWN_INTENT);
    }

    #[test]
    fn test_failed_training_keeps_previous_model() {
        let mut classifier = IntentClassifier::new();
        classifier
            .train(&[
                example("greeting", "hello there"),
                example("farewell", "goodbye friend"),
                example("music", "play songs"),
            ])
            .unwrap();

        let result = classifier.train_from_path("/nonexistent/corpus.txt");
        assert!(result.is_err());

        // The earlier model is still in place.
        assert_eq!(classifier.predict("hello"), "greeting");
    }

    // Hand-built model whose cosine against a one-token query is exactly 1/5.
    fn boundary_classifier(check_weight: f64) -> IntentClassifier {
        let words = ["ping", "status", "report", "check"];
        let vocabulary: HashSet<String> = words.iter().map(|w| w.to_string()).collect();
        let idf: HashMap<String, f64> = words.iter().map(|w| (w.to_string(), 1.0)).collect();

        let weights: HashMap<String, f64> = [
            ("ping".to_string(), 1.0),
            ("status".to_string(), 2.0),
            ("report".to_string(), 2.0),
            ("check".to_string(), check_weight),
        ]
        .into_iter()
        .collect();
        let magnitude = weights.values().map(|w| w * w).sum::<f64>().sqrt();

        let mut intents = BTreeMap::new();
        intents.insert("status_check".to_string(), Centroid { weights, magnitude });

        let mut classifier = IntentClassifier::new();
        classifier.model = IntentModel {
            vocabulary,
            idf,
            intents,
            document_count: 1,
        };
        classifier
    }

    #[test]
    fn test_threshold_boundary_is_inclusive() {
        // Centroid magnitude is exactly 5, so "ping" scores exactly 0.2.
        let classifier = boundary_classifier(4.0);

        let classification = classifier.classify("ping");
        assert_eq!(classification.confidence, CONFIDENCE_THRESHOLD);
        assert_eq!(classification.intent, "status_check");
    }

    #[test]
    fn test_similarity_just_below_threshold_is_unknown() {
        // A slightly heavier centroid pushes the cosine just under 0.2.
        let classifier = boundary_classifier(4.0000000001);

        let classification = classifier.classify("ping");
        assert!(classification.confidence < CONFIDENCE_THRESHOLD);
        assert!(classification.confidence > 0.19);
        assert_eq!(classification.intent, UNKNOWN_INTENT);
    }
}
