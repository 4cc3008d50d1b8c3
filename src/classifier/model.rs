//! TF-IDF intent model: vocabulary, global term weights, and centroids.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::analysis::analyzer::Analyzer;
use crate::classifier::types::TrainingExample;
use crate::error::Result;

/// The aggregate weighted-term vector of one intent.
///
/// Weights are sparse: tokens the intent's training phrases never used are
/// absent and implicitly zero. The magnitude is the Euclidean norm over the
/// stored weights and is zero only when the intent's aggregated training
/// tokens were empty.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Centroid {
    pub(crate) weights: HashMap<String, f64>,
    pub(crate) magnitude: f64,
}

impl Centroid {
    /// Get the stored weight for a token, if any.
    pub fn weight(&self, token: &str) -> Option<f64> {
        self.weights.get(token).copied()
    }

    /// The Euclidean norm of this centroid's weight vector.
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }
}

/// A trained intent model.
///
/// The vocabulary, IDF mapping, and centroids are produced together by
/// [`IntentModel::fit`] and are mutually consistent: every token appearing in
/// any centroid is in the vocabulary and has a global weight. The model is
/// read-only after training.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IntentModel {
    pub(crate) vocabulary: HashSet<String>,
    pub(crate) idf: HashMap<String, f64>,
    pub(crate) intents: BTreeMap<String, Centroid>,
    pub(crate) document_count: usize,
}

impl IntentModel {
    /// Train a model from labeled examples.
    ///
    /// Each example counts as one document for inverse-document-frequency
    /// purposes. Per token, `idf = ln(total_docs / (1 + doc_freq))`; this
    /// goes negative for tokens appearing in nearly every document, which is
    /// accepted and simply down-weights them. Centroid weights are raw
    /// per-intent term counts times IDF, not normalized by length; cosine
    /// comparison at prediction time cancels the resulting magnitude
    /// differences between intents.
    pub fn fit(examples: &[TrainingExample], analyzer: &dyn Analyzer) -> Result<IntentModel> {
        let mut vocabulary = HashSet::new();
        let mut document_frequency: HashMap<String, usize> = HashMap::new();
        let mut intent_tokens: BTreeMap<String, Vec<String>> = BTreeMap::new();

        for example in examples {
            let tokens: Vec<String> = analyzer
                .analyze(&example.phrase)?
                .map(|token| token.text)
                .collect();

            // A token occurring twice in one document still counts once here.
            let distinct: HashSet<&String> = tokens.iter().collect();
            for token in distinct {
                *document_frequency.entry(token.clone()).or_insert(0) += 1;
            }

            vocabulary.extend(tokens.iter().cloned());
            intent_tokens
                .entry(example.intent.clone())
                .or_default()
                .extend(tokens);
        }

        let total_documents = examples.len();
        let mut idf = HashMap::with_capacity(vocabulary.len());
        for token in &vocabulary {
            let doc_freq = document_frequency.get(token).copied().unwrap_or(0);
            let weight = (total_documents as f64 / (1.0 + doc_freq as f64)).ln();
            idf.insert(token.clone(), weight);
        }

        let mut intents = BTreeMap::new();
        for (intent, tokens) in intent_tokens {
            let mut term_counts: HashMap<&String, usize> = HashMap::new();
            for token in &tokens {
                *term_counts.entry(token).or_insert(0) += 1;
            }

            let mut weights = HashMap::with_capacity(term_counts.len());
            for (token, count) in term_counts {
                let weight = count as f64 * idf.get(token).copied().unwrap_or_default();
                weights.insert(token.clone(), weight);
            }

            let magnitude = weights.values().map(|w| w * w).sum::<f64>().sqrt();
            intents.insert(intent, Centroid { weights, magnitude });
        }

        Ok(IntentModel {
            vocabulary,
            idf,
            intents,
            document_count: total_documents,
        })
    }

    /// Score the query tokens against every centroid and return the best
    /// `(intent, cosine similarity)` pair.
    ///
    /// Out-of-vocabulary tokens contribute nothing; repeated tokens
    /// accumulate additively. Returns `None` when the query vector's
    /// magnitude is zero (no in-vocabulary tokens, or all accumulated
    /// weights cancel). Intents are scanned in lexical label order and ties
    /// are kept by the first label seen, so tie-breaking is deterministic.
    /// Zero-magnitude centroids are skipped and can never be selected.
    pub fn best_match(&self, tokens: &[String]) -> Option<(&str, f64)> {
        let mut query_vector: HashMap<&str, f64> = HashMap::new();
        for token in tokens {
            if self.vocabulary.contains(token) {
                let weight = self.idf.get(token).copied().unwrap_or_default();
                *query_vector.entry(token.as_str()).or_insert(0.0) += weight;
            }
        }

        let query_magnitude = query_vector.values().map(|w| w * w).sum::<f64>().sqrt();
        if query_magnitude == 0.0 {
            return None;
        }

        let mut best: Option<(&str, f64)> = None;
        for (intent, centroid) in &self.intents {
            if centroid.magnitude == 0.0 {
                continue;
            }

            let dot: f64 = query_vector
                .iter()
                .filter_map(|(token, weight)| {
                    centroid.weights.get(*token).map(|cw| cw * weight)
                })
                .sum();

            let similarity = dot / (query_magnitude * centroid.magnitude);
            match best {
                Some((_, best_similarity)) if similarity <= best_similarity => {}
                _ => best = Some((intent.as_str(), similarity)),
            }
        }

        best
    }

    /// Number of distinct tokens observed during training.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Number of trained intents.
    pub fn intent_count(&self) -> usize {
        self.intents.len()
    }

    /// Number of well-formed documents seen during training.
    pub fn document_count(&self) -> usize {
        self.document_count
    }

    /// The trained intent labels, in lexical order.
    pub fn intents(&self) -> impl Iterator<Item = &str> {
        self.intents.keys().map(|label| label.as_str())
    }

    /// Get the global IDF weight for a token, if it is in the vocabulary.
    pub fn idf(&self, token: &str) -> Option<f64> {
        self.idf.get(token).copied()
    }

    /// Get the centroid for an intent, if it was trained.
    pub fn centroid(&self, intent: &str) -> Option<&Centroid> {
        self.intents.get(intent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::StandardAnalyzer;

    fn examples(pairs: &[(&str, &str)]) -> Vec<TrainingExample> {
        pairs
            .iter()
            .map(|(intent, phrase)| TrainingExample {
                intent: intent.to_string(),
                phrase: phrase.to_string(),
            })
            .collect()
    }

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_fit_builds_consistent_model() {
        let analyzer = StandardAnalyzer::new();
        let model = IntentModel::fit(
            &examples(&[
                ("greeting", "hello there"),
                ("greeting", "hi how are you"),
                ("farewell", "goodbye see you later"),
            ]),
            &analyzer,
        )
        .unwrap();

        assert_eq!(model.document_count(), 3);
        assert_eq!(model.vocabulary_size(), 9);
        assert_eq!(model.intent_count(), 2);

        // Every centroid token is in the vocabulary and has an IDF weight.
        for intent in ["greeting", "farewell"] {
            let centroid = model.centroid(intent).unwrap();
            for token in centroid.weights.keys() {
                assert!(model.vocabulary.contains(token));
                assert!(model.idf(token).is_some());
            }
        }
    }

    #[test]
    fn test_fit_idf_values() {
        let analyzer = StandardAnalyzer::new();
        let model = IntentModel::fit(
            &examples(&[
                ("greeting", "hello there"),
                ("greeting", "hi how are you"),
                ("farewell", "goodbye see you later"),
            ]),
            &analyzer,
        )
        .unwrap();

        // "hello" appears in 1 of 3 documents: ln(3 / 2)
        let expected = (3.0f64 / 2.0).ln();
        assert!((model.idf("hello").unwrap() - expected).abs() < 1e-12);

        // "you" appears in 2 of 3 documents: ln(3 / 3) = 0
        assert_eq!(model.idf("you").unwrap(), 0.0);
    }

    #[test]
    fn test_fit_negative_idf_is_preserved() {
        let analyzer = StandardAnalyzer::new();
        // "please" appears in every document: ln(2 / 3) < 0.
        let model = IntentModel::fit(
            &examples(&[
                ("music", "please play music"),
                ("time", "the time please"),
            ]),
            &analyzer,
        )
        .unwrap();

        let idf = model.idf("please").unwrap();
        assert!(idf < 0.0);

        // The centroid keeps the negative contribution.
        let centroid = model.centroid("music").unwrap();
        assert!(centroid.weight("please").unwrap() < 0.0);
        assert!(centroid.magnitude() > 0.0);
    }

    #[test]
    fn test_fit_centroid_uses_raw_counts() {
        let analyzer = StandardAnalyzer::new();
        let model = IntentModel::fit(
            &examples(&[
                ("music", "play play play"),
                ("time", "clock"),
                ("weather", "sunny"),
            ]),
            &analyzer,
        )
        .unwrap();

        let idf_play = model.idf("play").unwrap();
        let centroid = model.centroid("music").unwrap();
        assert!((centroid.weight("play").unwrap() - 3.0 * idf_play).abs() < 1e-12);
    }

    #[test]
    fn test_fit_is_idempotent() {
        let analyzer = StandardAnalyzer::new();
        let corpus = examples(&[
            ("greeting", "hello there"),
            ("greeting", "hi how are you"),
            ("farewell", "goodbye see you later"),
        ]);

        let first = IntentModel::fit(&corpus, &analyzer).unwrap();
        let second = IntentModel::fit(&corpus, &analyzer).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_fit_empty_corpus() {
        let analyzer = StandardAnalyzer::new();
        let model = IntentModel::fit(&[], &analyzer).unwrap();

        assert_eq!(model.vocabulary_size(), 0);
        assert_eq!(model.intent_count(), 0);
        assert!(model.best_match(&tokens(&["anything"])).is_none());
    }

    #[test]
    fn test_fit_label_with_empty_phrase_gets_zero_magnitude() {
        let analyzer = StandardAnalyzer::new();
        let model = IntentModel::fit(
            &examples(&[("ghost", "?!"), ("greeting", "hello"), ("farewell", "bye")]),
            &analyzer,
        )
        .unwrap();

        assert_eq!(model.centroid("ghost").unwrap().magnitude(), 0.0);

        // The zero-magnitude intent is skipped, never selected.
        let (intent, _) = model.best_match(&tokens(&["hello"])).unwrap();
        assert_eq!(intent, "greeting");
    }

    #[test]
    fn test_best_match_out_of_vocabulary() {
        let analyzer = StandardAnalyzer::new();
        let model =
            IntentModel::fit(&examples(&[("greeting", "hello there")]), &analyzer).unwrap();

        assert!(model.best_match(&tokens(&["xyz", "qwerty"])).is_none());
        assert!(model.best_match(&[]).is_none());
    }

    #[test]
    fn test_best_match_repeated_tokens_accumulate() {
        let analyzer = StandardAnalyzer::new();
        let model = IntentModel::fit(
            &examples(&[
                ("music", "play songs"),
                ("time", "what time"),
                ("weather", "sunny today"),
            ]),
            &analyzer,
        )
        .unwrap();

        let single = model.best_match(&tokens(&["play"])).unwrap();
        let double = model.best_match(&tokens(&["play", "play"])).unwrap();

        // Same winning intent; the direction is unchanged, so the cosine is too.
        assert_eq!(single.0, double.0);
        assert!((single.1 - double.1).abs() < 1e-12);
    }

    #[test]
    fn test_best_match_tie_breaks_lexically() {
        // Two intents with mathematically identical centroids.
        let analyzer = StandardAnalyzer::new();
        let model = IntentModel::fit(
            &examples(&[("beta", "ping"), ("alpha", "ping")]),
            &analyzer,
        )
        .unwrap();

        let (intent, similarity) = model.best_match(&tokens(&["ping"])).unwrap();
        assert_eq!(intent, "alpha");
        assert!((similarity - 1.0).abs() < 1e-12);
    }

    // Exact power-of-two weights so the cosine computes to exactly 1/5.
    fn boundary_model() -> IntentModel {
        let words = ["ping", "status", "report", "check"];
        let vocabulary: HashSet<String> = words.iter().map(|w| w.to_string()).collect();
        let idf: HashMap<String, f64> = words.iter().map(|w| (w.to_string(), 1.0)).collect();

        let weights: HashMap<String, f64> = [
            ("ping".to_string(), 1.0),
            ("status".to_string(), 2.0),
            ("report".to_string(), 2.0),
            ("check".to_string(), 4.0),
        ]
        .into_iter()
        .collect();
        let magnitude = weights.values().map(|w| w * w).sum::<f64>().sqrt();
        assert_eq!(magnitude, 5.0);

        let mut intents = BTreeMap::new();
        intents.insert("status_check".to_string(), Centroid { weights, magnitude });

        IntentModel {
            vocabulary,
            idf,
            intents,
            document_count: 1,
        }
    }

    #[test]
    fn test_best_match_exact_fifth_cosine() {
        let model = boundary_model();

        // query {ping: 1.0}: magnitude 1, dot 1, cosine 1 / (1 * 5) = 0.2 exactly.
        let (intent, similarity) = model.best_match(&tokens(&["ping"])).unwrap();
        assert_eq!(intent, "status_check");
        assert_eq!(similarity, 0.2);
    }
}
