//! The scoring entry point tying the pipeline stages together.

use crate::aggregate::{aggregate, contrast_but};
use crate::config::HeuristicConfig;
use crate::document::Document;
use crate::lexicon::Lexicon;
use crate::normalize::normalize;
use crate::scores::PolarityScores;
use crate::valence::ValenceEngine;

/// Scores text against a lexicon and a heuristic configuration.
///
/// An analyzer only borrows its lexicon and never mutates anything, so one
/// instance can be shared freely between threads.
///
/// ```
/// use layered_sentiment::SentimentAnalyzer;
///
/// let analyzer = SentimentAnalyzer::new();
/// let calm = analyzer.score("VADER is smart, handsome, and funny.");
/// let loud = analyzer.score("VADER is smart, handsome, and funny!");
/// assert!(loud.compound() > calm.compound());
/// ```
#[derive(Debug, Clone)]
pub struct SentimentAnalyzer<'a> {
    lexicon: &'a Lexicon,
    config: HeuristicConfig,
}

/// Every intermediate result of scoring one text.
#[derive(Debug, Clone, PartialEq)]
pub struct Breakdown {
    pub document: Document,
    /// Token valences before the contrastive "but" reweighting.
    pub valences: Vec<f64>,
    /// Token valences that were aggregated.
    pub contrasted: Vec<f64>,
    pub scores: PolarityScores,
}

impl SentimentAnalyzer<'static> {
    /// An analyzer over the bundled lexicon with the standard tuning.
    pub fn new() -> Self {
        Self::with_lexicon(Lexicon::bundled())
    }
}

impl Default for SentimentAnalyzer<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> SentimentAnalyzer<'a> {
    pub fn with_lexicon(lexicon: &'a Lexicon) -> Self {
        SentimentAnalyzer {
            lexicon,
            config: HeuristicConfig::standard(),
        }
    }

    pub fn with_config(mut self, config: HeuristicConfig) -> Self {
        self.config = config;
        self
    }

    pub fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    pub fn config(&self) -> &HeuristicConfig {
        &self.config
    }

    /// Normalize and tokenize `text`.
    pub fn document(&self, text: &str) -> Document {
        normalize(text, self.lexicon, &self.config)
    }

    /// Score `text`. Total: every input, including `""`, yields a result.
    pub fn score(&self, text: &str) -> PolarityScores {
        self.breakdown(text).scores
    }

    /// Score `text` and keep the intermediate per-token valences.
    pub fn breakdown(&self, text: &str) -> Breakdown {
        let document = self.document(text);
        let valences = ValenceEngine::new(self.lexicon, &self.config).valences(&document);

        let mut contrasted = valences.clone();
        contrast_but(&document, &mut contrasted, &self.config);

        let scores = aggregate(&contrasted, document.punctuation_amplifier(), &self.config);
        tracing::debug!(
            tokens = document.len(),
            compound = scores.compound(),
            "scored text"
        );

        Breakdown {
            document,
            valences,
            contrasted,
            scores,
        }
    }
}

/// Score `text` with the bundled lexicon and the standard tuning.
///
/// ```
/// let scores = layered_sentiment::score("");
/// assert_eq!(scores.compound(), 0.0);
/// ```
pub fn score(text: &str) -> PolarityScores {
    SentimentAnalyzer::new().score(text)
}
