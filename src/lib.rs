#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Lexicon and rule-based sentiment scoring for short, informal text.
//!
//! Each word's valence comes from a fixed lexicon and is adjusted by the
//! words around it, then the whole text is summarized as [`PolarityScores`].
//!
//! ## Pipeline
//!
//! - [`normalize`] - Folds diacritics, replaces emoji with descriptions,
//!   tokenizes and measures capitalization and punctuation emphasis
//! - [`ValenceEngine`] - Per-token valence with negation, booster, shouting,
//!   idiom and "at least" rules
//! - [`contrast_but`] / [`aggregate`] - Contrastive "but" reweighting and the
//!   final proportions and compound score
//!
//! ## Resources
//!
//! [`Lexicon::bundled`] holds the word valences, negations, boosters, idioms
//! and emoji descriptions shipped with the crate. They are parsed once and
//! shared; [`LexiconBuilder`] assembles alternatives from caller supplied
//! tables, and [`HeuristicConfig`] exposes every tuning constant.
//!
//! ## Example
//!
//! ```
//! use layered_sentiment::{score, Sentiment};
//!
//! let scores = score("VADER is smart, handsome, and funny!");
//! assert_eq!(scores.sentiment(), Sentiment::Positive);
//!
//! let scores = score("VADER is not smart, handsome, nor funny.");
//! assert!(scores.compound() < 0.0);
//! ```

mod aggregate;
mod analyzer;
mod config;
mod display;
mod document;
mod errors;
mod lexicon;
mod normalize;
mod scores;
mod valence;

pub use aggregate::{aggregate, contrast_but, normalize as normalize_score};
pub use analyzer::{score, Breakdown, SentimentAnalyzer};
pub use config::HeuristicConfig;
pub use display::ValenceDisplay;
pub use document::{Document, Token};
pub use errors::{ConfigError, LexiconError, SentimentError, SentimentResult};
pub use lexicon::{Booster, Idiom, Lexicon, LexiconBuilder, WordSet};
pub use normalize::{normalize, punctuation_amplifier, strip_diacritics, substitute_emoji, tokenize};
pub use scores::{PolarityScores, Sentiment};
pub use valence::ValenceEngine;

#[cfg(test)]
mod tests {
    mod demo_sentences;
    mod properties;
}
