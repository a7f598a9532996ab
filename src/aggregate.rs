//! Sentence-level aggregation of token valences into [`PolarityScores`].

use crate::config::HeuristicConfig;
use crate::document::Document;
use crate::scores::{round_to, PolarityScores};

/// Reweight valences around the first contrastive "but".
///
/// Valences before the word preceding "but" are scaled down and valences
/// after "but" are scaled up. The word right before "but", "but" itself and
/// the final token keep their value.
pub fn contrast_but(document: &Document, valences: &mut [f64], config: &HeuristicConfig) {
    let but = match document.tokens().iter().position(|t| t.lower() == "but") {
        Some(index) => index,
        None => return,
    };

    let len = valences.len();
    for (j, valence) in valences.iter_mut().enumerate() {
        if j + 1 < but {
            *valence *= config.but_before_scale;
        } else if j > but && j + 1 < len {
            *valence *= config.but_after_scale;
        }
    }
}

/// Combine token valences with the punctuation amplifier.
pub fn aggregate(valences: &[f64], amplifier: f64, config: &HeuristicConfig) -> PolarityScores {
    if valences.is_empty() {
        return PolarityScores::default();
    }

    let mut sum: f64 = valences.iter().sum();
    if sum > 0.0 {
        sum += amplifier;
    } else {
        sum -= amplifier;
    }

    let mut positive = 0.0_f64;
    let mut negative = 0.0_f64;
    let mut neutral = 0usize;
    for &valence in valences {
        if valence > 0.0 {
            positive += valence + 1.0;
        } else if valence < 0.0 {
            negative += valence - 1.0;
        } else {
            neutral += 1;
        }
    }

    if positive > negative.abs() {
        negative += amplifier;
    } else {
        negative -= amplifier;
    }

    let total = positive + negative.abs() + neutral as f64;
    if total == 0.0 {
        return PolarityScores::default();
    }

    PolarityScores::new(
        round_to(positive / total, 2),
        round_to(negative.abs() / total, 2),
        round_to(neutral as f64 / total, 2),
        round_to(normalize(sum, config.normalization_alpha), 2),
    )
}

/// Map an unbounded sum into `[-1, 1]`.
pub fn normalize(score: f64, alpha: f64) -> f64 {
    (score / (score * score + alpha).sqrt()).clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexicon;
    use crate::normalize::normalize as normalize_text;

    fn document(text: &str) -> Document {
        normalize_text(text, Lexicon::bundled(), &HeuristicConfig::standard())
    }

    #[test]
    fn test_empty_is_all_zero() {
        let scores = aggregate(&[], 0.292, &HeuristicConfig::standard());
        assert_eq!(scores, PolarityScores::default());
    }

    #[test]
    fn test_single_positive_word() {
        // "The book was good."
        let scores = aggregate(&[0.0, 0.0, 0.0, 1.9], 0.0, &HeuristicConfig::standard());
        assert_eq!(scores, PolarityScores::new(0.49, 0.0, 0.51, 0.44));
    }

    #[test]
    fn test_all_neutral() {
        let scores = aggregate(&[0.0, 0.0], 0.0, &HeuristicConfig::standard());
        assert_eq!(scores, PolarityScores::new(0.0, 0.0, 1.0, 0.0));
    }

    #[test]
    fn test_zero_sum_takes_amplifier_as_negative() {
        // "Hello there!": no sentiment words, one bang
        let scores = aggregate(&[0.0, 0.0], 0.292, &HeuristicConfig::standard());
        assert_eq!(scores.compound(), -0.08);

        let scores = aggregate(&[0.0, 0.0], 0.0, &HeuristicConfig::standard());
        assert_eq!(scores.compound(), 0.0);
    }

    #[test]
    fn test_normalize_bounds() {
        assert_eq!(normalize(0.0, 15.0), 0.0);
        assert!(normalize(1e9, 15.0) <= 1.0);
        assert!(normalize(-1e9, 15.0) >= -1.0);
        assert!(normalize(3.0, 15.0) > normalize(2.0, 15.0));
    }

    #[test]
    fn test_contrast_but_index_contract() {
        let doc = document("a b c but d e f");
        let mut valences = vec![1.0; 7];
        contrast_but(&doc, &mut valences, &HeuristicConfig::standard());
        assert_eq!(valences, [0.5, 0.5, 1.0, 1.0, 1.5, 1.5, 1.0]);
    }

    #[test]
    fn test_contrast_but_first_occurrence_only() {
        let doc = document("x but y but z w");
        let mut valences = vec![2.0; 6];
        contrast_but(&doc, &mut valences, &HeuristicConfig::standard());
        assert_eq!(valences, [2.0, 2.0, 3.0, 3.0, 3.0, 2.0]);
    }

    #[test]
    fn test_contrast_but_absent_is_noop() {
        let doc = document("a b c");
        let mut valences = vec![1.0, -1.0, 2.0];
        contrast_but(&doc, &mut valences, &HeuristicConfig::standard());
        assert_eq!(valences, [1.0, -1.0, 2.0]);
    }

    #[test]
    fn test_contrast_but_at_start() {
        let doc = document("But it was fine");
        let mut valences = vec![0.0, 0.0, 0.0, 0.8];
        contrast_but(&doc, &mut valences, &HeuristicConfig::standard());
        assert_eq!(valences, [0.0, 0.0, 0.0, 0.8]);
    }
}
