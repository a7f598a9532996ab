//! Heuristic constants.
//!
//! Every number the scoring pipeline uses lives here so that alternative
//! tunings can be loaded from TOML. [`HeuristicConfig::default`] holds the
//! standard values.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::errors::ConfigError;

/// Numeric constants used by the normalizer, valence engine and aggregator.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeuristicConfig {
    /// Added (or subtracted) by an intensifier (or dampener) before a word.
    pub booster_increment: f64,
    /// Emphasis added to a shouted word when the text mixes cases.
    pub caps_increment: f64,
    /// Multiplier applied to a negated valence.
    pub negation_scalar: f64,
    /// Multiplier for "never so ..." / "never this ..." constructions.
    pub never_intensifier: f64,
    /// Fraction of a booster lost per extra token of distance.
    pub booster_distance_decay: f64,
    pub exclamation_increment: f64,
    pub max_exclamations: usize,
    pub question_increment: f64,
    /// Question marks above this count contribute `max_question_increment`.
    pub max_question_marks: usize,
    pub max_question_increment: f64,
    /// `x / sqrt(x^2 + alpha)` normalization constant for the compound score.
    pub normalization_alpha: f64,
    /// Scale applied to valences before a contrastive "but".
    pub but_before_scale: f64,
    /// Scale applied to valences after a contrastive "but".
    pub but_after_scale: f64,
}

impl HeuristicConfig {
    /// The standard tuning.
    pub fn standard() -> Self {
        Self {
            booster_increment: 0.293,
            caps_increment: 0.733,
            negation_scalar: -0.740,
            never_intensifier: 1.25,
            booster_distance_decay: 0.05,
            exclamation_increment: 0.292,
            max_exclamations: 4,
            question_increment: 0.180,
            max_question_marks: 3,
            max_question_increment: 0.96,
            normalization_alpha: 15.0,
            but_before_scale: 0.5,
            but_after_scale: 1.5,
        }
    }

    /// Parse a TOML document. Missing fields keep their standard value.
    ///
    /// ```
    /// use layered_sentiment::HeuristicConfig;
    ///
    /// let config = HeuristicConfig::from_toml_str("caps_increment = 1.0").unwrap();
    /// assert_eq!(config.caps_increment, 1.0);
    /// assert_eq!(config.negation_scalar, -0.740);
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| ConfigError::Load {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&source)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.normalization_alpha > 0.0) {
            return Err(ConfigError::Invalid {
                field: "normalization_alpha",
                message: format!("must be positive, got {}", self.normalization_alpha),
            });
        }
        if !(0.0..=1.0).contains(&self.booster_distance_decay) {
            return Err(ConfigError::Invalid {
                field: "booster_distance_decay",
                message: format!("must be within 0..=1, got {}", self.booster_distance_decay),
            });
        }
        Ok(())
    }
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_standard() {
        let config = HeuristicConfig::from_toml_str("").unwrap();
        assert_eq!(config, HeuristicConfig::standard());
    }

    #[test]
    fn test_partial_override() {
        let config = HeuristicConfig::from_toml_str(
            r#"
            max_exclamations = 2
            but_after_scale = 2.0
            "#,
        )
        .unwrap();

        assert_eq!(config.max_exclamations, 2);
        assert_eq!(config.but_after_scale, 2.0);
        assert_eq!(config.booster_increment, 0.293);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = HeuristicConfig::from_toml_str("shouting = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_invalid_alpha_rejected() {
        let err = HeuristicConfig::from_toml_str("normalization_alpha = 0.0").unwrap_err();
        assert!(err.to_string().contains("normalization_alpha"));
    }

    #[test]
    fn test_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tuning.toml");
        std::fs::write(&path, "negation_scalar = -0.5\n").unwrap();

        let config = HeuristicConfig::from_toml_file(&path).unwrap();
        assert_eq!(config.negation_scalar, -0.5);

        let err = HeuristicConfig::from_toml_file(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Load { .. }));
    }
}
