//! The result of scoring a text.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Compound scores at or beyond this magnitude count as polar.
const POLARITY_THRESHOLD: f64 = 0.05;

/// Overall label derived from the compound score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

/// Proportions of positive, negative and neutral content plus a normalized
/// compound score.
///
/// `positive`, `negative` and `neutral` lie in `[0, 1]` and sum to one
/// (within rounding); `compound` lies in `[-1, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PolarityScores {
    positive: f64,
    negative: f64,
    neutral: f64,
    compound: f64,
}

impl PolarityScores {
    pub fn new(positive: f64, negative: f64, neutral: f64, compound: f64) -> Self {
        PolarityScores {
            positive,
            negative,
            neutral,
            compound,
        }
    }

    pub fn positive(&self) -> f64 {
        self.positive
    }

    pub fn negative(&self) -> f64 {
        self.negative
    }

    pub fn neutral(&self) -> f64 {
        self.neutral
    }

    pub fn compound(&self) -> f64 {
        self.compound
    }

    /// A copy with every field rounded to `places` decimal places.
    pub fn rounded(&self, places: i32) -> Self {
        PolarityScores {
            positive: round_to(self.positive, places),
            negative: round_to(self.negative, places),
            neutral: round_to(self.neutral, places),
            compound: round_to(self.compound, places),
        }
    }

    /// Classify with the conventional ±0.05 compound thresholds.
    pub fn sentiment(&self) -> Sentiment {
        if self.compound >= POLARITY_THRESHOLD {
            Sentiment::Positive
        } else if self.compound <= -POLARITY_THRESHOLD {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

impl fmt::Display for PolarityScores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{Positive:{} Negative:{} Neutral:{} Compound:{}}}",
            self.positive, self.negative, self.neutral, self.compound
        )
    }
}

/// Round half away from zero. Never returns negative zero.
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor + 0.0
}
