//! Per-token contextual valence.
//!
//! A word's base valence comes from the lexicon and is then adjusted by the
//! three tokens before it: negations, boosters, shouting, fixed idioms and
//! the "at least" qualifier.

use crate::config::HeuristicConfig;
use crate::document::{Document, Token};
use crate::lexicon::Lexicon;

/// Modifiers are looked for at most this many tokens back.
const WINDOW: usize = 3;

/// Computes the valence of every token of a [`Document`].
#[derive(Debug, Clone, Copy)]
pub struct ValenceEngine<'a> {
    lexicon: &'a Lexicon,
    config: &'a HeuristicConfig,
}

impl<'a> ValenceEngine<'a> {
    pub fn new(lexicon: &'a Lexicon, config: &'a HeuristicConfig) -> Self {
        ValenceEngine { lexicon, config }
    }

    /// Valence of every token, in token order.
    ///
    /// Booster words and the "kind" of "kind of" are modifiers rather than
    /// content and always score zero.
    pub fn valences(&self, document: &Document) -> Vec<f64> {
        let words = document.words();
        (0..words.len())
            .map(|i| {
                if self.is_modifier(&words, i) {
                    0.0
                } else {
                    self.valence_at(document, &words, i)
                }
            })
            .collect()
    }

    /// Contextual valence of the token at `index`, without the modifier skip
    /// applied by [`valences`](Self::valences).
    pub fn token_valence(&self, document: &Document, index: usize) -> f64 {
        let words = document.words();
        if index >= words.len() {
            return 0.0;
        }
        self.valence_at(document, &words, index)
    }

    fn is_modifier(&self, words: &[&str], i: usize) -> bool {
        self.lexicon.is_booster(words[i])
            || (words[i] == "kind" && words.get(i + 1) == Some(&"of"))
    }

    fn valence_at(&self, document: &Document, words: &[&str], i: usize) -> f64 {
        let word = words[i];
        let mut valence = self.lexicon.valence(word);
        if valence == 0.0 {
            return 0.0;
        }

        // "no" in front of a sentiment word only negates it
        if word == "no"
            && words
                .get(i + 1)
                .map_or(false, |next| self.lexicon.contains(next))
        {
            valence = 0.0;
        }

        let no_at = |distance: usize| i >= distance && words[i - distance] == "no";
        if no_at(1) || no_at(2) || (no_at(3) && matches!(words[i - 1], "nor" | "or")) {
            valence *= self.config.negation_scalar;
        }

        let tokens = document.tokens();
        let mixed_caps = document.has_mixed_caps();
        if mixed_caps && tokens[i].is_shouting() {
            valence = emphasize(valence, self.config.caps_increment);
        }

        for distance in 1..=WINDOW {
            if i < distance {
                break;
            }
            let prior = i - distance;
            if self.lexicon.contains(words[prior]) {
                continue;
            }

            let decay = 1.0 - self.config.booster_distance_decay * (distance - 1) as f64;
            valence += self.scalar_boost(&tokens[prior], valence, mixed_caps) * decay;
            valence = self.negation_check(valence, words, i, distance);
            if distance == WINDOW {
                valence = self.idiom_check(valence, words, i);
            }
        }

        valence = self.least_check(valence, words, i);

        tracing::trace!(index = i, word, valence, "token valence");
        valence
    }

    /// Boost contributed by `modifier` to a word of the given valence.
    fn scalar_boost(&self, modifier: &Token, valence: f64, mixed_caps: bool) -> f64 {
        let booster = match self.lexicon.booster(modifier.lower()) {
            Some(booster) => booster,
            None => return 0.0,
        };

        let mut scalar = self.config.booster_increment * booster.sign();
        if valence < 0.0 {
            scalar = -scalar;
        }
        if mixed_caps && modifier.is_shouting() {
            scalar += if valence > 0.0 {
                self.config.caps_increment
            } else {
                -self.config.caps_increment
            };
        }
        scalar
    }

    /// Negation by the word `distance` tokens before `i`.
    fn negation_check(&self, valence: f64, words: &[&str], i: usize, distance: usize) -> f64 {
        let negator = words[i - distance];
        let between = &words[i - distance + 1..i];

        if distance > 1
            && negator == "never"
            && between.iter().any(|w| matches!(*w, "so" | "this"))
        {
            // "never so good" intensifies instead of negating
            valence * self.config.never_intensifier
        } else if distance > 1 && negator == "without" && between.contains(&"doubt") {
            valence
        } else if self.lexicon.is_negation(negator) {
            valence * self.config.negation_scalar
        } else {
            valence
        }
    }

    /// Override the valence when the window around `i` contains an idiom,
    /// then add every booster among the three preceding tokens.
    ///
    /// The boosters are added whether or not an idiom matched, on top of the
    /// distance-scaled boosts already applied.
    fn idiom_check(&self, valence: f64, words: &[&str], i: usize) -> f64 {
        let start = i - WINDOW;
        let end = (i + WINDOW).min(words.len());
        let context = words[start..end].join(" ");

        let valence = match self.lexicon.idiom_in(&context) {
            Some(idiom) => {
                tracing::trace!(index = i, idiom = %idiom.phrase, "idiom override");
                idiom.valence
            }
            None => valence,
        };

        let boosts: f64 = words[start..i]
            .iter()
            .filter_map(|w| self.lexicon.booster(w))
            .map(|booster| booster.sign() * self.config.booster_increment)
            .sum();
        valence + boosts
    }

    /// A word right after "least" is negated, including "at least" and
    /// "very least".
    fn least_check(&self, valence: f64, words: &[&str], i: usize) -> f64 {
        if i > 0 && words[i - 1] == "least" {
            valence * self.config.negation_scalar
        } else {
            valence
        }
    }
}

/// Push a valence further from zero. Zero counts as negative.
fn emphasize(valence: f64, amount: f64) -> f64 {
    if valence > 0.0 {
        valence + amount
    } else {
        valence - amount
    }
}
