//! Tokenized text with the document-level flags the scorer needs.

use unicode_segmentation::UnicodeSegmentation;

/// A whitespace-delimited piece of normalized text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    text: String,
    lower: String,
}

impl Token {
    pub fn new(text: &str) -> Self {
        Token {
            text: text.to_string(),
            lower: text.to_lowercase(),
        }
    }

    /// The token as it appeared in the text.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn lower(&self) -> &str {
        &self.lower
    }

    /// All-caps token of more than one character, e.g. `"SMART"` or `"XD"`.
    pub fn is_shouting(&self) -> bool {
        self.text.graphemes(true).nth(1).is_some() && self.is_uppercase()
    }

    /// Whether uppercasing leaves the token unchanged. True for `"I"`, `"3"`
    /// and empty tokens as well as for shouted words.
    pub fn is_uppercase(&self) -> bool {
        self.text.to_uppercase() == self.text
    }
}

/// An immutable, ordered sequence of tokens.
///
/// Built by [`crate::normalize`]; scoring only ever reads it.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    tokens: Vec<Token>,
    has_mixed_caps: bool,
    punctuation_amplifier: f64,
}

impl Document {
    pub(crate) fn new(tokens: Vec<Token>, punctuation_amplifier: f64) -> Self {
        let has_mixed_caps = has_mixed_caps(&tokens);
        Document {
            tokens,
            has_mixed_caps,
            punctuation_amplifier,
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Lowercase forms in token order.
    pub fn words(&self) -> Vec<&str> {
        self.tokens.iter().map(Token::lower).collect()
    }

    /// True when a shouting token and a token with lowercase letters both
    /// occur.
    pub fn has_mixed_caps(&self) -> bool {
        self.has_mixed_caps
    }

    /// Emphasis contributed by `!` and `?`.
    pub fn punctuation_amplifier(&self) -> f64 {
        self.punctuation_amplifier
    }
}

fn has_mixed_caps(tokens: &[Token]) -> bool {
    let mut seen_shouting = false;
    let mut seen_calm = false;
    for token in tokens {
        if token.is_shouting() {
            seen_shouting = true;
        } else if !token.is_uppercase() {
            seen_calm = true;
        }
        if seen_shouting && seen_calm {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(words: &[&str]) -> Document {
        Document::new(words.iter().map(|w| Token::new(w)).collect(), 0.0)
    }

    #[test]
    fn test_token_forms() {
        let token = Token::new("Smart");
        assert_eq!(token.text(), "Smart");
        assert_eq!(token.lower(), "smart");
    }

    #[test]
    fn test_shouting() {
        assert!(Token::new("SMART").is_shouting());
        assert!(Token::new(":D").is_shouting());
        assert!(!Token::new("I").is_shouting());
        assert!(!Token::new("Smart").is_shouting());
        assert!(!Token::new("").is_shouting());
    }

    #[test]
    fn test_mixed_caps_either_order() {
        assert!(doc(&["VADER", "is", "smart"]).has_mixed_caps());
        assert!(doc(&["today", "SUX"]).has_mixed_caps());
    }

    #[test]
    fn test_uniform_caps_not_mixed() {
        assert!(!doc(&["SMART"]).has_mixed_caps());
        assert!(!doc(&["VERY", "SMART"]).has_mixed_caps());
        assert!(!doc(&["very", "smart"]).has_mixed_caps());
        assert!(!doc(&[]).has_mixed_caps());
    }

    #[test]
    fn test_short_and_empty_tokens_are_not_lowercase() {
        assert!(!doc(&["I", "LOVE", "IT"]).has_mixed_caps());
        assert!(!doc(&["WOW", "", "3", "SO", "GOOD"]).has_mixed_caps());
        assert!(doc(&["I", "LOVE", "it"]).has_mixed_caps());
        // a single capital letter never counts as shouting
        assert!(!doc(&["I", "love", "it"]).has_mixed_caps());
    }

    #[test]
    fn test_uppercase() {
        assert!(Token::new("I").is_uppercase());
        assert!(Token::new("").is_uppercase());
        assert!(Token::new("SMART").is_uppercase());
        assert!(!Token::new("Smart").is_uppercase());
    }
}
