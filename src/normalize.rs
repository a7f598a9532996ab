//! Text normalization: diacritics, emoji, tokens and punctuation emphasis.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

use crate::config::HeuristicConfig;
use crate::document::{Document, Token};
use crate::lexicon::Lexicon;

/// Build a [`Document`] from raw text.
///
/// Diacritics are folded first, then emoji are replaced by their
/// descriptions (appended after the text), punctuation emphasis is measured
/// and finally the text is split into tokens.
pub fn normalize(text: &str, lexicon: &Lexicon, config: &HeuristicConfig) -> Document {
    let text = substitute_emoji(&strip_diacritics(text), lexicon);
    let amplifier = punctuation_amplifier(&text, config);
    let document = Document::new(tokenize(&text), amplifier);

    tracing::debug!(
        tokens = document.len(),
        mixed_caps = document.has_mixed_caps(),
        punctuation_amplifier = amplifier,
        "normalized document"
    );
    document
}

/// Fold accented letters to their base form: `"café"` becomes `"cafe"`.
pub fn strip_diacritics(text: &str) -> String {
    text.nfd().filter(|&c| !is_combining_mark(c)).nfc().collect()
}

/// Move every known emoji out of the text and append its description.
///
/// Descriptions keep the order the emoji were found in.
pub fn substitute_emoji(text: &str, lexicon: &Lexicon) -> String {
    let mut body = String::with_capacity(text.len());
    let mut descriptions = String::new();

    for c in text.chars() {
        match lexicon.emoji_description(c) {
            Some(description) => {
                descriptions.push(' ');
                descriptions.push_str(description);
            }
            None => body.push(c),
        }
    }

    body.push_str(&descriptions);
    body
}

/// Split on whitespace and trim surrounding ASCII punctuation.
///
/// Single-character pieces are kept as they are. Longer pieces lose their
/// outer punctuation, so an emoticon like `":)"` becomes an empty token.
/// Interior punctuation such as the apostrophe in `"isn't"` is never touched.
pub fn tokenize(text: &str) -> Vec<Token> {
    text.split_whitespace()
        .map(|piece| {
            if piece.graphemes(true).nth(1).is_none() {
                Token::new(piece)
            } else {
                Token::new(piece.trim_matches(|c: char| c.is_ascii_punctuation()))
            }
        })
        .collect()
}

/// Emphasis added by exclamation and question marks.
pub fn punctuation_amplifier(text: &str, config: &HeuristicConfig) -> f64 {
    let bangs = text.matches('!').count().min(config.max_exclamations);
    let questions = text.matches('?').count();

    let question_emphasis = if questions > config.max_question_marks {
        config.max_question_increment
    } else {
        config.question_increment * questions as f64
    };

    config.exclamation_increment * bangs as f64 + question_emphasis
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        tokenize(text)
            .iter()
            .map(|token| token.text().to_string())
            .collect()
    }

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_strip_diacritics() {
        assert_eq!(strip_diacritics("café naïve Ångström"), "cafe naive Angstrom");
        assert_eq!(strip_diacritics("plain text"), "plain text");
    }

    #[test]
    fn test_emoji_descriptions_appended_in_order() {
        let lexicon = Lexicon::bundled();
        assert_eq!(
            substitute_emoji("I 💘 you 💋", lexicon),
            "I  you  heart with arrow kiss mark"
        );
        assert_eq!(substitute_emoji("no emoji", lexicon), "no emoji");
    }

    #[test]
    fn test_tokenize_trims_outer_punctuation() {
        assert_eq!(
            words("VADER is smart, handsome, and funny!"),
            ["VADER", "is", "smart", "handsome", "and", "funny"]
        );
        assert_eq!(words("\"isn't\" (really)"), ["isn't", "really"]);
    }

    #[test]
    fn test_tokenize_keeps_single_characters() {
        assert_eq!(words("a ! ? ) :"), ["a", "!", "?", ")", ":"]);
    }

    #[test]
    fn test_tokenize_trims_emoticons() {
        assert_eq!(words(":) :D <3, ->"), ["", "D", "3", ""]);
        assert_eq!(words("I am happy :)"), ["I", "am", "happy", ""]);
    }

    #[test]
    fn test_tokenize_keeps_empty_positions() {
        let tokens = tokenize("good ... bad");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].text(), "");
    }

    #[test]
    fn test_punctuation_amplifier() {
        let config = HeuristicConfig::standard();
        assert!(approx_eq(punctuation_amplifier("calm.", &config), 0.0));
        assert!(approx_eq(punctuation_amplifier("wow!", &config), 0.292));
        assert!(approx_eq(punctuation_amplifier("wow!!!!!!", &config), 4.0 * 0.292));
        assert!(approx_eq(punctuation_amplifier("what??", &config), 0.36));
        assert!(approx_eq(punctuation_amplifier("what????", &config), 0.96));
        assert!(approx_eq(
            punctuation_amplifier("what?! no!", &config),
            2.0 * 0.292 + 0.18
        ));
    }

    #[test]
    fn test_normalize_builds_document() {
        let document = normalize(
            "VADER is SMART!",
            Lexicon::bundled(),
            &HeuristicConfig::standard(),
        );
        assert_eq!(document.words(), ["vader", "is", "smart"]);
        assert!(document.has_mixed_caps());
        assert!(approx_eq(document.punctuation_amplifier(), 0.292));
    }
}
