use crate::{score, PolarityScores, Sentiment};

fn compound(text: &str) -> f64 {
    score(text).compound()
}

// ============ Emphasis ============

#[test]
fn punctuation_emphasis() {
    let calm = compound("VADER is smart, handsome, and funny.");
    let loud = compound("VADER is smart, handsome, and funny!");
    assert!(calm > 0.0);
    assert!(loud > calm, "{} <= {}", loud, calm);
}

#[test]
fn booster_words() {
    let plain = compound("VADER is smart, handsome, and funny.");
    let boosted = compound("VADER is very smart, handsome, and funny.");
    assert!(boosted > plain, "{} <= {}", boosted, plain);
}

#[test]
fn capitalized_emphasis() {
    let plain = compound("VADER is smart, handsome, and funny.");
    let shouted = compound("VADER is VERY SMART, handsome, and FUNNY.");
    let shouted_loud = compound("VADER is VERY SMART, handsome, and FUNNY!!!");
    assert!(shouted > plain, "{} <= {}", shouted, plain);
    assert!(shouted_loud > shouted, "{} <= {}", shouted_loud, shouted);
}

#[test]
fn combined_signals_approach_ceiling() {
    let scores = score("VADER is VERY SMART, uber handsome, and FRIGGIN FUNNY!!!");
    assert!(scores.compound() > 0.9);
    assert!(scores.compound() <= 1.0);
}

// ============ Negation and qualifiers ============

#[test]
fn negated_sentence() {
    let scores = score("VADER is not smart, handsome, nor funny.");
    assert!(scores.compound() < 0.0);
    assert_eq!(scores.sentiment(), Sentiment::Negative);
}

#[test]
fn plain_positive_sentence() {
    assert_eq!(
        score("The book was good."),
        PolarityScores::new(0.49, 0.0, 0.51, 0.44)
    );
}

#[test]
fn negated_negative_with_contraction() {
    let scores = score("At least it isn't a horrible book.");
    assert_eq!(scores.compound(), 0.43);
    assert_eq!(scores.positive(), 0.32);
    assert_eq!(scores.neutral(), 0.68);
}

#[test]
fn qualified_positive_sentence() {
    let qualified = compound("The book was only kind of good.");
    let plain = compound("The book was good.");
    assert!(qualified > 0.0);
    assert!(qualified <= plain);
}

#[test]
fn not_bad_at_all() {
    assert_eq!(score("Not bad at all").sentiment(), Sentiment::Positive);
}

// ============ Contrast, slang and symbols ============

#[test]
fn mixed_sentence_with_but() {
    let text = "The plot was good, but the characters are uncompelling and the dialog is not great.";
    assert!(compound(text) < 0.0);
}

#[test]
fn shouted_slang() {
    assert!(compound("Today SUX!") < compound("Today sux!"));
    assert!(compound("Today sux!") < 0.0);
}

#[test]
fn slang_with_contrast() {
    assert!(compound("Today only kinda sux! But I'll get by, lol") > 0.0);
}

#[test]
fn emoticons_are_trimmed_to_neutral_tokens() {
    let with_emoticons = score("Make sure you :) or :D today!");
    let without = score("Make sure you or today!");
    assert_eq!(with_emoticons.compound(), without.compound());
    assert!(with_emoticons.neutral() > without.neutral());
}

#[test]
fn emoji() {
    let scores = score("Catch utf-8 emoji such as 💘 and 💋 and 😁");
    assert_eq!(scores.sentiment(), Sentiment::Positive);
}
