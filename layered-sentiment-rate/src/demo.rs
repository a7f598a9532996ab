/// Sentences exercising each scoring heuristic.
pub const SENTENCES: &[&str] = &[
    // positive sentence
    "VADER is smart, handsome, and funny.",
    // punctuation emphasis
    "VADER is smart, handsome, and funny!",
    // booster words
    "VADER is very smart, handsome, and funny.",
    // emphasis for ALLCAPS
    "VADER is VERY SMART, handsome, and FUNNY.",
    "VADER is VERY SMART, handsome, and FUNNY!!!",
    // combination of signals, close to the ceiling
    "VADER is VERY SMART, uber handsome, and FRIGGIN FUNNY!!!",
    // negation
    "VADER is not smart, handsome, nor funny.",
    "The book was good.",
    // negated negative with contraction
    "At least it isn't a horrible book.",
    // qualified positive
    "The book was only kind of good.",
    // mixed, with contrastive "but"
    "The plot was good, but the characters are uncompelling and the dialog is not great.",
    // slang with capitalization emphasis
    "Today SUX!",
    "Today only kinda sux! But I'll get by, lol",
    // emoticons
    "Make sure you :) or :D today!",
    // emoji
    "Catch utf-8 emoji such as 💘 and 💋 and 😁",
    "Not bad at all",
];
