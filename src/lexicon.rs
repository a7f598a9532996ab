//! Lexical resources: word valences, negations, boosters, idioms and emoji.
//!
//! A [`Lexicon`] is immutable once built. The bundled tables are parsed once
//! on first use and shared by every analyzer in the process.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;

use crate::errors::LexiconError;

const VADER_LEXICON: &str = include_str!("../data/vader_lexicon.txt");
const EMOJI_LEXICON: &str = include_str!("../data/emoji_utf8_lexicon.txt");

/// Words and contractions that negate a following sentiment word.
const NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "ain't", "aren't",
    "can't", "couldn't", "daren't", "didn't", "doesn't", "dont", "hadnt", "hasnt", "havent",
    "isnt", "mightnt", "mustnt", "neither", "don't", "hadn't", "hasn't", "haven't", "isn't",
    "mightn't", "mustn't", "neednt", "needn't", "never", "none", "nope", "nor", "not", "nothing",
    "nowhere", "oughtnt", "shant", "shouldnt", "uhuh", "wasnt", "werent", "oughtn't", "shan't",
    "shouldn't", "uh-uh", "wasn't", "weren't", "without", "wont", "wouldnt", "won't", "wouldn't",
    "rarely", "seldom", "despite",
];

/// Booster words that amplify the word they modify.
const INTENSIFIERS: &[&str] = &[
    "absolutely", "amazingly", "awfully", "completely", "considerably", "decidedly", "deeply",
    "effing", "enormously", "entirely", "especially", "exceptionally", "extremely", "fabulously",
    "flipping", "flippin", "fricking", "frickin", "frigging", "friggin", "fully", "fucking",
    "fuckin", "greatly", "hella", "highly", "hugely", "incredibly", "intensely", "majorly", "more",
    "most", "particularly", "purely", "quite", "really", "remarkably", "so", "substantially",
    "thoroughly", "totally", "tremendously", "uber", "unbelievably", "unusually", "utterly",
    "very",
];

/// Booster words that dampen the word they modify.
///
/// The two-word entries never match a single token and are kept only so the
/// table stays identical to the published word list.
const DAMPENERS: &[&str] = &[
    "almost", "barely", "hardly", "just enough", "kind of", "kinda", "kindof", "kind-of", "less",
    "little", "marginally", "occasionally", "partly", "scarcely", "slightly", "somewhat",
    "sort of", "sorta", "sortof", "sort-of",
];

/// Fixed phrases whose valence overrides the words they are made of.
const IDIOMS: &[(&str, f64)] = &[
    ("the shit", 3.0),
    ("the bomb", 3.0),
    ("bad ass", 1.5),
    ("yeah right", -2.0),
    ("kiss of death", -1.5),
];

static BUNDLED: Lazy<Lexicon> = Lazy::new(|| {
    let (valences, valence_errors) = parse_valences(VADER_LEXICON);
    let (emoji, emoji_errors) = parse_emoji(EMOJI_LEXICON);
    for err in valence_errors.iter().chain(&emoji_errors) {
        tracing::warn!(%err, "skipping malformed bundled lexicon line");
    }

    let lexicon = LexiconBuilder::new()
        .with_valences(valences)
        .with_emoji(emoji)
        .build();
    tracing::debug!(
        words = lexicon.valences.len(),
        emoji = lexicon.emoji.len(),
        "loaded bundled lexicon"
    );
    lexicon
});

/// An immutable set of lowercase words with constant time membership.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSet(HashSet<String>);

impl WordSet {
    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        WordSet(words.into_iter().map(str::to_string).collect())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.0.contains(word)
    }

    /// True if any of `words` is a member.
    pub fn contains_any<'a>(&self, words: impl IntoIterator<Item = &'a str>) -> bool {
        words.into_iter().any(|word| self.contains(word))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Which way a booster word pushes the word it modifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Booster {
    Intensifier,
    Dampener,
}

impl Booster {
    /// `+1.0` for intensifiers, `-1.0` for dampeners.
    pub fn sign(self) -> f64 {
        match self {
            Booster::Intensifier => 1.0,
            Booster::Dampener => -1.0,
        }
    }
}

/// A multi-word phrase with a fixed valence.
#[derive(Debug, Clone, PartialEq)]
pub struct Idiom {
    pub phrase: String,
    pub valence: f64,
}

/// The complete set of lexical resources used for scoring.
#[derive(Debug, Clone)]
pub struct Lexicon {
    valences: HashMap<String, f64>,
    negations: WordSet,
    intensifiers: WordSet,
    dampeners: WordSet,
    /// Ordered by match priority: longest phrase first, then alphabetical.
    idioms: Vec<Idiom>,
    emoji: HashMap<char, String>,
}

impl Lexicon {
    /// The tables bundled with the crate.
    pub fn bundled() -> &'static Lexicon {
        &BUNDLED
    }

    /// A builder seeded with the standard word lists and empty valence and
    /// emoji tables.
    pub fn builder() -> LexiconBuilder {
        LexiconBuilder::new()
    }

    /// A builder seeded with every table of this lexicon.
    pub fn to_builder(&self) -> LexiconBuilder {
        LexiconBuilder {
            valences: self.valences.clone(),
            negations: self.negations.clone(),
            intensifiers: self.intensifiers.clone(),
            dampeners: self.dampeners.clone(),
            idioms: self.idioms.clone(),
            emoji: self.emoji.clone(),
        }
    }

    /// Base valence of a lowercase word, `0.0` when the word is unknown.
    pub fn valence(&self, word: &str) -> f64 {
        self.valences.get(word).copied().unwrap_or(0.0)
    }

    /// Whether the lowercase word has an entry in the valence table.
    pub fn contains(&self, word: &str) -> bool {
        self.valences.contains_key(word)
    }

    /// Number of entries in the valence table.
    pub fn len(&self) -> usize {
        self.valences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.valences.is_empty()
    }

    pub fn booster(&self, word: &str) -> Option<Booster> {
        if self.intensifiers.contains(word) {
            Some(Booster::Intensifier)
        } else if self.dampeners.contains(word) {
            Some(Booster::Dampener)
        } else {
            None
        }
    }

    pub fn is_booster(&self, word: &str) -> bool {
        self.booster(word).is_some()
    }

    /// Whether a word negates what follows. Any word containing "n't" does.
    pub fn is_negation(&self, word: &str) -> bool {
        let lower = word.to_lowercase();
        self.negations.contains(&lower) || lower.contains("n't")
    }

    /// The highest priority idiom contained in `context`.
    ///
    /// When several idioms occur, the longest phrase wins; equal lengths are
    /// decided alphabetically.
    pub fn idiom_in(&self, context: &str) -> Option<&Idiom> {
        self.idioms
            .iter()
            .find(|idiom| context.contains(idiom.phrase.as_str()))
    }

    pub fn idioms(&self) -> &[Idiom] {
        &self.idioms
    }

    /// Textual description substituted for an emoji character.
    pub fn emoji_description(&self, c: char) -> Option<&str> {
        self.emoji.get(&c).map(String::as_str)
    }
}

/// Assembles a [`Lexicon`] from bundled or caller supplied tables.
///
/// ```
/// use layered_sentiment::Lexicon;
///
/// let lexicon = Lexicon::bundled()
///     .to_builder()
///     .with_valences_str("meh\t-0.5\n")
///     .unwrap()
///     .build();
/// assert_eq!(lexicon.valence("meh"), -0.5);
/// ```
#[derive(Debug, Clone)]
pub struct LexiconBuilder {
    valences: HashMap<String, f64>,
    negations: WordSet,
    intensifiers: WordSet,
    dampeners: WordSet,
    idioms: Vec<Idiom>,
    emoji: HashMap<char, String>,
}

impl LexiconBuilder {
    pub fn new() -> Self {
        Self {
            valences: HashMap::new(),
            negations: WordSet::from_words(NEGATIONS.iter().copied()),
            intensifiers: WordSet::from_words(INTENSIFIERS.iter().copied()),
            dampeners: WordSet::from_words(DAMPENERS.iter().copied()),
            idioms: IDIOMS
                .iter()
                .map(|&(phrase, valence)| Idiom {
                    phrase: phrase.to_string(),
                    valence,
                })
                .collect(),
            emoji: HashMap::new(),
        }
    }

    /// Add or replace valences from `token<TAB>mean[<TAB>...]` lines.
    pub fn with_valences_str(self, source: &str) -> Result<Self, LexiconError> {
        let (entries, errors) = parse_valences(source);
        match errors.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(self.with_valences(entries)),
        }
    }

    pub fn with_valences_file(self, path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let source = read_table_file(path.as_ref())?;
        self.with_valences_str(&source)
    }

    /// Add or replace emoji descriptions from `emoji<TAB>description` lines.
    pub fn with_emoji_str(self, source: &str) -> Result<Self, LexiconError> {
        let (entries, errors) = parse_emoji(source);
        match errors.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(self.with_emoji(entries)),
        }
    }

    pub fn with_emoji_file(self, path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let source = read_table_file(path.as_ref())?;
        self.with_emoji_str(&source)
    }

    pub fn with_valence(mut self, word: &str, valence: f64) -> Self {
        self.valences.insert(word.to_lowercase(), valence);
        self
    }

    pub fn with_idiom(mut self, phrase: &str, valence: f64) -> Self {
        let phrase = phrase.to_lowercase();
        self.idioms.retain(|idiom| idiom.phrase != phrase);
        self.idioms.push(Idiom { phrase, valence });
        self
    }

    fn with_valences(mut self, entries: Vec<(String, f64)>) -> Self {
        self.valences.extend(entries);
        self
    }

    fn with_emoji(mut self, entries: Vec<(char, String)>) -> Self {
        self.emoji.extend(entries);
        self
    }

    pub fn build(mut self) -> Lexicon {
        self.idioms.sort_by(|a, b| {
            b.phrase
                .len()
                .cmp(&a.phrase.len())
                .then_with(|| a.phrase.cmp(&b.phrase))
        });

        Lexicon {
            valences: self.valences,
            negations: self.negations,
            intensifiers: self.intensifiers,
            dampeners: self.dampeners,
            idioms: self.idioms,
            emoji: self.emoji,
        }
    }
}

impl Default for LexiconBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn read_table_file(path: &Path) -> Result<String, LexiconError> {
    fs::read_to_string(path).map_err(|e| LexiconError::Load {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Parse every non-blank line, keeping good entries and collecting errors.
fn parse_lines<T>(
    table: &'static str,
    source: &str,
    parse_line: impl Fn(&str) -> Result<Option<T>, String>,
) -> (Vec<T>, Vec<LexiconError>) {
    let mut entries = Vec::new();
    let mut errors = Vec::new();

    for (idx, line) in source.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line) {
            Ok(Some(entry)) => entries.push(entry),
            Ok(None) => {}
            Err(message) => errors.push(LexiconError::Parse {
                table,
                line: idx + 1,
                message,
            }),
        }
    }

    (entries, errors)
}

fn parse_valences(source: &str) -> (Vec<(String, f64)>, Vec<LexiconError>) {
    parse_lines("valence table", source, |line| {
        let mut columns = line.split('\t');
        let token = columns.next().unwrap_or_default().trim();
        if token.is_empty() {
            return Err("missing token".to_string());
        }
        let mean = columns
            .next()
            .ok_or_else(|| format!("missing valence for {:?}", token))?;
        let valence: f64 = mean
            .trim()
            .parse()
            .map_err(|e| format!("bad valence {:?} for {:?}: {}", mean, token, e))?;
        Ok(Some((token.to_lowercase(), valence)))
    })
}

fn parse_emoji(source: &str) -> (Vec<(char, String)>, Vec<LexiconError>) {
    parse_lines("emoji table", source, |line| {
        let (key, description) = line
            .split_once('\t')
            .ok_or_else(|| format!("missing description in {:?}", line))?;
        let description = description.trim();
        if description.is_empty() {
            return Err(format!("empty description for {:?}", key));
        }

        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Some((c, description.to_string()))),
            (None, _) => Err("missing emoji".to_string()),
            // sequences never match a character-by-character scan
            (Some(_), Some(_)) => {
                tracing::trace!(key, "skipping multi-character emoji entry");
                Ok(None)
            }
        }
    })
}
