//! Error types for loading lexical resources and heuristic configuration.
//!
//! Scoring itself never fails; these errors only surface when callers
//! supply their own tables or configuration.

use thiserror::Error;

/// Errors raised while reading a valence or emoji table.
#[derive(Debug, Error)]
pub enum LexiconError {
    /// A line of a table could not be parsed.
    #[error("{table} line {line}: {message}")]
    Parse {
        table: &'static str,
        line: usize,
        message: String,
    },

    /// A table file could not be read.
    #[error("failed to load lexicon: {path}: {message}")]
    Load { path: String, message: String },
}

/// Errors raised while reading a heuristic configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The TOML document is malformed or has wrongly typed fields.
    #[error("invalid heuristic config: {0}")]
    Toml(#[from] toml::de::Error),

    /// A configuration file could not be read.
    #[error("failed to load heuristic config: {path}: {message}")]
    Load { path: String, message: String },

    /// A field parsed but its value cannot be used.
    #[error("invalid heuristic config: {field}: {message}")]
    Invalid { field: &'static str, message: String },
}

/// Any error the crate can report.
#[derive(Debug, Error)]
pub enum SentimentError {
    #[error(transparent)]
    Lexicon(#[from] LexiconError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for resource loading.
pub type SentimentResult<T> = Result<T, SentimentError>;
