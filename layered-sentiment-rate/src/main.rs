//! Rate the sentiment of text given on the command line or standard input.
//!
//! Usage:
//!   sentiment-rate [OPTIONS] [TEXT]...
//!
//! Examples:
//!   echo "The book was good." | sentiment-rate
//!   sentiment-rate --explain "Today SUX!"
//!   sentiment-rate --demo --json

mod demo;

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use layered_sentiment::{
    Breakdown, HeuristicConfig, Lexicon, PolarityScores, SentimentAnalyzer, SentimentResult,
    ValenceDisplay,
};
use serde::Serialize;
use tracing::{debug, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sentiment-rate")]
#[command(about = "Score the sentiment of short, informal text")]
#[command(version)]
struct Args {
    /// Text to score (read from standard input when omitted)
    text: Vec<String>,

    /// Score the built-in example sentences instead
    #[arg(long, conflicts_with = "text")]
    demo: bool,

    /// Print one JSON object per scored text
    #[arg(long)]
    json: bool,

    /// Show the valence of every sentiment-bearing token
    #[arg(long)]
    explain: bool,

    /// Extra valence table merged over the bundled one (token<TAB>valence)
    #[arg(long)]
    lexicon: Option<PathBuf>,

    /// Heuristic constants (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

#[derive(Serialize)]
struct Rating<'a> {
    text: &'a str,
    scores: PolarityScores,
    #[serde(skip_serializing_if = "Option::is_none")]
    valences: Option<Vec<TokenValence<'a>>>,
}

#[derive(Serialize)]
struct TokenValence<'a> {
    token: &'a str,
    valence: f64,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!(
            "layered_sentiment={level},sentiment_rate={level}",
            level = level.as_str().to_lowercase()
        )))
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    debug!("sentiment-rate v{} starting", env!("CARGO_PKG_VERSION"));

    let (custom_lexicon, config) =
        load_resources(&args).context("loading scoring resources")?;
    let analyzer = SentimentAnalyzer::with_lexicon(active_lexicon(&custom_lexicon))
        .with_config(config);

    let texts: Vec<String> = if args.demo {
        demo::SENTENCES.iter().map(|s| s.to_string()).collect()
    } else if !args.text.is_empty() {
        vec![args.text.join(" ")]
    } else {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("reading standard input")?;
        vec![input]
    };

    for text in &texts {
        let breakdown = analyzer.breakdown(text);
        println!("{}", render(text, &breakdown, &args)?);
    }

    Ok(())
}

/// The lexicon override and tuning named on the command line.
fn load_resources(args: &Args) -> SentimentResult<(Option<Lexicon>, HeuristicConfig)> {
    let lexicon = match &args.lexicon {
        Some(path) => {
            debug!(path = %path.display(), "merging valence table");
            Some(Lexicon::bundled().to_builder().with_valences_file(path)?.build())
        }
        None => None,
    };

    let config = match &args.config {
        Some(path) => HeuristicConfig::from_toml_file(path)?,
        None => HeuristicConfig::standard(),
    };

    Ok((lexicon, config))
}

/// The merged lexicon when one was loaded, the bundled one otherwise.
fn active_lexicon(custom: &Option<Lexicon>) -> &Lexicon {
    match custom {
        Some(lexicon) => lexicon,
        None => Lexicon::bundled(),
    }
}

fn render(text: &str, breakdown: &Breakdown, args: &Args) -> Result<String> {
    if args.json {
        let valences = args.explain.then(|| {
            breakdown
                .document
                .tokens()
                .iter()
                .zip(&breakdown.contrasted)
                .map(|(token, &valence)| TokenValence {
                    token: token.text(),
                    valence,
                })
                .collect::<Vec<_>>()
        });
        let rating = Rating {
            text,
            scores: breakdown.scores,
            valences,
        };
        return serde_json::to_string(&rating).context("serializing rating");
    }

    let mut out = String::new();
    if args.demo {
        out.push_str(text);
        out.push('\n');
    }
    if args.explain {
        out.push_str(&ValenceDisplay::new(breakdown).with_unscaled().to_string());
        out.push('\n');
    }
    out.push_str(&breakdown.scores.to_string());
    Ok(out)
}
