//! anagram CLI - Command line interface for anagram_db
//!
//! Builds the trie artifact from a word list and answers rack lookups,
//! either one-shot or from an interactive shell.

use anagram_db::shell::{Explorer, Shell};
use anagram_db::store::read_info;
use anagram_db::{
    Config, Corpus, Dictionary, FlagFilters, PatternFilter, Query, Rack, SearchLimits,
};
use anyhow::Context;
use clap::{Parser, Subcommand};
use log::{debug, info, warn};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "anagram")]
#[command(about = "Find the words a tile rack can spell")]
#[command(version)]
struct Cli {
    /// Path to the trie artifact (overrides the config file)
    #[arg(short, long)]
    artifact: Option<PathBuf>,

    /// Path to a config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format (json or text)
    #[arg(short, long, default_value = "json")]
    format: OutputFormat,

    /// Abort a search after visiting this many trie nodes
    #[arg(long)]
    max_visits: Option<u64>,

    /// Log progress and search statistics (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,

    /// Defaults to `shell`
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the trie artifact from a word list
    Init {
        /// Word list (JSON object or array, or one word per line)
        #[arg(long)]
        corpus: Option<PathBuf>,
    },

    /// Look up the words a rack can spell
    Query {
        /// Rack letters, `_` or `?` for a blank
        letters: String,
        /// Only words starting with this
        #[arg(short, long, default_value = "")]
        prefix: String,
        /// Only words ending with this
        #[arg(short, long, default_value = "")]
        suffix: String,
        /// Only words of exactly this many letters (0 for any)
        #[arg(short, long, default_value = "0")]
        length: i64,
        /// Pattern: -xx (ends), xx- (starts), -xx- (contains), xx (other words)
        #[arg(short = 't', long, allow_hyphen_values = true)]
        pattern: Option<String>,
        /// Maximum number of words to return
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Interactive rack shell
    Shell,

    /// Walk the trie letter by letter
    Explore,

    /// Show artifact and tree statistics
    Info,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = Config::resolve(cli.config.as_deref()).context("Failed to load configuration")?;
    let artifact = cli.artifact.clone().unwrap_or_else(|| config.artifact.clone());
    let limits = SearchLimits {
        max_visits: cli.max_visits.or(config.max_visits),
    };
    debug!("artifact: {}, limits: {:?}", artifact.display(), limits);

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Init { corpus } => {
            let corpus_path = corpus.unwrap_or_else(|| config.corpus.clone());
            info!("Loading corpus from {}", corpus_path.display());
            let corpus = Corpus::load(&corpus_path)?;
            if corpus.skipped() > 0 {
                warn!("Skipped {} entries that are not plain words", corpus.skipped());
            }

            info!("Building trie from {} words...", corpus.len());
            let dict = Dictionary::initialize(&corpus);
            let saved = dict
                .save(&artifact)
                .with_context(|| format!("Failed to write {}", artifact.display()))?;
            let stats = dict.build_stats().unwrap_or_default();
            info!("Wrote {} ({} bytes)", artifact.display(), saved.payload_size);

            output(
                cli.format,
                &serde_json::json!({
                    "status": "ok",
                    "artifact": artifact.display().to_string(),
                    "words": saved.word_count,
                    "nodes": saved.node_count,
                    "duplicates": stats.duplicates,
                    "skipped": corpus.skipped(),
                    "checksum": saved.checksum.to_hex()
                }),
            )?;
        }

        Commands::Query {
            letters,
            prefix,
            suffix,
            length,
            pattern,
            limit,
        } => {
            let dict = open_dictionary(&artifact, limits)?;
            let mut query = Query::new(Rack::parse(&letters)?)
                .with_flags(FlagFilters::from_raw(&prefix, &suffix, length));
            if let Some(pattern) = pattern {
                query = query.with_pattern(PatternFilter::parse(&pattern));
            }
            if let Some(limit) = limit.or(config.limit) {
                query = query.with_limit(limit);
            }

            let result = dict.query(&query)?;
            info!(
                "Visited {} nodes, {} raw candidates, {} matches",
                result.stats.nodes_visited, result.raw_count, result.total
            );
            output(
                cli.format,
                &serde_json::json!({
                    "letters": letters,
                    "count": result.words.len(),
                    "total": result.total,
                    "words": result.words
                }),
            )?;
        }

        Commands::Shell => {
            let dict = open_dictionary(&artifact, limits)?;
            let stdin = io::stdin();
            Shell::new(&dict)
                .with_limit(config.limit)
                .run(stdin.lock(), io::stdout().lock())?;
        }

        Commands::Explore => {
            let dict = open_dictionary(&artifact, limits)?;
            let stdin = io::stdin();
            Explorer::new(dict.trie()).run(stdin.lock(), io::stdout().lock())?;
        }

        Commands::Info => {
            let info = read_info(&artifact)?;
            let dict = open_dictionary(&artifact, limits)?;
            output(
                cli.format,
                &serde_json::json!({
                    "artifact": info.path.display().to_string(),
                    "version": info.version,
                    "nodes": info.node_count,
                    "words": info.word_count,
                    "height": dict.trie().height(),
                    "payload_bytes": info.payload_size,
                    "checksum": info.checksum.to_hex()
                }),
            )?;
        }
    }

    Ok(())
}

fn open_dictionary(path: &Path, limits: SearchLimits) -> anyhow::Result<Dictionary> {
    let dict = Dictionary::open(path)?.with_limits(limits);
    Ok(dict)
}

fn output(format: OutputFormat, value: &serde_json::Value) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string(value)?),
        OutputFormat::Text => println!("{}", serde_json::to_string_pretty(value)?),
    }
    Ok(())
}
