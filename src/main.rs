//! bmsearch - command line entrypoint.
//!
//! Loads configuration, initializes logging and runs substring searches over
//! a text given on the command line, read from a file, or piped on stdin.

use std::borrow::Cow;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use bmsearch_lib::config::{AlgorithmKind, BmSearchConfig, ConfigLoader, LogConfig, SearchConfig, ENV_PREFIX};
use bmsearch_lib::error::{
    get_error_reporting, set_error_reporter, BmSearchError, BmSearchResult, ErrorContext,
    TracingErrorReporter,
};
use bmsearch_lib::search::boyer_moore::BoyerMooreError;
use bmsearch_lib::search::{find_all_patterns_with, PatternSet};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{info, warn};

/// Sample text searched by the `demo` command.
const DEMO_TEXT: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, \
    sed do eiusmod tempor incididunt ut labore et dolore magna aliqua";

/// Pattern searched by the `demo` command.
const DEMO_PATTERN: &str = "pisci";

/// Command line arguments for bmsearch.
#[derive(Parser, Debug)]
#[clap(name = "bmsearch", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Search a text for one or more patterns, in order
    Search {
        /// Text to search
        #[clap(short, long, conflicts_with = "file")]
        text: Option<String>,

        /// File to search; standard input is read when neither --text nor --file is given
        #[clap(short, long, value_parser)]
        file: Option<PathBuf>,

        /// Search strategy, overriding the configuration
        #[clap(short, long, value_enum)]
        algorithm: Option<AlgorithmKind>,

        /// Report matches that start inside the previous match
        #[clap(long)]
        overlapping: bool,

        /// Print one JSON object per match
        #[clap(long)]
        json: bool,

        /// Patterns to search for
        #[clap(required = true)]
        patterns: Vec<String>,
    },

    /// Search the built-in sample text
    Demo,

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// One reported match.
#[derive(Debug, Serialize)]
struct MatchRecord<'a> {
    pattern: Cow<'a, str>,
    offset: usize,
    length: usize,
}

/// Initialize the logging system.
fn init_logging(log: &LogConfig) -> BmSearchResult<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let installed = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    installed.map_err(|e| BmSearchError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

fn write_match(out: &mut dyn Write, pattern: &[u8], offset: usize, json: bool) -> BmSearchResult<()> {
    let record = MatchRecord {
        pattern: String::from_utf8_lossy(pattern),
        offset,
        length: pattern.len(),
    };

    if json {
        serde_json::to_writer(&mut *out, &record)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}\t{}", record.offset, record.pattern)?;
    }
    Ok(())
}

/// Searches `text` for every pattern in order and writes each match to `out`.
///
/// Returns the number of matches written.
fn run_search(
    config: &SearchConfig,
    text: &[u8],
    patterns: &[String],
    json: bool,
    out: &mut dyn Write,
) -> BmSearchResult<usize> {
    let patterns: Vec<&String> = patterns
        .iter()
        .filter(|pattern| {
            if pattern.is_empty() {
                warn!("Skipping empty pattern");
            }
            !pattern.is_empty()
        })
        .collect();

    let mut count = 0;
    match config.algorithm {
        AlgorithmKind::BoyerMoore => {
            let set = PatternSet::with_options(patterns.iter().map(|p| p.as_bytes()), &config.matcher_options())?;
            for (pattern, offset) in set.find_all(text) {
                write_match(out, pattern, offset, json)?;
                count += 1;
            }
        }
        kind => {
            if let Some(pattern) = patterns.iter().find(|p| p.len() > config.max_pattern_len) {
                return Err(BoyerMooreError::PatternTooLarge {
                    len: pattern.len(),
                    max: config.max_pattern_len,
                }
                .into());
            }

            let matches = find_all_patterns_with(kind.algorithm(), text, &patterns)
                .allow_overlapping(config.allow_overlapping);
            for (pattern, offset) in matches {
                write_match(out, pattern.as_bytes(), offset, json)?;
                count += 1;
            }
        }
    }

    info!(
        algorithm = config.algorithm.algorithm().name(),
        patterns = patterns.len(),
        text_len = text.len(),
        matches = count,
        "Search finished"
    );
    Ok(count)
}

fn read_text(text: Option<String>, file: Option<PathBuf>) -> BmSearchResult<Vec<u8>> {
    match (text, file) {
        (Some(text), _) => Ok(text.into_bytes()),
        (None, Some(path)) => Ok(std::fs::read(path)?),
        (None, None) => {
            let mut buffer = Vec::new();
            io::stdin().lock().read_to_end(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn run(args: Args) -> BmSearchResult<()> {
    let loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);
    let loaded = loader.load();

    // Logging comes up before the configuration error, if any, is reported
    let log = loaded.as_ref().map(|c| c.log.clone()).unwrap_or_default();
    init_logging(&log)?;
    set_error_reporter(Arc::new(TracingErrorReporter));

    let mut config = loaded?;

    match args.command.unwrap_or(Command::Demo) {
        Command::Search {
            text,
            file,
            algorithm,
            overlapping,
            json,
            patterns,
        } => {
            if let Some(algorithm) = algorithm {
                config.search.algorithm = algorithm;
            }
            config.search.allow_overlapping |= overlapping;

            let text = read_text(text, file)?;
            let stdout = io::stdout();
            let mut out = stdout.lock();
            run_search(&config.search, &text, &patterns, json, &mut out)?;
            out.flush()?;
            Ok(())
        }
        Command::Demo => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            let patterns = [DEMO_PATTERN.to_string()];
            run_search(&config.search, DEMO_TEXT.as_bytes(), &patterns, false, &mut out)?;
            out.flush()?;
            Ok(())
        }
        Command::Validate => {
            info!("Configuration validated successfully");
            println!("Configuration is valid");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = BmSearchConfig::default();

            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| BmSearchError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}

/// Main entry point for the application.
fn main() {
    let args = Args::parse();

    if let Err(error) = run(args) {
        get_error_reporting().report(ErrorContext::new(error, "bmsearch"));
        process::exit(1);
    }
}
