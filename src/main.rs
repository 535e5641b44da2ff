//! Niihau - Main entrypoint.
//!
//! Command-line driver for the Niihau dictionary. It loads configuration,
//! initializes logging and exercises a trie through its public API.

use clap::{Parser, Subcommand};
use niihau_lib::config::{LogConfig, NiihauConfig};
use niihau_lib::data_structures::niihau_trie::{LoaderOptions, NiihauTrie, WordListLoader};
use niihau_lib::error::{get_error_reporting, ErrorContext, NiihauError, NiihauResult};
use std::path::{Path, PathBuf};
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Words inserted by the `demo` subcommand.
const DEMO_WORDS: [&str; 12] = [
    "cat",
    "catalogue",
    "car",
    "cartographer",
    "cart",
    "do",
    "dont",
    "done",
    "frog",
    "from",
    "alice",
    "at",
];

/// Command line arguments for the Niihau dictionary.
#[derive(Parser, Debug)]
#[clap(name = "niihau", version, author, about)]
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
    /// Build the sample dictionary and query a copy of it
    Demo,

    /// Load a word list and answer membership and prefix queries
    Query {
        /// Word list with one word per line
        #[clap(short, long, value_parser)]
        words: PathBuf,

        /// Word to look up (repeatable)
        #[clap(long = "contains", value_parser)]
        contains: Vec<String>,

        /// Prefix to enumerate (repeatable)
        #[clap(long = "prefix", value_parser)]
        prefix: Vec<String>,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr
/// so query results on stdout stay machine-readable.
fn init_logging(log: &LogConfig) -> NiihauResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.pretty().finish())
    };

    result.map_err(|e| NiihauError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

fn print_prefix_matches(trie: &NiihauTrie, prefix: &str) {
    println!("words starting with {prefix}:");
    for word in trie.words_with_prefix(prefix) {
        println!("  {word}");
    }
}

fn run_demo() {
    let original: NiihauTrie = DEMO_WORDS.iter().collect();
    let trie = original.clone();

    println!("trie size: {}", trie.len());
    for word in ["alice", "fred", "ca", "cat"] {
        println!("trie contains {word}: {}", trie.contains(word));
    }
    print_prefix_matches(&trie, "cat");
}

fn run_query(
    config: &NiihauConfig,
    words: &Path,
    contains: &[String],
    prefixes: &[String],
) -> NiihauResult<()> {
    let loader = WordListLoader::new(LoaderOptions::from(&config.dictionary));
    let mut trie = NiihauTrie::new();
    let stats = loader.load_path(&mut trie, words)?;
    info!(
        path = %words.display(),
        words = trie.len(),
        nodes = trie.node_count(),
        skipped = stats.skipped,
        "Word list ready"
    );

    for word in contains {
        println!("contains {word}: {}", trie.contains(word));
    }
    for prefix in prefixes {
        print_prefix_matches(&trie, prefix);
    }
    Ok(())
}

fn generate_config(output: &Path) -> NiihauResult<()> {
    let default_config = NiihauConfig::default();

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let contents = match output.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::to_string_pretty(&default_config)?,
        _ => toml::to_string_pretty(&default_config)
            .map_err(|e| NiihauError::Custom(format!("Failed to serialize config: {e}")))?,
    };

    std::fs::write(output, contents)?;
    info!("Default configuration written to {:?}", output);
    Ok(())
}

/// Main entry point for the application.
fn main() -> NiihauResult<()> {
    let args = Args::parse();

    let config = match niihau_lib::init(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            init_logging(&LogConfig::default())?;
            get_error_reporting().report(&ErrorContext::new(e, "config"));
            process::exit(1);
        }
    };
    init_logging(&config.log)?;

    let result = match args.command.unwrap_or(Command::Demo) {
        Command::Demo => {
            run_demo();
            Ok(())
        }
        Command::Query {
            words,
            contains,
            prefix,
        } => run_query(&config, &words, &contains, &prefix),
        Command::Validate => {
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => generate_config(&output),
    };

    if let Err(e) = result {
        get_error_reporting().report(&ErrorContext::new(e, "niihau"));
        process::exit(1);
    }
    Ok(())
}
