//! Hua Complete - Main entrypoint.
//!
//! Command-line front end for the Hua Trie. It loads configuration, sets up
//! logging, builds a trie from a word list and prints completions.

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use hua_complete_lib::config::{ConfigLoader, HuaConfig, LogConfig, ENV_PREFIX};
use hua_complete_lib::data_structures::HuaTrie;
use hua_complete_lib::error::{HuaError, HuaResult};
use hua_complete_lib::utils::{build_trie, load_words, DEMO_WORDS};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for Hua Complete.
#[derive(Parser, Debug)]
#[clap(name = "hua-complete", version, author, about)]
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
    /// Complete prefixes against the built-in sample words
    Demo,

    /// Print the words from a word list that start with a prefix
    Complete {
        /// Word list file (one word per line, or a JSON array)
        #[clap(short, long, value_parser)]
        words: PathBuf,

        /// Prefix to complete
        prefix: String,

        /// Maximum number of completions to print
        #[clap(short, long)]
        limit: Option<usize>,
    },

    /// Check whether a word is in a word list
    Check {
        /// Word list file (one word per line, or a JSON array)
        #[clap(short, long, value_parser)]
        words: PathBuf,

        /// Word to look up
        word: String,
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
fn init_logging(log: &LogConfig) -> HuaResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(log.source_location)
        .with_line_number(log.source_location)
        .with_writer(std::io::stderr);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| HuaError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Loads a word list and builds a trie from it.
fn load_trie(config: &HuaConfig, words: &Path) -> HuaResult<HuaTrie> {
    let words = load_words(words)?;
    let trie = build_trie(words, config.trie.trie_config()?);
    info!(words = trie.len(), nodes = trie.node_count(), "Trie built");
    Ok(trie)
}

/// Main entry point for the application.
fn main() -> HuaResult<()> {
    let args = <Args as clap::Parser>::parse();

    let config_loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);
    let config = match config_loader.load() {
        Ok(config) => config,
        Err(e) => {
            init_logging(&LogConfig::default())?;
            tracing::error!("Configuration error: {}", e);
            process::exit(1);
        }
    };

    init_logging(&config.log)?;

    match args.command.unwrap_or(Command::Demo) {
        Command::Demo => {
            let trie = build_trie(DEMO_WORDS, config.trie.trie_config()?);
            for prefix in ["pika", "squ", "pikachu"] {
                let matches = trie.get_prefix_matches(prefix, config.trie.default_max_results);
                println!("{prefix}: {matches:?}");
            }
            Ok(())
        }
        Command::Complete {
            words,
            prefix,
            limit,
        } => {
            let trie = load_trie(&config, &words)?;
            let limit = limit.or(config.trie.default_max_results);
            for word in trie.get_prefix_matches(&prefix, limit) {
                println!("{word}");
            }
            Ok(())
        }
        Command::Check { words, word } => {
            let trie = load_trie(&config, &words)?;
            if trie.has_word(&word) {
                println!("{word}: found");
                Ok(())
            } else {
                println!("{word}: not found");
                process::exit(1);
            }
        }
        Command::Validate => {
            info!("Configuration validated successfully");
            println!("Configuration is valid");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = HuaConfig::default();

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| HuaError::Custom(format!("Failed to serialize config: {e}")))?;

            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}
