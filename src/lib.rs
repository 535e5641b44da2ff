//! Niihau Dictionary Library
//!
//! This library contains the Niihau Trie, an in-memory prefix tree for
//! storing words, answering membership queries and enumerating words by
//! prefix, along with the configuration, error handling and word list
//! loading that surround it. The `niihau` binary is a thin driver over
//! this library.
//!
//! # Architecture
//!
//! - `data_structures::niihau_trie` holds the trie, its lock-protected
//!   `SharedTrie` wrapper and the word list loader
//! - `config` loads and validates settings from files and the environment
//! - `error` defines the crate error type and the error reporting hook

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

use std::path::Path;
use std::sync::Arc;

/// Version information for the Niihau dictionary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function.
///
/// Installs the tracing error reporter and loads the configuration from
/// `config_path` (if any) and `NIIHAU__*` environment variables.
///
/// # Errors
///
/// Returns `NiihauError::Config` if the configuration cannot be loaded or is invalid.
pub fn init(config_path: Option<&Path>) -> error::NiihauResult<config::NiihauConfig> {
    error::set_error_reporter(Arc::new(error::TracingErrorReporter));

    let loader = config::ConfigLoader::new(config_path, config::ENV_PREFIX);
    Ok(loader.load()?)
}
