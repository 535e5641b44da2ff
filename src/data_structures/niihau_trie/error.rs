//! Error types for the Niihau Trie.
//!
//! The trie itself never fails; these errors come from feeding it word lists.

use std::path::PathBuf;

/// Errors that can occur while loading words into a Niihau Trie.
#[derive(Debug, thiserror::Error)]
pub enum NiihauTrieError {
    /// Error when a word exceeds the configured maximum length.
    #[error("Word on line {line} has {length} characters, exceeding the maximum of {max_len}")]
    WordTooLong {
        /// The 1-based line number of the word.
        line: usize,
        /// The length of the word in characters.
        length: usize,
        /// The maximum allowed length.
        max_len: usize,
    },

    /// Error when the loader options can never accept a word.
    #[error("Invalid loader option {option}: {message}")]
    InvalidOptions {
        /// The offending option.
        option: &'static str,
        /// Why the value is rejected.
        message: String,
    },

    /// Error when a word list file cannot be opened.
    #[error("Failed to open word list {}: {source}", .path.display())]
    Open {
        /// The path that could not be opened.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Error when reading from the word source fails.
    #[error("Failed to read word list: {0}")]
    Io(#[from] std::io::Error),
}
