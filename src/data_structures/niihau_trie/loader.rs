// Copyright (c) 2025 Niihau Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Line-oriented word list loading.
//!
//! Each line of the input is one word. Lines may be trimmed, blank lines and
//! comment lines may be skipped, and over-long words are either rejected or
//! skipped depending on [`LoaderOptions::strict`].

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, warn};

use super::{NiihauTrie, NiihauTrieError, NiihauTrieResult};

/// Options controlling how a word list is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderOptions {
    /// Trim leading and trailing whitespace from every line
    pub trim_whitespace: bool,

    /// Skip blank lines instead of inserting the empty word
    pub skip_blank_lines: bool,

    /// Lines starting with this prefix are ignored
    pub comment_prefix: Option<String>,

    /// Maximum word length in characters
    pub max_word_len: usize,

    /// Fail on over-long words instead of skipping them
    pub strict: bool,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            trim_whitespace: true,
            skip_blank_lines: true,
            comment_prefix: Some("#".to_string()),
            max_word_len: 1024,
            strict: false,
        }
    }
}

impl LoaderOptions {
    /// Creates the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether lines are trimmed.
    pub fn with_trim_whitespace(mut self, trim_whitespace: bool) -> Self {
        self.trim_whitespace = trim_whitespace;
        self
    }

    /// Sets whether blank lines are skipped.
    pub fn with_skip_blank_lines(mut self, skip_blank_lines: bool) -> Self {
        self.skip_blank_lines = skip_blank_lines;
        self
    }

    /// Sets the comment prefix, or disables comments with `None`.
    pub fn with_comment_prefix<S: Into<String>>(mut self, comment_prefix: Option<S>) -> Self {
        self.comment_prefix = comment_prefix.map(Into::into);
        self
    }

    /// Sets the maximum word length in characters.
    pub fn with_max_word_len(mut self, max_word_len: usize) -> Self {
        self.max_word_len = max_word_len;
        self
    }

    /// Checks that the options can accept at least one word.
    ///
    /// # Errors
    ///
    /// Returns `NiihauTrieError::InvalidOptions` if `max_word_len` is zero or
    /// `comment_prefix` is empty, since either would skip every line.
    pub fn validate(&self) -> NiihauTrieResult<()> {
        if self.max_word_len == 0 {
            return Err(NiihauTrieError::InvalidOptions {
                option: "max_word_len",
                message: "must be greater than 0".to_string(),
            });
        }

        if self.comment_prefix.as_deref() == Some("") {
            return Err(NiihauTrieError::InvalidOptions {
                option: "comment_prefix",
                message: "must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Sets whether over-long words are an error.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// Counters describing one load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Lines read from the source
    pub lines: usize,
    /// Words that were new to the trie
    pub inserted: usize,
    /// Words that were already stored
    pub duplicates: usize,
    /// Lines ignored as blank, comment or over-long
    pub skipped: usize,
}

/// Feeds line-oriented word lists into a [`NiihauTrie`].
#[derive(Debug, Clone, Default)]
pub struct WordListLoader {
    options: LoaderOptions,
}

impl WordListLoader {
    /// Creates a loader with the given options.
    pub fn new(options: LoaderOptions) -> Self {
        Self { options }
    }

    /// Returns the loader options.
    pub fn options(&self) -> &LoaderOptions {
        &self.options
    }

    /// Reads every line of `reader` into `trie`.
    ///
    /// Each word is checked before it is inserted, so a rejected word leaves
    /// no trace in the trie. Words read before an error stay inserted.
    ///
    /// # Errors
    ///
    /// * `NiihauTrieError::InvalidOptions` - If the options fail [`LoaderOptions::validate`].
    /// * `NiihauTrieError::Io` - If reading fails, including invalid UTF-8.
    /// * `NiihauTrieError::WordTooLong` - If a word is too long in strict mode.
    pub fn load_reader<R: BufRead>(
        &self,
        trie: &mut NiihauTrie,
        reader: R,
    ) -> NiihauTrieResult<LoadStats> {
        self.options.validate()?;
        let mut stats = LoadStats::default();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = index + 1;
            stats.lines += 1;

            let word = if self.options.trim_whitespace {
                line.trim()
            } else {
                line.as_str()
            };

            if word.is_empty() && self.options.skip_blank_lines {
                stats.skipped += 1;
                continue;
            }

            if let Some(prefix) = self.options.comment_prefix.as_deref() {
                if word.starts_with(prefix) {
                    stats.skipped += 1;
                    continue;
                }
            }

            let length = word.chars().count();
            if length > self.options.max_word_len {
                if self.options.strict {
                    return Err(NiihauTrieError::WordTooLong {
                        line: line_number,
                        length,
                        max_len: self.options.max_word_len,
                    });
                }
                warn!(
                    line = line_number,
                    length,
                    max_len = self.options.max_word_len,
                    "Skipping over-long word"
                );
                stats.skipped += 1;
                continue;
            }

            if trie.insert(word) {
                stats.inserted += 1;
            } else {
                stats.duplicates += 1;
            }
        }

        debug!(
            lines = stats.lines,
            inserted = stats.inserted,
            duplicates = stats.duplicates,
            skipped = stats.skipped,
            "Word list loaded"
        );
        Ok(stats)
    }

    /// Opens `path` and reads it into `trie`.
    ///
    /// # Errors
    ///
    /// * `NiihauTrieError::Open` - If the file cannot be opened.
    /// * Any error returned by [`load_reader`](Self::load_reader).
    pub fn load_path<P: AsRef<Path>>(
        &self,
        trie: &mut NiihauTrie,
        path: P,
    ) -> NiihauTrieResult<LoadStats> {
        self.options.validate()?;
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| NiihauTrieError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "Loading word list");
        self.load_reader(trie, BufReader::new(file))
    }
}
