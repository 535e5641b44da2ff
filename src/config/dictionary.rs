//! Dictionary configuration module.
//!
//! This module defines how word lists are read into a trie.

use super::{ConfigResult, Validate};
use crate::data_structures::niihau_trie::LoaderOptions;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Word list loading configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Trim leading and trailing whitespace from every line
    pub trim_whitespace: bool,

    /// Skip blank lines instead of inserting the empty word
    pub skip_blank_lines: bool,

    /// Lines starting with this prefix are ignored (None disables comments)
    pub comment_prefix: Option<String>,

    /// Maximum word length in characters
    pub max_word_len: usize,

    /// Fail the whole load on an over-long word instead of skipping it
    pub strict: bool,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        let options = LoaderOptions::default();
        Self {
            trim_whitespace: options.trim_whitespace,
            skip_blank_lines: options.skip_blank_lines,
            comment_prefix: options.comment_prefix,
            max_word_len: options.max_word_len,
            strict: options.strict,
        }
    }
}

impl Validate for DictionaryConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_word_len == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "dictionary.max_word_len".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        if self.comment_prefix.as_deref() == Some("") {
            return Err(ConfigError::ValidationError(
                "dictionary.comment_prefix must not be empty; omit it to disable comments"
                    .to_string(),
            ));
        }

        Ok(())
    }
}

impl From<&DictionaryConfig> for LoaderOptions {
    fn from(config: &DictionaryConfig) -> Self {
        LoaderOptions::new()
            .with_trim_whitespace(config.trim_whitespace)
            .with_skip_blank_lines(config.skip_blank_lines)
            .with_comment_prefix(config.comment_prefix.clone())
            .with_max_word_len(config.max_word_len)
            .with_strict(config.strict)
    }
}
