//! Trie configuration module.
//!
//! This module defines the settings used when building tries from word lists
//! and answering completion queries.

use super::{ConfigResult, Validate};
use crate::data_structures::hua_trie::{
    HuaTrieConfig, DEFAULT_MAX_WORD_LENGTH, MAX_WORD_LENGTH_LIMIT,
};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Trie settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrieSettings {
    /// Maximum number of characters in a stored word
    pub max_word_length: usize,

    /// Number of completions returned when a query gives no limit
    /// (None for unbounded)
    pub default_max_results: Option<usize>,
}

impl Default for TrieSettings {
    fn default() -> Self {
        Self {
            max_word_length: DEFAULT_MAX_WORD_LENGTH,
            default_max_results: None,
        }
    }
}

impl Validate for TrieSettings {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_word_length == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "trie.max_word_length".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        if self.max_word_length > MAX_WORD_LENGTH_LIMIT {
            return Err(ConfigError::ValueOutOfRange {
                key: "trie.max_word_length".to_string(),
                message: format!("must not exceed {MAX_WORD_LENGTH_LIMIT}"),
            });
        }

        if self.default_max_results == Some(0) {
            return Err(ConfigError::ValueOutOfRange {
                key: "trie.default_max_results".to_string(),
                message: "must be greater than 0 when set".to_string(),
            });
        }

        Ok(())
    }
}

impl TrieSettings {
    /// Builds the trie configuration described by these settings.
    ///
    /// # Returns
    ///
    /// * `Ok(HuaTrieConfig)` if the settings are valid
    /// * `Err(ConfigError)` if validation fails
    pub fn trie_config(&self) -> ConfigResult<HuaTrieConfig> {
        self.validate()?;
        Ok(HuaTrieConfig::new().with_max_word_length(self.max_word_length))
    }
}
