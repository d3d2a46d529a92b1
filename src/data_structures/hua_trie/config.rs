//! Configuration for the Hua Trie.

/// Default maximum word length, in characters.
pub const DEFAULT_MAX_WORD_LENGTH: usize = 256;

/// Largest accepted `max_word_length`.
///
/// Lookups, counting and drop walk the trie iteratively, but the derived
/// `Clone`, `PartialEq` and `Debug` impls still recurse once per character.
pub const MAX_WORD_LENGTH_LIMIT: usize = 1024;

/// Configuration for the Hua Trie.
///
/// Words are always lowercased before storage, so there is no case
/// sensitivity switch here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuaTrieConfig {
    /// Maximum number of characters in a stored word, which is also the
    /// depth of the deepest node.
    max_word_length: usize,
}

impl HuaTrieConfig {
    /// Create a new default configuration.
    ///
    /// Default values:
    /// - max_word_length: 256
    pub fn new() -> Self {
        Self {
            max_word_length: DEFAULT_MAX_WORD_LENGTH,
        }
    }

    /// Set the maximum word length in characters.
    ///
    /// # Panics
    ///
    /// Panics if `max_word_length` is zero or above [`MAX_WORD_LENGTH_LIMIT`].
    pub fn with_max_word_length(mut self, max_word_length: usize) -> Self {
        if max_word_length == 0 {
            panic!("Maximum word length must be greater than 0");
        }
        if max_word_length > MAX_WORD_LENGTH_LIMIT {
            panic!("Maximum word length must not exceed {MAX_WORD_LENGTH_LIMIT}");
        }
        self.max_word_length = max_word_length;
        self
    }

    /// Get the maximum word length.
    pub fn max_word_length(&self) -> usize {
        self.max_word_length
    }
}

impl Default for HuaTrieConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HuaTrieConfig::default();
        assert_eq!(config.max_word_length(), DEFAULT_MAX_WORD_LENGTH);
    }

    #[test]
    fn test_builder() {
        let config = HuaTrieConfig::new().with_max_word_length(8);
        assert_eq!(config.max_word_length(), 8);
    }

    #[test]
    #[should_panic(expected = "Maximum word length must be greater than 0")]
    fn test_zero_length_panics() {
        let _ = HuaTrieConfig::new().with_max_word_length(0);
    }

    #[test]
    fn test_limit_is_accepted() {
        let config = HuaTrieConfig::new().with_max_word_length(MAX_WORD_LENGTH_LIMIT);
        assert_eq!(config.max_word_length(), MAX_WORD_LENGTH_LIMIT);
    }

    #[test]
    #[should_panic(expected = "Maximum word length must not exceed 1024")]
    fn test_length_above_limit_panics() {
        let _ = HuaTrieConfig::new().with_max_word_length(MAX_WORD_LENGTH_LIMIT + 1);
    }
}
